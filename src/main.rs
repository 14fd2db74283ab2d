//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Front-matter parsing and post catalog for a portfolio blog", long_about = None)]
struct Cli {
    /// Set the site root (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or categories
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only list posts in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show a single post by slug
    Show {
        slug: String,

        /// Render the body to HTML
        #[arg(long)]
        html: bool,
    },

    /// Export post summaries as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// File name (without extension) for the new post
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type, category } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&site, &r#type, category.as_deref())?;
        }

        Commands::Show { slug, html } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&site, &slug, html)?;
        }

        Commands::Export { output } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::export::run(&site, output.as_deref())?;
        }

        Commands::New { title, name } => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            folio::commands::new::run(&site, &title, name.as_deref())?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
