//! Helper functions shared by the catalog and the CLI

mod date;

pub use date::*;
