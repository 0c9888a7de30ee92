//! CLI subcommand implementations.

pub mod colors;
pub mod day;
pub mod summary;
pub mod util;
