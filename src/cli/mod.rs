//! CLI library modules for the coref binary.
//!
//! Kept in the library so argument handling and input parsing can be
//! tested without spawning the binary.

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use parser::{Cli, Commands, OutputFormat};
