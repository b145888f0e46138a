//! CLI command implementations

pub mod config;
pub mod definition;
#[cfg(feature = "serve")]
pub mod serve;

pub use definition::{Cli, Commands};
