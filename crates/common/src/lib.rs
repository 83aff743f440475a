//! Shared plumbing for the word store crates.

pub mod types;
pub mod utils;
pub mod env;
