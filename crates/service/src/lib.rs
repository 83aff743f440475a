//! Service layer providing the word store operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Keeps translation behind a pluggable `Translator`.

pub mod errors;
pub mod translator;
pub mod word;
#[cfg(test)]
pub mod test_support;

pub use word::{WordEntry, WordService};
