//! Word store: repository abstraction and the application service.

pub mod repository;
pub mod service;

pub use service::WordService;

/// A stored word and its translation.
pub type WordEntry = models::word::Model;
