//! Translation capability used when a word is first stored.

use async_trait::async_trait;

use crate::errors::ServiceError;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, word: &str) -> Result<String, ServiceError>;
}

/// Placeholder translator: `word` followed by a fixed marker.
#[derive(Debug, Clone)]
pub struct SuffixTranslator {
    suffix: String,
}

impl SuffixTranslator {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self { suffix: suffix.into() }
    }
}

impl Default for SuffixTranslator {
    fn default() -> Self {
        Self::new("_translated")
    }
}

#[async_trait]
impl Translator for SuffixTranslator {
    async fn translate(&self, word: &str) -> Result<String, ServiceError> {
        Ok(format!("{word}{}", self.suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_appends_marker() {
        let t = SuffixTranslator::default();
        assert_eq!(t.translate("hello").await.unwrap(), "hello_translated");
    }

    #[tokio::test]
    async fn custom_suffix() {
        let t = SuffixTranslator::new("-fr");
        assert_eq!(t.translate("chat").await.unwrap(), "chat-fr");
        assert_eq!(t.translate("chat").await.unwrap(), t.translate("chat").await.unwrap());
    }
}
