use std::sync::Arc;
use tracing::{info, instrument};

use super::repository::WordRepository;
use super::WordEntry;
use crate::errors::ServiceError;
use crate::translator::Translator;

/// Application service for the word store.
/// Owns the uniqueness policy and the translation step; storage goes through `R`.
pub struct WordService<R: WordRepository> {
    repo: Arc<R>,
    translator: Arc<dyn Translator>,
}

impl<R: WordRepository> WordService<R> {
    pub fn new(repo: Arc<R>, translator: Arc<dyn Translator>) -> Self {
        Self { repo, translator }
    }

    /// Store `word` with its translation.
    ///
    /// Fails with `Duplicate` if the exact word is already stored; nothing is
    /// written in that case and the translator is not called.
    #[instrument(skip(self))]
    pub async fn add(&self, word: &str) -> Result<WordEntry, ServiceError> {
        models::word::validate_word(word).map_err(|e| ServiceError::from_model(e, word))?;
        if self.repo.find_by_word(word).await?.is_some() {
            info!(event = "duplicate_word", "word already stored");
            return Err(ServiceError::Duplicate(word.to_string()));
        }
        let translation = self.translator.translate(word).await?;
        let created = self.repo.insert(word, &translation).await?;
        info!(event = "word_added", id = created.id, "stored word");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<WordEntry>, ServiceError> {
        self.repo.list().await
    }

    /// Permanently remove the entry with `id`.
    ///
    /// Ids outside the stored column range were never assigned and report `NotFound`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let Ok(key) = i32::try_from(id) else {
            return Err(ServiceError::NotFound(id));
        };
        if !self.repo.delete(key).await? {
            return Err(ServiceError::NotFound(id));
        }
        info!(event = "word_deleted", id, "deleted word");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use crate::translator::SuffixTranslator;
    use crate::word::repository::{mock::InMemoryWordRepository, SeaOrmWordRepository};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn mock_service() -> WordService<InMemoryWordRepository> {
        WordService::new(Arc::new(InMemoryWordRepository::default()), Arc::new(SuffixTranslator::default()))
    }

    #[derive(Default)]
    struct CountingTranslator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Translator for CountingTranslator {
        async fn translate(&self, word: &str) -> Result<String, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(word.to_uppercase())
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(&self, _word: &str) -> Result<String, ServiceError> {
            Err(ServiceError::Translation("backend unavailable".into()))
        }
    }

    #[tokio::test]
    async fn add_returns_translated_entry() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        let entry = svc.add("hello").await?;
        assert_eq!(entry, WordEntry { id: 1, word: "hello".into(), translation: "hello_translated".into() });
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected_without_translating() -> Result<(), anyhow::Error> {
        let translator = Arc::new(CountingTranslator::default());
        let svc = WordService::new(Arc::new(InMemoryWordRepository::default()), translator.clone());

        svc.add("hello").await?;
        let err = svc.add("hello").await.unwrap_err();
        assert!(matches!(err, ServiceError::Duplicate(_)));
        assert_eq!(err.to_string(), "Word already exists.");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
        assert_eq!(svc.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_word_is_a_validation_error() {
        let svc = mock_service();
        let err = svc.add("").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn translator_failure_stores_nothing() {
        let svc = WordService::new(Arc::new(InMemoryWordRepository::default()), Arc::new(FailingTranslator));
        let err = svc.add("hello").await.unwrap_err();
        assert!(matches!(err, ServiceError::Translation(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        svc.add("kept").await?;
        let err = svc.delete(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(42)));
        assert_eq!(err.to_string(), "Word not found.");
        assert_eq!(svc.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn delete_out_of_range_id_is_not_found() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        svc.add("kept").await?;
        let too_big = i64::from(i32::MAX) + 1;
        assert!(matches!(svc.delete(too_big).await, Err(ServiceError::NotFound(id)) if id == too_big));
        assert!(matches!(svc.delete(i64::MIN).await, Err(ServiceError::NotFound(_))));
        assert_eq!(svc.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn list_starts_empty_and_holds_all_added() -> Result<(), anyhow::Error> {
        let svc = mock_service();
        assert!(svc.list().await?.is_empty());
        for w in ["w1", "w2", "w3"] {
            svc.add(w).await?;
        }
        let mut words: Vec<String> = svc.list().await?.into_iter().map(|e| e.word).collect();
        words.sort();
        assert_eq!(words, vec!["w1", "w2", "w3"]);
        Ok(())
    }

    #[tokio::test]
    async fn full_lifecycle_against_sqlite() -> Result<(), anyhow::Error> {
        let repo = Arc::new(SeaOrmWordRepository::new(get_db().await?));
        let svc = WordService::new(repo, Arc::new(SuffixTranslator::default()));

        let entry = svc.add("hello").await?;
        assert_eq!(entry.id, 1);
        assert_eq!(entry.translation, "hello_translated");
        assert!(matches!(svc.add("hello").await, Err(ServiceError::Duplicate(_))));
        assert_eq!(svc.list().await?, vec![entry.clone()]);

        svc.delete(entry.id.into()).await?;
        assert!(svc.list().await?.is_empty());
        assert!(matches!(svc.delete(entry.id.into()).await, Err(ServiceError::NotFound(1))));

        // removed word can be stored again, under a new id
        let again = svc.add("hello").await?;
        assert!(again.id > entry.id);
        Ok(())
    }
}
