use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::WordEntry;
use crate::errors::ServiceError;

/// Persistence seam for word entries.
///
/// `insert` must reject a `word` that is already stored with
/// `ServiceError::Duplicate`, even when the caller has checked beforehand.
#[async_trait]
pub trait WordRepository: Send + Sync {
    async fn find_by_word(&self, word: &str) -> Result<Option<WordEntry>, ServiceError>;
    async fn insert(&self, word: &str, translation: &str) -> Result<WordEntry, ServiceError>;
    async fn list(&self) -> Result<Vec<WordEntry>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmWordRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmWordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WordRepository for SeaOrmWordRepository {
    async fn find_by_word(&self, word: &str) -> Result<Option<WordEntry>, ServiceError> {
        models::word::find_by_word(&self.db, word)
            .await
            .map_err(ServiceError::Model)
    }

    async fn insert(&self, word: &str, translation: &str) -> Result<WordEntry, ServiceError> {
        models::word::create(&self.db, word, translation)
            .await
            .map_err(|e| ServiceError::from_model(e, word))
    }

    async fn list(&self) -> Result<Vec<WordEntry>, ServiceError> {
        models::word::list_all(&self.db)
            .await
            .map_err(ServiceError::Model)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        models::word::delete(&self.db, id)
            .await
            .map_err(ServiceError::Model)
    }
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Inner {
        rows: BTreeMap<i32, WordEntry>,
        last_id: i32,
    }

    #[derive(Default)]
    pub struct InMemoryWordRepository {
        inner: Mutex<Inner>,
    }

    impl InMemoryWordRepository {
        fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, ServiceError> {
            self.inner.lock().map_err(|e| ServiceError::Db(e.to_string()))
        }
    }

    #[async_trait]
    impl WordRepository for InMemoryWordRepository {
        async fn find_by_word(&self, word: &str) -> Result<Option<WordEntry>, ServiceError> {
            let inner = self.lock()?;
            Ok(inner.rows.values().find(|w| w.word == word).cloned())
        }

        async fn insert(&self, word: &str, translation: &str) -> Result<WordEntry, ServiceError> {
            models::word::validate_word(word).map_err(|e| ServiceError::from_model(e, word))?;
            let mut inner = self.lock()?;
            if inner.rows.values().any(|w| w.word == word) {
                return Err(ServiceError::Duplicate(word.to_string()));
            }
            inner.last_id += 1;
            let entry = WordEntry { id: inner.last_id, word: word.to_string(), translation: translation.to_string() };
            inner.rows.insert(entry.id, entry.clone());
            Ok(entry)
        }

        async fn list(&self) -> Result<Vec<WordEntry>, ServiceError> {
            let inner = self.lock()?;
            Ok(inner.rows.values().cloned().collect())
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut inner = self.lock()?;
            Ok(inner.rows.remove(&id).is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_insert_maps_unique_violation() -> Result<(), anyhow::Error> {
        let repo = SeaOrmWordRepository::new(get_db().await?);

        let first = repo.insert("hello", "hello_translated").await?;
        assert_eq!(first.id, 1);
        // skip the pre-check to hit the storage constraint directly
        let err = repo.insert("hello", "again").await.unwrap_err();
        assert!(matches!(err, ServiceError::Duplicate(ref w) if w == "hello"), "unexpected: {err:?}");
        assert_eq!(repo.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_storage_failure_keeps_model_error() -> Result<(), anyhow::Error> {
        use sea_orm::ConnectionTrait;
        let db = get_db().await?;
        db.execute_unprepared("DROP TABLE word").await?;
        let repo = SeaOrmWordRepository::new(db);

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(models::errors::ModelError::Db(_))), "unexpected: {err:?}");
        assert!(!err.to_string().contains("database error: database error"));
        Ok(())
    }

    #[tokio::test]
    async fn mock_ids_are_monotonic() -> Result<(), anyhow::Error> {
        let repo = mock::InMemoryWordRepository::default();
        let a = repo.insert("a", "a_t").await?;
        assert!(repo.delete(a.id).await?);
        let b = repo.insert("b", "b_t").await?;
        assert!(b.id > a.id);
        assert!(!repo.delete(a.id).await?);
        Ok(())
    }
}
