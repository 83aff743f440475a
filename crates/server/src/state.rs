use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::translator::SuffixTranslator;
use service::word::repository::SeaOrmWordRepository;
use service::WordService;

pub type SharedWordService = Arc<WordService<SeaOrmWordRepository>>;

#[derive(Clone)]
pub struct ServerState {
    pub words: SharedWordService,
}

impl ServerState {
    /// Wire the SeaORM repository and the suffix translator around `db`.
    pub fn new(db: DatabaseConnection, suffix: &str) -> Self {
        let repo = Arc::new(SeaOrmWordRepository::new(db));
        let translator = Arc::new(SuffixTranslator::new(suffix));
        Self { words: Arc::new(WordService::new(repo, translator)) }
    }
}
