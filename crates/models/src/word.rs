use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "word")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub word: String,
    pub translation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_word(w: &str) -> Result<(), errors::ModelError> {
    if w.is_empty() {
        return Err(errors::ModelError::Validation("word must not be empty".into()));
    }
    Ok(())
}

/// Insert a new row. A taken `word` comes back as `ModelError::Conflict`.
pub async fn create<C: ConnectionTrait>(db: &C, word: &str, translation: &str) -> Result<Model, errors::ModelError> {
    validate_word(word)?;
    let am = ActiveModel {
        word: Set(word.to_string()),
        translation: Set(translation.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::from_db)
}

/// Exact, case-sensitive lookup by word text.
pub async fn find_by_word<C: ConnectionTrait>(db: &C, word: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Word.eq(word))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All rows, oldest first.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Hard delete; returns true if a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
