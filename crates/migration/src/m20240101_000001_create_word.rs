//! Create `word` table.
//!
//! `id` is an auto-increment key (AUTOINCREMENT on SQLite, so deleted ids are
//! never handed out again). `word` is unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Word::Table)
                    .if_not_exists()
                    .col(pk_auto(Word::Id))
                    .col(string(Word::Word).not_null())
                    .col(string(Word::Translation).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_word_word_unique")
                    .table(Word::Table)
                    .col(Word::Word)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Word::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Word {
    Table,
    Id,
    Word,
    Translation,
}
