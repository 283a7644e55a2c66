use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(string_len(Favorite::Kind, 16))
                    .col(integer(Favorite::EntityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_user_id")
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_user_kind_entity_unique")
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::Kind)
                    .col(Favorite::EntityId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Global duplicate checks look favorites up by target only.
        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_kind_entity")
                    .table(Favorite::Table)
                    .col(Favorite::Kind)
                    .col(Favorite::EntityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    Kind,
    EntityId,
}
