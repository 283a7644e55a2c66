use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(catalog_table(Character::Table)).await?;
        manager.create_table(catalog_table(Vehicle::Table)).await?;
        manager.create_table(catalog_table(Planet::Table)).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

/// Character, vehicle and planet tables share one layout.
fn catalog_table<T: IntoIden>(table: T) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(pk_auto(Catalog::Id))
        .col(string_len_uniq(Catalog::Name, 120))
        .col(string_len(Catalog::Url, 150))
        .to_owned()
}

#[derive(DeriveIden)]
enum Catalog {
    Id,
    Name,
    Url,
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
}
