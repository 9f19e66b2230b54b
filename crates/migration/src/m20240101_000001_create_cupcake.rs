//! Create `cupcake` table.
//!
//! Single entity of the API; identity is a storage-assigned serial id.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cupcake::Table)
                    .if_not_exists()
                    .col(pk_auto(Cupcake::Id))
                    .col(string(Cupcake::Flavor).not_null())
                    .col(string(Cupcake::Size).not_null())
                    .col(double(Cupcake::Rating).not_null())
                    .col(string(Cupcake::Image).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cupcake::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cupcake { Table, Id, Flavor, Size, Rating, Image }
