use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260112_000001_create_categories_table::Categories,
    m20260112_000002_create_users_table::Users,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(pk_auto(Reviews::ReviewId))
                    .col(string(Reviews::Title))
                    .col(string(Reviews::Category))
                    .col(string(Reviews::Designer))
                    .col(string(Reviews::Owner))
                    .col(text(Reviews::ReviewBody))
                    .col(string(Reviews::ReviewImgUrl))
                    .col(
                        timestamp_with_time_zone(Reviews::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Reviews::Votes).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_category")
                            .from(Reviews::Table, Reviews::Category)
                            .to(Categories::Table, Categories::Slug)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_owner")
                            .from(Reviews::Table, Reviews::Owner)
                            .to(Users::Table, Users::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    ReviewId,
    Title,
    Category,
    Designer,
    Owner,
    ReviewBody,
    ReviewImgUrl,
    CreatedAt,
    Votes,
}
