use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmissions::Table)
                    .if_not_exists()
                    .col(pk_uuid(ContactSubmissions::Id))
                    .col(string(ContactSubmissions::Name))
                    .col(string(ContactSubmissions::Email))
                    .col(text(ContactSubmissions::Message))
                    .col(string_null(ContactSubmissions::IpAddress))
                    .col(text_null(ContactSubmissions::UserAgent))
                    .col(boolean(ContactSubmissions::Delivered).default(false))
                    .col(
                        timestamp_with_time_zone(ContactSubmissions::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Admin listing orders newest-first
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_submissions_created_at")
                    .table(ContactSubmissions::Table)
                    .col(ContactSubmissions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactSubmissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactSubmissions {
    Table,
    Id,
    Name,
    Email,
    Message,
    IpAddress,
    UserAgent,
    Delivered,
    CreatedAt,
}
