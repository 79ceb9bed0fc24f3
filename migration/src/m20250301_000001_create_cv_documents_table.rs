use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CvDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CvDocuments::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(CvDocuments::UserId).uuid().not_null())
                    .col(ColumnDef::new(CvDocuments::Summary).text().not_null())
                    .col(
                        ColumnDef::new(CvDocuments::Citizenship)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CvDocuments::WorkPermit)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CvDocuments::HasDrivingLicense)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CvDocuments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CvDocuments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One CV per professional; the upsert relies on this.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_cv_documents_user_id
                ON cv_documents (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_cv_documents_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CvDocuments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CvDocuments {
    Table,
    Id,
    UserId,
    Summary,
    Citizenship,
    WorkPermit,
    HasDrivingLicense,
    CreatedAt,
    UpdatedAt,
}
