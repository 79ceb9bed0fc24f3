use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CvSectionItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CvSectionItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(CvSectionItems::CvId).uuid().not_null())
                    .col(
                        ColumnDef::new(CvSectionItems::Kind)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CvSectionItems::DisplayOrder)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CvSectionItems::Payload)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CvSectionItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cv_section_items_cv_id")
                            .from(CvSectionItems::Table, CvSectionItems::CvId)
                            .to(CvDocuments::Table, CvDocuments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Every read is "this parent, this kind, in display order".
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_cv_section_items_parent_kind_order
                ON cv_section_items (cv_id, kind, display_order);
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
                DROP INDEX IF EXISTS idx_cv_section_items_parent_kind_order;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CvSectionItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CvSectionItems {
    Table,
    Id,
    CvId,
    Kind,
    DisplayOrder,
    Payload,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CvDocuments {
    Table,
    Id,
}
