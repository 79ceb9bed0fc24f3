pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_cv_documents_table;
mod m20250301_000002_create_cv_section_items_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_cv_documents_table::Migration),
            Box::new(m20250301_000002_create_cv_section_items_table::Migration),
        ]
    }
}
