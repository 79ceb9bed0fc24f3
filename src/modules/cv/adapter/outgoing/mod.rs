mod sea_orm_entity;

mod cv_document_postgres;
pub use cv_document_postgres::CvDocumentStorePostgres;

mod section_store_postgres;
pub use section_store_postgres::SectionStorePostgres;
