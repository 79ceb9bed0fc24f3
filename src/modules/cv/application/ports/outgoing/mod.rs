pub mod cv_document_store;
pub mod section_store;

pub use cv_document_store::{
    CvDocumentRecord, CvDocumentStore, CvDocumentStoreError, CvRootFields,
};
pub use section_store::{SectionItem, SectionStore, SectionStoreError, SectionStores};
