// cv_document_store.rs
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvDocumentStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Root fields written on every save. The owning professional's key is
/// passed separately because it is the lookup key, not a field the
/// caller may edit.
#[derive(Debug, Clone, PartialEq)]
pub struct CvRootFields {
    pub summary: String,
    pub citizenship: String,
    pub work_permit: String,
    pub has_driving_license: bool,
}

/// A persisted root record as the store returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct CvDocumentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub summary: String,
    pub citizenship: String,
    pub work_permit: String,
    pub has_driving_license: bool,
}

/// Store port for the aggregate root. One record per professional;
/// created lazily by the first `upsert`.
#[async_trait]
pub trait CvDocumentStore: Send + Sync {
    /// Fetches the root owned by `user_id`, or `None` when the
    /// professional has no CV yet.
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<CvDocumentRecord>, CvDocumentStoreError>;

    /// Inserts the root if absent, updates it in place otherwise.
    /// Returns the (possibly newly assigned) root id.
    async fn upsert(
        &self,
        user_id: Uuid,
        fields: &CvRootFields,
    ) -> Result<Uuid, CvDocumentStoreError>;
}
