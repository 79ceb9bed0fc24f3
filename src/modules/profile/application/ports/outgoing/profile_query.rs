// profile_query.rs
use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::domain::entities::ProfileView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Profile lookup failed: {0}")]
    LookupFailed(String),
}

/// Port to the external profile collaborator. Implemented outside this
/// crate by whatever owns profile data (an HTTP client, another module's
/// repository); the CV module only reads through it.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid)
        -> Result<Option<ProfileView>, ProfileQueryError>;
}
