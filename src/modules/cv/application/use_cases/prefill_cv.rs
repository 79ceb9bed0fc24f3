use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::cv::domain::entities::{CvAggregate, Skill};
use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PrefillCvError {
    /// No profile exists for this key, so there is nothing to prefill
    /// from. The caller should fall back to a blank aggregate.
    #[error("No profile found for this professional")]
    ProfileNotFound,

    #[error("Profile collaborator error: {0}")]
    Profile(String),
}

#[async_trait]
pub trait IPrefillCvUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<CvAggregate, PrefillCvError>;
}

/// Builds the starting aggregate a first-time user sees: the load use
/// case signalled `NotFound`, and instead of a blank form the caller
/// asks for a skeleton derived from the professional's profile. The
/// skeleton has no root id; the first save is what creates the root.
pub struct PrefillCvUseCase {
    profiles: Arc<dyn ProfileQuery>,
}

impl PrefillCvUseCase {
    pub fn new(profiles: Arc<dyn ProfileQuery>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl IPrefillCvUseCase for PrefillCvUseCase {
    async fn execute(&self, user_id: Uuid) -> Result<CvAggregate, PrefillCvError> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await
            .map_err(|ProfileQueryError::LookupFailed(msg)| PrefillCvError::Profile(msg))?
            .ok_or(PrefillCvError::ProfileNotFound)?;

        let mut cv = CvAggregate::empty();
        cv.summary = profile.bio;
        cv.skills = profile
            .skill_names
            .into_iter()
            .map(|name| Skill {
                name,
                category: String::new(),
                level: None,
                years_of_experience: None,
            })
            .collect();

        Ok(cv)
    }
}
