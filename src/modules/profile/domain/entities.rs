use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only view of the professional's profile, owned by the external
/// profile collaborator. The CV module consumes it for prefilling a
/// first CV and for the rendered document header; it never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub user_id: Uuid,
    pub display_name: String,
    pub title: String,
    pub location: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    /// Unordered free-text skill names as the profile records them.
    pub skill_names: Vec<String>,
    pub photo_url: String,
}
