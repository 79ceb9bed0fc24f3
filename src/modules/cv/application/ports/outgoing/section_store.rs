// section_store.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::cv::domain::entities::{
    Certification, Education, Language, Project, SectionKind, Skill, WorkExperience,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SectionStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid section payload: {0}")]
    InvalidPayload(String),
}

/// Shape descriptor tying a section item type to its store-level
/// discriminator. Implemented once per section kind; this is what lets
/// a single generic store serve all six collections.
pub trait SectionItem:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    const KIND: SectionKind;
}

impl SectionItem for WorkExperience {
    const KIND: SectionKind = SectionKind::WorkExperience;
}

impl SectionItem for Education {
    const KIND: SectionKind = SectionKind::Education;
}

impl SectionItem for Skill {
    const KIND: SectionKind = SectionKind::Skills;
}

impl SectionItem for Language {
    const KIND: SectionKind = SectionKind::Languages;
}

impl SectionItem for Certification {
    const KIND: SectionKind = SectionKind::Certifications;
}

impl SectionItem for Project {
    const KIND: SectionKind = SectionKind::Projects;
}

/// Store port over one child collection.
///
/// `replace_all` is deliberately the only write: the persistence
/// strategy is replace-on-write (delete by parent, then bulk insert
/// with `display_order` = slice position). Keeping that behind this
/// trait means a diffed upsert could be swapped in later without
/// touching any caller.
#[async_trait]
pub trait SectionStore<T: SectionItem>: Send + Sync {
    /// Lists the parent's items ordered by `display_order` ascending.
    async fn list_by_parent(&self, cv_id: Uuid) -> Result<Vec<T>, SectionStoreError>;

    /// Deletes every item of the parent and re-inserts `items`,
    /// assigning a dense 0-based `display_order` from slice position.
    /// If the insert fails after the delete, the section is left empty;
    /// a re-save repairs it.
    async fn replace_all(&self, cv_id: Uuid, items: &[T]) -> Result<(), SectionStoreError>;
}

/// The six store handles the aggregate use cases fan out over. Injected
/// at composition time; the use cases never construct stores themselves.
#[derive(Clone)]
pub struct SectionStores {
    pub experiences: Arc<dyn SectionStore<WorkExperience>>,
    pub educations: Arc<dyn SectionStore<Education>>,
    pub skills: Arc<dyn SectionStore<Skill>>,
    pub languages: Arc<dyn SectionStore<Language>>,
    pub certifications: Arc<dyn SectionStore<Certification>>,
    pub projects: Arc<dyn SectionStore<Project>>,
}
