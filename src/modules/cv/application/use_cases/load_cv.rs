use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use uuid::Uuid;

use crate::cv::application::ports::outgoing::{
    CvDocumentStore, CvDocumentStoreError, SectionStoreError, SectionStores,
};
use crate::cv::domain::entities::{CvAggregate, SectionKind};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadCvError {
    /// The professional has no CV yet. Not a failure: the caller is
    /// expected to fall back to the prefill use case.
    #[error("No CV exists for this professional")]
    NotFound,

    #[error("Store error: {0}")]
    Store(String),
}

/// One section fetch failed during merge; the section was loaded as
/// empty so the rest of the CV stays usable.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLoadWarning {
    pub section: SectionKind,
    pub message: String,
}

/// The fully merged aggregate plus any degraded-section warnings. A
/// warning-free result means every empty section really is empty.
#[derive(Debug, Clone)]
pub struct MergedCv {
    pub aggregate: CvAggregate,
    pub warnings: Vec<SectionLoadWarning>,
}

impl MergedCv {
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Two-phase load result. `root_only` is available immediately so the
/// caller is never blocked on six section round-trips; awaiting
/// [`CvLoadPhases::merged`] completes the aggregate. Dropping the
/// phases without awaiting abandons the in-flight section fetches,
/// which is the right behavior when the caller navigates away.
pub struct CvLoadPhases {
    pub root_only: CvAggregate,
    merged: BoxFuture<'static, MergedCv>,
}

impl CvLoadPhases {
    /// Resolves the second phase: all six sections fetched concurrently
    /// and merged, each ordered by its stored display order. The merged
    /// aggregate is always a superset of `root_only`.
    pub async fn merged(self) -> MergedCv {
        self.merged.await
    }
}

#[async_trait]
pub trait ILoadCvUseCase: Send + Sync {
    async fn load(&self, user_id: Uuid) -> Result<CvLoadPhases, LoadCvError>;
}

pub struct LoadCvUseCase {
    documents: Arc<dyn CvDocumentStore>,
    sections: SectionStores,
}

impl LoadCvUseCase {
    pub fn new(documents: Arc<dyn CvDocumentStore>, sections: SectionStores) -> Self {
        Self {
            documents,
            sections,
        }
    }
}

#[async_trait]
impl ILoadCvUseCase for LoadCvUseCase {
    async fn load(&self, user_id: Uuid) -> Result<CvLoadPhases, LoadCvError> {
        let record = self
            .documents
            .find_by_user(user_id)
            .await
            .map_err(|CvDocumentStoreError::DatabaseError(msg)| LoadCvError::Store(msg))?
            .ok_or(LoadCvError::NotFound)?;

        let cv_id = record.id;
        let root_only = CvAggregate::root_only(
            cv_id,
            record.summary,
            record.citizenship,
            record.work_permit,
            record.has_driving_license,
        );

        let base = root_only.clone();
        let stores = self.sections.clone();
        let merged = Box::pin(merge_sections(base, cv_id, stores));

        Ok(CvLoadPhases { root_only, merged })
    }
}

async fn merge_sections(
    mut aggregate: CvAggregate,
    cv_id: Uuid,
    stores: SectionStores,
) -> MergedCv {
    let (experiences, educations, skills, languages, certifications, projects) = tokio::join!(
        stores.experiences.list_by_parent(cv_id),
        stores.educations.list_by_parent(cv_id),
        stores.skills.list_by_parent(cv_id),
        stores.languages.list_by_parent(cv_id),
        stores.certifications.list_by_parent(cv_id),
        stores.projects.list_by_parent(cv_id),
    );

    let mut warnings = Vec::new();
    aggregate.experiences =
        section_or_empty(SectionKind::WorkExperience, experiences, &mut warnings);
    aggregate.educations = section_or_empty(SectionKind::Education, educations, &mut warnings);
    aggregate.skills = section_or_empty(SectionKind::Skills, skills, &mut warnings);
    aggregate.languages = section_or_empty(SectionKind::Languages, languages, &mut warnings);
    aggregate.certifications =
        section_or_empty(SectionKind::Certifications, certifications, &mut warnings);
    aggregate.projects = section_or_empty(SectionKind::Projects, projects, &mut warnings);

    MergedCv {
        aggregate,
        warnings,
    }
}

/// A failed section fetch degrades to an empty list rather than failing
/// the whole load; the warning keeps the degradation visible to callers.
fn section_or_empty<T>(
    section: SectionKind,
    result: Result<Vec<T>, SectionStoreError>,
    warnings: &mut Vec<SectionLoadWarning>,
) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!("Loading {} section failed, serving it empty: {}", section, err);
            warnings.push(SectionLoadWarning {
                section,
                message: err.to_string(),
            });
            Vec::new()
        }
    }
}
