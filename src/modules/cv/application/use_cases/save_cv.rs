use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::cv::application::ports::outgoing::{
    CvDocumentStore, CvDocumentStoreError, CvRootFields, SectionStoreError, SectionStores,
};
use crate::cv::domain::entities::{CvAggregate, SectionKind};

/// One section's replace failed after the root upsert succeeded. The
/// sibling sections were still attempted; nothing is rolled back.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionWriteFailure {
    pub section: SectionKind,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveCvError {
    /// The root upsert failed. Nothing was written: no section write is
    /// attempted before the root id is known.
    #[error("Saving the CV root failed: {0}")]
    Root(String),

    /// The root was written but one or more sections failed. The cv id
    /// is reported so the caller can re-save just the broken sections'
    /// data; successfully written sections are already persisted.
    #[error("CV {cv_id} saved with {} failed section(s)", failures.len())]
    Sections {
        cv_id: Uuid,
        failures: Vec<SectionWriteFailure>,
    },
}

#[async_trait]
pub trait ISaveCvUseCase: Send + Sync {
    /// Persists the whole aggregate for `user_id` and returns the root
    /// id, newly assigned on a first save.
    async fn execute(&self, user_id: Uuid, cv: CvAggregate) -> Result<Uuid, SaveCvError>;
}

/// Replace-on-write persistence of the aggregate.
///
/// The root upsert strictly precedes all section writes (every section
/// row's parent key is the root id). The six section replaces then fan
/// out concurrently; each one deletes the section's rows and re-inserts
/// the in-memory list with a dense display order. There is no
/// cross-table transaction: a concurrent reader can observe the updated
/// root next to a stale or momentarily empty section. That window is an
/// accepted property of the store, not a bug to paper over.
pub struct SaveCvUseCase {
    documents: Arc<dyn CvDocumentStore>,
    sections: SectionStores,
}

impl SaveCvUseCase {
    pub fn new(documents: Arc<dyn CvDocumentStore>, sections: SectionStores) -> Self {
        Self {
            documents,
            sections,
        }
    }
}

#[async_trait]
impl ISaveCvUseCase for SaveCvUseCase {
    async fn execute(&self, user_id: Uuid, cv: CvAggregate) -> Result<Uuid, SaveCvError> {
        let fields = CvRootFields {
            summary: cv.summary.clone(),
            citizenship: cv.citizenship.clone(),
            work_permit: cv.work_permit.clone(),
            has_driving_license: cv.has_driving_license,
        };

        let cv_id = self
            .documents
            .upsert(user_id, &fields)
            .await
            .map_err(|CvDocumentStoreError::DatabaseError(msg)| SaveCvError::Root(msg))?;

        let (experiences, educations, skills, languages, certifications, projects) = tokio::join!(
            self.sections.experiences.replace_all(cv_id, &cv.experiences),
            self.sections.educations.replace_all(cv_id, &cv.educations),
            self.sections.skills.replace_all(cv_id, &cv.skills),
            self.sections.languages.replace_all(cv_id, &cv.languages),
            self.sections.certifications.replace_all(cv_id, &cv.certifications),
            self.sections.projects.replace_all(cv_id, &cv.projects),
        );

        let mut failures = Vec::new();
        collect_failure(SectionKind::WorkExperience, experiences, &mut failures);
        collect_failure(SectionKind::Education, educations, &mut failures);
        collect_failure(SectionKind::Skills, skills, &mut failures);
        collect_failure(SectionKind::Languages, languages, &mut failures);
        collect_failure(SectionKind::Certifications, certifications, &mut failures);
        collect_failure(SectionKind::Projects, projects, &mut failures);

        if failures.is_empty() {
            tracing::debug!("CV {} saved for user {}", cv_id, user_id);
            Ok(cv_id)
        } else {
            Err(SaveCvError::Sections { cv_id, failures })
        }
    }
}

fn collect_failure(
    section: SectionKind,
    result: Result<(), SectionStoreError>,
    failures: &mut Vec<SectionWriteFailure>,
) {
    if let Err(err) = result {
        tracing::error!("Replacing {} section failed: {}", section, err);
        failures.push(SectionWriteFailure {
            section,
            message: err.to_string(),
        });
    }
}
