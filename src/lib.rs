pub mod modules;
pub use modules::cv;
pub use modules::profile;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::cv::adapter::outgoing::{CvDocumentStorePostgres, SectionStorePostgres};
use crate::cv::application::ports::outgoing::SectionStores;
use crate::cv::application::use_cases::{
    load_cv::{ILoadCvUseCase, LoadCvUseCase},
    prefill_cv::{IPrefillCvUseCase, PrefillCvUseCase},
    save_cv::{ISaveCvUseCase, SaveCvUseCase},
};
use crate::profile::application::ports::outgoing::ProfileQuery;

/// Composition root for the CV aggregate core. The surrounding
/// application owns the database handle and the profile collaborator;
/// this wires the Postgres adapters into the three use cases and hands
/// back the interfaces the transport layer talks to.
#[derive(Clone)]
pub struct CvModule {
    pub load_cv_use_case: Arc<dyn ILoadCvUseCase + Send + Sync>,
    pub save_cv_use_case: Arc<dyn ISaveCvUseCase + Send + Sync>,
    pub prefill_cv_use_case: Arc<dyn IPrefillCvUseCase + Send + Sync>,
}

impl CvModule {
    pub fn new(db: Arc<DatabaseConnection>, profiles: Arc<dyn ProfileQuery>) -> Self {
        let documents = Arc::new(CvDocumentStorePostgres::new(db.clone()));
        let sections = SectionStores {
            experiences: Arc::new(SectionStorePostgres::new(db.clone())),
            educations: Arc::new(SectionStorePostgres::new(db.clone())),
            skills: Arc::new(SectionStorePostgres::new(db.clone())),
            languages: Arc::new(SectionStorePostgres::new(db.clone())),
            certifications: Arc::new(SectionStorePostgres::new(db.clone())),
            projects: Arc::new(SectionStorePostgres::new(db)),
        };

        Self {
            load_cv_use_case: Arc::new(LoadCvUseCase::new(documents.clone(), sections.clone())),
            save_cv_use_case: Arc::new(SaveCvUseCase::new(documents, sections)),
            prefill_cv_use_case: Arc::new(PrefillCvUseCase::new(profiles)),
        }
    }
}
