//! In-memory store implementations honoring the same contracts as the
//! Postgres adapters, including explicit display-order bookkeeping, so
//! the round-trip laws can be exercised without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::cv::application::ports::outgoing::{
    CvDocumentRecord, CvDocumentStore, CvDocumentStoreError, CvRootFields, SectionItem,
    SectionStore, SectionStoreError, SectionStores,
};
use crate::cv::domain::entities::{
    Certification, Education, Language, Project, Skill, WorkExperience,
};

#[derive(Default)]
pub struct MemoryCvDocumentStore {
    records: Mutex<HashMap<Uuid, CvDocumentRecord>>,
}

#[async_trait]
impl CvDocumentStore for MemoryCvDocumentStore {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<CvDocumentRecord>, CvDocumentStoreError> {
        Ok(self.records.lock().unwrap().get(&user_id).cloned())
    }

    async fn upsert(
        &self,
        user_id: Uuid,
        fields: &CvRootFields,
    ) -> Result<Uuid, CvDocumentStoreError> {
        let mut records = self.records.lock().unwrap();
        let record = records.entry(user_id).or_insert_with(|| CvDocumentRecord {
            id: Uuid::new_v4(),
            user_id,
            summary: String::new(),
            citizenship: String::new(),
            work_permit: String::new(),
            has_driving_license: false,
        });
        record.summary = fields.summary.clone();
        record.citizenship = fields.citizenship.clone();
        record.work_permit = fields.work_permit.clone();
        record.has_driving_license = fields.has_driving_license;
        Ok(record.id)
    }
}

/// Rows keyed by parent, each carrying its persisted display order so
/// tests can assert density and ordering directly.
pub struct MemorySectionStore<T> {
    rows: Mutex<HashMap<Uuid, Vec<(i32, T)>>>,
    fail_insert: AtomicBool,
}

impl<T: Clone> MemorySectionStore<T> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            fail_insert: AtomicBool::new(false),
        }
    }

    /// Makes the next replace delete and then refuse the insert,
    /// mimicking a validation failure mid-replace.
    pub fn fail_next_insert(&self) {
        self.fail_insert.store(true, Ordering::SeqCst);
    }

    pub fn stored_orders(&self, cv_id: Uuid) -> Vec<i32> {
        self.rows
            .lock()
            .unwrap()
            .get(&cv_id)
            .map(|rows| rows.iter().map(|(order, _)| *order).collect())
            .unwrap_or_default()
    }
}

impl<T: Clone> Default for MemorySectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: SectionItem> SectionStore<T> for MemorySectionStore<T> {
    async fn list_by_parent(&self, cv_id: Uuid) -> Result<Vec<T>, SectionStoreError> {
        let rows = self.rows.lock().unwrap();
        let mut items: Vec<(i32, T)> = rows.get(&cv_id).cloned().unwrap_or_default();
        items.sort_by_key(|(order, _)| *order);
        Ok(items.into_iter().map(|(_, item)| item).collect())
    }

    async fn replace_all(&self, cv_id: Uuid, items: &[T]) -> Result<(), SectionStoreError> {
        let mut rows = self.rows.lock().unwrap();
        rows.remove(&cv_id);
        if self.fail_insert.swap(false, Ordering::SeqCst) {
            // Delete committed, insert refused: the section stays empty.
            return Err(SectionStoreError::DatabaseError(
                "bulk insert rejected".to_string(),
            ));
        }
        rows.insert(
            cv_id,
            items
                .iter()
                .enumerate()
                .map(|(position, item)| (position as i32, item.clone()))
                .collect(),
        );
        Ok(())
    }
}

pub struct MemoryStores {
    pub experiences: Arc<MemorySectionStore<WorkExperience>>,
    pub educations: Arc<MemorySectionStore<Education>>,
    pub skills: Arc<MemorySectionStore<Skill>>,
    pub languages: Arc<MemorySectionStore<Language>>,
    pub certifications: Arc<MemorySectionStore<Certification>>,
    pub projects: Arc<MemorySectionStore<Project>>,
}

impl MemoryStores {
    pub fn new() -> Self {
        Self {
            experiences: Arc::new(MemorySectionStore::new()),
            educations: Arc::new(MemorySectionStore::new()),
            skills: Arc::new(MemorySectionStore::new()),
            languages: Arc::new(MemorySectionStore::new()),
            certifications: Arc::new(MemorySectionStore::new()),
            projects: Arc::new(MemorySectionStore::new()),
        }
    }

    pub fn bundle(&self) -> SectionStores {
        SectionStores {
            experiences: self.experiences.clone(),
            educations: self.educations.clone(),
            skills: self.skills.clone(),
            languages: self.languages.clone(),
            certifications: self.certifications.clone(),
            projects: self.projects.clone(),
        }
    }
}

impl Default for MemoryStores {
    fn default() -> Self {
        Self::new()
    }
}
