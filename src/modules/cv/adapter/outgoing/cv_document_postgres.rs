use crate::cv::application::ports::outgoing::{
    CvDocumentRecord, CvDocumentStore, CvDocumentStoreError, CvRootFields,
};
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::cv_document::{
    ActiveModel as CvActiveModel, Column as CvColumn, Entity as CvEntity, Model as CvModel,
};

#[derive(Debug, Clone)]
pub struct CvDocumentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl CvDocumentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CvDocumentStore for CvDocumentStorePostgres {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<CvDocumentRecord>, CvDocumentStoreError> {
        let model: Option<CvModel> = CvEntity::find()
            .filter(CvColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|err| CvDocumentStoreError::DatabaseError(err.to_string()))?;

        Ok(model.map(|m| m.to_record()))
    }

    async fn upsert(
        &self,
        user_id: Uuid,
        fields: &CvRootFields,
    ) -> Result<Uuid, CvDocumentStoreError> {
        let existing: Option<CvModel> = CvEntity::find()
            .filter(CvColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|err| CvDocumentStoreError::DatabaseError(err.to_string()))?;

        match existing {
            Some(model) => {
                let id = model.id;
                let mut active: CvActiveModel = model.into();
                active.summary = Set(fields.summary.clone());
                active.citizenship = Set(fields.citizenship.clone());
                active.work_permit = Set(fields.work_permit.clone());
                active.has_driving_license = Set(fields.has_driving_license);
                active.updated_at = Set(chrono::Utc::now().into());

                active
                    .update(&*self.db)
                    .await
                    .map_err(|err| CvDocumentStoreError::DatabaseError(err.to_string()))?;

                Ok(id)
            }
            None => {
                let model = CvModel::from_fields(user_id, fields);
                let active: CvActiveModel = model.into();

                let inserted: CvModel = CvEntity::insert(active)
                    .exec_with_returning(&*self.db)
                    .await
                    .map_err(|err| CvDocumentStoreError::DatabaseError(err.to_string()))?;

                Ok(inserted.id)
            }
        }
    }
}
