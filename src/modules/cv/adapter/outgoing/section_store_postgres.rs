use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::cv::application::ports::outgoing::{SectionItem, SectionStore, SectionStoreError};

use super::sea_orm_entity::cv_section_item::{
    ActiveModel as SectionActiveModel, Column as SectionColumn, Entity as SectionEntity,
    Model as SectionModel,
};

/// One store adapter serves all six section kinds: the type parameter
/// picks the discriminator and payload shape, the table stays shared.
#[derive(Debug, Clone)]
pub struct SectionStorePostgres<T> {
    db: Arc<DatabaseConnection>,
    _item: PhantomData<fn() -> T>,
}

impl<T> SectionStorePostgres<T> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<T: SectionItem> SectionStore<T> for SectionStorePostgres<T> {
    async fn list_by_parent(&self, cv_id: Uuid) -> Result<Vec<T>, SectionStoreError> {
        let rows: Vec<SectionModel> = SectionEntity::find()
            .filter(SectionColumn::CvId.eq(cv_id))
            .filter(SectionColumn::Kind.eq(T::KIND.as_str()))
            .order_by_asc(SectionColumn::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(|err| SectionStoreError::DatabaseError(err.to_string()))?;

        rows.into_iter().map(SectionModel::decode).collect()
    }

    async fn replace_all(&self, cv_id: Uuid, items: &[T]) -> Result<(), SectionStoreError> {
        SectionEntity::delete_many()
            .filter(SectionColumn::CvId.eq(cv_id))
            .filter(SectionColumn::Kind.eq(T::KIND.as_str()))
            .exec(&*self.db)
            .await
            .map_err(|err| SectionStoreError::DatabaseError(err.to_string()))?;

        // insert_many with zero rows is not valid SQL; an emptied section
        // is done after the delete.
        if items.is_empty() {
            return Ok(());
        }

        let models = items
            .iter()
            .enumerate()
            .map(|(position, item)| {
                SectionModel::encode(cv_id, position as i32, item).map(SectionActiveModel::from)
            })
            .collect::<Result<Vec<_>, _>>()?;

        SectionEntity::insert_many(models)
            .exec(&*self.db)
            .await
            .map_err(|err| SectionStoreError::DatabaseError(err.to_string()))?;

        Ok(())
    }
}
