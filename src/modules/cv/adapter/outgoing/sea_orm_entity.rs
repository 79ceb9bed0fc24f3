//! SeaORM models for the two CV tables: `cv_documents` holds the one
//! root row per professional, `cv_section_items` holds every section
//! row of every kind behind a discriminator column and a JSONB payload.

pub mod cv_document {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    use crate::cv::application::ports::outgoing::{CvDocumentRecord, CvRootFields};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "cv_documents")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: Uuid,

        /// Owning professional; unique, the aggregate is 1:1 per user.
        pub user_id: Uuid,

        pub summary: String,
        #[sea_orm(column_type = "Text", string_len = 150)]
        pub citizenship: String,
        #[sea_orm(column_type = "Text", string_len = 150)]
        pub work_permit: String,
        pub has_driving_license: bool,

        pub created_at: DateTimeWithTimeZone,
        pub updated_at: DateTimeWithTimeZone,
    }

    impl Model {
        pub fn to_record(&self) -> CvDocumentRecord {
            CvDocumentRecord {
                id: self.id,
                user_id: self.user_id,
                summary: self.summary.clone(),
                citizenship: self.citizenship.clone(),
                work_permit: self.work_permit.clone(),
                has_driving_license: self.has_driving_license,
            }
        }

        pub fn from_fields(user_id: Uuid, fields: &CvRootFields) -> Self {
            let now = chrono::Utc::now();
            Self {
                id: Uuid::new_v4(),
                user_id,
                summary: fields.summary.clone(),
                citizenship: fields.citizenship.clone(),
                work_permit: fields.work_permit.clone(),
                has_driving_license: fields.has_driving_license,
                created_at: now.into(),
                updated_at: now.into(),
            }
        }
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod cv_section_item {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};
    use serde_json::Value as JsonValue;
    use uuid::Uuid;

    use crate::cv::application::ports::outgoing::{SectionItem, SectionStoreError};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "cv_section_items")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: Uuid,

        pub cv_id: Uuid,

        /// `SectionKind::as_str` discriminator.
        #[sea_orm(column_type = "Text", string_len = 32)]
        pub kind: String,

        /// Sole source of truth for presentation order; dense and
        /// 0-based within (cv_id, kind).
        pub display_order: i32,

        #[sea_orm(column_type = "JsonBinary")]
        pub payload: JsonValue,

        pub created_at: DateTimeWithTimeZone,
    }

    impl Model {
        pub fn decode<T: SectionItem>(self) -> Result<T, SectionStoreError> {
            serde_json::from_value(self.payload)
                .map_err(|err| SectionStoreError::InvalidPayload(err.to_string()))
        }

        pub fn encode<T: SectionItem>(
            cv_id: Uuid,
            display_order: i32,
            item: &T,
        ) -> Result<Self, SectionStoreError> {
            let payload = serde_json::to_value(item)
                .map_err(|err| SectionStoreError::InvalidPayload(err.to_string()))?;
            Ok(Self {
                id: Uuid::new_v4(),
                cv_id,
                kind: T::KIND.as_str().to_string(),
                display_order,
                payload,
                created_at: chrono::Utc::now().into(),
            })
        }
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
