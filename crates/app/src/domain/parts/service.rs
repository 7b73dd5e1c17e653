//! Parts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        lifecycle::{self, ResourceError},
        parts::{
            PgPartsStore,
            data::{NewPart, PartUpdate},
            records::{PartOption, PartRecord, PartUuid},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgPartsService {
    db: Db,
}

impl PgPartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PartsService for PgPartsService {
    async fn list_parts(&self, include_inactive: bool) -> Result<Vec<PartRecord>, ResourceError> {
        let mut tx = self.db.begin().await?;

        let parts = lifecycle::find_all(&mut PgPartsStore::new(&mut tx), include_inactive).await?;

        tx.commit().await?;

        Ok(parts)
    }

    async fn get_part(&self, part: PartUuid) -> Result<PartRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let part = lifecycle::find_one(&mut PgPartsStore::new(&mut tx), part).await?;

        tx.commit().await?;

        Ok(part)
    }

    async fn create_part(&self, part: NewPart) -> Result<PartRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let created = lifecycle::create(&mut PgPartsStore::new(&mut tx), part).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_part(
        &self,
        part: PartUuid,
        update: PartUpdate,
    ) -> Result<PartRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let updated = lifecycle::update(&mut PgPartsStore::new(&mut tx), part, update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_part(&self, part: PartUuid) -> Result<PartRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let removed = lifecycle::remove(&mut PgPartsStore::new(&mut tx), part).await?;

        tx.commit().await?;

        Ok(removed)
    }

    async fn list_part_options(&self) -> Result<Vec<PartOption>, ResourceError> {
        let mut tx = self.db.begin().await?;

        let options = lifecycle::find_active_options(&mut PgPartsStore::new(&mut tx)).await?;

        tx.commit().await?;

        Ok(options)
    }
}

#[automock]
#[async_trait]
pub trait PartsService: Send + Sync {
    /// Lists parts ordered by part number.
    async fn list_parts(&self, include_inactive: bool) -> Result<Vec<PartRecord>, ResourceError>;

    async fn get_part(&self, part: PartUuid) -> Result<PartRecord, ResourceError>;

    /// Creates a part with a part number no active part uses.
    async fn create_part(&self, part: NewPart) -> Result<PartRecord, ResourceError>;

    async fn update_part(
        &self,
        part: PartUuid,
        update: PartUpdate,
    ) -> Result<PartRecord, ResourceError>;

    /// Soft-deletes a part.
    async fn remove_part(&self, part: PartUuid) -> Result<PartRecord, ResourceError>;

    async fn list_part_options(&self) -> Result<Vec<PartOption>, ResourceError>;
}
