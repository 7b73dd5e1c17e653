//! Persistence collaborator

use async_trait::async_trait;

use crate::{
    domain::lifecycle::resource::{Resource, ResourceOption},
    uuids::TypedUuid,
};

/// Storage operations the lifecycle needs for one resource type.
///
/// Implementations are scoped to a single unit of work (a transaction for the
/// Postgres stores), which is why every method takes `&mut self`.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send {
    /// Look a record up by uuid, active or not.
    async fn find_unique(&mut self, uuid: TypedUuid<R>) -> Result<Option<R>, sqlx::Error>;

    /// Find an active record holding `key`, ignoring `excluding`.
    ///
    /// Resources without a natural key never collide, so stores for them can
    /// keep this default.
    async fn find_active_by_key(
        &mut self,
        _key: &str,
        _excluding: Option<TypedUuid<R>>,
    ) -> Result<Option<R>, sqlx::Error> {
        Ok(None)
    }

    /// List records in natural order, optionally including inactive ones.
    async fn find_many(&mut self, include_inactive: bool) -> Result<Vec<R>, sqlx::Error>;

    /// Persist a new record and return it as stored.
    async fn create(&mut self, new: R::New) -> Result<R, sqlx::Error>;

    /// Apply a partial update and return the stored result.
    async fn update(&mut self, uuid: TypedUuid<R>, patch: R::Patch) -> Result<R, sqlx::Error>;
}

/// Keyed resources can also project their active records for dropdowns.
#[async_trait]
pub trait OptionsStore<R: Resource>: ResourceStore<R> {
    async fn find_active_options(&mut self) -> Result<Vec<ResourceOption<R>>, sqlx::Error>;
}
