//! Lifecycle operations

use tracing::{debug, info};

use crate::{
    domain::lifecycle::{
        errors::ResourceError,
        resource::{Resource, ResourceOption},
        store::{OptionsStore, ResourceStore},
    },
    uuids::TypedUuid,
    validation::Validate,
};

/// Create a record after checking that no active record holds its key.
///
/// # Errors
///
/// Returns [`ResourceError::Invalid`] for bad input, [`ResourceError::Conflict`]
/// when the natural key is taken, or a storage error.
pub async fn create<R, S>(store: &mut S, new: R::New) -> Result<R, ResourceError>
where
    R: Resource,
    S: ResourceStore<R> + ?Sized,
{
    new.validate().map_err(ResourceError::invalid::<R>)?;

    if let Some(key) = R::new_key(&new) {
        ensure_key_available(store, key, None).await?;
    }

    let created = store
        .create(new)
        .await
        .map_err(ResourceError::storage::<R>)?;

    info!(resource = R::NAME, uuid = %created.uuid(), "created record");

    Ok(created)
}

/// List records, active ones only unless `include_inactive` is set.
///
/// # Errors
///
/// Returns a storage error if the listing fails.
pub async fn find_all<R, S>(store: &mut S, include_inactive: bool) -> Result<Vec<R>, ResourceError>
where
    R: Resource,
    S: ResourceStore<R> + ?Sized,
{
    store
        .find_many(include_inactive)
        .await
        .map_err(ResourceError::storage::<R>)
}

/// Fetch one record by uuid. Soft-deleted records are still returned.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] when no record has this uuid.
pub async fn find_one<R, S>(store: &mut S, uuid: TypedUuid<R>) -> Result<R, ResourceError>
where
    R: Resource,
    S: ResourceStore<R> + ?Sized,
{
    store
        .find_unique(uuid)
        .await
        .map_err(ResourceError::storage::<R>)?
        .ok_or_else(ResourceError::not_found::<R>)
}

/// Apply a partial update to an existing record.
///
/// The natural key is only re-checked when the patch changes it, or when the
/// patch brings an inactive record back into the active set.
///
/// # Errors
///
/// Returns [`ResourceError::Invalid`], [`ResourceError::NotFound`],
/// [`ResourceError::Conflict`] or a storage error. Nothing is written when any
/// check fails.
pub async fn update<R, S>(
    store: &mut S,
    uuid: TypedUuid<R>,
    patch: R::Patch,
) -> Result<R, ResourceError>
where
    R: Resource,
    S: ResourceStore<R> + ?Sized,
{
    patch.validate().map_err(ResourceError::invalid::<R>)?;

    let current = find_one(store, uuid).await?;

    if let Some(key) = R::patch_key(&patch) {
        ensure_key_available(store, key, Some(uuid)).await?;
    } else if R::patch_activation(&patch) == Some(true)
        && !current.is_active()
        && let Some(key) = current.natural_key()
    {
        ensure_key_available(store, key, Some(uuid)).await?;
    }

    let updated = store
        .update(uuid, patch)
        .await
        .map_err(ResourceError::storage::<R>)?;

    info!(resource = R::NAME, uuid = %uuid, "updated record");

    Ok(updated)
}

/// Soft-delete a record by clearing its `is_active` flag.
///
/// Removing an already inactive record succeeds and leaves it inactive.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] when no record has this uuid.
pub async fn remove<R, S>(store: &mut S, uuid: TypedUuid<R>) -> Result<R, ResourceError>
where
    R: Resource,
    S: ResourceStore<R> + ?Sized,
{
    find_one(store, uuid).await?;

    let removed = store
        .update(uuid, R::deactivation())
        .await
        .map_err(ResourceError::storage::<R>)?;

    info!(resource = R::NAME, uuid = %uuid, "deactivated record");

    Ok(removed)
}

/// Active `(uuid, key)` pairs ordered by key.
///
/// # Errors
///
/// Returns a storage error if the projection fails.
pub async fn find_active_options<R, S>(store: &mut S) -> Result<Vec<ResourceOption<R>>, ResourceError>
where
    R: Resource,
    S: OptionsStore<R> + ?Sized,
{
    store
        .find_active_options()
        .await
        .map_err(ResourceError::storage::<R>)
}

async fn ensure_key_available<R, S>(
    store: &mut S,
    key: &str,
    excluding: Option<TypedUuid<R>>,
) -> Result<(), ResourceError>
where
    R: Resource,
    S: ResourceStore<R> + ?Sized,
{
    let existing = store
        .find_active_by_key(key, excluding)
        .await
        .map_err(ResourceError::storage::<R>)?;

    if let Some(existing) = existing {
        debug!(resource = R::NAME, existing = %existing.uuid(), "natural key already in use");

        return Err(ResourceError::conflict::<R>());
    }

    Ok(())
}
