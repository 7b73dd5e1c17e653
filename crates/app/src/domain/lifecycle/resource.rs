//! Resource description

use std::fmt::Debug;

use sqlx::{FromRow, Row, postgres::PgRow};

use crate::{uuids::TypedUuid, validation::Validate};

/// A softly-deletable record type with an optional natural key.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// Name used in error messages, e.g. `"rental company"`.
    const NAME: &'static str;

    /// Natural key field name, or `None` for resources without one.
    const KEY_FIELD: Option<&'static str>;

    /// Input for creating a record.
    type New: Validate + Debug + Send + Sync + 'static;

    /// Partial update; absent fields keep their stored value.
    type Patch: Validate + Debug + Send + Sync + 'static;

    fn uuid(&self) -> TypedUuid<Self>;

    fn is_active(&self) -> bool;

    /// Natural key held by a stored record.
    fn natural_key(&self) -> Option<&str>;

    /// Natural key requested by a create input.
    fn new_key(new: &Self::New) -> Option<&str>;

    /// Natural key a patch would change to, if it touches the key at all.
    fn patch_key(patch: &Self::Patch) -> Option<&str>;

    /// Requested value of `is_active`, if the patch sets it.
    fn patch_activation(patch: &Self::Patch) -> Option<bool>;

    /// The patch that soft-deletes a record.
    fn deactivation() -> Self::Patch;
}

/// `(uuid, natural key)` pair for selection widgets.
#[derive(Debug)]
pub struct ResourceOption<R> {
    pub uuid: TypedUuid<R>,
    pub label: String,
}

impl<R> Clone for ResourceOption<R> {
    fn clone(&self) -> Self {
        Self {
            uuid: self.uuid,
            label: self.label.clone(),
        }
    }
}

impl<R> PartialEq for ResourceOption<R> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid && self.label == other.label
    }
}

impl<'r, R> FromRow<'r, PgRow> for ResourceOption<R> {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: TypedUuid::from_uuid(row.try_get("uuid")?),
            label: row.try_get("label")?,
        })
    }
}
