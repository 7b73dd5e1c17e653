//! Soft-delete, uniqueness-guarded resource lifecycle
//!
//! Every fleet resource shares one lifecycle:
//!
//! - creating or re-keying a record first looks for an *active* record holding
//!   the same natural key and refuses with a conflict when one exists;
//! - updating or removing a record first re-reads it by uuid and refuses with
//!   not-found when it is missing, before anything is written;
//! - removing a record only clears its `is_active` flag.
//!
//! The operations here are written once against [`Resource`] and
//! [`ResourceStore`]; each resource module supplies a Postgres store that runs
//! inside the caller's transaction.

pub mod errors;
mod operations;
pub mod resource;
pub mod store;

pub use errors::ResourceError;
pub use operations::*;
pub use resource::{Resource, ResourceOption};
pub use store::{OptionsStore, ResourceStore};
