//! Users

pub mod data;
pub mod records;
mod repository;
pub mod service;

pub(crate) use repository::PgUsersStore;
pub use service::*;
