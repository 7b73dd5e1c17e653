//! Maintenance Requests

pub mod data;
pub mod records;
mod repository;
pub mod service;

pub(crate) use repository::PgMaintenanceRequestsStore;
pub use service::*;
