//! Cars

pub mod data;
pub mod records;
mod repository;
pub mod service;

pub(crate) use repository::PgCarsStore;
pub use service::*;
