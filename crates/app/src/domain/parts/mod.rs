//! Parts

pub mod data;
pub mod records;
mod repository;
pub mod service;

pub(crate) use repository::PgPartsStore;
pub use service::*;
