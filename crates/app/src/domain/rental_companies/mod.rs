//! Rental Companies

pub mod data;
pub mod records;
mod repository;
pub mod service;

pub(crate) use repository::PgRentalCompaniesStore;
pub use service::*;
