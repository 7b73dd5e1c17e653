//! Rental Companies

mod handlers;

pub(crate) use handlers::*;
