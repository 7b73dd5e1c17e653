//! Maintenance Requests

mod handlers;

pub(crate) use handlers::*;
