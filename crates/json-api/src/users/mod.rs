//! Users

mod handlers;

pub(crate) use handlers::*;
