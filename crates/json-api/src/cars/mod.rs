//! Cars

mod handlers;

pub(crate) use handlers::*;
