//! Parts

mod handlers;

pub(crate) use handlers::*;
