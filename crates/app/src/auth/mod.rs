//! Authentication and authorization

mod errors;
mod policy;
mod principal;
mod service;
mod token;

pub use errors::*;
pub use policy::*;
pub use principal::*;
pub use service::*;
pub use token::*;
