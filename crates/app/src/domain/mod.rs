//! Fleet Domain Concerns

pub mod car_requests;
pub mod cars;
pub mod lifecycle;
pub mod maintenance_requests;
pub mod parts;
pub mod rental_companies;
pub mod users;
