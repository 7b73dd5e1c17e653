//! App Router

use salvo::{Handler, Router};

use crate::{auth, car_requests, cars, maintenance_requests, parts, rental_companies, users};

/// Every authenticated route. `options` is declared ahead of `{uuid}` so it
/// is never captured as an identifier.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("rental-companies")
                .get(rental_companies::index::handler)
                .post(rental_companies::create::handler)
                .push(Router::with_path("options").get(rental_companies::options::handler))
                .push(member(
                    rental_companies::get::handler,
                    rental_companies::update::handler,
                    rental_companies::delete::handler,
                )),
        )
        .push(
            Router::with_path("cars")
                .get(cars::index::handler)
                .post(cars::create::handler)
                .push(Router::with_path("options").get(cars::options::handler))
                .push(member(
                    cars::get::handler,
                    cars::update::handler,
                    cars::delete::handler,
                )),
        )
        .push(
            Router::with_path("parts")
                .get(parts::index::handler)
                .post(parts::create::handler)
                .push(Router::with_path("options").get(parts::options::handler))
                .push(member(
                    parts::get::handler,
                    parts::update::handler,
                    parts::delete::handler,
                )),
        )
        .push(
            Router::with_path("maintenance-requests")
                .get(maintenance_requests::index::handler)
                .post(maintenance_requests::create::handler)
                .push(member(
                    maintenance_requests::get::handler,
                    maintenance_requests::update::handler,
                    maintenance_requests::delete::handler,
                )),
        )
        .push(
            Router::with_path("car-requests")
                .get(car_requests::index::handler)
                .post(car_requests::create::handler)
                .push(member(
                    car_requests::get::handler,
                    car_requests::update::handler,
                    car_requests::delete::handler,
                )),
        )
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .push(Router::with_path("options").get(users::options::handler))
                .push(member(
                    users::get::handler,
                    users::update::handler,
                    users::delete::handler,
                )),
        )
}

fn member(get: impl Handler, put: impl Handler, delete: impl Handler) -> Router {
    Router::with_path("{uuid}").get(get).put(put).delete(delete)
}
