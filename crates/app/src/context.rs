//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        car_requests::{CarRequestsService, PgCarRequestsService},
        cars::{CarsService, PgCarsService},
        maintenance_requests::{MaintenanceRequestsService, PgMaintenanceRequestsService},
        parts::{PartsService, PgPartsService},
        rental_companies::{PgRentalCompaniesService, RentalCompaniesService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub rental_companies: Arc<dyn RentalCompaniesService>,
    pub cars: Arc<dyn CarsService>,
    pub parts: Arc<dyn PartsService>,
    pub maintenance_requests: Arc<dyn MaintenanceRequestsService>,
    pub car_requests: Arc<dyn CarRequestsService>,
    pub users: Arc<dyn UsersService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            rental_companies: Arc::new(PgRentalCompaniesService::new(db.clone())),
            cars: Arc::new(PgCarsService::new(db.clone())),
            parts: Arc::new(PgPartsService::new(db.clone())),
            maintenance_requests: Arc::new(PgMaintenanceRequestsService::new(db.clone())),
            car_requests: Arc::new(PgCarRequestsService::new(db.clone())),
            users: Arc::new(PgUsersService::new(db.clone())),
            auth: Arc::new(PgAuthService::new(db)),
        }
    }
}
