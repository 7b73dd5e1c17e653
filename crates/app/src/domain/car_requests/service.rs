//! Car requests service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        car_requests::{
            PgCarRequestsStore,
            data::{CarRequestUpdate, NewCarRequest},
            records::{CarRequestRecord, CarRequestUuid},
        },
        lifecycle::{self, ResourceError},
    },
};

#[derive(Debug, Clone)]
pub struct PgCarRequestsService {
    db: Db,
}

impl PgCarRequestsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarRequestsService for PgCarRequestsService {
    async fn list_car_requests(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<CarRequestRecord>, ResourceError> {
        let mut tx = self.db.begin().await?;

        let requests =
            lifecycle::find_all(&mut PgCarRequestsStore::new(&mut tx), include_inactive).await?;

        tx.commit().await?;

        Ok(requests)
    }

    async fn get_car_request(
        &self,
        request: CarRequestUuid,
    ) -> Result<CarRequestRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let request = lifecycle::find_one(&mut PgCarRequestsStore::new(&mut tx), request).await?;

        tx.commit().await?;

        Ok(request)
    }

    async fn create_car_request(
        &self,
        request: NewCarRequest,
    ) -> Result<CarRequestRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let created = lifecycle::create(&mut PgCarRequestsStore::new(&mut tx), request).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_car_request(
        &self,
        request: CarRequestUuid,
        update: CarRequestUpdate,
    ) -> Result<CarRequestRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let updated =
            lifecycle::update(&mut PgCarRequestsStore::new(&mut tx), request, update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_car_request(
        &self,
        request: CarRequestUuid,
    ) -> Result<CarRequestRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let removed = lifecycle::remove(&mut PgCarRequestsStore::new(&mut tx), request).await?;

        tx.commit().await?;

        Ok(removed)
    }
}

#[automock]
#[async_trait]
pub trait CarRequestsService: Send + Sync {
    /// Lists car requests, oldest first.
    async fn list_car_requests(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<CarRequestRecord>, ResourceError>;

    async fn get_car_request(
        &self,
        request: CarRequestUuid,
    ) -> Result<CarRequestRecord, ResourceError>;

    async fn create_car_request(
        &self,
        request: NewCarRequest,
    ) -> Result<CarRequestRecord, ResourceError>;

    async fn update_car_request(
        &self,
        request: CarRequestUuid,
        update: CarRequestUpdate,
    ) -> Result<CarRequestRecord, ResourceError>;

    async fn remove_car_request(
        &self,
        request: CarRequestUuid,
    ) -> Result<CarRequestRecord, ResourceError>;
}
