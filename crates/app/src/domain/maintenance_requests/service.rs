//! Maintenance requests service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        lifecycle::{self, ResourceError},
        maintenance_requests::{
            PgMaintenanceRequestsStore,
            data::{MaintenanceRequestUpdate, NewMaintenanceRequest},
            records::{MaintenanceRequestRecord, MaintenanceRequestUuid},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgMaintenanceRequestsService {
    db: Db,
}

impl PgMaintenanceRequestsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MaintenanceRequestsService for PgMaintenanceRequestsService {
    async fn list_maintenance_requests(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<MaintenanceRequestRecord>, ResourceError> {
        let mut tx = self.db.begin().await?;

        let requests = lifecycle::find_all(
            &mut PgMaintenanceRequestsStore::new(&mut tx),
            include_inactive,
        )
        .await?;

        tx.commit().await?;

        Ok(requests)
    }

    async fn get_maintenance_request(
        &self,
        request: MaintenanceRequestUuid,
    ) -> Result<MaintenanceRequestRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let request =
            lifecycle::find_one(&mut PgMaintenanceRequestsStore::new(&mut tx), request).await?;

        tx.commit().await?;

        Ok(request)
    }

    async fn create_maintenance_request(
        &self,
        request: NewMaintenanceRequest,
    ) -> Result<MaintenanceRequestRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let created =
            lifecycle::create(&mut PgMaintenanceRequestsStore::new(&mut tx), request).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_maintenance_request(
        &self,
        request: MaintenanceRequestUuid,
        update: MaintenanceRequestUpdate,
    ) -> Result<MaintenanceRequestRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let updated = lifecycle::update(
            &mut PgMaintenanceRequestsStore::new(&mut tx),
            request,
            update,
        )
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_maintenance_request(
        &self,
        request: MaintenanceRequestUuid,
    ) -> Result<MaintenanceRequestRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let removed =
            lifecycle::remove(&mut PgMaintenanceRequestsStore::new(&mut tx), request).await?;

        tx.commit().await?;

        Ok(removed)
    }
}

#[automock]
#[async_trait]
pub trait MaintenanceRequestsService: Send + Sync {
    /// Lists maintenance requests, oldest first.
    async fn list_maintenance_requests(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<MaintenanceRequestRecord>, ResourceError>;

    async fn get_maintenance_request(
        &self,
        request: MaintenanceRequestUuid,
    ) -> Result<MaintenanceRequestRecord, ResourceError>;

    /// Files a maintenance request against a car.
    async fn create_maintenance_request(
        &self,
        request: NewMaintenanceRequest,
    ) -> Result<MaintenanceRequestRecord, ResourceError>;

    async fn update_maintenance_request(
        &self,
        request: MaintenanceRequestUuid,
        update: MaintenanceRequestUpdate,
    ) -> Result<MaintenanceRequestRecord, ResourceError>;

    async fn remove_maintenance_request(
        &self,
        request: MaintenanceRequestUuid,
    ) -> Result<MaintenanceRequestRecord, ResourceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            cars::{CarsService, records::CarUuid},
            maintenance_requests::records::{MaintenancePriority, MaintenanceStatus},
            users::UsersService,
        },
        test::{TestContext, helpers},
    };

    use super::*;

    #[tokio::test]
    async fn identical_requests_are_not_conflicts() -> TestResult {
        let ctx = TestContext::new().await;

        let car = ctx.cars.create_car(helpers::new_car("MR01 AAA")).await?;
        let user = ctx
            .users
            .create_user(helpers::new_user("mech@fleet.example", &"e".repeat(64)))
            .await?;

        let first = ctx
            .maintenance_requests
            .create_maintenance_request(helpers::new_maintenance_request(car.uuid, user.uuid))
            .await?;
        let second = ctx
            .maintenance_requests
            .create_maintenance_request(helpers::new_maintenance_request(car.uuid, user.uuid))
            .await?;

        let listed: Vec<_> = ctx
            .maintenance_requests
            .list_maintenance_requests(false)
            .await?
            .into_iter()
            .map(|request| request.uuid)
            .collect();

        assert_eq!(listed, vec![first.uuid, second.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn status_moves_through_the_workflow() -> TestResult {
        let ctx = TestContext::new().await;

        let car = ctx.cars.create_car(helpers::new_car("MR02 BBB")).await?;
        let user = ctx
            .users
            .create_user(helpers::new_user("drv@fleet.example", &"f".repeat(64)))
            .await?;

        let request = ctx
            .maintenance_requests
            .create_maintenance_request(helpers::new_maintenance_request(car.uuid, user.uuid))
            .await?;

        let updated = ctx
            .maintenance_requests
            .update_maintenance_request(
                request.uuid,
                MaintenanceRequestUpdate {
                    status: Some(MaintenanceStatus::InProgress),
                    priority: Some(MaintenancePriority::Critical),
                    ..MaintenanceRequestUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.status, MaintenanceStatus::InProgress);
        assert_eq!(updated.priority, MaintenancePriority::Critical);
        assert_eq!(updated.description, request.description);

        let removed = ctx
            .maintenance_requests
            .remove_maintenance_request(request.uuid)
            .await?;

        assert!(!removed.is_active);
        assert!(
            ctx.maintenance_requests
                .list_maintenance_requests(false)
                .await?
                .is_empty()
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_car_is_an_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx
            .users
            .create_user(helpers::new_user("ops@fleet.example", &"0".repeat(64)))
            .await?;

        let result = ctx
            .maintenance_requests
            .create_maintenance_request(helpers::new_maintenance_request(
                CarUuid::new(),
                user.uuid,
            ))
            .await;

        assert!(matches!(result, Err(ResourceError::InvalidReference)));

        Ok(())
    }
}
