//! Rental companies service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        lifecycle::{self, ResourceError},
        rental_companies::{
            PgRentalCompaniesStore,
            data::{NewRentalCompany, RentalCompanyUpdate},
            records::{RentalCompanyOption, RentalCompanyRecord, RentalCompanyUuid},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgRentalCompaniesService {
    db: Db,
}

impl PgRentalCompaniesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RentalCompaniesService for PgRentalCompaniesService {
    async fn list_rental_companies(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<RentalCompanyRecord>, ResourceError> {
        let mut tx = self.db.begin().await?;

        let companies =
            lifecycle::find_all(&mut PgRentalCompaniesStore::new(&mut tx), include_inactive)
                .await?;

        tx.commit().await?;

        Ok(companies)
    }

    async fn get_rental_company(
        &self,
        rental_company: RentalCompanyUuid,
    ) -> Result<RentalCompanyRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let company =
            lifecycle::find_one(&mut PgRentalCompaniesStore::new(&mut tx), rental_company).await?;

        tx.commit().await?;

        Ok(company)
    }

    async fn create_rental_company(
        &self,
        rental_company: NewRentalCompany,
    ) -> Result<RentalCompanyRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let created =
            lifecycle::create(&mut PgRentalCompaniesStore::new(&mut tx), rental_company).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_rental_company(
        &self,
        rental_company: RentalCompanyUuid,
        update: RentalCompanyUpdate,
    ) -> Result<RentalCompanyRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let updated = lifecycle::update(
            &mut PgRentalCompaniesStore::new(&mut tx),
            rental_company,
            update,
        )
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_rental_company(
        &self,
        rental_company: RentalCompanyUuid,
    ) -> Result<RentalCompanyRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let removed =
            lifecycle::remove(&mut PgRentalCompaniesStore::new(&mut tx), rental_company).await?;

        tx.commit().await?;

        Ok(removed)
    }

    async fn list_rental_company_options(
        &self,
    ) -> Result<Vec<RentalCompanyOption>, ResourceError> {
        let mut tx = self.db.begin().await?;

        let options =
            lifecycle::find_active_options(&mut PgRentalCompaniesStore::new(&mut tx)).await?;

        tx.commit().await?;

        Ok(options)
    }
}

#[automock]
#[async_trait]
pub trait RentalCompaniesService: Send + Sync {
    /// Lists rental companies ordered by name, active ones only unless widened.
    async fn list_rental_companies(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<RentalCompanyRecord>, ResourceError>;

    /// Retrieves a rental company, including soft-deleted ones.
    async fn get_rental_company(
        &self,
        rental_company: RentalCompanyUuid,
    ) -> Result<RentalCompanyRecord, ResourceError>;

    /// Creates a rental company with a name no active company holds.
    async fn create_rental_company(
        &self,
        rental_company: NewRentalCompany,
    ) -> Result<RentalCompanyRecord, ResourceError>;

    /// Applies a partial update to a rental company.
    async fn update_rental_company(
        &self,
        rental_company: RentalCompanyUuid,
        update: RentalCompanyUpdate,
    ) -> Result<RentalCompanyRecord, ResourceError>;

    /// Soft-deletes a rental company.
    async fn remove_rental_company(
        &self,
        rental_company: RentalCompanyUuid,
    ) -> Result<RentalCompanyRecord, ResourceError>;

    /// Active rental companies as dropdown options.
    async fn list_rental_company_options(&self)
    -> Result<Vec<RentalCompanyOption>, ResourceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::lifecycle::ResourceStore,
        test::{TestContext, helpers},
    };

    use super::*;

    #[tokio::test]
    async fn unique_index_violation_is_reported_as_a_conflict() -> TestResult {
        let ctx = TestContext::new().await;
        let mut tx = ctx.db.pool().begin().await?;
        let mut store = PgRentalCompaniesStore::new(&mut tx);

        store.create(helpers::new_rental_company("Hertz")).await?;

        // Straight to the store, so only the partial unique index stands in the way.
        let duplicate = store
            .create(helpers::new_rental_company("Hertz"))
            .await
            .map_err(ResourceError::storage::<RentalCompanyRecord>);

        assert!(
            matches!(duplicate, Err(ResourceError::Conflict { key: "name", .. })),
            "expected Conflict, got {duplicate:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_creates_leave_one_active_row() -> TestResult {
        let ctx = TestContext::new().await;
        let companies = &ctx.rental_companies;

        let (first, second) = tokio::join!(
            companies.create_rental_company(helpers::new_rental_company("Hertz")),
            companies.create_rental_company(helpers::new_rental_company("Hertz")),
        );

        let results = [first, second];

        assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
        assert_eq!(
            results
                .iter()
                .filter(|result| matches!(result, Err(ResourceError::Conflict { key: "name", .. })))
                .count(),
            1,
            "expected exactly one Conflict, got {results:?}"
        );

        let active = companies.list_rental_companies(false).await?;

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Hertz");

        Ok(())
    }

    #[tokio::test]
    async fn update_can_clear_contact_details() -> TestResult {
        let ctx = TestContext::new().await;
        let companies = &ctx.rental_companies;

        let created = companies
            .create_rental_company(NewRentalCompany {
                contact_email: Some("fleet@avis.example".to_string()),
                phone: Some("+44 20 7946 0000".to_string()),
                ..helpers::new_rental_company("Avis")
            })
            .await?;

        let updated = companies
            .update_rental_company(
                created.uuid,
                RentalCompanyUpdate {
                    contact_email: Some(None),
                    ..RentalCompanyUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.contact_email, None);
        assert_eq!(updated.phone.as_deref(), Some("+44 20 7946 0000"));

        Ok(())
    }

    #[tokio::test]
    async fn hertz_can_be_recreated_after_removal() -> TestResult {
        let ctx = TestContext::new().await;
        let companies = &ctx.rental_companies;

        let first = companies
            .create_rental_company(helpers::new_rental_company("Hertz"))
            .await?;

        let duplicate = companies
            .create_rental_company(helpers::new_rental_company("Hertz"))
            .await;

        assert!(matches!(
            duplicate,
            Err(ResourceError::Conflict { key: "name", .. })
        ));

        let removed = companies.remove_rental_company(first.uuid).await?;

        assert!(!removed.is_active);

        let second = companies
            .create_rental_company(helpers::new_rental_company("Hertz"))
            .await?;

        assert_ne!(first.uuid, second.uuid);

        let active = companies.list_rental_companies(false).await?;

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].uuid, second.uuid);

        let all = companies.list_rental_companies(true).await?;

        assert_eq!(all.len(), 2);

        let reactivated = companies
            .update_rental_company(
                first.uuid,
                RentalCompanyUpdate {
                    is_active: Some(true),
                    ..RentalCompanyUpdate::default()
                },
            )
            .await;

        assert!(matches!(reactivated, Err(ResourceError::Conflict { .. })));
        assert!(!companies.get_rental_company(first.uuid).await?.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn rename_into_a_taken_name_conflicts() -> TestResult {
        let ctx = TestContext::new().await;
        let companies = &ctx.rental_companies;

        companies
            .create_rental_company(helpers::new_rental_company("Avis"))
            .await?;

        let sixt = companies
            .create_rental_company(helpers::new_rental_company("Sixt"))
            .await?;

        let result = companies
            .update_rental_company(
                sixt.uuid,
                RentalCompanyUpdate {
                    name: Some("Avis".to_string()),
                    ..RentalCompanyUpdate::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ResourceError::Conflict { .. })));
        assert_eq!(companies.get_rental_company(sixt.uuid).await?.name, "Sixt");

        Ok(())
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let companies = &ctx.rental_companies;

        let created = companies
            .create_rental_company(NewRentalCompany {
                contact_email: Some("fleet@avis.example".to_string()),
                ..helpers::new_rental_company("Avis")
            })
            .await?;

        let updated = companies
            .update_rental_company(
                created.uuid,
                RentalCompanyUpdate {
                    phone: Some(Some("+44 20 7946 0000".to_string())),
                    ..RentalCompanyUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.name, "Avis");
        assert_eq!(updated.contact_email.as_deref(), Some("fleet@avis.example"));
        assert_eq!(updated.phone.as_deref(), Some("+44 20 7946 0000"));
        assert!(updated.updated_at >= created.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_uuid_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .rental_companies
            .remove_rental_company(RentalCompanyUuid::new())
            .await;

        assert!(matches!(result, Err(ResourceError::NotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn options_list_active_names() -> TestResult {
        let ctx = TestContext::new().await;
        let companies = &ctx.rental_companies;

        let sixt = companies
            .create_rental_company(helpers::new_rental_company("Sixt"))
            .await?;
        let avis = companies
            .create_rental_company(helpers::new_rental_company("Avis"))
            .await?;
        let gone = companies
            .create_rental_company(helpers::new_rental_company("Budget"))
            .await?;

        companies.remove_rental_company(gone.uuid).await?;

        let options = companies.list_rental_company_options().await?;

        assert_eq!(
            options,
            vec![
                RentalCompanyOption {
                    uuid: avis.uuid,
                    label: "Avis".to_string(),
                },
                RentalCompanyOption {
                    uuid: sixt.uuid,
                    label: "Sixt".to_string(),
                },
            ]
        );

        Ok(())
    }
}
