use std::sync::Arc;

use models::booking::{self, NewBooking};
use tracing::{info, instrument};
use uuid::Uuid;

use super::repository::BookingRepository;
use crate::auth::{authorize, ListPolicy, OwnerScope, SessionContext};
use crate::errors::ServiceError;

/// Booking operations for an authenticated caller. Every call checks that
/// the caller owns the record it touches.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use service::auth::{IdentityClaim, ListPolicy, SessionContext};
/// use service::booking::{repository::mock::MockBookingRepository, BookingService};
/// tokio_test::block_on(async {
///     let svc = BookingService::new(Arc::new(MockBookingRepository::default()), ListPolicy::default());
///     let me = SessionContext { identity: IdentityClaim::new("a@x.com"), issued_at: 0, expires_at: 60 };
///     assert!(svc.list(&me, None).await.unwrap().is_empty());
/// });
/// ```
#[derive(Clone)]
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
    policy: ListPolicy,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>, policy: ListPolicy) -> Self {
        Self { repo, policy }
    }

    /// `requested` is the `email` query filter, if any.
    #[instrument(skip(self, session), fields(caller = %session.email()))]
    pub async fn list(&self, session: &SessionContext, requested: Option<&str>) -> Result<Vec<booking::Model>, ServiceError> {
        match self.policy.resolve(requested, session)? {
            OwnerScope::Owner(email) => self.repo.list(Some(&email)).await,
            OwnerScope::All => self.repo.list(None).await,
        }
    }

    #[instrument(skip(self, session, input), fields(caller = %session.email()))]
    pub async fn create(&self, session: &SessionContext, input: NewBooking) -> Result<booking::Model, ServiceError> {
        authorize(input.email.trim(), session)?;
        input.validate()?;
        let created = self.repo.create(input).await?;
        info!(id = %created.id, "booking_created");
        Ok(created)
    }

    #[instrument(skip(self, session), fields(caller = %session.email()))]
    pub async fn update_status(&self, session: &SessionContext, id: Uuid, status: &str) -> Result<booking::Model, ServiceError> {
        self.owned(session, id).await?;
        let status = booking::normalize_status(status)?;
        let updated = self.repo.update_status(id, &status).await?;
        info!(%id, status = %updated.status, "booking_status_updated");
        Ok(updated)
    }

    #[instrument(skip(self, session), fields(caller = %session.email()))]
    pub async fn delete(&self, session: &SessionContext, id: Uuid) -> Result<(), ServiceError> {
        self.owned(session, id).await?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("booking"));
        }
        info!(%id, "booking_deleted");
        Ok(())
    }

    async fn owned(&self, session: &SessionContext, id: Uuid) -> Result<booking::Model, ServiceError> {
        let found = self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("booking"))?;
        authorize(&found.email, session)?;
        Ok(found)
    }
}
