use async_trait::async_trait;
use models::booking::{self, NewBooking};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Repository abstraction for booking persistence.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// `owner = None` lists every booking.
    async fn list(&self, owner: Option<&str>) -> Result<Vec<booking::Model>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<booking::Model>, ServiceError>;
    async fn create(&self, input: NewBooking) -> Result<booking::Model, ServiceError>;
    async fn update_status(&self, id: Uuid, status: &str) -> Result<booking::Model, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmBookingRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn list(&self, owner: Option<&str>) -> Result<Vec<booking::Model>, ServiceError> {
        Ok(booking::list(&self.db, owner).await?)
    }

    async fn get(&self, id: Uuid) -> Result<Option<booking::Model>, ServiceError> {
        Ok(booking::find(&self.db, id).await?)
    }

    async fn create(&self, input: NewBooking) -> Result<booking::Model, ServiceError> {
        Ok(booking::create(&self.db, input).await?)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<booking::Model, ServiceError> {
        Ok(booking::set_status(&self.db, id, status).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(booking::hard_delete(&self.db, id).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct MockBookingRepository {
        rows: Mutex<Vec<booking::Model>>, // insertion order
    }

    #[async_trait]
    impl BookingRepository for MockBookingRepository {
        async fn list(&self, owner: Option<&str>) -> Result<Vec<booking::Model>, ServiceError> {
            let rows = self.rows.lock().await;
            Ok(rows
                .iter()
                .rev()
                .filter(|b| owner.map_or(true, |o| b.email == o))
                .cloned()
                .collect())
        }

        async fn get(&self, id: Uuid) -> Result<Option<booking::Model>, ServiceError> {
            let rows = self.rows.lock().await;
            Ok(rows.iter().find(|b| b.id == id).cloned())
        }

        async fn create(&self, input: NewBooking) -> Result<booking::Model, ServiceError> {
            input.validate()?;
            let row = input.into_model(Uuid::new_v4(), Utc::now().into());
            self.rows.lock().await.push(row.clone());
            Ok(row)
        }

        async fn update_status(&self, id: Uuid, status: &str) -> Result<booking::Model, ServiceError> {
            let status = booking::normalize_status(status)?;
            let mut rows = self.rows.lock().await;
            let row = rows.iter_mut().find(|b| b.id == id).ok_or_else(|| ServiceError::not_found("booking"))?;
            row.status = status;
            row.updated_at = Utc::now().into();
            Ok(row.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().await;
            let before = rows.len();
            rows.retain(|b| b.id != id);
            Ok(rows.len() < before)
        }
    }
}
