use async_trait::async_trait;
use models::car_service::{self, Summary};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;

#[async_trait]
pub trait ServiceCatalogRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<car_service::Model>, ServiceError>;
    async fn get_summary(&self, id: Uuid) -> Result<Option<Summary>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmServiceCatalogRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ServiceCatalogRepository for SeaOrmServiceCatalogRepository {
    async fn list(&self) -> Result<Vec<car_service::Model>, ServiceError> {
        Ok(car_service::list_all(&self.db).await?)
    }

    async fn get_summary(&self, id: Uuid) -> Result<Option<Summary>, ServiceError> {
        Ok(car_service::find_summary(&self.db, id).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MockServiceCatalogRepository {
        items: RwLock<Vec<car_service::Model>>,
    }

    impl MockServiceCatalogRepository {
        pub fn with_items(items: Vec<car_service::Model>) -> Self {
            Self { items: RwLock::new(items) }
        }
    }

    #[async_trait]
    impl ServiceCatalogRepository for MockServiceCatalogRepository {
        async fn list(&self) -> Result<Vec<car_service::Model>, ServiceError> {
            let mut items = self.items.read().await.clone();
            items.sort_by(|a, b| a.service_id.cmp(&b.service_id));
            Ok(items)
        }

        async fn get_summary(&self, id: Uuid) -> Result<Option<Summary>, ServiceError> {
            let items = self.items.read().await;
            Ok(items.iter().find(|s| s.id == id).cloned().map(Summary::from))
        }
    }
}
