//! Read access to the service catalog.

pub mod repository;

pub use repository::{SeaOrmServiceCatalogRepository, ServiceCatalogRepository};
