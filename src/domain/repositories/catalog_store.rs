use crate::domain::entities::CatalogEntry;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("application {0} not found")]
    NotFound(u64),
    #[error("package \"{0}\" is already in the catalog")]
    DuplicatePackage(String),
    #[error("{0}")]
    Rejected(String),
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn create(&self, entry: CatalogEntry) -> Result<CatalogEntry, CatalogError>;
    async fn update(&self, id: u64, entry: CatalogEntry) -> Result<CatalogEntry, CatalogError>;
    async fn get(&self, id: u64) -> Result<Option<CatalogEntry>, CatalogError>;
    async fn list(&self) -> Result<Vec<CatalogEntry>, CatalogError>;
    async fn delete(&self, id: u64) -> Result<CatalogEntry, CatalogError>;
}
