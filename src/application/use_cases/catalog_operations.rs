use crate::domain::{
    entities::CatalogEntry,
    repositories::{CatalogError, CatalogStore},
    services::{CatalogPage, CatalogQuery, distinct_categories, distinct_os_versions},
};
use std::sync::Arc;

/// One rendered page of the catalog plus the options its filters offer.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogListing {
    pub page: CatalogPage,
    pub categories: Vec<String>,
    pub os_versions: Vec<String>,
}

pub struct ListCatalog {
    store: Arc<dyn CatalogStore>,
}

impl ListCatalog {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, query: &CatalogQuery) -> Result<CatalogListing, CatalogError> {
        let entries = self.store.list().await?;
        let categories = distinct_categories(&entries);
        let os_versions = distinct_os_versions(&entries);
        Ok(CatalogListing {
            page: query.apply(entries),
            categories,
            os_versions,
        })
    }
}

pub struct GetEntry {
    store: Arc<dyn CatalogStore>,
}

impl GetEntry {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: u64) -> Result<CatalogEntry, CatalogError> {
        self.store.get(id).await?.ok_or(CatalogError::NotFound(id))
    }
}

pub struct CreateEntry {
    store: Arc<dyn CatalogStore>,
}

impl CreateEntry {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, entry: CatalogEntry) -> Result<CatalogEntry, CatalogError> {
        self.store.create(entry).await
    }
}

pub struct UpdateEntry {
    store: Arc<dyn CatalogStore>,
}

impl UpdateEntry {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: u64, entry: CatalogEntry) -> Result<CatalogEntry, CatalogError> {
        self.store.update(id, entry).await
    }
}

pub struct DeleteEntry {
    store: Arc<dyn CatalogStore>,
}

impl DeleteEntry {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: u64) -> Result<CatalogEntry, CatalogError> {
        self.store.delete(id).await
    }
}
