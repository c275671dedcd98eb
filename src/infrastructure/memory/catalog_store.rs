use crate::domain::{
    entities::CatalogEntry,
    repositories::{CatalogError, CatalogStore},
};
use crate::infrastructure::memory::seed;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

struct StoreState {
    entries: Vec<CatalogEntry>,
    next_id: u64,
}

/// Catalog held in process memory. Nothing survives a restart.
pub struct InMemoryCatalogStore {
    state: RwLock<StoreState>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::with_entries(seed::catalog_entries())
    }

    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(StoreState { entries, next_id }),
        }
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

fn check_unique(
    entries: &[CatalogEntry],
    package_id: &str,
    except: Option<u64>,
) -> Result<(), CatalogError> {
    let taken = entries
        .iter()
        .any(|e| Some(e.id) != except && e.package_id.eq_ignore_ascii_case(package_id));
    if taken {
        return Err(CatalogError::DuplicatePackage(package_id.to_string()));
    }
    Ok(())
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn create(&self, entry: CatalogEntry) -> Result<CatalogEntry, CatalogError> {
        if entry.package_id.trim().is_empty() {
            return Err(CatalogError::Rejected("package id is empty".to_string()));
        }

        let mut state = self.state.write().await;
        check_unique(&state.entries, &entry.package_id, None)?;

        let mut stored = entry;
        stored.id = state.next_id;
        stored.updated_at = Some(Utc::now());
        state.next_id += 1;
        state.entries.push(stored.clone());

        tracing::info!("Catalog entry {} created for '{}'", stored.id, stored.package_id);
        Ok(stored)
    }

    async fn update(&self, id: u64, entry: CatalogEntry) -> Result<CatalogEntry, CatalogError> {
        let mut state = self.state.write().await;
        check_unique(&state.entries, &entry.package_id, Some(id))?;

        let slot = state
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        let status = slot.status;
        *slot = CatalogEntry {
            id,
            status,
            updated_at: Some(Utc::now()),
            ..entry
        };

        tracing::info!("Catalog entry {} updated", id);
        Ok(slot.clone())
    }

    async fn get(&self, id: u64) -> Result<Option<CatalogEntry>, CatalogError> {
        let state = self.state.read().await;
        Ok(state.entries.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(self.state.read().await.entries.clone())
    }

    async fn delete(&self, id: u64) -> Result<CatalogEntry, CatalogError> {
        let mut state = self.state.write().await;
        let index = state
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        let removed = state.entries.remove(index);
        tracing::info!("Catalog entry {} ('{}') deleted", id, removed.name);
        Ok(removed)
    }
}
