use crate::domain::{entities::PackageRecord, repositories::PackageDirectory};
use crate::infrastructure::memory::seed;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Package repository backed by a fixed list, with optional simulated latency.
pub struct InMemoryPackageDirectory {
    packages: Vec<PackageRecord>,
    latency: Duration,
}

impl InMemoryPackageDirectory {
    pub fn new(packages: Vec<PackageRecord>) -> Self {
        Self {
            packages,
            latency: Duration::ZERO,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::repository_packages())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl PackageDirectory for InMemoryPackageDirectory {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<PackageRecord>> {
        self.simulate_latency().await;
        let needle = identifier.to_lowercase();
        let found = self
            .packages
            .iter()
            .find(|p| p.identifier.to_lowercase() == needle)
            .cloned();
        tracing::debug!("Directory lookup for '{}': found={}", identifier, found.is_some());
        Ok(found)
    }

    async fn list(&self, filter: &str) -> Result<Vec<PackageRecord>> {
        self.simulate_latency().await;
        Ok(self
            .packages
            .iter()
            .filter(|p| p.matches_filter(filter))
            .cloned()
            .collect())
    }
}
