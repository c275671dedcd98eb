use crate::domain::entities::PackageRecord;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PackageDirectory: Send + Sync {
    /// Case-insensitive exact match on the package identifier.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<PackageRecord>>;
    /// Substring match over identifier and display name; an empty filter lists everything.
    async fn list(&self, filter: &str) -> Result<Vec<PackageRecord>>;
}
