use crate::domain::{entities::PackageRecord, repositories::PackageDirectory};
use anyhow::Result;
use std::sync::Arc;

pub struct BrowsePackages {
    directory: Arc<dyn PackageDirectory>,
}

impl BrowsePackages {
    pub fn new(directory: Arc<dyn PackageDirectory>) -> Self {
        Self { directory }
    }

    pub async fn execute(&self, filter: &str) -> Result<Vec<PackageRecord>> {
        self.directory.list(filter.trim()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryPackageDirectory;

    #[tokio::test]
    async fn blank_filter_lists_everything() {
        let browse = BrowsePackages::new(Arc::new(InMemoryPackageDirectory::seeded()));
        assert_eq!(browse.execute("   ").await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn browse_filters_by_name() {
        let browse = BrowsePackages::new(Arc::new(InMemoryPackageDirectory::seeded()));
        let rows = browse.execute("office").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_name, "LibreOffice");
    }
}
