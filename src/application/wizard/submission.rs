use crate::domain::{
    entities::CatalogEntry,
    repositories::{CatalogError, CatalogStore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(u64),
}

/// A validated entry ready to hand to the catalog store.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub target: SubmitTarget,
    pub entry: CatalogEntry,
}

impl Submission {
    pub async fn send(self, store: &dyn CatalogStore) -> Result<CatalogEntry, CatalogError> {
        match self.target {
            SubmitTarget::Create => store.create(self.entry).await,
            SubmitTarget::Update(id) => store.update(id, self.entry).await,
        }
    }
}
