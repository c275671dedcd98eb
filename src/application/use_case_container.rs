use crate::application::use_cases::*;
use crate::domain::repositories::{CatalogStore, PackageDirectory};
use std::sync::Arc;

pub struct UseCaseContainer {
    pub browse_packages: Arc<BrowsePackages>,
    pub list_catalog: Arc<ListCatalog>,
    pub get_entry: Arc<GetEntry>,
    pub create_entry: Arc<CreateEntry>,
    pub update_entry: Arc<UpdateEntry>,
    pub delete_entry: Arc<DeleteEntry>,
}

impl UseCaseContainer {
    pub fn new(directory: Arc<dyn PackageDirectory>, store: Arc<dyn CatalogStore>) -> Self {
        Self {
            browse_packages: Arc::new(BrowsePackages::new(Arc::clone(&directory))),
            list_catalog: Arc::new(ListCatalog::new(Arc::clone(&store))),
            get_entry: Arc::new(GetEntry::new(Arc::clone(&store))),
            create_entry: Arc::new(CreateEntry::new(Arc::clone(&store))),
            update_entry: Arc::new(UpdateEntry::new(Arc::clone(&store))),
            delete_entry: Arc::new(DeleteEntry::new(Arc::clone(&store))),
        }
    }
}
