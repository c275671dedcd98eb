pub mod catalog_store;
pub mod package_directory;
pub mod seed;

pub use catalog_store::InMemoryCatalogStore;
pub use package_directory::InMemoryPackageDirectory;
