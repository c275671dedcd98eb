pub mod catalog_store;
pub mod package_directory;

pub use catalog_store::{CatalogError, CatalogStore};
pub use package_directory::PackageDirectory;
