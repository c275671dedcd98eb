pub mod catalog_operations;
pub mod package_operations;

pub use catalog_operations::*;
pub use package_operations::*;
