pub mod catalog_query;
pub mod notifier;
pub mod validation;

pub use catalog_query::{
    CatalogPage, CatalogQuery, SortField, SortOrder, distinct_categories, distinct_os_versions,
};
pub use notifier::{Notice, NoticeKind, Notifier};
pub use validation::DraftValidator;
