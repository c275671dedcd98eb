pub mod catalog_entry;
pub mod config;
pub mod draft;
pub mod package_record;

pub use catalog_entry::{CatalogEntry, EntryStatus};
pub use config::{AdminConfig, PAGE_SIZES, ThemeMode};
pub use draft::{CATEGORIES, DraftRecord, Field, OS_VERSIONS};
pub use package_record::{PackageRecord, PickerOption};
