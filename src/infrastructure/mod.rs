pub mod config_repository;
pub mod memory;
pub mod notifier;

pub use config_repository::ConfigRepository;
pub use memory::{InMemoryCatalogStore, InMemoryPackageDirectory};
pub use notifier::QueuedNotifier;
