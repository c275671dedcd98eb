pub mod catalog;
pub mod editor;
pub mod log;
pub mod settings;

pub use catalog::{CatalogAction, CatalogTab};
pub use editor::{EditorAction, EditorTab};
pub use log::{LogAction, LogTab};
pub use settings::{SettingsAction, SettingsTab};
