pub mod catalog_list_state;
pub mod confirm_modal;
pub mod log_manager;
pub mod tab_manager;
pub mod toast;

pub use catalog_list_state::CatalogListState;
pub use confirm_modal::{ConfirmAction, ConfirmModal};
pub use log_manager::{LogEntry, LogLevel, LogManager};
pub use tab_manager::{Tab, TabManager};
pub use toast::render_toasts;
