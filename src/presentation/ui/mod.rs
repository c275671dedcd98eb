mod app;
pub mod tabs;

pub use app::CatalogAdminApp;
