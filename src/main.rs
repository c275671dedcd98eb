use catalog_admin::application::UseCaseContainer;
use catalog_admin::application::wizard::WizardContext;
use catalog_admin::domain::repositories::{CatalogStore, PackageDirectory};
use catalog_admin::infrastructure::memory::seed;
use catalog_admin::infrastructure::{
    ConfigRepository, InMemoryCatalogStore, InMemoryPackageDirectory, QueuedNotifier,
};
use catalog_admin::presentation::services::init_log_capture;
use catalog_admin::presentation::ui::CatalogAdminApp;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    let log_rx = match init_log_capture() {
        Ok(rx) => rx,
        Err(e) => {
            eprintln!("catalog-admin: {:#}", e);
            std::sync::mpsc::channel().1
        }
    };

    let config_repository = ConfigRepository::new();
    let config = config_repository.load().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default config: {:#}", e);
        Default::default()
    });
    tracing::info!("Starting catalog admin (config at {})", config_repository.path().display());

    let directory: Arc<dyn PackageDirectory> =
        Arc::new(InMemoryPackageDirectory::seeded().with_latency(config.lookup_latency()));
    let store: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalogStore::seeded());
    let notifier = QueuedNotifier::new();

    let use_cases = Arc::new(UseCaseContainer::new(
        Arc::clone(&directory),
        Arc::clone(&store),
    ));
    let wizard_context = WizardContext::new(directory, store, Arc::new(notifier.clone()))
        .with_tag_options(seed::tag_options())
        .with_analog_options(seed::analog_options())
        .with_close_delay(config.close_delay());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    let app = CatalogAdminApp::new(
        use_cases,
        wizard_context,
        notifier,
        config,
        config_repository,
        log_rx,
    )
    .map_err(|e| eframe::Error::AppCreation(e.into()))?;

    eframe::run_native(
        "Catalog Admin",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
