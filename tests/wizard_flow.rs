use catalog_admin::application::UseCaseContainer;
use catalog_admin::application::wizard::{
    ApplicationWizard, CancelOutcome, Retreat, SetKind, WizardContext, WizardStage,
};
use catalog_admin::domain::entities::{EntryStatus, Field};
use catalog_admin::domain::repositories::CatalogStore;
use catalog_admin::domain::services::{CatalogQuery, Notice, NoticeKind};
use catalog_admin::infrastructure::memory::seed;
use catalog_admin::infrastructure::{InMemoryCatalogStore, InMemoryPackageDirectory, QueuedNotifier};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Fixture {
    store: Arc<InMemoryCatalogStore>,
    notifier: QueuedNotifier,
    context: WizardContext,
}

fn fixture(store: InMemoryCatalogStore) -> Fixture {
    let store = Arc::new(store);
    let notifier = QueuedNotifier::new();
    let context = WizardContext::new(
        Arc::new(InMemoryPackageDirectory::seeded()),
        store.clone(),
        Arc::new(notifier.clone()),
    )
    .with_tag_options(seed::tag_options())
    .with_analog_options(seed::analog_options())
    .with_close_delay(Duration::ZERO);

    Fixture {
        store,
        notifier,
        context,
    }
}

fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&count);
    (count, move || {
        handle.fetch_add(1, Ordering::SeqCst);
    })
}

#[tokio::test]
async fn create_flow_stores_looked_up_package_with_tags() {
    let f = fixture(InMemoryCatalogStore::new());
    let notifier = f.notifier.clone();
    let seen_at_completion = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&seen_at_completion);
    let mut wizard = ApplicationWizard::create(f.context.clone(), move || {
        *seen.lock().unwrap() = notifier.notices();
    });

    assert!(wizard.lookup_package("code").await);
    assert!(wizard.advance());
    assert_eq!(wizard.stage(), WizardStage::Details);
    assert!(wizard.advance());
    assert_eq!(wizard.stage(), WizardStage::Tagging);

    wizard.set_input(SetKind::Tags, "IDE");
    assert!(wizard.commit_input(SetKind::Tags));
    assert!(wizard.advance());
    assert_eq!(wizard.stage(), WizardStage::Review);

    assert!(wizard.submit().await);

    let stored = f.store.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    let entry = &stored[0];
    assert_eq!(entry.package_id, "code");
    assert_eq!(entry.name, "Visual Studio Code");
    assert_eq!(entry.status, EntryStatus::Pending);
    assert_eq!(entry.tags.iter().collect::<Vec<_>>(), vec!["IDE"]);
    assert!(entry.updated_at.is_some());

    let seen = seen_at_completion.lock().unwrap();
    assert_eq!(
        seen.last(),
        Some(&Notice::success("Application added successfully"))
    );
    assert!(wizard.is_finished());
}

#[tokio::test]
async fn edit_flow_keeps_identity_and_status() {
    let f = fixture(InMemoryCatalogStore::seeded());
    let original = f.store.get(4).await.unwrap().unwrap();
    let (completions, on_complete) = counter();
    let mut wizard = ApplicationWizard::edit(f.context.clone(), &original, on_complete);

    assert_eq!(wizard.stage(), WizardStage::Details);
    wizard.set_field(Field::Version, "24.2.0");
    wizard.toggle_os_version("Debian 12+");
    assert!(wizard.advance());
    assert!(wizard.add_value(SetKind::Analogs, "Microsoft Office"));
    assert!(wizard.advance());

    let preview = wizard.preview_entry();
    assert_eq!(preview.id, 4);
    assert_eq!(preview.version, "24.2.0");

    assert!(wizard.submit().await);
    assert_eq!(completions.load(Ordering::SeqCst), 1);

    let updated = f.store.get(4).await.unwrap().unwrap();
    assert_eq!(updated.version, "24.2.0");
    assert_eq!(updated.status, EntryStatus::Active);
    assert!(updated.target_os_versions.contains("Debian 12+"));
    assert!(updated.analogs.contains("Microsoft Office"));
    assert_eq!(f.store.list().await.unwrap().len(), 5);
}

#[tokio::test]
async fn seeded_entry_with_unknown_category_must_be_fixed_before_saving() {
    let f = fixture(InMemoryCatalogStore::seeded());
    let blender = f.store.get(5).await.unwrap().unwrap();
    let (_, on_complete) = counter();
    let mut wizard = ApplicationWizard::edit(f.context.clone(), &blender, on_complete);

    assert!(!wizard.advance());
    assert!(wizard.visible_error(Field::Category).is_some());

    wizard.set_field(Field::Category, "Графика");
    assert!(wizard.advance());
    assert!(wizard.advance());
    assert!(wizard.submit().await);

    let saved = f.store.get(5).await.unwrap().unwrap();
    assert_eq!(saved.category, "Графика");
    assert_eq!(saved.status, EntryStatus::Pending);
}

#[tokio::test]
async fn cancel_flow_discards_only_after_confirmation() {
    let f = fixture(InMemoryCatalogStore::new());
    let (completions, on_complete) = counter();
    let mut wizard = ApplicationWizard::create(f.context.clone(), on_complete);

    assert!(wizard.lookup_package("gimp").await);
    assert!(wizard.advance());

    assert_eq!(wizard.retreat(), Retreat::Moved(WizardStage::Lookup));
    assert_eq!(
        wizard.retreat(),
        Retreat::Cancel(CancelOutcome::ConfirmationRequired)
    );
    assert!(wizard.is_cancel_prompt_open());
    wizard.decline_cancel();
    assert_eq!(completions.load(Ordering::SeqCst), 0);
    assert_eq!(wizard.draft().package_id, "gimp");

    wizard.request_cancel();
    assert!(wizard.confirm_cancel());
    assert_eq!(completions.load(Ordering::SeqCst), 1);
    assert!(f.store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_lookup_and_gate_failures_are_reported() {
    let f = fixture(InMemoryCatalogStore::new());
    let (_, on_complete) = counter();
    let mut wizard = ApplicationWizard::create(f.context.clone(), on_complete);

    assert!(!wizard.advance());
    assert!(!wizard.lookup_package("").await);
    assert!(!wizard.lookup_package("notarealpkg").await);

    assert_eq!(wizard.stage(), WizardStage::Lookup);
    assert_eq!(f.notifier.count(NoticeKind::Failure), 3);
    assert_eq!(f.notifier.count(NoticeKind::Success), 0);
}

#[tokio::test]
async fn created_entry_shows_up_in_catalog_listing() {
    let f = fixture(InMemoryCatalogStore::seeded());
    let use_cases = UseCaseContainer::new(
        Arc::new(InMemoryPackageDirectory::seeded()),
        f.store.clone(),
    );

    let (_, on_complete) = counter();
    let mut wizard = ApplicationWizard::create(f.context.clone(), on_complete);
    let packages = use_cases.browse_packages.execute("blend").await.unwrap();
    wizard.select_package(&packages[0]);
    wizard.set_field(Field::PackageId, "blender-lts");
    assert!(wizard.advance());
    assert!(wizard.advance());
    assert!(wizard.advance());
    assert!(wizard.submit().await);

    let mut query = CatalogQuery::new(25);
    query.set_search("blender");
    let listing = use_cases.list_catalog.execute(&query).await.unwrap();
    assert_eq!(listing.page.total, 2);
}
