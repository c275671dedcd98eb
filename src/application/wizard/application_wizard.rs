use super::lookup::{LookupRequest, LookupResponse, LookupState};
use super::multi_select::{SetEditor, SetKind};
use super::stage::{WizardMode, WizardStage};
use super::state::{FieldErrors, TouchedFields};
use super::submission::{SubmitTarget, Submission};
use crate::domain::{
    entities::{CatalogEntry, DraftRecord, EntryStatus, Field, PackageRecord, PickerOption},
    repositories::{CatalogError, CatalogStore, PackageDirectory},
    services::{DraftValidator, Notifier},
};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(1500);

/// Collaborators and fixed settings the wizard runs against.
#[derive(Clone)]
pub struct WizardContext {
    pub directory: Arc<dyn PackageDirectory>,
    pub store: Arc<dyn CatalogStore>,
    pub notifier: Arc<dyn Notifier>,
    pub tag_options: Vec<PickerOption>,
    pub analog_options: Vec<PickerOption>,
    pub close_delay: Duration,
}

impl WizardContext {
    pub fn new(
        directory: Arc<dyn PackageDirectory>,
        store: Arc<dyn CatalogStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            directory,
            store,
            notifier,
            tag_options: Vec::new(),
            analog_options: Vec::new(),
            close_delay: DEFAULT_CLOSE_DELAY,
        }
    }

    pub fn with_tag_options(mut self, options: Vec<PickerOption>) -> Self {
        self.tag_options = options;
        self
    }

    pub fn with_analog_options(mut self, options: Vec<PickerOption>) -> Self {
        self.analog_options = options;
        self
    }

    pub fn with_close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Nothing worth keeping; the draft was dropped and the caller notified.
    Discarded,
    /// The draft holds user input; `confirm_cancel` or `decline_cancel` must follow.
    ConfirmationRequired,
    /// The wizard is submitting, closing or already finished.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    Moved(WizardStage),
    Cancel(CancelOutcome),
    Ignored,
}

pub struct ApplicationWizard {
    context: WizardContext,
    mode: WizardMode,
    stage: WizardStage,
    draft: DraftRecord,
    errors: FieldErrors,
    touched: TouchedFields,
    lookup: LookupState,
    tags: SetEditor,
    analogs: SetEditor,
    cancel_prompt_open: bool,
    submitting: bool,
    close_at: Option<Instant>,
    finished: bool,
    on_complete: Box<dyn FnMut() + Send>,
}

impl ApplicationWizard {
    /// Starts an empty draft at the repository search.
    pub fn create(context: WizardContext, on_complete: impl FnMut() + Send + 'static) -> Self {
        tracing::info!("Opening wizard for a new application");
        Self::build(context, WizardMode::Create, DraftRecord::new(), on_complete)
    }

    /// Starts at the details stage with every field copied from `entry`.
    pub fn edit(
        context: WizardContext,
        entry: &CatalogEntry,
        on_complete: impl FnMut() + Send + 'static,
    ) -> Self {
        tracing::info!("Opening wizard to edit entry {} ('{}')", entry.id, entry.package_id);
        let mode = WizardMode::Edit {
            entry_id: entry.id,
            status: entry.status,
        };
        Self::build(context, mode, DraftRecord::from_entry(entry), on_complete)
    }

    fn build(
        context: WizardContext,
        mode: WizardMode,
        draft: DraftRecord,
        on_complete: impl FnMut() + Send + 'static,
    ) -> Self {
        let tags = SetEditor::new(context.tag_options.clone());
        let analogs = SetEditor::new(context.analog_options.clone());
        Self {
            context,
            mode,
            stage: mode.first_stage(),
            draft,
            errors: FieldErrors::new(),
            touched: TouchedFields::new(),
            lookup: LookupState::default(),
            tags,
            analogs,
            cancel_prompt_open: false,
            submitting: false,
            close_at: None,
            finished: false,
            on_complete: Box::new(on_complete),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_edit()
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn stages(&self) -> &'static [WizardStage] {
        self.mode.stages()
    }

    /// Only stages already passed can be jumped to from the stepper.
    pub fn is_stage_reachable(&self, stage: WizardStage) -> bool {
        stage < self.stage && stage >= self.mode.first_stage()
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedFields {
        &self.touched
    }

    /// The error for `field`, once the user has touched it.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn lookup(&self) -> &LookupState {
        &self.lookup
    }

    pub fn is_searching(&self) -> bool {
        self.lookup.is_searching()
    }

    pub fn is_cancel_prompt_open(&self) -> bool {
        self.cancel_prompt_open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submitted successfully and waiting out the close delay.
    pub fn is_closing(&self) -> bool {
        self.close_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn directory(&self) -> Arc<dyn PackageDirectory> {
        Arc::clone(&self.context.directory)
    }

    pub fn store(&self) -> Arc<dyn CatalogStore> {
        Arc::clone(&self.context.store)
    }

    fn accepts_input(&self) -> bool {
        !self.finished && !self.submitting && self.close_at.is_none()
    }

    // ---- field editing ----

    /// Updates a text field, marks it touched and re-runs its validator.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.accepts_input() {
            return;
        }
        if !self.draft.set_text(field, value.into()) {
            tracing::warn!("Ignoring text edit of non-text field {}", field);
            return;
        }
        self.touched.touch(field);
        self.errors
            .set(field, DraftValidator::validate_field(&self.draft, field));
    }

    pub fn toggle_os_version(&mut self, label: &str) {
        if !self.accepts_input() {
            return;
        }
        SetEditor::toggle(&mut self.draft.target_os_versions, label);
        self.touched.touch(Field::OsVersions);
        self.errors.set(
            Field::OsVersions,
            DraftValidator::validate_field(&self.draft, Field::OsVersions),
        );
    }

    // ---- navigation ----

    pub fn advance(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }

        let allowed = match self.stage {
            WizardStage::Lookup => {
                if self.draft.has_package() {
                    true
                } else {
                    self.context
                        .notifier
                        .failure("Search the repository and select a package first");
                    false
                }
            }
            WizardStage::Details => self.check_details(),
            WizardStage::Tagging => true,
            WizardStage::Review => return false,
        };

        if !allowed {
            tracing::debug!("Stage gate at {} rejected advance", self.stage);
            return false;
        }

        match self.stage.next() {
            Some(next) => {
                tracing::info!("Wizard advanced {} -> {}", self.stage, next);
                self.stage = next;
                true
            }
            None => false,
        }
    }

    /// Steps back one stage; at the first stage this becomes a cancel request.
    pub fn retreat(&mut self) -> Retreat {
        if !self.accepts_input() {
            return Retreat::Ignored;
        }
        if self.stage == self.mode.first_stage() {
            return Retreat::Cancel(self.request_cancel());
        }
        match self.stage.prev() {
            Some(prev) => {
                tracing::info!("Wizard went back {} -> {}", self.stage, prev);
                self.stage = prev;
                Retreat::Moved(prev)
            }
            None => Retreat::Ignored,
        }
    }

    /// Jumps back to a completed stage.
    pub fn go_to(&mut self, stage: WizardStage) -> bool {
        if !self.accepts_input() || !self.is_stage_reachable(stage) {
            return false;
        }
        tracing::info!("Wizard jumped {} -> {}", self.stage, stage);
        self.stage = stage;
        true
    }

    /// Touches every validated field and recomputes all errors at once.
    fn check_details(&mut self) -> bool {
        self.touched.touch_all(Field::VALIDATED);
        self.errors
            .replace(DraftValidator::validate_details(&self.draft));
        if self.errors.is_empty() {
            return true;
        }
        tracing::debug!("Details invalid: {} field(s)", self.errors.len());
        self.context
            .notifier
            .failure("Please fix the errors in the form");
        false
    }

    // ---- cancel guard ----

    pub fn request_cancel(&mut self) -> CancelOutcome {
        if !self.accepts_input() {
            return CancelOutcome::Ignored;
        }
        if self.draft.has_user_input() {
            tracing::debug!("Cancel requested with unsaved input, asking for confirmation");
            self.cancel_prompt_open = true;
            CancelOutcome::ConfirmationRequired
        } else {
            self.discard();
            CancelOutcome::Discarded
        }
    }

    /// Accepts the pending cancel prompt. Returns false when none is open.
    pub fn confirm_cancel(&mut self) -> bool {
        if !self.cancel_prompt_open || self.finished {
            return false;
        }
        self.cancel_prompt_open = false;
        self.discard();
        true
    }

    pub fn decline_cancel(&mut self) {
        self.cancel_prompt_open = false;
    }

    fn discard(&mut self) {
        tracing::info!("Discarding wizard draft");
        self.draft = DraftRecord::new();
        self.errors.clear();
        self.touched.clear();
        self.complete();
    }

    fn complete(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        (self.on_complete)();
    }

    // ---- package lookup ----

    pub fn open_lookup_panel(&mut self) {
        self.lookup.open_panel();
    }

    pub fn close_lookup_panel(&mut self) {
        self.lookup.close_panel();
    }

    pub fn set_lookup_query(&mut self, query: impl Into<String>) {
        self.lookup.set_query(query.into());
    }

    /// Starts a search for the current query. An empty query is rejected
    /// without touching the directory.
    pub fn begin_lookup(&mut self) -> Option<LookupRequest> {
        if !self.accepts_input() {
            return None;
        }
        if self.lookup.query().trim().is_empty() {
            self.context
                .notifier
                .failure("Enter a package name to search");
            return None;
        }
        let request = self.lookup.start();
        tracing::info!("Lookup #{} started for '{}'", request.generation, request.query);
        Some(request)
    }

    /// Applies a finished search. Returns true when a package was imported.
    pub fn apply_lookup(&mut self, response: LookupResponse) -> bool {
        if !self.accepts_input() {
            tracing::debug!(
                "Dropping lookup #{} for '{}', draft is no longer editable",
                response.generation,
                response.query
            );
            self.lookup.supersede();
            return false;
        }
        if !self.lookup.finish(response.generation) {
            tracing::debug!(
                "Dropping stale lookup #{} for '{}'",
                response.generation,
                response.query
            );
            return false;
        }

        match response.result {
            Ok(Some(record)) => {
                self.import(&record);
                self.context.notifier.success(&format!(
                    "Package \"{}\" found and loaded",
                    record.display_name
                ));
                self.lookup.close_panel();
                self.lookup.clear_query();
                true
            }
            Ok(None) => {
                self.context
                    .notifier
                    .failure("Package not found in the repository");
                false
            }
            Err(e) => {
                tracing::error!("Lookup for '{}' failed: {:#}", response.query, e);
                self.context
                    .notifier
                    .failure(&format!("Package lookup failed: {}", e));
                false
            }
        }
    }

    /// Searches for `query` and applies the result in one step.
    pub async fn lookup_package(&mut self, query: &str) -> bool {
        self.lookup.set_query(query.to_string());
        let Some(request) = self.begin_lookup() else {
            return false;
        };
        let directory = self.directory();
        let response = request.run(directory.as_ref()).await;
        self.apply_lookup(response)
    }

    /// Imports a row picked from the listing; any outstanding search is superseded.
    pub fn select_package(&mut self, record: &PackageRecord) {
        if !self.accepts_input() {
            return;
        }
        self.lookup.supersede();
        self.import(record);
        self.context
            .notifier
            .success(&format!("Package \"{}\" loaded", record.display_name));
        self.lookup.close_panel();
    }

    /// Repository data is trusted, so prior errors and touches are dropped.
    fn import(&mut self, record: &PackageRecord) {
        tracing::info!("Importing package '{}' into draft", record.identifier);
        self.draft.import_package(record);
        self.errors.clear();
        self.touched.clear();
    }

    // ---- tags and analogs ----

    fn set_parts(&mut self, kind: SetKind) -> (&mut SetEditor, &mut BTreeSet<String>) {
        match kind {
            SetKind::Tags => (&mut self.tags, &mut self.draft.tags),
            SetKind::Analogs => (&mut self.analogs, &mut self.draft.analogs),
        }
    }

    pub fn values(&self, kind: SetKind) -> &BTreeSet<String> {
        match kind {
            SetKind::Tags => &self.draft.tags,
            SetKind::Analogs => &self.draft.analogs,
        }
    }

    pub fn editor(&self, kind: SetKind) -> &SetEditor {
        match kind {
            SetKind::Tags => &self.tags,
            SetKind::Analogs => &self.analogs,
        }
    }

    pub fn set_input(&mut self, kind: SetKind, input: impl Into<String>) {
        self.set_parts(kind).0.set_input(input.into());
    }

    /// Commits the manual input box (the enter key).
    pub fn commit_input(&mut self, kind: SetKind) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let (editor, set) = self.set_parts(kind);
        editor.commit_input(set)
    }

    /// Adding a value already present is a no-op.
    pub fn add_value(&mut self, kind: SetKind, value: &str) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.set_parts(kind).1.insert(value.to_string())
    }

    pub fn remove_value(&mut self, kind: SetKind, value: &str) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.set_parts(kind).1.remove(value)
    }

    /// Picker row activation. Returns whether the value is now present.
    pub fn toggle_value(&mut self, kind: SetKind, value: &str) -> bool {
        if !self.accepts_input() {
            return self.values(kind).contains(value);
        }
        SetEditor::toggle(self.set_parts(kind).1, value)
    }

    pub fn open_picker(&mut self, kind: SetKind) {
        self.set_parts(kind).0.open_picker();
    }

    pub fn close_picker(&mut self, kind: SetKind) {
        self.set_parts(kind).0.close_picker();
    }

    pub fn set_picker_query(&mut self, kind: SetKind, query: impl Into<String>) {
        self.set_parts(kind).0.set_picker_query(query.into());
    }

    pub fn picker_results(&self, kind: SetKind) -> Vec<&PickerOption> {
        self.editor(kind).filtered_options()
    }

    // ---- submit ----

    /// What the store would receive if the draft were submitted now.
    pub fn preview_entry(&self) -> CatalogEntry {
        match self.mode {
            WizardMode::Create => self.draft.to_entry(0, EntryStatus::Pending),
            WizardMode::Edit { entry_id, status } => self.draft.to_entry(entry_id, status),
        }
    }

    /// Re-validates the draft and packages it for the store. Only possible
    /// from the review stage.
    pub fn prepare_submission(&mut self) -> Option<Submission> {
        let submission = self.build_submission()?;
        self.submitting = true;
        Some(submission)
    }

    fn build_submission(&mut self) -> Option<Submission> {
        if !self.accepts_input() {
            return None;
        }
        if self.stage != WizardStage::Review {
            tracing::warn!("Submit attempted from {}", self.stage);
            return None;
        }
        if !self.check_details() {
            return None;
        }

        let target = match self.mode {
            WizardMode::Create => SubmitTarget::Create,
            WizardMode::Edit { entry_id, .. } => SubmitTarget::Update(entry_id),
        };
        self.lookup.supersede();
        tracing::info!("Submitting '{}' ({:?})", self.draft.package_id, target);
        Some(Submission {
            target,
            entry: self.preview_entry(),
        })
    }

    /// Records the store's answer. On success the caller is notified once the
    /// close delay has passed (see `poll`).
    pub fn finish_submission(
        &mut self,
        result: Result<CatalogEntry, CatalogError>,
        now: Instant,
    ) -> bool {
        if !self.submitting {
            return false;
        }
        self.submitting = false;

        match result {
            Ok(entry) => {
                let message = if self.is_editing() {
                    "Application updated successfully"
                } else {
                    "Application added successfully"
                };
                tracing::info!("Catalog accepted entry {} ('{}')", entry.id, entry.package_id);
                self.context.notifier.success(message);
                self.close_at = Some(now + self.context.close_delay);
                true
            }
            Err(e) => {
                tracing::error!("Catalog rejected submission: {}", e);
                self.context
                    .notifier
                    .failure(&format!("Could not save application: {}", e));
                false
            }
        }
    }

    /// Fires the completion callback once the close delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.close_at {
            Some(at) if now >= at => {
                self.close_at = None;
                self.complete();
                true
            }
            _ => false,
        }
    }

    /// Validates, stores and, after the close delay, completes the wizard.
    pub async fn submit(&mut self) -> bool {
        let Some(submission) = self.build_submission() else {
            return false;
        };
        let store = self.store();
        let result = submission.send(store.as_ref()).await;
        // Raised only once the send resolves, so a dropped future leaves the draft editable.
        self.submitting = true;
        if !self.finish_submission(result, Instant::now()) {
            return false;
        }
        tokio::time::sleep(self.context.close_delay).await;
        self.close_at = None;
        self.complete();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::{Notice, NoticeKind};
    use crate::infrastructure::memory::seed;
    use crate::infrastructure::{InMemoryCatalogStore, InMemoryPackageDirectory, QueuedNotifier};
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Harness {
        notifier: QueuedNotifier,
        store: Arc<InMemoryCatalogStore>,
        completions: Arc<AtomicUsize>,
        context: WizardContext,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_store(InMemoryCatalogStore::new())
        }

        fn with_store(store: InMemoryCatalogStore) -> Self {
            let notifier = QueuedNotifier::new();
            let store = Arc::new(store);
            let context = WizardContext::new(
                Arc::new(InMemoryPackageDirectory::seeded()),
                store.clone(),
                Arc::new(notifier.clone()),
            )
            .with_tag_options(seed::tag_options())
            .with_analog_options(seed::analog_options())
            .with_close_delay(Duration::ZERO);
            Self {
                notifier,
                store,
                completions: Arc::new(AtomicUsize::new(0)),
                context,
            }
        }

        fn callback(&self) -> impl FnMut() + Send + 'static {
            let completions = Arc::clone(&self.completions);
            move || {
                completions.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn create(&self) -> ApplicationWizard {
            ApplicationWizard::create(self.context.clone(), self.callback())
        }

        fn edit(&self, entry: &CatalogEntry) -> ApplicationWizard {
            ApplicationWizard::edit(self.context.clone(), entry, self.callback())
        }

        fn completions(&self) -> usize {
            self.completions.load(Ordering::SeqCst)
        }
    }

    struct CountingDirectory {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PackageDirectory for CountingDirectory {
        async fn find_by_identifier(&self, _identifier: &str) -> Result<Option<PackageRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        async fn list(&self, _filter: &str) -> Result<Vec<PackageRecord>> {
            Ok(Vec::new())
        }
    }

    /// Store whose writes never resolve.
    struct StalledStore;

    #[async_trait]
    impl CatalogStore for StalledStore {
        async fn create(&self, _entry: CatalogEntry) -> Result<CatalogEntry, CatalogError> {
            std::future::pending().await
        }

        async fn update(
            &self,
            _id: u64,
            _entry: CatalogEntry,
        ) -> Result<CatalogEntry, CatalogError> {
            std::future::pending().await
        }

        async fn get(&self, _id: u64) -> Result<Option<CatalogEntry>, CatalogError> {
            Ok(None)
        }

        async fn list(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
            Ok(Vec::new())
        }

        async fn delete(&self, id: u64) -> Result<CatalogEntry, CatalogError> {
            Err(CatalogError::NotFound(id))
        }
    }

    fn firefox() -> PackageRecord {
        seed::repository_packages()
            .into_iter()
            .find(|p| p.identifier == "firefox")
            .unwrap()
    }

    fn gimp_entry() -> CatalogEntry {
        seed::catalog_entries()
            .into_iter()
            .find(|e| e.package_id == "gimp")
            .unwrap()
    }

    #[test]
    fn create_mode_starts_at_lookup() {
        let h = Harness::new();
        let wizard = h.create();
        assert_eq!(wizard.stage(), WizardStage::Lookup);
        assert_eq!(wizard.stages().len(), 4);
        assert_eq!(wizard.draft(), &DraftRecord::new());
    }

    #[test]
    fn edit_mode_starts_at_details_prefilled_and_pristine() {
        let h = Harness::new();
        let wizard = h.edit(&gimp_entry());
        assert_eq!(wizard.stage(), WizardStage::Details);
        assert!(wizard.is_editing());
        assert_eq!(wizard.draft().name, "GIMP");
        assert_eq!(wizard.draft().size_mb, "120");
        assert!(wizard.errors().is_empty());
        assert!(wizard.touched().is_empty());
    }

    #[test]
    fn lookup_stage_requires_imported_package() {
        let h = Harness::new();
        let mut wizard = h.create();

        assert!(!wizard.advance());
        assert_eq!(wizard.stage(), WizardStage::Lookup);
        assert_eq!(h.notifier.count(NoticeKind::Failure), 1);

        wizard.select_package(&firefox());
        assert!(wizard.advance());
        assert_eq!(wizard.stage(), WizardStage::Details);
    }

    #[tokio::test]
    async fn successful_lookup_replaces_invalid_draft() {
        let h = Harness::new();
        let mut wizard = h.create();
        wizard.set_field(Field::Version, "v1");
        wizard.set_field(Field::Name, "x");
        assert!(wizard.visible_error(Field::Version).is_some());

        wizard.open_lookup_panel();
        assert!(wizard.lookup_package("firefox").await);

        let draft = wizard.draft();
        assert_eq!(draft.name, "Firefox");
        assert_eq!(draft.version, "120.0");
        assert_eq!(draft.category, "Браузеры");
        assert!(wizard.errors().is_empty());
        assert!(wizard.touched().is_empty());
        assert!(!wizard.lookup().is_panel_open());
        assert_eq!(wizard.lookup().query(), "");
        assert_eq!(
            h.notifier.last(),
            Some(Notice::success("Package \"Firefox\" found and loaded"))
        );
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let h = Harness::new();
        let mut wizard = h.create();
        assert!(wizard.lookup_package("LibreOffice").await);
        assert_eq!(wizard.draft().package_id, "libreoffice");
    }

    #[tokio::test]
    async fn unknown_package_changes_nothing() {
        let h = Harness::new();
        let mut wizard = h.create();
        wizard.set_field(Field::Name, "My App");
        wizard.open_lookup_panel();
        let before = wizard.draft().clone();

        assert!(!wizard.lookup_package("notarealpkg").await);

        assert_eq!(wizard.draft(), &before);
        assert_eq!(wizard.stage(), WizardStage::Lookup);
        assert!(wizard.lookup().is_panel_open());
        assert!(!wizard.is_searching());
        assert_eq!(
            h.notifier.notices(),
            vec![Notice::failure("Package not found in the repository")]
        );
    }

    #[tokio::test]
    async fn empty_query_never_reaches_directory() {
        let h = Harness::new();
        let directory = Arc::new(CountingDirectory {
            calls: AtomicUsize::new(0),
        });
        let mut context = h.context.clone();
        context.directory = directory.clone();
        let mut wizard = ApplicationWizard::create(context, h.callback());

        assert!(!wizard.lookup_package("   ").await);
        assert_eq!(directory.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            h.notifier.notices(),
            vec![Notice::failure("Enter a package name to search")]
        );
    }

    #[tokio::test]
    async fn stale_lookup_response_is_dropped() {
        let h = Harness::new();
        let mut wizard = h.create();
        let directory = wizard.directory();

        wizard.set_lookup_query("gimp");
        let first = wizard.begin_lookup().unwrap();
        wizard.set_lookup_query("code");
        let second = wizard.begin_lookup().unwrap();
        assert!(wizard.is_searching());

        let late = first.run(directory.as_ref()).await;
        assert!(!wizard.apply_lookup(late));
        assert_eq!(wizard.draft().name, "");
        assert!(wizard.is_searching());

        let current = second.run(directory.as_ref()).await;
        assert!(wizard.apply_lookup(current));
        assert_eq!(wizard.draft().package_id, "code");
        assert!(h.notifier.notices().len() == 1);
    }

    #[tokio::test]
    async fn selecting_a_row_supersedes_pending_search() {
        let h = Harness::new();
        let mut wizard = h.create();
        let directory = wizard.directory();

        wizard.set_lookup_query("gimp");
        let pending = wizard.begin_lookup().unwrap();
        wizard.select_package(&firefox());

        let response = pending.run(directory.as_ref()).await;
        assert!(!wizard.apply_lookup(response));
        assert_eq!(wizard.draft().package_id, "firefox");
    }

    #[test]
    fn invalid_details_block_advance_and_reveal_every_error() {
        let h = Harness::new();
        let mut wizard = h.create();
        wizard.select_package(&firefox());
        wizard.advance();
        wizard.set_field(Field::Description, "short");
        let before = h.notifier.count(NoticeKind::Failure);

        assert!(!wizard.advance());

        assert_eq!(wizard.stage(), WizardStage::Details);
        for field in Field::VALIDATED {
            assert!(wizard.touched().contains(field), "{} not touched", field);
        }
        assert!(wizard.visible_error(Field::Description).is_some());
        assert_eq!(wizard.errors().len(), 1);
        assert_eq!(h.notifier.count(NoticeKind::Failure), before + 1);
    }

    #[test]
    fn errors_are_eager_but_shown_only_when_touched() {
        let h = Harness::new();
        let mut wizard = h.create();
        wizard.set_field(Field::Name, "a");
        assert!(wizard.visible_error(Field::Name).is_some());
        assert!(wizard.visible_error(Field::Version).is_none());

        wizard.set_field(Field::Name, "ab");
        assert!(wizard.visible_error(Field::Name).is_none());

        wizard.toggle_os_version("Debian 12+");
        wizard.toggle_os_version("Debian 12+");
        assert_eq!(
            wizard.visible_error(Field::OsVersions),
            Some("Select at least one OS version")
        );
    }

    #[test]
    fn tagging_is_optional_and_review_is_terminal() {
        let h = Harness::new();
        let mut wizard = h.edit(&gimp_entry());
        assert!(wizard.advance());
        assert_eq!(wizard.stage(), WizardStage::Tagging);
        assert!(wizard.advance());
        assert_eq!(wizard.stage(), WizardStage::Review);
        assert!(!wizard.advance());
        assert_eq!(wizard.stage(), WizardStage::Review);
    }

    #[test]
    fn stepper_only_jumps_backwards() {
        let h = Harness::new();
        let mut wizard = h.create();
        wizard.select_package(&firefox());
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.stage(), WizardStage::Tagging);

        assert!(!wizard.go_to(WizardStage::Review));
        assert!(!wizard.is_stage_reachable(WizardStage::Tagging));
        assert!(wizard.go_to(WizardStage::Lookup));
        assert_eq!(wizard.stage(), WizardStage::Lookup);
    }

    #[test]
    fn edit_mode_cannot_reach_lookup() {
        let h = Harness::new();
        let mut wizard = h.edit(&gimp_entry());
        wizard.advance();
        assert!(!wizard.go_to(WizardStage::Lookup));
        assert_eq!(wizard.retreat(), Retreat::Moved(WizardStage::Details));
        assert_eq!(
            wizard.retreat(),
            Retreat::Cancel(CancelOutcome::ConfirmationRequired)
        );
    }

    #[test]
    fn cancel_with_empty_draft_completes_immediately() {
        let h = Harness::new();
        let mut wizard = h.create();
        assert_eq!(wizard.retreat(), Retreat::Cancel(CancelOutcome::Discarded));
        assert!(!wizard.is_cancel_prompt_open());
        assert_eq!(h.completions(), 1);
        assert!(wizard.is_finished());
    }

    #[test]
    fn cancel_with_input_needs_confirmation() {
        let h = Harness::new();
        let mut wizard = h.create();
        wizard.add_value(SetKind::Tags, "Web");

        assert_eq!(wizard.request_cancel(), CancelOutcome::ConfirmationRequired);
        assert_eq!(h.completions(), 0);

        wizard.decline_cancel();
        assert!(!wizard.is_cancel_prompt_open());
        assert_eq!(wizard.stage(), WizardStage::Lookup);
        assert!(wizard.values(SetKind::Tags).contains("Web"));

        wizard.request_cancel();
        assert!(wizard.confirm_cancel());
        assert_eq!(h.completions(), 1);
        assert!(wizard.draft().tags.is_empty());
        assert!(!wizard.confirm_cancel());
        assert_eq!(h.completions(), 1);
    }

    #[test]
    fn tag_and_analog_sets_behave_as_sets() {
        let h = Harness::new();
        let mut wizard = h.create();

        wizard.set_input(SetKind::Tags, "IDE");
        assert!(wizard.commit_input(SetKind::Tags));
        wizard.set_input(SetKind::Tags, " IDE ");
        assert!(!wizard.commit_input(SetKind::Tags));
        assert_eq!(wizard.values(SetKind::Tags).len(), 1);

        assert!(!wizard.toggle_value(SetKind::Tags, "IDE"));
        assert!(wizard.values(SetKind::Tags).is_empty());
        assert!(wizard.toggle_value(SetKind::Tags, "Web"));

        assert!(wizard.add_value(SetKind::Analogs, "Atom"));
        assert!(!wizard.add_value(SetKind::Analogs, "Atom"));
        assert!(wizard.remove_value(SetKind::Analogs, "Atom"));
        assert!(wizard.values(SetKind::Analogs).is_empty());
        assert_eq!(wizard.values(SetKind::Tags).len(), 1);
    }

    #[test]
    fn picker_results_follow_the_query() {
        let h = Harness::new();
        let mut wizard = h.create();
        wizard.open_picker(SetKind::Analogs);
        assert!(wizard.editor(SetKind::Analogs).is_picker_open());
        assert_eq!(wizard.picker_results(SetKind::Analogs).len(), 6);

        wizard.set_picker_query(SetKind::Analogs, "chrom");
        assert_eq!(wizard.picker_results(SetKind::Analogs).len(), 2);

        wizard.set_picker_query(SetKind::Tags, "ре");
        let tags: Vec<_> = wizard
            .picker_results(SetKind::Tags)
            .into_iter()
            .map(|o| o.label.clone())
            .collect();
        assert_eq!(tags, vec!["Редактор".to_string()]);
    }

    #[test]
    fn submit_only_from_review() {
        let h = Harness::new();
        let mut wizard = h.edit(&gimp_entry());
        assert!(wizard.prepare_submission().is_none());
        assert!(!wizard.is_submitting());
    }

    #[tokio::test]
    async fn submit_creates_entry_then_completes() {
        let h = Harness::new();
        let mut wizard = h.create();
        wizard.lookup_package("code").await;
        wizard.advance();
        wizard.advance();
        wizard.add_value(SetKind::Tags, "IDE");
        wizard.advance();

        assert!(wizard.submit().await);

        let stored = h.store.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].package_id, "code");
        assert_eq!(stored[0].status, EntryStatus::Pending);
        assert_eq!(
            h.notifier.last(),
            Some(Notice::success("Application added successfully"))
        );
        assert_eq!(h.completions(), 1);
        assert!(wizard.is_finished());
    }

    #[tokio::test]
    async fn submit_revalidates_stale_draft() {
        let h = Harness::new();
        let mut wizard = h.edit(&gimp_entry());
        wizard.advance();
        wizard.advance();
        wizard.draft.version = "broken".to_string();

        assert!(!wizard.submit().await);
        assert_eq!(wizard.stage(), WizardStage::Review);
        assert!(wizard.visible_error(Field::Version).is_some());
        assert_eq!(h.completions(), 0);
    }

    #[tokio::test]
    async fn rejected_submission_stays_on_review() {
        let h = Harness::with_store(InMemoryCatalogStore::seeded());
        let mut wizard = h.create();
        wizard.lookup_package("gimp").await;
        wizard.advance();
        wizard.advance();
        wizard.advance();

        assert!(!wizard.submit().await);

        assert_eq!(wizard.stage(), WizardStage::Review);
        assert!(!wizard.is_submitting());
        assert_eq!(h.completions(), 0);
        assert_eq!(
            h.notifier.last(),
            Some(Notice::failure(
                "Could not save application: package \"gimp\" is already in the catalog"
            ))
        );
    }

    #[tokio::test]
    async fn edit_updates_in_place() {
        let h = Harness::with_store(InMemoryCatalogStore::seeded());
        let mut wizard = h.edit(&gimp_entry());
        wizard.set_field(Field::Version, "2.10.38");
        wizard.advance();
        wizard.advance();

        assert!(wizard.submit().await);

        let stored = h.store.get(3).await.unwrap().unwrap();
        assert_eq!(stored.version, "2.10.38");
        assert_eq!(stored.status, EntryStatus::Active);
        assert_eq!(
            h.notifier.last(),
            Some(Notice::success("Application updated successfully"))
        );
    }

    #[tokio::test]
    async fn completion_waits_for_close_delay() {
        let h = Harness::new();
        let mut context = h.context.clone();
        context.close_delay = Duration::from_millis(1500);
        let mut wizard = ApplicationWizard::create(context, h.callback());
        wizard.select_package(&firefox());
        wizard.advance();
        wizard.advance();
        wizard.advance();

        let submission = wizard.prepare_submission().unwrap();
        assert!(wizard.is_submitting());
        let result = submission.send(h.store.as_ref()).await;
        let now = Instant::now();
        assert!(wizard.finish_submission(result, now));
        assert!(wizard.is_closing());

        assert!(!wizard.poll(now + Duration::from_millis(1000)));
        assert_eq!(h.completions(), 0);
        assert!(!wizard.advance());
        assert_eq!(wizard.retreat(), Retreat::Ignored);
        assert_eq!(wizard.request_cancel(), CancelOutcome::Ignored);

        assert!(wizard.poll(now + Duration::from_millis(1500)));
        assert_eq!(h.completions(), 1);
        assert!(!wizard.poll(now + Duration::from_secs(5)));
        assert_eq!(h.completions(), 1);
    }

    #[tokio::test]
    async fn lookup_finishing_after_submit_is_discarded() {
        let h = Harness::new();
        let mut wizard = h.create();
        let directory = wizard.directory();
        wizard.select_package(&firefox());
        wizard.set_lookup_query("gimp");
        let pending = wizard.begin_lookup().unwrap();
        wizard.advance();
        wizard.advance();
        wizard.advance();

        let submission = wizard.prepare_submission().unwrap();
        let result = submission.send(h.store.as_ref()).await;
        assert!(wizard.finish_submission(result, Instant::now()));
        assert!(wizard.is_closing());

        let response = pending.run(directory.as_ref()).await;
        assert!(!wizard.apply_lookup(response));
        assert!(!wizard.is_searching());
        assert_eq!(wizard.draft().package_id, "firefox");
        assert_eq!(
            h.notifier.last(),
            Some(Notice::success("Application added successfully"))
        );
    }

    #[tokio::test]
    async fn lookup_finishing_while_submitting_is_discarded() {
        let h = Harness::new();
        let mut wizard = h.create();
        let directory = wizard.directory();
        wizard.select_package(&firefox());
        wizard.set_lookup_query("gimp");
        let pending = wizard.begin_lookup().unwrap();
        wizard.advance();
        wizard.advance();
        wizard.advance();

        let submission = wizard.prepare_submission().unwrap();
        let response = pending.run(directory.as_ref()).await;
        assert!(!wizard.apply_lookup(response));
        assert_eq!(wizard.draft().package_id, "firefox");

        let result = submission.send(h.store.as_ref()).await;
        assert!(wizard.finish_submission(result, Instant::now()));
        assert_eq!(h.store.list().await.unwrap()[0].package_id, "firefox");
    }

    #[tokio::test]
    async fn abandoned_submit_leaves_wizard_editable() {
        let h = Harness::new();
        let mut context = h.context.clone();
        context.store = Arc::new(StalledStore);
        let mut wizard = ApplicationWizard::create(context, h.callback());
        wizard.select_package(&firefox());
        wizard.advance();
        wizard.advance();
        wizard.advance();

        let outcome = tokio::time::timeout(Duration::from_millis(20), wizard.submit()).await;
        assert!(outcome.is_err());

        assert!(!wizard.is_submitting());
        assert!(!wizard.is_closing());
        assert_eq!(h.completions(), 0);
        assert_eq!(wizard.retreat(), Retreat::Moved(WizardStage::Tagging));
    }
}
