use crate::application::UseCaseContainer;
use crate::application::wizard::{
    ApplicationWizard, CancelOutcome, Retreat, SubmitTarget, WizardContext,
};
use crate::domain::entities::{AdminConfig, CatalogEntry, PackageRecord};
use crate::domain::services::Notifier;
use crate::infrastructure::{ConfigRepository, QueuedNotifier};
use crate::presentation::components::{
    CatalogListState, ConfirmAction, ConfirmModal, LogEntry, LogManager, Tab, TabManager,
    render_toasts,
};
use crate::presentation::services::{AsyncExecutor, AsyncTaskManager};
use crate::presentation::style::configure_style;
use crate::presentation::ui::tabs::{
    CatalogAction, CatalogTab, EditorAction, EditorTab, LogAction, LogTab, SettingsAction,
    SettingsTab,
};
use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::time::Instant;

pub struct CatalogAdminApp {
    tab_manager: TabManager,
    list_state: CatalogListState,
    delete_modal: ConfirmModal,
    discard_modal: ConfirmModal,
    log_manager: LogManager,
    log_rx: Receiver<LogEntry>,

    wizard: Option<ApplicationWizard>,
    wizard_done: Arc<AtomicBool>,
    wizard_context: WizardContext,
    package_rows: Vec<PackageRecord>,

    task_manager: AsyncTaskManager,
    use_cases: Arc<UseCaseContainer>,
    executor: AsyncExecutor,
    notifier: QueuedNotifier,

    config: AdminConfig,
    config_repository: ConfigRepository,
    style_applied: bool,
    output_panel_height: f32,
}

impl CatalogAdminApp {
    pub fn new(
        use_cases: Arc<UseCaseContainer>,
        wizard_context: WizardContext,
        notifier: QueuedNotifier,
        config: AdminConfig,
        config_repository: ConfigRepository,
        log_rx: Receiver<LogEntry>,
    ) -> Result<Self> {
        let executor = AsyncExecutor::new()?;

        Ok(Self {
            tab_manager: TabManager::new(),
            list_state: CatalogListState::new(config.effective_page_size()),
            delete_modal: ConfirmModal::new("delete_modal"),
            discard_modal: ConfirmModal::new("discard_modal"),
            log_manager: LogManager::new(),
            log_rx,
            wizard: None,
            wizard_done: Arc::new(AtomicBool::new(false)),
            wizard_context,
            package_rows: Vec::new(),
            task_manager: AsyncTaskManager::new(),
            use_cases,
            executor,
            notifier,
            config,
            config_repository,
            style_applied: false,
            output_panel_height: 160.0,
        })
    }

    fn refresh_catalog(&mut self) {
        tracing::debug!("Reloading catalog page {}", self.list_state.query().page());
        let result = self
            .executor
            .execute(self.use_cases.list_catalog.execute(self.list_state.query()));

        match result {
            Ok(listing) => self.list_state.set_listing(listing),
            Err(e) => {
                tracing::error!("Failed to load catalog: {}", e);
                self.notifier.failure(&format!("Could not load applications: {}", e));
            }
        }
    }

    fn completion_flag(&self) -> Box<dyn FnMut() + Send> {
        self.wizard_done.store(false, Ordering::SeqCst);
        let done = Arc::clone(&self.wizard_done);
        Box::new(move || done.store(true, Ordering::SeqCst))
    }

    fn context(&self) -> WizardContext {
        self.wizard_context
            .clone()
            .with_close_delay(self.config.close_delay())
    }

    fn open_create_wizard(&mut self) {
        if self.wizard.is_none() {
            let on_complete = self.completion_flag();
            self.wizard = Some(ApplicationWizard::create(self.context(), on_complete));
        }
        self.tab_manager.switch_to(Tab::Editor);
    }

    fn open_edit_wizard(&mut self, entry: CatalogEntry) {
        let entry = match self.executor.execute(self.use_cases.get_entry.execute(entry.id)) {
            Ok(fresh) => fresh,
            Err(e) => {
                tracing::error!("Failed to reload entry {}: {}", entry.id, e);
                self.notifier.failure(&format!("Could not open application: {}", e));
                self.list_state.mark_stale();
                return;
            }
        };

        if self.wizard.is_some() {
            tracing::warn!("Replacing open wizard with edit of entry {}", entry.id);
        }
        let on_complete = self.completion_flag();
        self.wizard = Some(ApplicationWizard::edit(self.context(), &entry, on_complete));
        self.tab_manager.switch_to(Tab::Editor);
    }

    fn handle_catalog_action(&mut self, action: CatalogAction) {
        match action {
            CatalogAction::AddNew => self.open_create_wizard(),
            CatalogAction::Refresh => self.list_state.mark_stale(),
            CatalogAction::Edit(entry) => self.open_edit_wizard(entry),
            CatalogAction::Delete(entry) => {
                if self.config.confirm_before_delete {
                    self.delete_modal.open(
                        "Delete application?",
                        format!(
                            "Are you sure you want to delete \"{}\"? This cannot be undone: the \
                             application will be removed from the catalog and users will no \
                             longer be able to install it.",
                            entry.name
                        ),
                        "Delete",
                    );
                    self.list_state.request_delete(entry);
                } else {
                    self.delete_entry(entry);
                }
            }
        }
    }

    fn delete_entry(&mut self, entry: CatalogEntry) {
        match self.executor.execute(self.use_cases.delete_entry.execute(entry.id)) {
            Ok(deleted) => {
                self.notifier
                    .success(&format!("Application \"{}\" deleted", deleted.name));
            }
            Err(e) => {
                tracing::error!("Failed to delete entry {}: {}", entry.id, e);
                self.notifier
                    .failure(&format!("Could not delete application: {}", e));
            }
        }
        self.list_state.mark_stale();
    }

    fn handle_editor_action(&mut self, action: EditorAction) {
        let Some(wizard) = self.wizard.as_mut() else {
            return;
        };

        match action {
            EditorAction::Back => {
                if let Retreat::Cancel(CancelOutcome::ConfirmationRequired) = wizard.retreat() {
                    self.open_discard_prompt();
                }
            }
            EditorAction::Cancel => {
                if wizard.request_cancel() == CancelOutcome::ConfirmationRequired {
                    self.open_discard_prompt();
                }
            }
            EditorAction::Lookup => {
                if let Some(request) = wizard.begin_lookup() {
                    self.task_manager.spawn_lookup(request, wizard.directory());
                }
            }
            EditorAction::Browse => {
                self.task_manager
                    .spawn_browse(String::new(), Arc::clone(&self.use_cases.browse_packages));
            }
            EditorAction::Submit => {
                let Some(submission) = wizard.prepare_submission() else {
                    return;
                };
                let result = match submission.target {
                    SubmitTarget::Create => self
                        .executor
                        .execute(self.use_cases.create_entry.execute(submission.entry)),
                    SubmitTarget::Update(id) => self
                        .executor
                        .execute(self.use_cases.update_entry.execute(id, submission.entry)),
                };
                if wizard.finish_submission(result, Instant::now()) {
                    self.list_state.mark_stale();
                }
            }
        }
    }

    fn open_discard_prompt(&mut self) {
        self.discard_modal.open(
            "Discard changes?",
            "The form has unsaved data. Leave and discard it?",
            "Discard",
        );
    }

    fn handle_settings_action(&mut self, ctx: &egui::Context, action: SettingsAction) {
        match action {
            SettingsAction::SaveConfig => {
                if let Err(e) = self.config_repository.save(&self.config) {
                    tracing::error!("Failed to save config: {:#}", e);
                    self.notifier.failure(&format!("Could not save settings: {}", e));
                }
            }
            SettingsAction::ApplyTheme => configure_style(ctx, self.config.theme),
            SettingsAction::ApplyPageSize => {
                let size = self.config.effective_page_size();
                self.list_state.query_mut().set_page_size(size);
            }
        }
    }

    fn poll_async_tasks(&mut self) {
        let result = self.task_manager.poll();

        for response in result.lookups {
            match self.wizard.as_mut() {
                Some(wizard) => {
                    wizard.apply_lookup(response);
                }
                None => tracing::debug!("Lookup #{} finished after wizard closed", response.generation),
            }
        }

        if let Some((filter, outcome)) = result.listing {
            match outcome {
                Ok(rows) => {
                    tracing::debug!("{} package rows for '{}'", rows.len(), filter);
                    self.package_rows = rows;
                }
                Err(e) => self
                    .notifier
                    .failure(&format!("Could not list repository packages: {}", e)),
            }
        }
    }

    fn poll_wizard(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.poll(Instant::now());
        }

        if self.wizard_done.swap(false, Ordering::SeqCst) {
            tracing::info!("Wizard finished, returning to the list");
            self.wizard = None;
            self.discard_modal.close();
            self.tab_manager.switch_to(Tab::Catalog);
            self.list_state.mark_stale();
        }
    }

    fn poll_logs(&mut self) {
        while let Ok(entry) = self.log_rx.try_recv() {
            self.log_manager.push(entry);
        }
    }

    fn editor_label(&self) -> &'static str {
        match &self.wizard {
            Some(wizard) if wizard.is_editing() => "Edit application",
            _ => Tab::Editor.label(),
        }
    }
}

impl eframe::App for CatalogAdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            self.style_applied = true;
            configure_style(ctx, self.config.theme);
        }

        self.poll_logs();
        self.poll_async_tasks();
        self.poll_wizard();
        if self.list_state.take_refresh() {
            self.refresh_catalog();
        }
        ctx.request_repaint();

        let mut switch_to = None;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📦 Catalog Admin");
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();

                for tab in [Tab::Catalog, Tab::Editor, Tab::Settings, Tab::Log] {
                    let label = if tab == Tab::Editor {
                        self.editor_label()
                    } else {
                        tab.label()
                    };
                    if ui
                        .selectable_label(self.tab_manager.is_current(tab), label)
                        .clicked()
                    {
                        switch_to = Some(tab);
                    }
                }
            });
        });
        match switch_to {
            Some(Tab::Editor) => self.open_create_wizard(),
            Some(tab) => self.tab_manager.switch_to(tab),
            None => {}
        }

        egui::TopBottomPanel::bottom("bottom_panel")
            .resizable(true)
            .default_height(self.output_panel_height)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.label(egui::RichText::new("Activity").strong());
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        for entry in self.log_manager.filtered_logs() {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(format!("[{}]", entry.format_timestamp()))
                                        .color(egui::Color32::GRAY)
                                        .monospace(),
                                );
                                ui.monospace(&entry.message);
                            });
                        }
                    });
                self.output_panel_height = ui.min_rect().height();
            });

        let mut catalog_actions = Vec::new();
        let mut editor_actions = Vec::new();
        let mut settings_actions = Vec::new();
        let mut log_actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| match self.tab_manager.current() {
            Tab::Catalog => {
                catalog_actions = CatalogTab::show(ui, &mut self.list_state);
            }
            Tab::Editor => match self.wizard.as_mut() {
                Some(wizard) => {
                    editor_actions = EditorTab::show(
                        ui,
                        wizard,
                        &self.package_rows,
                        self.task_manager.is_browsing(),
                    );
                }
                None => {
                    ui.spinner();
                }
            },
            Tab::Settings => {
                settings_actions = SettingsTab::show(ui, &mut self.config, &mut self.log_manager);
            }
            Tab::Log => {
                log_actions = LogTab::show(ui, &self.log_manager);
            }
        });

        for action in catalog_actions {
            self.handle_catalog_action(action);
        }
        for action in editor_actions {
            self.handle_editor_action(action);
        }
        for action in settings_actions {
            self.handle_settings_action(ctx, action);
        }
        for action in log_actions {
            match action {
                LogAction::CopyAll => ctx.copy_text(self.log_manager.export_text()),
                LogAction::Clear => self.log_manager.clear(),
            }
        }

        if let Some(action) = self.delete_modal.render(ctx) {
            match (action, self.list_state.take_pending_delete()) {
                (ConfirmAction::Confirm, Some(entry)) => self.delete_entry(entry),
                (_, pending) => {
                    if let Some(entry) = pending {
                        tracing::debug!("Delete of entry {} cancelled", entry.id);
                    }
                }
            }
        }

        if let Some(action) = self.discard_modal.render(ctx) {
            if let Some(wizard) = self.wizard.as_mut() {
                match action {
                    ConfirmAction::Confirm => {
                        wizard.confirm_cancel();
                    }
                    ConfirmAction::Cancel => wizard.decline_cancel(),
                }
            }
        }

        render_toasts(ctx, &self.notifier);
    }
}
