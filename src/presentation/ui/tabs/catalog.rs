use crate::domain::entities::{CatalogEntry, EntryStatus, PAGE_SIZES};
use crate::domain::services::{SortField, SortOrder};
use crate::presentation::components::CatalogListState;
use crate::presentation::style;
use eframe::egui;

pub enum CatalogAction {
    AddNew,
    Refresh,
    Edit(CatalogEntry),
    Delete(CatalogEntry),
}

const COLUMNS: [(SortField, &str); 5] = [
    (SortField::Name, "Name"),
    (SortField::Version, "Version"),
    (SortField::Category, "Category"),
    (SortField::Size, "Size"),
    (SortField::OsVersion, "OS"),
];

pub struct CatalogTab;

impl CatalogTab {
    pub fn show(ui: &mut egui::Ui, state: &mut CatalogListState) -> Vec<CatalogAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.heading("Applications");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ Add application").clicked() {
                    actions.push(CatalogAction::AddNew);
                }
                if ui.button("⟳ Refresh").clicked() {
                    actions.push(CatalogAction::Refresh);
                }
            });
        });

        ui.separator();
        Self::show_filters(ui, state);
        ui.separator();

        let Some(listing) = state.listing() else {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading catalog...");
            });
            return actions;
        };
        let page = listing.page.clone();

        if page.items.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No applications match the current filters").color(style::MUTED));
            });
        } else {
            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .max_height(ui.available_height() - 48.0)
                .show(ui, |ui| {
                    egui::Grid::new("catalog_grid")
                        .num_columns(7)
                        .striped(true)
                        .spacing([16.0, 8.0])
                        .show(ui, |ui| {
                            Self::show_header(ui, state);
                            for entry in &page.items {
                                Self::show_row(ui, entry, &mut actions);
                            }
                        });
                });
        }

        ui.separator();
        Self::show_pagination(ui, state, page.total, page.total_pages);

        actions
    }

    fn show_filters(ui: &mut egui::Ui, state: &mut CatalogListState) {
        let (categories, os_versions) = state
            .listing()
            .map(|l| (l.categories.clone(), l.os_versions.clone()))
            .unwrap_or_default();

        ui.horizontal(|ui| {
            ui.label("Search:");
            let mut search = state.query().search().to_string();
            if ui
                .add(egui::TextEdit::singleline(&mut search).hint_text("Name or category"))
                .changed()
            {
                state.query_mut().set_search(&search);
            }

            ui.separator();

            let mut category = state.query().category().map(str::to_string);
            egui::ComboBox::from_id_salt("category_filter")
                .selected_text(category.as_deref().unwrap_or("All categories"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut category, None, "All categories");
                    for option in &categories {
                        ui.selectable_value(&mut category, Some(option.clone()), option);
                    }
                });
            if category.as_deref() != state.query().category() {
                state.query_mut().set_category(category);
            }

            let mut os_version = state.query().os_version().map(str::to_string);
            egui::ComboBox::from_id_salt("os_filter")
                .selected_text(os_version.as_deref().unwrap_or("All OS versions"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut os_version, None, "All OS versions");
                    for option in &os_versions {
                        ui.selectable_value(&mut os_version, Some(option.clone()), option);
                    }
                });
            if os_version.as_deref() != state.query().os_version() {
                state.query_mut().set_os_version(os_version);
            }
        });
    }

    fn show_header(ui: &mut egui::Ui, state: &mut CatalogListState) {
        let current = state.query().sort();
        for (field, title) in COLUMNS {
            let arrow = match current {
                Some((f, SortOrder::Ascending)) if f == field => " ▲",
                Some((f, SortOrder::Descending)) if f == field => " ▼",
                _ => "",
            };
            let label = egui::RichText::new(format!("{}{}", title, arrow)).strong();
            if ui.add(egui::Button::new(label).frame(false)).clicked() {
                state.query_mut().toggle_sort(field);
            }
            if field == SortField::Name {
                ui.label(egui::RichText::new("Package").strong());
            }
        }
        ui.label("");
        ui.end_row();
    }

    fn show_row(ui: &mut egui::Ui, entry: &CatalogEntry, actions: &mut Vec<CatalogAction>) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&entry.name).strong());
            if entry.status == EntryStatus::Pending {
                ui.label(egui::RichText::new("pending").small().color(style::MUTED));
            }
        });
        ui.monospace(&entry.package_id);
        ui.label(&entry.version);
        ui.label(&entry.category);
        ui.label(
            entry
                .size_mb
                .map(|s| format!("{} MB", s))
                .unwrap_or_else(|| "—".to_string()),
        );
        ui.label(
            entry
                .target_os_versions
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        );
        ui.horizontal(|ui| {
            if ui.small_button("✏ Edit").clicked() {
                actions.push(CatalogAction::Edit(entry.clone()));
            }
            if ui.small_button("🗑 Delete").clicked() {
                actions.push(CatalogAction::Delete(entry.clone()));
            }
        });
        ui.end_row();
    }

    fn show_pagination(
        ui: &mut egui::Ui,
        state: &mut CatalogListState,
        total: usize,
        total_pages: usize,
    ) {
        ui.horizontal(|ui| {
            ui.label(format!("{} application(s)", total));
            ui.separator();

            let page = state.query().page();
            if ui
                .add_enabled(page > 1, egui::Button::new("◀"))
                .clicked()
            {
                state.query_mut().set_page(page - 1);
            }
            ui.label(format!("Page {} of {}", page, total_pages.max(1)));
            if ui
                .add_enabled(page < total_pages, egui::Button::new("▶"))
                .clicked()
            {
                state.query_mut().set_page(page + 1);
            }

            ui.separator();
            ui.label("Per page:");
            let mut page_size = state.query().page_size();
            egui::ComboBox::from_id_salt("page_size")
                .selected_text(page_size.to_string())
                .show_ui(ui, |ui| {
                    for size in PAGE_SIZES {
                        ui.selectable_value(&mut page_size, size, size.to_string());
                    }
                });
            if page_size != state.query().page_size() {
                state.query_mut().set_page_size(page_size);
            }
        });
    }
}
