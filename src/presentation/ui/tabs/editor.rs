use crate::application::wizard::{ApplicationWizard, SetKind, WizardStage};
use crate::domain::entities::{CATEGORIES, Field, OS_VERSIONS, PackageRecord, PickerOption};
use crate::presentation::style;
use eframe::egui;

pub enum EditorAction {
    Back,
    Cancel,
    Lookup,
    Browse,
    Submit,
}

pub struct EditorTab;

impl EditorTab {
    pub fn show(
        ui: &mut egui::Ui,
        wizard: &mut ApplicationWizard,
        packages: &[PackageRecord],
        browsing: bool,
    ) -> Vec<EditorAction> {
        let mut actions = Vec::new();

        let title = if wizard.is_editing() {
            "Edit application"
        } else {
            "Add application"
        };
        ui.heading(title);
        Self::show_stepper(ui, wizard);
        ui.separator();

        if wizard.is_closing() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("Saved. Returning to the list...").color(style::SUCCESS));
            });
            return actions;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .max_height(ui.available_height() - 56.0)
            .show(ui, |ui| match wizard.stage() {
                WizardStage::Lookup => Self::show_lookup_stage(ui, wizard, &mut actions),
                WizardStage::Details => Self::show_details_stage(ui, wizard),
                WizardStage::Tagging => {
                    Self::show_set_section(ui, wizard, SetKind::Tags);
                    ui.add_space(12.0);
                    Self::show_set_section(ui, wizard, SetKind::Analogs);
                }
                WizardStage::Review => Self::show_review_stage(ui, wizard),
            });

        ui.separator();
        Self::show_footer(ui, wizard, &mut actions);

        let ctx = ui.ctx().clone();
        Self::show_lookup_panel(&ctx, wizard, packages, browsing, &mut actions);
        Self::show_picker(&ctx, wizard, SetKind::Tags);
        Self::show_picker(&ctx, wizard, SetKind::Analogs);

        actions
    }

    fn show_stepper(ui: &mut egui::Ui, wizard: &mut ApplicationWizard) {
        let current = wizard.stage();
        let mut jump = None;
        ui.horizontal(|ui| {
            for (position, stage) in wizard.stages().iter().enumerate() {
                if position > 0 {
                    ui.label(egui::RichText::new("›").color(style::MUTED));
                }
                let text = format!("{}. {}", position + 1, stage.label());
                if *stage == current {
                    ui.label(egui::RichText::new(text).strong().color(style::ACCENT));
                } else if wizard.is_stage_reachable(*stage) {
                    if ui.link(text).clicked() {
                        jump = Some(*stage);
                    }
                } else {
                    ui.label(egui::RichText::new(text).color(style::MUTED));
                }
            }
        });
        if let Some(stage) = jump {
            wizard.go_to(stage);
        }
    }

    fn show_lookup_stage(
        ui: &mut egui::Ui,
        wizard: &mut ApplicationWizard,
        actions: &mut Vec<EditorAction>,
    ) {
        ui.label("Find the package in the repository to pre-fill the application details.");
        ui.add_space(8.0);

        if ui.button("🔍 Search repository").clicked() {
            wizard.open_lookup_panel();
            actions.push(EditorAction::Browse);
        }

        let draft = wizard.draft();
        if draft.has_package() {
            ui.add_space(12.0);
            ui.group(|ui| {
                ui.label(egui::RichText::new("Selected package").strong());
                egui::Grid::new("selected_package").num_columns(2).show(ui, |ui| {
                    ui.label("Name:");
                    ui.label(&draft.name);
                    ui.end_row();
                    ui.label("Package:");
                    ui.monospace(&draft.package_id);
                    ui.end_row();
                    ui.label("Version:");
                    ui.label(&draft.version);
                    ui.end_row();
                });
            });
        }
    }

    fn show_details_stage(ui: &mut egui::Ui, wizard: &mut ApplicationWizard) {
        text_field(ui, wizard, Field::Name, "Application name *", "e.g. Visual Studio Code", false);
        text_field(ui, wizard, Field::PackageId, "Package name *", "e.g. code", false);
        text_field(
            ui,
            wizard,
            Field::Description,
            "Description *",
            "Short description of the application and its main features",
            true,
        );
        text_field(ui, wizard, Field::Version, "Version *", "1.0.0", false);

        ui.label("Category *");
        let mut category = wizard.draft().category.clone();
        egui::ComboBox::from_id_salt("category")
            .selected_text(if category.is_empty() { "Choose" } else { category.as_str() })
            .show_ui(ui, |ui| {
                for option in CATEGORIES {
                    ui.selectable_value(&mut category, option.to_string(), option);
                }
            });
        if category != wizard.draft().category {
            wizard.set_field(Field::Category, category);
        }
        field_error(ui, wizard, Field::Category);

        text_field(ui, wizard, Field::Size, "Size (MB)", "85", false);

        ui.label("Target OS versions *");
        ui.horizontal(|ui| {
            for version in OS_VERSIONS {
                let mut checked = wizard.draft().target_os_versions.contains(version);
                if ui.checkbox(&mut checked, version).changed() {
                    wizard.toggle_os_version(version);
                }
            }
        });
        field_error(ui, wizard, Field::OsVersions);

        text_field(ui, wizard, Field::Website, "Website", "https://example.com", false);
        text_field(ui, wizard, Field::License, "License", "MIT, GPL-3.0, Apache-2.0", false);
        text_field(ui, wizard, Field::Changelog, "Changelog", "What's new in this version...", true);
    }

    fn show_set_section(ui: &mut egui::Ui, wizard: &mut ApplicationWizard, kind: SetKind) {
        let (title, hint) = match kind {
            SetKind::Tags => ("Tags", "Type a tag..."),
            SetKind::Analogs => ("Analogs", "Type an application name..."),
        };

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} ({})", title, wizard.values(kind).len()))
                        .strong(),
                );
                if ui.button("Choose...").clicked() {
                    wizard.open_picker(kind);
                }
            });

            ui.horizontal(|ui| {
                let mut input = wizard.editor(kind).input().to_string();
                let response = ui.add(egui::TextEdit::singleline(&mut input).hint_text(hint));
                if response.changed() {
                    wizard.set_input(kind, input);
                }
                let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Add").clicked() || entered {
                    wizard.commit_input(kind);
                }
            });

            let values: Vec<String> = wizard.values(kind).iter().cloned().collect();
            if values.is_empty() {
                ui.label(egui::RichText::new("Nothing selected").color(style::MUTED));
            }
            ui.horizontal_wrapped(|ui| {
                for value in values {
                    if ui.button(format!("{} ✕", value)).clicked() {
                        wizard.remove_value(kind, &value);
                    }
                }
            });
        });
    }

    fn show_review_stage(ui: &mut egui::Ui, wizard: &ApplicationWizard) {
        let entry = wizard.preview_entry();
        let joined = |set: &std::collections::BTreeSet<String>| {
            if set.is_empty() {
                "—".to_string()
            } else {
                set.iter().cloned().collect::<Vec<_>>().join(", ")
            }
        };

        egui::Grid::new("review_grid")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                let mut row = |label: &str, value: String| {
                    ui.label(egui::RichText::new(label).strong());
                    ui.label(value);
                    ui.end_row();
                };
                row("Name", entry.name.clone());
                row("Package", entry.package_id.clone());
                row("Version", entry.version.clone());
                row("Category", entry.category.clone());
                row("Status", entry.status.to_string());
                row(
                    "Size",
                    entry.size_mb.map(|s| format!("{} MB", s)).unwrap_or_else(|| "—".to_string()),
                );
                row("OS versions", joined(&entry.target_os_versions));
                row("Website", entry.website_url.clone().unwrap_or_else(|| "—".to_string()));
                row("License", entry.license.clone().unwrap_or_else(|| "—".to_string()));
                row("Tags", joined(&entry.tags));
                row("Analogs", joined(&entry.analogs));
                row("Description", entry.description.clone());
                if let Some(changelog) = &entry.changelog {
                    row("Changelog", changelog.clone());
                }
            });
    }

    fn show_footer(ui: &mut egui::Ui, wizard: &mut ApplicationWizard, actions: &mut Vec<EditorAction>) {
        let busy = wizard.is_submitting();
        ui.horizontal(|ui| {
            if ui.add_enabled(!busy, egui::Button::new("◀ Back")).clicked() {
                actions.push(EditorAction::Back);
            }
            if ui.add_enabled(!busy, egui::Button::new("Cancel")).clicked() {
                actions.push(EditorAction::Cancel);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if wizard.stage() == WizardStage::Review {
                    let label = if wizard.is_editing() { "Save changes" } else { "Submit" };
                    if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                        actions.push(EditorAction::Submit);
                    }
                    if busy {
                        ui.spinner();
                    }
                } else if ui.button("Next ▶").clicked() {
                    wizard.advance();
                }
            });
        });
    }

    fn show_lookup_panel(
        ctx: &egui::Context,
        wizard: &mut ApplicationWizard,
        packages: &[PackageRecord],
        browsing: bool,
        actions: &mut Vec<EditorAction>,
    ) {
        if !wizard.lookup().is_panel_open() {
            return;
        }

        let mut open = true;
        egui::Window::new("Repository search")
            .open(&mut open)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 64.0))
            .default_width(420.0)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Package name");
                ui.horizontal(|ui| {
                    let mut query = wizard.lookup().query().to_string();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut query).hint_text("Enter a package name..."),
                    );
                    if response.changed() {
                        wizard.set_lookup_query(query);
                    }
                    let entered =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let searching = wizard.is_searching();
                    if (ui.add_enabled(!searching, egui::Button::new("Find")).clicked() || entered)
                        && !searching
                    {
                        actions.push(EditorAction::Lookup);
                    }
                    if searching {
                        ui.spinner();
                    }
                });

                ui.separator();
                ui.label(egui::RichText::new("Available packages").strong());
                if browsing {
                    ui.spinner();
                }

                let query = wizard.lookup().query().trim().to_string();
                let mut chosen = None;
                egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                    for record in packages.iter().filter(|p| p.matches_filter(&query)) {
                        let text = format!(
                            "{}  ({}, {})",
                            record.display_name, record.identifier, record.version
                        );
                        let response = ui.selectable_label(false, text);
                        let response = if record.description.is_empty() {
                            response
                        } else {
                            response.on_hover_text(&record.description)
                        };
                        if response.clicked() {
                            chosen = Some(record.clone());
                        }
                    }
                });
                if let Some(record) = chosen {
                    wizard.select_package(&record);
                }
            });

        if !open {
            wizard.close_lookup_panel();
        }
    }

    fn show_picker(ctx: &egui::Context, wizard: &mut ApplicationWizard, kind: SetKind) {
        if !wizard.editor(kind).is_picker_open() {
            return;
        }

        let title = match kind {
            SetKind::Tags => "Choose tags",
            SetKind::Analogs => "Choose analogs",
        };

        let mut open = true;
        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Search:");
                    let mut query = wizard.editor(kind).picker_query().to_string();
                    if ui.text_edit_singleline(&mut query).changed() {
                        wizard.set_picker_query(kind, query);
                    }
                });
                ui.separator();

                let options: Vec<PickerOption> =
                    wizard.picker_results(kind).into_iter().cloned().collect();
                if options.is_empty() {
                    ui.label(egui::RichText::new("Nothing found").color(style::MUTED));
                }
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for option in &options {
                        let mut checked = wizard.values(kind).contains(&option.label);
                        let response = ui.checkbox(&mut checked, &option.label);
                        if let Some(description) = &option.description {
                            ui.label(egui::RichText::new(description).small().color(style::MUTED));
                        }
                        if response.changed() {
                            wizard.toggle_value(kind, &option.label);
                        }
                    }
                });

                ui.separator();
                if ui.button("Done").clicked() {
                    wizard.close_picker(kind);
                }
            });

        if !open {
            wizard.close_picker(kind);
        }
    }
}

fn text_field(
    ui: &mut egui::Ui,
    wizard: &mut ApplicationWizard,
    field: Field,
    label: &str,
    hint: &str,
    multiline: bool,
) {
    ui.label(label);
    let mut value = wizard.draft().text(field).unwrap_or_default().to_string();
    let editor = if multiline {
        egui::TextEdit::multiline(&mut value).desired_rows(3)
    } else {
        egui::TextEdit::singleline(&mut value)
    };
    if ui
        .add(editor.hint_text(hint).desired_width(f32::INFINITY))
        .changed()
    {
        wizard.set_field(field, value);
    }
    field_error(ui, wizard, field);
}

fn field_error(ui: &mut egui::Ui, wizard: &ApplicationWizard, field: Field) {
    if let Some(message) = wizard.visible_error(field) {
        ui.label(egui::RichText::new(message).small().color(style::ERROR));
    }
}
