use crate::domain::entities::{AdminConfig, PAGE_SIZES, ThemeMode};
use crate::presentation::components::{LogLevel, LogManager};
use eframe::egui;

pub enum SettingsAction {
    SaveConfig,
    ApplyTheme,
    ApplyPageSize,
}

pub struct SettingsTab;

impl SettingsTab {
    pub fn show(
        ui: &mut egui::Ui,
        config: &mut AdminConfig,
        log_manager: &mut LogManager,
    ) -> Vec<SettingsAction> {
        let mut actions = Vec::new();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.columns(2, |columns| {
                columns[0].vertical(|ui| {
                    ui.group(|ui| {
                        ui.heading("General");

                        ui.horizontal(|ui| {
                            ui.label("Theme:");
                            egui::ComboBox::from_id_salt("theme_combo")
                                .selected_text(format!("{:?}", config.theme))
                                .show_ui(ui, |ui| {
                                    for (mode, label) in [
                                        (ThemeMode::System, "System"),
                                        (ThemeMode::Light, "Light"),
                                        (ThemeMode::Dark, "Dark"),
                                    ] {
                                        if ui.selectable_value(&mut config.theme, mode, label).clicked() {
                                            actions.push(SettingsAction::SaveConfig);
                                            actions.push(SettingsAction::ApplyTheme);
                                        }
                                    }
                                });
                        });

                        ui.horizontal(|ui| {
                            ui.label("Rows per page:");
                            egui::ComboBox::from_id_salt("page_size_combo")
                                .selected_text(config.effective_page_size().to_string())
                                .show_ui(ui, |ui| {
                                    for size in PAGE_SIZES {
                                        if ui
                                            .selectable_value(&mut config.page_size, size, size.to_string())
                                            .clicked()
                                        {
                                            actions.push(SettingsAction::SaveConfig);
                                            actions.push(SettingsAction::ApplyPageSize);
                                        }
                                    }
                                });
                        });

                        if ui
                            .checkbox(&mut config.confirm_before_delete, "Confirm before deleting")
                            .changed()
                        {
                            actions.push(SettingsAction::SaveConfig);
                        }
                    });

                    ui.add_space(10.0);

                    ui.group(|ui| {
                        ui.heading("Timing");
                        ui.horizontal(|ui| {
                            ui.label("Close delay after save (ms):");
                            if ui
                                .add(egui::DragValue::new(&mut config.close_delay_ms).range(0..=10_000))
                                .changed()
                            {
                                actions.push(SettingsAction::SaveConfig);
                            }
                        });
                        ui.horizontal(|ui| {
                            ui.label("Repository latency (ms):");
                            if ui
                                .add(egui::DragValue::new(&mut config.lookup_latency_ms).range(0..=10_000))
                                .changed()
                            {
                                actions.push(SettingsAction::SaveConfig);
                            }
                        });
                        ui.label(
                            egui::RichText::new("Repository latency applies after restart").small(),
                        );
                    });
                });

                columns[1].vertical(|ui| {
                    ui.group(|ui| {
                        ui.heading("Log Levels");
                        for (level, label) in [
                            (LogLevel::Trace, "Trace"),
                            (LogLevel::Debug, "Debug"),
                            (LogLevel::Info, "Info"),
                            (LogLevel::Warn, "Warn"),
                            (LogLevel::Error, "Error"),
                        ] {
                            let mut visible = log_manager.is_level_visible(level);
                            if ui.checkbox(&mut visible, label).changed() {
                                log_manager.set_level_visible(level, visible);
                            }
                        }
                    });
                });
            });
        });

        actions
    }
}
