use crate::presentation::components::{LogEntry, LogLevel, LogManager};
use crate::presentation::style;
use eframe::egui;

pub enum LogAction {
    CopyAll,
    Clear,
}

pub struct LogTab;

impl LogTab {
    pub fn show(ui: &mut egui::Ui, log_manager: &LogManager) -> Vec<LogAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.heading("Activity");
            let shown = log_manager.filtered_logs().count();
            ui.label(
                egui::RichText::new(format!("{} of {} entries shown", shown, log_manager.len()))
                    .color(style::MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add_enabled(!log_manager.is_empty(), egui::Button::new("🗑 Clear")).clicked() {
                    actions.push(LogAction::Clear);
                }
                if ui.add_enabled(!log_manager.is_empty(), egui::Button::new("📋 Copy")).clicked() {
                    actions.push(LogAction::CopyAll);
                }
            });
        });
        ui.separator();

        if log_manager.is_empty() {
            ui.label(egui::RichText::new("Nothing has happened yet").color(style::MUTED));
            return actions;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Frame::default()
                    .fill(ui.visuals().extreme_bg_color)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        egui::Grid::new("activity_grid")
                            .num_columns(3)
                            .spacing([12.0, 2.0])
                            .show(ui, |ui| {
                                for entry in log_manager.filtered_logs_reversed() {
                                    show_entry(ui, entry);
                                }
                            });
                    });
            });

        actions
    }
}

fn show_entry(ui: &mut egui::Ui, entry: &LogEntry) {
    ui.label(
        egui::RichText::new(entry.format_timestamp())
            .color(style::MUTED)
            .monospace(),
    );
    ui.label(
        egui::RichText::new(entry.level.to_string())
            .color(level_color(entry.level))
            .monospace(),
    );
    ui.label(egui::RichText::new(&entry.message).monospace());
    ui.end_row();
}

fn level_color(level: LogLevel) -> egui::Color32 {
    match level {
        LogLevel::Trace | LogLevel::Debug => style::MUTED,
        LogLevel::Info => style::ACCENT,
        LogLevel::Warn => egui::Color32::from_rgb(230, 170, 40),
        LogLevel::Error => style::ERROR,
    }
}
