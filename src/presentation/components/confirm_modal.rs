#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Confirm,
    Cancel,
}

/// Blocking yes/no dialog used for deletes and for discarding a draft.
pub struct ConfirmModal {
    id: &'static str,
    title: String,
    message: String,
    confirm_label: String,
    show: bool,
}

impl ConfirmModal {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            title: String::new(),
            message: String::new(),
            confirm_label: "Confirm".to_string(),
            show: false,
        }
    }

    pub fn open(&mut self, title: impl Into<String>, message: impl Into<String>, confirm_label: &str) {
        self.title = title.into();
        self.message = message.into();
        self.confirm_label = confirm_label.to_string();
        self.show = true;
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    pub fn is_open(&self) -> bool {
        self.show
    }

    pub fn render(&mut self, ctx: &egui::Context) -> Option<ConfirmAction> {
        if !self.show {
            return None;
        }

        let mut action = None;

        egui::Window::new(&self.title)
            .id(egui::Id::new(self.id))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_max_width(420.0);
                ui.label(&self.message);
                ui.separator();

                ui.horizontal(|ui| {
                    let confirm = egui::Button::new(
                        egui::RichText::new(&self.confirm_label).color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(200, 60, 60));
                    if ui.add(confirm).clicked() {
                        action = Some(ConfirmAction::Confirm);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(ConfirmAction::Cancel);
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            action = Some(ConfirmAction::Cancel);
        }

        if action.is_some() {
            self.close();
        }
        action
    }
}
