use crate::domain::services::NoticeKind;
use crate::infrastructure::QueuedNotifier;
use std::time::{Duration, Instant};

const TOAST_TTL: Duration = Duration::from_secs(4);

/// Paints the notifier's live messages in the top-right corner.
pub fn render_toasts(ctx: &egui::Context, notifier: &QueuedNotifier) {
    let now = Instant::now();
    let notices = notifier.active(now, TOAST_TTL);
    if notices.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 56.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let mut dismissed = None;
            for (index, queued) in notices.iter().enumerate().rev() {
                let (fill, icon) = match queued.notice.kind {
                    NoticeKind::Success => (egui::Color32::from_rgb(34, 139, 84), "✔"),
                    NoticeKind::Failure => (egui::Color32::from_rgb(190, 50, 50), "✖"),
                };
                let frame = egui::Frame::default()
                    .fill(fill)
                    .rounding(8.0)
                    .inner_margin(egui::Margin::symmetric(14.0, 10.0))
                    .show(ui, |ui| {
                        ui.set_max_width(360.0);
                        ui.label(
                            egui::RichText::new(format!("{} {}", icon, queued.notice.message))
                                .color(egui::Color32::WHITE),
                        );
                    });
                if frame.response.interact(egui::Sense::click()).clicked() {
                    dismissed = Some(index);
                }
                ui.add_space(6.0);
            }
            if let Some(index) = dismissed {
                notifier.dismiss(index);
            }
        });
}
