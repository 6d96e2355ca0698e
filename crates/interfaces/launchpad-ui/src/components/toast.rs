use crate::theme::*;
use crate::utils::status_dot;
use eframe::egui;

/// Bottom-right notification. Lifetime is owned by the settings
/// coordinator; this only renders whatever is currently visible.
pub fn draw(ctx: &egui::Context, text: &str) {
    egui::Area::new(egui::Id::new("toast"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(COL_BG_RAISED)
                .stroke(egui::Stroke::new(1.0, COL_BORDER))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::symmetric(14, 10))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        status_dot(ui, COL_SUCCESS);
                        ui.label(egui::RichText::new(text).color(COL_TEXT));
                    });
                });
        });
}
