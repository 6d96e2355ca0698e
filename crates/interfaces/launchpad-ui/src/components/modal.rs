use crate::theme::*;
use eframe::egui;

pub struct ModalResponse {
    pub dismissed: bool,
}

/// Full-screen click catcher drawn below the overlay it belongs to.
/// Returns true when the backdrop is clicked.
pub fn backdrop(ctx: &egui::Context, id: &str, dimmed: bool) -> bool {
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new(("backdrop", id)))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            if dimmed {
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(170));
            }
            ui.allocate_rect(screen, egui::Sense::click()).clicked()
        })
        .inner
}

/// Centered modal dialog with a title bar, content region and a
/// right-aligned footer. The close button and the backdrop both report
/// as `dismissed`; the caller decides what closing means.
pub fn show(
    ctx: &egui::Context,
    id: &str,
    title: &str,
    width: f32,
    content: impl FnOnce(&mut egui::Ui),
    footer: impl FnOnce(&mut egui::Ui),
) -> ModalResponse {
    let mut dismissed = backdrop(ctx, id, true);

    egui::Area::new(egui::Id::new(("modal", id)))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(COL_BG)
                .stroke(egui::Stroke::new(1.0, COL_BORDER))
                .corner_radius(egui::CornerRadius::same(10))
                .show(ui, |ui| {
                    ui.set_width(width);

                    egui::Frame::new()
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(title)
                                        .size(15.0)
                                        .strong()
                                        .color(COL_TEXT),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("✕").clicked() {
                                            dismissed = true;
                                        }
                                    },
                                );
                            });
                        });
                    ui.separator();

                    egui::Frame::new()
                        .inner_margin(egui::Margin::same(16))
                        .show(ui, |ui| content(ui));

                    ui.separator();
                    egui::Frame::new()
                        .fill(COL_BG_RAISED)
                        .inner_margin(egui::Margin::symmetric(16, 10))
                        .show(ui, |ui| {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                footer,
                            );
                        });
                });
        });

    ModalResponse { dismissed }
}
