use crate::components::modal;
use crate::theme::*;
use eframe::egui;
use launchpad_app_core::viewmodel::PaletteVm;
use launchpad_app_core::CommandId;

pub struct PaletteResponse {
    pub query_changed: Option<String>,
    pub confirmed: Option<CommandId>,
    pub dismissed: bool,
}

pub fn draw(ctx: &egui::Context, vm: &PaletteVm) -> PaletteResponse {
    let mut resp = PaletteResponse {
        query_changed: None,
        confirmed: None,
        dismissed: false,
    };

    resp.dismissed = modal::backdrop(ctx, "palette", true);
    let mut submit_first = false;

    egui::Area::new(egui::Id::new("command-palette"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 120.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(COL_BG)
                .stroke(egui::Stroke::new(1.0, COL_BORDER))
                .corner_radius(egui::CornerRadius::same(12))
                .show(ui, |ui| {
                    ui.set_width(560.0);

                    egui::Frame::new()
                        .inner_margin(egui::Margin::symmetric(14, 10))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new("🔍").color(COL_TEXT_DIM));

                                let mut query = vm.query.clone();
                                let edit = ui.add(
                                    egui::TextEdit::singleline(&mut query)
                                        .hint_text("Search pages, projects, or commands...")
                                        .desired_width(ui.available_width() - 48.0)
                                        .frame(false),
                                );
                                edit.request_focus();
                                if query != vm.query {
                                    resp.query_changed = Some(query);
                                }
                                if edit.lost_focus()
                                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                                {
                                    submit_first = true;
                                }

                                ui.label(
                                    egui::RichText::new("ESC").size(10.0).color(COL_TEXT_DIM),
                                );
                            });
                        });
                    ui.separator();

                    egui::Frame::new()
                        .inner_margin(egui::Margin::same(6))
                        .show(ui, |ui| {
                            if vm.matches.is_empty() {
                                ui.vertical_centered(|ui| {
                                    ui.add_space(18.0);
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "No results found for \"{}\"",
                                            vm.query
                                        ))
                                        .color(COL_TEXT_DIM),
                                    );
                                    ui.add_space(18.0);
                                });
                            } else {
                                for entry in &vm.matches {
                                    let row = egui::Button::new(
                                        egui::RichText::new(entry.label).color(COL_TEXT),
                                    )
                                    .fill(egui::Color32::TRANSPARENT)
                                    .stroke(egui::Stroke::NONE)
                                    .min_size(egui::vec2(ui.available_width(), 32.0));
                                    if ui.add(row).clicked() {
                                        resp.confirmed = Some(entry.id);
                                    }
                                }
                            }
                        });

                    ui.separator();
                    egui::Frame::new()
                        .fill(COL_BG_RAISED)
                        .inner_margin(egui::Margin::symmetric(14, 6))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new("LaunchPad Command")
                                        .size(10.0)
                                        .color(COL_TEXT_DIM),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(
                                            egui::RichText::new("Select ↵")
                                                .size(10.0)
                                                .color(COL_TEXT_DIM),
                                        );
                                    },
                                );
                            });
                        });
                });
        });

    // Enter confirms the top match, mirroring the click path.
    if resp.confirmed.is_none() && submit_first && !vm.matches.is_empty() {
        resp.confirmed = Some(vm.matches[0].id);
    }

    resp
}
