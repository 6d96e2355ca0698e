use crate::components::modal;
use crate::theme::*;
use crate::utils::{cmd_button, section_label};
use eframe::egui;
use launchpad_app_core::viewmodel::{DeleteConfirmVm, WizardVm};

const FRAMEWORK_PRESETS: [&str; 4] = ["Next.js", "Astro", "SvelteKit", "Remix"];

pub struct WizardResponse {
    pub name_changed: Option<String>,
    pub advance: bool,
    pub finish: bool,
    pub dismissed: bool,
}

pub fn wizard(ctx: &egui::Context, vm: &WizardVm, name: &str) -> WizardResponse {
    let mut resp = WizardResponse {
        name_changed: None,
        advance: false,
        finish: false,
        dismissed: false,
    };

    let mut advance = false;
    let mut finish = false;
    let mut cancel = false;
    let mut name_changed = None;

    let modal_resp = modal::show(
        ctx,
        "create-project",
        "Create New Project",
        440.0,
        |ui| {
            stepper(ui, vm);
            ui.add_space(12.0);

            match vm.step {
                1 => {
                    section_label(ui, "PROJECT NAME");
                    let mut value = name.to_owned();
                    let edit = ui.add(
                        egui::TextEdit::singleline(&mut value)
                            .hint_text("my-awesome-app")
                            .desired_width(f32::INFINITY),
                    );
                    if edit.changed() {
                        name_changed = Some(value);
                    }
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("You can rename your project later in settings.")
                            .size(11.0)
                            .color(COL_TEXT_DIM),
                    );
                }
                2 => {
                    section_label(ui, "FRAMEWORK PRESET");
                    ui.add_space(4.0);
                    // Preset tiles are presentational; the mock always
                    // deploys the same fixture project.
                    for chunk in FRAMEWORK_PRESETS.chunks(2) {
                        ui.horizontal(|ui| {
                            for preset in chunk {
                                let _ = ui.add(
                                    egui::Button::new(
                                        egui::RichText::new(*preset).color(COL_TEXT),
                                    )
                                    .fill(COL_BG_RAISED)
                                    .stroke(egui::Stroke::new(1.0, COL_BORDER))
                                    .min_size(egui::vec2(190.0, 44.0)),
                                );
                            }
                        });
                    }
                }
                _ => {
                    ui.label(egui::RichText::new("Ready to ship").strong().color(COL_TEXT));
                    ui.add_space(4.0);
                    let project = if name.is_empty() { "my-awesome-app" } else { name };
                    ui.label(
                        egui::RichText::new(format!(
                            "{project} will be deployed to the global edge network."
                        ))
                        .size(12.0)
                        .color(COL_TEXT_DIM),
                    );
                }
            }
        },
        |ui| {
            if cmd_button(ui, vm.next_label, "primary", true).clicked() {
                if vm.is_terminal {
                    finish = true;
                } else {
                    advance = true;
                }
            }
            if cmd_button(ui, "Cancel", "ghost", true).clicked() {
                cancel = true;
            }
        },
    );

    resp.name_changed = name_changed;
    resp.advance = advance;
    resp.finish = finish;
    resp.dismissed = modal_resp.dismissed || cancel;
    resp
}

fn stepper(ui: &mut egui::Ui, vm: &WizardVm) {
    ui.horizontal(|ui| {
        for (idx, label) in vm.step_labels.iter().enumerate() {
            let number = (idx + 1) as u8;
            let reached = vm.step >= number;
            let (circle_fill, circle_text) = if reached {
                (COL_ACCENT, COL_TEXT)
            } else {
                (COL_BG_RAISED, COL_TEXT_DIM)
            };

            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(20.0, 20.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 10.0, circle_fill);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                number.to_string(),
                egui::FontId::proportional(11.0),
                circle_text,
            );

            ui.label(egui::RichText::new(*label).size(11.0).color(if reached {
                COL_TEXT
            } else {
                COL_TEXT_DIM
            }));

            if idx + 1 < vm.step_labels.len() {
                let (line, _) =
                    ui.allocate_exact_size(egui::vec2(28.0, 2.0), egui::Sense::hover());
                ui.painter().rect_filled(
                    line,
                    1.0,
                    if vm.step > number { COL_ACCENT } else { COL_BORDER },
                );
            }
        }
    });
}

pub struct DeleteConfirmResponse {
    pub confirmed: bool,
    pub dismissed: bool,
}

pub fn delete_confirm(ctx: &egui::Context, vm: &DeleteConfirmVm) -> DeleteConfirmResponse {
    let mut confirmed = false;
    let mut cancel = false;

    let modal_resp = modal::show(
        ctx,
        "delete-confirm",
        "Delete Deployment",
        400.0,
        |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "This action cannot be undone. This will permanently delete \
                     deployment {} and all of its preview environments.",
                    vm.target
                ))
                .size(12.0)
                .color(COL_TEXT_DIM),
            );
        },
        |ui| {
            if cmd_button(ui, "Delete", "danger", true).clicked() {
                confirmed = true;
            }
            if cmd_button(ui, "Cancel", "ghost", true).clicked() {
                cancel = true;
            }
        },
    );

    DeleteConfirmResponse {
        confirmed,
        dismissed: modal_resp.dismissed || cancel,
    }
}
