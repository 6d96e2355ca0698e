use crate::components::forms;
use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use launchpad_app_core::viewmodel;
use launchpad_app_core::{AppCommand, DesktopKernel, Route};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, core: &mut DesktopKernel) {
    let state = core.store.state();
    let vm = viewmodel::auth_vm(&state);
    let mut email = state.auth.email.clone();
    let mut password = state.auth.password.clone();
    let mut dispatch: Option<AppCommand> = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        size: percent(1.),
        min_size: taffy::Size {
            width: percent(1.),
            height: length(0.0),
        },
        justify_content: Some(taffy::JustifyContent::Center),
        align_items: Some(taffy::AlignItems::Center),
        ..Default::default()
    })
    .add(|tui| {
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            size: taffy::Size {
                width: length(360.0),
                height: auto(),
            },
            padding: length(24.0),
            gap: length(12.0),
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_BG_RAISED)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0)
                .with_corner_radius(10.0),
            |tui| {
                if tui
                    .ui(|ui| {
                        ui.add(
                            egui::Button::new(
                                egui::RichText::new("← Back to home")
                                    .size(11.0)
                                    .color(COL_TEXT_DIM),
                            )
                            .fill(egui::Color32::TRANSPARENT)
                            .stroke(egui::Stroke::NONE),
                        )
                    })
                    .clicked()
                {
                    dispatch = Some(AppCommand::Navigate(Route::Landing));
                }

                tui.label(
                    egui::RichText::new(vm.heading)
                        .size(20.0)
                        .strong()
                        .color(COL_TEXT),
                );
                tui.label(
                    egui::RichText::new(vm.subheading)
                        .size(12.0)
                        .color(COL_TEXT_DIM),
                );

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    gap: length(8.0),
                    size: taffy::Size {
                        width: percent(1.),
                        height: auto(),
                    },
                    ..Default::default()
                })
                .add(|tui| {
                    // Social providers are presentational in the mock.
                    tui.ui(|ui| cmd_button(ui, "GitHub", "outline", true));
                    tui.ui(|ui| cmd_button(ui, "Google", "outline", true));
                });

                tui.label(
                    egui::RichText::new("OR CONTINUE WITH")
                        .size(9.0)
                        .color(COL_TEXT_DIM),
                );

                forms::text_field(&mut *tui, "EMAIL", &mut email, "name@example.com");
                if let Some(message) = &vm.error {
                    forms::error_label(&mut *tui, message);
                }
                forms::password_field(&mut *tui, "PASSWORD", &mut password);

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    align_items: Some(taffy::AlignItems::Center),
                    gap: length(8.0),
                    ..Default::default()
                })
                .add(|tui| {
                    if tui
                        .ui(|ui| cmd_button(ui, vm.submit_label, "primary", !vm.loading))
                        .clicked()
                    {
                        dispatch = Some(AppCommand::SubmitAuth);
                    }
                    if vm.loading {
                        tui.ui(|ui| ui.add(egui::Spinner::new()));
                    }
                });

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    align_items: Some(taffy::AlignItems::Center),
                    gap: length(4.0),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.label(
                        egui::RichText::new(vm.toggle_prompt)
                            .size(11.0)
                            .color(COL_TEXT_DIM),
                    );
                    if tui
                        .ui(|ui| {
                            ui.add(
                                egui::Button::new(
                                    egui::RichText::new(vm.toggle_label)
                                        .size(11.0)
                                        .color(COL_ACCENT),
                                )
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::NONE),
                            )
                        })
                        .clicked()
                    {
                        dispatch = Some(AppCommand::ToggleAuthMode);
                    }
                });
            },
        );
    });

    if email != state.auth.email || password != state.auth.password {
        core.store.with_state_mut(|s| {
            s.auth.email = email;
            s.auth.password = password;
        });
    }
    if let Some(cmd) = dispatch {
        core.dispatch(cmd);
    }
}
