use crate::components::{forms, sidebar};
use crate::theme::*;
use crate::utils::{cmd_button, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use launchpad_app_core::viewmodel::{self, SettingsVm};
use launchpad_app_core::{AppCommand, DesktopKernel, Route, SettingsTab};

const TABS: [(SettingsTab, &str); 3] = [
    (SettingsTab::General, "General"),
    (SettingsTab::Team, "Team"),
    (SettingsTab::Billing, "Billing"),
];

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, core: &mut DesktopKernel) {
    let state = core.store.state();
    let vm = viewmodel::settings_vm(&state);
    let mut project_name = state.settings.project_name.clone();
    let mut dispatch: Vec<AppCommand> = Vec::new();

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        size: percent(1.),
        min_size: taffy::Size {
            width: percent(1.),
            height: length(0.0),
        },
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Hidden,
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.style(taffy::Style {
            size: taffy::Size {
                width: length(240.0),
                height: percent(1.),
            },
            flex_shrink: 0.0,
            min_size: taffy::Size {
                width: length(240.0),
                height: length(0.0),
            },
            ..Default::default()
        })
        .add(|tui| {
            let resp = sidebar::draw(tui, Route::Settings);
            if let Some(route) = resp.navigate {
                dispatch.push(AppCommand::Navigate(route));
            }
            if resp.sign_out_clicked {
                dispatch.push(AppCommand::Navigate(Route::Landing));
            }
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            flex_grow: 1.0,
            flex_basis: length(0.0),
            min_size: taffy::Size {
                width: length(0.0),
                height: length(0.0),
            },
            overflow: taffy::Point {
                x: taffy::Overflow::Hidden,
                y: taffy::Overflow::Scroll,
            },
            padding: length(24.0),
            gap: length(16.0),
            align_items: Some(taffy::AlignItems::Center),
            ..Default::default()
        })
        .add(|tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                max_size: taffy::Size {
                    width: length(720.0),
                    height: auto(),
                },
                gap: length(16.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    align_items: Some(taffy::AlignItems::Center),
                    gap: length(8.0),
                    ..Default::default()
                })
                .add(|tui| {
                    if tui
                        .ui(|ui| {
                            ui.add(
                                egui::Button::new(
                                    egui::RichText::new("←").size(16.0).color(COL_TEXT_DIM),
                                )
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::NONE),
                            )
                        })
                        .clicked()
                    {
                        dispatch.push(AppCommand::Navigate(Route::Dashboard));
                    }
                    tui.label(
                        egui::RichText::new("Project Settings")
                            .size(20.0)
                            .strong()
                            .color(COL_TEXT),
                    );
                });

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    gap: length(4.0),
                    ..Default::default()
                })
                .add(|tui| {
                    for (tab, label) in TABS {
                        let active = vm.active_tab == tab;
                        let clicked = tui.ui(|ui| {
                            ui.add(
                                egui::Button::new(
                                    egui::RichText::new(label).size(12.0).color(if active {
                                        COL_TEXT
                                    } else {
                                        COL_TEXT_DIM
                                    }),
                                )
                                .fill(if active {
                                    COL_ACCENT.linear_multiply(0.2)
                                } else {
                                    egui::Color32::TRANSPARENT
                                })
                                .stroke(egui::Stroke::NONE)
                                .min_size(egui::vec2(80.0, 28.0)),
                            )
                            .clicked()
                        });
                        if clicked && !active {
                            dispatch.push(AppCommand::SelectSettingsTab(tab));
                        }
                    }
                });

                match vm.active_tab {
                    SettingsTab::General => {
                        general_tab(tui, &vm, &mut project_name, &mut dispatch)
                    }
                    SettingsTab::Team => team_tab(tui, &vm),
                    SettingsTab::Billing => billing_tab(tui, &vm),
                }
            });
        });
    });

    if project_name != state.settings.project_name {
        core.store
            .with_state_mut(|s| s.settings.project_name = project_name);
    }
    for cmd in dispatch {
        core.dispatch(cmd);
    }
}

fn panel_style() -> taffy::Style {
    taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        padding: length(16.0),
        gap: length(12.0),
        ..Default::default()
    }
}

fn panel_bg() -> TuiBackground<'static> {
    TuiBackground::new()
        .with_background_color(COL_BG_RAISED)
        .with_border_color(COL_BORDER)
        .with_border_width(1.0)
        .with_corner_radius(8.0)
}

fn general_tab(
    tui: &mut egui_taffy::Tui,
    vm: &SettingsVm,
    project_name: &mut String,
    dispatch: &mut Vec<AppCommand>,
) {
    tui.style(panel_style()).bg_add(panel_bg(), |tui| {
        forms::text_field(&mut *tui, "PROJECT NAME", project_name, "dashboard-app");
        forms::locked_field(&mut *tui, "FRAMEWORK PRESET", "Next.js");

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(8.0),
            ..Default::default()
        })
        .add(|tui| {
            let label = if vm.saving { "Saving..." } else { "Save Changes" };
            if tui
                .ui(|ui| cmd_button(ui, label, "primary", !vm.saving))
                .clicked()
            {
                dispatch.push(AppCommand::SaveSettings);
            }
            if vm.saving {
                tui.ui(|ui| ui.add(egui::Spinner::new()));
            }
        });
    });
}

fn team_tab(tui: &mut egui_taffy::Tui, vm: &SettingsVm) {
    tui.style(panel_style()).bg_add(panel_bg(), |tui| {
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            align_items: Some(taffy::AlignItems::Center),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.ui(|ui| section_label(ui, "MEMBERS"));
            // Inviting is presentational in the mock.
            tui.ui(|ui| cmd_button(ui, "Invite Member", "outline", true));
        });

        for member in &vm.team {
            tui.id(egui_taffy::tid(("member", &member.name)))
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    align_items: Some(taffy::AlignItems::Center),
                    justify_content: Some(taffy::JustifyContent::SpaceBetween),
                    size: taffy::Size {
                        width: percent(1.),
                        height: length(44.0),
                    },
                    padding: length(8.0),
                    ..Default::default()
                })
                .bg_add(
                    TuiBackground::new()
                        .with_background_color(COL_BG)
                        .with_border_color(COL_BORDER)
                        .with_border_width(1.0)
                        .with_corner_radius(6.0),
                    |tui| {
                        tui.style(taffy::Style {
                            flex_direction: taffy::FlexDirection::Row,
                            align_items: Some(taffy::AlignItems::Center),
                            gap: length(10.0),
                            ..Default::default()
                        })
                        .add(|tui| {
                            tui.style(taffy::Style {
                                size: taffy::Size {
                                    width: length(26.0),
                                    height: length(26.0),
                                },
                                flex_shrink: 0.0,
                                justify_content: Some(taffy::JustifyContent::Center),
                                align_items: Some(taffy::AlignItems::Center),
                                ..Default::default()
                            })
                            .bg_add(
                                TuiBackground::new()
                                    .with_background_color(COL_ACCENT.linear_multiply(0.3))
                                    .with_corner_radius(13.0),
                                |tui| {
                                    tui.label(
                                        egui::RichText::new(&member.initials)
                                            .size(10.0)
                                            .color(COL_TEXT),
                                    );
                                },
                            );
                            tui.style(taffy::Style {
                                flex_direction: taffy::FlexDirection::Column,
                                ..Default::default()
                            })
                            .add(|tui| {
                                tui.label(
                                    egui::RichText::new(&member.name)
                                        .size(12.0)
                                        .color(COL_TEXT),
                                );
                                tui.label(
                                    egui::RichText::new(format!("Joined {}", member.joined))
                                        .size(10.0)
                                        .color(COL_TEXT_DIM),
                                );
                            });
                        });

                        tui.label(
                            egui::RichText::new(&member.role)
                                .size(11.0)
                                .color(COL_TEXT_DIM),
                        );
                    },
                );
        }
    });
}

fn billing_tab(tui: &mut egui_taffy::Tui, vm: &SettingsVm) {
    tui.style(panel_style()).bg_add(panel_bg(), |tui| {
        tui.ui(|ui| section_label(ui, "USAGE THIS CYCLE"));

        for meter in &vm.meters {
            tui.id(egui_taffy::tid(("meter", &meter.label)))
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    gap: length(4.0),
                    size: taffy::Size {
                        width: percent(1.),
                        height: auto(),
                    },
                    ..Default::default()
                })
                .add(|tui| {
                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        justify_content: Some(taffy::JustifyContent::SpaceBetween),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.label(
                            egui::RichText::new(&meter.label).size(12.0).color(COL_TEXT),
                        );
                        tui.label(
                            egui::RichText::new(&meter.used_label)
                                .size(11.0)
                                .color(COL_TEXT_DIM),
                        );
                    });

                    let fraction = meter.fraction;
                    tui.ui(|ui| usage_bar(ui, fraction));

                    tui.label(
                        egui::RichText::new(&meter.pct_label)
                            .size(10.0)
                            .color(COL_TEXT_DIM),
                    );
                });
        }

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            align_items: Some(taffy::AlignItems::Center),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            padding: length(12.0),
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_ACCENT.linear_multiply(0.1))
                .with_border_color(COL_ACCENT)
                .with_border_width(1.0)
                .with_corner_radius(8.0),
            |tui| {
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    gap: length(2.0),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.label(
                        egui::RichText::new("Pro Plan").size(12.0).strong().color(COL_TEXT),
                    );
                    tui.label(
                        egui::RichText::new("Unlimited bandwidth and concurrent builds.")
                            .size(10.0)
                            .color(COL_TEXT_DIM),
                    );
                });
                tui.ui(|ui| cmd_button(ui, "Manage Plan", "outline", true));
            },
        );
    });
}

fn usage_bar(ui: &mut egui::Ui, fraction: f32) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 6.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 3.0, COL_BG);
    let mut fill = rect;
    fill.set_width(rect.width() * fraction.clamp(0.0, 1.0));
    let color = if fraction > 0.9 { COL_WARN } else { COL_ACCENT };
    ui.painter().rect_filled(fill, 3.0, color);
}
