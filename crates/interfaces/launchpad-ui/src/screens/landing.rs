use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use launchpad_app_core::viewmodel;
use launchpad_app_core::{AppCommand, BillingCycle, DesktopKernel, Route};

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Instant Deploys",
        body: "Push to git and your site is live in seconds with zero configuration.",
    },
    Feature {
        title: "Edge Network",
        body: "Serve every visitor from the closest region, automatically.",
    },
    Feature {
        title: "Secure by Default",
        body: "Automatic HTTPS and isolated build environments for every project.",
    },
];

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, core: &mut DesktopKernel) {
    let vm = viewmodel::landing_vm(&core.store.state());
    let mut dispatch: Option<AppCommand> = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        size: percent(1.),
        min_size: taffy::Size {
            width: percent(1.),
            height: length(0.0),
        },
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        align_items: Some(taffy::AlignItems::Center),
        padding: length(24.0),
        gap: length(40.0),
        ..Default::default()
    })
    .add(|tui| {
        // Top navigation
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            align_items: Some(taffy::AlignItems::Center),
            size: taffy::Size {
                width: percent(1.),
                height: length(40.0),
            },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .add(|tui| {
            tui.label(
                egui::RichText::new("▲ LaunchPad")
                    .size(15.0)
                    .strong()
                    .color(COL_TEXT),
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(12.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(egui::RichText::new("Features").size(12.0).color(COL_TEXT_DIM));
                tui.label(egui::RichText::new("Pricing").size(12.0).color(COL_TEXT_DIM));
                if tui
                    .ui(|ui| cmd_button(ui, "Log In", "outline", true))
                    .clicked()
                {
                    dispatch = Some(AppCommand::Navigate(Route::Auth));
                }
                if tui
                    .ui(|ui| cmd_button(ui, "Get Started", "primary", true))
                    .clicked()
                {
                    dispatch = Some(AppCommand::Navigate(Route::Auth));
                }
            });
        });

        // Hero
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(14.0),
            ..Default::default()
        })
        .add(|tui| {
            tui.label(
                egui::RichText::new("NOW IN PUBLIC BETA")
                    .size(10.0)
                    .strong()
                    .color(COL_ACCENT),
            );
            tui.label(
                egui::RichText::new("Ship faster. Scale automatically.")
                    .size(30.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(
                egui::RichText::new(
                    "LaunchPad deploys your projects to a global edge network the moment you push.",
                )
                .size(13.0)
                .color(COL_TEXT_DIM),
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                gap: length(10.0),
                ..Default::default()
            })
            .add(|tui| {
                if tui
                    .ui(|ui| cmd_button(ui, "Start Deploying", "primary", true))
                    .clicked()
                {
                    dispatch = Some(AppCommand::Navigate(Route::Auth));
                }
                if tui
                    .ui(|ui| cmd_button(ui, "⌘K  Command Menu", "outline", true))
                    .clicked()
                {
                    dispatch = Some(AppCommand::ToggleCommandPalette);
                }
            });
        });

        // Feature cards
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(14.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            max_size: taffy::Size {
                width: length(860.0),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for feature in &FEATURES {
                tui.id(egui_taffy::tid(("feature", feature.title)))
                    .style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        padding: length(16.0),
                        gap: length(6.0),
                        ..Default::default()
                    })
                    .bg_add(
                        TuiBackground::new()
                            .with_background_color(COL_BG_RAISED)
                            .with_border_color(COL_BORDER)
                            .with_border_width(1.0)
                            .with_corner_radius(8.0),
                        |tui| {
                            tui.label(
                                egui::RichText::new(feature.title)
                                    .size(13.0)
                                    .strong()
                                    .color(COL_TEXT),
                            );
                            tui.label(
                                egui::RichText::new(feature.body)
                                    .size(11.0)
                                    .color(COL_TEXT_DIM),
                            );
                        },
                    );
            }
        });

        // Pricing
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(14.0),
            ..Default::default()
        })
        .add(|tui| {
            tui.label(
                egui::RichText::new("Simple, transparent pricing")
                    .size(18.0)
                    .strong()
                    .color(COL_TEXT),
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                for (label, cycle) in [
                    ("Monthly", BillingCycle::Monthly),
                    ("Yearly  -20%", BillingCycle::Yearly),
                ] {
                    let selected = vm.billing_cycle == cycle;
                    let clicked = tui.ui(|ui| {
                        ui.add(
                            egui::Button::new(
                                egui::RichText::new(label).size(11.0).color(if selected {
                                    COL_TEXT
                                } else {
                                    COL_TEXT_DIM
                                }),
                            )
                            .fill(if selected {
                                COL_ACCENT.linear_multiply(0.3)
                            } else {
                                egui::Color32::TRANSPARENT
                            })
                            .stroke(egui::Stroke::new(1.0, COL_BORDER))
                            .min_size(egui::vec2(100.0, 26.0)),
                        )
                        .clicked()
                    });
                    if clicked && !selected {
                        dispatch = Some(AppCommand::SelectBillingCycle(cycle));
                    }
                }
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                gap: length(14.0),
                ..Default::default()
            })
            .add(|tui| {
                price_card(tui, "Hobby", "$0", "forever", false, &mut dispatch);
                price_card(
                    tui,
                    "Pro",
                    vm.pro_price,
                    vm.pro_price_note,
                    true,
                    &mut dispatch,
                );
            });
        });
    });

    if let Some(cmd) = dispatch {
        core.dispatch(cmd);
    }
}

fn price_card(
    tui: &mut egui_taffy::Tui,
    name: &str,
    price: &str,
    note: &str,
    highlighted: bool,
    dispatch: &mut Option<AppCommand>,
) {
    tui.id(egui_taffy::tid(("price", name)))
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            size: taffy::Size {
                width: length(260.0),
                height: auto(),
            },
            padding: length(18.0),
            gap: length(8.0),
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_BG_RAISED)
                .with_border_color(if highlighted { COL_ACCENT } else { COL_BORDER })
                .with_border_width(1.0)
                .with_corner_radius(10.0),
            |tui| {
                tui.label(egui::RichText::new(name).size(12.0).color(COL_TEXT_DIM));
                tui.label(egui::RichText::new(price).size(24.0).strong().color(COL_TEXT));
                tui.label(egui::RichText::new(note).size(10.0).color(COL_TEXT_DIM));

                let variant = if highlighted { "primary" } else { "outline" };
                if tui
                    .ui(|ui| crate::utils::cmd_button(ui, "Get Started", variant, true))
                    .clicked()
                {
                    *dispatch = Some(AppCommand::Navigate(Route::Auth));
                }
            },
        );
}
