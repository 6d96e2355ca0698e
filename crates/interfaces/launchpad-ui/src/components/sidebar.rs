use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use launchpad_app_core::Route;

pub struct SidebarResponse {
    pub navigate: Option<Route>,
    pub sign_out_clicked: bool,
}

struct NavItem {
    label: &'static str,
    route: Route,
}

const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        label: "Overview",
        route: Route::Dashboard,
    },
    NavItem {
        label: "Settings",
        route: Route::Settings,
    },
];

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, active: Route) -> SidebarResponse {
    let mut resp = SidebarResponse {
        navigate: None,
        sign_out_clicked: false,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        size: percent(1.),
        min_size: taffy::Size {
            width: percent(1.),
            height: length(0.0),
        },
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Stretch),
        padding: length(12.0),
        gap: length(8.0),
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
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
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: length(22.0),
                            height: length(22.0),
                        },
                        flex_shrink: 0.0,
                        justify_content: Some(taffy::JustifyContent::Center),
                        align_items: Some(taffy::AlignItems::Center),
                        ..Default::default()
                    })
                    .bg_add(
                        TuiBackground::new()
                            .with_background_color(COL_ACCENT)
                            .with_corner_radius(5.0),
                        |tui| {
                            tui.label(egui::RichText::new("▲").size(11.0).color(COL_TEXT));
                        },
                    );
                    tui.label(
                        egui::RichText::new("LaunchPad")
                            .size(14.0)
                            .strong()
                            .color(COL_TEXT),
                    );
                });

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    gap: length(4.0),
                    ..Default::default()
                })
                .add(|tui| {
                    for item in NAV_ITEMS {
                        let is_active = item.route == active;
                        let response = tui
                            .id(egui_taffy::tid(("nav", item.label)))
                            .style(taffy::Style {
                                flex_direction: taffy::FlexDirection::Row,
                                align_items: Some(taffy::AlignItems::Center),
                                size: taffy::Size {
                                    width: percent(1.),
                                    height: length(32.0),
                                },
                                padding: length(8.0),
                                ..Default::default()
                            })
                            .bg_clickable(
                                TuiBackground::new()
                                    .with_background_color(if is_active {
                                        COL_ACCENT.linear_multiply(0.15)
                                    } else {
                                        COL_BG
                                    })
                                    .with_corner_radius(6.0),
                                |tui| {
                                    tui.label(
                                        egui::RichText::new(item.label).size(12.0).color(
                                            if is_active { COL_TEXT } else { COL_TEXT_DIM },
                                        ),
                                    );
                                },
                            );

                        if response.clicked() && !is_active {
                            resp.navigate = Some(item.route);
                        }
                    }
                });
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                gap: length(8.0),
                flex_shrink: 0.0,
                padding: length(8.0),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .bg_add(
                TuiBackground::new()
                    .with_background_color(COL_BG_RAISED)
                    .with_border_color(COL_BORDER)
                    .with_border_width(1.0)
                    .with_corner_radius(8.0),
                |tui| {
                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        align_items: Some(taffy::AlignItems::Center),
                        gap: length(8.0),
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
                                    egui::RichText::new("DU").size(10.0).color(COL_TEXT),
                                );
                            },
                        );

                        tui.style(taffy::Style {
                            flex_direction: taffy::FlexDirection::Column,
                            ..Default::default()
                        })
                        .add(|tui| {
                            tui.label(
                                egui::RichText::new("Demo User").size(11.0).color(COL_TEXT),
                            );
                            tui.label(
                                egui::RichText::new("Pro Plan").size(10.0).color(COL_TEXT_DIM),
                            );
                        });
                    });

                    if tui
                        .ui(|ui| cmd_button(ui, "Sign Out", "outline", true))
                        .clicked()
                    {
                        resp.sign_out_clicked = true;
                    }
                },
            );
        },
    );

    resp
}
