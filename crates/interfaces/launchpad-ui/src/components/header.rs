use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct HeaderResponse {
    pub search_clicked: bool,
    pub new_project_clicked: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, org: &str, project: &str) -> HeaderResponse {
    let mut resp = HeaderResponse {
        search_clicked: false,
        new_project_clicked: false,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        size: taffy::Size {
            width: percent(1.),
            height: length(56.0),
        },
        padding: length(12.0),
        flex_shrink: 0.0,
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(egui::RichText::new(org).size(12.0).color(COL_TEXT_DIM));
                tui.label(egui::RichText::new("/").size(12.0).color(COL_TEXT_DIM));
                tui.label(
                    egui::RichText::new(project)
                        .size(12.0)
                        .strong()
                        .color(COL_TEXT),
                );
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                let search = tui
                    .id(egui_taffy::tid("header-search"))
                    .style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        align_items: Some(taffy::AlignItems::Center),
                        justify_content: Some(taffy::JustifyContent::SpaceBetween),
                        size: taffy::Size {
                            width: length(200.0),
                            height: length(30.0),
                        },
                        padding: length(8.0),
                        gap: length(8.0),
                        ..Default::default()
                    })
                    .bg_clickable(
                        TuiBackground::new()
                            .with_background_color(COL_BG_RAISED)
                            .with_border_color(COL_BORDER)
                            .with_border_width(1.0)
                            .with_corner_radius(6.0),
                        |tui| {
                            tui.label(
                                egui::RichText::new("Search...").size(11.0).color(COL_TEXT_DIM),
                            );
                            tui.label(
                                egui::RichText::new("⌘K").size(10.0).color(COL_TEXT_DIM),
                            );
                        },
                    );
                if search.clicked() {
                    resp.search_clicked = true;
                }

                if tui
                    .ui(|ui| cmd_button(ui, "New Project", "primary", true))
                    .clicked()
                {
                    resp.new_project_clicked = true;
                }
            });
        },
    );

    resp
}
