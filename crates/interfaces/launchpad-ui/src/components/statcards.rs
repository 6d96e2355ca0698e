use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use launchpad_app_core::viewmodel::StatCardVm;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, stats: &[StatCardVm]) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        gap: length(12.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        for card in stats {
            tui.id(egui_taffy::tid(("stat", &card.label)))
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    flex_grow: 1.0,
                    flex_basis: length(0.0),
                    padding: length(14.0),
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
                            egui::RichText::new(&card.label).size(11.0).color(COL_TEXT_DIM),
                        );

                        tui.style(taffy::Style {
                            flex_direction: taffy::FlexDirection::Row,
                            align_items: Some(taffy::AlignItems::Center),
                            justify_content: Some(taffy::JustifyContent::SpaceBetween),
                            size: taffy::Size {
                                width: percent(1.),
                                height: auto(),
                            },
                            ..Default::default()
                        })
                        .add(|tui| {
                            tui.label(
                                egui::RichText::new(&card.value)
                                    .size(20.0)
                                    .strong()
                                    .color(COL_TEXT),
                            );
                            tui.label(
                                egui::RichText::new(&card.change_label).size(11.0).color(
                                    if card.change_positive {
                                        COL_SUCCESS
                                    } else {
                                        COL_DANGER
                                    },
                                ),
                            );
                        });

                        tui.ui(|ui| sparkline(ui, &card.sparkline));
                    },
                );
        }
    });
}

fn sparkline(ui: &mut egui::Ui, points: &[f32]) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 36.0), egui::Sense::hover());
    if points.len() < 2 {
        return;
    }

    let step = rect.width() / (points.len() - 1) as f32;
    let path: Vec<egui::Pos2> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            egui::pos2(
                rect.left() + step * i as f32,
                // Inset so the stroke never clips at the extremes.
                rect.bottom() - 2.0 - p * (rect.height() - 4.0),
            )
        })
        .collect();

    ui.painter()
        .add(egui::Shape::line(path, egui::Stroke::new(1.5, COL_ACCENT)));
}
