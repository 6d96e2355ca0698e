use crate::components::modal;
use crate::theme::*;
use crate::utils::status_dot;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use launchpad_app_core::viewmodel::DeploymentRowVm;
use launchpad_app_core::{DeploymentId, DeploymentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    VisitPreview,
    ViewLogs,
    Delete,
}

pub struct TableResponse {
    pub selection_toggled: Option<DeploymentId>,
    pub menu_toggled: Option<DeploymentId>,
    pub menu_dismissed: bool,
    pub action: Option<(DeploymentId, RowAction)>,
}

pub fn status_color(status: DeploymentStatus) -> egui::Color32 {
    match status {
        DeploymentStatus::Live => COL_SUCCESS,
        DeploymentStatus::Building => COL_WARN,
        DeploymentStatus::Failed => COL_DANGER,
        DeploymentStatus::Queued => COL_TEXT_DIM,
    }
}

pub fn draw<'a>(
    ctx: &egui::Context,
    tui: impl TuiBuilderLogic<'a>,
    rows: &[DeploymentRowVm],
    any_menu_open: bool,
) -> TableResponse {
    let mut resp = TableResponse {
        selection_toggled: None,
        menu_toggled: None,
        menu_dismissed: false,
        action: None,
    };

    // Transparent catcher below the dropdown so a click anywhere else
    // closes the menu instead of hitting the widget underneath.
    if any_menu_open && modal::backdrop(ctx, "row-menu", false) {
        resp.menu_dismissed = true;
    }

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
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
            header_row(tui);
            for row in rows {
                draw_row(ctx, tui, row, &mut resp);
            }
        },
    );

    resp
}

fn cell_style(width: f32) -> taffy::Style {
    taffy::Style {
        size: taffy::Size {
            width: length(width),
            height: auto(),
        },
        flex_shrink: 0.0,
        align_items: Some(taffy::AlignItems::Center),
        flex_direction: taffy::FlexDirection::Row,
        gap: length(6.0),
        ..Default::default()
    }
}

fn grow_cell_style() -> taffy::Style {
    taffy::Style {
        flex_grow: 1.0,
        flex_basis: length(0.0),
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        ..Default::default()
    }
}

fn header_label(tui: &mut egui_taffy::Tui, text: &str) {
    tui.label(egui::RichText::new(text).size(10.0).strong().color(COL_TEXT_DIM));
}

fn header_row(tui: &mut egui_taffy::Tui) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        align_items: Some(taffy::AlignItems::Center),
        size: taffy::Size {
            width: percent(1.),
            height: length(34.0),
        },
        padding: length(10.0),
        gap: length(10.0),
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new().with_background_color(COL_BG),
        |tui| {
            tui.style(cell_style(24.0)).add(|_| {});
            tui.style(grow_cell_style()).add(|tui| header_label(tui, "DEPLOYMENT"));
            tui.style(cell_style(90.0)).add(|tui| header_label(tui, "STATUS"));
            tui.style(cell_style(130.0)).add(|tui| header_label(tui, "BRANCH"));
            tui.style(cell_style(70.0)).add(|tui| header_label(tui, "AGE"));
            tui.style(cell_style(40.0)).add(|tui| header_label(tui, "BY"));
            tui.style(cell_style(32.0)).add(|_| {});
        },
    );
}

fn draw_row(
    ctx: &egui::Context,
    tui: &mut egui_taffy::Tui,
    row: &DeploymentRowVm,
    resp: &mut TableResponse,
) {
    tui.id(egui_taffy::tid(("deployment-row", &row.id)))
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            size: taffy::Size {
                width: percent(1.),
                height: length(48.0),
            },
            padding: length(10.0),
            gap: length(10.0),
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(if row.selected {
                    COL_ACCENT.linear_multiply(0.08)
                } else {
                    COL_BG_RAISED
                })
                .with_border_color(COL_BORDER)
                .with_border_width(1.0),
            |tui| {
                tui.style(cell_style(24.0)).add(|tui| {
                    let mut checked = row.selected;
                    let changed = tui
                        .ui(|ui| ui.checkbox(&mut checked, "").changed());
                    if changed {
                        resp.selection_toggled = Some(row.id.clone());
                    }
                });

                tui.style(grow_cell_style()).add(|tui| {
                    tui.label(
                        egui::RichText::new(&row.project)
                            .size(12.0)
                            .strong()
                            .color(COL_TEXT),
                    );
                    tui.label(
                        egui::RichText::new(&row.commit)
                            .size(11.0)
                            .color(COL_TEXT_DIM),
                    );
                });

                tui.style(cell_style(90.0)).add(|tui| {
                    tui.ui(|ui| status_dot(ui, status_color(row.status)));
                    tui.label(
                        egui::RichText::new(row.status_label)
                            .size(11.0)
                            .color(status_color(row.status)),
                    );
                });

                tui.style(cell_style(130.0)).add(|tui| {
                    tui.label(
                        egui::RichText::new(&row.branch)
                            .size(11.0)
                            .monospace()
                            .color(COL_TEXT_DIM),
                    );
                });

                tui.style(cell_style(70.0)).add(|tui| {
                    tui.label(egui::RichText::new(&row.age).size(11.0).color(COL_TEXT_DIM));
                });

                tui.style(cell_style(40.0)).add(|tui| {
                    tui.label(
                        egui::RichText::new(&row.author_initial)
                            .size(11.0)
                            .color(COL_TEXT),
                    );
                });

                tui.style(cell_style(32.0)).add(|tui| {
                    let button = tui.ui(|ui| {
                        ui.add(
                            egui::Button::new(
                                egui::RichText::new("⋯").size(14.0).color(COL_TEXT_DIM),
                            )
                            .fill(egui::Color32::TRANSPARENT)
                            .stroke(egui::Stroke::NONE),
                        )
                    });
                    if button.clicked() {
                        resp.menu_toggled = Some(row.id.clone());
                    }
                    if row.menu_open {
                        if let Some(action) = row_menu(ctx, &row.id, button.rect) {
                            resp.action = Some((row.id.clone(), action));
                        }
                    }
                });
            },
        );
}

fn row_menu(ctx: &egui::Context, id: &DeploymentId, anchor: egui::Rect) -> Option<RowAction> {
    let mut action = None;
    let width = 170.0;
    let pos = egui::pos2(anchor.right() - width, anchor.bottom() + 4.0);

    egui::Area::new(egui::Id::new(("row-menu", id)))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(COL_BG_RAISED)
                .stroke(egui::Stroke::new(1.0, COL_BORDER))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(4))
                .show(ui, |ui| {
                    ui.set_width(width - 8.0);
                    if menu_item(ui, "Visit Preview", COL_TEXT) {
                        action = Some(RowAction::VisitPreview);
                    }
                    if menu_item(ui, "View Logs", COL_TEXT) {
                        action = Some(RowAction::ViewLogs);
                    }
                    ui.separator();
                    if menu_item(ui, "Delete Deployment", COL_DANGER) {
                        action = Some(RowAction::Delete);
                    }
                });
        });

    action
}

fn menu_item(ui: &mut egui::Ui, label: &str, color: egui::Color32) -> bool {
    ui.add(
        egui::Button::new(egui::RichText::new(label).size(12.0).color(color))
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::NONE)
            .min_size(egui::vec2(ui.available_width(), 28.0)),
    )
    .clicked()
}
