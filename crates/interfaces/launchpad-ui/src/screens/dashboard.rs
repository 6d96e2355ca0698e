use crate::components::table::RowAction;
use crate::components::{header, sidebar, statcards, table};
use crate::theme::*;
use crate::utils::{cmd_button, section_label};
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use launchpad_app_core::viewmodel;
use launchpad_app_core::{AppCommand, DesktopKernel, Overlay, Route};

pub fn draw<'a>(ctx: &egui::Context, tui: impl TuiBuilderLogic<'a>, core: &mut DesktopKernel) {
    let vm = viewmodel::dashboard_vm(&core.store.state());
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
            let resp = sidebar::draw(tui, Route::Dashboard);
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
            size: percent(1.),
            flex_basis: length(0.0),
            min_size: taffy::Size {
                width: length(0.0),
                height: length(0.0),
            },
            overflow: taffy::Point {
                x: taffy::Overflow::Hidden,
                y: taffy::Overflow::Hidden,
            },
            ..Default::default()
        })
        .add(|tui| {
            let resp = header::draw(&mut *tui, vm.org, &vm.project);
            if resp.search_clicked {
                dispatch.push(AppCommand::ToggleCommandPalette);
            }
            if resp.new_project_clicked {
                dispatch.push(AppCommand::OpenOverlay(Overlay::CreateProject));
            }

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 1.0,
                flex_basis: length(0.0),
                min_size: taffy::Size {
                    width: percent(1.),
                    height: length(0.0),
                },
                overflow: taffy::Point {
                    x: taffy::Overflow::Hidden,
                    y: taffy::Overflow::Scroll,
                },
                padding: length(16.0),
                gap: length(16.0),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .add(|tui| {
                statcards::draw(&mut *tui, &vm.stats);

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    gap: length(8.0),
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
                        align_items: Some(taffy::AlignItems::Center),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.ui(|ui| section_label(ui, "RECENT DEPLOYMENTS"));

                        tui.style(taffy::Style {
                            flex_direction: taffy::FlexDirection::Row,
                            align_items: Some(taffy::AlignItems::Center),
                            gap: length(8.0),
                            ..Default::default()
                        })
                        .add(|tui| {
                            tui.label(
                                egui::RichText::new(format!("{} total", vm.rows.len()))
                                    .size(10.0)
                                    .color(COL_TEXT_DIM),
                            );
                            if tui
                                .ui(|ui| cmd_button(ui, "Refresh", "outline", true))
                                .clicked()
                            {
                                dispatch.push(AppCommand::LoadInitialState);
                            }
                        });
                    });

                    let resp = table::draw(ctx, &mut *tui, &vm.rows, vm.any_menu_open);
                    if let Some(id) = resp.selection_toggled {
                        dispatch.push(AppCommand::ToggleRowSelection(id));
                    }
                    if let Some(id) = resp.menu_toggled {
                        dispatch.push(AppCommand::ToggleRowMenu(id));
                    }
                    if resp.menu_dismissed {
                        dispatch.push(AppCommand::CloseRowMenu);
                    }
                    if let Some((id, action)) = resp.action {
                        match action {
                            RowAction::Delete => dispatch.push(AppCommand::RequestDelete(id)),
                            // Preview and logs are presentational in the mock;
                            // picking them just dismisses the menu.
                            RowAction::VisitPreview | RowAction::ViewLogs => {
                                dispatch.push(AppCommand::CloseRowMenu)
                            }
                        }
                    }
                });
            });
        });
    });

    for cmd in dispatch {
        core.dispatch(cmd);
    }
}
