use crate::components::{overlays, palette, toast};
use crate::screens::{auth, dashboard, landing, settings};
use crate::shortcuts;
use crate::theme::*;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};
use launchpad_app_core::viewmodel;
use launchpad_app_core::{
    AppCommand, BootState, DesktopKernel, Overlay, OverlayKind, Route,
};

pub struct LaunchpadApp {
    core: DesktopKernel,
}

impl LaunchpadApp {
    pub fn new(core: DesktopKernel) -> Self {
        Self { core }
    }

    /// Overlays render bottom-up so the stack order matches z-order;
    /// each entry draws its own backdrop above everything below it.
    fn draw_overlays(&mut self, ctx: &egui::Context) {
        let state = self.core.store.state();
        for overlay in &state.overlays {
            match overlay {
                Overlay::CommandPalette => {
                    let vm = viewmodel::palette_vm(&state, self.core.registry());
                    let resp = palette::draw(ctx, &vm);
                    if let Some(query) = resp.query_changed {
                        self.core.dispatch(AppCommand::SetPaletteQuery(query));
                    }
                    if let Some(id) = resp.confirmed {
                        self.core.dispatch(AppCommand::RunPaletteCommand(id));
                    }
                    if resp.dismissed {
                        self.core
                            .dispatch(AppCommand::CloseOverlay(OverlayKind::CommandPalette));
                    }
                }
                Overlay::CreateProject => {
                    let vm = viewmodel::wizard_vm(&state);
                    let resp = overlays::wizard(ctx, &vm, &state.dashboard.wizard_name);
                    if let Some(name) = resp.name_changed {
                        self.core
                            .store
                            .with_state_mut(|s| s.dashboard.wizard_name = name);
                    }
                    if resp.advance {
                        self.core.dispatch(AppCommand::AdvanceWizard);
                    }
                    if resp.finish {
                        self.core.dispatch(AppCommand::FinishWizard);
                    }
                    if resp.dismissed {
                        self.core
                            .dispatch(AppCommand::CloseOverlay(OverlayKind::CreateProject));
                    }
                }
                Overlay::DeleteConfirm { .. } => {
                    let Some(vm) = viewmodel::delete_confirm_vm(&state) else {
                        continue;
                    };
                    let resp = overlays::delete_confirm(ctx, &vm);
                    if resp.confirmed {
                        self.core.dispatch(AppCommand::ConfirmDelete);
                    }
                    if resp.dismissed {
                        self.core
                            .dispatch(AppCommand::CloseOverlay(OverlayKind::DeleteConfirm));
                    }
                }
            }
        }
    }
}

impl eframe::App for LaunchpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.tick();
        shortcuts::handle(ctx, &mut self.core);

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::new(3).unwrap();
        });
        ctx.style_mut(|style| {
            // Global `Extend` keeps egui text measurement width-independent,
            // which egui_taffy's multi-pass layout requires.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        match self.core.store.state().boot {
            BootState::Loading => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Spinner::new().size(28.0));
                    });
                });
                ctx.request_repaint();
                return;
            }
            BootState::Failed(ref message) => {
                let message = message.clone();
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new(format!("Failed to load workspace: {message}"))
                                .color(COL_DANGER),
                        );
                    });
                });
                return;
            }
            BootState::Ready => {}
        }

        let route = self.core.store.state().route;
        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| match route {
                    Route::Landing => landing::draw(&mut *tui, &mut self.core),
                    Route::Auth => auth::draw(&mut *tui, &mut self.core),
                    Route::Dashboard => dashboard::draw(ctx, &mut *tui, &mut self.core),
                    Route::Settings => settings::draw(&mut *tui, &mut self.core),
                });
        });

        self.draw_overlays(ctx);

        let state = self.core.store.state();
        if state.route == Route::Settings && state.settings.toast.is_some() {
            toast::draw(ctx, "Settings saved successfully.");
        }

        // One-shot timers complete off-frame; poll while any are pending.
        if state.has_pending_work() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
