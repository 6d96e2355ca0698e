use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::{validate_email, Overlay, OverlayKind, TimerRunId};
use crate::ports::{DeploymentDirectory, TimerPort};
use crate::registry::{CommandAction, CommandRegistry};

/// Owns the store, the command registry, and the event channel that timer
/// and boot workers feed. The UI dispatches commands and calls `tick` once
/// per frame to drain completed work.
pub struct AppKernel<D, T> {
    pub store: AppStore,
    registry: CommandRegistry,
    directory: Arc<D>,
    timer: Arc<T>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<D, T> AppKernel<D, T>
where
    D: DeploymentDirectory,
    T: TimerPort,
{
    pub fn new(store: AppStore, directory: D, timer: T) -> Self {
        let (tx, rx) = mpsc::channel(100);
        Self {
            store,
            registry: CommandRegistry::builtin(),
            directory: Arc::new(directory),
            timer: Arc::new(timer),
            tx,
            rx,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::LoadInitialState => self.load_initial_state(),

            AppCommand::Navigate(r) => self.store.apply(DomainEvent::RouteChanged(r)),

            AppCommand::ToggleCommandPalette => {
                self.store.apply(DomainEvent::CommandPaletteToggled)
            }

            AppCommand::OpenOverlay(o) => self.store.apply(DomainEvent::OverlayOpened(o)),

            AppCommand::CloseOverlay(kind) => self.store.apply(DomainEvent::OverlayClosed(kind)),

            AppCommand::CloseTopOverlay => {
                let top = self.store.state().top_overlay().map(Overlay::kind);
                if let Some(kind) = top {
                    self.store.apply(DomainEvent::OverlayClosed(kind));
                }
            }

            AppCommand::SetPaletteQuery(q) => {
                self.store.apply(DomainEvent::PaletteQueryChanged(q))
            }

            AppCommand::RunPaletteCommand(id) => {
                // The entry's action executes before the palette closes, so a
                // navigation it requests is visible as soon as the overlay is
                // gone.
                if let Some(entry) = self.registry.get(id) {
                    match entry.action {
                        CommandAction::Navigate(r) => {
                            self.store.apply(DomainEvent::RouteChanged(r))
                        }
                        CommandAction::Nothing => {}
                    }
                } else {
                    tracing::warn!("palette confirmed unknown command id {id:?}");
                }
                self.store
                    .apply(DomainEvent::OverlayClosed(OverlayKind::CommandPalette));
            }

            AppCommand::SelectBillingCycle(cycle) => {
                self.store.apply(DomainEvent::BillingCycleSelected(cycle))
            }

            AppCommand::ToggleAuthMode => self.store.apply(DomainEvent::AuthModeToggled),

            AppCommand::SubmitAuth => {
                let email = self.store.state().auth.email;
                match validate_email(&email) {
                    Err(e) => self.store.apply(DomainEvent::AuthRejected {
                        reason: e.to_string(),
                    }),
                    Ok(()) => {
                        let run_id: TimerRunId = Uuid::new_v4();
                        self.store.apply(DomainEvent::SignInStarted { run_id });
                        self.timer.schedule(
                            Duration::from_millis(launchpad_config::SIGN_IN_DELAY_MS),
                            DomainEvent::SignInCompleted { run_id },
                            self.tx.clone(),
                        );
                    }
                }
            }

            AppCommand::ToggleRowSelection(id) => {
                self.store.apply(DomainEvent::RowSelectionToggled(id))
            }

            AppCommand::ToggleRowMenu(id) => self.store.apply(DomainEvent::RowMenuToggled(id)),

            AppCommand::CloseRowMenu => self.store.apply(DomainEvent::RowMenuClosed),

            AppCommand::RequestDelete(target) => {
                self.store
                    .apply(DomainEvent::OverlayOpened(Overlay::DeleteConfirm { target }));
                self.store.apply(DomainEvent::RowMenuClosed);
            }

            AppCommand::ConfirmDelete => {
                // Confirming is cosmetic: the overlay closes and the fixture
                // list is left untouched.
                self.store
                    .apply(DomainEvent::OverlayClosed(OverlayKind::DeleteConfirm));
            }

            AppCommand::AdvanceWizard => self.store.apply(DomainEvent::WizardAdvanced),

            AppCommand::FinishWizard => {
                self.store
                    .apply(DomainEvent::OverlayClosed(OverlayKind::CreateProject));
            }

            AppCommand::SelectSettingsTab(tab) => {
                self.store.apply(DomainEvent::SettingsTabSelected(tab))
            }

            AppCommand::SaveSettings => {
                if self.store.state().settings.saving {
                    return;
                }
                let run_id: TimerRunId = Uuid::new_v4();
                self.store.apply(DomainEvent::SaveStarted { run_id });

                let save = Duration::from_millis(launchpad_config::SETTINGS_SAVE_DELAY_MS);
                let toast = save + Duration::from_millis(launchpad_config::TOAST_DURATION_MS);
                self.timer.schedule(
                    save,
                    DomainEvent::SaveCompleted { run_id },
                    self.tx.clone(),
                );
                self.timer
                    .schedule(toast, DomainEvent::ToastExpired { run_id }, self.tx.clone());
            }
        }
    }

    /// Call once per frame to apply events produced by worker threads.
    /// Stale timer completions are rejected by the reducer's run id checks.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.store.apply(ev);
        }
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }

    fn load_initial_state(&mut self) {
        self.store.apply(DomainEvent::BootLoadingStarted);
        let tx = self.tx.clone();
        let directory = self.directory.clone();
        let spawn_res = std::thread::Builder::new()
            .name("launchpad-load-fixtures".into())
            .spawn(move || {
                let res = (|| {
                    anyhow::Ok((
                        directory.list_deployments()?,
                        directory.usage_metrics()?,
                        directory.team_members()?,
                    ))
                })();

                match res {
                    Ok((deployments, usage, team)) => {
                        let _ = tx.blocking_send(DomainEvent::FixturesLoaded {
                            deployments,
                            usage,
                            team,
                        });
                    }
                    Err(e) => {
                        let _ = tx.blocking_send(DomainEvent::BootFailed {
                            message: e.to_string(),
                        });
                    }
                }
            });

        if let Err(e) = spawn_res {
            self.store.apply(DomainEvent::BootFailed {
                message: format!("Failed to start fixture loader thread: {e}"),
            });
        }
    }
}
