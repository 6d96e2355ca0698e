use crate::domain::{
    AppState, AuthMode, AuthScreen, BootState, DashboardScreen, LandingScreen, Overlay,
    OverlayKind, Route, SettingsScreen,
};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::BootLoadingStarted => {
            state.boot = BootState::Loading;
        }

        DomainEvent::FixturesLoaded {
            deployments,
            usage,
            team,
        } => {
            state.deployments = deployments;
            state.usage = usage;
            state.team = team;
            state.boot = BootState::Ready;
        }

        DomainEvent::BootFailed { message } => {
            state.boot = BootState::Failed(message);
        }

        DomainEvent::RouteChanged(r) => enter_route(&mut state, r),

        DomainEvent::OverlayOpened(o) => {
            let kind = o.kind();
            state.overlays.retain(|x| x.kind() != kind);
            state.overlays.push(o);
        }

        DomainEvent::OverlayClosed(kind) => close_overlay(&mut state, kind),

        DomainEvent::CommandPaletteToggled => {
            if state.overlay_open(OverlayKind::CommandPalette) {
                close_overlay(&mut state, OverlayKind::CommandPalette);
            } else {
                state.overlays.push(Overlay::CommandPalette);
            }
        }

        DomainEvent::PaletteQueryChanged(q) => state.palette_query = q,

        DomainEvent::BillingCycleSelected(cycle) => state.landing.billing_cycle = cycle,

        DomainEvent::AuthModeToggled => {
            state.auth.mode = match state.auth.mode {
                AuthMode::SignIn => AuthMode::SignUp,
                AuthMode::SignUp => AuthMode::SignIn,
            };
        }

        DomainEvent::AuthRejected { reason } => {
            state.auth.error = Some(reason);
            state.auth.loading = false;
        }

        DomainEvent::SignInStarted { run_id } => {
            state.auth.error = None;
            state.auth.loading = true;
            state.auth.pending_sign_in = Some(run_id);
        }

        DomainEvent::SignInCompleted { run_id } => {
            if state.auth.pending_sign_in == Some(run_id) {
                enter_route(&mut state, Route::Dashboard);
            }
        }

        DomainEvent::RowSelectionToggled(id) => {
            if !state.dashboard.selected.remove(&id) {
                state.dashboard.selected.insert(id);
            }
        }

        DomainEvent::RowMenuToggled(id) => {
            state.dashboard.open_menu = if state.dashboard.open_menu.as_ref() == Some(&id) {
                None
            } else {
                Some(id)
            };
        }

        DomainEvent::RowMenuClosed => state.dashboard.open_menu = None,

        DomainEvent::WizardAdvanced => {
            state.dashboard.wizard_step =
                launchpad_config::clamp_wizard_step(state.dashboard.wizard_step.saturating_add(1));
        }

        DomainEvent::SettingsTabSelected(tab) => state.settings.active_tab = tab,

        DomainEvent::SaveStarted { run_id } => {
            state.settings.saving = true;
            state.settings.pending_save = Some(run_id);
            state.settings.toast = None;
        }

        DomainEvent::SaveCompleted { run_id } => {
            if state.settings.pending_save == Some(run_id) {
                state.settings.saving = false;
                state.settings.pending_save = None;
                state.settings.toast = Some(run_id);
            }
        }

        DomainEvent::ToastExpired { run_id } => {
            if state.settings.toast == Some(run_id) {
                state.settings.toast = None;
            }
        }
    }
    state
}

/// Applies a route transition: screen coordinators are discarded and
/// recreated with defaults (a transition to the current route too), pending
/// one-shot timers die with them, and screen-owned overlays close.
fn enter_route(state: &mut AppState, r: Route) {
    state.route = r;
    state.landing = LandingScreen::default();
    state.auth = AuthScreen::default();
    state.dashboard = DashboardScreen::default();
    state.settings = SettingsScreen::default();
    state.overlays.retain(Overlay::survives_navigation);
}

fn close_overlay(state: &mut AppState, kind: OverlayKind) {
    state.overlays.retain(|x| x.kind() != kind);
    // Closing the wizard by any path rearms it at the first step.
    if kind == OverlayKind::CreateProject {
        state.dashboard.wizard_step = launchpad_config::WIZARD_FIRST_STEP;
        state.dashboard.wizard_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeploymentId;

    fn id(s: &str) -> DeploymentId {
        s.to_string()
    }

    #[test]
    fn route_change_resets_screen_state_even_on_self_transition() {
        let mut state = AppState::default();
        state.route = Route::Dashboard;
        state.dashboard.wizard_step = 3;
        state.dashboard.selected.insert(id("d-1"));

        let state = reduce(state, DomainEvent::RouteChanged(Route::Dashboard));

        assert_eq!(state.route, Route::Dashboard);
        assert_eq!(state.dashboard.wizard_step, launchpad_config::WIZARD_FIRST_STEP);
        assert!(state.dashboard.selected.is_empty());
    }

    #[test]
    fn route_change_closes_screen_overlays_but_keeps_the_palette() {
        let mut state = AppState::default();
        state.overlays.push(Overlay::CreateProject);
        state.overlays.push(Overlay::CommandPalette);

        let state = reduce(state, DomainEvent::RouteChanged(Route::Settings));

        assert_eq!(state.overlays, vec![Overlay::CommandPalette]);
    }

    #[test]
    fn opening_an_open_overlay_moves_it_to_the_top_without_duplicating() {
        let mut state = AppState::default();
        state.overlays.push(Overlay::CreateProject);
        state.overlays.push(Overlay::CommandPalette);

        let state = reduce(state, DomainEvent::OverlayOpened(Overlay::CreateProject));

        assert_eq!(
            state.overlays,
            vec![Overlay::CommandPalette, Overlay::CreateProject]
        );
    }

    #[test]
    fn wizard_step_is_bounded_and_resets_on_close() {
        let mut state = AppState::default();
        state.overlays.push(Overlay::CreateProject);

        for _ in 0..10 {
            state = reduce(state, DomainEvent::WizardAdvanced);
        }
        assert_eq!(state.dashboard.wizard_step, launchpad_config::WIZARD_LAST_STEP);

        let state = reduce(state, DomainEvent::OverlayClosed(OverlayKind::CreateProject));
        assert_eq!(state.dashboard.wizard_step, launchpad_config::WIZARD_FIRST_STEP);
        assert!(!state.overlay_open(OverlayKind::CreateProject));
    }

    #[test]
    fn second_row_menu_closes_the_first() {
        let state = AppState::default();
        let state = reduce(state, DomainEvent::RowMenuToggled(id("d-1")));
        assert_eq!(state.dashboard.open_menu, Some(id("d-1")));

        let state = reduce(state, DomainEvent::RowMenuToggled(id("d-2")));
        assert_eq!(state.dashboard.open_menu, Some(id("d-2")));

        let state = reduce(state, DomainEvent::RowMenuToggled(id("d-2")));
        assert_eq!(state.dashboard.open_menu, None);
    }

    #[test]
    fn stale_sign_in_completion_is_ignored() {
        let run = uuid::Uuid::new_v4();
        let stale = uuid::Uuid::new_v4();

        let mut state = AppState::default();
        state.route = Route::Auth;
        state = reduce(state, DomainEvent::SignInStarted { run_id: run });
        assert!(state.auth.loading);

        let state = reduce(state, DomainEvent::SignInCompleted { run_id: stale });
        assert_eq!(state.route, Route::Auth);
        assert!(state.auth.loading);

        let state = reduce(state, DomainEvent::SignInCompleted { run_id: run });
        assert_eq!(state.route, Route::Dashboard);
        assert!(!state.auth.loading);
    }
}
