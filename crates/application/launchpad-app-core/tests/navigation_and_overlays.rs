mod support;

use launchpad_app_core::{AppCommand, Overlay, OverlayKind, Route};
use support::test_kernel;

#[test]
fn current_view_is_always_the_last_requested_transition() {
    let (mut kernel, _timer) = test_kernel();
    assert_eq!(kernel.store.state().route, Route::Landing);

    for r in [
        Route::Auth,
        Route::Dashboard,
        Route::Dashboard,
        Route::Settings,
        Route::Landing,
        Route::Dashboard,
    ] {
        kernel.dispatch(AppCommand::Navigate(r));
    }

    assert_eq!(kernel.store.state().route, Route::Dashboard);
}

#[test]
fn reserved_chord_toggles_the_palette_regardless_of_state() {
    let (mut kernel, _timer) = test_kernel();

    kernel.dispatch(AppCommand::ToggleCommandPalette);
    assert!(kernel.store.state().overlay_open(OverlayKind::CommandPalette));

    kernel.dispatch(AppCommand::ToggleCommandPalette);
    assert!(!kernel.store.state().overlay_open(OverlayKind::CommandPalette));

    // Toggling also works while other overlays are stacked beneath.
    kernel.dispatch(AppCommand::OpenOverlay(Overlay::CreateProject));
    kernel.dispatch(AppCommand::ToggleCommandPalette);
    let state = kernel.store.state();
    assert_eq!(
        state.top_overlay().map(Overlay::kind),
        Some(OverlayKind::CommandPalette)
    );
    assert!(state.overlay_open(OverlayKind::CreateProject));
}

#[test]
fn escape_closes_only_the_topmost_overlay() {
    let (mut kernel, _timer) = test_kernel();

    kernel.dispatch(AppCommand::Navigate(Route::Dashboard));
    kernel.dispatch(AppCommand::OpenOverlay(Overlay::CreateProject));
    kernel.dispatch(AppCommand::ToggleCommandPalette);

    kernel.dispatch(AppCommand::CloseTopOverlay);
    let state = kernel.store.state();
    assert!(!state.overlay_open(OverlayKind::CommandPalette));
    assert!(state.overlay_open(OverlayKind::CreateProject));

    kernel.dispatch(AppCommand::CloseTopOverlay);
    assert!(kernel.store.state().overlays.is_empty());

    // Escape with nothing open is a no-op.
    kernel.dispatch(AppCommand::CloseTopOverlay);
    assert!(kernel.store.state().overlays.is_empty());
}

#[test]
fn palette_confirm_runs_the_action_and_then_closes() {
    let (mut kernel, _timer) = test_kernel();

    kernel.dispatch(AppCommand::ToggleCommandPalette);
    kernel.dispatch(AppCommand::SetPaletteQuery("dash".into()));
    kernel.dispatch(AppCommand::RunPaletteCommand("deployments"));

    let state = kernel.store.state();
    assert_eq!(state.route, Route::Dashboard);
    assert!(!state.overlay_open(OverlayKind::CommandPalette));
}

#[test]
fn cosmetic_palette_entries_still_close_the_palette() {
    let (mut kernel, _timer) = test_kernel();

    kernel.dispatch(AppCommand::ToggleCommandPalette);
    kernel.dispatch(AppCommand::RunPaletteCommand("docs"));

    let state = kernel.store.state();
    assert_eq!(state.route, Route::Landing);
    assert!(!state.overlay_open(OverlayKind::CommandPalette));
}

#[test]
fn palette_query_survives_close_and_reopen() {
    let (mut kernel, _timer) = test_kernel();

    kernel.dispatch(AppCommand::ToggleCommandPalette);
    kernel.dispatch(AppCommand::SetPaletteQuery("doc".into()));
    kernel.dispatch(AppCommand::ToggleCommandPalette);
    kernel.dispatch(AppCommand::ToggleCommandPalette);

    assert_eq!(kernel.store.state().palette_query, "doc");
}
