mod support;

use launchpad_app_core::{
    AppCommand, DeploymentDirectory, DomainEvent, Overlay, OverlayKind, Route, StaticFixtures,
};
use support::{deliver, test_kernel};

fn kernel_on_dashboard() -> support::TestKernel {
    let (mut kernel, _timer) = test_kernel();
    deliver(
        &mut kernel,
        DomainEvent::FixturesLoaded {
            deployments: StaticFixtures.list_deployments().unwrap(),
            usage: StaticFixtures.usage_metrics().unwrap(),
            team: StaticFixtures.team_members().unwrap(),
        },
    );
    kernel.dispatch(AppCommand::Navigate(Route::Dashboard));
    kernel
}

#[test]
fn wizard_next_never_leaves_the_step_bounds() {
    let mut kernel = kernel_on_dashboard();
    kernel.dispatch(AppCommand::OpenOverlay(Overlay::CreateProject));

    assert_eq!(kernel.store.state().dashboard.wizard_step, 1);
    for _ in 0..5 {
        kernel.dispatch(AppCommand::AdvanceWizard);
    }
    assert_eq!(kernel.store.state().dashboard.wizard_step, 3);
}

#[test]
fn finishing_or_dismissing_the_wizard_rearms_step_one() {
    let mut kernel = kernel_on_dashboard();

    kernel.dispatch(AppCommand::OpenOverlay(Overlay::CreateProject));
    kernel.dispatch(AppCommand::AdvanceWizard);
    kernel.dispatch(AppCommand::AdvanceWizard);
    kernel.dispatch(AppCommand::FinishWizard);

    let state = kernel.store.state();
    assert!(!state.overlay_open(OverlayKind::CreateProject));
    assert_eq!(state.dashboard.wizard_step, 1);

    // Escape mid-flight resets too.
    kernel.dispatch(AppCommand::OpenOverlay(Overlay::CreateProject));
    kernel.dispatch(AppCommand::AdvanceWizard);
    kernel.dispatch(AppCommand::CloseTopOverlay);
    assert_eq!(kernel.store.state().dashboard.wizard_step, 1);
}

#[test]
fn row_selection_toggles_independently_per_row() {
    let mut kernel = kernel_on_dashboard();

    kernel.dispatch(AppCommand::ToggleRowSelection("d-10f9a2".into()));
    kernel.dispatch(AppCommand::ToggleRowSelection("d-8b2c1d".into()));
    kernel.dispatch(AppCommand::ToggleRowSelection("d-10f9a2".into()));

    let selected = kernel.store.state().dashboard.selected;
    assert!(selected.contains("d-8b2c1d"));
    assert!(!selected.contains("d-10f9a2"));
}

#[test]
fn opening_a_second_row_menu_closes_the_first() {
    let mut kernel = kernel_on_dashboard();

    kernel.dispatch(AppCommand::ToggleRowMenu("d-10f9a2".into()));
    kernel.dispatch(AppCommand::ToggleRowMenu("d-8b2c1d".into()));
    assert_eq!(
        kernel.store.state().dashboard.open_menu.as_deref(),
        Some("d-8b2c1d")
    );

    kernel.dispatch(AppCommand::CloseRowMenu);
    assert_eq!(kernel.store.state().dashboard.open_menu, None);
}

#[test]
fn requesting_delete_opens_the_confirm_dialog_and_closes_the_menu() {
    let mut kernel = kernel_on_dashboard();

    kernel.dispatch(AppCommand::ToggleRowMenu("d-6d5e5g".into()));
    kernel.dispatch(AppCommand::RequestDelete("d-6d5e5g".into()));

    let state = kernel.store.state();
    assert_eq!(state.dashboard.open_menu, None);
    assert!(matches!(
        state.top_overlay(),
        Some(Overlay::DeleteConfirm { target }) if target == "d-6d5e5g"
    ));
}

#[test]
fn refreshing_replaces_the_fixture_snapshot() {
    let mut kernel = kernel_on_dashboard();
    assert_eq!(kernel.store.state().deployments.len(), 5);

    // The refresh control re-runs the boot load; the reload events replace
    // the snapshot wholesale rather than merging.
    deliver(&mut kernel, DomainEvent::BootLoadingStarted);
    assert!(matches!(
        kernel.store.state().boot,
        launchpad_app_core::BootState::Loading
    ));

    let mut deployments = StaticFixtures.list_deployments().unwrap();
    deployments.truncate(1);
    deliver(
        &mut kernel,
        DomainEvent::FixturesLoaded {
            deployments,
            usage: StaticFixtures.usage_metrics().unwrap(),
            team: StaticFixtures.team_members().unwrap(),
        },
    );

    let state = kernel.store.state();
    assert!(matches!(state.boot, launchpad_app_core::BootState::Ready));
    assert_eq!(state.deployments.len(), 1);
}

#[test]
fn confirming_delete_closes_the_dialog_but_keeps_the_record() {
    let mut kernel = kernel_on_dashboard();
    let before = kernel.store.state().deployments.len();

    kernel.dispatch(AppCommand::RequestDelete("d-6d5e5g".into()));
    kernel.dispatch(AppCommand::ConfirmDelete);

    let state = kernel.store.state();
    assert!(!state.overlay_open(OverlayKind::DeleteConfirm));
    assert_eq!(state.deployments.len(), before);
    assert!(state.deployments.iter().any(|d| d.id == "d-6d5e5g"));
}
