mod support;

use std::time::Duration;

use launchpad_app_core::{AppCommand, DomainEvent, Route};
use support::{deliver, test_kernel};

#[test]
fn submit_without_at_sign_sets_an_inline_error_and_stays_put() {
    let (mut kernel, timer) = test_kernel();
    kernel.dispatch(AppCommand::Navigate(Route::Auth));
    kernel.store.with_state_mut(|s| s.auth.email = "not-an-email".into());

    kernel.dispatch(AppCommand::SubmitAuth);

    let state = kernel.store.state();
    assert_eq!(state.route, Route::Auth);
    assert!(!state.auth.loading);
    assert_eq!(
        state.auth.error.as_deref(),
        Some("Please enter a valid email address")
    );
    assert!(timer.drain().is_empty(), "rejected submit must not schedule");
}

#[test]
fn valid_submit_schedules_the_sign_in_and_lands_on_the_dashboard() {
    let (mut kernel, timer) = test_kernel();
    kernel.dispatch(AppCommand::Navigate(Route::Auth));
    kernel.store.with_state_mut(|s| s.auth.email = "name@example.com".into());

    kernel.dispatch(AppCommand::SubmitAuth);

    let state = kernel.store.state();
    assert!(state.auth.loading);
    assert!(state.auth.error.is_none());
    assert_eq!(state.route, Route::Auth);

    let mut scheduled = timer.drain();
    assert_eq!(scheduled.len(), 1);
    let (delay, completion) = scheduled.remove(0);
    assert_eq!(
        delay,
        Duration::from_millis(launchpad_config::SIGN_IN_DELAY_MS)
    );

    deliver(&mut kernel, completion);

    let state = kernel.store.state();
    assert_eq!(state.route, Route::Dashboard);
    assert!(!state.auth.loading);
}

#[test]
fn sign_in_completion_after_leaving_the_screen_is_dropped() {
    let (mut kernel, timer) = test_kernel();
    kernel.dispatch(AppCommand::Navigate(Route::Auth));
    kernel.store.with_state_mut(|s| s.auth.email = "name@example.com".into());
    kernel.dispatch(AppCommand::SubmitAuth);
    let (_, completion) = timer.drain().remove(0);

    // The user bails back to the landing page before the timer fires.
    kernel.dispatch(AppCommand::Navigate(Route::Landing));
    deliver(&mut kernel, completion);

    let state = kernel.store.state();
    assert_eq!(state.route, Route::Landing);
    assert!(!state.auth.loading);
}

#[test]
fn resubmitting_invalidates_the_previous_pending_sign_in() {
    let (mut kernel, timer) = test_kernel();
    kernel.dispatch(AppCommand::Navigate(Route::Auth));
    kernel.store.with_state_mut(|s| s.auth.email = "a@b".into());

    kernel.dispatch(AppCommand::SubmitAuth);
    let (_, first) = timer.drain().remove(0);
    kernel.dispatch(AppCommand::SubmitAuth);

    // The first completion no longer matches the pending run id.
    deliver(&mut kernel, first);
    assert_eq!(kernel.store.state().route, Route::Auth);

    let (_, second) = timer.drain().remove(0);
    deliver(&mut kernel, second);
    assert_eq!(kernel.store.state().route, Route::Dashboard);
}

#[test]
fn mode_toggle_keeps_field_contents() {
    let (mut kernel, _timer) = test_kernel();
    kernel.dispatch(AppCommand::Navigate(Route::Auth));
    kernel.store.with_state_mut(|s| s.auth.email = "name@example.com".into());

    kernel.dispatch(AppCommand::ToggleAuthMode);

    let state = kernel.store.state();
    assert_eq!(state.auth.mode, launchpad_app_core::AuthMode::SignUp);
    assert_eq!(state.auth.email, "name@example.com");
}

#[test]
fn boot_failure_event_surfaces_in_state() {
    let (mut kernel, _timer) = test_kernel();
    deliver(
        &mut kernel,
        DomainEvent::BootFailed {
            message: "fixture decode failed".into(),
        },
    );
    assert!(matches!(
        kernel.store.state().boot,
        launchpad_app_core::BootState::Failed(_)
    ));
}
