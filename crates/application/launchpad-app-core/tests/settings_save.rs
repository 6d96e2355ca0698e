mod support;

use std::time::Duration;

use launchpad_app_core::{AppCommand, Route, SettingsTab};
use support::{deliver, test_kernel};

#[test]
fn save_schedules_completion_and_toast_expiry_together() {
    let (mut kernel, timer) = test_kernel();
    kernel.dispatch(AppCommand::Navigate(Route::Settings));

    kernel.dispatch(AppCommand::SaveSettings);
    assert!(kernel.store.state().settings.saving);

    let scheduled = timer.drain();
    assert_eq!(scheduled.len(), 2);
    assert_eq!(
        scheduled[0].0,
        Duration::from_millis(launchpad_config::SETTINGS_SAVE_DELAY_MS)
    );
    assert_eq!(
        scheduled[1].0,
        Duration::from_millis(
            launchpad_config::SETTINGS_SAVE_DELAY_MS + launchpad_config::TOAST_DURATION_MS
        )
    );
}

#[test]
fn toast_appears_on_completion_and_self_dismisses() {
    let (mut kernel, timer) = test_kernel();
    kernel.dispatch(AppCommand::Navigate(Route::Settings));
    kernel.dispatch(AppCommand::SaveSettings);

    let mut scheduled = timer.drain();
    let (_, completed) = scheduled.remove(0);
    let (_, expired) = scheduled.remove(0);

    deliver(&mut kernel, completed);
    let state = kernel.store.state();
    assert!(!state.settings.saving);
    assert!(state.settings.toast.is_some());

    deliver(&mut kernel, expired);
    assert!(kernel.store.state().settings.toast.is_none());
}

#[test]
fn double_submit_while_saving_is_ignored() {
    let (mut kernel, timer) = test_kernel();
    kernel.dispatch(AppCommand::Navigate(Route::Settings));

    kernel.dispatch(AppCommand::SaveSettings);
    kernel.dispatch(AppCommand::SaveSettings);

    assert_eq!(timer.drain().len(), 2, "second submit must not reschedule");
}

#[test]
fn stale_save_completion_after_navigation_is_dropped() {
    let (mut kernel, timer) = test_kernel();
    kernel.dispatch(AppCommand::Navigate(Route::Settings));
    kernel.dispatch(AppCommand::SaveSettings);
    let (_, completed) = timer.drain().remove(0);

    kernel.dispatch(AppCommand::Navigate(Route::Dashboard));
    deliver(&mut kernel, completed);

    let state = kernel.store.state();
    assert!(!state.settings.saving);
    assert!(state.settings.toast.is_none());
}

#[test]
fn tab_selection_sticks_until_navigation_resets_it() {
    let (mut kernel, _timer) = test_kernel();
    kernel.dispatch(AppCommand::Navigate(Route::Settings));

    kernel.dispatch(AppCommand::SelectSettingsTab(SettingsTab::Billing));
    assert_eq!(
        kernel.store.state().settings.active_tab,
        SettingsTab::Billing
    );

    kernel.dispatch(AppCommand::Navigate(Route::Settings));
    assert_eq!(
        kernel.store.state().settings.active_tab,
        SettingsTab::General
    );
}
