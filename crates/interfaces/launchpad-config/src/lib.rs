//! Central configuration constants for simulated delays and UI limits.

/// Simulated credential-exchange delay before a sign-in resolves.
pub const SIGN_IN_DELAY_MS: u64 = 1_000;

/// Simulated delay before a settings save resolves.
pub const SETTINGS_SAVE_DELAY_MS: u64 = 800;

/// How long the save-success toast stays visible before self-dismissing.
pub const TOAST_DURATION_MS: u64 = 3_000;

/// First step of the create-project wizard.
pub const WIZARD_FIRST_STEP: u8 = 1;

/// Terminal step of the create-project wizard.
pub const WIZARD_LAST_STEP: u8 = 3;

/// Default main window size.
pub const WINDOW_SIZE: (f32, f32) = (1100.0, 760.0);

/// Minimum main window size.
pub const MIN_WINDOW_SIZE: (f32, f32) = (900.0, 600.0);

/// Convenience function to clamp a wizard step into the allowed range.
pub fn clamp_wizard_step(v: u8) -> u8 {
    v.clamp(WIZARD_FIRST_STEP, WIZARD_LAST_STEP)
}
