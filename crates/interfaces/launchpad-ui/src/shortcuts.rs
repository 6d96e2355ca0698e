use eframe::egui;
use launchpad_app_core::{AppCommand, DesktopKernel};

/// Global key handling, consumed before any widget sees the events.
/// `Modifiers::COMMAND` is Cmd on macOS and Ctrl elsewhere.
pub fn handle(ctx: &egui::Context, core: &mut DesktopKernel) {
    let palette_chord =
        ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::K));
    if palette_chord {
        core.dispatch(AppCommand::ToggleCommandPalette);
    }

    if core.store.state().top_overlay().is_some() {
        let escape = ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape));
        if escape {
            core.dispatch(AppCommand::CloseTopOverlay);
        }
    }
}
