use crate::domain::{BillingCycle, DeploymentId, Overlay, OverlayKind, Route, SettingsTab};
use crate::registry::CommandId;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Boot
    LoadInitialState,

    // Navigation
    Navigate(Route),

    // Overlays
    ToggleCommandPalette,
    OpenOverlay(Overlay),
    CloseOverlay(OverlayKind),
    CloseTopOverlay,

    // Command palette
    SetPaletteQuery(String),
    RunPaletteCommand(CommandId),

    // Landing screen
    SelectBillingCycle(BillingCycle),

    // Auth screen
    ToggleAuthMode,
    SubmitAuth,

    // Dashboard screen
    ToggleRowSelection(DeploymentId),
    ToggleRowMenu(DeploymentId),
    CloseRowMenu,
    RequestDelete(DeploymentId),
    ConfirmDelete,
    AdvanceWizard,
    FinishWizard,

    // Settings screen
    SelectSettingsTab(SettingsTab),
    SaveSettings,
}
