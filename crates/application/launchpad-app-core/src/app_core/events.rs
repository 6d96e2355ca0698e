use crate::domain::{
    BillingCycle, Deployment, DeploymentId, Overlay, OverlayKind, Route, SettingsTab, TeamMember,
    TimerRunId, UsageSnapshot,
};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Boot state
    BootLoadingStarted,
    FixturesLoaded {
        deployments: Vec<Deployment>,
        usage: UsageSnapshot,
        team: Vec<TeamMember>,
    },
    BootFailed {
        message: String,
    },

    // Navigation
    RouteChanged(Route),

    // Overlay stack
    OverlayOpened(Overlay),
    OverlayClosed(OverlayKind),
    CommandPaletteToggled,
    PaletteQueryChanged(String),

    // Landing page
    BillingCycleSelected(BillingCycle),

    // Auth lifecycle
    AuthModeToggled,
    AuthRejected {
        reason: String,
    },
    SignInStarted {
        run_id: TimerRunId,
    },
    SignInCompleted {
        run_id: TimerRunId,
    },

    // Dashboard interactions
    RowSelectionToggled(DeploymentId),
    RowMenuToggled(DeploymentId),
    RowMenuClosed,
    WizardAdvanced,

    // Settings lifecycle
    SettingsTabSelected(SettingsTab),
    SaveStarted {
        run_id: TimerRunId,
    },
    SaveCompleted {
        run_id: TimerRunId,
    },
    ToastExpired {
        run_id: TimerRunId,
    },
}
