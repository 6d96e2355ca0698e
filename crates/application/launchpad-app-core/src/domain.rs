use std::collections::BTreeSet;

use serde::Deserialize;
use uuid::Uuid;

pub type DeploymentId = String;

/// Matching token for a scheduled one-shot completion. A completion whose
/// run id no longer matches the pending slot in state is stale and ignored.
pub type TimerRunId = Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
}

/// Top-level screens. Exactly one is current; the app boots on `Landing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Auth,
    Dashboard,
    Settings,
}

/// Transient layers stacked above the current screen. Paint order is stack
/// order; the topmost entry receives Escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    CommandPalette,
    CreateProject,
    DeleteConfirm { target: DeploymentId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    CommandPalette,
    CreateProject,
    DeleteConfirm,
}

impl Overlay {
    pub fn kind(&self) -> OverlayKind {
        match self {
            Overlay::CommandPalette => OverlayKind::CommandPalette,
            Overlay::CreateProject => OverlayKind::CreateProject,
            Overlay::DeleteConfirm { .. } => OverlayKind::DeleteConfirm,
        }
    }

    /// Overlays owned by a screen die with it; the palette is owned by the
    /// application root and survives route changes.
    pub fn survives_navigation(&self) -> bool {
        matches!(self, Overlay::CommandPalette)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DeploymentStatus {
    Live,
    Building,
    Failed,
    Queued,
}

/// Display-only record sourced from the fixture directory; never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct Deployment {
    pub id: DeploymentId,
    pub project: String,
    pub commit: String,
    pub branch: String,
    pub status: DeploymentStatus,
    pub age: String,
    pub author: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatMetric {
    pub label: String,
    pub value: String,
    /// Signed percentage, e.g. `12.0` renders as "+12%".
    pub change_pct: f32,
    pub sparkline: Vec<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsageMeter {
    pub label: String,
    pub used: f64,
    pub limit: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageSnapshot {
    pub stats: Vec<StatMetric>,
    pub meters: Vec<UsageMeter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub joined: String,
}

impl TeamMember {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    General,
    Team,
    Billing,
}

#[derive(Debug, Clone)]
pub struct LandingScreen {
    pub billing_cycle: BillingCycle,
}

impl Default for LandingScreen {
    fn default() -> Self {
        Self {
            billing_cycle: BillingCycle::Monthly,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthScreen {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
    pub pending_sign_in: Option<TimerRunId>,
}

impl Default for AuthScreen {
    fn default() -> Self {
        Self {
            mode: AuthMode::SignIn,
            email: String::new(),
            password: String::new(),
            error: None,
            loading: false,
            pending_sign_in: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardScreen {
    pub selected: BTreeSet<DeploymentId>,
    /// At most one row action menu open at a time, keyed by deployment id.
    pub open_menu: Option<DeploymentId>,
    pub wizard_step: u8,
    pub wizard_name: String,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
            open_menu: None,
            wizard_step: launchpad_config::WIZARD_FIRST_STEP,
            wizard_name: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsScreen {
    pub active_tab: SettingsTab,
    pub project_name: String,
    pub saving: bool,
    pub pending_save: Option<TimerRunId>,
    /// Present while the save-success toast is visible.
    pub toast: Option<TimerRunId>,
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self {
            active_tab: SettingsTab::General,
            project_name: "dashboard-app".to_string(),
            saving: false,
            pending_save: None,
            toast: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum BootState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub boot: BootState,
    pub route: Route,
    pub overlays: Vec<Overlay>,
    pub palette_query: String,

    pub deployments: Vec<Deployment>,
    pub usage: UsageSnapshot,
    pub team: Vec<TeamMember>,

    pub landing: LandingScreen,
    pub auth: AuthScreen,
    pub dashboard: DashboardScreen,
    pub settings: SettingsScreen,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            boot: BootState::Loading,
            route: Route::Landing,
            overlays: Vec::new(),
            palette_query: String::new(),
            deployments: Vec::new(),
            usage: UsageSnapshot::default(),
            team: Vec::new(),
            landing: LandingScreen::default(),
            auth: AuthScreen::default(),
            dashboard: DashboardScreen::default(),
            settings: SettingsScreen::default(),
        }
    }
}

impl AppState {
    pub fn overlay_open(&self, kind: OverlayKind) -> bool {
        self.overlays.iter().any(|o| o.kind() == kind)
    }

    pub fn top_overlay(&self) -> Option<&Overlay> {
        self.overlays.last()
    }

    pub fn has_pending_work(&self) -> bool {
        matches!(self.boot, BootState::Loading)
            || self.auth.pending_sign_in.is_some()
            || self.settings.pending_save.is_some()
            || self.settings.toast.is_some()
    }
}

pub fn validate_email(email: &str) -> Result<(), AuthError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(AuthError::InvalidEmailFormat)
    }
}
