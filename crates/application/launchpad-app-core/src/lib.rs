pub mod app_core;
pub mod domain;
pub mod fixtures;
pub mod kernel;
pub mod ports;
pub mod registry;
pub mod timer;
pub mod viewmodel;

pub use app_core::{AppCommand, AppStore, DomainEvent};
pub use domain::{
    AppState, AuthError, AuthMode, BillingCycle, BootState, Deployment, DeploymentId,
    DeploymentStatus, Overlay, OverlayKind, Route, SettingsTab, TimerRunId,
};
pub use fixtures::StaticFixtures;
pub use kernel::AppKernel;
pub use ports::{DeploymentDirectory, TimerPort};
pub use registry::{CommandAction, CommandEntry, CommandId, CommandRegistry};
pub use timer::ThreadTimer;

/// The kernel wired with production ports, as the desktop UI runs it.
pub type DesktopKernel = AppKernel<StaticFixtures, ThreadTimer>;

pub fn desktop_kernel() -> DesktopKernel {
    AppKernel::new(AppStore::default(), StaticFixtures, ThreadTimer)
}
