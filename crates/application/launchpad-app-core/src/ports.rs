use std::time::Duration;

use tokio::sync::mpsc;

use crate::app_core::DomainEvent;
use crate::domain::{Deployment, TeamMember, UsageSnapshot};

/// Read-only source of display data. The production implementation serves
/// embedded fixtures; a real deployment platform would query a backend.
pub trait DeploymentDirectory: Send + Sync + 'static {
    fn list_deployments(&self) -> anyhow::Result<Vec<Deployment>>;
    fn usage_metrics(&self) -> anyhow::Result<UsageSnapshot>;
    fn team_members(&self) -> anyhow::Result<Vec<TeamMember>>;
}

/// One-shot scheduled delivery of a domain event, used to simulate
/// asynchronous work. Completions carry a run id that the reducer checks
/// against state, so a timer outliving its screen is a no-op.
pub trait TimerPort: Send + Sync + 'static {
    fn schedule(&self, delay: Duration, ev: DomainEvent, tx: mpsc::Sender<DomainEvent>);
}
