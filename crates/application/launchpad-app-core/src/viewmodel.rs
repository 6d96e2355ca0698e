use crate::domain::{
    AppState, AuthMode, BillingCycle, Deployment, DeploymentId, DeploymentStatus, Overlay,
    OverlayKind, SettingsTab,
};
use crate::registry::{CommandId, CommandRegistry};

// --- Command palette ---

#[derive(Debug, Clone)]
pub struct PaletteEntryVm {
    pub id: CommandId,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct PaletteVm {
    pub open: bool,
    pub query: String,
    pub matches: Vec<PaletteEntryVm>,
}

pub fn palette_vm(state: &AppState, registry: &CommandRegistry) -> PaletteVm {
    PaletteVm {
        open: state.overlay_open(OverlayKind::CommandPalette),
        query: state.palette_query.clone(),
        matches: registry
            .search(&state.palette_query)
            .into_iter()
            .map(|e| PaletteEntryVm {
                id: e.id,
                label: e.label,
            })
            .collect(),
    }
}

// --- Auth ---

#[derive(Debug, Clone)]
pub struct AuthVm {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub submit_label: &'static str,
    pub toggle_prompt: &'static str,
    pub toggle_label: &'static str,
    pub error: Option<String>,
    pub loading: bool,
}

pub fn auth_vm(state: &AppState) -> AuthVm {
    let a = &state.auth;
    match a.mode {
        AuthMode::SignIn => AuthVm {
            heading: "Welcome back",
            subheading: "Enter your credentials to access your account.",
            submit_label: "Sign In",
            toggle_prompt: "Don't have an account?",
            toggle_label: "Sign up",
            error: a.error.clone(),
            loading: a.loading,
        },
        AuthMode::SignUp => AuthVm {
            heading: "Create an account",
            subheading: "Start deploying your projects in seconds.",
            submit_label: "Create Account",
            toggle_prompt: "Already have an account?",
            toggle_label: "Log in",
            error: a.error.clone(),
            loading: a.loading,
        },
    }
}

// --- Dashboard ---

pub fn status_label(status: DeploymentStatus) -> &'static str {
    match status {
        DeploymentStatus::Live => "Live",
        DeploymentStatus::Building => "Building",
        DeploymentStatus::Failed => "Failed",
        DeploymentStatus::Queued => "Queued",
    }
}

#[derive(Debug, Clone)]
pub struct StatCardVm {
    pub label: String,
    pub value: String,
    pub change_label: String,
    pub change_positive: bool,
    /// Normalized 0..1 for the sparkline painter.
    pub sparkline: Vec<f32>,
}

#[derive(Debug, Clone)]
pub struct DeploymentRowVm {
    pub id: DeploymentId,
    pub project: String,
    pub commit: String,
    pub branch: String,
    pub status: DeploymentStatus,
    pub status_label: &'static str,
    pub age: String,
    pub author_initial: String,
    pub selected: bool,
    pub menu_open: bool,
}

#[derive(Debug, Clone)]
pub struct DashboardVm {
    pub org: &'static str,
    pub project: String,
    pub stats: Vec<StatCardVm>,
    pub rows: Vec<DeploymentRowVm>,
    pub any_menu_open: bool,
}

fn normalize_sparkline(points: &[f32]) -> Vec<f32> {
    let min = points.iter().copied().fold(f32::INFINITY, f32::min);
    let max = points.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !min.is_finite() || !max.is_finite() || (max - min).abs() < f32::EPSILON {
        return points.iter().map(|_| 0.5).collect();
    }
    points.iter().map(|p| (p - min) / (max - min)).collect()
}

fn row_vm(d: &Deployment, state: &AppState) -> DeploymentRowVm {
    DeploymentRowVm {
        id: d.id.clone(),
        project: d.project.clone(),
        commit: d.commit.clone(),
        branch: d.branch.clone(),
        status: d.status,
        status_label: status_label(d.status),
        age: d.age.clone(),
        author_initial: d.author.chars().next().map(|c| c.to_string()).unwrap_or_default(),
        selected: state.dashboard.selected.contains(&d.id),
        menu_open: state.dashboard.open_menu.as_ref() == Some(&d.id),
    }
}

pub fn dashboard_vm(state: &AppState) -> DashboardVm {
    DashboardVm {
        org: "acme-corp",
        project: state.settings.project_name.clone(),
        stats: state
            .usage
            .stats
            .iter()
            .map(|s| StatCardVm {
                label: s.label.clone(),
                value: s.value.clone(),
                change_label: if s.change_pct >= 0.0 {
                    format!("+{}%", s.change_pct)
                } else {
                    format!("{}%", s.change_pct)
                },
                change_positive: s.change_pct >= 0.0,
                sparkline: normalize_sparkline(&s.sparkline),
            })
            .collect(),
        rows: state.deployments.iter().map(|d| row_vm(d, state)).collect(),
        any_menu_open: state.dashboard.open_menu.is_some(),
    }
}

// --- Create-project wizard ---

#[derive(Debug, Clone)]
pub struct WizardVm {
    pub step: u8,
    pub step_labels: [&'static str; 3],
    pub next_label: &'static str,
    pub is_terminal: bool,
}

pub fn wizard_vm(state: &AppState) -> WizardVm {
    let step = state.dashboard.wizard_step;
    let is_terminal = step >= launchpad_config::WIZARD_LAST_STEP;
    WizardVm {
        step,
        step_labels: ["Details", "Framework", "Deploy"],
        next_label: if is_terminal {
            "Deploy Project"
        } else {
            "Next Step"
        },
        is_terminal,
    }
}

#[derive(Debug, Clone)]
pub struct DeleteConfirmVm {
    pub target: DeploymentId,
}

pub fn delete_confirm_vm(state: &AppState) -> Option<DeleteConfirmVm> {
    state.overlays.iter().find_map(|o| match o {
        Overlay::DeleteConfirm { target } => Some(DeleteConfirmVm {
            target: target.clone(),
        }),
        _ => None,
    })
}

// --- Settings ---

#[derive(Debug, Clone)]
pub struct UsageMeterVm {
    pub label: String,
    pub used_label: String,
    pub pct_label: String,
    pub fraction: f32,
}

#[derive(Debug, Clone)]
pub struct TeamMemberVm {
    pub initials: String,
    pub name: String,
    pub role: String,
    pub joined: String,
}

#[derive(Debug, Clone)]
pub struct SettingsVm {
    pub active_tab: SettingsTab,
    pub saving: bool,
    pub toast_visible: bool,
    pub meters: Vec<UsageMeterVm>,
    pub team: Vec<TeamMemberVm>,
}

pub fn settings_vm(state: &AppState) -> SettingsVm {
    SettingsVm {
        active_tab: state.settings.active_tab,
        saving: state.settings.saving,
        toast_visible: state.settings.toast.is_some(),
        meters: state
            .usage
            .meters
            .iter()
            .map(|m| {
                let fraction = if m.limit > 0.0 {
                    (m.used / m.limit) as f32
                } else {
                    0.0
                };
                UsageMeterVm {
                    label: m.label.clone(),
                    used_label: format!("{} {u} / {} {u}", m.used, m.limit, u = m.unit),
                    pct_label: format!("{:.0}% used", fraction * 100.0),
                    fraction: fraction.clamp(0.0, 1.0),
                }
            })
            .collect(),
        team: state
            .team
            .iter()
            .map(|t| TeamMemberVm {
                initials: t.initials(),
                name: t.name.clone(),
                role: t.role.clone(),
                joined: t.joined.clone(),
            })
            .collect(),
    }
}

// --- Landing ---

#[derive(Debug, Clone)]
pub struct LandingVm {
    pub billing_cycle: BillingCycle,
    pub pro_price: &'static str,
    pub pro_price_note: &'static str,
}

pub fn landing_vm(state: &AppState) -> LandingVm {
    match state.landing.billing_cycle {
        BillingCycle::Monthly => LandingVm {
            billing_cycle: BillingCycle::Monthly,
            pro_price: "$20",
            pro_price_note: "per member / month",
        },
        BillingCycle::Yearly => LandingVm {
            billing_cycle: BillingCycle::Yearly,
            pro_price: "$16",
            pro_price_note: "per member / month, billed yearly",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UsageMeter;

    #[test]
    fn sparkline_normalization_maps_extremes_to_unit_range() {
        let pts = normalize_sparkline(&[10.0, 70.0, 40.0]);
        assert_eq!(pts[0], 0.0);
        assert_eq!(pts[1], 1.0);
        assert!(pts[2] > 0.4 && pts[2] < 0.6);

        // Flat series renders as a midline, not NaN.
        let flat = normalize_sparkline(&[5.0, 5.0, 5.0]);
        assert!(flat.iter().all(|p| *p == 0.5));
    }

    #[test]
    fn delete_confirm_projection_carries_the_target_id() {
        let mut state = AppState::default();
        assert!(delete_confirm_vm(&state).is_none());

        state.overlays.push(Overlay::DeleteConfirm {
            target: "d-6d5e5g".to_string(),
        });
        let vm = delete_confirm_vm(&state).unwrap();
        assert_eq!(vm.target, "d-6d5e5g");
    }

    #[test]
    fn usage_meter_fraction_is_clamped() {
        let mut state = AppState::default();
        state.usage.meters = vec![UsageMeter {
            label: "Bandwidth".into(),
            used: 150.0,
            limit: 100.0,
            unit: "GB".into(),
        }];
        let vm = settings_vm(&state);
        assert_eq!(vm.meters[0].fraction, 1.0);
    }
}
