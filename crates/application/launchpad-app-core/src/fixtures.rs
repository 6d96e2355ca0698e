use crate::domain::{Deployment, StatMetric, TeamMember, UsageMeter, UsageSnapshot};
use crate::ports::DeploymentDirectory;

const DEPLOYMENTS_JSON: &str = r#"
[
  { "id": "d-10f9a2", "project": "marketing-site", "commit": "Fix header alignment", "branch": "main", "status": "Live", "age": "2m ago", "author": "alex" },
  { "id": "d-8b2c1d", "project": "dashboard-app", "commit": "Update api keys", "branch": "dev", "status": "Building", "age": "15s ago", "author": "sarah" },
  { "id": "d-7c3e4f", "project": "marketing-site", "commit": "Revert color changes", "branch": "main", "status": "Live", "age": "1h ago", "author": "alex" },
  { "id": "d-6d5e5g", "project": "api-gateway", "commit": "Refactor auth middleware", "branch": "feat/auth", "status": "Failed", "age": "3h ago", "author": "mike" },
  { "id": "d-5e6f6h", "project": "dashboard-app", "commit": "Init project", "branch": "main", "status": "Live", "age": "1d ago", "author": "sarah" }
]
"#;

/// Static in-memory stand-in for the deployment backend.
pub struct StaticFixtures;

impl DeploymentDirectory for StaticFixtures {
    fn list_deployments(&self) -> anyhow::Result<Vec<Deployment>> {
        let deployments: Vec<Deployment> = serde_json::from_str(DEPLOYMENTS_JSON)?;
        Ok(deployments)
    }

    fn usage_metrics(&self) -> anyhow::Result<UsageSnapshot> {
        Ok(UsageSnapshot {
            stats: vec![
                StatMetric {
                    label: "Total Deployments".into(),
                    value: "1,284".into(),
                    change_pct: 12.0,
                    sparkline: vec![
                        10.0, 25.0, 15.0, 30.0, 45.0, 35.0, 50.0, 40.0, 60.0, 55.0, 70.0,
                    ],
                },
                StatMetric {
                    label: "Avg. Build Time".into(),
                    value: "45s".into(),
                    change_pct: -5.0,
                    sparkline: vec![
                        50.0, 40.0, 30.0, 45.0, 35.0, 25.0, 40.0, 30.0, 20.0, 35.0, 30.0,
                    ],
                },
                StatMetric {
                    label: "Success Rate".into(),
                    value: "99.9%".into(),
                    change_pct: 0.1,
                    sparkline: vec![
                        20.0, 30.0, 40.0, 35.0, 50.0, 60.0, 55.0, 70.0, 65.0, 80.0, 90.0,
                    ],
                },
            ],
            meters: vec![
                UsageMeter {
                    label: "Bandwidth".into(),
                    used: 80.0,
                    limit: 100.0,
                    unit: "GB".into(),
                },
                UsageMeter {
                    label: "Build Minutes".into(),
                    used: 120.0,
                    limit: 6_000.0,
                    unit: "m".into(),
                },
            ],
        })
    }

    fn team_members(&self) -> anyhow::Result<Vec<TeamMember>> {
        Ok(vec![
            TeamMember {
                name: "John Doe".into(),
                role: "Owner".into(),
                joined: "2d ago".into(),
            },
            TeamMember {
                name: "Alice Smith".into(),
                role: "Developer".into(),
                joined: "2d ago".into(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeploymentStatus;

    #[test]
    fn embedded_deployments_parse_and_keep_source_order() {
        let rows = StaticFixtures.list_deployments().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].id, "d-10f9a2");
        assert_eq!(rows[1].status, DeploymentStatus::Building);
        assert_eq!(rows[3].branch, "feat/auth");
    }

    #[test]
    fn usage_meters_stay_within_their_limits() {
        let usage = StaticFixtures.usage_metrics().unwrap();
        assert_eq!(usage.stats.len(), 3);
        for m in &usage.meters {
            assert!(m.used <= m.limit, "{} overflows its limit", m.label);
        }
    }
}
