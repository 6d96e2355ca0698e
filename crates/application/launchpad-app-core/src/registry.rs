use crate::domain::Route;

pub type CommandId = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Navigate(Route),
    /// Cosmetic entry with no wired behavior.
    Nothing,
}

#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    pub id: CommandId,
    pub label: &'static str,
    pub action: CommandAction,
}

/// Fixed ordered list of quick actions exposed through the command palette.
/// Populated once at startup; lookup preserves registration order.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CommandEntry {
                    id: "deployments",
                    label: "Go to Dashboard",
                    action: CommandAction::Navigate(Route::Dashboard),
                },
                CommandEntry {
                    id: "settings",
                    label: "Settings",
                    action: CommandAction::Navigate(Route::Settings),
                },
                CommandEntry {
                    id: "docs",
                    label: "Documentation",
                    action: CommandAction::Nothing,
                },
            ],
        }
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn get(&self, id: CommandId) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Case-insensitive substring filter, registration order preserved.
    /// The empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&CommandEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.label.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_everything_in_registration_order() {
        let reg = CommandRegistry::builtin();
        let all: Vec<_> = reg.search("").iter().map(|e| e.id).collect();
        assert_eq!(all, vec!["deployments", "settings", "docs"]);
    }

    #[test]
    fn search_is_case_insensitive_substring_containment() {
        let reg = CommandRegistry::builtin();
        let hits: Vec<_> = reg.search("SET").iter().map(|e| e.id).collect();
        assert_eq!(hits, vec!["settings"]);

        let hits: Vec<_> = reg.search("o d").iter().map(|e| e.id).collect();
        assert_eq!(hits, vec!["deployments"]);

        assert!(reg.search("zzz").is_empty());
    }
}
