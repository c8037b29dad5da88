use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub sources: Vec<String>,
    pub hardware_flow: Option<String>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: OffsetDateTime::now_utc(),
            sources: Vec::new(),
            hardware_flow: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Workflow state the backend orchestrator is switched into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrchestratorMode {
    #[default]
    Focus,
    Meeting,
    Research,
}

impl OrchestratorMode {
    pub const ALL: [OrchestratorMode; 3] = [Self::Focus, Self::Meeting, Self::Research];

    /// Name sent to `/set_mode`.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Focus => "FOCUS",
            Self::Meeting => "MEETING",
            Self::Research => "RESEARCH",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.wire_name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Meeting => "Meeting",
            Self::Research => "Research",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Focus => "Silence notifications",
            Self::Meeting => "Open notepad & tools",
            Self::Research => "Open browser & calc",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Focus => "🎯",
            Self::Meeting => "📅",
            Self::Research => "🔍",
        }
    }
}

/// Third-party workspace whose data the backend can ingest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    GitHub,
    Slack,
    Notion,
    Jira,
}

impl Platform {
    pub const ALL: [Platform; 4] = [Self::GitHub, Self::Slack, Self::Notion, Self::Jira];

    /// Key used in the persisted integration map.
    pub fn id(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Slack => "slack",
            Self::Notion => "notion",
            Self::Jira => "jira",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::Slack => "Slack",
            Self::Notion => "Notion",
            Self::Jira => "Jira",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::GitHub => {
                "Sync repositories & pull requests. Ingest code reviews, issues, and commit history into local memory."
            }
            Self::Slack => {
                "Sync saved messages & channel context. Pull important conversations and threads into Synapse's brain."
            }
            Self::Notion => {
                "Sync workspace docs & notes. Ingest pages, databases, and meeting notes for contextual RAG."
            }
            Self::Jira => {
                "Sync active sprint tickets. Pull epics, stories, and bug reports into your local knowledge base."
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_wire_names_round_trip() {
        for mode in OrchestratorMode::ALL {
            assert_eq!(OrchestratorMode::from_wire(mode.wire_name()), Some(mode));
        }
        assert_eq!(
            OrchestratorMode::from_wire("research"),
            Some(OrchestratorMode::Research)
        );
        assert_eq!(OrchestratorMode::from_wire("SLEEP"), None);
    }

    #[test]
    fn platform_serializes_lowercase() {
        let json = serde_json::to_string(&Platform::GitHub).unwrap();
        assert_eq!(json, "\"github\"");
        assert_eq!(Platform::Jira.to_string(), "jira");
    }

    #[test]
    fn new_messages_get_unique_ids() {
        let a = ChatMessage::new(Role::User, "hi");
        let b = ChatMessage::new(Role::User, "hi");
        assert_ne!(a.id, b.id);
        assert!(a.sources.is_empty());
        assert!(a.hardware_flow.is_none());
    }
}
