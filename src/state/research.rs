use std::time::Duration;

/// How long the simulated research run takes.
pub const SEARCH_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicSource {
    Web,
    Doc,
}

impl TopicSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web Search",
            Self::Doc => "Doc Search",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecentTopic {
    pub title: &'static str,
    pub source: TopicSource,
    pub when: &'static str,
}

pub const RECENT_TOPICS: &[RecentTopic] = &[
    RecentTopic {
        title: "React Server Components architecture",
        source: TopicSource::Web,
        when: "2 hours ago",
    },
    RecentTopic {
        title: "Local LLM Fine-tuning guide",
        source: TopicSource::Doc,
        when: "Yesterday",
    },
    RecentTopic {
        title: "Notion UI Design System",
        source: TopicSource::Web,
        when: "Yesterday",
    },
];

/// Deep-research search box. Searching is simulated; nothing is sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResearchState {
    pub query: String,
    is_searching: bool,
}

impl ResearchState {
    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn can_submit(&self) -> bool {
        !self.is_searching && !self.query.trim().is_empty()
    }

    /// Start a search for the current query. Returns the trimmed query, or
    /// `None` when it is blank or a search is already running.
    pub fn begin_search(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.is_searching = true;
        let query = self.query.trim().to_string();
        tracing::info!(%query, "research started");
        Some(query)
    }

    /// End the running search and clear the box.
    pub fn finish_search(&mut self) {
        if self.is_searching {
            self.is_searching = false;
            self.query.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_does_not_search() {
        let mut state = ResearchState {
            query: "   ".into(),
            ..ResearchState::default()
        };
        assert!(state.begin_search().is_none());
        assert!(!state.is_searching());
    }

    #[test]
    fn search_runs_once_then_clears_query() {
        let mut state = ResearchState {
            query: " rust async runtimes ".into(),
            ..ResearchState::default()
        };
        assert_eq!(state.begin_search().as_deref(), Some("rust async runtimes"));
        assert!(state.is_searching());
        assert!(!state.can_submit());
        assert!(state.begin_search().is_none());

        state.finish_search();
        assert!(!state.is_searching());
        assert!(state.query.is_empty());
    }

    #[test]
    fn finishing_without_search_keeps_query() {
        let mut state = ResearchState {
            query: "draft".into(),
            ..ResearchState::default()
        };
        state.finish_search();
        assert_eq!(state.query, "draft");
    }

    #[test]
    fn recent_topics_label_their_source() {
        assert_eq!(RECENT_TOPICS.len(), 3);
        assert_eq!(RECENT_TOPICS[1].source.label(), "Doc Search");
    }
}
