use crate::integrations::{IntegrationStatusEntry, SyncResponse};
use crate::types::Platform;
use std::collections::BTreeMap;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const LOG_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:24 padding:zero]:[minute padding:zero]:[second padding:zero]");
const SYNCED_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

pub const SYSTEM_SOURCE: &str = "System";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
    Syncing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SyncLogEntry {
    pub id: String,
    pub timestamp: String,
    pub source: String,
    pub message: String,
    pub kind: LogKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformCard {
    pub status: ConnectionStatus,
    pub enabled: bool,
    pub last_synced: Option<String>,
}

impl Default for PlatformCard {
    fn default() -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            enabled: true,
            last_synced: None,
        }
    }
}

/// "Connected Brains" settings page: one card per platform plus the sync log.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationsPage {
    cards: BTreeMap<Platform, PlatformCard>,
    log: Vec<SyncLogEntry>,
}

impl Default for IntegrationsPage {
    fn default() -> Self {
        Self {
            cards: Platform::ALL
                .into_iter()
                .map(|platform| (platform, PlatformCard::default()))
                .collect(),
            log: Vec::new(),
        }
    }
}

impl IntegrationsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed card status from previously stored keys.
    pub fn from_statuses(statuses: &[IntegrationStatusEntry]) -> Self {
        let mut page = Self::default();
        for entry in statuses {
            if entry.connected {
                let card = page.card_mut(entry.platform);
                card.status = ConnectionStatus::Connected;
                card.last_synced = entry.last_synced.clone();
            }
        }
        page
    }

    pub fn card(&self, platform: Platform) -> &PlatformCard {
        // every platform is inserted at construction
        &self.cards[&platform]
    }

    fn card_mut(&mut self, platform: Platform) -> &mut PlatformCard {
        self.cards.entry(platform).or_default()
    }

    pub fn log(&self) -> &[SyncLogEntry] {
        &self.log
    }

    pub fn key_saved(&mut self, platform: Platform, now: OffsetDateTime) {
        self.card_mut(platform).status = ConnectionStatus::Connected;
        self.push_log(
            platform.name(),
            "API key saved. Integration connected.",
            LogKind::Success,
            now,
        );
    }

    /// Mark `platform` as syncing. Returns false when a sync is already running.
    pub fn begin_sync(&mut self, platform: Platform, now: OffsetDateTime) -> bool {
        let card = self.card_mut(platform);
        if card.status == ConnectionStatus::Syncing {
            return false;
        }
        card.status = ConnectionStatus::Syncing;
        self.push_log(platform.name(), "Starting sync...", LogKind::Info, now);
        true
    }

    pub fn finish_sync(
        &mut self,
        platform: Platform,
        result: Result<SyncResponse, String>,
        now: OffsetDateTime,
    ) {
        let card = self.card_mut(platform);
        card.status = ConnectionStatus::Connected;
        match result {
            Ok(sync) => {
                card.last_synced = Some(format_local(now, SYNCED_TIME_FORMAT));
                self.push_log(
                    platform.name(),
                    &format!(
                        "Ingested {} documents → Chunked into {} vectors.",
                        sync.documents_ingested, sync.chunks_created
                    ),
                    LogKind::Success,
                    now,
                );
            }
            Err(err) => {
                tracing::warn!(%platform, error = %err, "integration sync failed");
                self.push_log(
                    platform.name(),
                    "Sync failed. Backend unreachable.",
                    LogKind::Error,
                    now,
                );
            }
        }
    }

    pub fn toggle(&mut self, platform: Platform, enabled: bool, now: OffsetDateTime) {
        self.card_mut(platform).enabled = enabled;
        let verb = if enabled { "enabled" } else { "disabled" };
        self.push_log(
            SYSTEM_SOURCE,
            &format!("{} integration {verb}.", platform.name()),
            LogKind::Info,
            now,
        );
    }

    fn push_log(&mut self, source: &str, message: &str, kind: LogKind, now: OffsetDateTime) {
        self.log.push(SyncLogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: format_local(now, LOG_TIME_FORMAT),
            source: source.to_string(),
            message: message.to_string(),
            kind,
        });
    }
}

fn format_local(datetime: OffsetDateTime, format: &[FormatItem<'static>]) -> String {
    let datetime = match UtcOffset::current_local_offset() {
        Ok(offset) => datetime.to_offset(offset),
        Err(_) => datetime,
    };
    datetime.format(format).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn now() -> OffsetDateTime {
        datetime!(2025-03-14 09:26:53 UTC)
    }

    fn synced(docs: u32, chunks: u32) -> SyncResponse {
        SyncResponse {
            status: "success".into(),
            platform: Platform::GitHub,
            documents_ingested: docs,
            chunks_created: chunks,
            hardware: "NPU".into(),
        }
    }

    #[test]
    fn all_cards_start_disconnected_and_enabled() {
        let page = IntegrationsPage::new();
        for platform in Platform::ALL {
            let card = page.card(platform);
            assert_eq!(card.status, ConnectionStatus::Disconnected);
            assert!(card.enabled);
            assert!(card.last_synced.is_none());
        }
        assert!(page.log().is_empty());
    }

    #[test]
    fn saving_key_connects_and_logs() {
        let mut page = IntegrationsPage::new();
        page.key_saved(Platform::Notion, now());
        assert_eq!(page.card(Platform::Notion).status, ConnectionStatus::Connected);
        let entry = &page.log()[0];
        assert_eq!(entry.source, "Notion");
        assert_eq!(entry.kind, LogKind::Success);
        assert_eq!(entry.timestamp.len(), "09:26:53".len());
    }

    #[test]
    fn sync_round_trip_logs_counts() {
        let mut page = IntegrationsPage::new();
        page.key_saved(Platform::GitHub, now());
        assert!(page.begin_sync(Platform::GitHub, now()));
        assert_eq!(page.card(Platform::GitHub).status, ConnectionStatus::Syncing);
        assert!(!page.begin_sync(Platform::GitHub, now()));

        page.finish_sync(Platform::GitHub, Ok(synced(7, 28)), now());
        let card = page.card(Platform::GitHub);
        assert_eq!(card.status, ConnectionStatus::Connected);
        assert!(card.last_synced.is_some());
        let last = page.log().last().unwrap();
        assert_eq!(
            last.message,
            "Ingested 7 documents → Chunked into 28 vectors."
        );
    }

    #[test]
    fn failed_sync_stays_connected() {
        let mut page = IntegrationsPage::new();
        page.begin_sync(Platform::Jira, now());
        page.finish_sync(Platform::Jira, Err("offline".into()), now());
        assert_eq!(page.card(Platform::Jira).status, ConnectionStatus::Connected);
        assert!(page.card(Platform::Jira).last_synced.is_none());
        assert_eq!(page.log().last().unwrap().kind, LogKind::Error);
    }

    #[test]
    fn toggling_logs_as_system() {
        let mut page = IntegrationsPage::new();
        page.toggle(Platform::Slack, false, now());
        assert!(!page.card(Platform::Slack).enabled);
        let entry = &page.log()[0];
        assert_eq!(entry.source, SYSTEM_SOURCE);
        assert_eq!(entry.message, "Slack integration disabled.");
    }

    #[test]
    fn stored_keys_seed_connected_cards() {
        let statuses = vec![
            IntegrationStatusEntry {
                platform: Platform::GitHub,
                connected: true,
                last_synced: Some("Just now".into()),
            },
            IntegrationStatusEntry {
                platform: Platform::Slack,
                connected: false,
                last_synced: None,
            },
        ];
        let page = IntegrationsPage::from_statuses(&statuses);
        assert_eq!(page.card(Platform::GitHub).status, ConnectionStatus::Connected);
        assert_eq!(
            page.card(Platform::GitHub).last_synced.as_deref(),
            Some("Just now")
        );
        assert_eq!(page.card(Platform::Slack).status, ConnectionStatus::Disconnected);
    }
}
