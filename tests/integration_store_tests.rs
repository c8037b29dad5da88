use std::sync::Arc;
use std::time::Duration;
use synapse::config::ClientConfig;
use synapse::integrations::{FileKeyStore, IntegrationService, KeyStore, STORAGE_KEY};
use synapse::state::{ConnectionStatus, IntegrationsPage};
use synapse::types::Platform;
use tempfile::TempDir;

fn instant_config(dir: &TempDir) -> ClientConfig {
    ClientConfig {
        data_dir: dir.path().to_path_buf(),
        key_save_delay: Duration::ZERO,
        sync_delay_min: Duration::ZERO,
        sync_delay_jitter: Duration::ZERO,
        ..ClientConfig::default()
    }
}

fn service_in(dir: &TempDir) -> IntegrationService {
    let store = Arc::new(FileKeyStore::in_dir(dir.path()));
    IntegrationService::new(&instant_config(dir), store)
}

#[tokio::test]
async fn saved_key_marks_platform_connected() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let response = service
        .save_integration_key(Platform::Notion, "secret_abc")
        .await
        .unwrap();
    assert!(response.connected);
    assert_eq!(response.status, "success");

    let statuses = service.integration_statuses();
    let notion = statuses
        .iter()
        .find(|entry| entry.platform == Platform::Notion)
        .unwrap();
    assert!(notion.connected);
    assert_eq!(notion.last_synced.as_deref(), Some("Just now"));
    assert!(
        statuses
            .iter()
            .filter(|entry| entry.platform != Platform::Notion)
            .all(|entry| !entry.connected)
    );
}

#[tokio::test]
async fn keys_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    service_in(&dir)
        .save_integration_key(Platform::GitHub, "ghp_123")
        .await
        .unwrap();
    service_in(&dir)
        .save_integration_key(Platform::Slack, "xoxb-456")
        .await
        .unwrap();

    let store = FileKeyStore::in_dir(dir.path());
    assert!(store.path().ends_with(format!("{STORAGE_KEY}.json")));
    let keys = store.load();
    assert_eq!(keys.get("github").map(String::as_str), Some("ghp_123"));
    assert_eq!(keys.get("slack").map(String::as_str), Some("xoxb-456"));

    let page = IntegrationsPage::from_statuses(&service_in(&dir).integration_statuses());
    assert_eq!(page.card(Platform::GitHub).status, ConnectionStatus::Connected);
    assert_eq!(page.card(Platform::Jira).status, ConnectionStatus::Disconnected);
}

#[tokio::test]
async fn corrupt_store_starts_empty_and_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyStore::in_dir(dir.path());
    std::fs::write(store.path(), "{ not json").unwrap();

    let service = service_in(&dir);
    assert!(service.integration_statuses().iter().all(|entry| !entry.connected));

    service
        .save_integration_key(Platform::Jira, "jira-token")
        .await
        .unwrap();
    assert_eq!(store.load().len(), 1);
}

#[tokio::test]
async fn sync_reports_counts_within_bounds() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir);

    let sync = service.trigger_sync(Platform::Slack).await;
    assert_eq!(sync.platform, Platform::Slack);
    assert_eq!(sync.hardware, "NPU");
    assert!((3..=22).contains(&sync.documents_ingested));
    assert_eq!(sync.chunks_created % sync.documents_ingested, 0);
    let factor = sync.chunks_created / sync.documents_ingested;
    assert!((2..=6).contains(&factor));
}
