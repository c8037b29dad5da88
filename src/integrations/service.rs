use super::store::KeyStore;
use crate::config::ClientConfig;
use crate::error::StoreError;
use crate::types::Platform;
use rand_core::{OsRng, RngCore};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const MIN_DOCUMENTS: u32 = 3;
const MAX_DOCUMENTS: u32 = 22;
const MIN_CHUNK_FACTOR: u32 = 2;
const MAX_CHUNK_FACTOR: u32 = 6;
const SYNC_HARDWARE: &str = "NPU";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrationAuthResponse {
    pub status: String,
    pub platform: Platform,
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncResponse {
    pub status: String,
    pub platform: Platform,
    pub documents_ingested: u32,
    pub chunks_created: u32,
    pub hardware: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationStatusEntry {
    pub platform: Platform,
    pub connected: bool,
    pub last_synced: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct Delays {
    key_save: Duration,
    sync_min: Duration,
    sync_jitter: Duration,
}

/// Client-side stand-in for the integration endpoints.
///
/// Keys are kept in a [`KeyStore`]; syncing never leaves the process and
/// reports fabricated document and chunk counts after an artificial delay.
pub struct IntegrationService {
    store: Arc<dyn KeyStore>,
    rng: Mutex<Box<dyn RngCore + Send>>,
    delays: Delays,
}

impl IntegrationService {
    pub fn new(config: &ClientConfig, store: Arc<dyn KeyStore>) -> Self {
        Self::with_rng(config, store, Box::new(OsRng))
    }

    pub fn with_rng(
        config: &ClientConfig,
        store: Arc<dyn KeyStore>,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
            delays: Delays {
                key_save: config.key_save_delay,
                sync_min: config.sync_delay_min,
                sync_jitter: config.sync_delay_jitter,
            },
        }
    }

    pub async fn save_integration_key(
        &self,
        platform: Platform,
        key: &str,
    ) -> Result<IntegrationAuthResponse, StoreError> {
        pause(self.delays.key_save).await;

        let mut stored = self.store.load();
        stored.insert(platform.id().to_string(), key.to_string());
        self.store.save(&stored)?;
        tracing::info!(%platform, "integration key saved");

        Ok(IntegrationAuthResponse {
            status: "success".to_string(),
            platform,
            connected: true,
        })
    }

    pub async fn trigger_sync(&self, platform: Platform) -> SyncResponse {
        let jitter_ms = u64::try_from(self.delays.sync_jitter.as_millis()).unwrap_or(u64::MAX);
        let (jitter, documents, factor) = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            (
                Duration::from_millis(below(&mut **rng, jitter_ms)),
                pick(&mut **rng, MIN_DOCUMENTS, MAX_DOCUMENTS),
                pick(&mut **rng, MIN_CHUNK_FACTOR, MAX_CHUNK_FACTOR),
            )
        };
        pause(self.delays.sync_min + jitter).await;

        tracing::info!(%platform, documents, factor, "simulated sync finished");
        SyncResponse {
            status: "success".to_string(),
            platform,
            documents_ingested: documents,
            chunks_created: documents * factor,
            hardware: SYNC_HARDWARE.to_string(),
        }
    }

    pub fn integration_statuses(&self) -> Vec<IntegrationStatusEntry> {
        let stored = self.store.load();
        Platform::ALL
            .into_iter()
            .map(|platform| {
                let connected = stored
                    .get(platform.id())
                    .is_some_and(|key| !key.is_empty());
                IntegrationStatusEntry {
                    platform,
                    connected,
                    last_synced: connected.then(|| "Just now".to_string()),
                }
            })
            .collect()
    }
}

/// Uniform pick in `low..=high`.
fn pick(rng: &mut dyn RngCore, low: u32, high: u32) -> u32 {
    let span = u64::from(high - low) + 1;
    low + (u64::from(rng.next_u32()) % span) as u32
}

/// Uniform pick in `0..bound`, or zero when `bound` is zero. Always draws once.
fn below(rng: &mut dyn RngCore, bound: u64) -> u64 {
    rng.next_u64() % bound.max(1)
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::MemoryKeyStore;

    /// Deterministic source returning a fixed sequence.
    struct SequenceRng {
        values: Vec<u32>,
        next: usize,
    }

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand_core::impls::fill_bytes_via_next(self, dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn instant_config() -> ClientConfig {
        ClientConfig {
            key_save_delay: Duration::ZERO,
            sync_delay_min: Duration::ZERO,
            sync_delay_jitter: Duration::ZERO,
            ..ClientConfig::default()
        }
    }

    #[test]
    fn pick_stays_in_range() {
        let mut rng = SequenceRng {
            values: vec![0, 1, 19, 20, u32::MAX],
            next: 0,
        };
        for _ in 0..5 {
            let value = pick(&mut rng, MIN_DOCUMENTS, MAX_DOCUMENTS);
            assert!((MIN_DOCUMENTS..=MAX_DOCUMENTS).contains(&value));
        }
    }

    #[test]
    fn pick_handles_full_u32_span() {
        let mut rng = SequenceRng {
            values: vec![u32::MAX],
            next: 0,
        };
        assert_eq!(pick(&mut rng, 0, u32::MAX), u32::MAX);
    }

    #[test]
    fn jitter_stays_below_bound() {
        let mut rng = SequenceRng {
            values: vec![1499, 1500, 0],
            next: 0,
        };
        assert_eq!(below(&mut rng, 1500), 1499);
        assert_eq!(below(&mut rng, 1500), 0);
        assert_eq!(below(&mut rng, 0), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn sync_finishes_before_min_plus_jitter() {
        let config = ClientConfig {
            sync_delay_min: Duration::from_secs(2),
            sync_delay_jitter: Duration::from_millis(1500),
            ..ClientConfig::default()
        };
        let rng = SequenceRng {
            values: vec![u32::MAX, 0, 0],
            next: 0,
        };
        let service =
            IntegrationService::with_rng(&config, Arc::new(MemoryKeyStore::new()), Box::new(rng));
        let started = tokio::time::Instant::now();
        service.trigger_sync(Platform::GitHub).await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(2));
        assert!(elapsed < Duration::from_millis(3500));
    }

    #[tokio::test]
    async fn sync_counts_follow_formula() {
        // jitter draw, documents draw (3 + 7), factor draw (2 + 3)
        let rng = SequenceRng {
            values: vec![0, 7, 3],
            next: 0,
        };
        let service = IntegrationService::with_rng(
            &instant_config(),
            Arc::new(MemoryKeyStore::new()),
            Box::new(rng),
        );
        let result = service.trigger_sync(Platform::Notion).await;
        assert_eq!(result.documents_ingested, 10);
        assert_eq!(result.chunks_created, 50);
        assert_eq!(result.hardware, "NPU");
        assert_eq!(result.platform, Platform::Notion);
    }

    #[tokio::test]
    async fn random_syncs_stay_within_bounds() {
        let service =
            IntegrationService::new(&instant_config(), Arc::new(MemoryKeyStore::new()));
        for _ in 0..200 {
            let result = service.trigger_sync(Platform::Jira).await;
            let docs = result.documents_ingested;
            assert!((MIN_DOCUMENTS..=MAX_DOCUMENTS).contains(&docs));
            assert_eq!(result.chunks_created % docs, 0);
            let factor = result.chunks_created / docs;
            assert!((MIN_CHUNK_FACTOR..=MAX_CHUNK_FACTOR).contains(&factor));
        }
    }

    #[tokio::test]
    async fn saved_key_marks_platform_connected() {
        let service =
            IntegrationService::new(&instant_config(), Arc::new(MemoryKeyStore::new()));
        let response = service
            .save_integration_key(Platform::Slack, "xoxb-1")
            .await
            .unwrap();
        assert!(response.connected);
        assert_eq!(response.status, "success");

        let statuses = service.integration_statuses();
        let slack = statuses
            .iter()
            .find(|entry| entry.platform == Platform::Slack)
            .unwrap();
        assert!(slack.connected);
        assert_eq!(slack.last_synced.as_deref(), Some("Just now"));
        assert!(
            statuses
                .iter()
                .filter(|entry| entry.platform != Platform::Slack)
                .all(|entry| !entry.connected && entry.last_synced.is_none())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn key_save_waits_for_simulated_latency() {
        let service =
            IntegrationService::new(&ClientConfig::default(), Arc::new(MemoryKeyStore::new()));
        let started = tokio::time::Instant::now();
        service
            .save_integration_key(Platform::GitHub, "ghp_x")
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1200));
    }

    #[test]
    fn statuses_keep_fixed_platform_order() {
        let service =
            IntegrationService::new(&instant_config(), Arc::new(MemoryKeyStore::new()));
        let order: Vec<_> = service
            .integration_statuses()
            .into_iter()
            .map(|entry| entry.platform)
            .collect();
        assert_eq!(order, Platform::ALL.to_vec());
    }
}
