use std::sync::Mutex;
use std::time::Duration;

use checker_logging::check_debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{EntryId, Verdict, VerdictStatus};

#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Simulated per-URL round-trip latency.
    pub latency: Duration,
    /// Draws strictly above this resolve `Indexed`.
    pub indexed_threshold: f64,
    /// Draws at or below this resolve `Error`; between the thresholds,
    /// `NotIndexed`.
    pub error_threshold: f64,
    /// Fixed RNG seed for reproducible demo runs.
    pub seed: Option<u64>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(800),
            indexed_threshold: 0.7,
            error_threshold: 0.3,
            seed: None,
        }
    }
}

/// The outcome-resolver seam: given a URL, asynchronously produce a terminal
/// verdict. Infallible by contract; `Error` is a verdict, not a failure.
#[async_trait::async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, entry_id: EntryId, url: &str) -> Verdict;
}

/// Demo stand-in for a real index lookup: a fixed sleep followed by a
/// uniform draw over the configured tri-partition.
pub struct SimulatedResolver {
    settings: ResolverSettings,
    rng: Mutex<SmallRng>,
}

impl SimulatedResolver {
    pub fn new(settings: ResolverSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            settings,
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait::async_trait]
impl Resolver for SimulatedResolver {
    async fn resolve(&self, entry_id: EntryId, url: &str) -> Verdict {
        tokio::time::sleep(self.settings.latency).await;

        let draw: f64 = self.rng.lock().expect("rng lock").gen();
        let status = partition_verdict(draw, &self.settings);
        check_debug!(
            "entry {} url={} draw={:.3} verdict={}",
            entry_id,
            url,
            draw,
            status
        );

        let title = match status {
            VerdictStatus::Indexed => Some(synthetic_title(entry_id)),
            _ => None,
        };
        Verdict { status, title }
    }
}

/// Maps a uniform draw in [0, 1) onto the terminal tri-state.
pub fn partition_verdict(draw: f64, settings: &ResolverSettings) -> VerdictStatus {
    if draw > settings.indexed_threshold {
        VerdictStatus::Indexed
    } else if draw > settings.error_threshold {
        VerdictStatus::NotIndexed
    } else {
        VerdictStatus::Error
    }
}

/// Placeholder title derived from the entry's position in the batch.
pub fn synthetic_title(entry_id: EntryId) -> String {
    format!("Page {entry_id}")
}
