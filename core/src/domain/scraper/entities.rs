use std::sync::{
    Arc,
    atomic::{AtomicU8, AtomicU64, Ordering},
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Total number of images the scraper aims for across all categories.
pub const TARGET_IMAGES: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeState {
    Idle,
    Running,
    Completed,
}

impl ScrapeState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => ScrapeState::Running,
            2 => ScrapeState::Completed,
            _ => ScrapeState::Idle,
        }
    }
}

/// Shared scraper progress: the downloaded-image counter and the run state.
///
/// Clones share the same counters. Workers only ever add to the counter, so
/// readers may observe a slightly stale value but never a torn one.
#[derive(Debug, Clone, Default)]
pub struct ScrapeProgress {
    scraped_images: Arc<AtomicU64>,
    state: Arc<AtomicU8>,
}

impl ScrapeProgress {
    pub fn scraped_images(&self) -> u64 {
        self.scraped_images.load(Ordering::Relaxed)
    }

    /// Counts one successful download and returns the new total.
    pub fn record_download(&self) -> u64 {
        self.scraped_images.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn state(&self) -> ScrapeState {
        ScrapeState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Moves from `Idle` to `Running`. Returns false if a run already started.
    pub fn try_start(&self) -> bool {
        self.state
            .compare_exchange(
                ScrapeState::Idle as u8,
                ScrapeState::Running as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    pub fn finish(&self) {
        self.state
            .store(ScrapeState::Completed as u8, Ordering::Release);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DatasetStatus {
    pub total_categories: usize,
    pub scraped_images: u64,
    pub target_images: u64,
    /// Share of [`TARGET_IMAGES`] downloaded so far, in percent, two decimals.
    pub progress_percentage: f64,
    pub status: ScrapeState,
}

impl DatasetStatus {
    pub fn new(total_categories: usize, scraped_images: u64, status: ScrapeState) -> Self {
        let percentage = scraped_images as f64 / TARGET_IMAGES as f64 * 100.0;

        Self {
            total_categories,
            scraped_images,
            target_images: TARGET_IMAGES,
            progress_percentage: (percentage * 100.0).round() / 100.0,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_percentage_is_rounded_to_two_decimals() {
        assert_eq!(DatasetStatus::new(611, 2_500, ScrapeState::Running).progress_percentage, 0.25);
        assert_eq!(DatasetStatus::new(611, 12_340, ScrapeState::Running).progress_percentage, 1.23);
        assert_eq!(DatasetStatus::new(611, 0, ScrapeState::Idle).progress_percentage, 0.0);
    }

    #[test]
    fn clones_share_the_counter() {
        let progress = ScrapeProgress::default();
        let worker = progress.clone();

        assert_eq!(worker.record_download(), 1);
        assert_eq!(worker.record_download(), 2);
        assert_eq!(progress.scraped_images(), 2);
    }

    #[test]
    fn run_state_only_starts_once() {
        let progress = ScrapeProgress::default();
        assert_eq!(progress.state(), ScrapeState::Idle);

        assert!(progress.try_start());
        assert!(!progress.try_start());
        assert_eq!(progress.state(), ScrapeState::Running);

        progress.finish();
        assert!(!progress.try_start());
        assert_eq!(progress.state(), ScrapeState::Completed);
    }

    #[test]
    fn concurrent_increments_are_all_counted() {
        let progress = ScrapeProgress::default();
        let handles: Vec<_> = (0..5)
            .map(|_| {
                let progress = progress.clone();
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        progress.record_download();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(progress.scraped_images(), 5_000);
    }
}
