/// Background preloading of variant frames
///
/// Every time the full list of wanted URLs is observed, the scheduler works
/// out which URLs are new since the previous observation and have never been
/// requested. Those are handed out once, together with the delay to wait
/// before fetching them, so the frames on screen load first.

use std::collections::HashSet;
use std::time::Duration;

/// Delay before preloading starts
pub const DEFAULT_PRELOAD_DELAY: Duration = Duration::from_millis(1000);

/// A batch of URLs due for preloading after `delay`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadBatch {
    pub urls: Vec<String>,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct PreloadScheduler {
    delay: Duration,
    /// List seen on the previous observation
    previous: Option<Vec<String>>,
    /// Every URL ever handed out; only grows
    requested: HashSet<String>,
}

impl PreloadScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            previous: None,
            requested: HashSet::new(),
        }
    }

    /// URLs present in `urls` but not in the previous observation
    /// and never requested before. Order follows `urls`.
    pub fn increment(&mut self, urls: &[String]) -> Vec<String> {
        let previous: HashSet<&str> = self
            .previous
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();

        let mut fresh = Vec::new();
        for url in urls {
            if previous.contains(url.as_str()) {
                continue;
            }
            // `insert` also dedupes repeats within this list
            if self.requested.insert(url.clone()) {
                fresh.push(url.clone());
            }
        }

        self.previous = Some(urls.to_vec());
        fresh
    }

    /// Observe the full URL list and return the batch to fire, if any
    pub fn observe(&mut self, urls: &[String]) -> Option<PreloadBatch> {
        if self.previous.as_deref() == Some(urls) {
            return None;
        }

        let urls = self.increment(urls);
        if urls.is_empty() {
            return None;
        }

        log::info!("🗂️  Scheduling preload of {} frames in {:?}", urls.len(), self.delay);
        Some(PreloadBatch {
            urls,
            delay: self.delay,
        })
    }

    pub fn requested_count(&self) -> usize {
        self.requested.len()
    }
}

/// Wait out the batch delay, then hand the URLs back for fetching
pub async fn wait_for(batch: PreloadBatch) -> Vec<String> {
    tokio::time::sleep(batch.delay).await;
    batch.urls
}
