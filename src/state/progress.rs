/// Load progress of the active frame set
///
/// Lives in the application state and is only mutated from `update`, which
/// iced runs one message at a time, so completions are never lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadProgress {
    loaded: usize,
    total: usize,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self { loaded: 0, total }
    }

    /// Start counting again against a new frame set
    pub fn reset(&mut self, total: usize) {
        self.loaded = 0;
        self.total = total;
    }

    /// Count one more loaded frame. Never exceeds the total.
    pub fn record_loaded(&mut self) {
        if self.loaded < self.total {
            self.loaded += 1;
        }
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// True once every frame has loaded (or there is nothing to load)
    pub fn is_complete(&self) -> bool {
        self.loaded == self.total
    }

    /// Fraction in `[0, 1]`; 0 when the total is 0
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.loaded as f32 / self.total as f32
    }

    /// Width of the progress bar in percent, or None when it is hidden
    pub fn bar_percent(&self) -> Option<f32> {
        if self.is_complete() {
            None
        } else {
            Some(self.fraction() * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_only_when_complete() {
        let mut progress = LoadProgress::new(4);
        for expected in [0.0, 25.0, 50.0, 75.0] {
            assert_eq!(progress.bar_percent(), Some(expected));
            progress.record_loaded();
        }
        assert!(progress.is_complete());
        assert_eq!(progress.bar_percent(), None);
    }

    #[test]
    fn test_empty_total_is_hidden() {
        let progress = LoadProgress::new(0);
        assert!(progress.is_complete());
        assert_eq!(progress.fraction(), 0.0);
        assert_eq!(progress.bar_percent(), None);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut progress = LoadProgress::new(2);
        progress.record_loaded();
        progress.record_loaded();
        assert!(progress.is_complete());

        progress.reset(32);
        assert_eq!(progress.loaded(), 0);
        assert_eq!(progress.total(), 32);
        assert_eq!(progress.bar_percent(), Some(0.0));
    }

    #[test]
    fn test_burst_of_completions_all_counted() {
        let mut progress = LoadProgress::new(32);
        for _ in 0..32 {
            progress.record_loaded();
        }
        assert_eq!(progress.loaded(), 32);

        // Extra completions cannot push past the total
        progress.record_loaded();
        assert_eq!(progress.loaded(), 32);
    }
}
