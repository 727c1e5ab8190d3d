use std::collections::{HashMap, HashSet};

use iced::widget::image::Handle;

use crate::fetch::{DecodedFrame, FetchError};

/// In-memory cache of decoded frames, keyed by URL
///
/// Both on-screen loads and background preloads land here, so a variant
/// that was preloaded shows up without another download.
#[derive(Debug, Default)]
pub struct FrameCache {
    frames: HashMap<String, Handle>,
    in_flight: HashSet<String>,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<&Handle> {
        self.frames.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.frames.contains_key(url)
    }

    pub fn is_in_flight(&self, url: &str) -> bool {
        self.in_flight.contains(url)
    }

    /// Claim `url` for fetching
    ///
    /// Returns false when it is already cached or being fetched.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.contains(url) || self.is_in_flight(url) {
            return false;
        }
        self.in_flight.insert(url.to_string())
    }

    /// Settle a fetch. Returns true when the frame is now cached.
    pub fn finish(&mut self, url: &str, result: Result<DecodedFrame, FetchError>) -> bool {
        self.in_flight.remove(url);

        match result {
            Ok(frame) => {
                let handle = Handle::from_rgba(frame.width, frame.height, frame.pixels);
                self.frames.insert(url.to_string(), handle);
                true
            }
            Err(e) => {
                log::debug!("⚠️  Frame failed to load, ignoring: {} ({})", url, e);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }
}
