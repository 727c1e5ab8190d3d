/// Variant catalog and frame sets
///
/// A variant is one selectable fabric/color of the product. Every variant
/// owns a full rotation of pre-rendered frames served by the image endpoint.

use serde::{Deserialize, Serialize};

/// Number of frames in one full rotation
pub const NUM_FRAMES: usize = 32;

/// Image endpoint serving the product frames
pub const DEFAULT_BASE_URL: &str = "https://content.cylindo.com/api/v2/4404/products";

/// Product identifier used by the image endpoint
pub const DEFAULT_PRODUCT_ID: &str = "ARCHIBALDCHAIR";

/// A selectable product configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Display name (e.g., "Azul")
    pub name: String,
    /// Feature code understood by the image endpoint (e.g., "3:AZUL")
    pub features: String,
    /// Swatch color as a hex string (e.g., "#2F7A76")
    pub color: String,
}

impl Variant {
    pub fn new(name: &str, features: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            features: features.to_string(),
            color: color.to_string(),
        }
    }

    /// Parse the swatch color into RGB components
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`. Returns None for anything else.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

/// The fabric catalog shipped with the viewer
pub fn default_variants() -> Vec<Variant> {
    vec![
        Variant::new("Azul", "3:AZUL", "#2F7A76"),
        Variant::new("Diaspro", "3:Diaspro", "#D9541B"),
        Variant::new("Fango", "3:Fango", "#2F271A"),
        Variant::new("Zolfo", "3:Zolfo", "#898227"),
    ]
}

/// Where frame images come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSource {
    pub base_url: String,
    pub product_id: String,
    pub frame_count: usize,
}

impl FrameSource {
    /// URL of one frame. `frame_number` is 1-based.
    pub fn frame_url(&self, frame_number: usize, features: &str) -> String {
        format!(
            "{}/{}/frames/{}?feature={}",
            self.base_url.trim_end_matches('/'),
            self.product_id,
            frame_number,
            features
        )
    }

    /// Build the frame set of a single variant
    pub fn frame_set(&self, variant: &Variant) -> FrameSet {
        let urls = (1..=self.frame_count)
            .map(|frame_number| self.frame_url(frame_number, &variant.features))
            .collect();
        FrameSet { urls }
    }

    /// Every frame URL of every variant, in catalog order then frame order
    pub fn all_urls(&self, variants: &[Variant]) -> Vec<String> {
        variants
            .iter()
            .flat_map(|variant| self.frame_set(variant).urls)
            .collect()
    }
}

/// One full rotation of a variant
///
/// Immutable once built; a new one is built whenever the variant changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameSet {
    urls: Vec<String>,
}

impl FrameSet {
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn url(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }
}
