/// Frame image loader
///
/// Downloads one frame from the image endpoint and decodes it into RGBA
/// pixels ready for an iced image handle. Network and decode work both run
/// on tokio's blocking pool so the UI never waits on them.

use image::imageops::FilterType;
use thiserror::Error;
use tokio::task;

/// Longest edge of a decoded frame, in pixels
pub const DEFAULT_MAX_EDGE: u32 = 800;

#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("Failed to read response body: {0}")]
    Read(String),
    #[error("Failed to decode image: {0}")]
    Decode(String),
    #[error("Task join error: {0}")]
    Join(String),
}

/// A decoded frame in RGBA8
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Download and decode a frame
///
/// # Arguments
/// * `url` - Frame URL
/// * `max_edge` - Frames larger than this on either side are scaled down
pub async fn fetch_frame(url: String, max_edge: u32) -> Result<DecodedFrame, FetchError> {
    task::spawn_blocking(move || fetch_frame_blocking(&url, max_edge))
        .await
        .map_err(|e| FetchError::Join(e.to_string()))?
}

/// Blocking implementation of the download
fn fetch_frame_blocking(url: &str, max_edge: u32) -> Result<DecodedFrame, FetchError> {
    let mut response = ureq::get(url)
        .call()
        .map_err(|e| FetchError::Http(e.to_string()))?;

    let bytes = response
        .body_mut()
        .read_to_vec()
        .map_err(|e| FetchError::Read(e.to_string()))?;

    log::debug!("📥 Downloaded {}KB from {}", bytes.len() / 1024, url);

    decode_frame(&bytes, max_edge)
}

/// Decode encoded image bytes, downscaling to fit `max_edge`
pub fn decode_frame(bytes: &[u8], max_edge: u32) -> Result<DecodedFrame, FetchError> {
    let mut img = image::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

    if max_edge > 0 && (img.width() > max_edge || img.height() > max_edge) {
        img = img.resize(max_edge, max_edge, FilterType::Lanczos3);
    }

    let rgba = img.to_rgba8();
    Ok(DecodedFrame {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
