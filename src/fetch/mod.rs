/// Frame download module
///
/// This module handles:
/// - Downloading frame images from the image endpoint
/// - Decoding and downscaling them off the UI thread

pub mod frame;

pub use frame::{fetch_frame, DecodedFrame, FetchError};
