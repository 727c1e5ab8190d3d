/// State management module
///
/// This module handles all viewer state, including:
/// - The variant catalog and frame sets (catalog.rs)
/// - Drag-to-rotate gestures (rotation.rs)
/// - Load progress of the visible variant (progress.rs)
/// - Background preloading of the other variants (preload.rs)
/// - Decoded frames kept in memory (cache.rs)

pub mod cache;
pub mod catalog;
pub mod preload;
pub mod progress;
pub mod rotation;
