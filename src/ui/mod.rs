/// UI widgets
///
/// - `spinner.rs` - input and progress layer over the current frame
/// - `swatches.rs` - variant picker

pub mod spinner;
pub mod swatches;
