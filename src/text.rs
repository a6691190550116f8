/// Measurement memoization and word/punctuation width helpers.
pub mod cache;
/// Text metrics and the font-engine seam.
pub mod metrics;

pub use cache::{MeasureCache, WordMeasure};
pub use metrics::{TextMeasurer, TextMetrics};
