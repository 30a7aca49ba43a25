// Adaptive text-size fitting.
// Measurement is pluggable (`LayoutMeasurer`); the engine is predicate + binary
// search + length-keyed cache, driven by `FitOrchestrator` triggers.

pub mod cache;
pub mod constraints;
pub mod font_metrics;
pub mod measurer;
pub mod orchestrator;
pub mod predicate;
pub mod search;

// Re-export the public API consumed by hosts and the CLI.
pub use cache::{CacheKeyPolicy, SizeCache};
pub use constraints::{AvailableSpace, Bounds, FitConstraints, LineLimit, Padding};
pub use font_metrics::{FontFamily, TableMeasurer};
pub use measurer::{LayoutMeasurer, LayoutMetrics, LineSpacing};
pub use orchestrator::{FitOrchestrator, FitOutcome, FitSource, SizeSink};
pub use predicate::{FitMode, FitPredicate, FitVerdict};
pub use search::{binary_search, SearchOutcome};
