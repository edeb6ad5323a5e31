pub mod config;
pub mod context;
pub mod dedup;
pub mod sort;
pub mod stream;

pub use config::PipelineConfig;
pub use context::{ProcessingStats, RunReport};
pub use dedup::{dedupe, Deduplicator};
pub use sort::{sort_by_count, sort_by_fields, CountSorter, FieldSorter};
pub use stream::{ErrorLogPipeline, RecordStage};
