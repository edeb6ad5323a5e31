use crate::record::LogRecord;

/// Trait for formatting records to strings
pub trait RecordFormatter {
    /// Render one record as a single output line, without a line terminator
    fn format_record(&self, record: &LogRecord) -> String;
}

pub mod jsonl;
pub mod text;
