use std::time::Duration;

/// Runtime statistics
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProcessingStats {
    pub lines_processed: usize,
    pub records_output: usize,
    pub duplicates_collapsed: usize,
    pub processing_time: Duration,
}

/// Everything one pipeline run hands back to its caller
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    /// Formatted output, one entry per record, without line terminators
    pub lines: Vec<String>,
    /// Non-fatal configuration problems noticed before processing
    pub warnings: Vec<String>,
    pub stats: ProcessingStats,
}
