// src/pipeline/stream.rs
use std::io::{BufRead, Write};
use std::time::Instant;

use tracing::debug;

use crate::error::ProcessingError;
use crate::input::read_lines;
use crate::output_format::OutputFormatter;
use crate::pattern_extraction::FieldExtractor;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::context::{ProcessingStats, RunReport};
use crate::pipeline::dedup::Deduplicator;
use crate::pipeline::sort::{CountSorter, FieldSorter};
use crate::record::LogRecord;

/// One step over the whole record sequence
pub trait RecordStage: Send + Sync {
    fn apply(&self, records: Vec<LogRecord>) -> Vec<LogRecord>;
    fn name(&self) -> &str;
}

/// Extracts, reorders, collapses and formats error-log lines.
///
/// Holds no per-run state, so `process` can be called any number of times.
pub struct ErrorLogPipeline {
    extractor: FieldExtractor,
    stages: Vec<Box<dyn RecordStage>>,
    formatter: OutputFormatter,
    warnings: Vec<String>,
}

impl ErrorLogPipeline {
    pub fn new(mut config: PipelineConfig) -> Self {
        let warnings = config.validate();

        let extractor = FieldExtractor::new(config.selector.clone())
            .with_space_replacement(config.replace_spaces);

        let mut stages: Vec<Box<dyn RecordStage>> = Vec::new();
        if config.sort {
            stages.push(Box::new(FieldSorter));
        }
        if config.uniq {
            stages.push(Box::new(Deduplicator));
            if config.count_uniq {
                stages.push(Box::new(CountSorter));
            }
        }

        ErrorLogPipeline {
            extractor,
            stages,
            formatter: OutputFormatter::new(config.output_format, config.count_uniq),
            warnings,
        }
    }

    /// Warnings raised while validating the configuration
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Turn raw lines into records and run every configured stage over them
    pub fn records<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LogRecord> {
        debug!(lines = lines.len(), "parsing log data");
        let mut records = self.extractor.extract_all(lines);

        for stage in &self.stages {
            let before = records.len();
            records = stage.apply(records);
            debug!(stage = stage.name(), before, after = records.len(), "applied stage");
        }

        records
    }

    /// Run the whole pipeline over an in-memory set of lines
    pub fn process<S: AsRef<str>>(&self, lines: &[S]) -> RunReport {
        let start_time = Instant::now();

        let records = self.records(lines);
        let output = self.formatter.format_records(&records);

        let stats = ProcessingStats {
            lines_processed: lines.len(),
            records_output: output.len(),
            duplicates_collapsed: lines.len() - records.len(),
            processing_time: start_time.elapsed(),
        };

        RunReport {
            lines: output,
            warnings: self.warnings.clone(),
            stats,
        }
    }

    /// Read the complete input, process it and write one line per record.
    /// Empty input is a fatal error and produces no output.
    pub fn process_stream<R: BufRead, W: Write>(
        &self,
        input: R,
        output: &mut W,
    ) -> Result<RunReport, ProcessingError> {
        let lines = read_lines(input, None)?;
        let report = self.process(&lines);

        for line in &report.lines {
            writeln!(output, "{}", line)?;
        }

        Ok(report)
    }
}
