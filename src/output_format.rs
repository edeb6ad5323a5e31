use crate::formatters::jsonl::JsonlFormatter;
use crate::formatters::text::TextFormatter;
use crate::formatters::RecordFormatter;
use crate::record::LogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(name = "text", help = "Human readable report lines")]
    Text,
    #[value(name = "jsonl", help = "JSON Lines format (one JSON object per record)")]
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

pub struct OutputFormatter {
    formatter: Box<dyn RecordFormatter + Send + Sync>,
}

impl OutputFormatter {
    /// `show_counts` adds each record's occurrence count, when it has one
    pub fn new(format: OutputFormat, show_counts: bool) -> Self {
        let formatter: Box<dyn RecordFormatter + Send + Sync> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(show_counts)),
            OutputFormat::Jsonl => Box::new(JsonlFormatter::new(show_counts)),
        };
        OutputFormatter { formatter }
    }

    pub fn format_records(&self, records: &[LogRecord]) -> Vec<String> {
        records
            .iter()
            .map(|record| self.formatter.format_record(record))
            .collect()
    }
}
