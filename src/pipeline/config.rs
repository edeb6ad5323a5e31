use crate::output_format::OutputFormat;
use crate::tags::TagSelector;

pub const COUNT_UNIQ_WITHOUT_UNIQ: &str =
    "--count-uniq is set without --uniq; ignoring --count-uniq";

/// Configuration for pipeline behavior
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub selector: TagSelector,
    /// Sort records by their rendered fields before deduplication
    pub sort: bool,
    /// Collapse adjacent duplicate records
    pub uniq: bool,
    /// Prefix each record with its occurrence count and order by it
    pub count_uniq: bool,
    pub replace_spaces: Option<char>,
    pub output_format: OutputFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            selector: TagSelector::all(),
            sort: false,
            uniq: false,
            count_uniq: false,
            replace_spaces: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl PipelineConfig {
    /// Disable options that depend on a missing one. Returns one warning per
    /// adjustment; none of them stop processing.
    pub fn validate(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.count_uniq && !self.uniq {
            self.count_uniq = false;
            warnings.push(COUNT_UNIQ_WITHOUT_UNIQ.to_string());
        }

        warnings
    }
}
