use serde::Serialize;

use crate::formatters::RecordFormatter;
use crate::record::LogRecord;

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(flatten)]
    record: &'a LogRecord,
}

/// One JSON object per record; absent fields are left out
pub struct JsonlFormatter {
    show_counts: bool,
}

impl JsonlFormatter {
    pub fn new(show_counts: bool) -> Self {
        Self { show_counts }
    }
}

impl RecordFormatter for JsonlFormatter {
    fn format_record(&self, record: &LogRecord) -> String {
        let json = JsonRecord {
            count: record.duplicate_count.filter(|_| self.show_counts),
            record,
        };
        serde_json::to_string(&json).unwrap_or_else(|_| "null".to_string())
    }
}
