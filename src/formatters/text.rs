use crate::formatters::RecordFormatter;
use crate::record::LogRecord;

/// Plain text report line: `[<count> | ][<date>] <level>: <message>: <value> <file> <line> `
pub struct TextFormatter {
    show_counts: bool,
}

impl TextFormatter {
    pub fn new(show_counts: bool) -> Self {
        Self { show_counts }
    }
}

impl RecordFormatter for TextFormatter {
    fn format_record(&self, record: &LogRecord) -> String {
        let fields = record.render_fields();
        match record.duplicate_count {
            Some(count) if self.show_counts => format!("{} | {}", count, fields),
            _ => fields,
        }
    }
}
