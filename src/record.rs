use serde::Serialize;

/// Error portion of a log line. `None` means the sub-field was not selected,
/// `Some("")` means it was selected but the line had no match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// File portion of a log line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

/// Fields extracted from one error-log line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileFields>,
    /// Number of adjacent equal records collapsed into this one
    #[serde(skip)]
    pub duplicate_count: Option<usize>,
}

impl LogRecord {
    /// Equality over the extracted fields only, ignoring `duplicate_count`
    pub fn same_fields(&self, other: &LogRecord) -> bool {
        self.date == other.date && self.error == other.error && self.file == other.file
    }

    /// Render the extracted fields in their fixed order. Every present part
    /// keeps its trailing separator; absent parts contribute nothing.
    pub fn render_fields(&self) -> String {
        let mut out = String::new();

        if let Some(date) = &self.date {
            out.push('[');
            out.push_str(date);
            out.push_str("] ");
        }

        if let Some(error) = &self.error {
            if let Some(level) = &error.level {
                out.push_str(level);
                out.push_str(": ");
            }
            if let Some(message) = &error.message {
                out.push_str(message);
                out.push_str(": ");
            }
            if let Some(value) = &error.value {
                out.push_str(value);
                out.push(' ');
            }
        }

        if let Some(file) = &self.file {
            if let Some(name) = &file.name {
                out.push_str(name);
                out.push(' ');
            }
            if let Some(line) = &file.line {
                out.push_str(line);
                out.push(' ');
            }
        }

        out
    }
}
