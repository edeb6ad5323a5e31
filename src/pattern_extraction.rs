use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::{ErrorFields, FileFields, LogRecord};
use crate::tags::{Tag, TagSelector};

// Each rule is a single-capture pattern applied to the whole raw line.
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.*?)\]").expect("valid date regex"));
static ERROR_LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\] (.*?):").expect("valid error-level regex"));
static ERROR_MESSAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":  (.*?) in /").expect("valid error-message regex"));
static ERROR_VALUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r": ([a-zA-Z0-9 _\-]*?) in /").expect("valid error-value regex"));
static FILE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"in (/.*?) on").expect("valid file-name regex"));
static FILE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"on line (\d*?)$").expect("valid file-line regex"));

/// First capture group of `regex` in `line`, or an empty string on a miss
fn capture(regex: &Regex, line: &str) -> String {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Turns raw error-log lines into records holding only the selected fields
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    selector: TagSelector,
    replace_spaces: Option<char>,
}

impl FieldExtractor {
    pub fn new(selector: TagSelector) -> Self {
        FieldExtractor {
            selector,
            replace_spaces: None,
        }
    }

    /// Replace every space in the extracted error message with `replacement`
    pub fn with_space_replacement(mut self, replacement: Option<char>) -> Self {
        self.replace_spaces = replacement;
        self
    }

    pub fn selector(&self) -> &TagSelector {
        &self.selector
    }

    /// Extract a record from one line. Never fails: a selected field that
    /// does not match is present with an empty value.
    pub fn extract(&self, line: &str) -> LogRecord {
        let mut record = LogRecord::default();

        if self.selector.includes_field(Tag::Date) {
            record.date = Some(capture(&DATE_RE, line));
        }

        if self.selector.includes_field(Tag::Error) {
            let message = self.field(Tag::ErrorMessage, &ERROR_MESSAGE_RE, line).map(|message| {
                match self.replace_spaces {
                    Some(replacement) => message.replace(' ', &replacement.to_string()),
                    None => message,
                }
            });
            record.error = Some(ErrorFields {
                level: self.field(Tag::ErrorLevel, &ERROR_LEVEL_RE, line),
                message,
                value: self.field(Tag::ErrorValue, &ERROR_VALUE_RE, line),
            });
        }

        if self.selector.includes_field(Tag::File) {
            record.file = Some(FileFields {
                name: self.field(Tag::FileName, &FILE_NAME_RE, line),
                line: self.field(Tag::FileLine, &FILE_LINE_RE, line),
            });
        }

        record
    }

    fn field(&self, tag: Tag, regex: &Regex, line: &str) -> Option<String> {
        self.selector
            .includes_field(tag)
            .then(|| capture(regex, line))
    }

    pub fn extract_all<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LogRecord> {
        lines.iter().map(|line| self.extract(line.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const NOTICE: &str = "[11-Dec-2019 08:35:11 UTC] PHP Notice:  Undefined variable: foo in /webs/html/pages.inc.php on line 270";
    const WARNING: &str = "[11-Dec-2019 08:36:02 UTC] PHP Warning:  count(): Parameter must be an array or an object that implements Countable in /var/www/app.php on line 42";

    fn selector(exclude: &[Tag]) -> TagSelector {
        TagSelector::new(HashSet::new(), exclude.iter().copied().collect())
    }

    #[test]
    fn test_extracts_all_fields() {
        let record = FieldExtractor::default().extract(NOTICE);

        assert_eq!(record.date.as_deref(), Some("11-Dec-2019 08:35:11 UTC"));
        let error = record.error.unwrap();
        assert_eq!(error.level.as_deref(), Some("PHP Notice"));
        assert_eq!(error.message.as_deref(), Some("Undefined variable: foo"));
        assert_eq!(error.value.as_deref(), Some("foo"));
        let file = record.file.unwrap();
        assert_eq!(file.name.as_deref(), Some("/webs/html/pages.inc.php"));
        assert_eq!(file.line.as_deref(), Some("270"));
        assert_eq!(record.duplicate_count, None);
    }

    #[test]
    fn test_value_uses_restricted_character_class() {
        let record = FieldExtractor::default().extract(WARNING);
        let error = record.error.unwrap();
        assert_eq!(error.level.as_deref(), Some("PHP Warning"));
        assert_eq!(
            error.message.as_deref(),
            Some("count(): Parameter must be an array or an object that implements Countable")
        );
        assert_eq!(
            error.value.as_deref(),
            Some("Parameter must be an array or an object that implements Countable")
        );
    }

    #[test]
    fn test_unmatched_line_yields_empty_fields() {
        let record = FieldExtractor::default().extract("garbage without structure");
        assert_eq!(record.date.as_deref(), Some(""));
        let error = record.error.unwrap();
        assert_eq!(error.level.as_deref(), Some(""));
        assert_eq!(error.message.as_deref(), Some(""));
        assert_eq!(error.value.as_deref(), Some(""));
        let file = record.file.unwrap();
        assert_eq!(file.name.as_deref(), Some(""));
        assert_eq!(file.line.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_line_is_total() {
        let record = FieldExtractor::default().extract("");
        assert_eq!(record.date.as_deref(), Some(""));
        assert!(record.error.is_some());
        assert!(record.file.is_some());
    }

    #[test]
    fn test_parent_tag_gates_composite() {
        let record = FieldExtractor::new(selector(&[Tag::Error])).extract(NOTICE);
        assert!(record.error.is_none());
        assert!(record.file.is_some());
        assert!(record.date.is_some());
    }

    #[test]
    fn test_sub_field_tag_gates_sub_field() {
        let record =
            FieldExtractor::new(selector(&[Tag::ErrorValue, Tag::FileLine])).extract(NOTICE);
        let error = record.error.unwrap();
        assert!(error.value.is_none());
        assert!(error.level.is_some());
        let file = record.file.unwrap();
        assert!(file.line.is_none());
        assert_eq!(file.name.as_deref(), Some("/webs/html/pages.inc.php"));
    }

    #[test]
    fn test_line_number_must_end_the_line() {
        let record = FieldExtractor::default().extract("x in /a.php on line 12 trailing");
        assert_eq!(record.file.unwrap().line.as_deref(), Some(""));
    }

    #[test]
    fn test_space_replacement_applies_to_message() {
        let record = FieldExtractor::default()
            .with_space_replacement(Some('+'))
            .extract(NOTICE);
        let error = record.error.unwrap();
        assert_eq!(error.message.as_deref(), Some("Undefined+variable:+foo"));
        assert_eq!(error.level.as_deref(), Some("PHP Notice"));
    }
}
