use std::cmp::Ordering;

use crate::pipeline::stream::RecordStage;
use crate::record::LogRecord;

/// Stable ascending sort on the rendered fields of each record
pub fn sort_by_fields(mut records: Vec<LogRecord>) -> Vec<LogRecord> {
    records.sort_by_cached_key(LogRecord::render_fields);
    records
}

/// Stable sort by occurrence count, highest first. Equal counts keep their
/// current order. Records without a count sort after counted ones, and
/// among themselves by rendered fields.
pub fn sort_by_count(mut records: Vec<LogRecord>) -> Vec<LogRecord> {
    records.sort_by(compare_by_count);
    records
}

fn compare_by_count(a: &LogRecord, b: &LogRecord) -> Ordering {
    match (a.duplicate_count, b.duplicate_count) {
        (Some(a_count), Some(b_count)) => b_count.cmp(&a_count),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.render_fields().cmp(&b.render_fields()),
    }
}

pub struct FieldSorter;

impl RecordStage for FieldSorter {
    fn apply(&self, records: Vec<LogRecord>) -> Vec<LogRecord> {
        sort_by_fields(records)
    }

    fn name(&self) -> &str {
        "sort"
    }
}

pub struct CountSorter;

impl RecordStage for CountSorter {
    fn apply(&self, records: Vec<LogRecord>) -> Vec<LogRecord> {
        sort_by_count(records)
    }

    fn name(&self) -> &str {
        "count-sort"
    }
}
