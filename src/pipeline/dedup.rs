use crate::pipeline::stream::RecordStage;
use crate::record::LogRecord;

/// Collapse adjacent records with equal fields into one, counting how many
/// were merged. Like `uniq`, equal records separated by a different one are
/// both kept, so sort first for a global count.
pub fn dedupe(records: Vec<LogRecord>) -> Vec<LogRecord> {
    let mut kept: Vec<LogRecord> = Vec::with_capacity(records.len());

    for mut record in records {
        if let Some(last) = kept.last_mut() {
            if last.same_fields(&record) {
                *last.duplicate_count.get_or_insert(1) += 1;
                continue;
            }
        }
        record.duplicate_count = Some(1);
        kept.push(record);
    }

    kept
}

pub struct Deduplicator;

impl RecordStage for Deduplicator {
    fn apply(&self, records: Vec<LogRecord>) -> Vec<LogRecord> {
        dedupe(records)
    }

    fn name(&self) -> &str {
        "uniq"
    }
}
