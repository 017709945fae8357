//! Search predicate over member records.

use crate::model::MemberRecord;

/// Returns true when `query` occurs case-insensitively in the record's
/// display name or status string. The empty query matches every record
/// (the empty string is trivially a substring of everything).
pub fn matches(record: &MemberRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.full_name.to_lowercase().contains(&needle)
        || record.status.to_lowercase().contains(&needle)
}
