use shared::domain::{GroupedRecords, Record};

/// Filters, sorts and groups a decoded listing.
///
/// Records without a non-blank name are dropped. Survivors are ordered by
/// `(group_id, id)` and partitioned by `group_id`; groups that end up empty
/// never appear in the result. Pure: the output depends only on the input
/// multiset, not on its order.
pub fn group_records(records: Vec<Record>) -> GroupedRecords {
    let mut survivors: Vec<Record> = records
        .into_iter()
        .filter(Record::has_display_name)
        .collect();
    survivors.sort_by_key(|record| (record.group_id, record.id));

    let mut grouped = GroupedRecords::new();
    for record in survivors {
        grouped.entry(record.group_id).or_default().push(record);
    }
    grouped
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
