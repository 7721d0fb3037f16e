use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One item decoded from the remote listing.
///
/// `name` is optional on the wire: it may be absent or an explicit `null`.
/// `id` and `listId` are required integers; a payload missing either on any
/// element is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(rename = "listId")]
    pub group_id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl Record {
    pub fn new(id: i64, group_id: i64, name: Option<&str>) -> Self {
        Self {
            id,
            group_id,
            name: name.map(str::to_owned),
        }
    }

    /// True when the name is present and not blank after trimming.
    pub fn has_display_name(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }
}

/// Surviving records keyed by `group_id`, each group ordered by ascending `id`.
pub type GroupedRecords = BTreeMap<i64, Vec<Record>>;

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
