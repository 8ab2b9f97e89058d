//! Working-form reference data.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a working form row.
pub type WorkingFormId = i64;

/// Employment-type category (full-time, part-time, ...).
///
/// Rows are seeded by the schema migration and treated as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkingForm {
    pub id: WorkingFormId,
    pub label: String,
}

impl WorkingForm {
    pub fn new(id: WorkingFormId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
