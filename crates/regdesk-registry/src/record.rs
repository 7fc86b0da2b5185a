//! The record entity and the raw form draft it is built from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One registrant's validated data.
///
/// Every `Record` held by a store has passed validation at the moment it was
/// inserted or updated. `created_at` is stamped once at creation and carried
/// unchanged through in-place replacements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub contact: String,
    pub created_at: DateTime<Utc>,
}

/// Raw form input, one string per field, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub contact: String,
}

impl RecordDraft {
    /// Build a record from this draft, trimming every field.
    ///
    /// Callers are expected to have run the draft through
    /// [`crate::validate::check_draft`] first; this conversion does not
    /// validate.
    pub fn to_record(&self, created_at: DateTime<Utc>) -> Record {
        Record {
            name: self.name.trim().to_string(),
            student_id: self.student_id.trim().to_string(),
            email: self.email.trim().to_string(),
            contact: self.contact.trim().to_string(),
            created_at,
        }
    }
}

impl From<&Record> for RecordDraft {
    /// Populate form fields from an existing record (the begin-edit path).
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            student_id: record.student_id.clone(),
            email: record.email.clone(),
            contact: record.contact.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_record_trims_every_field() {
        let draft = RecordDraft {
            name: "  Ann Lee ".to_string(),
            student_id: " 1023".to_string(),
            email: "ann@x.com ".to_string(),
            contact: " 9876543210 ".to_string(),
        };
        let record = draft.to_record(Utc::now());
        assert_eq!(record.name, "Ann Lee");
        assert_eq!(record.student_id, "1023");
        assert_eq!(record.email, "ann@x.com");
        assert_eq!(record.contact, "9876543210");
    }

    #[test]
    fn draft_from_record_round_trips_fields() {
        let record = Record {
            name: "Ann Lee".to_string(),
            student_id: "1023".to_string(),
            email: "ann@x.com".to_string(),
            contact: "9876543210".to_string(),
            created_at: Utc::now(),
        };
        let draft = RecordDraft::from(&record);
        assert_eq!(draft.name, record.name);
        assert_eq!(draft.student_id, record.student_id);
        assert_eq!(draft.email, record.email);
        assert_eq!(draft.contact, record.contact);
    }
}
