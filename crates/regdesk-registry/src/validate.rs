//! Field validation for registration drafts.
//!
//! Each field validator is total and pure: the same input always yields the
//! same answer, and nothing here touches store state. Form-level validation
//! runs all four fields and records an independent message per failing field
//! rather than short-circuiting on the first failure.

use crate::record::RecordDraft;

/// Minimum number of digits in a contact number. No maximum is enforced.
pub const MIN_CONTACT_DIGITS: usize = 10;

/// Form fields addressed by validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    StudentId,
    Email,
    Contact,
}

/// A single failed field and its inline message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Outcome of validating a whole draft: at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// True when every field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The inline message for one field, if it failed.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }
}

/// Letters and interior whitespace only, non-empty after trimming.
pub fn is_valid_name(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// ASCII digits only, non-empty after trimming.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Loose `local@domain.tld` shape check, not RFC-compliant: one `@` with
/// non-empty sides, no whitespace, and a dot in the domain with at least one
/// character on each side.
pub fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if trimmed.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

/// Digits only and at least [`MIN_CONTACT_DIGITS`] of them.
pub fn is_valid_contact(value: &str) -> bool {
    is_numeric(value) && value.trim().len() >= MIN_CONTACT_DIGITS
}

/// Validate a whole draft.
///
/// Every field is checked; a failing field contributes exactly one message,
/// chosen in priority order: empty, then wrong shape, then (for the contact
/// number) too short.
pub fn check_draft(draft: &RecordDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    let name = draft.name.trim();
    if name.is_empty() {
        report.push(Field::Name, "Name is required.");
    } else if !is_valid_name(name) {
        report.push(Field::Name, "Name must contain only letters and spaces.");
    }

    let student_id = draft.student_id.trim();
    if student_id.is_empty() {
        report.push(Field::StudentId, "Student ID is required.");
    } else if !is_numeric(student_id) {
        report.push(Field::StudentId, "Student ID must contain only numbers.");
    }

    let email = draft.email.trim();
    if email.is_empty() {
        report.push(Field::Email, "Email is required.");
    } else if !is_valid_email(email) {
        report.push(Field::Email, "Invalid email format.");
    }

    let contact = draft.contact.trim();
    if contact.is_empty() {
        report.push(Field::Contact, "Contact number is required.");
    } else if !is_numeric(contact) {
        report.push(Field::Contact, "Contact must contain only digits.");
    } else if !is_valid_contact(contact) {
        report.push(Field::Contact, "Contact must be at least 10 digits.");
    }

    report
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn valid_draft() -> RecordDraft {
        RecordDraft {
            name: "Ann Lee".to_string(),
            student_id: "1023".to_string(),
            email: "ann@x.com".to_string(),
            contact: "9876543210".to_string(),
        }
    }

    #[test]
    fn name_accepts_letters_and_interior_spaces() {
        assert!(is_valid_name("Ann Lee"));
        assert!(is_valid_name("  Ann  "));
        assert!(!is_valid_name("A1"));
        assert!(!is_valid_name("Ann-Lee"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
    }

    #[test]
    fn numeric_rejects_anything_but_digits() {
        assert!(is_numeric("1023"));
        assert!(is_numeric(" 1023 "));
        assert!(!is_numeric("10 23"));
        assert!(!is_numeric("10a"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("ann@x.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        // no dot in the domain
        assert!(!is_valid_email("ann@xcom"));
        // dot needs a character on each side
        assert!(!is_valid_email("ann@.com"));
        assert!(!is_valid_email("ann@x."));
        // one @ exactly, non-empty sides, no whitespace
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ann@"));
        assert!(!is_valid_email("a@b@x.com"));
        assert!(!is_valid_email("a n@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn contact_requires_ten_digits() {
        assert!(is_valid_contact("9876543210"));
        assert!(is_valid_contact("98765432101234"));
        assert!(!is_valid_contact("987654321"));
        assert!(!is_valid_contact("98765abc10"));
    }

    #[test]
    fn validators_are_trim_idempotent() {
        for raw in ["  Ann Lee  ", " 1023 ", " ann@x.com ", " 9876543210 "] {
            assert_eq!(is_valid_name(raw), is_valid_name(raw.trim()));
            assert_eq!(is_numeric(raw), is_numeric(raw.trim()));
            assert_eq!(is_valid_email(raw), is_valid_email(raw.trim()));
            assert_eq!(is_valid_contact(raw), is_valid_contact(raw.trim()));
        }
    }

    #[test]
    fn valid_draft_passes() {
        let report = check_draft(&valid_draft());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn every_failing_field_gets_its_own_message() {
        let draft = RecordDraft {
            name: "A1".to_string(),
            student_id: String::new(),
            email: "not-an-email".to_string(),
            contact: "123".to_string(),
        };
        let report = check_draft(&draft);
        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 4);
        assert_eq!(
            report.message_for(Field::Name),
            Some("Name must contain only letters and spaces.")
        );
        assert_eq!(report.message_for(Field::StudentId), Some("Student ID is required."));
        assert_eq!(report.message_for(Field::Email), Some("Invalid email format."));
        assert_eq!(
            report.message_for(Field::Contact),
            Some("Contact must be at least 10 digits.")
        );
    }

    #[test]
    fn empty_message_takes_priority_over_shape() {
        let draft = RecordDraft {
            name: "   ".to_string(),
            ..valid_draft()
        };
        let report = check_draft(&draft);
        assert_eq!(report.message_for(Field::Name), Some("Name is required."));
    }

    #[test]
    fn contact_message_priority_is_shape_before_length() {
        let draft = RecordDraft {
            contact: "12ab".to_string(),
            ..valid_draft()
        };
        let report = check_draft(&draft);
        assert_eq!(
            report.message_for(Field::Contact),
            Some("Contact must contain only digits.")
        );
    }
}
