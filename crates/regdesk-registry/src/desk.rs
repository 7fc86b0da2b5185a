//! Form flow coordination: validation, the single edit session, and the
//! delete confirmation gate.

use chrono::Utc;

use crate::record::RecordDraft;
use crate::store::{RecordStore, RegistryError};
use crate::validate::{check_draft, ValidationReport};

/// Which record, if any, the form is currently editing.
///
/// There is exactly one session process-wide; beginning a new edit replaces
/// the previous target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(usize),
}

/// User answer to the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// What a submit did.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A new record was prepended.
    Added,
    /// The record at this unfiltered index was replaced in place.
    Updated(usize),
    /// Validation failed; nothing was mutated.
    Rejected(ValidationReport),
}

/// What a delete did.
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The confirmation gate declined; nothing was mutated.
    Declined,
}

/// Owns the record store and the edit session, and runs the submit/delete
/// flows in the order the form does: validate, mutate, persist.
pub struct Desk {
    store: RecordStore,
    session: EditSession,
}

impl Desk {
    pub fn new(store: RecordStore) -> Self {
        Self { store, session: EditSession::Idle }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    /// Submit the form.
    ///
    /// Validation failure rejects the draft without touching the store or
    /// the session. A valid draft is added while idle, or replaces the
    /// session's target record in place, preserving its creation time, after
    /// which the session returns to idle.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] when an edit session targets an
    /// index that no longer exists.
    pub fn submit(&mut self, draft: &RecordDraft) -> Result<SubmitOutcome, RegistryError> {
        let report = check_draft(draft);
        if !report.is_valid() {
            return Ok(SubmitOutcome::Rejected(report));
        }

        match self.session {
            EditSession::Idle => {
                self.store.add(draft.to_record(Utc::now()));
                Ok(SubmitOutcome::Added)
            }
            EditSession::Editing(index) => {
                let created_at = self
                    .store
                    .get(index)
                    .map(|existing| existing.created_at)
                    .ok_or(RegistryError::NotFound(index))?;
                self.store.update(index, draft.to_record(created_at))?;
                self.session = EditSession::Idle;
                Ok(SubmitOutcome::Updated(index))
            }
        }
    }

    /// Start editing the record at `index` and return a draft populated from
    /// it for the form.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] when `index` is out of range; the
    /// session is left unchanged.
    pub fn begin_edit(&mut self, index: usize) -> Result<RecordDraft, RegistryError> {
        let record = self.store.get(index).ok_or(RegistryError::NotFound(index))?;
        let draft = RecordDraft::from(record);
        self.session = EditSession::Editing(index);
        Ok(draft)
    }

    /// Abandon the current edit session, if any.
    pub fn cancel_edit(&mut self) {
        self.session = EditSession::Idle;
    }

    /// Delete the record at `index` behind the confirmation gate.
    ///
    /// A declined confirmation is a no-op. Deleting the record an edit
    /// session targets cancels that session; a session targeting any other
    /// index is left as-is.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] when `index` is out of range.
    pub fn delete(
        &mut self,
        index: usize,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, RegistryError> {
        if confirmation == Confirmation::Declined {
            return Ok(DeleteOutcome::Declined);
        }
        self.store.delete(index)?;
        if self.session == EditSession::Editing(index) {
            self.session = EditSession::Idle;
        }
        Ok(DeleteOutcome::Deleted)
    }
}
