//! Student-registration records for RegDesk
//!
//! An owned, encapsulated record store (no ambient globals), pure field
//! validation, a pure view projection, and the form-flow coordinator that
//! ties them together: user input is validated, valid drafts mutate the
//! store, every mutation is written through to the persistence backing, and
//! the projection derives the filtered table from the resulting snapshot.

pub mod backing;
pub mod desk;
pub mod record;
pub mod store;
pub mod validate;
pub mod view;

pub use backing::{BackingError, JsonFileBacking, MemoryBacking, RecordBacking};
pub use desk::{Confirmation, DeleteOutcome, Desk, EditSession, SubmitOutcome};
pub use record::{Record, RecordDraft};
pub use store::{RecordStore, RegistryError};
pub use validate::{check_draft, Field, FieldError, ValidationReport};
pub use view::{overflow_affordance, Projection, Row};
