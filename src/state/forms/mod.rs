//! Form domain layer
//!
//! The submitted record, the single-field transitions that update it, and
//! descriptors for every input the wizard renders.

mod field;
mod form_state;

pub use field::{FieldId, FieldKind};
pub use form_state::{
    FieldChange, FormState, Gender, TravelDraft, DEFAULT_END_DATE, DEFAULT_JOINING_YEAR,
};

#[cfg(test)]
pub use form_state::{TravelEntry, ONGOING_SENTINEL};
