//! Step gates and per-field indicators
//!
//! The gate decides whether the forward button is enabled. Field indicators
//! only drive the helper text under each input and never affect the gate.

use super::forms::{FieldId, FormState};
use regex::Regex;
use std::sync::OnceLock;

use super::iso_date::is_valid_date;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"))
}

/// Whether the email has an address-like shape
pub fn is_plausible_email(value: &str) -> bool {
    email_re().is_match(value)
}

/// Whether forward navigation from `step` is permitted.
///
/// Step 1 only checks that `end_date` is present; its date shape is
/// reported by [`field_status`] alone.
pub fn can_advance(step: usize, form: &FormState) -> bool {
    match step {
        0 => {
            !form.name().is_empty()
                && !form.phone().is_empty()
                && !form.email().is_empty()
                && form.gender().is_some()
        }
        1 => {
            !form.institute_name().is_empty()
                && !form.duration().is_empty()
                && is_valid_date(form.joining_year())
                && !form.end_date().is_empty()
        }
        2 => !form.places().is_empty() && !form.cities().is_empty(),
        _ => false,
    }
}

/// Helper text shown under an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldStatus {
    pub helper: Option<&'static str>,
    /// Render the input and helper as invalid
    pub is_error: bool,
}

impl FieldStatus {
    fn hint(text: &'static str) -> Self {
        Self {
            helper: Some(text),
            is_error: false,
        }
    }

    fn flagged(text: &'static str, is_error: bool) -> Self {
        Self {
            helper: Some(text),
            is_error,
        }
    }
}

/// Indicator for a single field
pub fn field_status(field: FieldId, form: &FormState) -> FieldStatus {
    match field {
        FieldId::Name if form.name().is_empty() => FieldStatus::hint("Name is required"),
        FieldId::Phone if form.phone().is_empty() => {
            FieldStatus::hint("Phone number is required")
        }
        FieldId::Email if form.email().is_empty() => FieldStatus::hint("Email is required"),
        FieldId::Email if !is_plausible_email(form.email()) => {
            FieldStatus::flagged("Enter a valid email", true)
        }
        FieldId::JoiningYear => {
            FieldStatus::flagged("Enter Year", !is_valid_date(form.joining_year()))
        }
        FieldId::EndDate => FieldStatus::flagged(
            "Enter Year",
            !is_valid_date(form.end_date()) && !form.currently_pursuing(),
        ),
        _ => FieldStatus::default(),
    }
}
