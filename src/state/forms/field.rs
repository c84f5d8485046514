//! Form field descriptors

use super::form_state::FieldChange;

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, edited character by character
    Text,
    /// Single choice from a fixed set (gender)
    Radio,
    /// Boolean toggle
    Checkbox,
}

/// Identifies every input the wizard can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Phone,
    Email,
    Gender,
    InstituteName,
    Duration,
    JoiningYear,
    CurrentlyPursuing,
    EndDate,
    /// Staging buffer for the travel editor
    NewPlace,
    /// Staging buffer for the travel editor
    NewCity,
}

impl FieldId {
    /// Label shown on the field border
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Gender => "Gender",
            Self::InstituteName => "Institute Name",
            Self::Duration => "Duration",
            Self::JoiningYear => "Joining Year",
            Self::CurrentlyPursuing => "Currently Pursuing",
            Self::EndDate => "End Year",
            Self::NewPlace => "Place Name",
            Self::NewCity => "City",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Gender => FieldKind::Radio,
            Self::CurrentlyPursuing => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// Whether the field carries a required marker
    pub fn is_required(self) -> bool {
        !matches!(
            self,
            Self::CurrentlyPursuing | Self::NewPlace | Self::NewCity
        )
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::JoiningYear => Some("2020"),
            Self::EndDate => Some("2024"),
            _ => None,
        }
    }

    /// Whether the field is a travel staging buffer rather than part of the record
    pub fn is_staging(self) -> bool {
        matches!(self, Self::NewPlace | Self::NewCity)
    }

    /// Build the change that sets this text field to `value`.
    ///
    /// Returns `None` for non-text fields and for the staging buffers,
    /// which are not part of the submitted record.
    pub fn text_change(self, value: String) -> Option<FieldChange> {
        match self {
            Self::Name => Some(FieldChange::Name(value)),
            Self::Phone => Some(FieldChange::Phone(value)),
            Self::Email => Some(FieldChange::Email(value)),
            Self::InstituteName => Some(FieldChange::InstituteName(value)),
            Self::Duration => Some(FieldChange::Duration(value)),
            Self::JoiningYear => Some(FieldChange::JoiningYear(value)),
            Self::EndDate => Some(FieldChange::EndDate(value)),
            Self::Gender | Self::CurrentlyPursuing | Self::NewPlace | Self::NewCity => None,
        }
    }
}
