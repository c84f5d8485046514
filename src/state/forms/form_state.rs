//! Form record, its transitions, and the travel staging buffers

use super::field::FieldId;
use serde::Serialize;

/// Value stored in `end_date` while the course is still being pursued
pub const ONGOING_SENTINEL: &str = "Currently Pursuing";

/// Seed for `joining_year` when nothing is configured
pub const DEFAULT_JOINING_YEAR: &str = "2020";

/// Seed for `end_date` when nothing is configured
pub const DEFAULT_END_DATE: &str = "2024";

/// Gender radio options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Raw value, as submitted
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Other,
            Self::Other => Self::Male,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Male => Self::Other,
            Self::Female => Self::Male,
            Self::Other => Self::Female,
        }
    }
}

/// One visited place and its city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelEntry {
    pub place: String,
    pub city: String,
}

/// A single-field update to the form record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Phone(String),
    Email(String),
    Gender(Gender),
    InstituteName(String),
    Duration(String),
    JoiningYear(String),
    EndDate(String),
    CurrentlyPursuing(bool),
}

/// Every answer collected by the wizard.
///
/// Fields are only reachable through [`FormState::with_change`] and
/// [`FormState::push_travel`], which keeps `currently_pursuing` and
/// `end_date` consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    name: String,
    phone: String,
    email: String,
    gender: Option<Gender>,
    institute_name: String,
    duration: String,
    joining_year: String,
    end_date: String,
    currently_pursuing: bool,
    travel: Vec<TravelEntry>,
}

impl FormState {
    /// Create an empty record with the default year seeds
    pub fn new() -> Self {
        Self::with_seeds(DEFAULT_JOINING_YEAR, DEFAULT_END_DATE)
    }

    /// Create an empty record with the given year seeds
    pub fn with_seeds(joining_year: &str, end_date: &str) -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            gender: None,
            institute_name: String::new(),
            duration: String::new(),
            joining_year: joining_year.to_string(),
            end_date: end_date.to_string(),
            currently_pursuing: false,
            travel: Vec::new(),
        }
    }

    /// Return a copy of the record with exactly one field changed.
    ///
    /// Setting `CurrentlyPursuing(true)` also pins `end_date` to
    /// [`ONGOING_SENTINEL`]; clearing it leaves `end_date` untouched.
    /// `EndDate` changes are dropped while the flag is set.
    pub fn with_change(&self, change: FieldChange) -> Self {
        let mut next = self.clone();
        match change {
            FieldChange::Name(v) => next.name = v,
            FieldChange::Phone(v) => next.phone = v,
            FieldChange::Email(v) => next.email = v,
            FieldChange::Gender(g) => next.gender = Some(g),
            FieldChange::InstituteName(v) => next.institute_name = v,
            FieldChange::Duration(v) => next.duration = v,
            FieldChange::JoiningYear(v) => next.joining_year = v,
            FieldChange::EndDate(v) => {
                if !next.currently_pursuing {
                    next.end_date = v;
                }
            }
            FieldChange::CurrentlyPursuing(checked) => {
                next.currently_pursuing = checked;
                if checked {
                    next.end_date = ONGOING_SENTINEL.to_string();
                }
            }
        }
        next
    }

    /// Apply a change in place
    pub fn apply(&mut self, change: FieldChange) {
        *self = self.with_change(change);
    }

    /// Append a travel entry
    pub fn push_travel(&mut self, entry: TravelEntry) {
        self.travel.push(entry);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn institute_name(&self) -> &str {
        &self.institute_name
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn joining_year(&self) -> &str {
        &self.joining_year
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn currently_pursuing(&self) -> bool {
        self.currently_pursuing
    }

    /// Whether the end date input accepts edits
    pub fn is_end_date_editable(&self) -> bool {
        !self.currently_pursuing
    }

    pub fn travel(&self) -> &[TravelEntry] {
        &self.travel
    }

    /// Places in insertion order
    pub fn places(&self) -> Vec<&str> {
        self.travel.iter().map(|e| e.place.as_str()).collect()
    }

    /// Cities in insertion order, index-aligned with [`FormState::places`]
    pub fn cities(&self) -> Vec<&str> {
        self.travel.iter().map(|e| e.city.as_str()).collect()
    }

    /// Text value of a record field (empty for non-text fields)
    pub fn text(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::Email => &self.email,
            FieldId::Gender => self.gender.map(|g| g.as_str()).unwrap_or(""),
            FieldId::InstituteName => &self.institute_name,
            FieldId::Duration => &self.duration,
            FieldId::JoiningYear => &self.joining_year,
            FieldId::EndDate => &self.end_date,
            FieldId::CurrentlyPursuing | FieldId::NewPlace | FieldId::NewCity => "",
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Staging buffers for the place/city editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelDraft {
    pub new_place: String,
    pub new_city: String,
}

impl TravelDraft {
    /// Mutable access to one of the two buffers
    pub fn buffer_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::NewPlace => Some(&mut self.new_place),
            FieldId::NewCity => Some(&mut self.new_city),
            _ => None,
        }
    }

    pub fn buffer(&self, field: FieldId) -> &str {
        match field {
            FieldId::NewPlace => &self.new_place,
            FieldId::NewCity => &self.new_city,
            _ => "",
        }
    }

    /// Take both buffers as an entry, clearing them.
    ///
    /// Returns `None`, leaving the buffers as they are, unless both
    /// are non-empty.
    pub fn take_entry(&mut self) -> Option<TravelEntry> {
        if self.new_place.is_empty() || self.new_city.is_empty() {
            return None;
        }
        Some(TravelEntry {
            place: std::mem::take(&mut self.new_place),
            city: std::mem::take(&mut self.new_city),
        })
    }
}
