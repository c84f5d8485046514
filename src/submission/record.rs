//! Submitted record and its summary rendering

use crate::state::FormState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Snapshot of the form taken when the user submits
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
    pub institute_name: String,
    pub duration: String,
    pub joining_year: String,
    pub end_date: String,
    pub places: Vec<String>,
    pub cities: Vec<String>,
}

impl Submission {
    /// Snapshot `form` with a fresh id and the current time
    pub fn from_form(form: &FormState) -> Self {
        Self::with_identity(form, Uuid::new_v4(), Utc::now())
    }

    pub fn with_identity(form: &FormState, id: Uuid, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            submitted_at,
            name: form.name().to_string(),
            phone: form.phone().to_string(),
            email: form.email().to_string(),
            gender: form
                .gender()
                .map(|g| g.as_str().to_string())
                .unwrap_or_default(),
            institute_name: form.institute_name().to_string(),
            duration: form.duration().to_string(),
            joining_year: form.joining_year().to_string(),
            end_date: form.end_date().to_string(),
            places: form.places().into_iter().map(str::to_string).collect(),
            cities: form.cities().into_iter().map(str::to_string).collect(),
        }
    }

    /// Labelled values in display order, lists joined with ", "
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Phone", self.phone.clone()),
            ("Email", self.email.clone()),
            ("Gender", self.gender.clone()),
            ("Institute Name", self.institute_name.clone()),
            ("Duration", self.duration.clone()),
            ("Joining Year", self.joining_year.clone()),
            ("End Date", self.end_date.clone()),
            ("Places", self.places.join(", ")),
            ("Cities", self.cities.join(", ")),
        ]
    }

    /// Plain-text summary, one `Label: value` per line
    pub fn to_text(&self) -> String {
        self.summary_lines()
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
