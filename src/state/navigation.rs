//! Step navigation

use super::forms::FieldId;

/// Number of editable steps; also the index of the summary screen
pub const STEP_COUNT: usize = 3;

/// One of the editable steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Personal,
    Education,
    Travel,
}

impl Step {
    pub const ALL: [Step; STEP_COUNT] = [Step::Personal, Step::Education, Step::Travel];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Self::Personal => 0,
            Self::Education => 1,
            Self::Travel => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Details",
            Self::Education => "Education Details",
            Self::Travel => "Travel History",
        }
    }

    /// Inputs shown on this step, in focus order
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Self::Personal => &[
                FieldId::Name,
                FieldId::Phone,
                FieldId::Email,
                FieldId::Gender,
            ],
            Self::Education => &[
                FieldId::InstituteName,
                FieldId::Duration,
                FieldId::JoiningYear,
                FieldId::CurrentlyPursuing,
                FieldId::EndDate,
            ],
            Self::Travel => &[FieldId::NewPlace, FieldId::NewCity],
        }
    }

    /// Label of the forward button
    pub fn forward_label(self) -> &'static str {
        if self.index() == STEP_COUNT - 1 {
            "Submit"
        } else {
            "Next"
        }
    }
}

/// Active step, bounded to `0..=STEP_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    active_step: usize,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    /// The editable step, or `None` once the summary is reached
    pub fn step(&self) -> Option<Step> {
        Step::from_index(self.active_step)
    }

    pub fn is_complete(&self) -> bool {
        self.active_step == STEP_COUNT
    }

    pub fn can_go_back(&self) -> bool {
        self.active_step > 0 && !self.is_complete()
    }

    /// Advance one step. Callers check the step gate first.
    pub fn next(&mut self) {
        if self.active_step < STEP_COUNT {
            self.active_step += 1;
        }
    }

    /// Go back one step; no-op at the first step
    pub fn back(&mut self) {
        self.active_step = self.active_step.saturating_sub(1);
    }
}
