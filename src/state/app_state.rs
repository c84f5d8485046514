//! Wizard state: the form record, navigation, and focus

use super::forms::{FieldChange, FieldId, FieldKind, FormState, Gender, TravelDraft};
use super::navigation::{Navigation, Step};
use super::validation::can_advance;
use crate::submission::Submission;
use std::collections::VecDeque;

/// Buttons shown under each step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardButton {
    /// "Add Place and City" on the travel step
    AddTravel,
    Back,
    /// "Next", or "Submit" on the last step
    Forward,
}

impl WizardButton {
    pub fn label(self, step: Step) -> &'static str {
        match self {
            Self::AddTravel => "Add Place and City",
            Self::Back => "Back",
            Self::Forward => step.forward_label(),
        }
    }
}

/// Something that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Button(WizardButton),
}

/// Outcome of a forward request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Gate closed; nothing changed
    Blocked,
    /// Moved to another editable step
    Moved,
    /// Reached the summary
    Submitted,
}

/// Complete wizard state, owned by the app for its whole lifetime
#[derive(Debug, Clone)]
pub struct WizardState {
    pub form: FormState,
    pub draft: TravelDraft,
    pub nav: Navigation,
    pub focus: Focus,
    /// Snapshot taken on submit
    pub submission: Option<Submission>,
    /// Queue of error messages to display
    pub error_queue: VecDeque<String>,
}

impl WizardState {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            draft: TravelDraft::default(),
            nav: Navigation::new(),
            focus: Focus::Field(FieldId::Name),
            submission: None,
            error_queue: VecDeque::new(),
        }
    }

    pub fn step(&self) -> Option<Step> {
        self.nav.step()
    }

    /// Whether the forward button is enabled for the active step
    pub fn can_go_next(&self) -> bool {
        can_advance(self.nav.active_step(), &self.form)
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.can_go_back()
    }

    /// Whether an input accepts edits
    pub fn is_field_enabled(&self, field: FieldId) -> bool {
        match field {
            FieldId::EndDate => self.form.is_end_date_editable(),
            _ => true,
        }
    }

    pub fn is_button_enabled(&self, button: WizardButton) -> bool {
        match button {
            WizardButton::AddTravel => true,
            WizardButton::Back => self.can_go_back(),
            WizardButton::Forward => self.can_go_next(),
        }
    }

    /// Focus stops for the active step, skipping disabled controls
    pub fn focusables(&self) -> Vec<Focus> {
        let Some(step) = self.step() else {
            return Vec::new();
        };

        let mut stops: Vec<Focus> = step
            .fields()
            .iter()
            .copied()
            .filter(|f| self.is_field_enabled(*f))
            .map(Focus::Field)
            .collect();

        let buttons: &[WizardButton] = if step == Step::Travel {
            &[
                WizardButton::AddTravel,
                WizardButton::Back,
                WizardButton::Forward,
            ]
        } else {
            &[WizardButton::Back, WizardButton::Forward]
        };
        stops.extend(
            buttons
                .iter()
                .copied()
                .filter(|b| self.is_button_enabled(*b))
                .map(Focus::Button),
        );
        stops
    }

    fn focus_first(&mut self) {
        if let Some(first) = self.focusables().first() {
            self.focus = *first;
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let stops = self.focusables();
        if stops.is_empty() {
            return;
        }
        let next = match stops.iter().position(|f| *f == self.focus) {
            Some(i) if forward => (i + 1) % stops.len(),
            Some(0) => stops.len() - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.focus = stops[next];
    }

    pub fn next_focus(&mut self) {
        self.move_focus(true);
    }

    pub fn prev_focus(&mut self) {
        self.move_focus(false);
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        match self.focus {
            Focus::Field(f) => Some(f),
            Focus::Button(_) => None,
        }
    }

    /// Current text of any input, including the staging buffers
    pub fn field_text(&self, field: FieldId) -> &str {
        if field.is_staging() {
            self.draft.buffer(field)
        } else {
            self.form.text(field)
        }
    }

    /// Rewrite the focused text input through `edit`
    fn edit_focused_text(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field.kind() != FieldKind::Text || !self.is_field_enabled(field) {
            return;
        }

        if let Some(buffer) = self.draft.buffer_mut(field) {
            edit(buffer);
            return;
        }

        let mut value = self.form.text(field).to_string();
        edit(&mut value);
        if let Some(change) = field.text_change(value) {
            self.form.apply(change);
        }
    }

    /// Type a character into the focused input
    pub fn input_char(&mut self, c: char) {
        match self.focused_field() {
            Some(FieldId::Gender) => {
                let gender = match c.to_ascii_lowercase() {
                    'm' => Some(Gender::Male),
                    'f' => Some(Gender::Female),
                    'o' => Some(Gender::Other),
                    ' ' => Some(self.form.gender().map_or(Gender::Male, |g| g.next())),
                    _ => None,
                };
                if let Some(g) = gender {
                    self.form.apply(FieldChange::Gender(g));
                }
            }
            Some(FieldId::CurrentlyPursuing) => {
                if c == ' ' {
                    self.toggle_pursuing();
                }
            }
            _ => self.edit_focused_text(|s| s.push(c)),
        }
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        self.edit_focused_text(|s| {
            s.pop();
        });
    }

    /// Cycle the focused radio group
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.focused_field() {
            Some(FieldId::Gender) => {
                let gender = match self.form.gender() {
                    Some(g) if forward => g.next(),
                    Some(g) => g.prev(),
                    None if forward => Gender::Male,
                    None => Gender::Other,
                };
                self.form.apply(FieldChange::Gender(gender));
            }
            Some(FieldId::CurrentlyPursuing) => self.toggle_pursuing(),
            _ => {}
        }
    }

    pub fn toggle_pursuing(&mut self) {
        let checked = !self.form.currently_pursuing();
        self.form.apply(FieldChange::CurrentlyPursuing(checked));
    }

    /// Move staged place and city into the record.
    ///
    /// Silently does nothing unless both buffers hold text.
    pub fn add_place_and_city(&mut self) -> bool {
        match self.draft.take_entry() {
            Some(entry) => {
                self.form.push_travel(entry);
                true
            }
            None => false,
        }
    }

    /// Move forward if the active step's gate is open
    pub fn go_next(&mut self) -> Advance {
        if !self.can_go_next() {
            return Advance::Blocked;
        }
        self.nav.next();
        if self.nav.is_complete() {
            self.submission = Some(Submission::from_form(&self.form));
            Advance::Submitted
        } else {
            self.focus_first();
            Advance::Moved
        }
    }

    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.nav.back();
        self.focus_first();
        true
    }

    /// Push an error message to the queue
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Dismiss the current error
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn current_error(&self) -> Option<&String> {
        self.error_queue.front()
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(FormState::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::ONGOING_SENTINEL;
    use crate::state::navigation::STEP_COUNT;

    fn type_text(state: &mut WizardState, field: FieldId, text: &str) {
        state.focus = Focus::Field(field);
        for c in text.chars() {
            state.input_char(c);
        }
    }

    fn fill_personal(state: &mut WizardState) {
        type_text(state, FieldId::Name, "Asha");
        type_text(state, FieldId::Phone, "555-0100");
        type_text(state, FieldId::Email, "a@b.com");
        state.focus = Focus::Field(FieldId::Gender);
        state.input_char('f');
    }

    fn fill_education(state: &mut WizardState) {
        type_text(state, FieldId::InstituteName, "X");
        type_text(state, FieldId::Duration, "4 years");
    }

    fn add_travel(state: &mut WizardState, place: &str, city: &str) -> bool {
        type_text(state, FieldId::NewPlace, place);
        type_text(state, FieldId::NewCity, city);
        state.add_place_and_city()
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_name() {
            let state = WizardState::default();
            assert_eq!(state.focus, Focus::Field(FieldId::Name));
        }

        #[test]
        fn test_disabled_buttons_skipped() {
            let state = WizardState::default();
            // Step 0: Back disabled, gate closed
            assert_eq!(
                state.focusables(),
                vec![
                    Focus::Field(FieldId::Name),
                    Focus::Field(FieldId::Phone),
                    Focus::Field(FieldId::Email),
                    Focus::Field(FieldId::Gender),
                ]
            );
        }

        #[test]
        fn test_forward_button_appears_when_gate_opens() {
            let mut state = WizardState::default();
            fill_personal(&mut state);
            assert_eq!(
                state.focusables().last(),
                Some(&Focus::Button(WizardButton::Forward))
            );
        }

        #[test]
        fn test_next_focus_wraps() {
            let mut state = WizardState::default();
            state.focus = Focus::Field(FieldId::Gender);
            state.next_focus();
            assert_eq!(state.focus, Focus::Field(FieldId::Name));
        }

        #[test]
        fn test_prev_focus_wraps() {
            let mut state = WizardState::default();
            state.prev_focus();
            assert_eq!(state.focus, Focus::Field(FieldId::Gender));
        }

        #[test]
        fn test_end_date_skipped_while_pursuing() {
            let mut state = WizardState::default();
            fill_personal(&mut state);
            state.go_next();
            state.focus = Focus::Field(FieldId::CurrentlyPursuing);
            state.input_char(' ');
            assert!(!state
                .focusables()
                .contains(&Focus::Field(FieldId::EndDate)));
        }

        #[test]
        fn test_travel_step_has_add_button() {
            let mut state = WizardState::default();
            fill_personal(&mut state);
            state.go_next();
            fill_education(&mut state);
            state.go_next();
            assert!(state
                .focusables()
                .contains(&Focus::Button(WizardButton::AddTravel)));
            assert_eq!(state.focus, Focus::Field(FieldId::NewPlace));
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_updates_record() {
            let mut state = WizardState::default();
            type_text(&mut state, FieldId::Name, "Asha");
            assert_eq!(state.form.name(), "Asha");
            state.backspace();
            assert_eq!(state.form.name(), "Ash");
        }

        #[test]
        fn test_gender_shortcuts_and_cycle() {
            let mut state = WizardState::default();
            state.focus = Focus::Field(FieldId::Gender);
            state.input_char('O');
            assert_eq!(state.form.gender(), Some(Gender::Other));
            state.cycle_choice(true);
            assert_eq!(state.form.gender(), Some(Gender::Male));
            state.cycle_choice(false);
            assert_eq!(state.form.gender(), Some(Gender::Other));
        }

        #[test]
        fn test_typing_ignored_on_buttons() {
            let mut state = WizardState::default();
            state.focus = Focus::Button(WizardButton::Back);
            state.input_char('x');
            assert_eq!(state.form, FormState::new());
        }

        #[test]
        fn test_end_date_locked_while_pursuing() {
            let mut state = WizardState::default();
            state.toggle_pursuing();
            type_text(&mut state, FieldId::EndDate, "1999");
            state.backspace();
            assert_eq!(state.form.end_date(), ONGOING_SENTINEL);
        }

        #[test]
        fn test_staging_buffers_not_in_record() {
            let mut state = WizardState::default();
            type_text(&mut state, FieldId::NewPlace, "Paris");
            assert_eq!(state.field_text(FieldId::NewPlace), "Paris");
            assert!(state.form.places().is_empty());
        }
    }

    mod travel {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_scenario_two_entries() {
            let mut state = WizardState::default();
            assert!(add_travel(&mut state, "Paris", "France"));
            assert_eq!(state.draft, TravelDraft::default());
            assert!(add_travel(&mut state, "Rome", "Italy"));
            assert_eq!(state.draft, TravelDraft::default());

            assert_eq!(state.form.places(), vec!["Paris", "Rome"]);
            assert_eq!(state.form.cities(), vec!["France", "Italy"]);
        }

        #[test]
        fn test_empty_buffers_are_noop() {
            let mut state = WizardState::default();
            assert!(!state.add_place_and_city());
            assert!(!add_travel(&mut state, "Paris", ""));
            assert!(!state.add_place_and_city());
            assert_eq!(state.form.places().len(), 0);
            assert_eq!(state.form.cities().len(), 0);
        }

        #[test]
        fn test_duplicates_allowed() {
            let mut state = WizardState::default();
            add_travel(&mut state, "Paris", "France");
            add_travel(&mut state, "Paris", "France");
            assert_eq!(state.form.travel().len(), 2);
        }

        #[test]
        fn test_lengths_stay_equal() {
            let mut state = WizardState::default();
            let inputs = [("a", "b"), ("", "c"), ("d", ""), ("e", "f"), ("", "")];
            for (place, city) in inputs {
                add_travel(&mut state, place, city);
                state.draft = TravelDraft::default();
                assert_eq!(state.form.places().len(), state.form.cities().len());
            }
            assert_eq!(state.form.places(), vec!["a", "e"]);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blocked_until_gate_opens() {
            let mut state = WizardState::default();
            assert_eq!(state.go_next(), Advance::Blocked);
            assert_eq!(state.nav.active_step(), 0);

            fill_personal(&mut state);
            assert_eq!(state.go_next(), Advance::Moved);
            assert_eq!(state.step(), Some(Step::Education));
            assert_eq!(state.focus, Focus::Field(FieldId::InstituteName));
        }

        #[test]
        fn test_back_disabled_on_first_step() {
            let mut state = WizardState::default();
            assert!(!state.go_back());
            assert!(!state.is_button_enabled(WizardButton::Back));
        }

        #[test]
        fn test_back_keeps_answers() {
            let mut state = WizardState::default();
            fill_personal(&mut state);
            state.go_next();
            assert!(state.go_back());
            assert_eq!(state.step(), Some(Step::Personal));
            assert_eq!(state.form.name(), "Asha");
        }

        #[test]
        fn test_full_run_submits() {
            let mut state = WizardState::default();
            fill_personal(&mut state);
            state.go_next();
            fill_education(&mut state);
            state.go_next();
            add_travel(&mut state, "Paris", "France");

            assert_eq!(state.go_next(), Advance::Submitted);
            assert_eq!(state.nav.active_step(), STEP_COUNT);
            let submission = state.submission.as_ref().unwrap();
            assert_eq!(submission.places, vec!["Paris".to_string()]);
            assert!(state.focusables().is_empty());
            assert!(!state.can_go_back());
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_queue_is_fifo() {
            let mut state = WizardState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error().map(String::as_str), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error().map(String::as_str), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}
