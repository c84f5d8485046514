//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (stepper_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_stepper(frame, stepper_area, app);

    match app.state.step() {
        Some(step) => forms::draw_step(frame, main_area, app, step),
        None => summary::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WizardConfig;
    use crate::state::{FieldChange, FieldId, Focus, Gender, TravelEntry};
    use crate::submission::MockSubmissionSink;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        App::new(WizardConfig::default(), Box::new(MockSubmissionSink::new()))
    }

    fn render(app: &App) -> String {
        render_at(app, 100, 40)
    }

    fn render_at(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_first_step_shows_personal_inputs() {
        let screen = render(&app());
        assert!(screen.contains("Personal Details"));
        assert!(screen.contains("Name *"));
        assert!(screen.contains("Name is required"));
        assert!(screen.contains("Female"));
        assert!(screen.contains("Next"));
    }

    #[test]
    fn test_education_step_shows_sentinel_when_pursuing() {
        let mut app = app();
        app.state.nav.next();
        app.state
            .form
            .apply(FieldChange::CurrentlyPursuing(true));
        let screen = render(&app);
        assert!(screen.contains("[x] Currently Pursuing"));
        assert!(screen.contains("Enter Year"));
    }

    #[test]
    fn test_travel_step_lists_entries() {
        let mut app = app();
        app.state.nav.next();
        app.state.nav.next();
        app.state.form.push_travel(TravelEntry {
            place: "Paris".to_string(),
            city: "France".to_string(),
        });
        let screen = render(&app);
        assert!(screen.contains("Add Place and City"));
        assert!(screen.contains("Place: Paris, City: France"));
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_summary_lists_joined_travel() {
        let mut app = app();
        app.state.form.apply(FieldChange::Name("Asha".to_string()));
        app.state.form.apply(FieldChange::Gender(Gender::Female));
        for (place, city) in [("Paris", "France"), ("Rome", "Italy")] {
            app.state.form.push_travel(TravelEntry {
                place: place.to_string(),
                city: city.to_string(),
            });
        }
        for _ in 0..3 {
            app.state.nav.next();
        }
        app.state.submission = Some(crate::submission::Submission::from_form(&app.state.form));

        let screen = render(&app);
        assert!(screen.contains("Thank you for submitting the form!"));
        assert!(screen.contains("Name: Asha"));
        assert!(screen.contains("Gender: female"));
        assert!(screen.contains("Places: Paris, Rome"));
        assert!(screen.contains("Cities: France, Italy"));
    }

    #[test]
    fn test_error_dialog_overlay() {
        let mut app = app();
        app.push_error("Export failed: disk full");
        let screen = render(&app);
        assert!(screen.contains("Export failed: disk full"));
        assert!(screen.contains("to dismiss"));
    }

    mod small_terminal {
        use super::*;

        fn education_app() -> App {
            let mut app = app();
            app.state.nav.next();
            app
        }

        #[test]
        fn test_education_inputs_keep_their_content() {
            let screen = render_at(&education_app(), 80, 24);
            assert!(screen.contains("2020"));
            assert!(screen.contains("[ ] Currently Pursuing"));
            assert!(screen.contains("more fields"));
        }

        #[test]
        fn test_focused_field_scrolls_into_view() {
            let mut app = education_app();
            app.state.focus = Focus::Field(FieldId::EndDate);
            let screen = render_at(&app, 80, 24);
            assert!(screen.contains("End Year *"));
            assert!(screen.contains("2024"));
            assert!(!screen.contains("more fields"));
        }

        #[test]
        fn test_status_bar_keeps_gate_warning_and_quit_hint() {
            let screen = render_at(&app(), 80, 24);
            let status = screen.lines().last().unwrap_or_default();
            assert!(status.contains("Required fields missing"));
            assert!(status.contains("^C^C:quit"));
        }
    }
}
