mod form_panel;
mod insights_panel;
mod layout;
mod message_area;
mod status_bar;
mod theme;
mod title_bar;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    title_bar::render(frame, app_layout.title_bar);
    form_panel::render(frame, &app_layout.fields, state);
    message_area::render(frame, app_layout.message_area, state);
    insights_panel::render(frame, app_layout.insights, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::form::FormField;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_confirmation_and_insights() {
        let mut state = AppState::new(AppConfig::default());
        state.mount();
        state.form.start_date.text = "2024-01-01".into();
        state.form.end_date.text = "2024-01-10".into();
        state.form.symptoms.text = "cramps".into();
        state.dispatch_submit();

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("Cycle added: Start Date: 2024-01-01"));
        assert!(text.contains("Predicted period 1: 07-02-2024"));
        assert!(text.contains("Start Date"));
    }

    #[test]
    fn test_long_input_scrolls_to_show_cursor() {
        let mut state = AppState::new(AppConfig::default());
        state.form.focus = FormField::Symptoms;
        state.form.symptoms.text =
            "cramps, headache, nausea, bloating, fatigue, backache, acne, insomnia".into();
        state.form.symptoms.cursor = state.form.symptoms.text.len();

        let mut terminal = Terminal::new(TestBackend::new(40, 24)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        assert!(screen_text(&terminal).contains("insomnia"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = AppState::new(AppConfig::default());
        state.form.focus = FormField::Symptoms;
        state.form.symptoms.text = "a very long list of symptoms".into();
        state.form.symptoms.cursor = state.form.symptoms.text.len();

        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
    }
}
