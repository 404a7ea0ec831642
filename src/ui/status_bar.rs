use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const KEY_HINTS: [(&str, &str); 4] = [
    ("Enter", "add cycle"),
    ("Tab", "next field"),
    ("Ctrl+U", "clear field"),
    ("Esc", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if state.config.ui.show_help {
        for (key, what) in KEY_HINTS {
            parts.push(Span::styled(format!(" {} ", key), Theme::key_hint()));
            parts.push(Span::styled(format!("{} ", what), Theme::status_bar()));
        }
    }

    // Focused field on the right
    let focus_name = state.form.focus.id();
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 4);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_ROSE).bg(Theme::BG_ELEVATED),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
