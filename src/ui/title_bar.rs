use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);
    let today = Local::now().format("%Y-%m-%d").to_string();

    let line = Line::from(vec![
        Span::styled(
            " cycletrack ",
            Style::default()
                .fg(Theme::ACCENT_ROSE)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED)),
        Span::styled(
            format!("today {}", today),
            Style::default().fg(Theme::TEXT_MUTED).bg(Theme::BG_ELEVATED),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).style(bg), area);
}
