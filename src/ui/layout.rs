use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one labelled input box.
pub const FIELD_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub title_bar: Rect,
    pub fields: [Rect; 3],
    pub message_area: Rect,
    pub insights: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: title | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title_bar = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Content: form fields | message | insights
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(4), // Message
            Constraint::Min(3),    // Insights
        ])
        .split(content);

    AppLayout {
        title_bar,
        fields: [content_chunks[0], content_chunks[1], content_chunks[2]],
        message_area: content_chunks[3],
        insights: content_chunks[4],
        status_bar,
    }
}
