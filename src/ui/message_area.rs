use crate::app::state::*;
use crate::form::{MessageClass, MESSAGE_ID};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" {} ", MESSAGE_ID))
        .title_style(Theme::label())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let style = match state.message.class {
        Some(MessageClass::Success) => Theme::success_message(),
        Some(MessageClass::Error) => Theme::error_message(),
        None => Theme::placeholder(),
    };

    let text = if state.message.class.is_none() {
        "Fill in the dates and press Enter to add a cycle."
    } else {
        state.message.text.as_str()
    };

    let paragraph = Paragraph::new(Span::styled(text, style))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
