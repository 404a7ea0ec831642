use crate::app::state::*;
use crate::form::FormField;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::StartDate | FormField::EndDate => "YYYY-MM-DD",
        FormField::Symptoms => "comma-separated, e.g. cramps, headache",
    }
}

pub fn render(frame: &mut Frame, areas: &[Rect; 3], state: &AppState) {
    for (field, area) in FormField::ALL.into_iter().zip(areas.iter()) {
        render_field(frame, *area, state, field);
    }
}

fn render_field(frame: &mut Frame, area: Rect, state: &AppState, field: FormField) {
    let focused = state.form.focus == field;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_style(if focused { Theme::title() } else { Theme::label() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = state.form.input(field);
    let cursor_col = input.text[..input.cursor].width();
    let (scroll, cursor_offset) = horizontal_window(cursor_col, inner.width);

    let paragraph = if input.text.is_empty() && !focused {
        Paragraph::new(Span::styled(placeholder(field), Theme::placeholder()))
    } else {
        Paragraph::new(Span::styled(input.text.as_str(), Theme::input_text())).scroll((0, scroll))
    };
    frame.render_widget(paragraph, inner);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x.saturating_add(cursor_offset), inner.y));
    }
}

/// Horizontal scroll and cursor column inside a box `width` cells wide, so
/// the cursor at display column `cursor_col` stays visible.
fn horizontal_window(cursor_col: usize, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let last = usize::from(width) - 1;
    let scroll = u16::try_from(cursor_col.saturating_sub(last)).unwrap_or(u16::MAX);
    let offset = cursor_col.saturating_sub(usize::from(scroll)).min(last);
    (scroll, offset as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_does_not_scroll() {
        assert_eq!(horizontal_window(0, 20), (0, 0));
        assert_eq!(horizontal_window(19, 20), (0, 19));
    }

    #[test]
    fn test_long_input_scrolls_to_cursor() {
        assert_eq!(horizontal_window(20, 20), (1, 19));
        assert_eq!(horizontal_window(100, 20), (81, 19));
    }

    #[test]
    fn test_oversized_input_saturates() {
        let (scroll, offset) = horizontal_window(200_000, 10);
        assert_eq!(scroll, u16::MAX);
        assert_eq!(offset, 9);
        assert_eq!(horizontal_window(5, 0), (0, 0));
    }
}
