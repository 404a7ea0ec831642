use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Insights ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut items: Vec<ListItem> = Vec::new();

    match &state.insights {
        Some(insights) if !insights.is_empty() => {
            for line in insights.lines() {
                let style = if line.starts_with("Tip:") {
                    Theme::tip()
                } else {
                    Theme::insight()
                };
                items.push(ListItem::new(Span::styled(format!(" {}", line), style)));
            }
        }
        _ => {
            items.push(ListItem::new(Span::styled(
                " Predictions appear after a cycle is added",
                Theme::placeholder(),
            )));
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
