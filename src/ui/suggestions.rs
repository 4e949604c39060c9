// Suggestion dropdown rendering.
// Floating list under the search box; each row shows the handle and bio.

use ratatui::{prelude::*, widgets::*};

use crate::state::suggestions::SuggestionState;

const MAX_WIDTH: u16 = 60;

/// Draw the dropdown directly below `anchor` (the search box).
pub fn draw_dropdown(frame: &mut Frame, state: &mut SuggestionState, anchor: Rect) {
    let screen = frame.area();
    let top = anchor.y + anchor.height;
    if top >= screen.height {
        return;
    }

    // Two lines per entry plus borders
    let wanted = state.suggestions().len() as u16 * 2 + 2;
    let height = wanted.min(screen.height - top);
    let width = anchor.width.min(MAX_WIDTH);
    let area = Rect::new(anchor.x, top, width, height);

    // Clear the area behind the dropdown
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = state
        .suggestions()
        .iter()
        .map(|suggestion| {
            let bio = match suggestion.bio.as_deref() {
                Some(bio) if !bio.trim().is_empty() => {
                    Span::styled(bio.trim().to_string(), Style::default().fg(Color::Gray))
                }
                _ => Span::styled("No bio", Style::default().fg(Color::DarkGray)),
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    suggestion.login.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![Span::raw("  "), bio]),
            ])
        })
        .collect();

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Suggestions "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut state.list_state);
}
