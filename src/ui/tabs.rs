// Header row: app name, the user currently on screen, and the tab chips.
// The Console chip carries a dot with the unread error count.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

const TABS: [Tab; 2] = [Tab::Profile, Tab::Console];

pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(30)]).areas(inner);

    frame.render_widget(Paragraph::new(title_line(app)), left);
    frame.render_widget(
        Paragraph::new(chips_line(app)).alignment(Alignment::Right),
        right,
    );
}

/// "ghprofile · <name>" once a profile has loaded.
fn title_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "ghprofile",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));

    match app.session.profile.profile() {
        Some(profile) => spans.push(Span::styled(
            profile.display_name().to_string(),
            Style::default().fg(Color::White),
        )),
        None => spans.push(Span::styled(
            "no profile yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    }
    Line::from(spans)
}

fn chips_line(app: &App) -> Line<'static> {
    let unread = app.session.console.unread_errors();
    let mut spans = Vec::new();

    for tab in TABS {
        let chip = if tab == app.active_tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", tab.title()), chip));

        if tab == Tab::Console && unread > 0 {
            spans.push(Span::styled(
                format!("●{}", unread),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
    }
    Line::from(spans)
}
