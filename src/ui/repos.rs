// Repository grid rendering.
// Two cards per row, remote order preserved, scrolled a row at a time.

use ratatui::{prelude::*, widgets::*};

use crate::format::{format_count, format_relative_time};
use crate::github::Repository;
use crate::state::profile::ProfileState;

const CARD_HEIGHT: u16 = 6;
const COLUMNS: usize = 2;

/// Draw the repository cards for the current page.
pub fn draw_grid(frame: &mut Frame, state: &ProfileState, loading: bool, area: Rect) {
    let repos = state.repositories();
    if repos.is_empty() {
        if loading {
            super::render_loading(frame, area, "Loading repositories");
        } else {
            super::render_empty(frame, area, "No repositories to show");
        }
        return;
    }

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let rows: Vec<&[Repository]> = repos
        .chunks(COLUMNS)
        .skip(state.scroll)
        .take(visible_rows)
        .collect();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows.len()])
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);

        for (repo, cell) in row.iter().zip(cells.iter()) {
            draw_card(frame, repo, *cell);
        }
    }
}

/// Draw a single repository card.
fn draw_card(frame: &mut Frame, repo: &Repository, area: Rect) {
    let muted = Style::default().fg(Color::DarkGray);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(muted)
        .title(Span::styled(
            format!(" {} ", repo.name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let description = match repo.description.as_deref() {
        Some(text) if !text.trim().is_empty() => {
            Span::styled(text.trim().to_string(), Style::default().fg(Color::Gray))
        }
        _ => Span::styled("No description", muted),
    };

    let mut footer = Vec::new();
    if let Some(license) = repo.license_code() {
        footer.push(Span::styled(
            format!("⚖ {}  ", license),
            Style::default().fg(Color::Green),
        ));
    }
    footer.push(Span::raw(format!("⑂ {}  ", format_count(Some(repo.forks_count)))));
    footer.push(Span::styled(
        format!("★ {}  ", format_count(Some(repo.stargazers_count))),
        Style::default().fg(Color::Yellow),
    ));
    footer.push(Span::styled(
        format!("updated {}", format_relative_time(&repo.updated_at)),
        muted,
    ));

    // Description wraps into the space above the footer line
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(description)).wrap(Wrap { trim: true }),
        parts[0],
    );
    frame.render_widget(Paragraph::new(Line::from(footer)), parts[1]);
}
