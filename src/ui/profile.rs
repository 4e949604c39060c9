// Profile header rendering.
// Name, bio, follower stats, location, and avatar link for the current user.

use ratatui::{prelude::*, widgets::*};

use crate::format::format_count;
use crate::state::profile::ProfileState;

/// Rows taken by the header, borders included.
pub const HEADER_HEIGHT: u16 = 7;

/// Draw the header for the current profile, or a loading line before the first fetch lands.
pub fn draw_header(frame: &mut Frame, state: &ProfileState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" @{} ", state.handle()));

    let Some(profile) = state.profile() else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        super::render_loading(frame, inner, &format!("Loading {}", state.handle()));
        return;
    };

    let muted = Style::default().fg(Color::DarkGray);
    let pill_label = Style::default().fg(Color::Gray);

    let bio = match profile.bio.as_deref() {
        Some(bio) if !bio.trim().is_empty() => Span::raw(bio.trim().to_string()),
        _ => Span::styled("No bio", muted),
    };

    let location = match profile.location.as_deref() {
        Some(location) => Span::raw(location.to_string()),
        None => Span::styled("No location", muted),
    };

    let lines = vec![
        Line::from(Span::styled(
            profile.display_name().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(bio),
        Line::from(vec![
            Span::styled("Followers │ ", pill_label),
            Span::raw(format_count(Some(profile.followers))),
            Span::raw("   "),
            Span::styled("Following │ ", pill_label),
            Span::raw(format_count(Some(profile.following))),
            Span::raw("   "),
            Span::styled("Location │ ", pill_label),
            location,
        ]),
        Line::from(""),
        Line::from(Span::styled(profile.avatar_url.clone(), muted)),
    ];

    let header = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}
