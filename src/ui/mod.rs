// UI module for rendering the TUI.
// Contains the search box, profile view, repository grid, console, and overlays.

mod profile;
mod repos;
mod suggestions;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Focus, Tab};
use crate::format::format_relative_time;
use crate::state::ConsoleLevel;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_search_box(frame, app, chunks[1]);

    match app.active_tab {
        Tab::Profile => draw_profile_tab(frame, app, chunks[2]),
        Tab::Console => draw_console_tab(frame, app, chunks[2]),
    }

    draw_status_bar(frame, app, chunks[3]);

    // Dropdown hangs below the search box, over the content
    if dropdown_visible(app) {
        suggestions::draw_dropdown(frame, &mut app.session.suggestions, chunks[1]);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn dropdown_visible(app: &App) -> bool {
    app.active_tab == Tab::Profile
        && app.focus == Focus::Search
        && !app.show_help
        && !app.session.suggestions.suggestions().is_empty()
}

/// Render an empty state message.
pub(crate) fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render a loading indicator.
pub(crate) fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Draw the search input.
fn draw_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.active_tab == Tab::Profile && app.focus == Focus::Search;
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };

    let title = if app.session.suggestions.is_pending() {
        " Search (waiting for typing to settle) "
    } else {
        " Search "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    let query = app.session.suggestions.query();
    let mut spans = vec![Span::raw("🔍 ")];
    if query.is_empty() && !focused {
        spans.push(Span::styled("Username", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::raw(query));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }

    let input = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(input, area);
}

/// Draw the Profile tab: header, repository grid, and the view toggle.
fn draw_profile_tab(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(profile::HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let state = &app.session.profile;
    profile::draw_header(frame, state, chunks[0]);
    repos::draw_grid(frame, state, app.in_flight > 0, chunks[1]);

    if state.has_more() {
        let toggle = Line::from(vec![
            Span::styled("v ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.view_mode().toggle_label(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(toggle).alignment(Alignment::Center),
            chunks[2],
        );
    }
}

/// Draw the Console tab: newest entry on top, one line per entry.
fn draw_console_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let console = &mut app.session.console;
    let errors = console
        .messages()
        .iter()
        .filter(|m| m.level == ConsoleLevel::Error)
        .count();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(
            " Activity · {} logged, {} failed ",
            console.messages().len(),
            errors
        ));

    if console.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty(frame, inner, "Nothing logged yet");
        return;
    }

    let rows: Vec<ListItem> = console
        .messages()
        .iter()
        .rev()
        .map(|msg| {
            let (tag, color) = level_tag(msg.level);
            ListItem::new(Line::from(vec![
                Span::styled(
                    tag,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {:>16}  ", format_relative_time(&msg.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(msg.message.clone()),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, area, &mut console.list_state);
}

fn level_tag(level: ConsoleLevel) -> (&'static str, Color) {
    match level {
        ConsoleLevel::Info => ("INFO", Color::Cyan),
        ConsoleLevel::Warn => ("WARN", Color::Yellow),
        ConsoleLevel::Error => ("FAIL", Color::Red),
    }
}

/// Draw the status bar with keybinding hints and request activity.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = |key: &'static str, label: &'static str| {
        [
            Span::raw(key),
            Span::styled(label, Style::default().fg(Color::DarkGray)),
        ]
    };

    let mut hints: Vec<Span> = match (app.active_tab, app.focus) {
        (Tab::Profile, Focus::Search) => [
            hint(" type ", "Search"),
            hint("  ↑↓ ", "Pick"),
            hint("  ↵ ", "Open"),
            hint("  Esc ", "Browse"),
            hint("  Tab ", "Switch"),
            hint("  ^C ", "Quit"),
        ]
        .concat(),
        (Tab::Profile, Focus::Browse) => [
            hint(" / ", "Search"),
            hint("  v ", "View all/less"),
            hint("  ↑↓ ", "Scroll"),
            hint("  r ", "Refresh"),
            hint("  Tab ", "Switch"),
            hint("  ? ", "Help"),
            hint("  q ", "Quit"),
        ]
        .concat(),
        (Tab::Console, _) => [
            hint(" ↑↓ ", "Navigate"),
            hint("  Esc ", "Back"),
            hint("  Tab ", "Switch"),
            hint("  ? ", "Help"),
            hint("  q ", "Quit"),
        ]
        .concat(),
    };

    if app.in_flight > 0 {
        hints.push(Span::styled(
            format!("  ⏳ {} loading", app.in_flight),
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 55.min(area.width);
    let popup_height = 20.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Cyan);
    let entry = |key: &'static str, action: &'static str| {
        Line::from(vec![Span::styled(key, key_style), Span::raw(action)])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(Span::styled("Search", Style::default().fg(Color::Yellow))),
        entry("  type          ", "Suggest users as you type"),
        entry("  ↑/↓           ", "Highlight a suggestion"),
        entry("  Enter         ", "Open highlighted or typed user"),
        entry("  Ctrl+U        ", "Clear search"),
        entry("  Esc           ", "Leave search"),
        Line::from(""),
        Line::from(Span::styled("Browse", Style::default().fg(Color::Yellow))),
        entry("  / or s        ", "Focus search"),
        entry("  v or Space    ", "View all / show less"),
        entry("  ↑/↓ or k/j    ", "Scroll repositories"),
        entry("  r             ", "Refresh current user"),
        entry("  Tab           ", "Switch tabs"),
        entry("  q             ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::Config;
    use crate::github::{GitHubClient, Profile};
    use crate::state::ViewMode;
    use crate::state::profile::tests::repos;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App {
        let client = GitHubClient::with_base_url("http://127.0.0.1:9").unwrap();
        App::new(&Config::default(), client)
    }

    #[test]
    fn test_toggle_label_follows_mode() {
        let mut app = app();
        app.session
            .repositories_fetched("github", ViewMode::Truncated, Ok(repos(6)));

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("View all repositories"));
        assert!(text.contains("repo-4"));
        assert!(!text.contains("repo-5"));
    }

    #[test]
    fn test_toggle_hidden_without_more() {
        let mut app = app();
        app.session
            .repositories_fetched("github", ViewMode::Truncated, Ok(repos(3)));

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("repo-3"));
        assert!(!text.contains("View all repositories"));
        assert!(!text.contains("Show less"));
    }

    #[test]
    fn test_header_shows_loaded_user_and_badge() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("no profile yet"));

        app.session.profile_fetched(
            "github",
            Ok(Profile {
                id: Some(9919),
                login: "github".to_string(),
                name: Some("GitHub".to_string()),
                bio: None,
                avatar_url: "https://example.com/gh.png".to_string(),
                followers: 1234,
                following: 0,
                location: None,
            }),
        );
        app.session.console.log_error("Failed fetching data repository: github: boom");

        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("ghprofile · GitHub"));
        assert!(text.contains("●1"));
        assert!(text.contains("1,234"));
    }

    #[test]
    fn test_console_tab_lists_errors() {
        let mut app = app();
        app.session
            .console
            .log_error("Failed fetching data user: github: boom");
        app.active_tab = Tab::Console;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Failed fetching data user"));
        assert!(text.contains("1 logged, 1 failed"));
        assert!(text.contains("FAIL"));
    }
}
