// App state and main event loop.
// Dispatches keys to the session, runs the resulting commands, and applies fetch results.

use std::future::Future;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::github::{GitHubClient, Profile, Repository, Suggestion};
use crate::state::{Command, Session, ViewMode};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Profile,
    Console,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Console => "Console",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Profile => Tab::Console,
            Tab::Console => Tab::Profile,
        }
    }

    pub fn prev(&self) -> Self {
        // Two tabs: cycling either way lands on the other one
        self.next()
    }
}

/// Where keystrokes go on the Profile tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing edits the search box.
    #[default]
    Search,
    /// Single-key commands (toggle view, scroll, refresh).
    Browse,
}

/// Fetch results and timer firings delivered back to the event loop.
#[derive(Debug)]
pub enum AppEvent {
    ProfileFetched {
        handle: String,
        result: Result<Profile>,
    },
    RepositoriesFetched {
        handle: String,
        mode: ViewMode,
        result: Result<Vec<Repository>>,
    },
    SuggestionsFetched {
        query: String,
        result: Result<Vec<Suggestion>>,
    },
    SearchDue {
        ticket: u64,
    },
}

/// Main application state.
pub struct App {
    /// Profile, repositories, suggestions, and console.
    pub session: Session,
    /// Currently active tab.
    pub active_tab: Tab,
    /// Keyboard focus on the Profile tab.
    pub focus: Focus,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Fetches spawned whose results have not arrived yet.
    pub in_flight: usize,
    /// Whether the app should exit.
    pub should_quit: bool,
    client: GitHubClient,
    debouncer: Debouncer,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: &Config, client: GitHubClient) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(&config.default_handle, config.debounce()),
            active_tab: Tab::default(),
            focus: Focus::default(),
            show_help: false,
            in_flight: 0,
            should_quit: false,
            client,
            debouncer: Debouncer::new(),
            events_tx,
            events_rx,
        }
    }

    /// Kick off the initial profile and repository load.
    pub fn start(&mut self) {
        let commands = self.session.start();
        self.execute(commands);
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.drain_events();
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Apply every result that has arrived since the last frame.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Wait for the next result or timer firing.
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ProfileFetched { handle, result } => {
                self.finish_fetch();
                self.session.profile_fetched(&handle, result);
            }
            AppEvent::RepositoriesFetched {
                handle,
                mode,
                result,
            } => {
                self.finish_fetch();
                self.session.repositories_fetched(&handle, mode, result);
            }
            AppEvent::SuggestionsFetched { query, result } => {
                self.finish_fetch();
                self.session.suggestions_fetched(&query, result);
            }
            AppEvent::SearchDue { ticket } => {
                let commands = self.session.search_due(ticket);
                self.execute(commands);
            }
        }
        self.clear_console_badge_if_viewing();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.switch_tab(self.active_tab.next()),
            KeyCode::BackTab => self.switch_tab(self.active_tab.prev()),
            _ => match (self.active_tab, self.focus) {
                (Tab::Profile, Focus::Search) => self.handle_search_key(key),
                (Tab::Profile, Focus::Browse) => self.handle_browse_key(key),
                (Tab::Console, _) => self.handle_console_key(key),
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let commands = match key.code {
            KeyCode::Char('u') if ctrl => self.session.text_changed(""),
            KeyCode::Char(c) if !ctrl => {
                let mut text = self.session.suggestions.query().to_string();
                text.push(c);
                self.session.text_changed(&text)
            }
            KeyCode::Backspace => {
                let mut text = self.session.suggestions.query().to_string();
                if text.pop().is_none() {
                    return;
                }
                self.session.text_changed(&text)
            }
            KeyCode::Enter => match self.session.suggestions.highlighted_handle() {
                Some(handle) => {
                    let handle = handle.to_string();
                    self.session.suggestion_clicked(&handle)
                }
                None => self.session.commit(),
            },
            KeyCode::Down => {
                self.session.suggestions.select_next();
                return;
            }
            KeyCode::Up => {
                self.session.suggestions.select_prev();
                return;
            }
            KeyCode::Esc => {
                self.focus = Focus::Browse;
                return;
            }
            _ => return,
        };
        self.execute(commands);
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let commands = match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.focus = Focus::Search;
                return;
            }
            KeyCode::Char('v') | KeyCode::Char(' ') => self.session.toggle_view(),
            KeyCode::Char('r') => self.session.refresh(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.session.profile.scroll_up();
                return;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.session.profile.scroll_down();
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            _ => return,
        };
        self.execute(commands);
    }

    fn handle_console_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.session.console.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.session.console.select_next(),
            KeyCode::Esc => self.switch_tab(Tab::Profile),
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.clear_console_badge_if_viewing();
    }

    /// Clear console badge when viewing console tab.
    fn clear_console_badge_if_viewing(&mut self) {
        if self.active_tab == Tab::Console {
            self.session.console.mark_read();
        }
    }

    /// Carry out controller commands: spawn fetches and drive the debounce timer.
    fn execute(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::FetchProfile { handle } => {
                    let client = self.client.clone();
                    self.spawn_fetch(async move {
                        let result = client.get_user(&handle).await;
                        AppEvent::ProfileFetched { handle, result }
                    });
                }
                Command::FetchRepositories { handle, mode } => {
                    let client = self.client.clone();
                    self.spawn_fetch(async move {
                        let result = client.get_user_repos(&handle).await;
                        AppEvent::RepositoriesFetched {
                            handle,
                            mode,
                            result,
                        }
                    });
                }
                Command::SearchUsers { query } => {
                    let client = self.client.clone();
                    self.spawn_fetch(async move {
                        let result = client.search_users(&query).await;
                        AppEvent::SuggestionsFetched { query, result }
                    });
                }
                Command::ScheduleSearch { ticket, delay } => {
                    let tx = self.events_tx.clone();
                    self.debouncer.schedule(delay, move || {
                        let _ = tx.send(AppEvent::SearchDue { ticket });
                    });
                }
                Command::CancelSearch => self.debouncer.cancel(),
            }
        }
    }

    /// Run a fetch in the background and post its result to the event loop.
    fn spawn_fetch<F>(&mut self, fetch: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(fetch.await);
        });
    }

    fn finish_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
