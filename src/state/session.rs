// Session state: the single bundle the UI reads and the event loop mutates.
// Routes user intents and fetch results to the suggestion and profile controllers.

use std::time::Duration;

use crate::error::Result;
use crate::github::{Profile, Repository, Suggestion};

use super::Command;
use super::console::Console;
use super::profile::{ProfileState, ViewMode};
use super::suggestions::SuggestionState;

#[derive(Debug)]
pub struct Session {
    pub suggestions: SuggestionState,
    pub profile: ProfileState,
    pub console: Console,
}

impl Session {
    pub fn new(default_handle: &str, debounce: Duration) -> Self {
        Self {
            suggestions: SuggestionState::new(debounce),
            profile: ProfileState::new(default_handle),
            console: Console::new(),
        }
    }

    /// Initial load for the default handle.
    pub fn start(&mut self) -> Vec<Command> {
        self.console
            .log_info(format!("Loading profile for {}", self.profile.handle()));
        self.profile.reload()
    }

    /// Search box text changed.
    pub fn text_changed(&mut self, text: &str) -> Vec<Command> {
        self.suggestions.set_query(text)
    }

    /// Confirm key pressed in the search box: look up the typed handle.
    pub fn commit(&mut self) -> Vec<Command> {
        match self.suggestions.committed_handle() {
            Some(handle) => self.select_handle(&handle),
            None => Vec::new(),
        }
    }

    /// A dropdown entry was chosen.
    pub fn suggestion_clicked(&mut self, handle: &str) -> Vec<Command> {
        self.select_handle(handle)
    }

    /// "View all" / "Show less" pressed.
    pub fn toggle_view(&mut self) -> Vec<Command> {
        let commands = self.profile.toggle_view_mode();
        if !commands.is_empty() {
            let message = match self.profile.view_mode() {
                ViewMode::Full => "Showing all repositories",
                ViewMode::Truncated => "Showing first repositories only",
            };
            self.console.log_info(message);
        }
        commands
    }

    /// Re-issue both fetches for the current handle and mode.
    pub fn refresh(&mut self) -> Vec<Command> {
        self.console
            .log_info(format!("Refreshing {}", self.profile.handle()));
        self.profile.reload()
    }

    /// A debounce timer fired.
    pub fn search_due(&mut self, ticket: u64) -> Vec<Command> {
        self.suggestions.debounce_elapsed(ticket).into_iter().collect()
    }

    pub fn profile_fetched(&mut self, handle: &str, result: Result<Profile>) {
        match result {
            Ok(profile) => self.profile.profile_loaded(profile),
            Err(e) => self
                .console
                .log_error(format!("Failed fetching data user: {}: {}", handle, e)),
        }
    }

    pub fn repositories_fetched(
        &mut self,
        handle: &str,
        mode: ViewMode,
        result: Result<Vec<Repository>>,
    ) {
        match result {
            Ok(repos) => self.profile.repositories_loaded(repos, mode),
            Err(e) => self.console.log_error(format!(
                "Failed fetching data repository: {}: {}",
                handle, e
            )),
        }
    }

    pub fn suggestions_fetched(&mut self, query: &str, result: Result<Vec<Suggestion>>) {
        match result {
            Ok(suggestions) => self.suggestions.suggestions_loaded(suggestions),
            Err(e) => self.console.log_error(format!(
                "Failed fetching suggestions: {:?}: {}",
                query, e
            )),
        }
    }

    /// Clears the search state and hands the handle to the profile view.
    fn select_handle(&mut self, handle: &str) -> Vec<Command> {
        let mut commands = vec![self.suggestions.reset()];
        if handle != self.profile.handle() {
            self.console
                .log_info(format!("Loading profile for {}", handle));
        }
        commands.extend(self.profile.set_handle(handle));
        commands
    }
}
