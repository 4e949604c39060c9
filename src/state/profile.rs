// Profile view state management.
// Keeps the displayed profile and repository list in step with the current handle and view mode.

use crate::github::{Profile, Repository};

use super::Command;

/// Number of repositories shown while the view is truncated.
pub const TRUNCATED_LEN: usize = 4;

/// Whether the repository grid is capped or shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Truncated,
    Full,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Truncated => ViewMode::Full,
            ViewMode::Full => ViewMode::Truncated,
        }
    }

    /// Label for the control that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ViewMode::Truncated => "View all repositories",
            ViewMode::Full => "Show less",
        }
    }
}

/// Repositories kept from one fetch, already cut down for the requested mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryPage {
    pub items: Vec<Repository>,
    /// The unsliced fetch had more than [`TRUNCATED_LEN`] entries.
    pub has_more: bool,
}

impl RepositoryPage {
    /// Apply the truncation rule to a full fetch. Remote order is preserved.
    pub fn from_fetch(mut repos: Vec<Repository>, mode: ViewMode) -> Self {
        let has_more = repos.len() > TRUNCATED_LEN;
        if mode == ViewMode::Truncated {
            repos.truncate(TRUNCATED_LEN);
        }
        Self {
            items: repos,
            has_more,
        }
    }
}

/// Complete state for the profile view.
#[derive(Debug)]
pub struct ProfileState {
    handle: String,
    profile: Option<Profile>,
    page: RepositoryPage,
    view_mode: ViewMode,
    /// First visible row of the repository grid.
    pub scroll: usize,
}

impl ProfileState {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            profile: None,
            page: RepositoryPage::default(),
            view_mode: ViewMode::default(),
            scroll: 0,
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.page.items
    }

    pub fn has_more(&self) -> bool {
        self.page.has_more
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Fetches for whatever is currently selected (initial load, refresh).
    pub fn reload(&self) -> Vec<Command> {
        vec![self.fetch_profile(), self.fetch_repositories()]
    }

    /// Switch to a new handle. Re-selecting the current handle only resets the view mode.
    pub fn set_handle(&mut self, handle: &str) -> Vec<Command> {
        let mode_reset = self.view_mode != ViewMode::Truncated;
        self.view_mode = ViewMode::Truncated;

        if handle == self.handle {
            return if mode_reset {
                vec![self.fetch_repositories()]
            } else {
                Vec::new()
            };
        }

        self.handle = handle.to_string();
        self.scroll = 0;
        self.reload()
    }

    /// Flip between truncated and full. Inert while nothing is hidden.
    pub fn toggle_view_mode(&mut self) -> Vec<Command> {
        if !self.page.has_more {
            return Vec::new();
        }
        self.view_mode = self.view_mode.toggled();
        vec![self.fetch_repositories()]
    }

    /// Replace the profile wholesale.
    pub fn profile_loaded(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    /// Replace the repository list wholesale, sliced for the mode the fetch was issued with.
    pub fn repositories_loaded(&mut self, repos: Vec<Repository>, mode: ViewMode) {
        self.page = RepositoryPage::from_fetch(repos, mode);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Scroll the grid up one row.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll the grid down one row.
    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.max_scroll());
    }

    /// Last scroll position that still shows a row (two cards per row).
    fn max_scroll(&self) -> usize {
        self.page.items.len().div_ceil(2).saturating_sub(1)
    }

    fn fetch_profile(&self) -> Command {
        Command::FetchProfile {
            handle: self.handle.clone(),
        }
    }

    fn fetch_repositories(&self) -> Command {
        Command::FetchRepositories {
            handle: self.handle.clone(),
            mode: self.view_mode,
        }
    }
}
