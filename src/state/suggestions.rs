// Suggestion dropdown state management.
// Turns raw keystrokes into at most one user search per quiet period.

use std::time::Duration;

use ratatui::widgets::ListState;

use crate::github::Suggestion;

use super::Command;

/// Quiet period after the last keystroke before searching.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Suggestions kept from a search response (first N, service order).
pub const MAX_SUGGESTIONS: usize = 5;

/// Search box text, the dropdown entries, and the pending debounce ticket.
#[derive(Debug)]
pub struct SuggestionState {
    query: String,
    suggestions: Vec<Suggestion>,
    /// Ticket of the only debounce timer allowed to fire.
    pending: Option<u64>,
    next_ticket: u64,
    debounce: Duration,
    /// Highlighted dropdown row.
    pub list_state: ListState,
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl SuggestionState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            pending: None,
            next_ticket: 0,
            debounce,
            list_state: ListState::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the query text, superseding any scheduled search.
    ///
    /// Blank text clears the dropdown right away and schedules nothing.
    pub fn set_query(&mut self, text: &str) -> Vec<Command> {
        self.query = text.to_string();

        if text.trim().is_empty() {
            self.pending = None;
            self.clear_suggestions();
            return vec![Command::CancelSearch];
        }

        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        vec![Command::ScheduleSearch {
            ticket: self.next_ticket,
            delay: self.debounce,
        }]
    }

    /// A debounce timer fired. Only the pending ticket turns into a search.
    pub fn debounce_elapsed(&mut self, ticket: u64) -> Option<Command> {
        if self.pending != Some(ticket) {
            return None;
        }
        self.pending = None;
        Some(Command::SearchUsers {
            query: self.query.clone(),
        })
    }

    /// Store search results, keeping the first [`MAX_SUGGESTIONS`].
    ///
    /// Results landing after the query was cleared or a handle was chosen are dropped.
    pub fn suggestions_loaded(&mut self, mut suggestions: Vec<Suggestion>) {
        if self.query.trim().is_empty() {
            return;
        }
        suggestions.truncate(MAX_SUGGESTIONS);
        self.suggestions = suggestions;
        self.list_state.select(None);
    }

    /// Forget the query, the dropdown, and any scheduled search.
    pub fn reset(&mut self) -> Command {
        self.query.clear();
        self.pending = None;
        self.clear_suggestions();
        Command::CancelSearch
    }

    /// Trimmed query text if it names a handle.
    pub fn committed_handle(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Handle of the highlighted dropdown row.
    pub fn highlighted_handle(&self) -> Option<&str> {
        let index = self.list_state.selected()?;
        self.suggestions.get(index).map(|s| s.login.as_str())
    }

    /// Highlight the next dropdown row.
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        let i = match self.list_state.selected() {
            Some(i) if i >= last => last,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Highlight the previous dropdown row; from the top row, drop the highlight.
    pub fn select_prev(&mut self) {
        match self.list_state.selected() {
            Some(0) | None => self.list_state.select(None),
            Some(i) => self.list_state.select(Some(i - 1)),
        }
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.list_state.select(None);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn suggestions(count: u64) -> Vec<Suggestion> {
        (1..=count)
            .map(|id| Suggestion {
                id,
                login: format!("user-{}", id),
                avatar_url: format!("https://example.com/{}.png", id),
                bio: None,
            })
            .collect()
    }

    fn scheduled_ticket(commands: &[Command]) -> u64 {
        match commands {
            [Command::ScheduleSearch { ticket, delay }] => {
                assert_eq!(*delay, SEARCH_DEBOUNCE);
                *ticket
            }
            other => panic!("expected a single ScheduleSearch, got {other:?}"),
        }
    }

    #[test]
    fn test_only_latest_ticket_searches() {
        let mut state = SuggestionState::default();

        let first = scheduled_ticket(&state.set_query("o"));
        let second = scheduled_ticket(&state.set_query("oc"));
        let third = scheduled_ticket(&state.set_query("oct"));
        assert!(first < second && second < third);

        assert_eq!(state.debounce_elapsed(first), None);
        assert_eq!(state.debounce_elapsed(second), None);
        assert_eq!(
            state.debounce_elapsed(third),
            Some(Command::SearchUsers {
                query: "oct".to_string()
            })
        );

        // A ticket fires at most once
        assert_eq!(state.debounce_elapsed(third), None);
        assert!(!state.is_pending());
    }

    #[test]
    fn test_search_uses_raw_text() {
        let mut state = SuggestionState::default();
        let ticket = scheduled_ticket(&state.set_query("  octo "));

        assert_eq!(
            state.debounce_elapsed(ticket),
            Some(Command::SearchUsers {
                query: "  octo ".to_string()
            })
        );
    }

    #[test]
    fn test_blank_query_clears_immediately() {
        let mut state = SuggestionState::default();
        let ticket = scheduled_ticket(&state.set_query("oct"));
        state.suggestions_loaded(suggestions(3));

        for blank in ["", "   ", "\t"] {
            assert_eq!(state.set_query(blank), vec![Command::CancelSearch]);
            assert!(state.suggestions().is_empty());
            assert!(!state.is_pending());
        }

        // The superseded timer is ignored even if it fires late
        assert_eq!(state.debounce_elapsed(ticket), None);
    }

    #[test]
    fn test_late_results_after_clear_are_dropped() {
        let mut state = SuggestionState::default();
        let ticket = scheduled_ticket(&state.set_query("oct"));
        assert!(state.debounce_elapsed(ticket).is_some());

        state.set_query("");
        state.suggestions_loaded(suggestions(3));
        assert!(state.suggestions().is_empty());

        state.set_query("oct");
        state.reset();
        state.suggestions_loaded(suggestions(3));
        assert!(state.suggestions().is_empty());
    }

    #[test]
    fn test_results_truncated_to_five() {
        let mut state = SuggestionState::default();
        state.set_query("user");
        state.suggestions_loaded(suggestions(30));

        let logins: Vec<&str> = state.suggestions().iter().map(|s| s.login.as_str()).collect();
        assert_eq!(logins, ["user-1", "user-2", "user-3", "user-4", "user-5"]);
    }

    #[test]
    fn test_reset() {
        let mut state = SuggestionState::default();
        let ticket = scheduled_ticket(&state.set_query("oct"));
        state.suggestions_loaded(suggestions(2));
        state.select_next();

        assert_eq!(state.reset(), Command::CancelSearch);
        assert_eq!(state.query(), "");
        assert!(state.suggestions().is_empty());
        assert_eq!(state.list_state.selected(), None);
        assert_eq!(state.debounce_elapsed(ticket), None);
    }

    #[test]
    fn test_committed_handle() {
        let mut state = SuggestionState::default();
        assert_eq!(state.committed_handle(), None);

        state.set_query("   ");
        assert_eq!(state.committed_handle(), None);

        state.set_query("  torvalds ");
        assert_eq!(state.committed_handle().as_deref(), Some("torvalds"));
    }

    #[test]
    fn test_highlight_navigation() {
        let mut state = SuggestionState::default();
        state.select_next();
        assert_eq!(state.highlighted_handle(), None);

        state.set_query("user");
        state.suggestions_loaded(suggestions(2));
        state.select_next();
        assert_eq!(state.highlighted_handle(), Some("user-1"));
        state.select_next();
        state.select_next();
        assert_eq!(state.highlighted_handle(), Some("user-2"));

        state.select_prev();
        state.select_prev();
        assert_eq!(state.highlighted_handle(), None);

        // New results drop the highlight
        state.select_next();
        state.suggestions_loaded(suggestions(4));
        assert_eq!(state.highlighted_handle(), None);
    }
}
