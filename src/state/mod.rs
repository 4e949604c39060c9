// State management module.
// Controllers for search suggestions and the profile view, plus the console log.

use std::time::Duration;

pub mod console;
pub mod profile;
pub mod session;
pub mod suggestions;

pub use console::{ConsoleLevel, ConsoleMessage};
pub use profile::ViewMode;
pub use session::Session;

/// Side effect requested by a controller, carried out by the app runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the profile for a handle.
    FetchProfile { handle: String },
    /// Load the repository list, to be sliced for `mode` on arrival.
    FetchRepositories { handle: String, mode: ViewMode },
    /// Start the debounce timer, replacing any running one.
    ScheduleSearch { ticket: u64, delay: Duration },
    /// Stop the debounce timer, if any.
    CancelSearch,
    /// Search users for the query text.
    SearchUsers { query: String },
}
