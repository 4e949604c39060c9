// ghprofile: terminal viewer for GitHub profiles and repositories.
// Loads config, builds the client, and runs the TUI until quit.

mod app;
mod config;
mod debounce;
mod error;
mod format;
mod github;
mod state;
mod ui;

use std::env;
use std::io;

use app::App;
use config::{Config, HANDLE_ENV, Loaded};
use github::GitHubClient;
use state::ConsoleMessage;

#[tokio::main]
async fn main() -> io::Result<()> {
    let (config, notes) = load_config();

    let client = GitHubClient::with_base_url(&config.api_base_url).map_err(io::Error::other)?;
    let mut app = App::new(&config, client);
    for note in notes {
        app.session.console.record(note);
    }
    app.start();

    let mut terminal = ratatui::try_init()?;
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}

/// Read the config file, writing defaults on first run, then apply the env override.
/// Problems are returned as console notes so they show up once the UI is running.
fn load_config() -> (Config, Vec<ConsoleMessage>) {
    let mut notes = Vec::new();

    let config = match config::config_path() {
        None => {
            notes.push(ConsoleMessage::warn(
                "No config directory available, using defaults",
            ));
            Config::default()
        }
        Some(path) => match Config::load_from(&path) {
            Ok(loaded) => {
                if let Loaded::Missing(defaults) = &loaded {
                    match defaults.save_to(&path) {
                        Ok(()) => notes.push(ConsoleMessage::info(format!(
                            "Wrote default config to {}",
                            path.display()
                        ))),
                        Err(e) => notes.push(ConsoleMessage::warn(format!(
                            "Could not write default config to {}: {}",
                            path.display(),
                            e
                        ))),
                    }
                }
                loaded.into_config()
            }
            Err(e) => {
                notes.push(ConsoleMessage::warn(format!(
                    "Ignoring unreadable config {}: {}",
                    path.display(),
                    e
                )));
                Config::default()
            }
        },
    };

    (config.with_handle_override(env::var(HANDLE_ENV).ok()), notes)
}
