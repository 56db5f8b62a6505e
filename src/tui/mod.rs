// src/tui/mod.rs
// =============================================================================
// This module runs the interactive tree browser.
//
// Flow:
// 1. Spawn the tree fetch as a background tokio task so the terminal stays
//    responsive while the network call runs
// 2. Put the terminal into raw mode + the alternate screen
// 3. Loop: drain the (single) fetch message, draw, poll for input at 100 ms
// 4. Restore the terminal on the way out, whatever happened
//
// The fetch task is the only producer and it produces exactly one message;
// the event loop is the only writer of the application state. There is no
// shared mutable anything.
//
// Terminal restoration lives in a Drop guard: a panic inside the draw loop
// must not leave the user's shell in raw mode.
// =============================================================================

mod app;
mod tree;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::github::{self, FetchError, TreeListing};
use app::{BrowserApp, LoadState};

// Restores the terminal when dropped, even on panic
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

// Runs the browser for one repository
//
// Parameters:
//   owner, name: the parsed repository identifier
//   token: optional bearer token for the API
//
// Returns: the process exit code. A session whose fetch failed exits with 1
// after the user leaves, the same as an unresolvable fetch in report mode.
pub async fn run_browser(owner: &str, name: &str, token: Option<&str>) -> Result<i32> {
    let client = github::build_client(token)?;
    let repo = format!("{}/{}", owner, name);

    // The single-message channel between the fetch task and the event loop
    let (tx, mut rx) = mpsc::channel::<Result<TreeListing, FetchError>>(1);

    let fetch_owner = owner.to_string();
    let fetch_name = name.to_string();
    tokio::spawn(async move {
        let outcome =
            github::fetch_tree_with_fallback(&client, &fetch_owner, &fetch_name).await;
        // The receiver disappears if the user quits early; nothing to do then
        let _ = tx.send(outcome).await;
    });

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = BrowserApp::new(&repo);

    loop {
        // Apply the fetch outcome the moment it arrives
        if let Ok(outcome) = rx.try_recv() {
            match outcome {
                Ok(listing) => app.set_listing(listing),
                Err(e) => app.set_error(e.to_string()),
            }
        }

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Ignore key releases; Windows terminals report both edges
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key) {
                    break;
                }
            }
        }
    }

    let exit_code = match app.state() {
        LoadState::Failed(_) => 1,
        _ => 0,
    };
    Ok(exit_code)
}
