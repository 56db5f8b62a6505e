// src/tui/app.rs
// =============================================================================
// This module holds the browser's state and drawing code.
//
// The state machine is deliberately tiny:
//
//   Loading ──fetch ok──> Ready
//      └─────fetch err──> Failed
//
// Exactly one transition happens per session, applied by the event loop when
// the background fetch delivers its single message. After that the listing
// is an immutable snapshot; navigation only touches the cursor and the
// expand/collapse set.
//
// Key bindings: arrows or j/k move, Enter/Space toggles a directory,
// q/Esc/Ctrl-C quits.
// =============================================================================

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::collections::HashSet;

use super::tree::{build_tree, visible_rows, TreeNode};
use crate::github::TreeListing;

// Where the session stands with respect to the one fetch it performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The background fetch is still running
    Loading,
    /// The listing arrived and the tree is navigable
    Ready,
    /// The fetch failed; the message explains why
    Failed(String),
}

// The full browser state
pub struct BrowserApp {
    /// "owner/repo", shown in the title bar
    repo: String,
    state: LoadState,
    /// Top-level tree nodes, built once when the listing arrives
    roots: Vec<TreeNode>,
    /// Paths of currently expanded directories
    expanded: HashSet<String>,
    /// Cursor position within the visible rows
    selected: usize,
    /// Carried from the listing so the title can warn about partial data
    truncated: bool,
    /// List widget state (selection + scroll offset)
    list_state: ListState,
}

impl BrowserApp {
    pub fn new(repo: &str) -> Self {
        Self {
            repo: repo.to_string(),
            state: LoadState::Loading,
            roots: Vec::new(),
            expanded: HashSet::new(),
            selected: 0,
            truncated: false,
            list_state: ListState::default(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Applies the successful fetch outcome. Called at most once.
    pub fn set_listing(&mut self, listing: TreeListing) {
        self.truncated = listing.truncated;
        self.roots = build_tree(&listing.entries);
        self.selected = 0;
        self.state = LoadState::Ready;
    }

    /// Applies the failed fetch outcome. Called at most once.
    pub fn set_error(&mut self, message: String) {
        self.state = LoadState::Failed(message);
    }

    // Handles one key press
    //
    // Returns: true when the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            _ => {}
        }

        false
    }

    fn row_count(&self) -> usize {
        visible_rows(&self.roots, &self.expanded).len()
    }

    fn move_cursor(&mut self, delta: isize) {
        let count = self.row_count();
        if count == 0 {
            return;
        }

        let current = self.selected as isize;
        self.selected = (current + delta).clamp(0, count as isize - 1) as usize;
    }

    // Expands or collapses the directory under the cursor; files ignore it
    fn toggle_selected(&mut self) {
        let rows = visible_rows(&self.roots, &self.expanded);
        let Some(row) = rows.get(self.selected) else {
            return;
        };

        if !row.node.is_dir {
            return;
        }

        let path = row.node.path.clone();
        if !self.expanded.remove(&path) {
            self.expanded.insert(path);
        }

        // Collapsing can shrink the visible list above the cursor
        let count = self.row_count();
        if self.selected >= count && count > 0 {
            self.selected = count - 1;
        }
    }

    // Draws the current state
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let title = if self.truncated {
            format!("📂 {} (listing truncated)", self.repo)
        } else {
            format!("📂 {}", self.repo)
        };
        let header = Paragraph::new(title)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, chunks[0]);

        match &self.state {
            LoadState::Loading => {
                let status = Paragraph::new(format!("🔭 Fetching data for {}...", self.repo))
                    .style(Style::default().fg(Color::Yellow));
                frame.render_widget(status, chunks[1]);
            }
            LoadState::Failed(message) => {
                let status = Paragraph::new(vec![
                    Line::from(Span::styled(
                        format!("Could not load repository: {}", message),
                        Style::default().fg(Color::Red),
                    )),
                    Line::from("Press q to exit."),
                ]);
                frame.render_widget(status, chunks[1]);
            }
            LoadState::Ready => {
                let rows = visible_rows(&self.roots, &self.expanded);
                let items: Vec<ListItem> = rows
                    .iter()
                    .map(|row| {
                        let icon = if row.node.is_dir { "📁" } else { "📄" };
                        let indent = "  ".repeat(row.depth);
                        ListItem::new(format!("{}{} {}", indent, icon, row.node.name))
                    })
                    .collect();

                let list = List::new(items).highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                );

                self.list_state.select(Some(self.selected));
                frame.render_stateful_widget(list, chunks[1], &mut self.list_state);
            }
        }

        let footer = Paragraph::new("↑/↓ move · Enter expand/collapse · q quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::PathEntry;

    fn ready_app() -> BrowserApp {
        let mut app = BrowserApp::new("octo/repo");
        app.set_listing(TreeListing {
            branch: "main".to_string(),
            entries: vec![
                PathEntry::blob("README.md"),
                PathEntry::blob("src/main.rs"),
                PathEntry::blob("src/cli.rs"),
            ],
            truncated: false,
        });
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_listing_moves_state_to_ready() {
        let app = ready_app();
        assert_eq!(*app.state(), LoadState::Ready);
        // Collapsed: README.md and src
        assert_eq!(app.row_count(), 2);
    }

    #[test]
    fn test_error_moves_state_to_failed() {
        let mut app = BrowserApp::new("octo/repo");
        app.set_error("not found".to_string());
        assert_eq!(*app.state(), LoadState::Failed("not found".to_string()));
    }

    #[test]
    fn test_toggle_expands_and_collapses() {
        let mut app = ready_app();

        // Move to "src" (second row) and expand it
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.row_count(), 4);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.row_count(), 2);
    }

    #[test]
    fn test_toggle_on_file_does_nothing() {
        let mut app = ready_app();
        // Cursor starts on README.md
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.row_count(), 2);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut app = ready_app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected, 0);

        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_collapse_pulls_cursor_back_into_range() {
        let mut app = ready_app();

        // Expand src, walk to its last child, then collapse from there the
        // cursor must land back on a valid row
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected, 3);

        // Move back to src and collapse
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.selected < app.row_count());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = ready_app();
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert!(app.handle_key(key(KeyCode::Esc)));
        assert!(app.handle_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!app.handle_key(key(KeyCode::Down)));
    }
}
