//! Interactive selection state machine.
//!
//! A [`SelectorState`] is one ephemeral session over an already-ranked model
//! list: a live search query, a highlighted row, and a scroll window. Every
//! keyboard event maps to one [`SelectorEvent`]; [`SelectorState::handle`]
//! applies it and reports an [`Outcome`] once the session resolves. The
//! machine owns no I/O, which is what keeps it testable.

use crate::catalog::ModelDescriptor;

/// Number of rows visible at once.
pub const VISIBLE_WINDOW: usize = 10;

/// One keyboard-level input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    /// A printable character appended to the search query. Characters
    /// outside the accepted search classes are ignored.
    Char(char),
    /// Remove the last query character.
    Backspace,
    /// Move the highlight up one row.
    Up,
    /// Move the highlight down one row.
    Down,
    /// Commit the highlighted model.
    Confirm,
    /// Clear the query, or cancel the session when it is already empty.
    Cancel,
    /// Cancel unconditionally (Ctrl-C), regardless of search state.
    Interrupt,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user committed this model id.
    Picked(String),
    /// The user backed out without choosing.
    Cancelled,
}

/// Live state for one selection session.
#[derive(Debug, Clone)]
pub struct SelectorState {
    models: Vec<ModelDescriptor>,
    /// The incremental search query.
    pub query: String,
    /// Highlighted index into the filtered view.
    pub selected: usize,
    /// First visible index of the filtered view.
    pub scroll: usize,
    /// Id of the model active before the session opened, if any.
    pub current: Option<String>,
}

impl SelectorState {
    /// Open a session over `models`, highlighting `current` when present.
    #[must_use]
    pub fn new(models: Vec<ModelDescriptor>, current: Option<String>) -> Self {
        let mut state = Self {
            models,
            query: String::new(),
            selected: 0,
            scroll: 0,
            current,
        };
        if let Some(id) = state.current.as_deref()
            && let Some(pos) = state.models.iter().position(|m| m.id == id)
        {
            state.selected = pos;
        }
        state.clamp_window();
        state
    }

    /// The filtered view: models matching the query, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&ModelDescriptor> {
        let needle = self.query.to_lowercase();
        self.models.iter().filter(|m| m.matches(&needle)).collect()
    }

    /// Apply one event. Returns `Some` once the session resolves; the state
    /// must be discarded afterwards.
    pub fn handle(&mut self, event: SelectorEvent) -> Option<Outcome> {
        match event {
            SelectorEvent::Char(c) => {
                if is_search_char(c) {
                    self.query.push(c);
                    self.selected = 0;
                    self.scroll = 0;
                }
                None
            }
            SelectorEvent::Backspace => {
                self.query.pop();
                self.clamp_window();
                None
            }
            SelectorEvent::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.clamp_window();
                None
            }
            SelectorEvent::Down => {
                let len = self.filtered().len();
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
                self.clamp_window();
                None
            }
            SelectorEvent::Confirm => self
                .filtered()
                .get(self.selected)
                .map(|m| Outcome::Picked(m.id.clone())),
            SelectorEvent::Cancel => {
                if self.query.is_empty() {
                    Some(Outcome::Cancelled)
                } else {
                    self.query.clear();
                    self.selected = 0;
                    self.scroll = 0;
                    None
                }
            }
            SelectorEvent::Interrupt => Some(Outcome::Cancelled),
        }
    }

    /// Keep the highlighted row inside the visible window.
    fn clamp_window(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + VISIBLE_WINDOW {
            self.scroll = self.selected + 1 - VISIBLE_WINDOW;
        }
    }
}

/// Characters accepted into the search query: word characters, whitespace,
/// hyphen, dot, forward slash.
fn is_search_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace() || matches!(c, '-' | '.' | '/')
}
