//! Terminal session driving one interactive model pick.

mod colors;
mod render;

use std::io;
use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::catalog::{CatalogFilter, CatalogStore};
use crate::selector::{Outcome, SelectorEvent, SelectorState};

/// Run one selection session over the store's current catalog.
///
/// Shows a loading screen while the catalog call is in flight, then the
/// interactive picker. Resolves to the committed model id or a cancellation;
/// the session never fails on catalog grounds because
/// [`CatalogStore::get_catalog`] never does.
///
/// # Errors
///
/// Returns an error only for terminal I/O failures.
pub fn run_selector(
    store: &CatalogStore,
    filter: CatalogFilter,
    current: Option<String>,
) -> Result<Outcome> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_session(&mut terminal, store, filter, current);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_session(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &CatalogStore,
    filter: CatalogFilter,
    current: Option<String>,
) -> Result<Outcome> {
    terminal.draw(|frame| render::render_loading(frame, filter))?;
    let catalog = store.get_catalog(filter);

    // Keys pressed while loading have no effect.
    drain_pending_input()?;

    let mut state = SelectorState::new(catalog.models, current);
    loop {
        terminal.draw(|frame| render::render_picker(frame, &state, filter))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(event) = map_key(key)
            && let Some(outcome) = state.handle(event)
        {
            return Ok(outcome);
        }
    }
}

fn drain_pending_input() -> Result<()> {
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }
    Ok(())
}

fn map_key(key: KeyEvent) -> Option<SelectorEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(SelectorEvent::Interrupt);
    }

    match key.code {
        KeyCode::Enter => Some(SelectorEvent::Confirm),
        KeyCode::Esc => Some(SelectorEvent::Cancel),
        KeyCode::Up => Some(SelectorEvent::Up),
        KeyCode::Down => Some(SelectorEvent::Down),
        KeyCode::Backspace | KeyCode::Delete => Some(SelectorEvent::Backspace),
        KeyCode::Char(c) => Some(SelectorEvent::Char(c)),
        _ => None,
    }
}
