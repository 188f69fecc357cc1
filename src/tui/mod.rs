//! Interactive single-screen item manager.
//!
//! The ratatui-specific layer: owns the terminal, renders the screen and
//! translates keyboard events into state transitions. This is the only
//! module that knows about ratatui and crossterm.
//!
//! One screen, three focus situations:
//!
//! - the persistent "new item" input field,
//! - the item list (navigate, start an edit, delete),
//! - an open edit session on a single row.
//!
//! Every successful write is followed by a full table re-read; the list
//! on screen is always the latest read, never an incremental patch.

mod event;
pub mod state;
mod ui;

use std::time::Duration;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_items;
use crate::errors::AppResult;
use crate::tui::event::{TuiEvent, poll_event};
use crate::tui::state::{Focus, ViewState};

pub fn run(cfg: &Config) -> AppResult<()> {
    // A storage fault here is fatal to startup; there is no recovery path.
    let mut pool = DbPool::open(&cfg.database)?;
    let items = load_all_items(&pool)?;
    let mut state = ViewState::new(items);

    let mut terminal = ratatui::init();
    let res = event_loop(&mut terminal, &mut pool, &mut state);
    ratatui::restore();
    res
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    pool: &mut DbPool,
    state: &mut ViewState,
) -> AppResult<()> {
    loop {
        terminal.draw(|f| ui::draw(f, state))?;

        let Some(ev) = poll_event(Duration::from_millis(250))? else {
            continue;
        };

        // An open edit session captures the keyboard until it is saved,
        // abandoned, or redirected.
        if state.editing() {
            match ev {
                TuiEvent::InputChar(c) => state.edit_push(c),
                TuiEvent::Backspace => state.edit_pop(),
                TuiEvent::Submit => state.submit_save(pool)?,
                TuiEvent::Cancel => state.cancel_edit(),
                _ => {}
            }
            continue;
        }

        match state.focus {
            Focus::Input => match ev {
                TuiEvent::InputChar(c) => state.input_push(c),
                TuiEvent::Backspace => state.input_pop(),
                TuiEvent::Submit => state.submit_add(pool)?,
                TuiEvent::FocusSwitch | TuiEvent::Down => state.focus_list(),
                TuiEvent::Cancel => break,
                _ => {}
            },
            Focus::List => match ev {
                TuiEvent::InputChar('e') | TuiEvent::Submit => state.begin_edit(),
                TuiEvent::InputChar('d') => state.delete_selected(pool)?,
                TuiEvent::InputChar('q') | TuiEvent::Cancel => break,
                TuiEvent::Up => state.select_prev(),
                TuiEvent::Down => state.select_next(),
                TuiEvent::FocusSwitch => state.focus_input(),
                _ => {}
            },
        }
    }

    Ok(())
}
