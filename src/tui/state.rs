//! View-controller state for the interactive screen.
//!
//! The mirrored item list plus transient interaction state: the new-item
//! input buffer, the single optional edit session and a pending warning.
//! State changes that touch the store go write-then-full-refresh; the
//! mirror is always replaced wholesale with the latest read.

use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::logic::is_blank;
use crate::core::rename::RenameLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::item::Item;
use crate::ui::messages::{BLANK_ADD, BLANK_RENAME};

/// Which part of the screen receives plain keystrokes when no edit
/// session is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// The at-most-one edit session, shared by the whole screen. Never
/// modeled per row: starting an edit elsewhere redirects this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: i64,
    pub draft: String,
}

pub struct ViewState {
    /// Mirror of the `items` table, rebuilt from every full read.
    pub items: Vec<Item>,
    /// Persistent new-item input field.
    pub input: String,
    pub edit: Option<EditSession>,
    pub selected: usize,
    pub warning: Option<String>,
    pub focus: Focus,
}

impl ViewState {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            input: String::new(),
            edit: None,
            selected: 0,
            warning: None,
            focus: Focus::Input,
        }
    }

    pub fn editing(&self) -> bool {
        self.edit.is_some()
    }

    // ------------------------------------------------------------------
    // Buffer edits (no store interaction)
    // ------------------------------------------------------------------

    pub fn input_push(&mut self, c: char) {
        self.input.push(c);
        self.warning = None;
    }

    pub fn input_pop(&mut self) {
        self.input.pop();
    }

    pub fn edit_push(&mut self, c: char) {
        if let Some(sess) = &mut self.edit {
            sess.draft.push(c);
        }
        self.warning = None;
    }

    pub fn edit_pop(&mut self) {
        if let Some(sess) = &mut self.edit {
            sess.draft.pop();
        }
    }

    // ------------------------------------------------------------------
    // Focus and selection
    // ------------------------------------------------------------------

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_list(&mut self) {
        if !self.items.is_empty() {
            self.focus = Focus::List;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.items.is_empty() {
            self.selected = 0;
            self.focus = Focus::Input;
        } else if self.selected >= self.items.len() {
            self.selected = self.items.len() - 1;
        }
    }

    // ------------------------------------------------------------------
    // Edit session
    // ------------------------------------------------------------------

    /// Start (or silently redirect) the edit session to the selected
    /// row, with the draft prefilled from the current name. An edit
    /// already in progress on another row is abandoned without a prompt.
    pub fn begin_edit(&mut self) {
        if let Some(item) = self.items.get(self.selected) {
            self.edit = Some(EditSession {
                id: item.id,
                draft: item.name.clone(),
            });
            self.warning = None;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.warning = None;
    }

    // ------------------------------------------------------------------
    // Store operations (write, then full refresh)
    // ------------------------------------------------------------------

    /// Add Item: blank input is rejected with a warning and no store
    /// call; otherwise insert the raw buffer, refresh, clear the field.
    pub fn submit_add(&mut self, pool: &mut DbPool) -> AppResult<()> {
        if is_blank(&self.input) {
            self.warning = Some(BLANK_ADD.to_string());
            return Ok(());
        }

        self.items = AddLogic::apply(pool, &self.input)?;
        let _ = audit(&pool.conn, "add", &self.input, "Item added");

        self.input.clear();
        self.warning = None;
        self.clamp_selection();
        Ok(())
    }

    /// Save: blank draft is rejected and the session stays open;
    /// otherwise write the rename, refresh, and close the session.
    pub fn submit_save(&mut self, pool: &mut DbPool) -> AppResult<()> {
        let Some(sess) = self.edit.clone() else {
            return Ok(());
        };

        if is_blank(&sess.draft) {
            self.warning = Some(BLANK_RENAME.to_string());
            return Ok(());
        }

        self.items = RenameLogic::apply(pool, sess.id, &sess.draft)?;
        let _ = audit(&pool.conn, "rename", &sess.id.to_string(), "Item renamed");

        self.edit = None;
        self.warning = None;
        self.focus = Focus::List;
        self.clamp_selection();
        Ok(())
    }

    /// Delete the selected row immediately (no confirmation), refresh.
    pub fn delete_selected(&mut self, pool: &mut DbPool) -> AppResult<()> {
        let Some(item) = self.items.get(self.selected) else {
            return Ok(());
        };
        let id = item.id;

        self.items = DeleteLogic::apply(pool, id)?;
        let _ = audit(&pool.conn, "del", &id.to_string(), "Item deleted");

        self.warning = None;
        self.clamp_selection();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    fn memory_pool() -> DbPool {
        let pool = DbPool::new(":memory:").expect("open in-memory db");
        init_db(&pool.conn).expect("init schema");
        pool
    }

    fn typed(state: &mut ViewState, text: &str) {
        for c in text.chars() {
            state.input_push(c);
        }
    }

    #[test]
    fn add_inserts_raw_text_and_clears_field() {
        let mut pool = memory_pool();
        let mut state = ViewState::new(Vec::new());

        typed(&mut state, " milk ");
        state.submit_add(&mut pool).unwrap();

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, " milk ");
        assert!(state.input.is_empty());
        assert!(state.warning.is_none());
    }

    #[test]
    fn blank_add_warns_and_touches_nothing() {
        let mut pool = memory_pool();
        let mut state = ViewState::new(Vec::new());

        typed(&mut state, "   ");
        state.submit_add(&mut pool).unwrap();

        assert_eq!(state.warning.as_deref(), Some(BLANK_ADD));
        assert!(state.items.is_empty());
        // the field keeps the rejected text
        assert_eq!(state.input, "   ");
    }

    #[test]
    fn begin_edit_prefills_draft_with_current_name() {
        let mut pool = memory_pool();
        let mut state = ViewState::new(Vec::new());
        typed(&mut state, "Bread");
        state.submit_add(&mut pool).unwrap();

        state.focus_list();
        state.begin_edit();

        let sess = state.edit.as_ref().unwrap();
        assert_eq!(sess.draft, "Bread");
        assert_eq!(sess.id, state.items[0].id);
    }

    #[test]
    fn starting_a_second_edit_redirects_the_session() {
        let mut pool = memory_pool();
        let mut state = ViewState::new(Vec::new());
        typed(&mut state, "Bread");
        state.submit_add(&mut pool).unwrap();
        typed(&mut state, "Milk");
        state.submit_add(&mut pool).unwrap();

        state.focus_list();
        state.begin_edit();
        state.edit_push('!'); // draft now diverges from the stored name

        state.select_next();
        state.begin_edit();

        // the abandoned draft is gone, no prompt, one session only
        let sess = state.edit.as_ref().unwrap();
        assert_eq!(sess.id, state.items[1].id);
        assert_eq!(sess.draft, "Milk");
    }

    #[test]
    fn blank_save_warns_and_keeps_the_session_open() {
        let mut pool = memory_pool();
        let mut state = ViewState::new(Vec::new());
        typed(&mut state, "Bread");
        state.submit_add(&mut pool).unwrap();

        state.focus_list();
        state.begin_edit();
        for _ in 0.."Bread".len() {
            state.edit_pop();
        }

        state.submit_save(&mut pool).unwrap();

        assert_eq!(state.warning.as_deref(), Some(BLANK_RENAME));
        assert!(state.editing());
        assert_eq!(state.items[0].name, "Bread");
    }

    #[test]
    fn save_renames_refreshes_and_closes_the_session() {
        let mut pool = memory_pool();
        let mut state = ViewState::new(Vec::new());
        typed(&mut state, "Bread");
        state.submit_add(&mut pool).unwrap();
        let id = state.items[0].id;

        state.focus_list();
        state.begin_edit();
        for _ in 0.."Bread".len() {
            state.edit_pop();
        }
        for c in "Toast".chars() {
            state.edit_push(c);
        }
        state.submit_save(&mut pool).unwrap();

        assert!(!state.editing());
        assert!(state.warning.is_none());
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, id);
        assert_eq!(state.items[0].name, "Toast");
    }

    #[test]
    fn delete_removes_row_and_clamps_selection() {
        let mut pool = memory_pool();
        let mut state = ViewState::new(Vec::new());
        typed(&mut state, "Bread");
        state.submit_add(&mut pool).unwrap();
        typed(&mut state, "Milk");
        state.submit_add(&mut pool).unwrap();

        state.focus_list();
        state.select_next();
        state.delete_selected(&mut pool).unwrap();

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Bread");
        assert_eq!(state.selected, 0);

        state.delete_selected(&mut pool).unwrap();
        assert!(state.items.is_empty());
        // empty list sends focus back to the input field
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn full_scenario_bread_milk_toast() {
        let mut pool = memory_pool();
        let mut state = ViewState::new(Vec::new());

        typed(&mut state, "Bread");
        state.submit_add(&mut pool).unwrap();
        assert_eq!(state.items.len(), 1);
        let first_id = state.items[0].id;

        typed(&mut state, "Milk");
        state.submit_add(&mut pool).unwrap();
        assert_eq!(state.items.len(), 2);

        state.focus_list();
        state.begin_edit();
        for _ in 0.."Bread".len() {
            state.edit_pop();
        }
        for c in "Toast".chars() {
            state.edit_push(c);
        }
        state.submit_save(&mut pool).unwrap();
        assert_eq!(state.items[0].name, "Toast");

        state.select_next();
        state.delete_selected(&mut pool).unwrap();

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, first_id);
        assert_eq!(state.items[0].name, "Toast");
    }
}
