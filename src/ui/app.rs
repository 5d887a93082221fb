use anyhow::Result;
use chrono::{Local, NaiveDate};

use super::form::FormState;
use super::util::{clamp_cursor, scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};
use super::view::{ListItem, ViewModel};
use crate::error::SubmitError;
use crate::ledger::Ledger;
use crate::models::{Filter, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Form,
    List,
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form => write!(f, "FORM"),
            Self::List => write!(f, "LIST"),
        }
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Owns the ledger and all interaction state. Every user action goes through
/// one of the methods here and leaves `view` up to date before returning.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) focus: Focus,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    ledger: Ledger,
    pub(crate) filter: Filter,
    pub(crate) form: FormState,
    pub(crate) view: ViewModel,

    pub(crate) list_index: usize,
    pub(crate) list_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(ledger: Ledger) -> Self {
        Self::new_on(ledger, today())
    }

    pub(crate) fn new_on(ledger: Ledger, today: NaiveDate) -> Self {
        let filter = Filter::default();
        let view = ViewModel::of(&ledger, filter);
        Self {
            running: true,
            focus: Focus::Form,
            status_message: String::new(),
            show_help: false,
            ledger,
            filter,
            form: FormState::new(today),
            view,
            list_index: 0,
            list_scroll: 0,
            visible_rows: 20,
        }
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn submit(&mut self) -> Result<Record, SubmitError> {
        self.submit_on(today())
    }

    /// Turn the form into a record. Rejected input or a failed save leaves
    /// the ledger, the form and the view untouched.
    pub(crate) fn submit_on(&mut self, today: NaiveDate) -> Result<Record, SubmitError> {
        let input = match self.form.submission(today) {
            Ok(input) => input,
            Err(e) => {
                tracing::debug!(error = %e, "submission rejected");
                return Err(e);
            }
        };
        let record = self.ledger.add(input)?;
        self.form.reset_after_submit(today);
        self.refresh();
        Ok(record)
    }

    pub(crate) fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = self.ledger.delete(id)?;
        self.refresh();
        Ok(removed)
    }

    /// Delete whatever record the list cursor is on. Returns the removed
    /// item, or `None` when the list is empty.
    pub(crate) fn delete_selected(&mut self) -> Result<Option<ListItem>> {
        let Some(item) = self.selected_item().cloned() else {
            return Ok(None);
        };
        self.delete(&item.id)?;
        Ok(Some(item))
    }

    pub(crate) fn selected_item(&self) -> Option<&ListItem> {
        self.view.list.items().get(self.list_index)
    }

    pub(crate) fn select_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.list_index = 0;
        self.list_scroll = 0;
        self.refresh();
    }

    pub(crate) fn toggle_type(&mut self) {
        self.form.toggle_kind();
    }

    /// Re-derive summary and list from the ledger.
    pub(crate) fn refresh(&mut self) {
        self.view = ViewModel::of(&self.ledger, self.filter);
        clamp_cursor(&mut self.list_index, &mut self.list_scroll, self.view.list.len());
    }

    pub(crate) fn move_down(&mut self) {
        scroll_down(
            &mut self.list_index,
            &mut self.list_scroll,
            self.view.list.len(),
            self.visible_rows,
        );
    }

    pub(crate) fn move_up(&mut self) {
        scroll_up(&mut self.list_index, &mut self.list_scroll);
    }

    pub(crate) fn move_to_top(&mut self) {
        scroll_to_top(&mut self.list_index, &mut self.list_scroll);
    }

    pub(crate) fn move_to_bottom(&mut self) {
        scroll_to_bottom(
            &mut self.list_index,
            &mut self.list_scroll,
            self.view.list.len(),
            self.visible_rows,
        );
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
