//! Record browser state: the fetched rows, the selection set and the
//! batch delete. No signals here; the component wraps it in one.

use crate::shared::state::operation::OpState;
use contracts::domain::a001_employee::{DeleteRequest, Employee, EmployeeId};
use contracts::shared::ApiError;
use std::collections::HashSet;

pub const NOTHING_SELECTED_MESSAGE: &str = "Please select at least one submission to delete.";
pub const DELETED_MESSAGE: &str = "Selected submissions deleted successfully!";

/// What the table area shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Rows(&'a [Employee]),
}

/// Why a delete did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteRejected {
    NothingSelected,
    Busy,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowserState {
    pub load: OpState<()>,
    /// Set by the first successful load; rows stay on screen from then on
    loaded: bool,
    items: Vec<Employee>,
    selected: HashSet<EmployeeId>,
    /// Success holds the banner message
    pub delete: OpState<String>,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> bool {
        self.load.begin()
    }

    /// Store the rows as received. On failure the previous rows stay.
    pub fn finish_load(&mut self, result: Result<Vec<Employee>, ApiError>) {
        match result {
            Ok(items) => {
                self.items = items;
                let present: HashSet<EmployeeId> =
                    self.items.iter().filter_map(|e| e.id).collect();
                self.selected.retain(|id| present.contains(id));
                self.loaded = true;
                self.load.succeed(());
            }
            Err(e) => self.load.fail(e.to_string()),
        }
    }

    /// A refresh never hides rows that were already shown; its error goes
    /// to `refresh_error` instead.
    pub fn view(&self) -> ListView<'_> {
        if self.loaded {
            return if self.items.is_empty() {
                ListView::Empty
            } else {
                ListView::Rows(&self.items)
            };
        }
        match &self.load {
            OpState::Idle | OpState::Pending => ListView::Loading,
            OpState::Failed(message) => ListView::Failed(message),
            OpState::Succeeded(()) if self.items.is_empty() => ListView::Empty,
            OpState::Succeeded(()) => ListView::Rows(&self.items),
        }
    }

    /// Failure of a reload made after rows were already shown
    pub fn refresh_error(&self) -> Option<&str> {
        if self.loaded {
            self.load.error()
        } else {
            None
        }
    }

    pub fn items(&self) -> &[Employee] {
        &self.items
    }

    /// Add or remove exactly one id
    pub fn toggle(&mut self, id: EmployeeId, checked: bool) {
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    /// Select every displayed row, or clear the selection
    pub fn toggle_all(&mut self, checked: bool) {
        if checked {
            self.selected.extend(self.items.iter().filter_map(|e| e.id));
        } else {
            self.selected.clear();
        }
    }

    pub fn is_selected(&self, id: EmployeeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn all_selected(&self) -> bool {
        let mut ids = self.items.iter().filter_map(|e| e.id).peekable();
        ids.peek().is_some() && ids.all(|id| self.selected.contains(&id))
    }

    pub fn is_deleting(&self) -> bool {
        self.delete.is_pending()
    }

    /// Check the selection, ask `confirm` with the number of rows, then
    /// enter `Pending` and return the request to send.
    ///
    /// `confirm` is not called when the selection is empty or a delete is
    /// already running.
    pub fn begin_delete(
        &mut self,
        confirm: impl FnOnce(usize) -> bool,
    ) -> Result<DeleteRequest, DeleteRejected> {
        if self.is_deleting() {
            return Err(DeleteRejected::Busy);
        }
        if self.selected.is_empty() {
            self.delete.fail(NOTHING_SELECTED_MESSAGE);
            return Err(DeleteRejected::NothingSelected);
        }
        if !confirm(self.selected.len()) {
            return Err(DeleteRejected::Cancelled);
        }
        self.delete.begin();
        Ok(DeleteRequest::new(self.selected.iter().copied()))
    }

    /// On success drop exactly the deleted rows (no re-fetch) and clear the
    /// selection. On failure rows and selection are left as they were.
    pub fn finish_delete(
        &mut self,
        request: &DeleteRequest,
        result: Result<Option<String>, ApiError>,
    ) {
        match result {
            Ok(message) => {
                let deleted: HashSet<EmployeeId> = request.ids.iter().copied().collect();
                self.items
                    .retain(|e| e.id.map_or(true, |id| !deleted.contains(&id)));
                self.selected.clear();
                self.delete
                    .succeed(message.unwrap_or_else(|| DELETED_MESSAGE.to_string()));
            }
            Err(e) => self
                .delete
                .fail(format!("Failed to delete submissions: {}", e)),
        }
    }

    pub fn delete_label(&self) -> String {
        if self.is_deleting() {
            "Deleting...".to_string()
        } else {
            format!("Delete Selected ({})", self.selected.len())
        }
    }
}

/// Text of the confirmation prompt
pub fn confirm_message(count: usize) -> String {
    format!(
        "Are you sure you want to delete {} selected submission(s)? This cannot be undone.",
        count
    )
}
