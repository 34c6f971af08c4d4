use std::collections::BTreeMap;

use crate::state::list_state::ListState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedRow {
    pub list: String,
    pub id: String,
}

/// Every list rendered on one console page, plus the page-wide selection.
#[derive(Clone, Debug, Default)]
pub struct PageState {
    lists: BTreeMap<String, ListState>,
    selected: Option<SelectedRow>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_list(&mut self, list: ListState) {
        self.lists.insert(list.name().to_string(), list);
    }

    pub fn list(&self, name: &str) -> Option<&ListState> {
        self.lists.get(name)
    }

    pub fn list_mut(&mut self, name: &str) -> Option<&mut ListState> {
        self.lists.get_mut(name)
    }

    pub fn lists(&self) -> impl Iterator<Item = &ListState> {
        self.lists.values()
    }

    pub fn selected(&self) -> Option<&SelectedRow> {
        self.selected.as_ref()
    }

    /// Clears any previous selection, then highlights `id` in `list_name`.
    /// An unknown row leaves the page with nothing selected.
    pub fn select_row(&mut self, list_name: &str, id: &str) -> bool {
        self.unselect_row();

        let Some(row) = self
            .lists
            .get_mut(list_name)
            .and_then(|list| list.row_mut(id))
        else {
            return false;
        };
        row.set_selected(true);
        self.selected = Some(SelectedRow {
            list: list_name.to_string(),
            id: id.to_string(),
        });
        true
    }

    pub fn unselect_row(&mut self) {
        let Some(selected) = self.selected.take() else {
            return;
        };
        if let Some(row) = self
            .lists
            .get_mut(&selected.list)
            .and_then(|list| list.row_mut(&selected.id))
        {
            row.set_selected(false);
        }
    }

    /// Removes a row, dropping the selection when it pointed at that row.
    pub fn del_row(&mut self, list_name: &str, id: &str) -> bool {
        let selected_here = self
            .selected
            .as_ref()
            .is_some_and(|sel| sel.list == list_name && sel.id == id);
        if selected_here {
            self.selected = None;
        }
        self.lists
            .get_mut(list_name)
            .map(|list| list.del_row(id))
            .unwrap_or(false)
    }
}
