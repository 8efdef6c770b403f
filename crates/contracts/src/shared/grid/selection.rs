//! Row selection of a list table.
//!
//! Select-all only ever covers rows that are loaded when it is clicked;
//! rows still loading stay out and arrive unselected.

/// Display state of one body row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Loading,
    Unselected,
    Selected,
}

/// Tri-state of the header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Checked row ids in the order they were checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Row checkbox: flips one id
    pub fn toggle(&mut self, id: &str) {
        if self.is_selected(id) {
            self.ids.retain(|selected| selected != id);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn set(&mut self, id: &str, checked: bool) {
        if checked != self.is_selected(id) {
            self.toggle(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// State of row `row_id`; `None` is a row whose entity has not arrived
    pub fn row_state(&self, row_id: Option<&str>) -> RowState {
        match row_id {
            None => RowState::Loading,
            Some(id) if self.is_selected(id) => RowState::Selected,
            Some(_) => RowState::Unselected,
        }
    }

    pub fn header_state<'a, I>(&self, loaded_ids: I) -> HeaderCheckState
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut total = 0usize;
        let mut selected = 0usize;
        for id in loaded_ids {
            total += 1;
            if self.is_selected(id) {
                selected += 1;
            }
        }
        if total == 0 || selected == 0 {
            HeaderCheckState::Unchecked
        } else if selected == total {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }

    /// Header checkbox: selects every loaded row, or clears when all of them
    /// already are selected
    pub fn toggle_all<'a, I>(&mut self, loaded_ids: I)
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        if self.header_state(loaded_ids.clone()) == HeaderCheckState::Checked {
            self.clear();
        } else {
            self.ids.clear();
            for id in loaded_ids {
                if !self.is_selected(id) {
                    self.ids.push(id.to_string());
                }
            }
        }
    }
}
