//! Selection widget contracts
//!
//! These are fully controlled by the caller: they borrow the catalog and the
//! current selection, and turn an activation into the value the controller
//! should receive. Nothing here mutates wizard state.

use crate::models::{CatalogEntry, IssueKind, IssueSet};

/// What a selection widget reports back to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent<Id> {
    /// A single-select entry was activated
    Select(Id),
    /// A multi-select toggle produced a new selection
    SelectionChange(IssueSet),
    /// The explicit continue control was pressed
    Continue,
}

/// Single choice over a catalog
#[derive(Debug, Clone, Copy)]
pub struct SingleSelect<'a, Id> {
    entries: &'a [CatalogEntry<Id>],
    selected: Option<Id>,
}

impl<'a, Id: Copy + PartialEq> SingleSelect<'a, Id> {
    pub fn new(entries: &'a [CatalogEntry<Id>], selected: Option<Id>) -> Self {
        Self { entries, selected }
    }

    pub fn entries(&self) -> &'a [CatalogEntry<Id>] {
        self.entries
    }

    /// Whether `id` is the current selection
    pub fn is_selected(&self, id: Id) -> bool {
        self.selected == Some(id)
    }

    /// Index of the selected entry, if it is in this catalog
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected?;
        self.entries.iter().position(|e| e.id == selected)
    }

    /// Activate the entry at `index`
    pub fn activate(&self, index: usize) -> Option<SelectionEvent<Id>> {
        self.entries
            .get(index)
            .map(|entry| SelectionEvent::Select(entry.id))
    }
}

/// Multiple choice over the issue catalog with an explicit continue
#[derive(Debug, Clone, Copy)]
pub struct MultiSelect<'a> {
    entries: &'a [CatalogEntry<IssueKind>],
    selected: &'a IssueSet,
}

impl<'a> MultiSelect<'a> {
    pub fn new(entries: &'a [CatalogEntry<IssueKind>], selected: &'a IssueSet) -> Self {
        Self { entries, selected }
    }

    pub fn entries(&self) -> &'a [CatalogEntry<IssueKind>] {
        self.entries
    }

    pub fn is_selected(&self, issue: IssueKind) -> bool {
        self.selected.contains(issue)
    }

    /// Toggle the entry at `index`, reporting the resulting selection
    pub fn toggle(&self, index: usize) -> Option<SelectionEvent<IssueKind>> {
        self.entries
            .get(index)
            .map(|entry| SelectionEvent::SelectionChange(self.selected.toggled(entry.id)))
    }

    /// Request to move on; the selection is left as it is
    pub fn press_continue(&self) -> SelectionEvent<IssueKind> {
        SelectionEvent::Continue
    }

    /// Whether the continue control should be enabled
    pub fn can_continue(&self) -> bool {
        !self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{models_for, DEVICES, ISSUES};
    use crate::models::DeviceCategory;

    #[test]
    fn test_single_select_reports_entry_id() {
        let select = SingleSelect::new(&DEVICES, None);
        assert_eq!(
            select.activate(3),
            Some(SelectionEvent::Select(DeviceCategory::Computer))
        );
        assert_eq!(select.activate(99), None);
        assert_eq!(select.selected_index(), None);
    }

    #[test]
    fn test_single_select_marks_selected() {
        let models = models_for(DeviceCategory::Computer);
        let select = SingleSelect::new(models, Some("mac-mini"));
        assert!(select.is_selected("mac-mini"));
        assert!(!select.is_selected("imac"));
        assert_eq!(select.selected_index(), Some(3));
    }

    #[test]
    fn test_multi_select_toggle() {
        let selected: IssueSet = vec![IssueKind::Battery].into();
        let select = MultiSelect::new(&ISSUES, &selected);

        let Some(SelectionEvent::SelectionChange(added)) = select.toggle(5) else {
            panic!("expected a selection change");
        };
        assert_eq!(added.as_slice(), &[IssueKind::Battery, IssueKind::Overheats]);

        let Some(SelectionEvent::SelectionChange(removed)) = select.toggle(0) else {
            panic!("expected a selection change");
        };
        assert!(removed.is_empty());

        // The caller's selection is untouched
        assert!(select.is_selected(IssueKind::Battery));
    }

    #[test]
    fn test_continue_does_not_change_selection() {
        let empty = IssueSet::new();
        let select = MultiSelect::new(&ISSUES, &empty);
        assert!(!select.can_continue());
        assert_eq!(select.press_continue(), SelectionEvent::Continue);
        assert!(empty.is_empty());
    }
}
