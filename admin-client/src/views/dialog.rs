//! Dialog state
//!
//! One modal at a time per page: create, edit, view, or delete-confirm.
//! Delete is always two-step: `request_delete` only opens the confirmation;
//! nothing destructive happens until `confirm_delete` hands the target back.

/// Modal dialog state for a resource page, holding the selected row where
/// one is involved.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState<T> {
    #[default]
    Closed,
    Create,
    Edit(T),
    View(T),
    ConfirmDelete(T),
}

impl<T> DialogState<T> {
    pub fn open_create(&mut self) {
        *self = DialogState::Create;
    }

    pub fn open_edit(&mut self, item: T) {
        *self = DialogState::Edit(item);
    }

    pub fn open_view(&mut self, item: T) {
        *self = DialogState::View(item);
    }

    /// First step of deletion: open the confirmation dialog.
    pub fn request_delete(&mut self, item: T) {
        *self = DialogState::ConfirmDelete(item);
    }

    /// Second step of deletion: yields the target only if the confirmation
    /// dialog is actually open, and closes it. Callers run the delete call
    /// with what they get back.
    pub fn confirm_delete(&mut self) -> Option<T> {
        match std::mem::replace(self, DialogState::Closed) {
            DialogState::ConfirmDelete(item) => Some(item),
            other => {
                // not a confirm flow; put the state back untouched
                *self = other;
                None
            }
        }
    }

    pub fn close(&mut self) {
        *self = DialogState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    /// The row the open dialog refers to, if any.
    pub fn selected(&self) -> Option<&T> {
        match self {
            DialogState::Edit(item) | DialogState::View(item) | DialogState::ConfirmDelete(item) => {
                Some(item)
            }
            DialogState::Closed | DialogState::Create => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_needs_an_explicit_confirmation() {
        let mut dialog: DialogState<&str> = DialogState::Closed;

        // confirming without a pending request does nothing
        assert_eq!(dialog.confirm_delete(), None);

        dialog.request_delete("p1");
        assert!(dialog.is_open());
        assert_eq!(dialog.selected(), Some(&"p1"));

        // only now does the target come back, and the dialog closes
        assert_eq!(dialog.confirm_delete(), Some("p1"));
        assert!(!dialog.is_open());
    }

    #[test]
    fn confirm_does_not_fire_from_other_dialogs() {
        let mut dialog: DialogState<&str> = DialogState::Closed;
        dialog.open_edit("p1");
        assert_eq!(dialog.confirm_delete(), None);
        assert_eq!(dialog, DialogState::Edit("p1"));
    }

    #[test]
    fn closing_discards_the_selection() {
        let mut dialog: DialogState<&str> = DialogState::Closed;
        dialog.open_view("p1");
        dialog.close();
        assert_eq!(dialog.selected(), None);
    }
}
