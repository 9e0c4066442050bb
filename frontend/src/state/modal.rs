use leptos::*;

/// Open flag plus the record the dialog is about (`None` for "create").
pub struct ModalHandle<T: 'static> {
    pub is_open: RwSignal<bool>,
    pub selected: RwSignal<Option<T>>,
}

impl<T: 'static> Clone for ModalHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ModalHandle<T> {}

impl<T: Clone + 'static> ModalHandle<T> {
    pub fn new(initial_open: bool) -> Self {
        Self {
            is_open: create_rw_signal(initial_open),
            selected: create_rw_signal(None),
        }
    }

    /// Selection is written first so the dialog never renders open with a
    /// stale record.
    pub fn open(&self, item: Option<T>) {
        self.selected.set(item);
        self.is_open.set(true);
    }

    pub fn close(&self) {
        self.is_open.set(false);
        self.selected.set(None);
    }

    /// Flips visibility only; the selection is left alone.
    pub fn toggle(&self) {
        self.is_open.update(|open| *open = !*open);
    }

    pub fn selected_untracked(&self) -> Option<T> {
        self.selected.get_untracked()
    }
}

pub fn use_modal<T: Clone + 'static>(initial_open: bool) -> ModalHandle<T> {
    ModalHandle::new(initial_open)
}
