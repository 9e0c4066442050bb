use leptos::on_cleanup;
use std::{cell::Cell, rc::Rc};

/// Shared flag checked before async work commits to reactive state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    /// Cancels when the current reactive owner is disposed.
    pub fn bind_to_owner(&self) {
        let token = self.clone();
        on_cleanup(move || token.cancel());
    }
}
