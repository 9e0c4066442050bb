use leptos::*;
use log::debug;
use std::rc::Rc;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Capability for transient user notifications, injected into every hook.
pub trait Notifier {
    fn notify(&self, level: ToastLevel, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastLevel::Success, message);
    }

    fn info(&self, message: &str) {
        self.notify(ToastLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.notify(ToastLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastLevel::Error, message);
    }
}

/// Signal-backed toast queue rendered by `components::toast::ToastHost`.
#[derive(Clone, Copy)]
pub struct ToastCenter {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl ToastCenter {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(1),
            duration_ms,
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

impl Notifier for ToastCenter {
    fn notify(&self, level: ToastLevel, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        debug!("toast #{} {:?}: {}", id, level, message);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                level,
                message: message.to_string(),
            })
        });

        #[cfg(target_arch = "wasm32")]
        {
            let center = *self;
            gloo_timers::callback::Timeout::new(self.duration_ms, move || center.dismiss(id))
                .forget();
        }
    }
}

pub fn use_toasts() -> ToastCenter {
    match use_context::<ToastCenter>() {
        Some(center) => center,
        None => {
            let center = ToastCenter::new(config::toast_duration_ms());
            provide_context(center);
            center
        }
    }
}

pub fn use_notifier() -> Rc<dyn Notifier> {
    Rc::new(use_toasts())
}
