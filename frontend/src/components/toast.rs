use crate::state::toast::{use_toasts, Toast, ToastLevel};
use leptos::*;

fn toast_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        ToastLevel::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
        ToastLevel::Warning => {
            "bg-status-warning-bg border-status-warning-border text-status-warning-text"
        }
        ToastLevel::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    }
}

fn toast_icon(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "fas fa-check-circle",
        ToastLevel::Info => "fas fa-info-circle",
        ToastLevel::Warning => "fas fa-exclamation-triangle",
        ToastLevel::Error => "fas fa-exclamation-circle",
    }
}

/// Renders the shared toast queue in the corner of the screen.
#[component]
pub fn ToastHost() -> impl IntoView {
    let center = use_toasts();
    let toasts = center.toasts();

    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let role = if toast.level == ToastLevel::Error { "alert" } else { "status" };
                    view! {
                        <div
                            class=format!("flex items-start gap-3 border rounded-lg shadow px-4 py-3 {}", toast_class(toast.level))
                            role=role
                        >
                            <i class=toast_icon(toast.level)></i>
                            <p class="flex-1 text-sm">{toast.message}</p>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="opacity-70 hover:opacity-100"
                                on:click=move |_| center.dismiss(id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
