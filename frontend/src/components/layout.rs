use crate::components::toast::ToastHost;
use leptos::*;

pub(crate) const NAV_ITEMS: [(&str, &str); 5] = [
    ("/attendance", "Attendance"),
    ("/contracts", "Contracts"),
    ("/resignations", "Resignations"),
    ("/shift-types", "Shift types"),
    ("/candidates", "Candidates"),
];

const NAV_LINK_CLASS: &str = "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"HRM"</a>
                    <nav class="hidden lg:flex space-x-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|(href, label)| view! { <a href=*href class=NAV_LINK_CLASS>{*label}</a> })
                            .collect_view()}
                    </nav>
                    <button
                        type="button"
                        class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        <i class=move || if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }></i>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|(href, label)| view! {
                                    <a
                                        href=*href
                                        class=format!("block {}", NAV_LINK_CLASS)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*label}
                                    </a>
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <ToastHost/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status" aria-label="Loading">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <i class="fas fa-exclamation-circle flex-shrink-0"></i>
                <p class="ml-3 text-sm">{message}</p>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <i class="fas fa-check-circle flex-shrink-0"></i>
                <p class="ml-3 text-sm">{message}</p>
            </div>
        </div>
    }
}
