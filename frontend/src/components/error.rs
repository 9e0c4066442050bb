use leptos::*;

/// Error banner for a failed load, with an optional retry.
#[component]
pub fn InlineErrorMessage(
    error: Signal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div
                class="flex items-center justify-between gap-3 bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2"
                role="alert"
            >
                <span class="text-sm font-medium">{move || error.get().unwrap_or_default()}</span>
                {on_retry.map(|retry| view! {
                    <button
                        type="button"
                        class="text-sm font-semibold underline"
                        on:click=move |_| retry.call(())
                    >
                        "Retry"
                    </button>
                })}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_message_and_retry() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some("Failed to load data".to_string()));
            view! { <InlineErrorMessage error=error.into() on_retry=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Failed to load data"));
        assert!(html.contains("Retry"));
    }

    #[test]
    fn renders_nothing_without_error() {
        let html = render_to_string(move || {
            let error = create_rw_signal(None::<String>);
            view! { <InlineErrorMessage error=error.into() /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
