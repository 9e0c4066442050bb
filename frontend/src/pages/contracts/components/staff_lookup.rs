use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn StaffLookup(query: RwSignal<String>, on_search: Callback<()>) -> impl IntoView {
    view! {
        <form
            class="flex gap-2"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_search.call(());
            }
        >
            <label for="staff-lookup" class="sr-only">"Staff ID"</label>
            <input
                id="staff-lookup"
                type="search"
                class="flex-1 rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg"
                placeholder="Staff ID"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
            >
                "Search"
            </button>
        </form>
    }
}
