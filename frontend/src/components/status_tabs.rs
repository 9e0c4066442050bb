use crate::utils::status::StatusTab;
use leptos::*;

/// Tab strip over `All` plus one tab per status. Counts are shown only when
/// the caller can compute them locally.
#[component]
pub fn StatusTabs<S, L>(
    statuses: Vec<S>,
    active: RwSignal<StatusTab<S>>,
    label: L,
    #[prop(optional)] count: Option<Callback<StatusTab<S>, usize>>,
) -> impl IntoView
where
    S: Copy + PartialEq + 'static,
    L: Fn(S) -> &'static str + Copy + 'static,
{
    let tabs = StatusTab::tabs(&statuses);
    view! {
        <div class="flex flex-wrap gap-2 border-b border-border pb-2" role="tablist">
            {tabs
                .into_iter()
                .map(|tab| {
                    let text = match tab {
                        StatusTab::All => "All",
                        StatusTab::Only(status) => label(status),
                    };
                    let is_active = move || active.get() == tab;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || if is_active() { "true" } else { "false" }
                            class=move || {
                                if is_active() {
                                    "px-3 py-1 rounded-full text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                } else {
                                    "px-3 py-1 rounded-full text-sm text-fg-muted hover:bg-action-ghost-bg-hover"
                                }
                            }
                            on:click=move |_| active.set(tab)
                        >
                            {text}
                            {count.map(|count| view! { " (" {move || count.call(tab)} ")" })}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
