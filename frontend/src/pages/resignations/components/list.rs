use crate::api::Resignation;
use crate::components::{
    common::{Button, ButtonVariant},
    empty_state::EmptyState,
    layout::LoadingSpinner,
};
use crate::pages::resignations::utils::{is_open, status_badge_class};
use crate::utils::time::{app_time_zone, format_date};
use leptos::*;

#[component]
pub fn StatusBadge(status: crate::api::ResignationStatus) -> impl IntoView {
    view! {
        <span class=format!("rounded-full px-2 py-0.5 text-xs font-semibold {}", status_badge_class(status))>
            {status.label()}
        </span>
    }
}

/// The signed-in user's own requests.
#[component]
pub fn MyResignations(
    resignations: Signal<Vec<Resignation>>,
    loading: Signal<bool>,
    on_withdraw: Callback<Resignation>,
) -> impl IntoView {
    let tz = app_time_zone();
    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
            <Show
                when=move || resignations.with(|list| !list.is_empty())
                fallback=|| view! { <EmptyState title="No resignation requests" icon="fas fa-door-open" /> }
            >
                <ul class="divide-y divide-border rounded-lg border border-border">
                    {move || resignations
                        .get()
                        .into_iter()
                        .map(|resignation| {
                            let withdrawable = is_open(&resignation);
                            let submitted = resignation
                                .created_at
                                .map(|t| format_date(t, tz))
                                .unwrap_or_default();
                            let approver = resignation
                                .approver_id
                                .as_ref()
                                .map(|a| a.display_name())
                                .unwrap_or_default();
                            let note = resignation.note.clone().filter(|n| !n.trim().is_empty());
                            let status = resignation.status;
                            let reason = resignation.reason.clone();
                            view! {
                                <li class="flex items-start justify-between gap-4 p-4">
                                    <div class="space-y-1">
                                        <p class="text-sm text-fg">{reason}</p>
                                        <p class="text-xs text-fg-muted">
                                            {submitted} " · " {approver}
                                        </p>
                                        {note.map(|note| view! { <p class="text-xs italic text-fg-muted">{note}</p> })}
                                    </div>
                                    <div class="flex items-center gap-2">
                                        <StatusBadge status=status />
                                        {withdrawable.then(|| view! {
                                            <Button
                                                variant=ButtonVariant::Ghost
                                                on_click=Callback::new(move |_| on_withdraw.call(resignation.clone()))
                                            >
                                                "Withdraw"
                                            </Button>
                                        })}
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </Show>
    }
}
