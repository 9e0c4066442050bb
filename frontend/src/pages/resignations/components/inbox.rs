use crate::api::{Resignation, ResignationStatus};
use crate::components::{
    common::{Button, ButtonVariant},
    empty_state::EmptyState,
    layout::LoadingSpinner,
    status_tabs::StatusTabs,
};
use crate::pages::resignations::{components::list::StatusBadge, utils::is_open};
use crate::utils::status::StatusTab;
use leptos::*;

/// Requests addressed to the signed-in approver.
#[component]
pub fn ApproverInbox(
    resignations: Signal<Vec<Resignation>>,
    loading: Signal<bool>,
    tab: RwSignal<StatusTab<ResignationStatus>>,
    count: Callback<StatusTab<ResignationStatus>, usize>,
    on_decide: Callback<(Resignation, ResignationStatus)>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <StatusTabs
                statuses=ResignationStatus::ALL.to_vec()
                active=tab
                label=ResignationStatus::label
                count=count
            />
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || resignations.with(|list| !list.is_empty())
                    fallback=|| view! { <EmptyState title="Nothing to review" icon="fas fa-inbox" /> }
                >
                    <ul class="divide-y divide-border rounded-lg border border-border">
                        {move || resignations
                            .get()
                            .into_iter()
                            .map(|resignation| {
                                let staff = resignation
                                    .staff_id
                                    .as_ref()
                                    .map(|s| s.display_name())
                                    .unwrap_or_default();
                                let actionable = is_open(&resignation);
                                let status = resignation.status;
                                let reason = resignation.reason.clone();
                                let approve = resignation.clone();
                                let reject = resignation;
                                view! {
                                    <li class="flex items-start justify-between gap-4 p-4">
                                        <div class="space-y-1">
                                            <p class="text-sm font-semibold text-fg">{staff}</p>
                                            <p class="text-sm text-fg">{reason}</p>
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <StatusBadge status=status />
                                            {actionable.then(|| view! {
                                                <Button on_click=Callback::new(move |_| {
                                                    on_decide.call((approve.clone(), ResignationStatus::Approved))
                                                })>
                                                    "Approve"
                                                </Button>
                                                <Button
                                                    variant=ButtonVariant::Danger
                                                    on_click=Callback::new(move |_| {
                                                        on_decide.call((reject.clone(), ResignationStatus::Rejected))
                                                    })
                                                >
                                                    "Reject"
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
        </div>
    }
}
