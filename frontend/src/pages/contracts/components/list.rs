use crate::api::Contract;
use crate::components::{
    common::{Button, ButtonVariant},
    empty_state::EmptyState,
    layout::LoadingSpinner,
};
use crate::pages::contracts::utils::{contract_months, ContractPhase};
use crate::utils::time::{app_time_zone, format_date, today_in_app_tz};
use leptos::*;

fn contract_row(
    contract: Contract,
    show_staff: bool,
    on_edit: Option<Callback<Contract>>,
    on_delete: Option<Callback<Contract>>,
) -> impl IntoView {
    let tz = app_time_zone();
    let phase = ContractPhase::of(&contract, today_in_app_tz(), tz);
    let months = contract_months(&contract, tz);
    let staff = show_staff.then(|| {
        view! { <td class="px-4 py-3 text-sm text-fg">{contract.staff_id.display_name()}</td> }
    });
    let edit_target = contract.clone();
    let delete_target = contract.clone();
    view! {
        <tr class="border-b border-border">
            {staff}
            <td class="px-4 py-3 text-sm text-fg max-w-xs truncate" title=contract.content.clone()>
                {contract.content.clone()}
            </td>
            <td class="px-4 py-3 text-sm font-mono text-fg">{format_date(contract.from_date, tz)}</td>
            <td class="px-4 py-3 text-sm font-mono text-fg">{format_date(contract.to_date, tz)}</td>
            <td class="px-4 py-3 text-sm text-fg">{format!("{} mo", months)}</td>
            <td class="px-4 py-3">
                <span class=format!("rounded-full px-2 py-0.5 text-xs font-semibold {}", phase.badge_class())>
                    {phase.label()}
                </span>
            </td>
            <td class="px-4 py-3 text-right space-x-2">
                {on_edit.map(|on_edit| view! {
                    <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| on_edit.call(edit_target.clone()))>
                        "Edit"
                    </Button>
                })}
                {on_delete.map(|on_delete| view! {
                    <Button variant=ButtonVariant::Danger on_click=Callback::new(move |_| on_delete.call(delete_target.clone()))>
                        "Delete"
                    </Button>
                })}
            </td>
        </tr>
    }
}

/// Contract table. Row actions appear only for the callbacks given.
#[component]
pub fn ContractList(
    contracts: Signal<Vec<Contract>>,
    loading: Signal<bool>,
    #[prop(into)] empty_title: String,
    #[prop(optional)] show_staff: bool,
    #[prop(optional)] on_edit: Option<Callback<Contract>>,
    #[prop(optional)] on_delete: Option<Callback<Contract>>,
) -> impl IntoView {
    let empty_title = store_value(empty_title);
    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
            <Show
                when=move || contracts.with(|list| !list.is_empty())
                fallback=move || view! { <EmptyState title=empty_title.get_value() icon="fas fa-file-contract" /> }
            >
                <div class="overflow-x-auto rounded-lg border border-border">
                    <table class="min-w-full">
                        <thead class="bg-surface-muted text-left text-xs uppercase text-fg-muted">
                            <tr>
                                {show_staff.then(|| view! { <th class="px-4 py-2">"Staff"</th> })}
                                <th class="px-4 py-2">"Content"</th>
                                <th class="px-4 py-2">"From"</th>
                                <th class="px-4 py-2">"To"</th>
                                <th class="px-4 py-2">"Duration"</th>
                                <th class="px-4 py-2">"Status"</th>
                                <th class="px-4 py-2"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || contracts
                                .get()
                                .into_iter()
                                .map(|contract| contract_row(contract, show_staff, on_edit, on_delete))
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </Show>
    }
}
