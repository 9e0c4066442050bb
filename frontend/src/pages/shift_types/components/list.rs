use crate::api::ShiftType;
use crate::components::{
    common::{Button, ButtonVariant},
    empty_state::EmptyState,
    layout::LoadingSpinner,
};
use crate::pages::shift_types::utils::describe_duration;
use leptos::*;

#[component]
pub fn ShiftTypeList(
    shifts: Signal<Vec<ShiftType>>,
    loading: Signal<bool>,
    on_edit: Callback<ShiftType>,
    on_delete: Callback<ShiftType>,
) -> impl IntoView {
    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
            <Show
                when=move || shifts.with(|list| !list.is_empty())
                fallback=|| view! {
                    <EmptyState
                        title="No shift types"
                        description="Define the shifts staff can be scheduled on."
                        icon="fas fa-clock"
                    />
                }
            >
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    {move || shifts
                        .get()
                        .into_iter()
                        .map(|shift| {
                            let duration = describe_duration(&shift);
                            let hours = format!("{} - {}", shift.start_time, shift.end_time);
                            let edit = shift.clone();
                            let delete = shift.clone();
                            view! {
                                <article class="rounded-xl border border-border bg-surface-elevated p-4 space-y-2">
                                    <div class="flex items-center justify-between">
                                        <h3 class="font-semibold text-fg">{shift.name.clone()}</h3>
                                        <span class="text-xs text-fg-muted">{duration}</span>
                                    </div>
                                    <p class="font-mono text-sm text-fg">{hours}</p>
                                    {shift.description.clone().map(|d| view! { <p class="text-sm text-fg-muted">{d}</p> })}
                                    <div class="flex justify-end gap-2">
                                        <Button
                                            variant=ButtonVariant::Ghost
                                            on_click=Callback::new(move |_| on_edit.call(edit.clone()))
                                        >
                                            "Edit"
                                        </Button>
                                        <Button
                                            variant=ButtonVariant::Danger
                                            on_click=Callback::new(move |_| on_delete.call(delete.clone()))
                                        >
                                            "Delete"
                                        </Button>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </Show>
    }
}
