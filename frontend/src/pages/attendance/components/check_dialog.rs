use crate::components::{forms::SubmitButton, modal::FormDialog};
use crate::state::attendance::AttendanceAction;
use leptos::*;

#[component]
pub fn CheckDialog(
    is_open: Signal<bool>,
    action: Signal<Option<AttendanceAction>>,
    location: RwSignal<String>,
    submitting: Signal<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || {
        action
            .get()
            .map(|action| format!("Confirm {}", action.label()))
            .unwrap_or_default()
    });
    let confirm_label = move || action.get().map(|a| a.label()).unwrap_or("Confirm");

    view! {
        <FormDialog is_open=is_open title=title on_close=on_close on_submit=on_confirm>
            <div class="space-y-1">
                <label for="attendance-location" class="block text-sm font-medium text-fg">"Location"</label>
                <input
                    id="attendance-location"
                    type="text"
                    class="w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg"
                    placeholder="Latitude, longitude or office name"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <p class="text-xs text-fg-muted">"Detected automatically when your browser allows it."</p>
            </div>
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                    on:click=move |_| on_close.call(())
                >
                    "Cancel"
                </button>
                <SubmitButton submitting=submitting label=confirm_label() />
            </div>
        </FormDialog>
    }
}
