use crate::api::ResignationStatus;
use crate::components::{forms::SubmitButton, modal::FormDialog};
use crate::pages::resignations::utils::DecisionDraft;
use leptos::*;

#[component]
pub fn DecisionDialog(
    is_open: Signal<bool>,
    draft: Signal<Option<DecisionDraft>>,
    note: RwSignal<String>,
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || {
        draft.with(|d| d.as_ref().map(|d| d.title().to_string()).unwrap_or_default())
    });
    let reason = move || {
        draft.with(|d| {
            d.as_ref()
                .map(|d| d.resignation.reason.clone())
                .unwrap_or_default()
        })
    };
    let confirm_label = move || {
        draft.with(|d| match d.as_ref().map(|d| d.status) {
            Some(ResignationStatus::Approved) => "Approve",
            _ => "Reject",
        })
    };

    view! {
        <FormDialog is_open=is_open title=title on_close=on_close on_submit=on_confirm>
            <blockquote class="border-l-4 border-border pl-3 text-sm text-fg-muted">{reason}</blockquote>
            <div class="space-y-1">
                <label for="decision-note" class="block text-sm font-medium text-fg">"Note"</label>
                <textarea
                    id="decision-note"
                    rows=3
                    class="w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg"
                    prop:value=move || note.get()
                    on:input=move |ev| note.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="flex justify-end">
                <SubmitButton submitting=busy label=confirm_label() />
            </div>
        </FormDialog>
    }
}
