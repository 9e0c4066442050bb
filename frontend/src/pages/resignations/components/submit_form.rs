use crate::components::forms::{SubmitButton, TextAreaField, TextField};
use crate::state::form::FormState;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn ResignationForm(
    form: FormState,
    submitting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="rounded-2xl border border-border bg-surface-elevated p-6 shadow-sm space-y-4"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <h2 class="text-lg font-semibold text-fg">"Submit a resignation"</h2>
            <TextAreaField form=form name="reason" label="Reason" rows=4 />
            <TextField form=form name="approver_id" label="Approver ID" placeholder="Manager staff ID" />
            <div class="flex justify-end">
                <SubmitButton submitting=submitting label="Submit" />
            </div>
        </form>
    }
}
