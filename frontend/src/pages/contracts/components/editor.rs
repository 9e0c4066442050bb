use crate::components::{
    forms::{SubmitButton, TextAreaField, TextField},
    modal::FormDialog,
};
use crate::state::form::FormState;
use leptos::*;

#[component]
pub fn ContractEditor(
    form: FormState,
    is_open: Signal<bool>,
    editing: Signal<bool>,
    submitting: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || {
        if editing.get() {
            "Edit contract".to_string()
        } else {
            "New contract".to_string()
        }
    });
    view! {
        <FormDialog is_open=is_open title=title on_close=on_close on_submit=on_submit>
            <Show
                when=move || editing.get()
                fallback=move || view! { <TextField form=form name="staff_id" label="Staff ID" /> }
            >
                <p class="text-sm text-fg-muted">
                    "Staff ID: " <span class="font-mono">{move || form.value("staff_id").get()}</span>
                </p>
            </Show>
            <TextAreaField form=form name="content" label="Content" rows=5 />
            <div class="grid grid-cols-2 gap-4">
                <TextField form=form name="from_date" label="Start date" input_type="date" />
                <TextField form=form name="to_date" label="End date" input_type="date" />
            </div>
            <div class="flex justify-end">
                <SubmitButton submitting=submitting label="Save" />
            </div>
        </FormDialog>
    }
}
