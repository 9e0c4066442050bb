use crate::components::{
    forms::{HourSelect, SubmitButton, TextAreaField, TextField},
    modal::FormDialog,
};
use crate::state::form::FormState;
use leptos::*;

#[component]
pub fn ShiftTypeEditor(
    form: FormState,
    is_open: Signal<bool>,
    editing: Signal<bool>,
    duration: Signal<Option<String>>,
    submitting: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || {
        if editing.get() { "Edit shift type" } else { "New shift type" }.to_string()
    });
    view! {
        <FormDialog is_open=is_open title=title on_close=on_close on_submit=on_submit>
            <TextField form=form name="name" label="Name" placeholder="Morning" />
            <div class="grid grid-cols-2 gap-4">
                <HourSelect form=form name="start_time" label="Start time" />
                <HourSelect form=form name="end_time" label="End time" />
            </div>
            <p class="text-sm text-fg-muted">
                {move || duration.get().map(|d| format!("Duration: {}", d))}
            </p>
            <TextAreaField form=form name="description" label="Description" rows=3 />
            <div class="flex justify-end">
                <SubmitButton submitting=submitting label="Save" />
            </div>
        </FormDialog>
    }
}
