use crate::components::forms::{SubmitButton, TextField};
use crate::state::form::FormState;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn CvSubmitForm(
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
            <h2 class="text-lg font-semibold text-fg">"Submit a CV"</h2>
            <TextField
                form=form
                name="cv_url"
                label="CV link"
                input_type="url"
                placeholder="https://drive.example.com/cv.pdf"
            />
            <div class="flex justify-end">
                <SubmitButton submitting=submitting label="Submit" />
            </div>
        </form>
    }
}
