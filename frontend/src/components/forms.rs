use crate::state::form::FormState;
use crate::utils::time::format_hour;
use leptos::*;

const INPUT_CLASS: &str = "w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg";

fn field_id(name: &str) -> String {
    format!("field-{}", name)
}

#[component]
pub fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <p class="text-xs text-status-error-text">{message}</p> })
    }
}

#[component]
pub fn TextField(
    form: FormState,
    name: &'static str,
    #[prop(into)] label: String,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let value = form.value(name);
    view! {
        <div class="space-y-1">
            <label for=field_id(name) class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=field_id(name)
                name=name
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| form.set(name, event_target_value(&ev))
            />
            <FieldError error=form.error(name) />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    form: FormState,
    name: &'static str,
    #[prop(into)] label: String,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let value = form.value(name);
    view! {
        <div class="space-y-1">
            <label for=field_id(name) class="block text-sm font-medium text-fg">{label}</label>
            <textarea
                id=field_id(name)
                name=name
                rows=rows.unwrap_or(4)
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| form.set(name, event_target_value(&ev))
            ></textarea>
            <FieldError error=form.error(name) />
        </div>
    }
}

/// `options` are `(value, label)` pairs; an empty value renders as the placeholder.
#[component]
pub fn SelectField(
    form: FormState,
    name: &'static str,
    #[prop(into)] label: String,
    options: Vec<(String, String)>,
) -> impl IntoView {
    let value = form.value(name);
    view! {
        <div class="space-y-1">
            <label for=field_id(name) class="block text-sm font-medium text-fg">{label}</label>
            <select
                id=field_id(name)
                name=name
                class=INPUT_CLASS
                on:change=move |ev| form.set(name, event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        let selected_value = option.clone();
                        view! {
                            <option
                                value=option
                                selected=move || value.with(|v| *v == selected_value)
                            >
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError error=form.error(name) />
        </div>
    }
}

pub fn hour_options() -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select hour".to_string()))
        .chain((0..24).map(|hour| (format_hour(hour), format_hour(hour))))
        .collect()
}

#[component]
pub fn HourSelect(form: FormState, name: &'static str, #[prop(into)] label: String) -> impl IntoView {
    view! { <SelectField form=form name=name label=label options=hour_options() /> }
}

#[component]
pub fn SubmitButton(
    submitting: Signal<bool>,
    #[prop(into)] label: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
            disabled=move || submitting.get() || disabled.get()
        >
            {move || if submitting.get() { "Saving...".to_string() } else { label.clone() }}
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::form::{FieldSpec, Rule};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_shows_validation_error() {
        let html = render_to_string(move || {
            let form = FormState::new(vec![FieldSpec::new("reason", "Reason").rule(Rule::Required)]);
            let _ = form.validate();
            view! { <TextField form=form name="reason" label="Reason" /> }
        });
        assert!(html.contains("Reason is required"));
        assert!(html.contains("id=\"field-reason\""));
    }

    #[test]
    fn hour_select_lists_every_hour() {
        let options = hour_options();
        assert_eq!(options.len(), 25);
        assert_eq!(options[1].0, "00:00");
        assert_eq!(options[24].0, "23:00");

        let html = render_to_string(move || {
            let form = FormState::new(vec![FieldSpec::new("start", "Start").initial("08:00")]);
            view! { <HourSelect form=form name="start" label="Start" /> }
        });
        assert!(html.contains("23:00"));
    }

    #[test]
    fn submit_button_label_follows_submitting() {
        let html = render_to_string(move || {
            let submitting = create_rw_signal(true);
            view! { <SubmitButton submitting=submitting.into() label="Save" /> }
        });
        assert!(html.contains("Saving..."));
    }
}
