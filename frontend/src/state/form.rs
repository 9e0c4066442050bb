use chrono::NaiveDate;
use leptos::*;
use log::{info, warn};
use std::{collections::BTreeMap, future::Future, rc::Rc};
use thiserror::Error;

use super::{cancel::CancelToken, toast::Notifier};
use crate::api::{ApiError, Reply};
use crate::utils::time::{parse_date_input, parse_hour};

pub const VALIDATION_TOAST: &str = "Please check the form fields";
pub const SAVE_SUCCESS_FALLBACK: &str = "Saved successfully";
pub const SAVE_ERROR_FALLBACK: &str = "Something went wrong";

type CustomRule = Rc<dyn Fn(&str, &FormValues) -> Result<(), String>>;

#[derive(Clone)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    /// Absolute `http`/`https` URL.
    Url,
    /// Whole hour, `HH:00`.
    Hour,
    /// `YYYY-MM-DD`.
    Date,
    /// Receives the trimmed value and every other field.
    Custom(CustomRule),
}

impl Rule {
    pub fn custom(check: impl Fn(&str, &FormValues) -> Result<(), String> + 'static) -> Self {
        Rule::Custom(Rc::new(check))
    }

    fn check(&self, label: &str, value: &str, values: &FormValues) -> Result<(), String> {
        let value = value.trim();
        if let Rule::Required = self {
            return if value.is_empty() {
                Err(format!("{} is required", label))
            } else {
                Ok(())
            };
        }
        // Optional fields only get checked once they have content.
        if value.is_empty() {
            return Ok(());
        }
        match self {
            Rule::Required => Ok(()),
            Rule::MinLength(min) if value.chars().count() < *min => Err(format!(
                "{} must be at least {} characters",
                label, min
            )),
            Rule::MaxLength(max) if value.chars().count() > *max => {
                Err(format!("{} must be at most {} characters", label, max))
            }
            Rule::MinLength(_) | Rule::MaxLength(_) => Ok(()),
            Rule::Url => match url::Url::parse(value) {
                Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
                _ => Err(format!("{} must be a valid http(s) URL", label)),
            },
            Rule::Hour => parse_hour(value)
                .map(|_| ())
                .ok_or_else(|| format!("{} must be a whole hour (HH:00)", label)),
            Rule::Date => parse_date_input(value)
                .map(|_| ())
                .ok_or_else(|| format!("{} must be a date (YYYY-MM-DD)", label)),
            Rule::Custom(check) => check(value, values),
        }
    }
}

#[derive(Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub initial: String,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            initial: String::new(),
            rules: Vec::new(),
        }
    }

    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = value.into();
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// Snapshot of every field, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn trimmed(&self, name: &str) -> String {
        self.get(name).trim().to_string()
    }

    pub fn optional(&self, name: &str) -> Option<String> {
        Some(self.trimmed(name)).filter(|v| !v.is_empty())
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        parse_date_input(self.get(name))
    }

    pub fn hour(&self, name: &str) -> Option<u32> {
        parse_hour(self.get(name))
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }
}

impl<'a> FromIterator<(&'a str, String)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (&'a str, String)>>(iter: I) -> Self {
        FormValues(
            iter.into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub BTreeMap<String, String>);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("form was closed before the response arrived")]
    Cancelled,
}

pub type FormSubmitResult<T> = Result<T, SubmitError>;

/// Field values and per-field errors for one form.
#[derive(Clone, Copy)]
pub struct FormState {
    fields: StoredValue<Vec<FieldSpec>>,
    values: RwSignal<BTreeMap<String, String>>,
    errors: RwSignal<BTreeMap<String, String>>,
}

impl FormState {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let initial = Self::initial_values(&fields);
        Self {
            fields: store_value(fields),
            values: create_rw_signal(initial),
            errors: create_rw_signal(BTreeMap::new()),
        }
    }

    fn initial_values(fields: &[FieldSpec]) -> BTreeMap<String, String> {
        fields
            .iter()
            .map(|field| (field.name.to_string(), field.initial.clone()))
            .collect()
    }

    pub fn value(&self, name: &'static str) -> Signal<String> {
        let values = self.values;
        Signal::derive(move || values.with(|v| v.get(name).cloned().unwrap_or_default()))
    }

    pub fn get_untracked(&self, name: &str) -> String {
        self.values
            .with_untracked(|v| v.get(name).cloned().unwrap_or_default())
    }

    /// Editing a field clears its error.
    pub fn set(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        self.values.update(|v| {
            v.insert(name.to_string(), value);
        });
        if self.errors.with_untracked(|e| e.contains_key(name)) {
            self.errors.update(|e| {
                e.remove(name);
            });
        }
    }

    pub fn error(&self, name: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(name).cloned()))
    }

    pub fn has_errors(&self) -> Signal<bool> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| !e.is_empty()))
    }

    /// Loads an existing record into the form, e.g. before an edit dialog opens.
    pub fn fill<'a>(&self, pairs: impl IntoIterator<Item = (&'a str, String)>) {
        self.values.update(|v| {
            for (name, value) in pairs {
                v.insert(name.to_string(), value);
            }
        });
        self.errors.set(BTreeMap::new());
    }

    pub fn values(&self) -> FormValues {
        FormValues(self.values.get_untracked())
    }

    /// First failing rule per field wins; errors are published for display.
    pub fn validate(&self) -> Result<FormValues, ValidationErrors> {
        let values = self.values();
        let errors: BTreeMap<String, String> = self.fields.with_value(|fields| {
            fields
                .iter()
                .filter_map(|field| {
                    let value = values.get(field.name);
                    field
                        .rules
                        .iter()
                        .find_map(|rule| rule.check(field.label, value, &values).err())
                        .map(|message| (field.name.to_string(), message))
                })
                .collect()
        });
        self.errors.set(errors.clone());
        if errors.is_empty() {
            Ok(values)
        } else {
            Err(ValidationErrors(errors))
        }
    }

    pub fn reset(&self) {
        let initial = self.fields.with_value(|fields| Self::initial_values(fields));
        self.values.set(initial);
        self.errors.set(BTreeMap::new());
    }
}

pub struct FormOptions<T: 'static> {
    pub notifier: Rc<dyn Notifier>,
    pub on_success: Option<Rc<dyn Fn(&Reply<T>)>>,
    pub on_error: Option<Rc<dyn Fn(&SubmitError)>>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl<T: 'static> FormOptions<T> {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            notifier,
            on_success: None,
            on_error: None,
            success_message: None,
            error_message: None,
        }
    }

    pub fn on_success(mut self, callback: impl Fn(&Reply<T>) + 'static) -> Self {
        self.on_success = Some(Rc::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(&SubmitError) + 'static) -> Self {
        self.on_error = Some(Rc::new(callback));
        self
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

pub struct FormHandle<T: 'static> {
    pub state: FormState,
    pub submitting: RwSignal<bool>,
    options: Rc<FormOptions<T>>,
    cancel: CancelToken,
}

impl<T: 'static> Clone for FormHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            submitting: self.submitting,
            options: self.options.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl<T: 'static> FormHandle<T> {
    pub fn new(fields: Vec<FieldSpec>, options: FormOptions<T>) -> Self {
        Self {
            state: FormState::new(fields),
            submitting: create_rw_signal(false),
            options: Rc::new(options),
            cancel: CancelToken::new(),
        }
    }

    fn report_error(&self, err: &SubmitError) {
        if let Some(callback) = &self.options.on_error {
            callback(err);
        }
    }

    /// Validate, transform, call. The api is never reached with invalid input.
    pub async fn handle_submit<P, F, Fut, X>(&self, api: F, transform: X) -> FormSubmitResult<T>
    where
        X: FnOnce(FormValues) -> P,
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<Reply<T>, ApiError>>,
    {
        let values = match self.state.validate() {
            Ok(values) => values,
            Err(errors) => {
                self.options.notifier.error(VALIDATION_TOAST);
                let err = SubmitError::from(errors);
                self.report_error(&err);
                return Err(err);
            }
        };

        self.submitting.set(true);
        let result = api(transform(values)).await;
        if self.cancel.is_cancelled() {
            return Err(SubmitError::Cancelled);
        }
        self.submitting.set(false);

        match result {
            Ok(reply) => {
                let message = self
                    .options
                    .success_message
                    .clone()
                    .or_else(|| Some(reply.message.trim().to_string()).filter(|m| !m.is_empty()))
                    .unwrap_or_else(|| SAVE_SUCCESS_FALLBACK.to_string());
                info!("Form submitted: {}", message);
                self.options.notifier.success(&message);
                self.state.reset();
                if let Some(callback) = &self.options.on_success {
                    callback(&reply);
                }
                Ok(reply.data)
            }
            Err(err) => {
                let fallback = self
                    .options
                    .error_message
                    .as_deref()
                    .unwrap_or(SAVE_ERROR_FALLBACK);
                let message = err.message_or(fallback);
                warn!("Form submit failed ({}): {}", err.code, message);
                self.options.notifier.error(&message);
                let err = SubmitError::from(err);
                self.report_error(&err);
                Err(err)
            }
        }
    }

    pub async fn submit_values<F, Fut>(&self, api: F) -> FormSubmitResult<T>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<Reply<T>, ApiError>>,
    {
        self.handle_submit(api, |values| values).await
    }

    pub fn reset(&self) {
        self.state.reset();
    }
}

pub fn use_form<T: 'static>(fields: Vec<FieldSpec>, options: FormOptions<T>) -> FormHandle<T> {
    let handle = FormHandle::new(fields, options);
    handle.cancel.bind_to_owner();
    handle
}
