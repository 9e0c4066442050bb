use crate::api::{NewResignation, Resignation, ResignationStatus};
use crate::state::form::{FieldSpec, FormValues, Rule};

pub const REASON_MIN_CHARS: usize = 10;

pub fn resignation_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("reason", "Reason")
            .rule(Rule::Required)
            .rule(Rule::MinLength(REASON_MIN_CHARS))
            .rule(Rule::MaxLength(1000)),
        FieldSpec::new("approver_id", "Approver ID").rule(Rule::Required),
    ]
}

pub fn new_resignation(values: &FormValues) -> NewResignation {
    NewResignation {
        reason: values.trimmed("reason"),
        approver_id: values.trimmed("approver_id"),
    }
}

/// Only requests nobody has acted on yet can be withdrawn or decided.
pub fn is_open(resignation: &Resignation) -> bool {
    resignation.status == ResignationStatus::Pending
}

pub fn status_badge_class(status: ResignationStatus) -> &'static str {
    match status {
        ResignationStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        ResignationStatus::Approved => "bg-status-success-bg text-status-success-text",
        ResignationStatus::Rejected => "bg-status-error-bg text-status-error-text",
    }
}

/// What an approver is about to do with a request.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionDraft {
    pub resignation: Resignation,
    pub status: ResignationStatus,
}

impl DecisionDraft {
    pub fn title(&self) -> &'static str {
        match self.status {
            ResignationStatus::Approved => "Approve resignation",
            _ => "Reject resignation",
        }
    }
}
