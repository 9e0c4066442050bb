use crate::api::{Candidate, CandidateStatus};
use crate::state::form::{FieldSpec, Rule};
use crate::utils::status::StatusTab;

pub fn cv_fields() -> Vec<FieldSpec> {
    vec![FieldSpec::new("cv_url", "CV link")
        .rule(Rule::Required)
        .rule(Rule::Url)
        .rule(Rule::MaxLength(2048))]
}

pub fn status_badge_class(status: CandidateStatus) -> &'static str {
    match status {
        CandidateStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        CandidateStatus::Interview => "bg-status-info-bg text-status-info-text",
        CandidateStatus::Accepted => "bg-status-success-bg text-status-success-text",
        CandidateStatus::Rejected => "bg-status-error-bg text-status-error-text",
    }
}

/// Applies a status change to the loaded page. The row leaves a filtered
/// tab it no longer belongs to.
pub fn apply_status_change(
    list: &mut Vec<Candidate>,
    updated: Candidate,
    tab: StatusTab<CandidateStatus>,
) {
    if !tab.matches(updated.status) {
        list.retain(|c| c.id != updated.id);
        return;
    }
    if let Some(index) = list.iter().position(|c| c.id == updated.id) {
        list[index] = updated;
    }
}

/// Shortened link text for the table.
pub fn display_url(url: &str) -> String {
    let trimmed = url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    if trimmed.chars().count() > 48 {
        let head: String = trimmed.chars().take(45).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    }
}
