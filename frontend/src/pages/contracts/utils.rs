use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

use crate::api::{ApiError, Contract, ContractPatch, NewContract};
use crate::state::form::{FieldSpec, FormValues, Rule};
use crate::utils::time::{format_date, local_date, parse_date_input, start_of_day_utc};

/// Whole calendar months between two dates. A partial last month does not
/// count, and an inverted range is zero.
pub fn duration_months(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0) as u32
}

pub fn contract_months(contract: &Contract, tz: Tz) -> u32 {
    duration_months(local_date(contract.from_date, tz), local_date(contract.to_date, tz))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractPhase {
    Upcoming,
    Active,
    Expired,
}

impl ContractPhase {
    pub fn on(from: NaiveDate, to: NaiveDate, today: NaiveDate) -> Self {
        if today < from {
            ContractPhase::Upcoming
        } else if today > to {
            ContractPhase::Expired
        } else {
            ContractPhase::Active
        }
    }

    pub fn of(contract: &Contract, today: NaiveDate, tz: Tz) -> Self {
        Self::on(
            local_date(contract.from_date, tz),
            local_date(contract.to_date, tz),
            today,
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ContractPhase::Upcoming => "Upcoming",
            ContractPhase::Active => "Active",
            ContractPhase::Expired => "Expired",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ContractPhase::Upcoming => "bg-status-info-bg text-status-info-text",
            ContractPhase::Active => "bg-status-success-bg text-status-success-text",
            ContractPhase::Expired => "bg-surface-muted text-fg-muted",
        }
    }
}

pub fn contract_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("staff_id", "Staff ID").rule(Rule::Required),
        FieldSpec::new("content", "Content")
            .rule(Rule::Required)
            .rule(Rule::MaxLength(2000)),
        FieldSpec::new("from_date", "Start date")
            .rule(Rule::Required)
            .rule(Rule::Date),
        FieldSpec::new("to_date", "End date")
            .rule(Rule::Required)
            .rule(Rule::Date)
            .rule(Rule::custom(|value, values| {
                match (values.date("from_date"), parse_date_input(value)) {
                    (Some(from), Some(to)) if to <= from => {
                        Err("End date must be after the start date".to_string())
                    }
                    _ => Ok(()),
                }
            })),
    ]
}

fn required_date(values: &FormValues, name: &str) -> Result<NaiveDate, ApiError> {
    values
        .date(name)
        .ok_or_else(|| ApiError::validation(format!("{} is not a valid date", name)))
}

pub fn new_contract(values: &FormValues, tz: Tz) -> Result<NewContract, ApiError> {
    Ok(NewContract {
        staff_id: values.trimmed("staff_id"),
        content: values.trimmed("content"),
        from_date: start_of_day_utc(required_date(values, "from_date")?, tz),
        to_date: start_of_day_utc(required_date(values, "to_date")?, tz),
    })
}

/// The staff member is fixed once a contract exists, so only the terms are sent.
pub fn contract_patch(values: &FormValues, tz: Tz) -> Result<ContractPatch, ApiError> {
    Ok(ContractPatch {
        content: Some(values.trimmed("content")),
        from_date: Some(start_of_day_utc(required_date(values, "from_date")?, tz)),
        to_date: Some(start_of_day_utc(required_date(values, "to_date")?, tz)),
    })
}

pub fn contract_form_values(contract: &Contract, tz: Tz) -> Vec<(&'static str, String)> {
    vec![
        ("staff_id", contract.staff_id.id().to_string()),
        ("content", contract.content.clone()),
        ("from_date", format_date(contract.from_date, tz)),
        ("to_date", format_date(contract.to_date, tz)),
    ]
}
