use crate::api::{ShiftType, ShiftTypePayload};
use crate::state::form::{FieldSpec, FormValues, Rule};
use crate::utils::time::parse_hour;

pub const SAME_START_END: &str = "End time must differ from the start time";

/// Hours covered by a shift. An end at or before the start rolls over
/// midnight; identical hours describe no shift at all.
pub fn shift_duration_hours(start: u32, end: u32) -> Option<u32> {
    if start == end || start > 23 || end > 23 {
        return None;
    }
    Some(if end > start { end - start } else { 24 - start + end })
}

pub fn rolls_over_midnight(start: u32, end: u32) -> bool {
    end < start
}

/// `"8 h"` or `"8 h, overnight"`; `"-"` when the stored times are unusable.
pub fn describe_duration(shift: &ShiftType) -> String {
    match (parse_hour(&shift.start_time), parse_hour(&shift.end_time)) {
        (Some(start), Some(end)) => match shift_duration_hours(start, end) {
            Some(hours) if rolls_over_midnight(start, end) => format!("{} h, overnight", hours),
            Some(hours) => format!("{} h", hours),
            None => "-".to_string(),
        },
        _ => "-".to_string(),
    }
}

pub fn shift_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", "Name")
            .rule(Rule::Required)
            .rule(Rule::MaxLength(100)),
        FieldSpec::new("start_time", "Start time")
            .rule(Rule::Required)
            .rule(Rule::Hour),
        FieldSpec::new("end_time", "End time")
            .rule(Rule::Required)
            .rule(Rule::Hour)
            .rule(Rule::custom(|value, values| {
                if values.hour("start_time") == parse_hour(value) {
                    Err(SAME_START_END.to_string())
                } else {
                    Ok(())
                }
            })),
        FieldSpec::new("description", "Description").rule(Rule::MaxLength(500)),
    ]
}

pub fn shift_payload(values: &FormValues) -> ShiftTypePayload {
    ShiftTypePayload {
        name: values.trimmed("name"),
        start_time: values.trimmed("start_time"),
        end_time: values.trimmed("end_time"),
        description: values.optional("description"),
    }
}

pub fn shift_form_values(shift: &ShiftType) -> Vec<(&'static str, String)> {
    vec![
        ("name", shift.name.clone()),
        ("start_time", shift.start_time.clone()),
        ("end_time", shift.end_time.clone()),
        ("description", shift.description.clone().unwrap_or_default()),
    ]
}
