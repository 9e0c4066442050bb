use chrono::{Datelike, Duration, Months, NaiveDate};
use chrono_tz::Tz;

use crate::api::AttendanceRecord;
use crate::utils::time::{format_time, local_date};

pub fn month_bounds(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(day.year(), day.month(), 1)?;
    let next_month = first.checked_add_months(Months::new(1))?;
    let last = next_month.checked_sub_signed(Duration::days(1))?;
    Some((first, last))
}

/// First day of the month `delta` months away from `month_start`.
pub fn shift_month(month_start: NaiveDate, delta: i32) -> NaiveDate {
    let first = month_bounds(month_start)
        .map(|(first, _)| first)
        .unwrap_or(month_start);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

pub fn month_label(month_start: NaiveDate) -> String {
    month_start.format("%B %Y").to_string()
}

fn record_day(record: &AttendanceRecord, tz: Tz) -> Option<NaiveDate> {
    record.check_in.or(record.date).map(|t| local_date(t, tz))
}

/// The record whose calendar day in `tz` is `day`.
pub fn record_for_day(
    records: &[AttendanceRecord],
    day: NaiveDate,
    tz: Tz,
) -> Option<&AttendanceRecord> {
    records.iter().find(|r| record_day(r, tz) == Some(day))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctualityTag {
    Late,
    OnTime,
}

impl PunctualityTag {
    pub fn for_record(record: &AttendanceRecord) -> Option<Self> {
        record.check_in?;
        Some(if record.is_late.unwrap_or(false) {
            PunctualityTag::Late
        } else {
            PunctualityTag::OnTime
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            PunctualityTag::Late => "Late",
            PunctualityTag::OnTime => "On time",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub record: Option<AttendanceRecord>,
}

impl CalendarCell {
    /// `("08:02", "17:31")`, or `None` for an empty day.
    pub fn times(&self, tz: Tz) -> Option<(String, String)> {
        let record = self.record.as_ref()?;
        Some((format_time(record.check_in, tz), format_time(record.check_out, tz)))
    }

    pub fn tag(&self) -> Option<PunctualityTag> {
        self.record.as_ref().and_then(PunctualityTag::for_record)
    }
}

/// Monday-first weeks covering the whole month of `month_start`.
pub fn month_grid(
    month_start: NaiveDate,
    records: &[AttendanceRecord],
    tz: Tz,
) -> Vec<Vec<CalendarCell>> {
    let Some((first, last)) = month_bounds(month_start) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_monday() as i64;
    let mut week_start = first - Duration::days(lead);
    let mut weeks = Vec::new();
    while week_start <= last {
        let week = (0..7)
            .map(|offset| {
                let date = week_start + Duration::days(offset);
                let in_month = date.month() == first.month();
                CalendarCell {
                    date,
                    in_month,
                    record: in_month
                        .then(|| record_for_day(records, date, tz).cloned())
                        .flatten(),
                }
            })
            .collect();
        weeks.push(week);
        week_start += Duration::days(7);
    }
    weeks
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummary {
    pub days_present: usize,
    pub late_days: usize,
    pub early_leaves: usize,
    pub total_hours: f64,
}

impl MonthlySummary {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        records
            .iter()
            .filter(|r| r.check_in.is_some())
            .fold(Self::default(), |mut summary, record| {
                summary.days_present += 1;
                if record.is_late.unwrap_or(false) {
                    summary.late_days += 1;
                }
                if record.is_early_leave.unwrap_or(false) {
                    summary.early_leaves += 1;
                }
                summary.total_hours += worked_hours(record);
                summary
            })
    }
}

/// Server figure when present, otherwise the check-in to check-out span.
pub fn worked_hours(record: &AttendanceRecord) -> f64 {
    if let Some(hours) = record.working_hours {
        return hours;
    }
    match (record.check_in, record.check_out) {
        (Some(start), Some(end)) if end > start => (end - start).num_minutes() as f64 / 60.0,
        _ => 0.0,
    }
}
