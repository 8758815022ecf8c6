use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::models::task::Task;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("{year}-{month:02} is not a representable calendar month")]
    InvalidDate { year: i32, month: u32 },
}

/// One calendar row, Monday through Sunday. `None` marks a padding slot for
/// a day belonging to the previous or next month.
pub type Week = [Option<u32>; 7];

/// A month of tasks laid out for the calendar page.
#[derive(Debug, Serialize)]
pub struct CalendarView {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub weeks: Vec<Week>,
    /// Day of month -> tasks due that day, input order preserved. Only days
    /// with at least one due task get an entry. Serializes with string keys,
    /// which is what the rendering side looks up by.
    pub tasks_by_day: BTreeMap<u32, Vec<Task>>,
    pub prev_year: i32,
    pub prev_month: u32,
    pub next_year: i32,
    pub next_month: u32,
}

/// Lay out `year`/`month` as a Monday-first week grid and group the tasks
/// due in that month by day. Resolved tasks still show on the calendar.
pub fn build_calendar(
    year: i32,
    month: u32,
    tasks: Vec<Task>,
) -> Result<CalendarView, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidDate { year, month })?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(CalendarError::InvalidDate { year, month })?;
    let days_in_month = next_first.signed_duration_since(first).num_days() as u32;

    let mut weeks = Vec::new();
    let mut week: Week = [None; 7];
    let mut slot = first.weekday().num_days_from_monday() as usize;
    for day in 1..=days_in_month {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }

    let mut tasks_by_day: BTreeMap<u32, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        if let Some(due) = task.due_date {
            let due_day = due.date_naive();
            if due_day.year() == year && due_day.month() == month {
                tasks_by_day.entry(due_day.day()).or_default().push(task);
            }
        }
    }

    let (prev_year, prev_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    Ok(CalendarView {
        year,
        month,
        month_name: MONTH_NAMES[(month - 1) as usize],
        weeks,
        tasks_by_day,
        prev_year,
        prev_month,
        next_year,
        next_month,
    })
}
