use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use chrono_english::{parse_date_string, Dialect};
use dugout_core::models::{DayRule, RecurrenceDay, TaskCategory};
use dugout_core::timefmt;

/// Parses a calendar day from an ISO date or natural language
/// ("today", "tomorrow", "next friday").
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        return Ok(date);
    }

    parse_date_string(input, Local::now(), Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|_| anyhow!("Could not parse day: '{}'. Try '2026-02-10' or 'next friday'", input))
}

pub fn parse_time(input: &str) -> Result<chrono::NaiveTime> {
    Ok(timefmt::parse_time_of_day(input)?)
}

pub fn parse_category(input: &str) -> Result<TaskCategory> {
    input
        .parse()
        .map_err(|_| anyhow!("Unknown category: '{}'. One of: sanitation, laundry, food, communication, maintenance, administration", input))
}

pub fn parse_day_rule(input: &str) -> Result<DayRule> {
    input
        .parse()
        .map_err(|_| anyhow!("Unknown day rule: '{}'. One of: any, game-days, off-days", input))
}

pub fn parse_recurrence_day(input: &str) -> Result<RecurrenceDay> {
    input
        .parse()
        .map_err(|_| anyhow!("Unknown recurrence day: '{}'. One of: game-day, off-day", input))
}
