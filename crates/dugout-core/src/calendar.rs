//! Calendar-day normalization and the fixed overview window used by the
//! calendar view. All comparisons are wall-clock local days; no timezone
//! conversion is involved anywhere in the crate.

use crate::models::{GameDayKind, GameSeries, RecurringTask, ScheduledTask};
use crate::schedule;
use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;

/// Strips the time-of-day, leaving midnight of the same calendar day.
/// Idempotent: normalizing twice equals normalizing once.
pub fn normalize_day(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date().and_time(NaiveTime::MIN)
}

/// True iff both values fall on the identical calendar day.
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// The current local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The population window for calendar overviews: first day of the
/// previous month through the last day of the next month.
pub fn month_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first_of_month = today.with_day0(0).unwrap();
    let start = first_of_month - Months::new(1);
    let end = (first_of_month + Months::new(2)) - Days::new(1);
    (start, end)
}

/// Per-day count of tasks due within the overview window: one-off tasks
/// whose day rule admits the day, plus the recurring definitions that
/// expand on it.
pub fn task_counts_per_day(
    tasks: &[ScheduledTask],
    recurring: &[RecurringTask],
    series: &[GameSeries],
    team: &str,
    today: NaiveDate,
) -> HashMap<NaiveDate, usize> {
    let (start, end) = month_window(today);
    let mut counts = HashMap::new();

    let mut day = start;
    while day <= end {
        let game_day = schedule::is_game_day(day, team, series);
        let scheduled = tasks
            .iter()
            .filter(|t| t.date == day && t.day_rule.admits(game_day))
            .count();
        let expanded = recurring
            .iter()
            .filter(|def| def.enabled && def.day.applies(game_day))
            .count();
        let total = scheduled + expanded;
        if total > 0 {
            counts.insert(day, total);
        }
        day = day + Days::new(1);
    }

    counts
}

/// Per-day game classification within the overview window; days with no
/// game for the team are omitted.
pub fn game_kinds_per_day(
    series: &[GameSeries],
    team: &str,
    today: NaiveDate,
) -> HashMap<NaiveDate, GameDayKind> {
    let mut kinds = HashMap::new();
    if team.is_empty() || series.is_empty() {
        return kinds;
    }

    let (start, end) = month_window(today);
    let mut day = start;
    while day <= end {
        let kind = schedule::classify(day, team, series).kind();
        if kind != GameDayKind::None {
            kinds.insert(day, kind);
        }
        day = day + Days::new(1);
    }

    kinds
}
