use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Sanitation,
    Laundry,
    Food,
    Communication,
    Maintenance,
    Administration,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 6] = [
        TaskCategory::Sanitation,
        TaskCategory::Laundry,
        TaskCategory::Food,
        TaskCategory::Communication,
        TaskCategory::Maintenance,
        TaskCategory::Administration,
    ];

    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            TaskCategory::Sanitation => "Sanitation",
            TaskCategory::Laundry => "Laundry",
            TaskCategory::Food => "Food & Nutrition",
            TaskCategory::Communication => "Communication",
            TaskCategory::Maintenance => "Maintenance",
            TaskCategory::Administration => "Administration",
        }
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskCategory::Sanitation => write!(f, "sanitation"),
            TaskCategory::Laundry => write!(f, "laundry"),
            TaskCategory::Food => write!(f, "food"),
            TaskCategory::Communication => write!(f, "communication"),
            TaskCategory::Maintenance => write!(f, "maintenance"),
            TaskCategory::Administration => write!(f, "administration"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task category: {0}")]
pub struct ParseTaskCategoryError(String);

impl FromStr for TaskCategory {
    type Err = ParseTaskCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sanitation" => Ok(TaskCategory::Sanitation),
            "laundry" => Ok(TaskCategory::Laundry),
            "food" => Ok(TaskCategory::Food),
            "communication" => Ok(TaskCategory::Communication),
            "maintenance" => Ok(TaskCategory::Maintenance),
            "administration" => Ok(TaskCategory::Administration),
            _ => Err(ParseTaskCategoryError(s.to_string())),
        }
    }
}

/// Which class of day a recurring task definition belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RecurrenceDay {
    GameDay,
    OffDay,
}

impl RecurrenceDay {
    /// Whether a definition with this tag recurs given the day's class.
    pub fn applies(self, game_day: bool) -> bool {
        match self {
            RecurrenceDay::GameDay => game_day,
            RecurrenceDay::OffDay => !game_day,
        }
    }
}

impl std::fmt::Display for RecurrenceDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurrenceDay::GameDay => write!(f, "game-day"),
            RecurrenceDay::OffDay => write!(f, "off-day"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid recurrence day: {0}")]
pub struct ParseRecurrenceDayError(String);

impl FromStr for RecurrenceDay {
    type Err = ParseRecurrenceDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "game-day" | "game" => Ok(RecurrenceDay::GameDay),
            "off-day" | "off" => Ok(RecurrenceDay::OffDay),
            _ => Err(ParseRecurrenceDayError(s.to_string())),
        }
    }
}

/// Day-class restriction on a one-off scheduled task.
///
/// Stored as a nullable integer (`NULL` = any day, `1` = game days only,
/// `2` = off days only) so rows created before the restriction existed
/// keep appearing on every day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DayRule {
    #[default]
    Any,
    GameDaysOnly,
    OffDaysOnly,
}

impl DayRule {
    pub fn from_db(value: Option<i64>) -> Self {
        match value {
            Some(1) => DayRule::GameDaysOnly,
            Some(2) => DayRule::OffDaysOnly,
            _ => DayRule::Any,
        }
    }

    pub fn to_db(self) -> Option<i64> {
        match self {
            DayRule::Any => None,
            DayRule::GameDaysOnly => Some(1),
            DayRule::OffDaysOnly => Some(2),
        }
    }

    /// Whether a task under this rule is active given the day's class.
    pub fn admits(self, game_day: bool) -> bool {
        match self {
            DayRule::Any => true,
            DayRule::GameDaysOnly => game_day,
            DayRule::OffDaysOnly => !game_day,
        }
    }
}

impl std::fmt::Display for DayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayRule::Any => write!(f, "any"),
            DayRule::GameDaysOnly => write!(f, "game-days"),
            DayRule::OffDaysOnly => write!(f, "off-days"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid day rule: {0}")]
pub struct ParseDayRuleError(String);

impl FromStr for DayRule {
    type Err = ParseDayRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" => Ok(DayRule::Any),
            "game-days" | "game" => Ok(DayRule::GameDaysOnly),
            "off-days" | "off" => Ok(DayRule::OffDaysOnly),
            _ => Err(ParseDayRuleError(s.to_string())),
        }
    }
}

/// A single scheduled game within a series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    #[serde(with = "uuid::serde::compact")]
    pub id: Uuid,
    /// Calendar day of the game; no time precision required beyond "day"
    pub date: NaiveDate,
    /// Wall-clock first pitch, when recorded
    pub start_time: Option<NaiveTime>,
    /// Sequence number within the owning series (1-based)
    pub game_number: i64,
}

/// A consecutive run of games between the same two teams.
///
/// Every game in the series shares the home/visiting pair; games carry no
/// team fields of their own, so the invariant is structural.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSeries {
    #[serde(with = "uuid::serde::compact")]
    pub id: Uuid,
    pub home_team: String,
    pub visiting_team: String,
    pub games: Vec<Game>,
}

impl GameSeries {
    /// Whether the named team plays in this series at all.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.visiting_team == team
    }
}

/// A recurring task definition, expanded per day by the checklist module.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecurringTask {
    #[serde(with = "uuid::serde::compact")]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: TaskCategory,
    pub day: RecurrenceDay,
    pub time: NaiveTime,
    /// Toggles participation without deletion
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A one-off task pinned to a specific calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledTask {
    #[serde(with = "uuid::serde::compact")]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: TaskCategory,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub completed: bool,
    pub day_rule: DayRule,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Home/away classification of a (date, team) pair.
///
/// Both flags are exposed instead of a single enum so callers can detect
/// the "home and away on the same day" anomaly explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayClassification {
    pub home: bool,
    pub away: bool,
}

impl DayClassification {
    pub fn is_game_day(&self) -> bool {
        self.home || self.away
    }

    pub fn kind(&self) -> GameDayKind {
        match (self.home, self.away) {
            (true, true) => GameDayKind::Both,
            (true, false) => GameDayKind::Home,
            (false, true) => GameDayKind::Away,
            (false, false) => GameDayKind::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameDayKind {
    None,
    Home,
    Away,
    Both,
}

impl std::fmt::Display for GameDayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameDayKind::None => write!(f, "none"),
            GameDayKind::Home => write!(f, "home"),
            GameDayKind::Away => write!(f, "away"),
            GameDayKind::Both => write!(f, "both"),
        }
    }
}

/// Composite identity of a task occurrence.
///
/// Replaces the string-concatenation form `recurring-<id>-<date>` with a
/// structured key; the legacy string shape survives only in `Display` and
/// is never parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    Scheduled(Uuid),
    Recurring { def_id: Uuid, date: NaiveDate },
}

impl std::fmt::Display for TaskKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskKey::Scheduled(id) => write!(f, "{}", id),
            TaskKey::Recurring { def_id, date } => {
                write!(f, "recurring-{}-{}", def_id, date.format("%Y-%m-%d"))
            }
        }
    }
}

/// The materialized occurrence of a scheduled or recurring task on a
/// specific date. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInstance {
    pub key: TaskKey,
    pub title: String,
    pub description: Option<String>,
    pub category: TaskCategory,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub completed: bool,
}

impl TaskInstance {
    pub fn from_scheduled(task: &ScheduledTask) -> Self {
        Self {
            key: TaskKey::Scheduled(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category,
            date: task.date,
            time: task.time,
            completed: task.completed,
        }
    }

    pub fn from_recurring(def: &RecurringTask, date: NaiveDate, completed: bool) -> Self {
        Self {
            key: TaskKey::Recurring { def_id: def.id, date },
            title: def.title.clone(),
            description: def.description.clone(),
            category: def.category,
            date,
            time: def.time,
            completed,
        }
    }
}

/// Per-day completion state for recurring task instances.
///
/// Absence of an entry means "not completed", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionMap {
    days: HashMap<NaiveDate, HashMap<Uuid, bool>>,
}

impl CompletionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, date: NaiveDate, def_id: Uuid) -> bool {
        self.days
            .get(&date)
            .and_then(|day| day.get(&def_id))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&mut self, date: NaiveDate, def_id: Uuid, completed: bool) {
        self.days.entry(date).or_default().insert(def_id, completed);
    }

    /// Flips the stored state and returns the new value.
    pub fn toggle(&mut self, date: NaiveDate, def_id: Uuid) -> bool {
        let next = !self.is_completed(date, def_id);
        self.set(date, def_id, next);
        next
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Bucket a game-day task lands in relative to first pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePeriod {
    Morning,
    Pregame,
    Postgame,
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimePeriod::Morning => write!(f, "morning"),
            TimePeriod::Pregame => write!(f, "pre-game"),
            TimePeriod::Postgame => write!(f, "post-game"),
        }
    }
}

// ============================================================================
// Data Transfer Objects (DTOs)
// ============================================================================

#[derive(Debug, Clone)]
pub struct NewScheduledTask {
    pub title: String,
    pub description: Option<String>,
    pub category: TaskCategory,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub day_rule: DayRule,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateScheduledTask {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<TaskCategory>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub day_rule: Option<DayRule>,
}

#[derive(Debug, Clone)]
pub struct NewRecurringTask {
    pub title: String,
    pub description: Option<String>,
    pub category: TaskCategory,
    pub day: RecurrenceDay,
    pub time: NaiveTime,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRecurringTask {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<TaskCategory>,
    pub day: Option<RecurrenceDay>,
    pub time: Option<NaiveTime>,
}

/// Data required to schedule a new series.
///
/// A series is 3 or 6 games on consecutive calendar days between the same
/// two teams; `start_time`, when present, applies to every game.
#[derive(Debug, Clone)]
pub struct NewGameSeries {
    pub home_team: String,
    pub visiting_team: String,
    pub start_date: NaiveDate,
    pub game_count: u32,
    pub start_time: Option<NaiveTime>,
}
