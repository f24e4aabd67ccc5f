//! Daily checklist derivation: which tasks are due on a given calendar
//! day, and where they fall relative to first pitch.
//!
//! Everything here is a pure function of its inputs. The completion map
//! is read, never written; persistence of toggles belongs to the
//! repository layer.

use crate::models::{
    CompletionMap, DayClassification, GameSeries, RecurringTask, ScheduledTask, TaskInstance,
};
use crate::schedule;
use crate::timefmt::minutes_since_midnight;
use chrono::{NaiveDate, NaiveTime};

/// Cutoff applied when a game day has no recorded start time.
pub const DEFAULT_GAME_TIME_MINUTES: u32 = 19 * 60;

const NOON_MINUTES: u32 = 12 * 60;

/// Materializes the recurring definitions that apply to the date.
///
/// Exactly one tag class is ever included per call: game-day definitions
/// on game days, off-day definitions otherwise. Disabled definitions
/// never expand. Output is ascending by time-of-day.
pub fn expand_recurring(
    defs: &[RecurringTask],
    date: NaiveDate,
    game_day: bool,
    completions: &CompletionMap,
) -> Vec<TaskInstance> {
    let mut instances: Vec<TaskInstance> = defs
        .iter()
        .filter(|def| def.enabled && def.day.applies(game_day))
        .map(|def| TaskInstance::from_recurring(def, date, completions.is_completed(date, def.id)))
        .collect();
    instances.sort_by_key(|i| i.time);
    instances
}

/// Selects the one-off tasks active on the date.
///
/// A task with `DayRule::Any` appears regardless of the day's class;
/// tagged tasks appear only when the class matches. No ordering is
/// applied here.
pub fn filter_for_day<'a>(
    tasks: &'a [ScheduledTask],
    date: NaiveDate,
    game_day: bool,
) -> Vec<&'a ScheduledTask> {
    tasks
        .iter()
        .filter(|t| t.date == date && t.day_rule.admits(game_day))
        .collect()
}

/// A game day's tasks partitioned around first pitch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayBuckets {
    pub morning: Vec<TaskInstance>,
    pub pregame: Vec<TaskInstance>,
    pub postgame: Vec<TaskInstance>,
}

impl DayBuckets {
    pub fn len(&self) -> usize {
        self.morning.len() + self.pregame.len() + self.postgame.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions a game day's tasks into morning / pre-game / post-game.
///
/// Tasks before noon are morning; tasks from noon up to the cutoff are
/// pre-game; the rest are post-game. The cutoff is the recorded game
/// time, or 19:00 when none is recorded. A cutoff at or before noon
/// leaves the pre-game bucket structurally empty; that is accepted
/// behavior, not an error.
///
/// Off days are not bucketed: the call yields three empty lists rather
/// than an error, matching the checklist view's contract.
pub fn bucket_by_period(
    tasks: &[TaskInstance],
    game_time: Option<NaiveTime>,
    game_day: bool,
) -> DayBuckets {
    let mut buckets = DayBuckets::default();
    if !game_day {
        return buckets;
    }

    let cutoff = game_time
        .map(minutes_since_midnight)
        .unwrap_or(DEFAULT_GAME_TIME_MINUTES);

    for task in tasks {
        let minutes = minutes_since_midnight(task.time);
        if minutes < NOON_MINUTES {
            buckets.morning.push(task.clone());
        } else if minutes < cutoff {
            buckets.pregame.push(task.clone());
        } else {
            buckets.postgame.push(task.clone());
        }
    }

    buckets.morning.sort_by_key(|t| t.time);
    buckets.pregame.sort_by_key(|t| t.time);
    buckets.postgame.sort_by_key(|t| t.time);
    buckets
}

/// The fully derived checklist for one (date, team) pair.
#[derive(Debug, Clone)]
pub struct DayChecklist {
    pub date: NaiveDate,
    pub classification: DayClassification,
    pub game_time: Option<NaiveTime>,
    /// One-off and recurring instances merged, ascending by time
    pub tasks: Vec<TaskInstance>,
    pub buckets: DayBuckets,
}

impl DayChecklist {
    /// Derives the checklist from scratch: classify the day, select the
    /// one-off tasks, expand the recurring definitions, merge in time
    /// order, and bucket when the day is a game day.
    ///
    /// A "both" day (home and away recorded for the same date) counts as
    /// a single game day: the game-day task set appears once and the
    /// earliest recorded start time drives the buckets.
    pub fn build(
        date: NaiveDate,
        team: &str,
        series: &[GameSeries],
        scheduled: &[ScheduledTask],
        recurring: &[RecurringTask],
        completions: &CompletionMap,
    ) -> Self {
        let classification = schedule::classify(date, team, series);
        let game_day = classification.is_game_day();

        let mut tasks: Vec<TaskInstance> = filter_for_day(scheduled, date, game_day)
            .into_iter()
            .map(TaskInstance::from_scheduled)
            .collect();
        tasks.extend(expand_recurring(recurring, date, game_day, completions));
        tasks.sort_by_key(|t| t.time);

        let game_time = schedule::game_time_on(date, team, series);
        let buckets = bucket_by_period(&tasks, game_time, game_day);

        Self {
            date,
            classification,
            game_time,
            tasks,
            buckets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DayRule, Game, RecurrenceDay, TaskCategory, TaskKey,
    };
    use chrono::Utc;
    use uuid::Uuid;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn recurring(title: &str, tag: RecurrenceDay, time: NaiveTime, enabled: bool) -> RecurringTask {
        RecurringTask {
            id: Uuid::now_v7(),
            title: title.to_string(),
            description: None,
            category: TaskCategory::Sanitation,
            day: tag,
            time,
            enabled,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn scheduled(title: &str, date: NaiveDate, time: NaiveTime, rule: DayRule) -> ScheduledTask {
        ScheduledTask {
            id: Uuid::now_v7(),
            title: title.to_string(),
            description: None,
            category: TaskCategory::Laundry,
            date,
            time,
            completed: false,
            day_rule: rule,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn instance(title: &str, time: NaiveTime) -> TaskInstance {
        TaskInstance::from_scheduled(&scheduled(title, day(2026, 2, 10), time, DayRule::Any))
    }

    mod expander_tests {
        use super::*;

        #[test]
        fn test_off_day_expansion_materializes_instance() {
            let def = recurring("Restock towels", RecurrenceDay::OffDay, t(9, 0), true);
            let def_id = def.id;
            let date = day(2026, 2, 11);

            let instances = expand_recurring(&[def], date, false, &CompletionMap::new());
            assert_eq!(instances.len(), 1);
            assert_eq!(instances[0].key, TaskKey::Recurring { def_id, date });
            assert_eq!(
                instances[0].key.to_string(),
                format!("recurring-{}-2026-02-11", def_id)
            );
            assert!(!instances[0].completed);
        }

        #[test]
        fn test_tags_never_co_occur() {
            let defs = vec![
                recurring("Game towels", RecurrenceDay::GameDay, t(10, 0), true),
                recurring("Deep clean", RecurrenceDay::OffDay, t(10, 0), true),
            ];

            let on_game_day = expand_recurring(&defs, day(2026, 2, 10), true, &CompletionMap::new());
            assert_eq!(on_game_day.len(), 1);
            assert_eq!(on_game_day[0].title, "Game towels");

            let on_off_day = expand_recurring(&defs, day(2026, 2, 10), false, &CompletionMap::new());
            assert_eq!(on_off_day.len(), 1);
            assert_eq!(on_off_day[0].title, "Deep clean");
        }

        #[test]
        fn test_disabled_def_never_expands() {
            let def = recurring("Ghost", RecurrenceDay::GameDay, t(10, 0), false);
            assert!(expand_recurring(&[def.clone()], day(2026, 2, 10), true, &CompletionMap::new())
                .is_empty());
            assert!(expand_recurring(&[def], day(2026, 2, 10), false, &CompletionMap::new())
                .is_empty());
        }

        #[test]
        fn test_completion_carries_from_map() {
            let def = recurring("Laundry run", RecurrenceDay::OffDay, t(9, 0), true);
            let date = day(2026, 2, 11);
            let mut completions = CompletionMap::new();
            completions.set(date, def.id, true);

            let instances = expand_recurring(&[def.clone()], date, false, &completions);
            assert!(instances[0].completed);

            // same definition, different day: back to the default
            let other = expand_recurring(&[def], day(2026, 2, 12), false, &completions);
            assert!(!other[0].completed);
        }

        #[test]
        fn test_expansion_orders_by_time() {
            let defs = vec![
                recurring("Late", RecurrenceDay::OffDay, t(16, 0), true),
                recurring("Early", RecurrenceDay::OffDay, t(7, 30), true),
                recurring("Mid", RecurrenceDay::OffDay, t(11, 15), true),
            ];
            let titles: Vec<String> = expand_recurring(&defs, day(2026, 2, 11), false, &CompletionMap::new())
                .into_iter()
                .map(|i| i.title)
                .collect();
            assert_eq!(titles, vec!["Early", "Mid", "Late"]);
        }
    }

    mod filter_tests {
        use super::*;

        #[test]
        fn test_untagged_task_appears_on_both_day_classes() {
            let task = scheduled("Order pine tar", day(2026, 2, 10), t(10, 0), DayRule::Any);
            let tasks = vec![task];
            assert_eq!(filter_for_day(&tasks, day(2026, 2, 10), true).len(), 1);
            assert_eq!(filter_for_day(&tasks, day(2026, 2, 10), false).len(), 1);
        }

        #[test]
        fn test_tagged_tasks_respect_day_class() {
            let tasks = vec![
                scheduled("Set dugout", day(2026, 2, 10), t(10, 0), DayRule::GameDaysOnly),
                scheduled("Inventory count", day(2026, 2, 10), t(10, 0), DayRule::OffDaysOnly),
            ];

            let on_game = filter_for_day(&tasks, day(2026, 2, 10), true);
            assert_eq!(on_game.len(), 1);
            assert_eq!(on_game[0].title, "Set dugout");

            let on_off = filter_for_day(&tasks, day(2026, 2, 10), false);
            assert_eq!(on_off.len(), 1);
            assert_eq!(on_off[0].title, "Inventory count");
        }

        #[test]
        fn test_other_days_excluded() {
            let tasks = vec![scheduled("Tomorrow", day(2026, 2, 11), t(10, 0), DayRule::Any)];
            assert!(filter_for_day(&tasks, day(2026, 2, 10), false).is_empty());
        }

        #[test]
        fn test_empty_input_empty_output() {
            assert!(filter_for_day(&[], day(2026, 2, 10), true).is_empty());
        }
    }

    mod bucket_tests {
        use super::*;

        #[test]
        fn test_default_cutoff_is_seven_pm() {
            let tasks = vec![instance("Breakfast", t(8, 0)), instance("Cleanup", t(20, 0))];
            let buckets = bucket_by_period(&tasks, None, true);
            assert_eq!(buckets.morning.len(), 1);
            assert_eq!(buckets.morning[0].title, "Breakfast");
            assert!(buckets.pregame.is_empty());
            assert_eq!(buckets.postgame.len(), 1);
            assert_eq!(buckets.postgame[0].title, "Cleanup");
        }

        #[test]
        fn test_recorded_game_time_moves_cutoff() {
            let tasks = vec![instance("Spread", t(13, 0))];
            // 13:00 is pre-game against a 19:05 start but post-game against 12:30
            let evening = bucket_by_period(&tasks, Some(t(19, 5)), true);
            assert_eq!(evening.pregame.len(), 1);
            let matinee = bucket_by_period(&tasks, Some(t(12, 30)), true);
            assert_eq!(matinee.postgame.len(), 1);
        }

        #[test]
        fn test_noon_boundary() {
            let tasks = vec![instance("Last call", t(11, 59)), instance("First stretch", t(12, 0))];
            let buckets = bucket_by_period(&tasks, Some(t(19, 0)), true);
            assert_eq!(buckets.morning.len(), 1);
            assert_eq!(buckets.morning[0].title, "Last call");
            assert_eq!(buckets.pregame.len(), 1);
            assert_eq!(buckets.pregame[0].title, "First stretch");
        }

        #[test]
        fn test_cutoff_at_noon_leaves_pregame_structurally_empty() {
            // No minute value satisfies 720 <= m < 720; accepted behavior.
            let tasks = vec![
                instance("Morning", t(8, 0)),
                instance("Noon", t(12, 0)),
                instance("Evening", t(18, 0)),
            ];
            let buckets = bucket_by_period(&tasks, Some(t(12, 0)), true);
            assert!(buckets.pregame.is_empty());
            assert_eq!(buckets.morning.len(), 1);
            assert_eq!(buckets.postgame.len(), 2);
        }

        #[test]
        fn test_off_day_yields_empty_buckets() {
            let tasks = vec![instance("Anything", t(9, 0))];
            let buckets = bucket_by_period(&tasks, Some(t(19, 0)), false);
            assert!(buckets.is_empty());
        }

        #[test]
        fn test_buckets_sorted_within() {
            let tasks = vec![
                instance("B", t(10, 0)),
                instance("A", t(7, 0)),
                instance("D", t(21, 0)),
                instance("C", t(19, 30)),
            ];
            let buckets = bucket_by_period(&tasks, None, true);
            let morning: Vec<&str> = buckets.morning.iter().map(|i| i.title.as_str()).collect();
            assert_eq!(morning, vec!["A", "B"]);
            let postgame: Vec<&str> = buckets.postgame.iter().map(|i| i.title.as_str()).collect();
            assert_eq!(postgame, vec!["C", "D"]);
        }
    }

    mod day_checklist_tests {
        use super::*;

        fn one_game_series(home: &str, visiting: &str, date: NaiveDate, time: Option<NaiveTime>) -> GameSeries {
            GameSeries {
                id: Uuid::now_v7(),
                home_team: home.to_string(),
                visiting_team: visiting.to_string(),
                games: vec![Game {
                    id: Uuid::now_v7(),
                    date,
                    start_time: time,
                    game_number: 1,
                }],
            }
        }

        #[test]
        fn test_build_merges_and_orders() {
            let date = day(2026, 2, 10);
            let series = vec![one_game_series("Ducks", "Hens", date, Some(t(19, 5)))];
            let scheduled_tasks = vec![scheduled("Order drinks", date, t(15, 0), DayRule::Any)];
            let recurring_defs = vec![recurring("Towel wash", RecurrenceDay::GameDay, t(9, 0), true)];

            let checklist = DayChecklist::build(
                date,
                "Ducks",
                &series,
                &scheduled_tasks,
                &recurring_defs,
                &CompletionMap::new(),
            );

            assert!(checklist.classification.home);
            assert_eq!(checklist.game_time, Some(t(19, 5)));
            let titles: Vec<&str> = checklist.tasks.iter().map(|i| i.title.as_str()).collect();
            assert_eq!(titles, vec!["Towel wash", "Order drinks"]);
            assert_eq!(checklist.buckets.len(), 2);
            assert_eq!(checklist.buckets.morning.len(), 1);
            assert_eq!(checklist.buckets.pregame.len(), 1);
        }

        #[test]
        fn test_build_off_day_skips_game_day_material() {
            let date = day(2026, 2, 11);
            let series = vec![one_game_series("Ducks", "Hens", day(2026, 2, 10), None)];
            let scheduled_tasks = vec![
                scheduled("Any day", date, t(10, 0), DayRule::Any),
                scheduled("Game only", date, t(10, 0), DayRule::GameDaysOnly),
            ];
            let recurring_defs = vec![
                recurring("Game towels", RecurrenceDay::GameDay, t(9, 0), true),
                recurring("Deep clean", RecurrenceDay::OffDay, t(9, 0), true),
            ];

            let checklist = DayChecklist::build(
                date,
                "Ducks",
                &series,
                &scheduled_tasks,
                &recurring_defs,
                &CompletionMap::new(),
            );

            assert!(!checklist.classification.is_game_day());
            let titles: Vec<&str> = checklist.tasks.iter().map(|i| i.title.as_str()).collect();
            assert_eq!(titles, vec!["Deep clean", "Any day"]);
            assert!(checklist.buckets.is_empty());
        }

        #[test]
        fn test_both_day_counts_once() {
            let date = day(2026, 2, 10);
            let series = vec![
                one_game_series("Ducks", "Hens", date, Some(t(18, 0))),
                one_game_series("Owls", "Ducks", date, Some(t(13, 0))),
            ];
            let recurring_defs = vec![recurring("Game towels", RecurrenceDay::GameDay, t(9, 0), true)];

            let checklist = DayChecklist::build(
                date,
                "Ducks",
                &series,
                &[],
                &recurring_defs,
                &CompletionMap::new(),
            );

            assert_eq!(checklist.classification.kind(), crate::models::GameDayKind::Both);
            // one instance, not one per game
            assert_eq!(checklist.tasks.len(), 1);
            // earliest start drives the cutoff
            assert_eq!(checklist.game_time, Some(t(13, 0)));
        }

        #[test]
        fn test_build_is_deterministic() {
            let date = day(2026, 2, 10);
            let series = vec![one_game_series("Ducks", "Hens", date, Some(t(19, 5)))];
            let scheduled_tasks = vec![scheduled("Order drinks", date, t(15, 0), DayRule::Any)];
            let recurring_defs = vec![recurring("Towel wash", RecurrenceDay::GameDay, t(9, 0), true)];
            let completions = CompletionMap::new();

            let a = DayChecklist::build(date, "Ducks", &series, &scheduled_tasks, &recurring_defs, &completions);
            let b = DayChecklist::build(date, "Ducks", &series, &scheduled_tasks, &recurring_defs, &completions);
            assert_eq!(a.tasks, b.tasks);
            assert_eq!(a.buckets, b.buckets);
        }
    }

    #[test]
    fn test_default_cutoff_minutes() {
        assert_eq!(DEFAULT_GAME_TIME_MINUTES, 1140);
    }
}
