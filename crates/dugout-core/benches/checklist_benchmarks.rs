use chrono::{Days, NaiveDate, NaiveTime, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dugout_core::checklist::DayChecklist;
use dugout_core::models::{
    CompletionMap, DayRule, Game, GameSeries, RecurrenceDay, RecurringTask, ScheduledTask,
    TaskCategory,
};
use uuid::Uuid;

fn random_time() -> NaiveTime {
    NaiveTime::from_hms_opt(fastrand::u32(0..24), fastrand::u32(0..60), 0).unwrap()
}

fn seed_series(start: NaiveDate, count: usize) -> Vec<GameSeries> {
    (0..count)
        .map(|i| {
            let series_start = start + Days::new((i * 7) as u64);
            GameSeries {
                id: Uuid::now_v7(),
                home_team: if i % 2 == 0 { "Ducks" } else { "Hens" }.to_string(),
                visiting_team: if i % 2 == 0 { "Hens" } else { "Ducks" }.to_string(),
                games: (0..3)
                    .map(|n| Game {
                        id: Uuid::now_v7(),
                        date: series_start + Days::new(n),
                        start_time: Some(NaiveTime::from_hms_opt(19, 5, 0).unwrap()),
                        game_number: n as i64 + 1,
                    })
                    .collect(),
            }
        })
        .collect()
}

fn seed_scheduled(date: NaiveDate, count: usize) -> Vec<ScheduledTask> {
    (0..count)
        .map(|i| ScheduledTask {
            id: Uuid::now_v7(),
            title: format!("Task {}", i),
            description: None,
            category: TaskCategory::Laundry,
            date: date + Days::new(fastrand::u64(0..30)),
            time: random_time(),
            completed: false,
            day_rule: DayRule::from_db(Some(fastrand::i64(0..3))),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .collect()
}

fn seed_recurring(count: usize) -> Vec<RecurringTask> {
    (0..count)
        .map(|i| RecurringTask {
            id: Uuid::now_v7(),
            title: format!("Recurring {}", i),
            description: None,
            category: TaskCategory::Sanitation,
            day: if i % 2 == 0 {
                RecurrenceDay::GameDay
            } else {
                RecurrenceDay::OffDay
            },
            time: random_time(),
            enabled: i % 5 != 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .collect()
}

fn bench_day_checklist_build(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
    let series = seed_series(start, 8);
    let scheduled = seed_scheduled(start, 200);
    let recurring = seed_recurring(50);
    let completions = CompletionMap::new();

    c.bench_function("day_checklist_build_game_day", |b| {
        b.iter(|| {
            DayChecklist::build(
                black_box(start),
                black_box("Ducks"),
                &series,
                &scheduled,
                &recurring,
                &completions,
            )
        })
    });

    let off_day = start + Days::new(5);
    c.bench_function("day_checklist_build_off_day", |b| {
        b.iter(|| {
            DayChecklist::build(
                black_box(off_day),
                black_box("Ducks"),
                &series,
                &scheduled,
                &recurring,
                &completions,
            )
        })
    });
}

criterion_group!(benches, bench_day_checklist_build);
criterion_main!(benches);
