use chrono::NaiveDate;
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use dugout_core::calendar;
use dugout_core::checklist::DayChecklist;
use dugout_core::models::{GameDayKind, GameSeries, RecurringTask, TaskCategory, TaskInstance};
use dugout_core::schedule::Matchup;
use dugout_core::timefmt;
use owo_colors::OwoColorize;
use std::collections::HashMap;

use crate::util::short_id;

/// Closed category → color mapping; the compiler keeps it exhaustive.
fn category_color(category: TaskCategory) -> Color {
    match category {
        TaskCategory::Sanitation => Color::Cyan,
        TaskCategory::Laundry => Color::Blue,
        TaskCategory::Food => Color::Green,
        TaskCategory::Communication => Color::Magenta,
        TaskCategory::Maintenance => Color::Yellow,
        TaskCategory::Administration => Color::DarkGrey,
    }
}

fn instance_row(instance: &TaskInstance) -> Row {
    let mut row = Row::new();
    row.add_cell(Cell::new(timefmt::format_12h(instance.time)));

    let mut title_cell = Cell::new(&instance.title);
    if instance.completed {
        title_cell = title_cell
            .add_attribute(Attribute::CrossedOut)
            .fg(Color::DarkGrey);
    }
    row.add_cell(title_cell);

    row.add_cell(Cell::new(instance.category.label()).fg(category_color(instance.category)));
    row.add_cell(Cell::new(if instance.completed { "✓" } else { "" }));
    row
}

fn instances_table(instances: &[TaskInstance]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Time", "Task", "Category", "Done"]);
    for instance in instances {
        table.add_row(instance_row(instance));
    }
    table
}

pub fn display_checklist(checklist: &DayChecklist, team: &str) {
    let date = checklist.date.format("%A, %B %-d").to_string();
    match checklist.classification.kind() {
        GameDayKind::None => println!("{} — off day", date.bold()),
        kind => {
            let first_pitch = checklist
                .game_time
                .map(timefmt::format_12h)
                .unwrap_or_else(|| "TBD".to_string());
            println!(
                "{} — game day ({}) · first pitch {}",
                date.bold(),
                kind,
                first_pitch.yellow()
            );
        }
    }
    if team.is_empty() {
        println!(
            "{}",
            "No team configured; set `team` in dugout.toml to see game days.".bright_black()
        );
    }

    if checklist.tasks.is_empty() {
        println!("Nothing on the checklist.");
        return;
    }

    if checklist.classification.is_game_day() {
        for (label, bucket) in [
            ("Morning", &checklist.buckets.morning),
            ("Pre-game", &checklist.buckets.pregame),
            ("Post-game", &checklist.buckets.postgame),
        ] {
            if bucket.is_empty() {
                continue;
            }
            println!("\n{}", label.bold().underline());
            println!("{}", instances_table(bucket));
        }
    } else {
        println!("{}", instances_table(&checklist.tasks));
    }
}

pub fn display_scheduled_tasks(tasks: &[dugout_core::models::ScheduledTask]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Time", "Task", "Category", "Days", "Done"]);
    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(short_id(&task.id)));
        row.add_cell(Cell::new(task.date.format("%Y-%m-%d")));
        row.add_cell(Cell::new(timefmt::format_12h(task.time)));

        let mut title_cell = Cell::new(&task.title);
        if task.completed {
            title_cell = title_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        }
        row.add_cell(title_cell);

        row.add_cell(Cell::new(task.category.label()).fg(category_color(task.category)));
        row.add_cell(Cell::new(task.day_rule.to_string()));
        row.add_cell(Cell::new(if task.completed { "✓" } else { "" }));
        table.add_row(row);
    }
    println!("{table}");
}

pub fn display_recurring_tasks(defs: &[RecurringTask]) {
    if defs.is_empty() {
        println!("No recurring tasks defined.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Recurs", "Time", "Task", "Category", "Enabled"]);
    for def in defs {
        let mut row = Row::new();
        row.add_cell(Cell::new(short_id(&def.id)));
        row.add_cell(Cell::new(def.day.to_string()));
        row.add_cell(Cell::new(timefmt::format_12h(def.time)));

        let mut title_cell = Cell::new(&def.title);
        if !def.enabled {
            title_cell = title_cell.fg(Color::DarkGrey);
        }
        row.add_cell(title_cell);

        row.add_cell(Cell::new(def.category.label()).fg(category_color(def.category)));
        row.add_cell(Cell::new(if def.enabled { "yes" } else { "no" }));
        table.add_row(row);
    }
    println!("{table}");
}

pub fn display_series(series: &[GameSeries]) {
    if series.is_empty() {
        println!("No series scheduled.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Matchup", "Games", "From", "To", "First pitch", "Starts"]);
    let today = calendar::today();
    for s in series {
        let first = s.games.first();
        let last = s.games.last();
        let mut row = Row::new();
        row.add_cell(Cell::new(short_id(&s.id)));
        row.add_cell(Cell::new(format!("{} vs {}", s.home_team, s.visiting_team)));
        row.add_cell(Cell::new(s.games.len().to_string()));
        row.add_cell(Cell::new(
            first.map(|g| g.date.format("%Y-%m-%d").to_string()).unwrap_or_default(),
        ));
        row.add_cell(Cell::new(
            last.map(|g| g.date.format("%Y-%m-%d").to_string()).unwrap_or_default(),
        ));
        row.add_cell(Cell::new(
            first
                .and_then(|g| g.start_time)
                .map(timefmt::format_12h)
                .unwrap_or_else(|| "TBD".to_string()),
        ));
        row.add_cell(Cell::new(
            first
                .map(|g| HumanTime::from(g.date.signed_duration_since(today)).to_string())
                .unwrap_or_default(),
        ));
        table.add_row(row);
    }
    println!("{table}");
}

pub fn display_matchups(date: NaiveDate, matchups: &[Matchup]) {
    if matchups.is_empty() {
        return;
    }
    println!("{}", format!("Games on {}", date.format("%Y-%m-%d")).bold());
    for matchup in matchups {
        let time = matchup
            .start_time
            .map(timefmt::format_12h)
            .unwrap_or_else(|| "TBD".to_string());
        println!(
            "  Game {}: {} vs {} · {}",
            matchup.game_number, matchup.home_team, matchup.visiting_team, time
        );
    }
}

pub fn display_calendar_overview(
    counts: &HashMap<NaiveDate, usize>,
    kinds: &HashMap<NaiveDate, GameDayKind>,
) {
    let mut days: Vec<NaiveDate> = counts.keys().chain(kinds.keys()).copied().collect();
    days.sort();
    days.dedup();

    if days.is_empty() {
        println!("Nothing scheduled in the surrounding months.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Game", "Tasks"]);
    for day in days {
        let mut row = Row::new();
        row.add_cell(Cell::new(day.format("%a %Y-%m-%d")));
        let game_cell = match kinds.get(&day) {
            Some(GameDayKind::Home) => Cell::new("home").fg(Color::Green),
            Some(GameDayKind::Away) => Cell::new("away").fg(Color::Yellow),
            Some(GameDayKind::Both) => Cell::new("home+away").fg(Color::Red),
            _ => Cell::new(""),
        };
        row.add_cell(game_cell);
        row.add_cell(Cell::new(
            counts.get(&day).map(|c| c.to_string()).unwrap_or_default(),
        ));
        table.add_row(row);
    }
    println!("{table}");
}
