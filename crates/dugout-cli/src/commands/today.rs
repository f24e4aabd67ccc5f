use anyhow::Result;
use dugout_core::calendar;
use dugout_core::checklist::DayChecklist;
use dugout_core::repository::Repository;

use crate::cli::TodayCommand;
use crate::config::Config;
use crate::parser::parse_day;
use crate::views::table;

pub async fn show_today(
    repo: &impl Repository,
    command: TodayCommand,
    config: &Config,
) -> Result<()> {
    let date = match command.on {
        Some(ref input) => parse_day(input)?,
        None => calendar::today(),
    };
    let team = config.team.as_deref().unwrap_or("");

    let series = repo.list_series().await?;
    let scheduled = repo.list_tasks(Some((date, date))).await?;
    let recurring = repo.list_recurring().await?;
    let completions = repo.load_completions(date, date).await?;

    let checklist = DayChecklist::build(date, team, &series, &scheduled, &recurring, &completions);
    table::display_checklist(&checklist, team);

    Ok(())
}
