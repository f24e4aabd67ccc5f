use anyhow::Result;
use dugout_core::calendar;
use dugout_core::checklist::DayChecklist;
use dugout_core::repository::Repository;
use dugout_core::schedule;

use crate::cli::CalendarCommand;
use crate::config::Config;
use crate::parser::parse_day;
use crate::views::table;

pub async fn show_calendar(
    repo: &impl Repository,
    command: CalendarCommand,
    config: &Config,
) -> Result<()> {
    let team = config.team.as_deref().unwrap_or("");
    let series = repo.list_series().await?;

    if let Some(ref input) = command.on {
        // single-day detail: the day's games plus its derived checklist
        let date = parse_day(input)?;
        let scheduled = repo.list_tasks(Some((date, date))).await?;
        let recurring = repo.list_recurring().await?;
        let completions = repo.load_completions(date, date).await?;

        table::display_matchups(date, &schedule::games_on(date, team, &series));
        let checklist =
            DayChecklist::build(date, team, &series, &scheduled, &recurring, &completions);
        table::display_checklist(&checklist, team);
        return Ok(());
    }

    let today = calendar::today();
    let (from, to) = calendar::month_window(today);
    let scheduled = repo.list_tasks(Some((from, to))).await?;
    let recurring = repo.list_recurring().await?;

    let counts = calendar::task_counts_per_day(&scheduled, &recurring, &series, team, today);
    let kinds = calendar::game_kinds_per_day(&series, team, today);
    table::display_calendar_overview(&counts, &kinds);

    Ok(())
}
