use anyhow::Result;
use dialoguer::Confirm;
use dugout_core::models::NewGameSeries;
use dugout_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

use crate::cli::{SeriesAddCommand, SeriesDeleteCommand};
use crate::parser::{parse_day, parse_time};
use crate::util::resolve_id;
use crate::views::table;

pub async fn add_series(repo: &impl Repository, command: SeriesAddCommand) -> Result<()> {
    let start_time = command.at.as_deref().map(parse_time).transpose()?;
    let data = NewGameSeries {
        home_team: command.home,
        visiting_team: command.visiting,
        start_date: parse_day(&command.start)?,
        game_count: command.games,
        start_time,
    };

    let series = repo.add_series(data).await?;

    let success_style = Style::new().green().bold();
    let span = match (series.games.first(), series.games.last()) {
        (Some(first), Some(last)) => format!(
            ", {} through {}",
            first.date.format("%Y-%m-%d"),
            last.date.format("%Y-%m-%d")
        ),
        _ => String::new(),
    };
    println!(
        "{} Scheduled {} vs {}: {} games{}",
        "✓".style(success_style),
        series.home_team.bright_white().bold(),
        series.visiting_team.bright_white().bold(),
        series.games.len(),
        span,
    );

    Ok(())
}

pub async fn list_series(repo: &impl Repository) -> Result<()> {
    let series = repo.list_series().await?;
    table::display_series(&series);
    Ok(())
}

pub async fn delete_series(repo: &impl Repository, command: SeriesDeleteCommand) -> Result<()> {
    let all = repo.list_series().await?;
    let id = resolve_id(
        &command.id,
        all.iter().map(|s| (&s.id, format!("{} vs {}", s.home_team, s.visiting_team))),
    )?;

    let series = all
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| anyhow::anyhow!("Series '{}' not found", command.id))?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!(
                "Delete the {} vs {} series and its {} games?",
                series.home_team,
                series.visiting_team,
                series.games.len()
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    repo.delete_series(id).await?;
    println!("Deleted the {} vs {} series.", series.home_team, series.visiting_team);
    Ok(())
}
