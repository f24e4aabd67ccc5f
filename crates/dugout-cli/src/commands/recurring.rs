use anyhow::Result;
use dialoguer::Confirm;
use dugout_core::calendar;
use dugout_core::models::NewRecurringTask;
use dugout_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

use crate::cli::{
    RecurringAddCommand, RecurringDeleteCommand, RecurringDoneCommand, RecurringEnableCommand,
};
use crate::parser::{parse_category, parse_day, parse_recurrence_day, parse_time};
use crate::util::resolve_id;
use crate::views::table;

pub async fn add_recurring(repo: &impl Repository, command: RecurringAddCommand) -> Result<()> {
    let data = NewRecurringTask {
        title: command.title,
        description: command.description,
        category: parse_category(&command.category)?,
        day: parse_recurrence_day(&command.day)?,
        time: parse_time(&command.at)?,
        enabled: true,
    };

    let def = repo.add_recurring(data).await?;

    let success_style = Style::new().green().bold();
    println!(
        "{} Created recurring task: {} (every {})",
        "✓".style(success_style),
        def.title.bright_white().bold(),
        def.day
    );

    Ok(())
}

pub async fn list_recurring(repo: &impl Repository) -> Result<()> {
    let defs = repo.list_recurring().await?;
    table::display_recurring_tasks(&defs);
    Ok(())
}

async fn resolve_recurring_id(repo: &impl Repository, input: &str) -> Result<uuid::Uuid> {
    let defs = repo.list_recurring().await?;
    resolve_id(input, defs.iter().map(|d| (&d.id, d.title.as_str())))
}

pub async fn toggle_done(repo: &impl Repository, command: RecurringDoneCommand) -> Result<()> {
    let id = resolve_recurring_id(repo, &command.id).await?;
    let date = match command.on {
        Some(ref input) => parse_day(input)?,
        None => calendar::today(),
    };

    let def = repo
        .find_recurring_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Recurring task '{}' not found", command.id))?;
    let completed = repo.toggle_completion(id, date).await?;

    let success_style = Style::new().green().bold();
    if completed {
        println!(
            "{} Completed for {}: {}",
            "✓".style(success_style),
            date.format("%Y-%m-%d"),
            def.title
        );
    } else {
        println!(
            "{} Reopened for {}: {}",
            "↺".style(success_style),
            date.format("%Y-%m-%d"),
            def.title
        );
    }
    Ok(())
}

pub async fn set_enabled(
    repo: &impl Repository,
    command: RecurringEnableCommand,
    enabled: bool,
) -> Result<()> {
    let id = resolve_recurring_id(repo, &command.id).await?;
    let def = repo.set_recurring_enabled(id, enabled).await?;
    if enabled {
        println!("Enabled '{}'.", def.title);
    } else {
        println!("Disabled '{}'. It keeps its history and can be re-enabled.", def.title);
    }
    Ok(())
}

pub async fn delete_recurring(
    repo: &impl Repository,
    command: RecurringDeleteCommand,
) -> Result<()> {
    let id = resolve_recurring_id(repo, &command.id).await?;
    let def = repo
        .find_recurring_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Recurring task '{}' not found", command.id))?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!(
                "Delete recurring task '{}' and its completion history?",
                def.title
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    repo.delete_recurring(id).await?;
    println!("Deleted recurring task '{}'.", def.title);
    Ok(())
}
