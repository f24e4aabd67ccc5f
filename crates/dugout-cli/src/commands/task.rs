use anyhow::Result;
use dialoguer::Confirm;
use dugout_core::models::NewScheduledTask;
use dugout_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

use crate::cli::{TaskAddCommand, TaskDeleteCommand, TaskDoneCommand, TaskListCommand};
use crate::parser::{parse_category, parse_day, parse_day_rule, parse_time};
use crate::util::{resolve_id, short_id};
use crate::views::table;

pub async fn add_task(repo: &impl Repository, command: TaskAddCommand) -> Result<()> {
    let data = NewScheduledTask {
        title: command.title,
        description: command.description,
        category: parse_category(&command.category)?,
        date: parse_day(&command.on)?,
        time: parse_time(&command.at)?,
        day_rule: parse_day_rule(&command.days)?,
    };

    let task = repo.add_task(data).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    println!(
        "{} Created task: {}",
        "✓".style(success_style),
        task.title.bright_white().bold()
    );
    println!(
        "  {} {} at {} ({})",
        "→".style(info_style),
        task.date.format("%Y-%m-%d"),
        dugout_core::timefmt::format_12h(task.time),
        short_id(&task.id).yellow()
    );

    Ok(())
}

pub async fn list_tasks(repo: &impl Repository, command: TaskListCommand) -> Result<()> {
    let range = match command.on {
        Some(ref input) => {
            let date = parse_day(input)?;
            Some((date, date))
        }
        None => None,
    };

    let tasks = repo.list_tasks(range).await?;
    table::display_scheduled_tasks(&tasks);
    Ok(())
}

async fn resolve_task_id(repo: &impl Repository, input: &str) -> Result<uuid::Uuid> {
    let tasks = repo.list_tasks(None).await?;
    resolve_id(input, tasks.iter().map(|t| (&t.id, t.title.as_str())))
}

pub async fn complete_task(repo: &impl Repository, command: TaskDoneCommand) -> Result<()> {
    let id = resolve_task_id(repo, &command.id).await?;
    let task = repo.set_task_completed(id, !command.undo).await?;

    let success_style = Style::new().green().bold();
    if task.completed {
        println!("{} Completed: {}", "✓".style(success_style), task.title);
    } else {
        println!("{} Reopened: {}", "↺".style(success_style), task.title);
    }
    Ok(())
}

pub async fn delete_task(repo: &impl Repository, command: TaskDeleteCommand) -> Result<()> {
    let id = resolve_task_id(repo, &command.id).await?;
    let task = repo
        .find_task_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Task '{}' not found", command.id))?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete task '{}'?", task.title))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    repo.delete_task(id).await?;
    println!("Deleted task '{}'.", task.title);
    Ok(())
}
