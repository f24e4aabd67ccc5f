use clap::Parser;
use dugout_core::db;
use dugout_core::error::CoreError;
use dugout_core::repository::SqliteRepository;
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let config = config::Config::new().unwrap_or_else(|_| config::Config::default());

    let db_pool = match db::establish_connection(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let repository = SqliteRepository::new(db_pool);

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Today(command) => {
            commands::today::show_today(&repository, command, &config).await
        }
        cli::Commands::Calendar(command) => {
            commands::calendar::show_calendar(&repository, command, &config).await
        }
        cli::Commands::Task(command) => match command.command {
            cli::TaskSubcommand::Add(command) => commands::task::add_task(&repository, command).await,
            cli::TaskSubcommand::List(command) => {
                commands::task::list_tasks(&repository, command).await
            }
            cli::TaskSubcommand::Done(command) => {
                commands::task::complete_task(&repository, command).await
            }
            cli::TaskSubcommand::Delete(command) => {
                commands::task::delete_task(&repository, command).await
            }
        },
        cli::Commands::Recurring(command) => match command.command {
            cli::RecurringSubcommand::Add(command) => {
                commands::recurring::add_recurring(&repository, command).await
            }
            cli::RecurringSubcommand::List => commands::recurring::list_recurring(&repository).await,
            cli::RecurringSubcommand::Done(command) => {
                commands::recurring::toggle_done(&repository, command).await
            }
            cli::RecurringSubcommand::Enable(command) => {
                commands::recurring::set_enabled(&repository, command, true).await
            }
            cli::RecurringSubcommand::Disable(command) => {
                commands::recurring::set_enabled(&repository, command, false).await
            }
            cli::RecurringSubcommand::Delete(command) => {
                commands::recurring::delete_recurring(&repository, command).await
            }
        },
        cli::Commands::Series(command) => match command.command {
            cli::SeriesSubcommand::Add(command) => {
                commands::series::add_series(&repository, command).await
            }
            cli::SeriesSubcommand::List => commands::series::list_series(&repository).await,
            cli::SeriesSubcommand::Delete(command) => {
                commands::series::delete_series(&repository, command).await
            }
        },
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::MalformedTime(s) => {
                eprintln!(
                    "{} Could not parse time of day: '{}'. Try '14:30' or '2:30 PM'.",
                    "Error:".style(error_style),
                    s.yellow()
                );
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
