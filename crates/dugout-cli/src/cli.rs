use clap::{Parser, Subcommand};

/// Clubhouse operations from the dugout: game-day aware checklists,
/// recurring tasks, and series scheduling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the day's checklist, bucketed around first pitch on game days
    Today(TodayCommand),
    /// Show a calendar overview, or one day's detail
    Calendar(CalendarCommand),
    /// Manage one-off scheduled tasks
    Task(TaskCommand),
    /// Manage recurring game-day/off-day tasks
    Recurring(RecurringCommand),
    /// Manage the game schedule
    Series(SeriesCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct TodayCommand {
    /// Preview another day's checklist (e.g. '2026-02-10', 'tomorrow')
    #[clap(long)]
    pub on: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CalendarCommand {
    /// Show one day's tasks and games instead of the overview
    #[clap(long)]
    pub on: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub command: TaskSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TaskSubcommand {
    /// Add a one-off task
    Add(TaskAddCommand),
    /// List tasks
    List(TaskListCommand),
    /// Mark a task as completed
    Done(TaskDoneCommand),
    /// Delete a task
    Delete(TaskDeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct TaskAddCommand {
    /// The title of the task
    pub title: String,
    /// The description of the task
    #[clap(short, long)]
    pub description: Option<String>,
    /// Category (sanitation, laundry, food, communication, maintenance, administration)
    #[clap(short, long)]
    pub category: String,
    /// The day the task is due (e.g. '2026-02-10', 'today', 'next friday')
    #[clap(long)]
    pub on: String,
    /// Time of day (e.g. '9:00 AM', '14:30')
    #[clap(long)]
    pub at: String,
    /// Restrict to a day class (any, game-days, off-days)
    #[clap(long, default_value = "any")]
    pub days: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TaskListCommand {
    /// Only tasks on this day (e.g. '2026-02-10', 'today')
    #[clap(long)]
    pub on: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TaskDoneCommand {
    /// The ID (or unambiguous prefix) of the task
    pub id: String,
    /// Mark as not completed instead
    #[clap(long)]
    pub undo: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TaskDeleteCommand {
    /// The ID (or unambiguous prefix) of the task
    pub id: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RecurringCommand {
    #[command(subcommand)]
    pub command: RecurringSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RecurringSubcommand {
    /// Add a recurring task definition
    Add(RecurringAddCommand),
    /// List recurring task definitions
    List,
    /// Toggle a day's completion for a recurring task
    Done(RecurringDoneCommand),
    /// Re-enable a disabled definition
    Enable(RecurringEnableCommand),
    /// Disable a definition without deleting it
    Disable(RecurringEnableCommand),
    /// Delete a definition
    Delete(RecurringDeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct RecurringAddCommand {
    /// The title of the task
    pub title: String,
    /// The description of the task
    #[clap(short, long)]
    pub description: Option<String>,
    /// Category (sanitation, laundry, food, communication, maintenance, administration)
    #[clap(short, long)]
    pub category: String,
    /// Which days it recurs on (game-day or off-day)
    #[clap(long)]
    pub day: String,
    /// Time of day (e.g. '9:00 AM', '14:30')
    #[clap(long)]
    pub at: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RecurringDoneCommand {
    /// The ID (or unambiguous prefix) of the definition
    pub id: String,
    /// The day to toggle (defaults to today)
    #[clap(long)]
    pub on: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecurringEnableCommand {
    /// The ID (or unambiguous prefix) of the definition
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RecurringDeleteCommand {
    /// The ID (or unambiguous prefix) of the definition
    pub id: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SeriesCommand {
    #[command(subcommand)]
    pub command: SeriesSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SeriesSubcommand {
    /// Schedule a new series of consecutive games
    Add(SeriesAddCommand),
    /// List scheduled series
    List,
    /// Delete a series and all of its games
    Delete(SeriesDeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct SeriesAddCommand {
    /// Home team name
    pub home: String,
    /// Visiting team name
    pub visiting: String,
    /// First game day (e.g. '2026-02-10', 'next tuesday')
    #[clap(long)]
    pub start: String,
    /// Number of games (3 or 6)
    #[clap(long, default_value = "3")]
    pub games: u32,
    /// First pitch for every game (e.g. '7:05 PM')
    #[clap(long)]
    pub at: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SeriesDeleteCommand {
    /// The ID (or unambiguous prefix) of the series
    pub id: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}
