//! # Dugout Core Library
//!
//! A clubhouse operations library for minor-league baseball staff: daily
//! checklists derived from the game schedule, recurring game-day/off-day
//! tasks, and per-day completion tracking.
//!
//! ## Features
//!
//! - **Game-Day Classification**: Resolves any calendar date against the
//!   team's scheduled series into home/away/both/none
//! - **Day-Class Recurrence**: Recurring tasks tagged for game days or
//!   off days, expanded on demand into per-day instances
//! - **Time-Period Buckets**: Game-day checklists partitioned into
//!   morning, pre-game, and post-game around the first pitch
//! - **Persistent Completions**: Recurring-task completion state stored
//!   per (definition, date) instead of evaporating with the session
//! - **Type Safety**: Compile-time checked SQL queries with sqlx
//!
//! ## Core Modules
//!
//! - [`db`]: Database connection and migration management
//! - [`models`]: Core data structures and transfer objects
//! - [`repository`]: Data access layer with Repository pattern
//! - [`schedule`]: Game-day classification over scheduled series
//! - [`checklist`]: Task expansion, filtering, and bucketing
//! - [`calendar`]: Calendar-day normalization and overview windows
//! - [`timefmt`]: Time-of-day parsing and formatting
//! - [`error`]: Error types with context
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dugout_core::{
//!     checklist::DayChecklist,
//!     db,
//!     models::CompletionMap,
//!     repository::{GameScheduleRepository, RecurringTaskRepository,
//!                  ScheduledTaskRepository, SqliteRepository},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dugout_core::error::CoreError> {
//!     let pool = db::establish_connection("dugout.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     let today = chrono::Local::now().date_naive();
//!     let series = repo.list_series().await?;
//!     let scheduled = repo.list_tasks(None).await?;
//!     let recurring = repo.list_recurring().await?;
//!
//!     let checklist = DayChecklist::build(
//!         today,
//!         "Ducks",
//!         &series,
//!         &scheduled,
//!         &recurring,
//!         &CompletionMap::new(),
//!     );
//!     println!("{} tasks due today", checklist.tasks.len());
//!
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod checklist;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod schedule;
pub mod timefmt;
