use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{
    CompletionMap, GameSeries, NewGameSeries, NewRecurringTask, NewScheduledTask, RecurringTask,
    ScheduledTask, UpdateRecurringTask, UpdateScheduledTask,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

// Re-export domain modules
pub mod completions;
pub mod games;
pub mod recurring;
pub mod tasks;

// Traits are defined in this module and implemented in respective domain modules

/// Domain-specific trait for one-off scheduled task operations
#[async_trait]
pub trait ScheduledTaskRepository {
    async fn add_task(&self, data: NewScheduledTask) -> Result<ScheduledTask, CoreError>;
    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<ScheduledTask>, CoreError>;
    /// Lists tasks, optionally restricted to an inclusive date range.
    async fn list_tasks(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<ScheduledTask>, CoreError>;
    async fn update_task(
        &self,
        id: Uuid,
        data: UpdateScheduledTask,
    ) -> Result<ScheduledTask, CoreError>;
    async fn set_task_completed(&self, id: Uuid, completed: bool) -> Result<ScheduledTask, CoreError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError>;
}

/// Domain-specific trait for recurring task definitions
#[async_trait]
pub trait RecurringTaskRepository {
    async fn add_recurring(&self, data: NewRecurringTask) -> Result<RecurringTask, CoreError>;
    async fn find_recurring_by_id(&self, id: Uuid) -> Result<Option<RecurringTask>, CoreError>;
    async fn list_recurring(&self) -> Result<Vec<RecurringTask>, CoreError>;
    async fn update_recurring(
        &self,
        id: Uuid,
        data: UpdateRecurringTask,
    ) -> Result<RecurringTask, CoreError>;
    async fn set_recurring_enabled(&self, id: Uuid, enabled: bool) -> Result<RecurringTask, CoreError>;
    async fn delete_recurring(&self, id: Uuid) -> Result<(), CoreError>;
}

/// Domain-specific trait for the game schedule
#[async_trait]
pub trait GameScheduleRepository {
    /// Creates a series and its consecutive-day games transactionally.
    /// The game count must be 3 or 6.
    async fn add_series(&self, data: NewGameSeries) -> Result<GameSeries, CoreError>;
    async fn find_series_by_id(&self, id: Uuid) -> Result<Option<GameSeries>, CoreError>;
    async fn list_series(&self) -> Result<Vec<GameSeries>, CoreError>;
    /// Deletes the series and, via cascade, all of its games.
    async fn delete_series(&self, id: Uuid) -> Result<(), CoreError>;
}

/// Domain-specific trait for recurring-task completion state
#[async_trait]
pub trait CompletionRepository {
    /// Loads completion state for the inclusive date range.
    async fn load_completions(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<CompletionMap, CoreError>;
    async fn set_completion(
        &self,
        def_id: Uuid,
        date: NaiveDate,
        completed: bool,
    ) -> Result<(), CoreError>;
    /// Flips the stored state and returns the new value.
    async fn toggle_completion(&self, def_id: Uuid, date: NaiveDate) -> Result<bool, CoreError>;
}

/// Main repository trait that composes all domain traits
#[async_trait]
pub trait Repository:
    ScheduledTaskRepository + RecurringTaskRepository + GameScheduleRepository + CompletionRepository
{
    // This trait automatically composes all domain-specific repositories
    // Individual domain operations are defined in their respective traits
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}

// The main Repository trait implementation will automatically be available
// when all domain trait implementations are defined
impl Repository for SqliteRepository {}
