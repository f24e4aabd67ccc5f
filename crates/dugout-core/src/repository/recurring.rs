use crate::error::CoreError;
use crate::models::{NewRecurringTask, RecurringTask, UpdateRecurringTask};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[async_trait]
impl super::RecurringTaskRepository for SqliteRepository {
    async fn add_recurring(&self, data: NewRecurringTask) -> Result<RecurringTask, CoreError> {
        if data.title.trim().is_empty() {
            return Err(CoreError::InvalidInput("Task title cannot be empty".to_string()));
        }

        let now = Utc::now();
        let def: RecurringTask = sqlx::query_as(
            r#"INSERT INTO recurring_tasks
            (id, title, description, category, day, time, enabled, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING *"#,
        )
        .bind(Uuid::now_v7())
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.category)
        .bind(data.day)
        .bind(data.time)
        .bind(data.enabled)
        .bind(now)
        .fetch_one(self.pool())
        .await?;

        Ok(def)
    }

    async fn find_recurring_by_id(&self, id: Uuid) -> Result<Option<RecurringTask>, CoreError> {
        let def = sqlx::query_as("SELECT * FROM recurring_tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(def)
    }

    async fn list_recurring(&self) -> Result<Vec<RecurringTask>, CoreError> {
        let defs = sqlx::query_as("SELECT * FROM recurring_tasks ORDER BY day, time")
            .fetch_all(self.pool())
            .await?;
        Ok(defs)
    }

    async fn update_recurring(
        &self,
        id: Uuid,
        data: UpdateRecurringTask,
    ) -> Result<RecurringTask, CoreError> {
        let existing = self
            .find_recurring_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Recurring task {}", id)))?;

        let title = data.title.unwrap_or(existing.title);
        let description = data.description.unwrap_or(existing.description);
        let category = data.category.unwrap_or(existing.category);
        let day = data.day.unwrap_or(existing.day);
        let time = data.time.unwrap_or(existing.time);

        if title.trim().is_empty() {
            return Err(CoreError::InvalidInput("Task title cannot be empty".to_string()));
        }

        let def: RecurringTask = sqlx::query_as(
            r#"UPDATE recurring_tasks
            SET title = $1, description = $2, category = $3, day = $4, time = $5, updated_at = $6
            WHERE id = $7
            RETURNING *"#,
        )
        .bind(&title)
        .bind(&description)
        .bind(category)
        .bind(day)
        .bind(time)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(self.pool())
        .await?;

        Ok(def)
    }

    async fn set_recurring_enabled(
        &self,
        id: Uuid,
        enabled: bool,
    ) -> Result<RecurringTask, CoreError> {
        let def: Option<RecurringTask> = sqlx::query_as(
            r#"UPDATE recurring_tasks
            SET enabled = $1, updated_at = $2
            WHERE id = $3
            RETURNING *"#,
        )
        .bind(enabled)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        def.ok_or_else(|| CoreError::NotFound(format!("Recurring task {}", id)))
    }

    async fn delete_recurring(&self, id: Uuid) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM recurring_tasks WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(format!("Recurring task {}", id)));
        }
        Ok(())
    }
}
