use crate::error::CoreError;
use crate::models::{
    DayRule, NewScheduledTask, ScheduledTask, TaskCategory, UpdateScheduledTask,
};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Raw row shape; `day_rule` is a nullable integer in storage and is
/// widened into [`DayRule`] on the way out.
#[derive(Debug, Clone, FromRow)]
struct ScheduledTaskRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    category: TaskCategory,
    date: NaiveDate,
    time: NaiveTime,
    completed: bool,
    day_rule: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ScheduledTaskRow> for ScheduledTask {
    fn from(row: ScheduledTaskRow) -> Self {
        ScheduledTask {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            date: row.date,
            time: row.time,
            completed: row.completed,
            day_rule: DayRule::from_db(row.day_rule),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl super::ScheduledTaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewScheduledTask) -> Result<ScheduledTask, CoreError> {
        if data.title.trim().is_empty() {
            return Err(CoreError::InvalidInput("Task title cannot be empty".to_string()));
        }

        let now = Utc::now();
        let row: ScheduledTaskRow = sqlx::query_as(
            r#"INSERT INTO scheduled_tasks
            (id, title, description, category, date, time, completed, day_rule, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 0, $7, $8, $8)
            RETURNING *"#,
        )
        .bind(Uuid::now_v7())
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.category)
        .bind(data.date)
        .bind(data.time)
        .bind(data.day_rule.to_db())
        .bind(now)
        .fetch_one(self.pool())
        .await?;

        Ok(row.into())
    }

    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<ScheduledTask>, CoreError> {
        let row: Option<ScheduledTaskRow> =
            sqlx::query_as("SELECT * FROM scheduled_tasks WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool())
                .await?;
        Ok(row.map(Into::into))
    }

    async fn list_tasks(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<ScheduledTask>, CoreError> {
        let rows: Vec<ScheduledTaskRow> = match range {
            Some((from, to)) => {
                sqlx::query_as(
                    "SELECT * FROM scheduled_tasks WHERE date BETWEEN $1 AND $2 ORDER BY date, time",
                )
                .bind(from)
                .bind(to)
                .fetch_all(self.pool())
                .await?
            }
            None => {
                sqlx::query_as("SELECT * FROM scheduled_tasks ORDER BY date, time")
                    .fetch_all(self.pool())
                    .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_task(
        &self,
        id: Uuid,
        data: UpdateScheduledTask,
    ) -> Result<ScheduledTask, CoreError> {
        let existing = self
            .find_task_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Task {}", id)))?;

        let title = data.title.unwrap_or(existing.title);
        let description = data.description.unwrap_or(existing.description);
        let category = data.category.unwrap_or(existing.category);
        let date = data.date.unwrap_or(existing.date);
        let time = data.time.unwrap_or(existing.time);
        let day_rule = data.day_rule.unwrap_or(existing.day_rule);

        if title.trim().is_empty() {
            return Err(CoreError::InvalidInput("Task title cannot be empty".to_string()));
        }

        let row: ScheduledTaskRow = sqlx::query_as(
            r#"UPDATE scheduled_tasks
            SET title = $1, description = $2, category = $3, date = $4, time = $5,
                day_rule = $6, updated_at = $7
            WHERE id = $8
            RETURNING *"#,
        )
        .bind(&title)
        .bind(&description)
        .bind(category)
        .bind(date)
        .bind(time)
        .bind(day_rule.to_db())
        .bind(Utc::now())
        .bind(id)
        .fetch_one(self.pool())
        .await?;

        Ok(row.into())
    }

    async fn set_task_completed(
        &self,
        id: Uuid,
        completed: bool,
    ) -> Result<ScheduledTask, CoreError> {
        let row: Option<ScheduledTaskRow> = sqlx::query_as(
            r#"UPDATE scheduled_tasks
            SET completed = $1, updated_at = $2
            WHERE id = $3
            RETURNING *"#,
        )
        .bind(completed)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| CoreError::NotFound(format!("Task {}", id)))
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduled_tasks WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(format!("Task {}", id)));
        }
        Ok(())
    }
}
