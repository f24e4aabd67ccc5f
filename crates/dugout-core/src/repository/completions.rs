use crate::error::CoreError;
use crate::models::CompletionMap;
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct CompletionRow {
    def_id: Uuid,
    date: NaiveDate,
    completed: bool,
}

#[async_trait]
impl super::CompletionRepository for SqliteRepository {
    async fn load_completions(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<CompletionMap, CoreError> {
        let rows: Vec<CompletionRow> =
            sqlx::query_as("SELECT * FROM recurring_completions WHERE date BETWEEN $1 AND $2")
                .bind(from)
                .bind(to)
                .fetch_all(self.pool())
                .await?;

        let mut map = CompletionMap::new();
        for row in rows {
            map.set(row.date, row.def_id, row.completed);
        }
        Ok(map)
    }

    async fn set_completion(
        &self,
        def_id: Uuid,
        date: NaiveDate,
        completed: bool,
    ) -> Result<(), CoreError> {
        sqlx::query(
            r#"INSERT INTO recurring_completions (def_id, date, completed)
            VALUES ($1, $2, $3)
            ON CONFLICT (def_id, date) DO UPDATE SET completed = excluded.completed"#,
        )
        .bind(def_id)
        .bind(date)
        .bind(completed)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn toggle_completion(&self, def_id: Uuid, date: NaiveDate) -> Result<bool, CoreError> {
        // Missing row reads as "not completed", so a first toggle stores true.
        let current: Option<bool> = sqlx::query_scalar(
            "SELECT completed FROM recurring_completions WHERE def_id = $1 AND date = $2",
        )
        .bind(def_id)
        .bind(date)
        .fetch_optional(self.pool())
        .await?;

        let next = !current.unwrap_or(false);
        self.set_completion(def_id, date, next).await?;
        Ok(next)
    }
}
