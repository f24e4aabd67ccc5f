use crate::error::CoreError;
use crate::models::{Game, GameSeries, NewGameSeries};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Series lengths the league schedules.
const VALID_SERIES_LENGTHS: [u32; 2] = [3, 6];

#[derive(Debug, Clone, FromRow)]
struct SeriesRow {
    id: Uuid,
    home_team: String,
    visiting_team: String,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
struct GameRow {
    id: Uuid,
    series_id: Uuid,
    date: NaiveDate,
    start_time: Option<NaiveTime>,
    game_number: i64,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            id: row.id,
            date: row.date,
            start_time: row.start_time,
            game_number: row.game_number,
        }
    }
}

fn validate_new_series(data: &NewGameSeries) -> Result<(), CoreError> {
    if data.home_team.trim().is_empty() || data.visiting_team.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "Both team names are required".to_string(),
        ));
    }
    if data.home_team == data.visiting_team {
        return Err(CoreError::InvalidInput(
            "A team cannot play itself".to_string(),
        ));
    }
    if !VALID_SERIES_LENGTHS.contains(&data.game_count) {
        return Err(CoreError::InvalidInput(format!(
            "A series is 3 or 6 games, got {}",
            data.game_count
        )));
    }
    Ok(())
}

#[async_trait]
impl super::GameScheduleRepository for SqliteRepository {
    async fn add_series(&self, data: NewGameSeries) -> Result<GameSeries, CoreError> {
        validate_new_series(&data)?;

        let mut tx = self.pool().begin().await?;

        let series_id = Uuid::now_v7();
        sqlx::query(
            "INSERT INTO game_series (id, home_team, visiting_team, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(series_id)
        .bind(&data.home_team)
        .bind(&data.visiting_team)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let mut games = Vec::with_capacity(data.game_count as usize);
        for offset in 0..data.game_count {
            let date = data
                .start_date
                .checked_add_days(Days::new(offset as u64))
                .ok_or_else(|| {
                    CoreError::InvalidInput(format!("Series start date {} overflows", data.start_date))
                })?;
            let game = Game {
                id: Uuid::now_v7(),
                date,
                start_time: data.start_time,
                game_number: offset as i64 + 1,
            };
            sqlx::query(
                r#"INSERT INTO games (id, series_id, date, start_time, game_number)
                VALUES ($1, $2, $3, $4, $5)"#,
            )
            .bind(game.id)
            .bind(series_id)
            .bind(game.date)
            .bind(game.start_time)
            .bind(game.game_number)
            .execute(&mut *tx)
            .await?;
            games.push(game);
        }

        tx.commit().await?;

        Ok(GameSeries {
            id: series_id,
            home_team: data.home_team,
            visiting_team: data.visiting_team,
            games,
        })
    }

    async fn find_series_by_id(&self, id: Uuid) -> Result<Option<GameSeries>, CoreError> {
        let row: Option<SeriesRow> = sqlx::query_as("SELECT * FROM game_series WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let games: Vec<GameRow> =
            sqlx::query_as("SELECT * FROM games WHERE series_id = $1 ORDER BY game_number")
                .bind(id)
                .fetch_all(self.pool())
                .await?;

        Ok(Some(GameSeries {
            id: row.id,
            home_team: row.home_team,
            visiting_team: row.visiting_team,
            games: games.into_iter().map(Into::into).collect(),
        }))
    }

    async fn list_series(&self) -> Result<Vec<GameSeries>, CoreError> {
        let series_rows: Vec<SeriesRow> =
            sqlx::query_as("SELECT * FROM game_series ORDER BY created_at")
                .fetch_all(self.pool())
                .await?;

        let game_rows: Vec<GameRow> =
            sqlx::query_as("SELECT * FROM games ORDER BY series_id, game_number")
                .fetch_all(self.pool())
                .await?;

        // Group games under their series client-side; one pass each.
        let mut series: Vec<GameSeries> = series_rows
            .into_iter()
            .map(|row| GameSeries {
                id: row.id,
                home_team: row.home_team,
                visiting_team: row.visiting_team,
                games: Vec::new(),
            })
            .collect();

        for game in game_rows {
            if let Some(owner) = series.iter_mut().find(|s| s.id == game.series_id) {
                owner.games.push(game.into());
            }
        }

        // Earliest series first, matching the schedule view
        series.sort_by_key(|s| s.games.first().map(|g| g.date));
        Ok(series)
    }

    async fn delete_series(&self, id: Uuid) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM game_series WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(format!("Series {}", id)));
        }
        Ok(())
    }
}
