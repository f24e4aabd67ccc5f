//! Game-day classification: resolving a (date, team) pair against the
//! scheduled series.
//!
//! Classification is recomputed from scratch on every call; nothing here
//! holds state. A team can appear in multiple series on a contended date,
//! so home/away flags are unioned across every recorded game rather than
//! taken from the first match.

use crate::models::{DayClassification, GameSeries};
use chrono::{NaiveDate, NaiveTime};

/// A game on a given date from the perspective of the schedule view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub home_team: String,
    pub visiting_team: String,
    pub start_time: Option<NaiveTime>,
    pub game_number: i64,
}

/// Classifies a calendar date for a team.
///
/// An empty team name classifies every date as an off day: staff without
/// a team assignment see no game days. Missing series likewise.
pub fn classify(date: NaiveDate, team: &str, series: &[GameSeries]) -> DayClassification {
    let mut classification = DayClassification::default();
    if team.is_empty() {
        return classification;
    }

    for s in series {
        for game in &s.games {
            if game.date != date {
                continue;
            }
            if s.home_team == team {
                classification.home = true;
            }
            if s.visiting_team == team {
                classification.away = true;
            }
        }
    }

    classification
}

/// True iff the team has at least one recorded game (home or away) on the
/// date.
pub fn is_game_day(date: NaiveDate, team: &str, series: &[GameSeries]) -> bool {
    classify(date, team, series).is_game_day()
}

/// First pitch for the team's games on the date: the earliest recorded
/// start time across every game involving the team. Games without a
/// recorded time contribute nothing; a day where no game carries a time
/// yields `None` and callers fall back to the default cutoff.
pub fn game_time_on(date: NaiveDate, team: &str, series: &[GameSeries]) -> Option<NaiveTime> {
    if team.is_empty() {
        return None;
    }

    series
        .iter()
        .filter(|s| s.involves(team))
        .flat_map(|s| &s.games)
        .filter(|g| g.date == date)
        .filter_map(|g| g.start_time)
        .min()
}

/// The day's matchups involving the team, for schedule display.
pub fn games_on(date: NaiveDate, team: &str, series: &[GameSeries]) -> Vec<Matchup> {
    if team.is_empty() {
        return Vec::new();
    }

    let mut matchups = Vec::new();
    for s in series {
        if !s.involves(team) {
            continue;
        }
        for game in &s.games {
            if game.date == date {
                matchups.push(Matchup {
                    home_team: s.home_team.clone(),
                    visiting_team: s.visiting_team.clone(),
                    start_time: game.start_time,
                    game_number: game.game_number,
                });
            }
        }
    }
    matchups
}
