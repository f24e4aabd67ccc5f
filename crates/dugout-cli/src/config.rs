use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

fn default_database() -> String {
    "dugout.db".to_string()
}

/// CLI configuration, merged from `dugout.toml` and `DUGOUT_*` env vars.
#[derive(Deserialize, Debug)]
pub struct Config {
    /// The staff's team; unset means every day reads as an off day
    #[serde(default)]
    pub team: Option<String>,
    /// Path to the SQLite database file
    #[serde(default = "default_database")]
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            team: None,
            database: default_database(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("dugout.toml"))
            .merge(Env::prefixed("DUGOUT_"))
            .extract()
    }
}
