use std::env;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    /// Pins "today" for demos and tests. Unset means wall-clock date.
    pub demo_date: Option<NaiveDate>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let demo_date = match env::var("DEMO_DATE") {
            Ok(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("invalid DEMO_DATE: {raw} (expected YYYY-MM-DD)"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            demo_date,
        })
    }
}
