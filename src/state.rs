use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::models::GreetingSet;

/// Shared service bundle. The connection is only ever read after load;
/// the mutex exists for rusqlite's sake, not for coordination.
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub config: AppConfig,
    pub greetings: GreetingSet,
}

impl AppState {
    /// Reference date for availability checks: the configured demo date
    /// if set, the local wall-clock date otherwise.
    pub fn today(&self) -> NaiveDate {
        self.config
            .demo_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
