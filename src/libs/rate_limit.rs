//! Client-side daily quota for AI report requests.
//!
//! The counter is a date-stamped JSON file in the data directory, so the
//! limit survives process restarts. A new calendar day resets the count.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const MAX_DAILY_AI_REQUESTS: u32 = 3;
const USAGE_FILE_NAME: &str = "ai_usage.json";

#[derive(Debug, Serialize, Deserialize)]
struct DailyUsage {
    date: NaiveDate,
    count: u32,
}

pub struct DailyQuota {
    path: PathBuf,
    max: u32,
}

impl DailyQuota {
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: DataStorage::new().get_path(USAGE_FILE_NAME)?,
            max: MAX_DAILY_AI_REQUESTS,
        })
    }

    /// Records one request for `today` if the quota allows it. Returns
    /// `false` (recording nothing) once the daily maximum is reached.
    pub fn try_acquire(&self, today: NaiveDate) -> Result<bool> {
        let mut usage = self.load(today);
        if usage.count >= self.max {
            return Ok(false);
        }

        usage.count += 1;
        fs::write(&self.path, serde_json::to_string(&usage)?)?;
        Ok(true)
    }

    pub fn remaining(&self, today: NaiveDate) -> u32 {
        self.max.saturating_sub(self.load(today).count)
    }

    fn load(&self, today: NaiveDate) -> DailyUsage {
        let stored: Option<DailyUsage> = fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok());

        match stored {
            // A stored record from an earlier day starts a fresh count.
            Some(usage) if usage.date == today => usage,
            _ => DailyUsage { date: today, count: 0 },
        }
    }
}
