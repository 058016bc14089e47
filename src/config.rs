use crate::error::{AccelError, Result};

pub const DEFAULT_MIN_FRAC_DONE: f64 = 0.85;

const DEFAULT_DATABASE_URL: &str = "sqlite://batch_accel.db?mode=rwc";

/// Project-level settings for one acceleration pass. Read from the
/// environment (optionally via a `.env` file), never from CLI flags, since
/// this binary runs unattended under cron.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub database_url: String,
    /// Completion fraction below which a batch is not yet eligible for
    /// acceleration.
    pub min_frac_done: f64,
}

impl ProjectConfig {
    pub fn from_env() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let min_frac_done = match std::env::var("BATCH_ACCEL_MIN_FRAC_DONE") {
            Ok(raw) => raw.trim().parse::<f64>().map_err(|_| {
                AccelError::Config(format!(
                    "BATCH_ACCEL_MIN_FRAC_DONE is not a number: {}",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_MIN_FRAC_DONE,
        };
        if !(0.0..=1.0).contains(&min_frac_done) {
            return Err(AccelError::Config(format!(
                "BATCH_ACCEL_MIN_FRAC_DONE must be within [0, 1], got {}",
                min_frac_done
            )));
        }

        Ok(Self {
            database_url,
            min_frac_done,
        })
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            min_frac_done: DEFAULT_MIN_FRAC_DONE,
        }
    }
}
