use anyhow::{ensure, Context, Result};

use crate::layout::page::MAX_UTC_OFFSET_MINUTES;
use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Offset applied to timestamps printed in exported reports.
    pub report_utc_offset_minutes: i32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let report_utc_offset_minutes = parse_utc_offset(
            &std::env::var("REPORT_UTC_OFFSET_MINUTES").unwrap_or_else(|_| "-180".to_string()),
        )?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            report_utc_offset_minutes,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_utc_offset(raw: &str) -> Result<i32> {
    let minutes = raw
        .trim()
        .parse::<i32>()
        .context("REPORT_UTC_OFFSET_MINUTES must be an integer")?;
    ensure!(
        minutes.unsigned_abs() < MAX_UTC_OFFSET_MINUTES.unsigned_abs(),
        "REPORT_UTC_OFFSET_MINUTES must be within ±{MAX_UTC_OFFSET_MINUTES} minutes, got {minutes}"
    );
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_offset_accepts_real_zones() {
        assert_eq!(parse_utc_offset("-180").unwrap(), -180);
        assert_eq!(parse_utc_offset(" 330 ").unwrap(), 330);
    }

    #[test]
    fn test_parse_utc_offset_rejects_out_of_range_and_garbage() {
        assert!(parse_utc_offset("1440").is_err());
        assert!(parse_utc_offset("-2147483648").is_err());
        assert!(parse_utc_offset("99999999999").is_err());
        assert!(parse_utc_offset("UTC-3").is_err());
    }
}
