use anyhow::anyhow;
use chrono_tz::Tz;
use std::{env, net::SocketAddr};

pub const DEFAULT_HOLIDAY_API_URL: &str = "https://date.nager.at/api/v3/PublicHolidays";
const DEFAULT_HOLIDAY_API_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub holiday_api_url: String,
    pub holiday_api_timeout_seconds: u64,
    pub holiday_api_user_agent: String,
    pub time_zone: Tz,
    pub bind_addr: SocketAddr,
    pub cors_allow_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            holiday_api_url: DEFAULT_HOLIDAY_API_URL.to_string(),
            holiday_api_timeout_seconds: DEFAULT_HOLIDAY_API_TIMEOUT_SECONDS,
            holiday_api_user_agent: default_user_agent(),
            time_zone: chrono_tz::UTC,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            cors_allow_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let holiday_api_url = env::var("HOLIDAY_API_URL")
            .unwrap_or_else(|_| DEFAULT_HOLIDAY_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if holiday_api_url.is_empty() {
            return Err(anyhow!("HOLIDAY_API_URL must not be empty"));
        }

        let holiday_api_timeout_seconds = match env::var("HOLIDAY_API_TIMEOUT_SECONDS") {
            Ok(raw) => parse_timeout_seconds(&raw)?,
            Err(_) => DEFAULT_HOLIDAY_API_TIMEOUT_SECONDS,
        };

        let holiday_api_user_agent =
            env::var("HOLIDAY_API_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        let time_zone_name = env::var("APP_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let bind_addr_raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", bind_addr_raw))?;

        let cors_allow_origins = parse_origins(&env::var("CORS_ALLOW_ORIGINS").unwrap_or_default());

        Ok(Config {
            holiday_api_url,
            holiday_api_timeout_seconds,
            holiday_api_user_agent,
            time_zone,
            bind_addr,
            cors_allow_origins,
        })
    }
}

fn default_user_agent() -> String {
    format!("longweekend-backend/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_timeout_seconds(raw: &str) -> anyhow::Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(seconds),
        _ => Err(anyhow!("Invalid HOLIDAY_API_TIMEOUT_SECONDS value: {}", raw)),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_nager_in_utc() {
        let config = Config::default();
        assert_eq!(config.holiday_api_url, DEFAULT_HOLIDAY_API_URL);
        assert_eq!(config.time_zone, chrono_tz::UTC);
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.holiday_api_user_agent.starts_with("longweekend-backend/"));
    }

    #[test]
    fn parse_timeout_seconds_accepts_positive_integers() {
        assert_eq!(parse_timeout_seconds("30").unwrap(), 30);
        assert_eq!(parse_timeout_seconds(" 5 ").unwrap(), 5);
    }

    #[test]
    fn parse_timeout_seconds_rejects_malformed_values() {
        for raw in ["", "ten", "-1", "0", "1.5"] {
            let err = parse_timeout_seconds(raw).unwrap_err();
            assert!(err.to_string().contains("HOLIDAY_API_TIMEOUT_SECONDS"));
        }
    }

    #[test]
    fn parse_origins_skips_blank_entries() {
        assert_eq!(
            parse_origins(" http://a.test, ,http://b.test "),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }
}
