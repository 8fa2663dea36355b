//! Runtime configuration.
//!
//! Values come from the environment, optionally seeded from a `.env` file.
//! Every variable has a default; a value that does not parse is logged and
//! replaced by its default.
//!
//! | Variable                | Default            |
//! |-------------------------|--------------------|
//! | `FOODY_TOKEN_SECRET`    | a development key  |
//! | `FOODY_TOKEN_TTL_HOURS` | `24` (1 to 8760)   |
//! | `FOODY_ACTOR_BUFFER`    | `32`               |

mod secret;

pub use secret::Secret;

use chrono::Duration;
use std::env;
use std::str::FromStr;
use tracing::{error, warn};

const DEV_TOKEN_SECRET: &str = "foody-development-secret";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
/// One year.
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;
const DEFAULT_ACTOR_BUFFER: usize = 32;

#[derive(Debug, Clone)]
pub struct FoodyConfig {
    /// Key for signing credential tokens.
    pub token_secret: Secret<String>,
    pub token_ttl_hours: i64,
    /// Mailbox capacity of every actor.
    pub actor_buffer: usize,
}

impl Default for FoodyConfig {
    fn default() -> Self {
        Self {
            token_secret: Secret::new(DEV_TOKEN_SECRET.to_string()),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            actor_buffer: DEFAULT_ACTOR_BUFFER,
        }
    }
}

impl FoodyConfig {
    pub fn from_env_or_default() -> Self {
        let _ = dotenvy::dotenv();

        let token_secret = match env::var("FOODY_TOKEN_SECRET") {
            Ok(s) if !s.trim().is_empty() => Secret::new(s),
            _ => {
                warn!("FOODY_TOKEN_SECRET is not set. Using the development key; do not use it in production.");
                Secret::new(DEV_TOKEN_SECRET.to_string())
            }
        };
        let token_ttl_hours = ttl_hours_or_default(env::var("FOODY_TOKEN_TTL_HOURS").ok());
        let actor_buffer = parse_or_default(
            "FOODY_ACTOR_BUFFER",
            env::var("FOODY_ACTOR_BUFFER").ok(),
            DEFAULT_ACTOR_BUFFER,
        )
        .max(1);

        Self {
            token_secret,
            token_ttl_hours,
            actor_buffer,
        }
    }

    /// Lifetime of issued tokens. Out-of-range hours give the default.
    pub fn token_ttl(&self) -> Duration {
        Some(self.token_ttl_hours)
            .filter(|hours| (1..=MAX_TOKEN_TTL_HOURS).contains(hours))
            .and_then(Duration::try_hours)
            .unwrap_or_else(|| Duration::hours(DEFAULT_TOKEN_TTL_HOURS))
    }
}

fn ttl_hours_or_default(raw: Option<String>) -> i64 {
    let hours = parse_or_default("FOODY_TOKEN_TTL_HOURS", raw, DEFAULT_TOKEN_TTL_HOURS);
    if (1..=MAX_TOKEN_TTL_HOURS).contains(&hours) {
        hours
    } else {
        error!(
            "FOODY_TOKEN_TTL_HOURS must be between 1 and {MAX_TOKEN_TTL_HOURS}, got {hours}. \
             Using the default of {DEFAULT_TOKEN_TTL_HOURS}."
        );
        DEFAULT_TOKEN_TTL_HOURS
    }
}

fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            error!("Invalid {name} value '{raw}' ({e}). Using the default of {default}.");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_or_falls_back() {
        assert_eq!(parse_or_default("N", Some(" 48 ".into()), 24i64), 48);
        assert_eq!(parse_or_default("N", Some("soon".into()), 24i64), 24);
        assert_eq!(parse_or_default("N", None, 32usize), 32);
    }

    #[test]
    fn ttl_out_of_range_falls_back() {
        assert_eq!(ttl_hours_or_default(Some("48".into())), 48);
        assert_eq!(ttl_hours_or_default(Some("8760".into())), 8760);
        assert_eq!(ttl_hours_or_default(Some("9000000000000000".into())), 24);
        assert_eq!(ttl_hours_or_default(Some("0".into())), 24);
        assert_eq!(ttl_hours_or_default(Some("-5".into())), 24);
        assert_eq!(ttl_hours_or_default(None), 24);
    }

    #[test]
    fn token_ttl_never_panics() {
        let config = FoodyConfig {
            token_ttl_hours: i64::MAX,
            ..FoodyConfig::default()
        };
        assert_eq!(config.token_ttl(), Duration::hours(24));

        let config = FoodyConfig {
            token_ttl_hours: 2,
            ..FoodyConfig::default()
        };
        assert_eq!(config.token_ttl(), Duration::hours(2));
    }

    #[test]
    fn default_config() {
        let config = FoodyConfig::default();
        assert_eq!(config.token_ttl_hours, 24);
        assert_eq!(config.actor_buffer, 32);
        assert_eq!(format!("{:?}", config.token_secret), "****");
    }
}
