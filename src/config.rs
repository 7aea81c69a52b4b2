//! Service configuration from the environment (a `.env` file is loaded first by `main`).
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | unset: in-memory catalog, read-only |
//! | `PORT` | `8083` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `SHIPPING_UTC_OFFSET_HOURS` | `7` |

use anyhow::{bail, Context};
use chrono::{FixedOffset, NaiveDateTime, Offset, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub port: u16,
    pub db_max_connections: u32,
    /// Offset of the shop's local time from UTC; order hours are read in this zone.
    pub utc_offset_hours: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { database_url: None, port: 8083, db_max_connections: 10, utc_offset_hours: 7 }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(v) => v.parse().with_context(|| format!("invalid PORT: {v}"))?,
            None => defaults.port,
        };
        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().with_context(|| format!("invalid DB_MAX_CONNECTIONS: {v}"))?,
            None => defaults.db_max_connections,
        };
        let utc_offset_hours: i32 = match get("SHIPPING_UTC_OFFSET_HOURS") {
            Some(v) => v.parse().with_context(|| format!("invalid SHIPPING_UTC_OFFSET_HOURS: {v}"))?,
            None => defaults.utc_offset_hours,
        };
        if !(-12..=14).contains(&utc_offset_hours) {
            bail!("SHIPPING_UTC_OFFSET_HOURS out of range (-12..=14): {utc_offset_hours}");
        }

        Ok(Self { database_url: get("DATABASE_URL"), port, db_max_connections, utc_offset_hours })
    }

    pub fn local_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours.saturating_mul(3600)).unwrap_or_else(|| Utc.fix())
    }

    /// Current wall-clock time in the shop's zone.
    pub fn local_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.local_offset()).naive_local()
    }
}
