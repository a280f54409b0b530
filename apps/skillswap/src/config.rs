use std::{collections::HashMap, fs, time::Duration};

use client_core::auth::{SimulatedAuth, DEFAULT_LOGIN_DELAY, DEFAULT_SIGNUP_DELAY};
use shared::criteria::{RequestSortKey, UserSortKey};
use tracing::warn;

pub const CONFIG_FILE: &str = "skillswap.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub login_delay: Duration,
    pub signup_delay: Duration,
    pub user_sort: UserSortKey,
    pub request_sort: RequestSortKey,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            login_delay: DEFAULT_LOGIN_DELAY,
            signup_delay: DEFAULT_SIGNUP_DELAY,
            user_sort: UserSortKey::default(),
            request_sort: RequestSortKey::default(),
        }
    }
}

impl Settings {
    pub fn auth_backend(&self) -> SimulatedAuth {
        SimulatedAuth {
            login_delay: self.login_delay,
            signup_delay: self.signup_delay,
        }
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string(CONFIG_FILE).ok();
    load_from(file.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then the flat `key = value` file, then the environment.
pub(crate) fn load_from(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match raw.parse::<toml::Table>() {
            Ok(table) => {
                let file_cfg = flatten_scalars(table);
                apply(&mut settings, |key| file_cfg.get(key).cloned());
            }
            Err(error) => warn!(file = CONFIG_FILE, %error, "ignoring malformed config file"),
        }
    }
    apply(&mut settings, |key| env(&format!("SKILLSWAP_{}", key.to_uppercase())));

    settings
}

/// Scalar values as strings so each key parses on its own. Arrays and
/// tables are skipped.
fn flatten_scalars(table: toml::Table) -> HashMap<String, String> {
    table
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                toml::Value::String(v) => v,
                toml::Value::Integer(v) => v.to_string(),
                toml::Value::Float(v) => v.to_string(),
                toml::Value::Boolean(v) => v.to_string(),
                other => {
                    warn!(%key, kind = other.type_str(), "ignoring non-scalar config value");
                    return None;
                }
            };
            Some((key, value))
        })
        .collect()
}

fn apply(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("log") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("login_delay_ms") {
        if let Ok(ms) = v.trim().parse::<u64>() {
            settings.login_delay = Duration::from_millis(ms);
        }
    }
    if let Some(v) = lookup("signup_delay_ms") {
        if let Ok(ms) = v.trim().parse::<u64>() {
            settings.signup_delay = Duration::from_millis(ms);
        }
    }
    if let Some(v) = lookup("user_sort") {
        if let Ok(key) = v.parse() {
            settings.user_sort = key;
        }
    }
    if let Some(v) = lookup("request_sort") {
        if let Ok(key) = v.parse() {
            settings.request_sort = key;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
