use super::{load_from, Settings};

use std::{collections::HashMap, time::Duration};

use shared::criteria::{RequestSortKey, UserSortKey};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    let settings = load_from(None, env_of(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.login_delay, Duration::from_millis(1000));
    assert_eq!(settings.signup_delay, Duration::from_millis(1500));
    assert_eq!(settings.user_sort, UserSortKey::Rating);
    assert_eq!(settings.request_sort, RequestSortKey::Newest);
}

#[test]
fn file_values_apply() {
    let raw = r#"
        log = "debug"
        login_delay_ms = "10"
        user_sort = "name"
    "#;
    let settings = load_from(Some(raw), env_of(&[]));
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.login_delay, Duration::from_millis(10));
    assert_eq!(settings.user_sort, UserSortKey::Name);
}

#[test]
fn env_overrides_file() {
    let raw = r#"request_sort = "oldest""#;
    let settings = load_from(
        Some(raw),
        env_of(&[
            ("SKILLSWAP_REQUEST_SORT", "status"),
            ("SKILLSWAP_SIGNUP_DELAY_MS", "0"),
        ]),
    );
    assert_eq!(settings.request_sort, RequestSortKey::Status);
    assert_eq!(settings.signup_delay, Duration::ZERO);
}

#[test]
fn unparseable_values_keep_previous() {
    let raw = r#"user_sort = "swaps""#;
    let settings = load_from(
        Some(raw),
        env_of(&[
            ("SKILLSWAP_USER_SORT", "popularity"),
            ("SKILLSWAP_LOGIN_DELAY_MS", "soon"),
        ]),
    );
    assert_eq!(settings.user_sort, UserSortKey::Swaps);
    assert_eq!(settings.login_delay, Duration::from_millis(1000));
}

#[test]
fn malformed_file_is_ignored() {
    let settings = load_from(Some("not = [valid"), env_of(&[]));
    assert_eq!(settings, Settings::default());
}

#[test]
fn auth_backend_uses_configured_delays() {
    let settings = load_from(None, env_of(&[("SKILLSWAP_LOGIN_DELAY_MS", "5")]));
    let backend = settings.auth_backend();
    assert_eq!(backend.login_delay, Duration::from_millis(5));
    assert_eq!(backend.signup_delay, Duration::from_millis(1500));
}

#[test]
fn numeric_values_do_not_discard_string_keys() {
    let raw = "log = \"debug\"\nlogin_delay_ms = 250\nsignup_delay_ms = \"40\"\n";
    let settings = load_from(Some(raw), env_of(&[]));
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.login_delay, Duration::from_millis(250));
    assert_eq!(settings.signup_delay, Duration::from_millis(40));
}

#[test]
fn bad_value_only_loses_its_own_key() {
    let raw = r#"
        log = "warn"
        login_delay_ms = -5
        user_sort = ["name"]
        request_sort = "oldest"
    "#;
    let settings = load_from(Some(raw), env_of(&[]));
    assert_eq!(settings.log_filter, "warn");
    assert_eq!(settings.login_delay, Duration::from_millis(1000));
    assert_eq!(settings.user_sort, UserSortKey::Rating);
    assert_eq!(settings.request_sort, RequestSortKey::Oldest);
}
