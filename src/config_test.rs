use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================
// SignupConfig
// =============================================================

#[test]
fn signup_config_defaults_match_reference_delays() {
    let config = SignupConfig::default();
    assert_eq!(config.submit_latency, Duration::from_secs(2));
    assert_eq!(config.reply_delay, Duration::from_secs(1));
}

#[test]
fn signup_config_missing_vars_fall_back_to_defaults() {
    let config = SignupConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, SignupConfig::default());
}

#[test]
fn signup_config_reads_overrides() {
    let config = SignupConfig::from_lookup(lookup_from(&[
        ("SIGNUP_SUBMIT_LATENCY_MS", "250"),
        ("CHAT_REPLY_DELAY_MS", " 10 "),
    ]))
    .unwrap();
    assert_eq!(config.submit_latency, Duration::from_millis(250));
    assert_eq!(config.reply_delay, Duration::from_millis(10));
}

#[test]
fn signup_config_rejects_garbage() {
    let err = SignupConfig::from_lookup(lookup_from(&[("CHAT_REPLY_DELAY_MS", "soon")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue { var: "CHAT_REPLY_DELAY_MS".to_owned(), value: "soon".to_owned() }
    );
}

#[test]
fn signup_config_rejects_negative_delay() {
    assert!(SignupConfig::from_lookup(lookup_from(&[("SIGNUP_SUBMIT_LATENCY_MS", "-5")])).is_err());
}

// =============================================================
// ServerConfig
// =============================================================

#[test]
fn server_config_default_port() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn server_config_rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn lenient_lookup_falls_back_to_defaults_on_garbage() {
    let config = SignupConfig::from_lookup_or_default(lookup_from(&[
        ("SIGNUP_SUBMIT_LATENCY_MS", "fast"),
        ("CHAT_REPLY_DELAY_MS", "5"),
    ]));
    assert_eq!(config, SignupConfig::default());
}

#[test]
fn lenient_lookup_keeps_valid_overrides() {
    let config = SignupConfig::from_lookup_or_default(lookup_from(&[("CHAT_REPLY_DELAY_MS", "5")]));
    assert_eq!(config.reply_delay, Duration::from_millis(5));
    assert_eq!(config.submit_latency, Duration::from_millis(DEFAULT_SUBMIT_LATENCY_MS));
}
