use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.client, ClientConfig::default());
    assert_eq!(cfg.cors_origin, None);
    assert!(cfg.compression);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_backend_settings() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("CLEAN_INDIA_API_BASE", "https://api.cleanindia.example/"),
        ("CLEAN_INDIA_API_CREDENTIALS", "same-origin"),
        ("CLEAN_INDIA_CORS_ORIGIN", "https://cleanindia.example"),
        ("CLEAN_INDIA_COMPRESSION", "off"),
    ]))
    .unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.client.api_base, "https://api.cleanindia.example");
    assert_eq!(cfg.client.credentials, CredentialMode::SameOrigin);
    assert_eq!(cfg.cors_origin.as_deref(), Some("https://cleanindia.example"));
    assert!(!cfg.compression);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("CLEAN_INDIA_API_BASE", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.client.api_base, DEFAULT_API_BASE);
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "PORT", .. }));
}

#[test]
fn rejects_unknown_credential_mode() {
    let err = ServerConfig::from_lookup(lookup(&[("CLEAN_INDIA_API_CREDENTIALS", "sometimes")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid CLEAN_INDIA_API_CREDENTIALS: \"sometimes\"");
}

#[test]
fn unrecognised_compression_flag_keeps_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("CLEAN_INDIA_COMPRESSION", "maybe")])).unwrap();
    assert!(cfg.compression);
}
