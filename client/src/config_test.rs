use super::*;

#[test]
fn default_points_at_local_backend_with_cookies() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base, "http://localhost:4000");
    assert_eq!(cfg.credentials, CredentialMode::Include);
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ClientConfig::new("https://api.example.in///", CredentialMode::Omit);
    assert_eq!(cfg.api_base, "https://api.example.in");
}

#[test]
fn new_with_blank_base_uses_default() {
    let cfg = ClientConfig::new("   ", CredentialMode::Include);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn endpoint_joins_with_and_without_leading_slash() {
    let cfg = ClientConfig::new("http://h:1", CredentialMode::Include);
    assert_eq!(cfg.endpoint("/api/auth/login"), "http://h:1/api/auth/login");
    assert_eq!(cfg.endpoint("api/user/data"), "http://h:1/api/user/data");
}

#[test]
fn credential_mode_parse_accepts_names_and_booleans() {
    assert_eq!(CredentialMode::parse("include"), Some(CredentialMode::Include));
    assert_eq!(CredentialMode::parse(" TRUE "), Some(CredentialMode::Include));
    assert_eq!(CredentialMode::parse("same-origin"), Some(CredentialMode::SameOrigin));
    assert_eq!(CredentialMode::parse("off"), Some(CredentialMode::Omit));
    assert_eq!(CredentialMode::parse("sometimes"), None);
}

#[test]
fn credential_mode_as_str_round_trips_through_parse() {
    for mode in [CredentialMode::Include, CredentialMode::SameOrigin, CredentialMode::Omit] {
        assert_eq!(CredentialMode::parse(mode.as_str()), Some(mode));
    }
}

#[test]
fn detect_without_browser_is_default() {
    assert_eq!(ClientConfig::detect(), ClientConfig::default());
}
