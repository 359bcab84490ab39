use super::*;

#[test]
fn resolve_prefers_flag() {
    let config = ServerConfig::resolve(Some("http://example.com:9000".to_string()));
    assert_eq!(config.base_url, "http://example.com:9000");
}

#[test]
fn resolve_defaults_to_localhost() {
    std::env::remove_var("REVU_SERVER");
    let config = ServerConfig::resolve(None);
    assert_eq!(config.base_url, DEFAULT_SERVER);
}

#[test]
fn resolve_strips_trailing_slash() {
    let config = ServerConfig::resolve(Some("http://example.com/".to_string()));
    assert_eq!(config.base_url, "http://example.com");
}

#[test]
fn default_has_timeout_and_user_agent() {
    let config = ServerConfig::default();
    assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    assert_eq!(config.user_agent, "revu-cli");
}
