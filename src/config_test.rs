use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_port_and_host_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("HOST", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".to_owned() });
}

#[test]
fn rejects_zero_and_out_of_range_ports() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "0")])).is_err());
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn rejects_hostname_instead_of_ip() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost { value: "localhost".to_owned() });
}
