use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    assert_eq!(cfg.base, "/");
    assert_eq!(cfg.index_html(), PathBuf::from("client/dist/index.html"));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", " 8080 "),
        ("STATIC_DIR", "/srv/gradpath"),
        ("APP_BASE", "gradpath/"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/gradpath"));
    assert_eq!(cfg.base, "/gradpath");
    assert_eq!(cfg.router_config().base(), "/gradpath");
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".into()));
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn from_lookup_rejects_empty_static_dir() {
    let err = ServerConfig::from_lookup(lookup_from(&[("STATIC_DIR", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyStaticDir);
}
