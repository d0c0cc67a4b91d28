use std::collections::HashMap;

use super::*;

#[test]
fn defaults_cover_every_role() {
    let settings = Settings::default();
    assert_eq!(settings.session_key, "currentUser");
    let roles: Vec<&str> = settings.accounts.iter().map(|a| a.role.as_str()).collect();
    assert_eq!(
        roles,
        vec!["citizen", "worker", "green-champion", "admin", "superadmin"]
    );
}

#[test]
fn reads_file_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dashboard.toml");
    fs::write(
        &path,
        r#"
database_url = "sqlite://./state/dash.db"
session_key = "dashUser"

[[accounts]]
email = "ops@city.gov"
password = "s3cret"
role = "admin"
"#,
    )
    .expect("write config");

    let settings = load_settings(&path);

    assert_eq!(settings.session_key, "dashUser");
    assert_eq!(
        settings.accounts,
        vec![Account {
            email: "ops@city.gov".into(),
            password: "s3cret".into(),
            role: "admin".into(),
        }]
    );
}

#[test]
fn file_values_replace_defaults() {
    let mut settings = Settings::default();
    let file_cfg: FileSettings =
        toml::from_str(r#"database_url = "sqlite://./state/dash.db""#).expect("parse");

    apply_file_settings(&mut settings, file_cfg);

    assert_eq!(settings.database_url, "sqlite://./state/dash.db");
    assert_eq!(settings.session_key, "currentUser");
    assert_eq!(settings.accounts.len(), 5);
}

#[test]
fn malformed_file_keeps_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dashboard.toml");
    fs::write(&path, "database_url = [").expect("write config");

    let settings = load_settings(&path);

    assert_eq!(settings.accounts, Settings::default().accounts);
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("DATABASE_URL", "sqlite://plain.db"),
        ("APP__DATABASE_URL", "sqlite://prefixed.db"),
        ("APP__SESSION_KEY", "kioskUser"),
    ]);
    let mut settings = Settings::default();

    apply_env_overrides(&mut settings, |name| vars.get(name).map(|v| v.to_string()));

    assert_eq!(settings.database_url, "sqlite://prefixed.db");
    assert_eq!(settings.session_key, "kioskUser");
}

#[test]
fn blank_session_key_override_is_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |name| {
        (name == "APP__SESSION_KEY").then(|| "  ".to_string())
    });
    assert_eq!(settings.session_key, "currentUser");
}
