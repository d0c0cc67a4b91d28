use std::{fs, path::Path};

use serde::Deserialize;
use storage::{CURRENT_USER_KEY, DEFAULT_DATABASE_URL};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub email: String,
    pub password: String,
    pub role: String,
}

impl Account {
    fn demo(email: &str, role: &str) -> Self {
        Self {
            email: email.into(),
            password: "demo123".into(),
            role: role.into(),
        }
    }
}

#[derive(Debug)]
pub struct Settings {
    pub database_url: String,
    pub session_key: String,
    pub accounts: Vec<Account>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            session_key: CURRENT_USER_KEY.into(),
            accounts: vec![
                Account::demo("citizen@demo.local", "citizen"),
                Account::demo("worker@demo.local", "worker"),
                Account::demo("champion@demo.local", "green-champion"),
                Account::demo("admin@demo.local", "admin"),
                Account::demo("superadmin@demo.local", "superadmin"),
            ],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    database_url: Option<String>,
    session_key: Option<String>,
    #[serde(default)]
    accounts: Vec<Account>,
}

pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => apply_file_settings(&mut settings, file_cfg),
            Err(err) => warn!(path = %path.display(), error = %err, "ignoring unreadable config file"),
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.database_url {
        settings.database_url = v;
    }
    if let Some(v) = file_cfg.session_key {
        settings.session_key = v;
    }
    if !file_cfg.accounts.is_empty() {
        settings.accounts = file_cfg.accounts;
    }
}

fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = var("APP__DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = var("APP__SESSION_KEY") {
        if !v.trim().is_empty() {
            settings.session_key = v;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
