use std::fmt;

use serde::{Deserialize, Serialize};

/// Privilege tier of a signed-in user.
///
/// Any name outside the known set is kept verbatim in [`Role::Unrecognized`]
/// so that a stored or requested role round-trips without loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Citizen,
    Worker,
    GreenChampion,
    Admin,
    Superadmin,
    Unrecognized(String),
}

impl Role {
    pub const KNOWN: [Role; 5] = [
        Role::Citizen,
        Role::Worker,
        Role::GreenChampion,
        Role::Admin,
        Role::Superadmin,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "citizen" => Role::Citizen,
            "worker" => Role::Worker,
            "green-champion" => Role::GreenChampion,
            "admin" => Role::Admin,
            "superadmin" => Role::Superadmin,
            other => Role::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Citizen => "citizen",
            Role::Worker => "worker",
            Role::GreenChampion => "green-champion",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
            Role::Unrecognized(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Unrecognized(_))
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::parse(value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        match value {
            Role::Unrecognized(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in identity. Persisted as `{"email": .., "role": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: Role,
}

impl Session {
    pub fn new(email: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Top-level UI regions whose visibility the navigation engine owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScreenName {
    Login,
    NavHeader,
    Sidebar,
    Main,
}

impl ScreenName {
    pub const ALL: [ScreenName; 4] = [
        ScreenName::Login,
        ScreenName::NavHeader,
        ScreenName::Sidebar,
        ScreenName::Main,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenName::Login => "login",
            ScreenName::NavHeader => "navHeader",
            ScreenName::Sidebar => "sidebar",
            ScreenName::Main => "main",
        }
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Error,
    Warning,
    Info,
    Success,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationLevel::Error => "error",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
