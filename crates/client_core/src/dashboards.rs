//! Role-keyed dashboard modules and the entry-time section load.

use std::collections::HashMap;

use shared::domain::Role;
use tracing::{debug, warn};

use crate::screens::MainContent;

/// Section every dashboard opens on entry.
pub const DEFAULT_SECTION: &str = "dashboard";

/// Rendered into `main` when no module serves the session's role.
pub const UNKNOWN_ROLE_NOTICE: &str = "Unknown role";

/// A per-role renderer.
pub trait DashboardModule: Send + Sync {
    fn load_section(&self, section: &str, main: &mut MainContent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardOutcome {
    Loaded,
    UnknownRole,
}

/// Fixed role to module mapping, built once at startup.
pub struct DashboardRegistry {
    modules: HashMap<Role, Box<dyn DashboardModule>>,
}

#[derive(Default)]
pub struct DashboardRegistryBuilder {
    modules: HashMap<Role, Box<dyn DashboardModule>>,
}

impl DashboardRegistryBuilder {
    pub fn register(mut self, role: Role, module: impl DashboardModule + 'static) -> Self {
        self.modules.insert(role, Box::new(module));
        self
    }

    pub fn build(self) -> DashboardRegistry {
        DashboardRegistry {
            modules: self.modules,
        }
    }
}

impl DashboardRegistry {
    pub fn builder() -> DashboardRegistryBuilder {
        DashboardRegistryBuilder::default()
    }

    /// Known roles that have no module.
    pub fn missing_roles(&self) -> Vec<Role> {
        Role::KNOWN
            .into_iter()
            .filter(|role| !self.modules.contains_key(role))
            .collect()
    }

    /// Clears `main`, then opens the default section of `role`'s dashboard,
    /// or renders the unknown-role notice when nothing is registered.
    pub fn load_default(&self, role: &Role, main: &mut MainContent) -> DashboardOutcome {
        main.clear();
        match self.modules.get(role) {
            Some(module) => {
                debug!(%role, section = DEFAULT_SECTION, "loading dashboard section");
                module.load_section(DEFAULT_SECTION, main);
                DashboardOutcome::Loaded
            }
            None => {
                warn!(%role, "no dashboard registered for role");
                main.push(UNKNOWN_ROLE_NOTICE);
                DashboardOutcome::UnknownRole
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/dashboards_tests.rs"]
mod tests;
