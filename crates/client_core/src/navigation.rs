//! Sidebar menu built for the signed-in role.

use shared::domain::Role;

use crate::roles::has_permission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section: &'static str,
    pub label: &'static str,
    pub required_role: Role,
}

const fn item(section: &'static str, label: &'static str, required_role: Role) -> NavItem {
    NavItem {
        section,
        label,
        required_role,
    }
}

pub static MENU: [NavItem; 11] = [
    item("dashboard", "Dashboard", Role::Citizen),
    item("complaints", "Complaints", Role::Citizen),
    item("tracking", "Vehicle Tracking", Role::Citizen),
    item("training", "Training", Role::Citizen),
    item("shop", "Eco Shop", Role::Citizen),
    item("tasks", "My Tasks", Role::Worker),
    item("zones", "Zone Monitoring", Role::GreenChampion),
    item("workers", "Workers", Role::Admin),
    item("reports", "Reports", Role::Admin),
    item("admins", "Admin Accounts", Role::Superadmin),
    item("settings", "System Settings", Role::Superadmin),
];

/// Entries of [`MENU`] that `role` may open, in menu order.
pub fn menu_for(role: &Role) -> Vec<NavItem> {
    MENU.iter()
        .filter(|entry| has_permission(role, &entry.required_role))
        .cloned()
        .collect()
}

/// Receives the sidebar entries after each dashboard mount.
pub trait Navigator: Send + Sync {
    fn init(&self, role: &Role, items: &[NavItem]);
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
