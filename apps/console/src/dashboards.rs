//! Text renderings of the per-role dashboards.

use client_core::{DashboardModule, DashboardRegistry, MainContent};
use shared::domain::Role;

struct RoleDashboard {
    title: &'static str,
    sections: &'static [(&'static str, &'static [&'static str])],
}

impl DashboardModule for RoleDashboard {
    fn load_section(&self, section: &str, main: &mut MainContent) {
        main.push(format!("== {} :: {section} ==", self.title));
        match self.sections.iter().find(|(name, _)| *name == section) {
            Some((_, lines)) => {
                for line in *lines {
                    main.push(format!("  - {line}"));
                }
            }
            None => main.push(format!("  section '{section}' is not available")),
        }
    }
}

const CITIZEN: RoleDashboard = RoleDashboard {
    title: "Citizen Dashboard",
    sections: &[
        (
            "dashboard",
            &["My complaints", "Next collection in your ward", "Green points balance"],
        ),
        ("complaints", &["File a complaint", "Track filed complaints"]),
    ],
};

const WORKER: RoleDashboard = RoleDashboard {
    title: "Worker Dashboard",
    sections: &[
        ("dashboard", &["Assigned pickups today", "Route overview", "Attendance"]),
        ("tasks", &["Open tasks", "Completed tasks"]),
    ],
};

const GREEN_CHAMPION: RoleDashboard = RoleDashboard {
    title: "Green Champion Dashboard",
    sections: &[
        ("dashboard", &["Zone compliance", "Pending verifications", "Community drives"]),
        ("zones", &["Zone map", "Flagged hotspots"]),
    ],
};

const ADMIN: RoleDashboard = RoleDashboard {
    title: "Admin Dashboard",
    sections: &[
        ("dashboard", &["Open complaints", "Fleet status", "Worker utilisation"]),
        ("reports", &["Weekly collection report", "Complaint resolution times"]),
    ],
};

const SUPERADMIN: RoleDashboard = RoleDashboard {
    title: "Superadmin Dashboard",
    sections: &[
        ("dashboard", &["City-wide overview", "Admin activity", "System health"]),
        ("settings", &["Role assignments", "Service areas"]),
    ],
};

pub fn registry() -> DashboardRegistry {
    DashboardRegistry::builder()
        .register(Role::Citizen, CITIZEN)
        .register(Role::Worker, WORKER)
        .register(Role::GreenChampion, GREEN_CHAMPION)
        .register(Role::Admin, ADMIN)
        .register(Role::Superadmin, SUPERADMIN)
        .build()
}

#[cfg(test)]
#[path = "tests/dashboards_tests.rs"]
mod tests;
