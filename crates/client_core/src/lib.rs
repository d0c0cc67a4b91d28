//! Session and role-gated navigation engine for the waste-management
//! dashboard.
//!
//! [`SessionOrchestrator`] owns the current session and drives the
//! [`ScreenController`] and [`DashboardRegistry`] from login, logout, and
//! startup events. Authorization checks go through [`roles::has_permission`].

pub mod dashboards;
pub mod navigation;
pub mod orchestrator;
pub mod roles;
pub mod screens;

pub use dashboards::{
    DashboardModule, DashboardOutcome, DashboardRegistry, DEFAULT_SECTION, UNKNOWN_ROLE_NOTICE,
};
pub use navigation::{menu_for, NavItem, Navigator, MENU};
pub use orchestrator::{
    AuthSystem, LoginOutcome, NavPhase, NotificationSink, SessionOrchestrator,
    SessionOrchestratorBuilder, INVALID_CREDENTIALS,
};
pub use roles::{has_permission, rank_of};
pub use screens::{Layout, MainContent, ScreenController};
