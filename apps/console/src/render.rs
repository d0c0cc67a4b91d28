//! Terminal output for notifications, the sidebar, and the screen layout.

use std::{fmt::Write as _, sync::Mutex};

use client_core::{Layout, NavItem, Navigator, NotificationSink, ScreenController};
use shared::domain::{NotificationLevel, Role, Session};
use tracing::{debug, error, info, warn};

pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn show(&self, message: &str, level: NotificationLevel) {
        match level {
            NotificationLevel::Error => error!(message, "notification"),
            NotificationLevel::Warning => warn!(message, "notification"),
            NotificationLevel::Info | NotificationLevel::Success => info!(message, "notification"),
        }
        eprintln!("[{level}] {message}");
    }
}

/// Keeps the most recent sidebar so it can be drawn with the layout.
#[derive(Default)]
pub struct ConsoleNavigator {
    items: Mutex<Vec<NavItem>>,
}

impl ConsoleNavigator {
    pub fn items(&self) -> Vec<NavItem> {
        self.items
            .lock()
            .map(|items| items.clone())
            .unwrap_or_default()
    }
}

impl Navigator for ConsoleNavigator {
    fn init(&self, role: &Role, items: &[NavItem]) {
        debug!(%role, entries = items.len(), "sidebar initialised");
        if let Ok(mut current) = self.items.lock() {
            *current = items.to_vec();
        }
    }
}

pub fn render_layout(
    screens: &ScreenController,
    session: Option<&Session>,
    sidebar: &[NavItem],
) -> String {
    let mut out = String::new();
    match screens.layout() {
        Layout::Unauthenticated => {
            out.push_str("[login]\n");
            out.push_str("  Sign in with --email, --password and --role\n");
        }
        Layout::Authenticated => {
            match session {
                Some(session) => {
                    let _ = writeln!(out, "[navHeader] {} ({})", session.email, session.role);
                }
                None => out.push_str("[navHeader]\n"),
            }
            out.push_str("[sidebar]\n");
            for item in sidebar {
                let _ = writeln!(out, "  * {:<12} {}", item.section, item.label);
            }
            out.push_str("[main]\n");
            for block in screens.main_content().blocks() {
                let _ = writeln!(out, "  {block}");
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
