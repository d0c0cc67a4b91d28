//! Mutually exclusive visibility of the top-level screens.

use shared::domain::ScreenName;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Only the login screen is shown.
    Unauthenticated,
    /// Header, sidebar and main are shown together.
    Authenticated,
}

impl Layout {
    pub fn screens(self) -> &'static [ScreenName] {
        match self {
            Layout::Unauthenticated => &[ScreenName::Login],
            Layout::Authenticated => &[ScreenName::NavHeader, ScreenName::Sidebar, ScreenName::Main],
        }
    }
}

/// Content currently rendered into the `main` region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainContent {
    blocks: Vec<String>,
}

impl MainContent {
    pub fn push(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn render(&self) -> String {
        self.blocks.join("\n")
    }
}

/// Two-state screen machine. The layout is a single value, so a transition
/// is one assignment and no mixed visibility can be observed.
#[derive(Debug, Clone)]
pub struct ScreenController {
    layout: Layout,
    main: MainContent,
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenController {
    pub fn new() -> Self {
        Self {
            layout: Layout::Unauthenticated,
            main: MainContent::default(),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_visible(&self, screen: ScreenName) -> bool {
        self.layout.screens().contains(&screen)
    }

    pub fn visible_screens(&self) -> Vec<ScreenName> {
        self.layout.screens().to_vec()
    }

    pub fn enter_authenticated(&mut self) {
        if self.layout != Layout::Authenticated {
            debug!("showing authenticated layout");
            self.layout = Layout::Authenticated;
        }
    }

    /// Shows the login screen and drops whatever `main` held, so nothing
    /// rendered for one session is left behind for the next.
    pub fn enter_unauthenticated(&mut self) {
        if self.layout != Layout::Unauthenticated {
            debug!("showing login layout");
            self.layout = Layout::Unauthenticated;
        }
        self.main.clear();
    }

    pub fn main_content(&self) -> &MainContent {
        &self.main
    }

    pub fn main_content_mut(&mut self) -> &mut MainContent {
        &mut self.main
    }

    pub fn clear_main(&mut self) {
        self.main.clear();
    }
}

#[cfg(test)]
#[path = "tests/screens_tests.rs"]
mod tests;
