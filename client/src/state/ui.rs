//! Local UI chrome state (sidebar, page tabs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of catalog data so rendering
//! controls can evolve independently. Every tab selector is a closed enum, so
//! the active tab is always one of its listed values.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Layout chrome shared across routes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile sidebar drawer visibility. The desktop sidebar is always shown.
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

/// Tabs on the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Overview,
    Activity,
    Achievements,
    Settings,
}

impl ProfileTab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Activity, Self::Achievements, Self::Settings];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Activity => "Activity",
            Self::Achievements => "Achievements",
            Self::Settings => "Settings",
        }
    }
}

/// Tabs on the admin page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Problems,
    Solutions,
    Settings,
}

impl AdminTab {
    pub const ALL: [Self; 5] = [Self::Overview, Self::Users, Self::Problems, Self::Solutions, Self::Settings];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Users => "Users",
            Self::Problems => "Problems",
            Self::Solutions => "Solutions",
            Self::Settings => "Settings",
        }
    }
}
