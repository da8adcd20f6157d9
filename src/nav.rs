/// Sections reachable from the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Workouts,
    Progress,
    Bmi,
}

pub const ALL_SECTIONS: [Section; 4] = [
    Section::Home,
    Section::Workouts,
    Section::Progress,
    Section::Bmi,
];

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Workouts => "Workouts",
            Section::Progress => "Progress",
            Section::Bmi => "BMI Calculator",
        }
    }
}

/// Collapsible navigation menu. Starts closed on every launch.
#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
    /// Section the main panel should scroll to on the next frame.
    pub scroll_target: Option<Section>,
}

impl NavMenu {
    pub const MENU_ICON: &'static str = "\u{2630}";
    pub const CLOSE_ICON: &'static str = "\u{2715}";

    pub fn toggle(&mut self) {
        self.open = !self.open;
        log::debug!("Navigation menu open: {}", self.open);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> &'static str {
        if self.open {
            Self::CLOSE_ICON
        } else {
            Self::MENU_ICON
        }
    }

    pub fn navigate(&mut self, section: Section) {
        self.scroll_target = Some(section);
    }

    /// Consume the pending scroll request if it targets `section`.
    pub fn take_scroll(&mut self, section: Section) -> bool {
        if self.scroll_target == Some(section) {
            self.scroll_target = None;
            true
        } else {
            false
        }
    }
}
