use crate::storage::{Storage, THEME_KEY};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

/// Owns the live theme marker and the toggle icon.
///
/// The marker is what the window renders with. Toggling always reads the
/// marker, never storage.
#[derive(Debug)]
pub struct ThemeController {
    current: ThemePreference,
    icon: &'static str,
}

impl ThemeController {
    /// Moon glyph, shown while the light theme is active.
    pub const MOON: &'static str = "\u{1F319}";
    /// Sun glyph, shown while the dark theme is active.
    pub const SUN: &'static str = "\u{2600}";

    /// Read the persisted preference and apply it.
    pub fn init(storage: &mut dyn Storage) -> Self {
        let saved = ThemePreference::from_stored(storage.get_item(THEME_KEY).as_deref());
        let mut controller = Self {
            current: ThemePreference::Light,
            icon: Self::MOON,
        };
        controller.set_theme(saved.is_dark(), storage);
        controller
    }

    /// Set the marker, swap the icon and persist the choice.
    pub fn set_theme(&mut self, is_dark: bool, storage: &mut dyn Storage) {
        self.current = if is_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        };
        self.icon = if is_dark { Self::SUN } else { Self::MOON };
        if let Err(e) = storage.set_item(THEME_KEY, self.current.as_str()) {
            log::error!("Failed to persist theme: {e}");
        }
    }

    pub fn toggle(&mut self, storage: &mut dyn Storage) {
        let is_dark = self.current.is_dark();
        log::info!("Switching theme from {}", self.current.as_str());
        self.set_theme(!is_dark, storage);
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self.current {
            ThemePreference::Light => egui::Visuals::light(),
            ThemePreference::Dark => egui::Visuals::dark(),
        }
    }

    /// Push the marker into the egui context when it differs from what the
    /// context currently renders with.
    pub fn apply(&self, ctx: &egui::Context) {
        if ctx.style().visuals.dark_mode != self.current.is_dark() {
            ctx.set_visuals(self.visuals());
        }
    }
}
