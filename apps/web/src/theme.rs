use tracing::warn;

use crate::document::Document;
use crate::store::PreferenceStore;

/// Preference key the chosen theme is persisted under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The toggle shows the theme you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }

    pub fn from_os_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// The dark/light toggle button and the theme it controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSwitch {
    current: Theme,
}

impl ThemeSwitch {
    /// Picks the persisted theme if there is a valid one, else the OS preference.
    /// The initial choice is applied but not persisted.
    pub fn init(store: &dyn PreferenceStore, prefers_dark: bool, document: &mut Document) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|saved| Theme::parse(&saved))
            .unwrap_or_else(|| Theme::from_os_preference(prefers_dark));
        document.theme = Some(current);
        Self { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn icon_class(&self) -> &'static str {
        self.current.icon_class()
    }

    pub fn toggle(&mut self, store: &mut dyn PreferenceStore, document: &mut Document) -> Theme {
        self.set(self.current.flipped(), store, document);
        self.current
    }

    /// Follows a change of the OS color-scheme preference.
    pub fn os_preference_changed(
        &mut self,
        prefers_dark: bool,
        store: &mut dyn PreferenceStore,
        document: &mut Document,
    ) {
        self.set(Theme::from_os_preference(prefers_dark), store, document);
    }

    fn set(&mut self, theme: Theme, store: &mut dyn PreferenceStore, document: &mut Document) {
        self.current = theme;
        document.theme = Some(theme);
        // A failed write only costs the preference on next load.
        if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
            warn!("Could not persist theme preference: {e}");
        }
    }
}
