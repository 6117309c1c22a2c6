use std::time::Duration;

use crate::timing::Throttle;

/// A section counts as current from this far above its top edge.
pub const ACTIVE_OFFSET_PX: f64 = 100.0;
/// Scroll depth after which the navbar is drawn elevated.
pub const ELEVATED_AFTER_PX: f64 = 50.0;
const ELEVATION_THROTTLE: Duration = Duration::from_millis(100);

/// A page section with a nav link pointing at it.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let band_top = self.top - ACTIVE_OFFSET_PX;
        scroll_y > band_top && scroll_y <= band_top + self.height
    }
}

/// Navbar state: the active link, the mobile menu and the elevation shadow.
#[derive(Debug, Clone)]
pub struct Navigation {
    sections: Vec<Section>,
    navbar_height: f64,
    active: Option<String>,
    menu_open: bool,
    elevated: bool,
    elevation: Throttle,
}

impl Navigation {
    pub fn new(sections: Vec<Section>, navbar_height: f64) -> Self {
        Self {
            sections,
            navbar_height,
            active: None,
            menu_open: false,
            elevated: false,
            elevation: Throttle::new(ELEVATION_THROTTLE),
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// Recomputes the active link for a scroll position. When no section's
    /// band covers `scroll_y` the previous link stays active.
    /// Returns true if the active link changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if self.elevation.try_run() {
            self.elevated = scroll_y > ELEVATED_AFTER_PX;
        }

        // Later sections win where bands touch.
        let Some(current) = self.sections.iter().rev().find(|s| s.contains(scroll_y)) else {
            return false;
        };
        if self.active.as_deref() == Some(current.id.as_str()) {
            return false;
        }
        self.active = Some(current.id.clone());
        true
    }

    /// Flips the mobile menu; the new value mirrors `aria-expanded`.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Handles a nav link click. Returns the scroll target for a known
    /// section, leaving the navbar untouched for an unknown one.
    pub fn click(&mut self, section_id: &str) -> Option<f64> {
        let section = self.sections.iter().find(|s| s.id == section_id)?;
        let target = (section.top - self.navbar_height).max(0.0);
        self.menu_open = false;
        self.active = Some(section.id.clone());
        Some(target)
    }
}
