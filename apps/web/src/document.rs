use std::collections::BTreeMap;

use crate::theme::Theme;

/// Result of the most recent backend health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Content slots in the page template: the API-backed sections and the
/// project modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slot {
    About,
    Projects,
    Modal,
}

impl Slot {
    pub fn name(self) -> &'static str {
        match self {
            Slot::About => "about",
            Slot::Projects => "projects",
            Slot::Modal => "modal",
        }
    }
}

/// Page-wide nodes shared by several behaviors: the root theme attribute,
/// the body scroll lock, the API-backed slots and the connectivity banner.
/// An empty slot means the static markup stays on display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub theme: Option<Theme>,
    pub body_scroll_locked: bool,
    pub connectivity: Connectivity,
    slots: BTreeMap<Slot, String>,
}

impl Document {
    pub fn fill(&mut self, slot: Slot, html: String) {
        self.slots.insert(slot, html);
    }

    pub fn slot(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }
}
