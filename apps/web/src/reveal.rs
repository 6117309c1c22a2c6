use std::collections::BTreeMap;

/// Vertical offset, in pixels, of an element waiting to be revealed.
pub const HIDDEN_OFFSET_PX: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// Inline style applied to an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_y_px: u32,
}

impl RevealState {
    pub fn style(self) -> RevealStyle {
        match self {
            RevealState::Hidden => RevealStyle {
                opacity: 0.0,
                translate_y_px: HIDDEN_OFFSET_PX,
            },
            RevealState::Revealed => RevealStyle {
                opacity: 1.0,
                translate_y_px: 0,
            },
        }
    }
}

/// One entry of a viewport intersection report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection {
    pub target: String,
    pub is_intersecting: bool,
}

impl Intersection {
    pub fn entering(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: true,
        }
    }

    pub fn leaving(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: false,
        }
    }
}

/// One-shot scroll reveal. An element fades in the first time it enters
/// the viewport and is then unobserved for good.
#[derive(Debug, Clone, Default)]
pub struct RevealObserver {
    elements: BTreeMap<String, RevealState>,
}

impl RevealObserver {
    /// Starts watching an element. Already known elements keep their state,
    /// so a revealed element can never be hidden again.
    pub fn observe(&mut self, target: impl Into<String>) {
        self.elements
            .entry(target.into())
            .or_insert(RevealState::Hidden);
    }

    pub fn state(&self, target: &str) -> Option<RevealState> {
        self.elements.get(target).copied()
    }

    pub fn is_observing(&self, target: &str) -> bool {
        self.state(target) == Some(RevealState::Hidden)
    }

    pub fn pending(&self) -> usize {
        self.elements
            .values()
            .filter(|s| **s == RevealState::Hidden)
            .count()
    }

    /// Applies an intersection batch, returning the targets revealed by it.
    pub fn on_intersections(&mut self, entries: &[Intersection]) -> Vec<String> {
        let mut fired = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if let Some(state) = self.elements.get_mut(&entry.target) {
                if *state == RevealState::Hidden {
                    *state = RevealState::Revealed;
                    fired.push(entry.target.clone());
                }
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_elements_start_hidden() {
        let mut observer = RevealObserver::default();
        observer.observe("project-1");
        let style = observer.state("project-1").unwrap().style();
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate_y_px, HIDDEN_OFFSET_PX);
    }

    #[test]
    fn test_fires_once_per_element() {
        let mut observer = RevealObserver::default();
        observer.observe("project-1");
        observer.observe("project-2");

        let fired = observer.on_intersections(&[
            Intersection::entering("project-1"),
            Intersection::leaving("project-2"),
        ]);
        assert_eq!(fired, vec!["project-1".to_string()]);
        assert!(!observer.is_observing("project-1"));
        assert_eq!(observer.pending(), 1);

        for _ in 0..3 {
            observer.on_intersections(&[Intersection::leaving("project-1")]);
            let again = observer.on_intersections(&[Intersection::entering("project-1")]);
            assert!(again.is_empty());
        }
        assert_eq!(observer.state("project-1"), Some(RevealState::Revealed));
    }

    #[test]
    fn test_duplicate_entries_in_one_batch() {
        let mut observer = RevealObserver::default();
        observer.observe("card");
        let fired = observer.on_intersections(&[
            Intersection::entering("card"),
            Intersection::entering("card"),
        ]);
        assert_eq!(fired.len(), 1);
    }

    #[test]
    fn test_reobserve_does_not_restart() {
        let mut observer = RevealObserver::default();
        observer.observe("card");
        observer.on_intersections(&[Intersection::entering("card")]);
        observer.observe("card");
        assert_eq!(observer.state("card"), Some(RevealState::Revealed));
    }

    #[test]
    fn test_unobserved_targets_ignored() {
        let mut observer = RevealObserver::default();
        assert!(observer
            .on_intersections(&[Intersection::entering("stranger")])
            .is_empty());
        assert_eq!(observer.state("stranger"), None);
    }
}
