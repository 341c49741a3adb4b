//! Mobile navigation toggle

/// Expanded/collapsed state of the nav links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavToggle {
    expanded: bool,
}

impl NavToggle {
    /// Start from the button's current `aria-expanded` attribute
    pub fn from_aria(value: Option<&str>) -> Self {
        Self {
            expanded: value == Some("true"),
        }
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Flip and return the new state
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// `aria-expanded` value
    pub fn aria_value(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    /// `display` for the links container; empty defers to the stylesheet
    pub fn links_display(&self) -> &'static str {
        if self.expanded { "flex" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_aria() {
        assert!(!NavToggle::from_aria(None).expanded());
        assert!(!NavToggle::from_aria(Some("false")).expanded());
        assert!(NavToggle::from_aria(Some("true")).expanded());
    }

    #[test]
    fn test_toggle_display() {
        let mut nav = NavToggle::default();
        assert_eq!(nav.links_display(), "");
        assert!(nav.toggle());
        assert_eq!(nav.links_display(), "flex");
        assert_eq!(nav.aria_value(), "true");
    }

    proptest! {
        #[test]
        fn prop_aria_tracks_state(clicks in 0usize..50) {
            let mut nav = NavToggle::default();
            for i in 0..clicks {
                let now = nav.toggle();
                prop_assert_eq!(now, i % 2 == 0);
                prop_assert_eq!(nav.aria_value(), now.to_string());
            }
        }
    }
}
