//! One-shot scroll reveal and staggered entrance timing

use crate::consts::STAGGER_STEP_MS;

/// What the host should do with an intersection report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Mark the element visible and stop observing it
    Reveal,
    /// Nothing to do
    Ignore,
}

/// Reveal flags for a fixed set of observed elements
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Feed one intersection entry. Only the first intersecting report per element
    /// yields `Reveal`; unknown indices are ignored.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> RevealAction {
        match self.revealed.get_mut(index) {
            Some(flag) if intersecting && !*flag => {
                *flag = true;
                RevealAction::Reveal
            }
            _ => RevealAction::Ignore,
        }
    }
}

/// Transition delay for the `index`th revealed element (ms)
pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

/// CSS `transition` value for the `index`th revealed element
pub fn stagger_transition(index: usize) -> String {
    let delay = stagger_delay_ms(index);
    format!(
        "opacity .8s ease {delay}ms, transform .6s cubic-bezier(.2,.9,.2,1) {delay}ms"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reveal_once() {
        let mut set = RevealSet::new(2);
        assert_eq!(set.observe(0, false), RevealAction::Ignore);
        assert_eq!(set.observe(0, true), RevealAction::Reveal);
        assert_eq!(set.observe(0, true), RevealAction::Ignore);
        assert!(set.is_revealed(0));
        assert!(!set.is_revealed(1));
    }

    #[test]
    fn test_unknown_index_ignored() {
        let mut set = RevealSet::new(1);
        assert_eq!(set.observe(5, true), RevealAction::Ignore);
        assert_eq!(set.revealed_count(), 0);
    }

    #[test]
    fn test_stagger_transition() {
        assert_eq!(
            stagger_transition(0),
            "opacity .8s ease 0ms, transform .6s cubic-bezier(.2,.9,.2,1) 0ms"
        );
        assert_eq!(stagger_delay_ms(3), 180);
    }

    proptest! {
        #[test]
        fn prop_revealed_stays_revealed(events in prop::collection::vec((0usize..6, any::<bool>()), 0..64)) {
            let mut set = RevealSet::new(6);
            let mut seen = [false; 6];
            for (index, intersecting) in events {
                let was = set.is_revealed(index);
                let action = set.observe(index, intersecting);
                prop_assert_eq!(action == RevealAction::Reveal, intersecting && !was);
                seen[index] |= intersecting;
                for i in 0..6 {
                    prop_assert_eq!(set.is_revealed(i), seen[i]);
                }
            }
        }
    }
}
