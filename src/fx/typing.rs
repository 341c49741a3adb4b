//! Typewriter animation
//!
//! Types a word one character per tick, holds it, deletes it faster than it was
//! typed, then moves on to the next word. Loops forever.

use crate::consts::*;

/// Which way the cursor is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Delays between ticks (ms)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypingTiming {
    pub typing_ms: u32,
    pub pause_ms: u32,
    pub word_gap_ms: u32,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            typing_ms: TYPING_DELAY_MS,
            pause_ms: TYPING_PAUSE_MS,
            word_gap_ms: TYPING_WORD_GAP_MS,
        }
    }
}

/// Result of one tick: what to show and when to tick again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingState {
    words: Vec<Vec<char>>,
    word_index: usize,
    char_index: isize,
    direction: Direction,
    timing: TypingTiming,
}

impl TypingState {
    /// Empty word lists are replaced by the default words
    pub fn new<S: AsRef<str>>(words: &[S], timing: TypingTiming) -> Self {
        let mut words: Vec<Vec<char>> = words.iter().map(|w| w.as_ref().chars().collect()).collect();
        if words.is_empty() {
            words = TYPED_WORDS.iter().map(|w| w.chars().collect()).collect();
        }
        Self {
            words,
            word_index: 0,
            char_index: 0,
            direction: Direction::Forward,
            timing,
        }
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Advance one character
    pub fn tick(&mut self) -> TypingFrame {
        let step = match self.direction {
            Direction::Forward => 1,
            Direction::Backward => -1,
        };
        self.char_index += step;

        let word = &self.words[self.word_index];
        let shown = self.char_index.max(0) as usize;
        let text: String = word.iter().take(shown).collect();

        let next_delay_ms = match self.direction {
            Direction::Forward if self.char_index >= word.len() as isize => {
                self.direction = Direction::Backward;
                self.timing.pause_ms
            }
            Direction::Backward if self.char_index <= 0 => {
                self.direction = Direction::Forward;
                self.word_index = (self.word_index + 1) % self.words.len();
                self.timing.word_gap_ms
            }
            Direction::Forward => self.timing.typing_ms,
            Direction::Backward => {
                (self.timing.typing_ms as f32 * TYPING_BACKWARD_FACTOR).round() as u32
            }
        };

        TypingFrame {
            text,
            next_delay_ms,
        }
    }
}

impl Default for TypingState {
    fn default() -> Self {
        Self::new(&TYPED_WORDS, TypingTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_word_cycle() {
        let mut typing = TypingState::new(&["abc"], TypingTiming::default());
        let frames: Vec<_> = (0..6).map(|_| typing.tick()).collect();
        let texts: Vec<_> = frames.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["a", "ab", "abc", "ab", "a", ""]);
        assert_eq!(frames[0].next_delay_ms, 80);
        assert_eq!(frames[2].next_delay_ms, 900);
        assert_eq!(frames[3].next_delay_ms, 48);
        assert_eq!(frames[5].next_delay_ms, 240);
        assert_eq!(typing.direction(), Direction::Forward);
    }

    #[test]
    fn test_word_sequence_wraps() {
        let mut typing = TypingState::default();
        let mut finished = Vec::new();
        for _ in 0..200 {
            let before = typing.word_index();
            typing.tick();
            if typing.word_index() != before {
                finished.push(before);
            }
        }
        assert!(finished.len() >= 4);
        for (i, w) in finished.iter().enumerate() {
            assert_eq!(*w, i % 3);
        }
    }

    #[test]
    fn test_multibyte_characters() {
        let mut typing = TypingState::new(&["héé"], TypingTiming::default());
        assert_eq!(typing.tick().text, "h");
        assert_eq!(typing.tick().text, "hé");
        assert_eq!(typing.tick().text, "héé");
    }

    #[test]
    fn test_empty_list_uses_defaults() {
        let empty: [&str; 0] = [];
        let typing = TypingState::new(&empty, TypingTiming::default());
        assert_eq!(typing.word_count(), TYPED_WORDS.len());
    }

    proptest! {
        #[test]
        fn prop_grows_then_shrinks(words in prop::collection::vec("[a-z.]{1,12}", 1..5)) {
            let mut typing = TypingState::new(&words, TypingTiming::default());
            for round in 0..(words.len() * 2) {
                let word = &words[round % words.len()];
                let n = word.chars().count();
                prop_assert_eq!(typing.word_index(), round % words.len());
                let mut last = 0usize;
                for _ in 0..n {
                    let len = typing.tick().text.chars().count();
                    prop_assert_eq!(len, last + 1);
                    last = len;
                }
                prop_assert_eq!(last, n);
                for _ in 0..n {
                    let text = typing.tick().text;
                    let len = text.chars().count();
                    prop_assert_eq!(len + 1, last);
                    prop_assert!(word.starts_with(&text));
                    last = len;
                }
                prop_assert_eq!(last, 0);
            }
        }
    }
}
