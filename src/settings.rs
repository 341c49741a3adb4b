//! Effect settings
//!
//! Read once at startup from an optional JSON block in the page:
//! `<script id="fx-config" type="application/json">{ ... }</script>`

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::fx::TypingTiming;

/// Page effect settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Typing ===
    /// Words cycled by the typing animation
    pub words: Vec<String>,
    /// Per-character delay (ms)
    pub typing_delay_ms: u32,
    /// Hold once a word is complete (ms)
    pub pause_delay_ms: u32,
    /// Gap before the next word (ms)
    pub word_gap_ms: u32,

    // === Background ===
    /// Number of blobs on the canvas
    pub blob_count: usize,
    /// Blob colors, cycled by index
    pub palette: Vec<[u8; 3]>,

    // === Effects ===
    pub tilt: bool,
    pub parallax: bool,
    pub ripples: bool,
    pub glow: bool,
    pub logo_motion: bool,

    // === Accessibility ===
    /// Reduced motion (disables tilt, parallax and logo sway)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words: TYPED_WORDS.iter().map(|w| w.to_string()).collect(),
            typing_delay_ms: TYPING_DELAY_MS,
            pause_delay_ms: TYPING_PAUSE_MS,
            word_gap_ms: TYPING_WORD_GAP_MS,

            blob_count: BLOB_COUNT,
            palette: BLOB_PALETTE.to_vec(),

            // All on by default
            tilt: true,
            parallax: true,
            ripples: true,
            glow: true,
            logo_motion: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Element holding the JSON overrides
    pub const CONFIG_ELEMENT_ID: &'static str = "fx-config";

    /// Parse overrides; anything unparsable falls back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid effect settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn typing_timing(&self) -> TypingTiming {
        TypingTiming {
            typing_ms: self.typing_delay_ms,
            pause_ms: self.pause_delay_ms,
            word_gap_ms: self.word_gap_ms,
        }
    }

    /// Effective tilt (respects reduced_motion)
    pub fn effective_tilt(&self) -> bool {
        self.tilt && !self.reduced_motion
    }

    /// Effective parallax (respects reduced_motion)
    pub fn effective_parallax(&self) -> bool {
        self.parallax && !self.reduced_motion
    }

    /// Effective logo sway (respects reduced_motion)
    pub fn effective_logo_motion(&self) -> bool {
        self.logo_motion && !self.reduced_motion
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());

        let mut settings = match document
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        {
            Some(json) => {
                log::info!("Loaded effect settings from #{}", Self::CONFIG_ELEMENT_ID);
                Self::from_json(&json)
            }
            None => {
                log::info!("Using default effect settings");
                Self::default()
            }
        };

        let prefers_reduced = window
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false);
        if prefers_reduced {
            log::info!("Reduced motion requested by the system");
            settings.reduced_motion = true;
        }

        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let s = Settings::default();
        assert_eq!(s.words, ["accelerate.", "automate.", "augment."]);
        assert_eq!(s.blob_count, 8);
        assert_eq!(s.typing_timing(), TypingTiming::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "words": ["ship."], "blob_count": 4 }"#);
        assert_eq!(s.words, ["ship."]);
        assert_eq!(s.blob_count, 4);
        assert_eq!(s.typing_delay_ms, TYPING_DELAY_MS);
        assert!(s.glow);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(Settings::from_json("{ nope"), Settings::default());
    }

    #[test]
    fn test_reduced_motion_gates_effects() {
        let s = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!s.effective_tilt());
        assert!(!s.effective_parallax());
        assert!(!s.effective_logo_motion());
        assert!(s.ripples);
    }
}
