//! Timer-driven decorations: logo sway and headline glow

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Logo transform at wall-clock time `now_ms`
pub fn logo_transform(now_ms: f64) -> String {
    let angle = (now_ms / 2000.0).sin() * 6.0;
    let scale = 1.0 + (now_ms / 3000.0).sin() * 0.008;
    format!("rotate({}deg) scale({})", angle, scale)
}

/// Headline glow schedule. The period is drawn once and then fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlowPulse {
    pub period_ms: u32,
    pub hold_ms: u32,
}

impl GlowPulse {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            period_ms: GLOW_BASE_MS + rng.random_range(0..GLOW_JITTER_MS),
            hold_ms: GLOW_HOLD_MS,
        }
    }
}

/// Class toggled by the glow pulse
pub const GLOW_CLASS: &str = "glow";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_at_epoch() {
        assert_eq!(logo_transform(0.0), "rotate(0deg) scale(1)");
    }

    #[test]
    fn test_logo_bounds() {
        for t in (0..100_000).step_by(777) {
            let s = logo_transform(t as f64);
            assert!(s.starts_with("rotate("));
            let angle = (t as f64 / 2000.0).sin() * 6.0;
            assert!(angle.abs() <= 6.0);
        }
    }

    #[test]
    fn test_glow_period_range() {
        for seed in 0..50 {
            let glow = GlowPulse::new(seed);
            assert!(glow.period_ms >= 4200 && glow.period_ms < 6400);
            assert_eq!(glow.hold_ms, 900);
        }
    }
}
