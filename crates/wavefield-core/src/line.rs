use crate::config::ConfigError;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Static per-line constants, fixed for the lifetime of an engine.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSpec {
    pub phase_offset: f32,
    pub alpha: f32,
    pub vertical_offset_px: f32,
    pub amp_multiplier: f32,
    pub speed_multiplier: f32,
    /// Scales the shared spatial frequency so neighbouring lines drift apart.
    pub freq_multiplier: f32,
}

impl Default for LineSpec {
    fn default() -> Self {
        Self {
            phase_offset: 0.0,
            alpha: 1.0,
            vertical_offset_px: 0.0,
            amp_multiplier: 1.0,
            speed_multiplier: 1.0,
            freq_multiplier: 1.0,
        }
    }
}

impl LineSpec {
    /// Build `count` lines with seeded jitter. The same seed always yields the
    /// same set; each line draws from its own RNG so adding a line does not
    /// reshuffle the others.
    pub fn generate(count: usize, seed: u64) -> Vec<LineSpec> {
        (0..count)
            .map(|i| {
                let mix = seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                let mut rng = StdRng::seed_from_u64(mix);
                LineSpec {
                    phase_offset: rng.gen::<f32>() * TAU + i as f32 * 0.9,
                    alpha: 0.7 + rng.gen::<f32>() * 0.3,
                    vertical_offset_px: rng.gen_range(-2.0..=2.0),
                    amp_multiplier: 0.9 + rng.gen::<f32>() * 0.2,
                    speed_multiplier: 0.85 + rng.gen::<f32>() * 0.3,
                    freq_multiplier: 0.85 + rng.gen::<f32>() * 0.45,
                }
            })
            .collect()
    }

    /// Every field feeds straight into sample positions, so each must be
    /// finite; `alpha` must also be a valid opacity.
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        for (name, value) in [
            ("phase_offset", self.phase_offset),
            ("vertical_offset_px", self.vertical_offset_px),
            ("amp_multiplier", self.amp_multiplier),
            ("speed_multiplier", self.speed_multiplier),
            ("freq_multiplier", self.freq_multiplier),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::LineNotFinite { index, name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::LineAlpha {
                index,
                value: self.alpha,
            });
        }
        Ok(())
    }
}

/// Resting y of line `index` out of `count`, spread evenly between the top
/// and bottom padding. A single line sits on the top padding edge.
#[inline]
pub fn rest_y(index: usize, count: usize, height: f32, pad_fraction: f32) -> f32 {
    let top = height * pad_fraction;
    let gaps = count.saturating_sub(1).max(1) as f32;
    let gap = (height - top * 2.0) / gaps;
    top + gap * index as f32
}
