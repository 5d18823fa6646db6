//! Modulation strategies.
//!
//! Both strategies reduce to the same per-line description, `LineModulation`:
//! a carrier sinusoid (rest y, amplitude, phase, spatial frequency) plus a
//! per-sample local term. The sampler only ever sees that description, so it
//! is shared by both.

mod energy;
mod lens;

pub use energy::*;
pub use lens::*;

use crate::config::{FieldConfig, FieldStrategy};
use crate::line::{rest_y, LineSpec};
use crate::pointer::PointerState;
use std::f32::consts::TAU;

/// Per-frame inputs shared by the strategies.
#[derive(Clone, Copy, Debug)]
pub struct FieldFrame<'a> {
    pub pointer: &'a PointerState,
    pub width: f32,
    pub height: f32,
    /// Elapsed animation time in seconds.
    pub t: f32,
    /// Already clamped step in seconds.
    pub dt: f32,
}

impl FieldFrame<'_> {
    /// Spatial angular frequency (rad/px) giving `cycles` periods across the width.
    #[inline]
    pub fn spatial_k(&self, cycles: f32) -> f32 {
        TAU * cycles / self.width.max(1.0)
    }
}

/// Per-sample modulation around the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocalModulation {
    None,
    /// Compact quadratic bulge that follows the pointer horizontally.
    Bulge {
        pointer_x: f32,
        radius: f32,
        gain: f32,
    },
    /// Gaussian lens with an additive traveling phase ripple.
    Lens {
        pointer_x: f32,
        hover: f32,
        sigma: f32,
        strength: f32,
        ripple_amount: f32,
        ripple_freq: f32,
        ripple_offset: f32,
    },
}

impl LocalModulation {
    /// Returns `(amplitude_scale, phase_shift)` at horizontal position `x`.
    #[inline]
    pub fn at(&self, x: f32) -> (f32, f32) {
        match *self {
            LocalModulation::None => (1.0, 0.0),
            LocalModulation::Bulge {
                pointer_x,
                radius,
                gain,
            } => (1.0 + gain * bulge_falloff((x - pointer_x).abs(), radius), 0.0),
            LocalModulation::Lens {
                pointer_x,
                hover,
                sigma,
                strength,
                ripple_amount,
                ripple_freq,
                ripple_offset,
            } => {
                let d = x - pointer_x;
                let lens = hover * gaussian(d, sigma);
                let ripple = lens * ripple_amount * (d * ripple_freq + ripple_offset).sin();
                (1.0 + lens * strength, ripple)
            }
        }
    }
}

/// Everything the sampler needs for one line on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineModulation {
    pub rest_y: f32,
    pub amplitude: f32,
    pub phase: f32,
    /// Spatial angular frequency in rad/px, line multiplier included.
    pub k: f32,
    pub local: LocalModulation,
}

/// The stateful wave model, one variant per strategy.
#[derive(Clone, Debug)]
pub enum WaveField {
    CoupledEnergy(CoupledEnergyField),
    LensRipple(LensField),
}

impl WaveField {
    pub fn new(strategy: FieldStrategy, lines: &[LineSpec]) -> Self {
        match strategy {
            FieldStrategy::CoupledEnergy => WaveField::CoupledEnergy(CoupledEnergyField::new(lines)),
            FieldStrategy::LensRipple => WaveField::LensRipple(LensField),
        }
    }

    pub fn strategy(&self) -> FieldStrategy {
        match self {
            WaveField::CoupledEnergy(_) => FieldStrategy::CoupledEnergy,
            WaveField::LensRipple(_) => FieldStrategy::LensRipple,
        }
    }

    /// Integrate one step and describe every line for this frame.
    pub fn advance(
        &mut self,
        frame: &FieldFrame<'_>,
        config: &FieldConfig,
        lines: &[LineSpec],
    ) -> Vec<LineModulation> {
        match self {
            WaveField::CoupledEnergy(f) => {
                f.step(frame, config, lines);
                f.modulations(frame, config, lines)
            }
            WaveField::LensRipple(f) => f.modulations(frame, config, lines),
        }
    }

    pub fn as_coupled(&self) -> Option<&CoupledEnergyField> {
        match self {
            WaveField::CoupledEnergy(f) => Some(f),
            WaveField::LensRipple(_) => None,
        }
    }
}

/// `exp(-d² / 2σ²)`; σ is clamped away from zero.
#[inline]
pub fn gaussian(d: f32, sigma: f32) -> f32 {
    let s = sigma.max(f32::EPSILON);
    (-(d * d) / (2.0 * s * s)).exp()
}

/// `(1 - min(1, d / radius))²`, zero at and beyond `radius`.
#[inline]
pub fn bulge_falloff(d: f32, radius: f32) -> f32 {
    let m = 1.0 - (d / radius.max(f32::EPSILON)).min(1.0);
    m * m
}

/// Where line `index` actually sits: its slot in the padded band plus its
/// own vertical jitter.
#[inline]
pub fn line_y(index: usize, count: usize, height: f32, config: &FieldConfig, line: &LineSpec) -> f32 {
    rest_y(index, count, height, config.vertical_pad_fraction) + line.vertical_offset_px
}

#[inline]
pub(crate) fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
