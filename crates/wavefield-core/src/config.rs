//! Tunable field configuration.
//!
//! A `FieldConfig` is read once at engine construction and never mutated
//! afterwards. It deserializes with every field optional so a frontend can
//! override a handful of values and inherit the rest from `Default`.

use crate::constants::*;
use serde::Deserialize;
use thiserror::Error;

/// Which modulation model drives the lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldStrategy {
    /// Per-line damped springs pulled toward pointer proximity, blended with neighbors.
    #[default]
    CoupledEnergy,
    /// Stateless Gaussian lens around the pointer x with a traveling phase ripple.
    LensRipple,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub strategy: FieldStrategy,
    pub line_count: usize,
    pub line_seed: u64,
    pub vertical_pad_fraction: f32,

    pub base_amp: f32,
    /// Cycles across the surface width; the spatial frequency follows the width.
    pub base_freq: f32,
    pub base_speed: f32,
    pub breathe_amp: f32,
    pub breathe_speed: f32,

    pub hover_amp: f32,
    pub hover_radius: f32,
    pub coupling: f32,

    pub lens_radius: f32,
    pub lens_strength: f32,
    pub ripple_amount: f32,
    pub ripple_freq: f32,
    pub ripple_speed: f32,
    pub lens_breathe_amount: f32,
    pub hover_amp_boost: f32,

    pub hover_ease: f32,
    pub sample_step: f32,
    pub max_dt: f32,

    pub stroke_width: f32,
    pub stroke_color: String,
    pub background: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            strategy: FieldStrategy::default(),
            line_count: DEFAULT_LINE_COUNT,
            line_seed: DEFAULT_LINE_SEED,
            vertical_pad_fraction: VERTICAL_PAD_FRACTION,
            base_amp: BASE_AMP_PX,
            base_freq: BASE_FREQ_CYCLES,
            base_speed: BASE_SPEED,
            breathe_amp: BREATHE_AMP,
            breathe_speed: BREATHE_SPEED,
            hover_amp: HOVER_AMP_PX,
            hover_radius: HOVER_RADIUS_PX,
            coupling: COUPLING,
            lens_radius: LENS_RADIUS_PX,
            lens_strength: LENS_STRENGTH,
            ripple_amount: RIPPLE_AMOUNT,
            ripple_freq: RIPPLE_FREQ,
            ripple_speed: RIPPLE_SPEED,
            lens_breathe_amount: LENS_BREATHE_AMOUNT,
            hover_amp_boost: HOVER_AMP_BOOST,
            hover_ease: HOVER_EASE_RATE,
            sample_step: SAMPLE_STEP_PX,
            max_dt: MAX_DT_SEC,
            stroke_width: STROKE_WIDTH_PX,
            stroke_color: STROKE_COLOR.to_string(),
            background: BACKGROUND.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("line count must be at least 1")]
    NoLines,
    #[error("line count must be at most {max}, got {count}")]
    TooManyLines { count: usize, max: usize },
    #[error("sample_step must be at least {min} px, got {value}")]
    StepTooSmall { value: f32, min: f32 },
    #[error("{name} must be finite and > 0, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
    #[error("vertical_pad_fraction must be within [0, 0.5], got {0}")]
    PadTooLarge(f32),
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("line {index}: {name} must be finite, got {value}")]
    LineNotFinite {
        index: usize,
        name: &'static str,
        value: f32,
    },
    #[error("line {index}: alpha must be within [0, 1], got {value}")]
    LineAlpha { index: usize, value: f32 },
}

impl FieldConfig {
    pub fn with_strategy(strategy: FieldStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Reject values that would divide by zero, let the integrator run away,
    /// or make a single frame unboundedly expensive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_count == 0 {
            return Err(ConfigError::NoLines);
        }
        if self.line_count > MAX_LINE_COUNT {
            return Err(ConfigError::TooManyLines {
                count: self.line_count,
                max: MAX_LINE_COUNT,
            });
        }
        for (name, value) in [
            ("hover_radius", self.hover_radius),
            ("lens_radius", self.lens_radius),
            ("sample_step", self.sample_step),
            ("max_dt", self.max_dt),
            ("stroke_width", self.stroke_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.sample_step < MIN_SAMPLE_STEP_PX {
            return Err(ConfigError::StepTooSmall {
                value: self.sample_step,
                min: MIN_SAMPLE_STEP_PX,
            });
        }
        for (name, value) in [
            ("coupling", self.coupling),
            ("hover_ease", self.hover_ease),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }
        if !(0.0..=0.5).contains(&self.vertical_pad_fraction) {
            return Err(ConfigError::PadTooLarge(self.vertical_pad_fraction));
        }
        for (name, value) in [
            ("base_amp", self.base_amp),
            ("base_freq", self.base_freq),
            ("base_speed", self.base_speed),
            ("breathe_amp", self.breathe_amp),
            ("breathe_speed", self.breathe_speed),
            ("hover_amp", self.hover_amp),
            ("lens_strength", self.lens_strength),
            ("ripple_amount", self.ripple_amount),
            ("ripple_freq", self.ripple_freq),
            ("ripple_speed", self.ripple_speed),
            ("lens_breathe_amount", self.lens_breathe_amount),
            ("hover_amp_boost", self.hover_amp_boost),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        Ok(())
    }
}
