use super::{line_y, FieldFrame, LineModulation, LocalModulation};
use crate::config::FieldConfig;
use crate::constants::{
    LINE_PHASE_RIPPLE_SCALE, MICRO_WOBBLE_AMOUNT, MICRO_WOBBLE_PHASE_SCALE, MICRO_WOBBLE_SPEED,
};
use crate::line::LineSpec;

/// Gaussian lens field. Holds no per-line state; everything derives from the
/// eased pointer hover, the clock and the static line phase.
#[derive(Clone, Copy, Debug, Default)]
pub struct LensField;

impl LensField {
    pub fn modulations(
        &self,
        frame: &FieldFrame<'_>,
        config: &FieldConfig,
        lines: &[LineSpec],
    ) -> Vec<LineModulation> {
        let n = lines.len();
        let hover = frame.pointer.hover();
        let t = frame.t;
        let k = frame.spatial_k(config.base_freq);
        let hover_amp_factor = 1.0 + hover * config.hover_amp_boost;
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let lp = line.phase_offset;
                let breathe = 1.0 + (t * config.breathe_speed + lp).sin() * config.lens_breathe_amount;
                let wobble = 1.0
                    + MICRO_WOBBLE_AMOUNT
                        * (t * MICRO_WOBBLE_SPEED + lp * MICRO_WOBBLE_PHASE_SCALE).sin();
                let speed = config.base_speed * line.speed_multiplier;
                LineModulation {
                    rest_y: line_y(i, n, frame.height, config, line),
                    amplitude: config.base_amp
                        * line.amp_multiplier
                        * breathe
                        * hover_amp_factor
                        * wobble,
                    phase: t * speed + lp,
                    k: k * line.freq_multiplier,
                    local: LocalModulation::Lens {
                        pointer_x: frame.pointer.x(),
                        hover,
                        sigma: config.lens_radius,
                        strength: config.lens_strength,
                        ripple_amount: config.ripple_amount,
                        ripple_freq: config.ripple_freq,
                        ripple_offset: -t * config.ripple_speed + lp * LINE_PHASE_RIPPLE_SCALE,
                    },
                }
            })
            .collect()
    }
}
