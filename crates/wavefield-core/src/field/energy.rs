use super::{bulge_falloff, clamp01, lerp, line_y, FieldFrame, LineModulation, LocalModulation};
use crate::config::FieldConfig;
use crate::constants::{
    ENERGY_SPEED_BOOST, HORIZONTAL_DIST_WEIGHT, LOCAL_BOOST_GAIN, LOCAL_BOOST_RADIUS_SCALE,
    SPRING_DAMPING, SPRING_STIFFNESS,
};
use crate::line::LineSpec;
use crate::pointer::PointerState;
use smallvec::SmallVec;

type PerLine = SmallVec<[f32; 8]>;

/// Coupled damped-spring field: one energy scalar per line.
#[derive(Clone, Debug)]
pub struct CoupledEnergyField {
    energy: PerLine,
    velocity: PerLine,
    phase: PerLine,
    coupled_target: PerLine,
}

impl CoupledEnergyField {
    pub fn new(lines: &[LineSpec]) -> Self {
        let n = lines.len();
        Self {
            energy: SmallVec::from_elem(0.0, n),
            velocity: SmallVec::from_elem(0.0, n),
            phase: lines.iter().map(|l| l.phase_offset).collect(),
            coupled_target: SmallVec::from_elem(0.0, n),
        }
    }

    #[inline]
    pub fn energy(&self) -> &[f32] {
        &self.energy
    }

    #[inline]
    pub fn velocity(&self) -> &[f32] {
        &self.velocity
    }

    #[inline]
    pub fn phase(&self) -> &[f32] {
        &self.phase
    }

    /// Neighbor-blended targets used on the most recent step.
    #[inline]
    pub fn coupled_targets(&self) -> &[f32] {
        &self.coupled_target
    }

    pub fn step(&mut self, frame: &FieldFrame<'_>, config: &FieldConfig, lines: &[LineSpec]) {
        let n = self.energy.len();
        let targets: PerLine = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let y = line_y(i, n, frame.height, config, line);
                proximity_target(frame.pointer, frame.width * 0.5, y, config.hover_radius)
            })
            .collect();

        // Energies are updated in place: line i sees line i-1 already advanced.
        for i in 0..n {
            let coupled = coupled_target(&targets, &self.energy, i, config.coupling);
            self.coupled_target[i] = coupled;
            let accel = (coupled - self.energy[i]) * SPRING_STIFFNESS;
            self.velocity[i] += accel * frame.dt;
            self.velocity[i] *= SPRING_DAMPING;
            self.energy[i] = clamp01(self.energy[i] + self.velocity[i]);
        }

        for (i, line) in lines.iter().enumerate().take(n) {
            let boost = 1.0 + self.energy[i] * ENERGY_SPEED_BOOST;
            self.phase[i] += frame.dt * config.base_speed * line.speed_multiplier * boost;
        }
    }

    pub fn modulations(
        &self,
        frame: &FieldFrame<'_>,
        config: &FieldConfig,
        lines: &[LineSpec],
    ) -> Vec<LineModulation> {
        let n = lines.len();
        let breathe = 0.5 + 0.5 * (frame.t * config.breathe_speed).sin();
        let k = frame.spatial_k(config.base_freq);
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let e = self.energy[i];
                let amp = config.base_amp * (1.0 + config.breathe_amp * breathe)
                    + config.hover_amp * e;
                let local = if frame.pointer.active {
                    LocalModulation::Bulge {
                        pointer_x: frame.pointer.x(),
                        radius: config.hover_radius * LOCAL_BOOST_RADIUS_SCALE,
                        gain: LOCAL_BOOST_GAIN * e,
                    }
                } else {
                    LocalModulation::None
                };
                LineModulation {
                    rest_y: line_y(i, n, frame.height, config, line),
                    amplitude: amp * line.amp_multiplier,
                    phase: self.phase[i],
                    k: k * line.freq_multiplier,
                    local,
                }
            })
            .collect()
    }
}

/// Raw pull toward a line resting at `line_y`: `n²` with `n = 1 - min(1, dist/radius)`.
///
/// The distance is elliptical; horizontal offset from `center_x` is weighted
/// down so vertical alignment with a line dominates.
pub fn proximity_target(pointer: &PointerState, center_x: f32, line_y: f32, radius: f32) -> f32 {
    if !pointer.active {
        return 0.0;
    }
    let dy = (pointer.y() - line_y).abs();
    let dx = (pointer.x() - center_x).abs() * HORIZONTAL_DIST_WEIGHT;
    let dist = (dy * dy + dx * dx).sqrt();
    bulge_falloff(dist, radius)
}

/// Blend line `i`'s target with the mean of its neighbours' energies. A
/// missing neighbour contributes the line's own energy; a lone line is
/// uncoupled.
pub fn coupled_target(targets: &[f32], energy: &[f32], i: usize, coupling: f32) -> f32 {
    let n = energy.len();
    if n < 2 {
        return targets[i];
    }
    let left = if i > 0 { energy[i - 1] } else { energy[i] };
    let right = if i + 1 < n { energy[i + 1] } else { energy[i] };
    lerp(targets[i], (left + right) * 0.5, coupling)
}
