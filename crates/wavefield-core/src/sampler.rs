use crate::constants::MIN_SAMPLE_STEP_PX;
use crate::field::LineModulation;
use glam::Vec2;

/// Number of steps so that `-step + n*step >= width + step`.
#[inline]
fn step_count(width: f32, step: f32) -> usize {
    ((width + 2.0 * step) / step).ceil().max(1.0) as usize
}

/// Horizontal sample positions: one step of overscan before 0 and at least
/// one past `width`, so moving endpoints never show inside the surface.
/// Steps below `MIN_SAMPLE_STEP_PX` are raised to it.
pub fn sample_xs(width: f32, step: f32) -> impl Iterator<Item = f32> {
    let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    let step = if step.is_finite() && step > 0.0 {
        step.max(MIN_SAMPLE_STEP_PX)
    } else {
        1.0
    };
    let n = step_count(width, step);
    (0..=n).map(move |j| -step + j as f32 * step)
}

/// Evaluate one line into an ordered polyline.
pub fn sample_line(m: &LineModulation, width: f32, step: f32) -> Vec<Vec2> {
    sample_xs(width, step)
        .map(|x| {
            let (scale, shift) = m.local.at(x);
            let y = m.rest_y + (x * m.k + m.phase + shift).sin() * m.amplitude * scale;
            Vec2::new(x, y)
        })
        .collect()
}
