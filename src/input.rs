use crate::constants::MAX_DPR;
use glam::Vec2;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_to_local(client: Vec2, origin: Vec2) -> Vec2 {
    client - origin
}

/// First finite client position out of a mouse sample and a touch sample.
#[inline]
pub fn pick_client(mouse: Option<Vec2>, touch: Option<Vec2>) -> Option<Vec2> {
    mouse
        .filter(|p| p.is_finite())
        .or(touch.filter(|p| p.is_finite()))
}

// ---------------- Surface sizing ----------------
#[inline]
pub fn clamp_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_DPR)
    } else {
        1.0
    }
}

/// Backing store size in device pixels for a CSS size, never below 1x1.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = clamp_dpr(dpr);
    let w = (css_w.max(0.0) * dpr).floor() as u32;
    let h = (css_h.max(0.0) * dpr).floor() as u32;
    (w.max(1), h.max(1))
}
