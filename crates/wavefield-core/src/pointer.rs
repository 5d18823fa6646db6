use glam::Vec2;

/// Last known pointer sample plus the eased "hover" engagement scalar.
///
/// Position is in surface-local CSS pixels. Coordinates outside the surface
/// are allowed; the falloff functions attenuate them naturally.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
    hover: f32,
}

impl PointerState {
    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Eased engagement in [0, 1].
    #[inline]
    pub fn hover(&self) -> f32 {
        self.hover
    }

    /// Record a new surface-local position and mark the pointer active.
    /// Non-finite samples are dropped and the previous position is kept.
    pub fn update(&mut self, x: f32, y: f32) -> bool {
        if !(x.is_finite() && y.is_finite()) {
            return false;
        }
        self.position = Vec2::new(x, y);
        self.active = true;
        true
    }

    /// Like `update`, but the pointer only counts as active while it lies
    /// inside the `width` x `height` region.
    pub fn update_within(&mut self, x: f32, y: f32, width: f32, height: f32) -> bool {
        if !self.update(x, y) {
            return false;
        }
        self.active = is_inside(self.position, width, height);
        true
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Move `hover` a fixed fraction of the way toward 1 (active) or 0.
    pub fn tick(&mut self, ease_rate: f32) {
        let rate = if ease_rate.is_finite() {
            ease_rate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let target = if self.active { 1.0 } else { 0.0 };
        self.hover = (self.hover + (target - self.hover) * rate).clamp(0.0, 1.0);
    }
}

#[inline]
pub fn is_inside(p: Vec2, width: f32, height: f32) -> bool {
    p.x >= 0.0 && p.y >= 0.0 && p.x <= width && p.y <= height
}
