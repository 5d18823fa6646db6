use instant::Instant;

/// Elapsed animation time with a bounded step.
///
/// A long stall (backgrounded tab, debugger break) would otherwise hand the
/// spring integrator one enormous `dt`; every step is capped at `max_dt`.
#[derive(Clone, Debug)]
pub struct FrameClock {
    elapsed: f32,
    last_dt: f32,
    max_dt: f32,
    last_instant: Option<Instant>,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            elapsed: 0.0,
            last_dt: 0.0,
            max_dt,
            last_instant: None,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn last_dt(&self) -> f32 {
        self.last_dt
    }

    /// Clamp `dt` into `[0, max_dt]`; NaN and negative steps count as zero.
    #[inline]
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_dt)
    }

    /// Advance by a caller-measured step and return the clamped step applied.
    pub fn step(&mut self, dt: f32) -> f32 {
        let dt = self.clamp_dt(dt);
        self.elapsed += dt;
        self.last_dt = dt;
        dt
    }

    /// Advance using a monotonic timestamp. The first call only primes the
    /// clock and returns 0.
    pub fn step_to(&mut self, now: Instant) -> f32 {
        let raw = match self.last_instant {
            Some(prev) if now > prev => (now - prev).as_secs_f32(),
            _ => 0.0,
        };
        self.last_instant = Some(now);
        self.step(raw)
    }

    /// Forget the last timestamp so a restart after a pause begins with dt = 0.
    pub fn reset_anchor(&mut self) {
        self.last_instant = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_stalls_and_garbage() {
        let mut c = FrameClock::new(0.033);
        assert_eq!(c.step(5.0), 0.033);
        assert_eq!(c.step(-1.0), 0.0);
        assert_eq!(c.step(f32::NAN), 0.0);
        assert_eq!(c.step(f32::INFINITY), 0.033);
        assert!((c.elapsed() - 0.066).abs() < 1e-6);
    }

    #[test]
    fn first_instant_primes_only() {
        let mut c = FrameClock::new(0.033);
        assert_eq!(c.step_to(Instant::now()), 0.0);
        assert_eq!(c.elapsed(), 0.0);
    }
}
