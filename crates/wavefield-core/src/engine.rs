use crate::clock::FrameClock;
use crate::config::{ConfigError, FieldConfig};
use crate::constants::MIN_SURFACE_PX;
use crate::draw::{DrawCommand, Frame};
use crate::field::{FieldFrame, WaveField};
use crate::line::LineSpec;
use crate::pointer::PointerState;
use crate::sampler::sample_line;
use instant::Instant;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Pointer input as delivered by a frontend, already in surface-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved; it counts as engaged wherever it is.
    Moved { x: f32, y: f32 },
    /// Pointer moved; it only counts as engaged inside `width` x `height`.
    MovedWithin {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Pointer left the region, or the gesture was cancelled.
    Left,
}

/// One independent wave field instance.
///
/// Owns all mutable state: pointer, clock, per-line physics. Frames are
/// produced by `advance`/`tick`; nothing is drawn here.
pub struct WaveEngine {
    config: FieldConfig,
    lines: Vec<LineSpec>,
    pointer: PointerState,
    field: WaveField,
    clock: FrameClock,
    state: RunState,
    warned_degenerate: bool,
}

impl WaveEngine {
    /// Build an engine with lines generated from `config.line_seed`.
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lines = LineSpec::generate(config.line_count, config.line_seed);
        Self::with_lines(config, lines)
    }

    /// Build an engine with explicit lines; `config.line_count` is ignored.
    pub fn with_lines(config: FieldConfig, lines: Vec<LineSpec>) -> Result<Self, ConfigError> {
        if lines.is_empty() {
            return Err(ConfigError::NoLines);
        }
        let config = FieldConfig {
            line_count: lines.len(),
            ..config
        };
        config.validate()?;
        for (i, line) in lines.iter().enumerate() {
            line.validate(i)?;
        }
        let field = WaveField::new(config.strategy, &lines);
        log::debug!(
            "[waves] engine strategy={:?} lines={}",
            config.strategy,
            lines.len()
        );
        Ok(Self {
            clock: FrameClock::new(config.max_dt),
            config,
            lines,
            pointer: PointerState::default(),
            field,
            state: RunState::Stopped,
            warned_degenerate: false,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn lines(&self) -> &[LineSpec] {
        &self.lines
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn start(&mut self) {
        if self.state == RunState::Running {
            return;
        }
        self.clock.reset_anchor();
        self.state = RunState::Running;
        log::info!("[waves] started");
    }

    pub fn stop(&mut self) {
        if self.state == RunState::Stopped {
            return;
        }
        self.state = RunState::Stopped;
        log::info!("[waves] stopped at t={:.2}s", self.clock.elapsed());
    }

    pub fn handle_input(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Moved { x, y } => {
                self.pointer.update(x, y);
            }
            InputEvent::MovedWithin {
                x,
                y,
                width,
                height,
            } => {
                self.pointer.update_within(x, y, width, height);
            }
            InputEvent::Left => self.pointer.deactivate(),
        }
    }

    /// Apply queued input, then advance by `dt`.
    pub fn tick(&mut self, dt: f32, inputs: &[InputEvent], width: f32, height: f32) -> Frame {
        for ev in inputs {
            self.handle_input(*ev);
        }
        self.advance(dt, width, height)
    }

    /// Advance using a monotonic timestamp instead of a measured step.
    pub fn advance_at(&mut self, now: Instant, width: f32, height: f32) -> Frame {
        if !self.is_running() {
            return Frame::skipped(width, height);
        }
        let dt = self.clock.step_to(now);
        self.integrate(dt, width, height)
    }

    /// Advance the model by `dt` seconds (clamped) and sample every line.
    ///
    /// A stopped engine returns a skipped frame and does not integrate.
    pub fn advance(&mut self, dt: f32, width: f32, height: f32) -> Frame {
        if !self.is_running() {
            return Frame::skipped(width, height);
        }
        let dt = self.clock.step(dt);
        self.integrate(dt, width, height)
    }

    fn integrate(&mut self, dt: f32, width: f32, height: f32) -> Frame {
        self.pointer.tick(self.config.hover_ease);

        if !is_drawable(width, height) {
            if !self.warned_degenerate {
                log::debug!("[waves] skipping frame, surface {}x{}", width, height);
                self.warned_degenerate = true;
            }
            return Frame::skipped(width, height);
        }

        let frame = FieldFrame {
            pointer: &self.pointer,
            width,
            height,
            t: self.clock.elapsed(),
            dt,
        };
        let modulations = self.field.advance(&frame, &self.config, &self.lines);
        let commands = modulations
            .iter()
            .zip(&self.lines)
            .map(|(m, line)| DrawCommand {
                points: sample_line(m, width, self.config.sample_step),
                alpha: line.alpha,
                width: self.config.stroke_width,
                color: self.config.stroke_color.clone(),
            })
            .collect();
        Frame {
            width,
            height,
            commands,
            skipped: false,
        }
    }
}

#[inline]
fn is_drawable(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width >= MIN_SURFACE_PX && height >= MIN_SURFACE_PX
}
