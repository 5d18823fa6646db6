// Default tuning for the wave field. `FieldConfig::default()` is built from
// these; the web frontend may override any of them at startup.

// Layout
pub const DEFAULT_LINE_COUNT: usize = 3;
pub const DEFAULT_LINE_SEED: u64 = 0x5EED_0F_5EA;
pub const MAX_LINE_COUNT: usize = 64;
pub const VERTICAL_PAD_FRACTION: f32 = 0.30; // share of height kept empty above and below the lines

// Base waveform
pub const BASE_AMP_PX: f32 = 5.0;
pub const BASE_FREQ_CYCLES: f32 = 1.6; // visible cycles across the surface width
pub const BASE_SPEED: f32 = 0.30; // rad/s
pub const BREATHE_AMP: f32 = 0.35;
pub const BREATHE_SPEED: f32 = 0.55; // rad/s

// Coupled-energy strategy
pub const HOVER_AMP_PX: f32 = 90.0;
pub const HOVER_RADIUS_PX: f32 = 220.0;
pub const COUPLING: f32 = 0.30;
pub const SPRING_STIFFNESS: f32 = 8.0;
pub const SPRING_DAMPING: f32 = 0.86; // velocity multiplier applied once per tick
pub const HORIZONTAL_DIST_WEIGHT: f32 = 0.35;
pub const ENERGY_SPEED_BOOST: f32 = 0.9;
pub const LOCAL_BOOST_GAIN: f32 = 0.95;
pub const LOCAL_BOOST_RADIUS_SCALE: f32 = 1.15;

// Lens strategy
pub const LENS_RADIUS_PX: f32 = 140.0;
pub const LENS_STRENGTH: f32 = 1.6;
pub const RIPPLE_AMOUNT: f32 = 0.9; // radians of phase shift at full lens
pub const RIPPLE_FREQ: f32 = 0.035; // rad/px
pub const RIPPLE_SPEED: f32 = 3.2; // rad/s
pub const LENS_BREATHE_AMOUNT: f32 = 0.12;
pub const HOVER_AMP_BOOST: f32 = 0.6;
pub const LINE_PHASE_RIPPLE_SCALE: f32 = 0.7;
pub const MICRO_WOBBLE_AMOUNT: f32 = 0.015;
pub const MICRO_WOBBLE_SPEED: f32 = 1.7;
pub const MICRO_WOBBLE_PHASE_SCALE: f32 = 1.3;

// Pointer
pub const HOVER_EASE_RATE: f32 = 0.08; // fraction of remaining distance per tick

// Sampling and timing
pub const SAMPLE_STEP_PX: f32 = 4.0;
pub const MIN_SAMPLE_STEP_PX: f32 = 0.25; // bounds the points per line on wide surfaces
pub const MAX_DT_SEC: f32 = 0.033;
pub const MIN_SURFACE_PX: f32 = 2.0; // below this in either axis a frame is skipped

// Stroke
pub const STROKE_WIDTH_PX: f32 = 2.0;
pub const STROKE_COLOR: &str = "rgba(255,255,255,0.85)";
pub const BACKGROUND: &str = "transparent";
