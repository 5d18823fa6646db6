// DOM wiring and surface constants for the web frontend.

// Elements the module attaches to at startup
pub const CANVAS_ID: &str = "waves";
pub const WRAPPER_SELECTOR: &str = ".wave_wrapper";

// `data-*` attributes on the canvas
pub const INIT_MARKER_KEY: &str = "init"; // data-init="1" once attached
pub const CONFIG_ATTR: &str = "data-wave-config"; // optional JSON FieldConfig overrides

// Device pixel ratio is capped to keep fill cost bounded on dense screens
pub const MAX_DPR: f64 = 2.0;

// Stroke style shared by every line
pub const LINE_CAP: &str = "round";
pub const LINE_JOIN: &str = "round";
pub const TRANSPARENT: &str = "transparent";
