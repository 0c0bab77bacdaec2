// Host-side rendering and wiring constants for the web front-end.

// DOM hooks
pub const INTERACTIVE_SELECTOR: &str = "a, button, [role=button], [data-interactive]";
pub const CURSOR_ELEMENT_ID: &str = "fx-cursor";
pub const CURSOR_STATE_ATTR: &str = "data-state";

// Trail rendering (CSS px)
pub const TRAIL_PARTICLE_SIZE: f64 = 6.0;
pub const CURSOR_DOT_RADIUS: f64 = 5.0; // fallback dot when no cursor element exists

// Shockwave stroke
pub const SHOCKWAVE_LINE_WIDTH: f64 = 3.0;
