// Shared tuning constants for the burst simulator, trail engine and intro stages.

// Frame clock
pub const NOMINAL_FPS: f32 = 60.0; // frames per second the per-frame constants are tuned for
pub const MIN_STEP_FRAMES: f32 = 0.001; // floor for degenerate burst steps
pub const MAX_STEP_FRAMES: f32 = 4.0; // cap after a stalled tab resumes
pub const MIN_STEP_SEC: f32 = 1.0e-4;
pub const MAX_STEP_SEC: f32 = 0.25;

// Burst particles (per nominal frame)
pub const BURST_PARTICLE_COUNT: usize = 100;
pub const BURST_SPEED_MIN: f32 = 2.0;
pub const BURST_SPEED_MAX: f32 = 12.0;
pub const BURST_RADIUS_MIN: f32 = 2.0;
pub const BURST_RADIUS_MAX: f32 = 6.0;
pub const BURST_LIFE: f32 = 200.0;
pub const BURST_DECAY: f32 = 2.0;
pub const BURST_GRAVITY: f32 = 0.15; // downward pull, screen y grows downwards
pub const BURST_SHRINK: f32 = 0.985;

// Shockwave ring
pub const SHOCKWAVE_GROWTH: f32 = 18.0; // px per frame
pub const SHOCKWAVE_CAP_FRACTION: f32 = 0.75; // of max(viewport width, height)

// Pointer spring
pub const SPRING_STIFFNESS: f32 = 450.0;
pub const SPRING_DAMPING: f32 = 28.0;
pub const SPRING_MASS: f32 = 0.7;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 120.0;

// Trail buffer
pub const TRAIL_STEADY_CAP: usize = 50;
pub const TRAIL_BURST_CAP: usize = 100;
pub const TRAIL_BURST_BATCH: usize = 15;
pub const TRAIL_MOVE_JITTER: f32 = 5.0; // +/- px around the pointer
pub const TRAIL_BURST_SCATTER: f32 = 40.0; // max px from the press point
pub const TRAIL_FADE_MIN_SEC: f32 = 0.45;
pub const TRAIL_FADE_MAX_SEC: f32 = 0.9;
pub const TRAIL_WEIGHT_MIN: f32 = 0.35;
pub const TRAIL_WEIGHT_MAX: f32 = 1.0;
pub const TRAIL_SQUARE_CHANCE: f32 = 0.5;

// Intro sequence (seconds)
pub const INTRO_CHARGING_SEC: f32 = 1.2;
pub const INTRO_EXPLOSION_SEC: f32 = 2.5;
