// Simulation tuning constants for the trail animation.

// Environment defaults
pub const TRAIL_FRICTION: f64 = 0.5; // velocity multiplier applied every frame
pub const TRAIL_COUNT: usize = 80;
pub const TRAIL_SIZE: usize = 50; // nodes per trail
pub const TRAIL_DAMPENING: f64 = 0.025; // share of predecessor velocity passed down the chain
pub const TRAIL_TENSION: f64 = 0.99; // per-node spring decay

// The smoothed path needs a head, one control node and a tail
pub const MIN_TRAIL_SIZE: usize = 3;

// Per-trail spring: base + index spread + random jitter
pub const SPRING_BASE: f64 = 0.45;
pub const SPRING_SPREAD: f64 = 0.025;
pub const SPRING_JITTER: f64 = 0.05; // +/- around the base
pub const FRICTION_JITTER: f64 = 0.005; // +/- around env friction

// Hue oscillator
pub const HUE_OFFSET: f64 = 285.0;
pub const HUE_AMPLITUDE: f64 = 85.0;
pub const HUE_FREQUENCY: f64 = 0.0015;

// Stroke appearance
pub const STROKE_SATURATION: u32 = 100;
pub const STROKE_LIGHTNESS: u32 = 50;
pub const STROKE_ALPHA: f64 = 0.025; // many faint strokes add up under "lighter"
pub const LINE_WIDTH: f64 = 10.0;

// Canvas sizing relative to the viewport
pub const RESIZE_MARGIN_PX: f64 = 20.0;

// Frames between debug diagnostics
pub const DEBUG_LOG_EVERY: u64 = 600;
