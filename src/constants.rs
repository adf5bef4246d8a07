// Browser wiring constants. Simulation tuning lives in `core::constants`;
// these only name the DOM pieces the animation attaches to.

// Canvas element looked up when no id is given
pub const DEFAULT_CANVAS_ID: &str = "canvas";

// Document-level pointer events
pub const EV_MOUSE_MOVE: &str = "mousemove";
pub const EV_TOUCH_START: &str = "touchstart";
pub const EV_TOUCH_MOVE: &str = "touchmove";

// Window-level events
pub const EV_RESIZE: &str = "resize";
pub const EV_ORIENTATION_CHANGE: &str = "orientationchange";
pub const EV_FOCUS: &str = "focus";
pub const EV_BLUR: &str = "blur";
