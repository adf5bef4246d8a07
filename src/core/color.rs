use super::constants::{STROKE_ALPHA, STROKE_LIGHTNESS, STROKE_SATURATION};

/// Round an oscillator value to a whole hue in `[0, 360)`.
#[inline]
pub fn wrap_hue(value: f64) -> u32 {
    (value.round() as i64).rem_euclid(360) as u32
}

/// CSS stroke color for a frame: faint, fully saturated, hue from the wave.
pub fn stroke_style(value: f64) -> String {
    format!(
        "hsla({},{}%,{}%,{})",
        wrap_hue(value),
        STROKE_SATURATION,
        STROKE_LIGHTNESS,
        STROKE_ALPHA
    )
}
