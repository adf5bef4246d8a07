// Host-side tests for the hue oscillator and stroke color.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;
use trail_canvas::core::color::{stroke_style, wrap_hue};
use trail_canvas::core::constants::{HUE_AMPLITUDE, HUE_FREQUENCY, HUE_OFFSET};
use trail_canvas::core::Wave;

#[test]
fn single_update_matches_hand_computed_value() {
    let mut wave = Wave::new(0.0, 285.0, 0.0015, 85.0);
    let v = wave.update();
    assert!((wave.phase - 0.0015).abs() < 1e-12);
    assert!((v - 285.1275).abs() < 1e-3, "got {v}");
}

#[test]
fn phase_advances_by_frequency_per_update() {
    let start = 1.25;
    let f = 0.0015;
    let mut wave = Wave::new(start, 0.0, f, 1.0);
    for _ in 0..10_000 {
        wave.update();
    }
    let expected = start + 10_000.0 * f;
    assert!((wave.phase - expected).abs() < 1e-9);
}

#[test]
fn output_stays_within_amplitude_band() {
    let mut wave = Wave::new(0.3, 285.0, 0.37, 85.0);
    for _ in 0..5_000 {
        let v = wave.update();
        assert!((200.0..=370.0).contains(&v), "out of band: {v}");
    }
}

#[test]
fn value_does_not_advance_phase() {
    let wave = Wave::new(0.5, 10.0, 0.1, 2.0);
    let a = wave.value();
    let b = wave.value();
    assert_eq!(a, b);
    assert_eq!(wave.phase, 0.5);
}

#[test]
fn default_wave_is_unit_sine() {
    let wave = Wave::default();
    assert_eq!(wave.phase, 0.0);
    assert_eq!(wave.offset, 0.0);
    assert_eq!(wave.frequency, 0.001);
    assert_eq!(wave.amplitude, 1.0);
}

#[test]
fn hue_wave_uses_tuning_and_random_phase() {
    let mut rng = StdRng::seed_from_u64(3);
    let wave = Wave::hue(&mut rng);
    assert!(wave.phase >= 0.0 && wave.phase < TAU);
    assert_eq!(wave.offset, HUE_OFFSET);
    assert_eq!(wave.amplitude, HUE_AMPLITUDE);
    assert_eq!(wave.frequency, HUE_FREQUENCY);
}

#[test]
fn hue_wraps_into_degree_range() {
    assert_eq!(wrap_hue(285.1275), 285);
    assert_eq!(wrap_hue(359.6), 0);
    assert_eq!(wrap_hue(370.4), 10);
    assert_eq!(wrap_hue(-0.6), 359);
}

#[test]
fn stroke_style_is_faint_hsla() {
    assert_eq!(stroke_style(285.1275), "hsla(285,100%,50%,0.025)");
    assert_eq!(stroke_style(369.7), "hsla(10,100%,50%,0.025)");
}
