//! Simulation state and the idle/tracking input state machine.
//!
//! Event handlers and the frame loop share one [`Simulation`]. Handlers feed
//! it [`InputEvent`]s through [`Simulation::handle`] and act on the returned
//! [`Reaction`]; the loop calls [`Simulation::render`] once per frame and
//! reschedules only while it returns `Ok(true)`.

use super::color::stroke_style;
use super::config::{ConfigError, Environment};
use super::constants::{DEBUG_LOG_EVERY, LINE_WIDTH, RESIZE_MARGIN_PX, SPRING_BASE, SPRING_SPREAD};
use super::surface::{Composite, Surface};
use super::trail::Trail;
use super::wave::Wave;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No pointer seen yet; nothing is drawn.
    Idle,
    /// Trails exist and follow the pointer.
    Tracking,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    TouchStart { touches: u32, x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    /// Window resize or orientation change, in CSS pixels.
    Resize { viewport_width: f64, viewport_height: f64 },
    Focus,
    Blur,
}

/// What the binder must do after an event was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    None,
    /// First interaction: request the first animation frame.
    StartLoop,
    /// Focus returned after a pause: request a frame again.
    ResumeLoop,
    /// Resize the drawing surface.
    Resize { width: u32, height: u32 },
}

/// Backing size of the canvas for a viewport, leaving a horizontal margin.
pub fn canvas_size_for_viewport(viewport_width: f64, viewport_height: f64) -> (u32, u32) {
    let w = (viewport_width - RESIZE_MARGIN_PX).max(1.0);
    let h = viewport_height.max(1.0);
    (w as u32, h as u32)
}

pub struct Simulation<R: Rng = StdRng> {
    env: Environment,
    pointer: DVec2,
    trails: Vec<Trail>,
    wave: Wave,
    running: bool,
    frame: u64,
    phase: Phase,
    frame_pending: bool,
    rng: R,
}

impl Simulation<StdRng> {
    pub fn with_entropy(env: Environment) -> Result<Self, ConfigError> {
        Self::new(env, StdRng::from_entropy())
    }
}

impl<R: Rng> Simulation<R> {
    pub fn new(env: Environment, mut rng: R) -> Result<Self, ConfigError> {
        env.validate()?;
        let wave = Wave::hue(&mut rng);
        Ok(Self {
            env,
            pointer: DVec2::ZERO,
            trails: Vec::new(),
            wave,
            running: true,
            frame: 1,
            phase: Phase::Idle,
            frame_pending: false,
            rng,
        })
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    pub fn wave(&self) -> &Wave {
        &self.wave
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Replace every trail with a fresh one resting at the pointer.
    pub fn reset_trails(&mut self) -> Result<(), ConfigError> {
        let count = self.env.trails;
        let mut trails = Vec::with_capacity(count);
        for i in 0..count {
            let base = SPRING_BASE + (i as f64 / count as f64) * SPRING_SPREAD;
            trails.push(Trail::jittered(base, &self.env, self.pointer, &mut self.rng)?);
        }
        self.trails = trails;
        Ok(())
    }

    /// Single dispatch point for every input event.
    pub fn handle(&mut self, event: InputEvent) -> Reaction {
        match (self.phase, event) {
            (Phase::Idle, InputEvent::PointerMove { x, y })
            | (Phase::Idle, InputEvent::TouchStart { x, y, .. }) => self.begin_tracking(x, y),
            (Phase::Idle, InputEvent::TouchMove { .. }) => Reaction::None,
            (Phase::Tracking, InputEvent::PointerMove { x, y })
            | (Phase::Tracking, InputEvent::TouchMove { x, y }) => {
                self.pointer = DVec2::new(x, y);
                Reaction::None
            }
            (Phase::Tracking, InputEvent::TouchStart { touches, x, y }) => {
                if touches == 1 {
                    self.pointer = DVec2::new(x, y);
                }
                Reaction::None
            }
            (
                _,
                InputEvent::Resize {
                    viewport_width,
                    viewport_height,
                },
            ) => {
                let (width, height) = canvas_size_for_viewport(viewport_width, viewport_height);
                Reaction::Resize { width, height }
            }
            (_, InputEvent::Blur) => {
                self.running = false;
                Reaction::None
            }
            (phase, InputEvent::Focus) => {
                self.running = true;
                if phase == Phase::Tracking && !self.frame_pending {
                    self.frame_pending = true;
                    Reaction::ResumeLoop
                } else {
                    Reaction::None
                }
            }
        }
    }

    fn begin_tracking(&mut self, x: f64, y: f64) -> Reaction {
        self.pointer = DVec2::new(x, y);
        if let Err(e) = self.reset_trails() {
            // env was validated in `new`, so this only fires on a logic error
            log::error!("[input] trail reset failed: {}", e);
            return Reaction::None;
        }
        self.phase = Phase::Tracking;
        log::info!(
            "[input] tracking from ({:.0},{:.0}) with {} trails",
            x,
            y,
            self.trails.len()
        );
        if self.frame_pending {
            Reaction::None
        } else {
            self.frame_pending = true;
            Reaction::StartLoop
        }
    }

    /// Run one animation frame. Returns whether the next frame should be
    /// requested.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> anyhow::Result<bool> {
        self.frame_pending = false;
        if !self.running {
            return Ok(false);
        }

        surface.set_composite(Composite::SourceOver)?;
        surface.clear();
        surface.set_composite(Composite::Lighter)?;
        let hue = self.wave.update();
        surface.set_stroke_style(&stroke_style(hue));
        surface.set_line_width(LINE_WIDTH);

        let target = self.pointer;
        for trail in &mut self.trails {
            trail.update(target, &self.env);
            trail.draw(surface);
        }

        if self.env.debug && self.frame % DEBUG_LOG_EVERY == 0 {
            let (w, h) = surface.size();
            log::debug!(
                "[frame] {} hue={:.1} surface={}x{} pointer=({:.0},{:.0})",
                self.frame,
                hue,
                w,
                h,
                self.pointer.x,
                self.pointer.y
            );
        }
        self.frame = self.frame.wrapping_add(1);
        self.frame_pending = true;
        Ok(true)
    }

    /// Halt the loop: the next scheduled frame does nothing.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Forget a scheduled frame that will never run (e.g. it was cancelled).
    pub fn clear_pending(&mut self) {
        self.frame_pending = false;
    }
}
