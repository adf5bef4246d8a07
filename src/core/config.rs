use super::constants::{
    FRICTION_JITTER, MIN_TRAIL_SIZE, TRAIL_COUNT, TRAIL_DAMPENING, TRAIL_FRICTION, TRAIL_SIZE,
    TRAIL_TENSION,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("trail size {size} is below the minimum of {min} nodes", min = MIN_TRAIL_SIZE)]
    TrailTooShort { size: usize },
    #[error("trail count must be at least 1")]
    NoTrails,
    #[error(
        "friction {0} must lie in ({lo}, {hi})",
        lo = FRICTION_JITTER,
        hi = 1.0 - FRICTION_JITTER
    )]
    FrictionOutOfRange(f64),
    #[error("tension {0} must lie in (0, 1]")]
    TensionOutOfRange(f64),
    #[error("dampening {0} must lie in [0, 1)")]
    DampeningOutOfRange(f64),
}

/// Tuning shared by every trail for the lifetime of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    pub debug: bool,
    pub friction: f64,
    pub trails: usize,
    pub size: usize,
    pub dampening: f64,
    pub tension: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            debug: false,
            friction: TRAIL_FRICTION,
            trails: TRAIL_COUNT,
            size: TRAIL_SIZE,
            dampening: TRAIL_DAMPENING,
            tension: TRAIL_TENSION,
        }
    }
}

impl Environment {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_TRAIL_SIZE {
            return Err(ConfigError::TrailTooShort { size: self.size });
        }
        if self.trails == 0 {
            return Err(ConfigError::NoTrails);
        }
        // per-trail jitter must keep friction inside (0, 1)
        if !(self.friction > FRICTION_JITTER && self.friction < 1.0 - FRICTION_JITTER) {
            return Err(ConfigError::FrictionOutOfRange(self.friction));
        }
        if !(self.tension > 0.0 && self.tension <= 1.0) {
            return Err(ConfigError::TensionOutOfRange(self.tension));
        }
        if !(self.dampening >= 0.0 && self.dampening < 1.0) {
            return Err(ConfigError::DampeningOutOfRange(self.dampening));
        }
        Ok(())
    }
}
