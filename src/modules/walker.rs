//! Move an object along a spline, one explicit time step at a time.
//!
//! The walker owns no clock. A host loop calls [`SplineWalker::step`] with the
//! elapsed time and places its object at the returned pose.
//!
//! ```rust
//! use bezier_spline::modules::walker::{SplineWalker, WalkerConfig, WalkerMode};
//! use bezier_spline::{pt, BezierSpline};
//!
//! let spline = BezierSpline::new();
//! let config = WalkerConfig { duration: 2.0, look_forward: false, mode: WalkerMode::Once };
//! let mut walker = SplineWalker::new(config).unwrap();
//!
//! let pose = walker.step(&spline, 5.0);
//! assert_eq!(walker.progress(), 1.0);
//! assert_eq!(pose.position, pt!(4, 0, 0));
//! ```

use crate::constants::DEFAULT_WALK_DURATION;
use crate::data::{BezierSpline, Point, Vector};
use crate::error::{SplineError, SplineResult};
use serde::{Deserialize, Serialize};

/// What happens when the walker reaches the end of the spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WalkerMode {
    /// Stop at the end.
    #[default]
    Once,
    /// Jump back to the start and keep going.
    Loop,
    /// Turn around and walk back, forever.
    PingPong,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Seconds needed to cover the whole spline once.
    pub duration: f64,
    /// Report the spline direction along with the position.
    pub look_forward: bool,
    pub mode: WalkerMode,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_WALK_DURATION,
            look_forward: false,
            mode: WalkerMode::default(),
        }
    }
}

/// Where the walker is, and which way it faces when `look_forward` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkerPose {
    pub position: Point,
    pub direction: Option<Vector>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplineWalker {
    config: WalkerConfig,
    progress: f64,
    going_forward: bool,
}

impl SplineWalker {
    pub fn new(config: WalkerConfig) -> SplineResult<Self> {
        if !config.duration.is_finite() || config.duration <= 0.0 {
            return Err(SplineError::InvalidState(format!(
                "walker duration must be a positive number of seconds, got {}",
                config.duration
            )));
        }
        Ok(Self {
            config,
            progress: 0.0,
            going_forward: true,
        })
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Position along the spline as a global parameter in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_going_forward(&self) -> bool {
        self.going_forward
    }

    /// Back to the start, facing forward.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.going_forward = true;
    }

    /// Advance by `dt` seconds and return the new pose.
    ///
    /// Negative or non-finite steps leave the walker where it is.
    pub fn step(&mut self, spline: &BezierSpline, dt: f64) -> WalkerPose {
        if !dt.is_finite() || dt < 0.0 {
            log::debug!("ignoring walker step of {}", dt);
            return self.pose(spline);
        }

        let delta = dt / self.config.duration;
        if self.going_forward {
            self.progress += delta;
            if self.progress > 1.0 {
                match self.config.mode {
                    WalkerMode::Once => self.progress = 1.0,
                    WalkerMode::Loop => self.progress = self.progress.fract(),
                    WalkerMode::PingPong => {
                        self.progress = (2.0 - self.progress).max(0.0);
                        self.going_forward = false;
                    }
                }
            }
        } else {
            self.progress -= delta;
            if self.progress < 0.0 {
                self.progress = (-self.progress).min(1.0);
                self.going_forward = true;
            }
        }

        self.pose(spline)
    }

    /// Pose at the current progress, without moving.
    pub fn pose(&self, spline: &BezierSpline) -> WalkerPose {
        WalkerPose {
            position: spline.evaluate(self.progress),
            direction: self
                .config
                .look_forward
                .then(|| spline.tangent(self.progress)),
        }
    }
}
