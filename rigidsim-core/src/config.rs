use crate::error::SimError;
use crate::vector::Vector2D;

pub const DEFAULT_GRAVITY: f64 = 9.81;
pub const DEFAULT_STATIC_FRICTION: f64 = 0.5;
pub const DEFAULT_KINETIC_FRICTION: f64 = 0.3;
pub const DEFAULT_GROUND_RESTITUTION: f64 = 0.6;
pub const DEFAULT_GROUND_FRICTION: f64 = 0.2;
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.1;
pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;
pub const DEFAULT_MARGIN: f64 = 5.0;
pub const DEFAULT_STABLE_SAMPLES: u32 = 3;
/// Simulated seconds between two stability samples
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 0.004;

/// Rectangular container the bodies live in, inset by `margin` on every side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn left(&self) -> f64 {
        self.margin
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin
    }

    pub fn top(&self) -> f64 {
        self.margin
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.margin
    }

    /// Top-left and bottom-right corners of the usable area
    pub fn inner(&self) -> (Vector2D, Vector2D) {
        (
            Vector2D::new(self.left(), self.top()),
            Vector2D::new(self.right(), self.bottom()),
        )
    }
}

/// World-global simulation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    /// Downward-positive gravitational acceleration
    pub gravity: f64,
    pub static_friction: f64,
    pub kinetic_friction: f64,
    /// Fraction of normal velocity kept after a bounce, shared by walls and body pairs
    pub ground_restitution: f64,
    /// Tangential loss on a wall bounce
    pub ground_friction: f64,
    /// Below this normal speed a contact is resting rather than bouncing
    pub velocity_threshold: f64,
    pub bounds: Bounds,
    /// Consecutive calm samples needed before the world counts as at rest
    pub stable_samples: u32,
    pub sample_interval: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            static_friction: DEFAULT_STATIC_FRICTION,
            kinetic_friction: DEFAULT_KINETIC_FRICTION,
            ground_restitution: DEFAULT_GROUND_RESTITUTION,
            ground_friction: DEFAULT_GROUND_FRICTION,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            bounds: Bounds::default(),
            stable_samples: DEFAULT_STABLE_SAMPLES,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }
}

impl WorldConfig {
    /// Threshold used by the stability detector, half the resting velocity
    pub fn stable_threshold(&self) -> f64 {
        self.velocity_threshold / 2.0
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let finite = [
            ("gravity", self.gravity),
            ("static_friction", self.static_friction),
            ("kinetic_friction", self.kinetic_friction),
            ("ground_restitution", self.ground_restitution),
            ("ground_friction", self.ground_friction),
            ("velocity_threshold", self.velocity_threshold),
            ("sample_interval", self.sample_interval),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimError::InvalidConfig(format!("{} is not finite", name)));
            }
        }

        let unit = [
            ("static_friction", self.static_friction),
            ("kinetic_friction", self.kinetic_friction),
            ("ground_restitution", self.ground_restitution),
            ("ground_friction", self.ground_friction),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidConfig(format!(
                    "{} must lie in [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.velocity_threshold <= 0.0 {
            return Err(SimError::InvalidConfig(
                "velocity_threshold must be positive".to_string(),
            ));
        }
        if self.sample_interval < 0.0 {
            return Err(SimError::InvalidConfig(
                "sample_interval must not be negative".to_string(),
            ));
        }
        if self.stable_samples == 0 {
            return Err(SimError::InvalidConfig(
                "stable_samples must be at least 1".to_string(),
            ));
        }

        let b = &self.bounds;
        if !(b.width.is_finite() && b.height.is_finite() && b.margin.is_finite()) || b.margin < 0.0
        {
            return Err(SimError::InvalidConfig(format!("bad bounds {:?}", b)));
        }
        if b.right() <= b.left() || b.bottom() <= b.top() {
            return Err(SimError::InvalidConfig(format!(
                "bounds {}x{} leave no room inside a margin of {}",
                b.width, b.height, b.margin
            )));
        }

        Ok(())
    }
}
