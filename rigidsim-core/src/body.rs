use crate::error::{ObjectId, SimError};
use crate::shape::Shape;
use crate::vector::Vector2D;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector2D,
    pub max: Vector2D,
}

impl Aabb {
    pub fn size(&self) -> Vector2D {
        self.max - self.min
    }

    pub fn center(&self) -> Vector2D {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test; boxes that only touch do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Overlap depth along each axis, zero or negative when apart
    pub fn overlap(&self, other: &Aabb) -> Vector2D {
        self.max.min(other.max) - self.min.max(other.min)
    }
}

/// A simulated object
#[derive(Debug, Clone)]
pub struct Body {
    pub id: ObjectId,
    pub mass: f64,
    /// Top-left corner of the bounding box
    pub pos: Vector2D,
    pub vel: Vector2D,
    pub acc: Vector2D,
    pub shape: Shape,
    /// Persistent external force, added to every step's acceleration
    pub force: Vector2D,
    /// Resting on a wall or another resting body after the last collision pass
    pub resting: bool,
}

impl Body {
    pub fn new(
        id: ObjectId,
        mass: f64,
        pos: Vector2D,
        vel: Vector2D,
        shape: Shape,
    ) -> Result<Self, SimError> {
        if id == 0 {
            return Err(SimError::InvalidId(id));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }
        if !(pos.is_finite() && vel.is_finite()) {
            return Err(SimError::InvalidState(id));
        }
        shape.validate()?;

        Ok(Self {
            id,
            mass,
            pos,
            vel,
            acc: Vector2D::ZERO,
            shape,
            force: Vector2D::ZERO,
            resting: false,
        })
    }

    pub fn inverse_mass(&self) -> f64 {
        1.0 / self.mass
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            min: self.pos,
            max: self.pos + self.shape.extents(),
        }
    }

    pub fn state(&self) -> ObjectState {
        ObjectState {
            id: self.id,
            pos_x: self.pos.x,
            pos_y: self.pos.y,
            vel_x: self.vel.x,
            vel_y: self.vel.y,
            acc_x: self.acc.x,
            acc_y: self.acc.y,
        }
    }
}

/// Read-only copy of a body's kinematic state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectState {
    pub id: ObjectId,
    pub pos_x: f64,
    pub pos_y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub acc_x: f64,
    pub acc_y: f64,
}

impl ObjectState {
    pub fn position(&self) -> Vector2D {
        Vector2D::new(self.pos_x, self.pos_y)
    }

    pub fn velocity(&self) -> Vector2D {
        Vector2D::new(self.vel_x, self.vel_y)
    }

    pub fn acceleration(&self) -> Vector2D {
        Vector2D::new(self.acc_x, self.acc_y)
    }
}
