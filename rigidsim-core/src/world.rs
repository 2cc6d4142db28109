use crate::body::{Body, ObjectState};
use crate::collision::{self, CollisionReport};
use crate::config::WorldConfig;
use crate::error::{ObjectId, SimError};
use crate::forces::{apply_custom_force, apply_gravity, ForceConfig};
use crate::integrator;
use crate::shape::Shape;
use crate::stability::StabilityDetector;
use crate::vector::Vector2D;
use log::{debug, warn};
use std::collections::HashMap;

/// The physics world: sole owner of every body and of the global parameters.
///
/// A frame is `step` followed by `handle_collisions`, after which snapshots
/// can be read with `get_object_state`. Dropping the world (or calling
/// `delete`) frees every body.
#[derive(Debug)]
pub struct World {
    config: WorldConfig,
    bodies: Vec<Body>,
    index: HashMap<ObjectId, usize>,
    stability: StabilityDetector,
    /// Simulated seconds integrated so far
    elapsed: f64,
    last_dt: f64,
    frames: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Empty world with the default parameters
    pub fn new() -> Self {
        Self::build(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: WorldConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            index: HashMap::new(),
            stability: StabilityDetector::new(),
            elapsed: 0.0,
            last_dt: 0.0,
            frames: 0,
        }
    }

    /// Destroy the world and every body it owns
    pub fn delete(self) {
        debug!("deleting world with {} bodies", self.bodies.len());
    }

    /// Remove every body, keeping the configuration
    pub fn reset(&mut self) {
        debug!("resetting world with {} bodies", self.bodies.len());
        self.bodies.clear();
        self.index.clear();
        self.stability = StabilityDetector::new();
        self.elapsed = 0.0;
        self.last_dt = 0.0;
        self.frames = 0;
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.bodies.iter().map(|b| b.id)
    }

    /// Read-only view of every body, for renderers that need shapes
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: ObjectId) -> Option<&Body> {
        self.index.get(&id).map(|&i| &self.bodies[i])
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_at_rest(&self) -> bool {
        self.stability.is_at_rest()
    }

    /// Insert a new body. Fails without touching the world if the id is
    /// taken or the mass, shape or state is invalid.
    pub fn add_object(
        &mut self,
        id: ObjectId,
        mass: f64,
        pos: Vector2D,
        vel: Vector2D,
        shape: Shape,
    ) -> Result<(), SimError> {
        if self.index.contains_key(&id) {
            warn!("rejected object {}: id already in use", id);
            return Err(SimError::DuplicateId(id));
        }
        let body = Body::new(id, mass, pos, vel, shape).inspect_err(|e| {
            warn!("rejected object {}: {}", id, e);
        })?;

        debug!(
            "added {} {} (mass {}) at ({}, {})",
            shape.kind(),
            id,
            mass,
            pos.x,
            pos.y
        );
        self.index.insert(id, self.bodies.len());
        self.bodies.push(body);
        self.stability.wake();
        Ok(())
    }

    /// Insert a body described by a shape tag (`R`, `C` or `S`) and its dimensions
    pub fn add_object_tagged(
        &mut self,
        id: ObjectId,
        mass: f64,
        pos: Vector2D,
        vel: Vector2D,
        tag: char,
        dims: &[f64],
    ) -> Result<(), SimError> {
        let shape = Shape::from_tag(tag, dims).inspect_err(|e| {
            warn!("rejected object {}: {}", id, e);
        })?;
        self.add_object(id, mass, pos, vel, shape)
    }

    /// Change world-global force parameters. A gravity change reaches every
    /// current body's acceleration at once.
    pub fn configure_forces(&mut self, forces: ForceConfig) -> Result<(), SimError> {
        forces.validate()?;
        match forces {
            ForceConfig::Friction {
                static_mu,
                kinetic_mu,
            } => {
                self.config.static_friction = static_mu;
                self.config.kinetic_friction = kinetic_mu;
            }
            ForceConfig::Gravity { g } => {
                self.config.gravity = g;
                for body in &mut self.bodies {
                    seed_acceleration(body, g);
                }
            }
        }
        debug!("configured forces: {:?}", forces);
        self.stability.wake();
        Ok(())
    }

    /// Selector form of `configure_forces`: `1` = friction `(mu_s, mu_k)`,
    /// `2` = gravity `(g)`. Unknown selectors change nothing.
    pub fn configure_forces_raw(&mut self, selector: i32, params: &[f64]) -> Result<(), SimError> {
        let forces = ForceConfig::from_selector(selector, params).inspect_err(|e| {
            warn!("ignored force configuration: {}", e);
        })?;
        self.configure_forces(forces)
    }

    /// Integrate every body by `dt`. Non-positive or non-finite `dt` is
    /// rejected and the world is left untouched.
    pub fn step(&mut self, dt: f64) -> Result<(), SimError> {
        integrator::check_dt(dt).inspect_err(|e| warn!("step rejected: {}", e))?;

        let g = self.config.gravity;
        for body in &mut self.bodies {
            seed_acceleration(body, g);
        }
        integrator::step(&mut self.bodies, dt)?;

        self.elapsed += dt;
        self.last_dt = dt;
        self.frames += 1;
        Ok(())
    }

    /// Resolve wall and pair contacts for the current state, then let the
    /// stability detector sample the result.
    pub fn handle_collisions(&mut self) -> CollisionReport {
        let report = collision::handle_collisions(&mut self.bodies, &self.config, self.last_dt);
        self.stability
            .observe(&mut self.bodies, self.elapsed, &self.config);
        report
    }

    /// One frame: `step` then `handle_collisions`. Returns whether the world is at rest.
    pub fn advance(&mut self, dt: f64) -> Result<bool, SimError> {
        self.step(dt)?;
        self.handle_collisions();
        Ok(self.is_at_rest())
    }

    /// Snapshot of one body, `None` if no body has this id
    pub fn get_object_state(&self, id: ObjectId) -> Option<ObjectState> {
        self.body(id).map(Body::state)
    }

    /// Snapshots of every body
    pub fn snapshots(&self) -> Vec<ObjectState> {
        self.bodies.iter().map(Body::state).collect()
    }

    /// Overwrite position and velocity together. Acceleration is recomputed
    /// on the next step.
    pub fn update_object_state(
        &mut self,
        id: ObjectId,
        pos: Vector2D,
        vel: Vector2D,
    ) -> Result<(), SimError> {
        if !(pos.is_finite() && vel.is_finite()) {
            return Err(SimError::InvalidState(id));
        }
        let body = self.body_mut(id)?;
        body.pos = pos;
        body.vel = vel;
        self.stability.wake();
        Ok(())
    }

    /// Set a force that keeps acting on the body every step until replaced.
    /// Pass zero to remove it.
    pub fn set_custom_force(&mut self, id: ObjectId, force: Vector2D) -> Result<(), SimError> {
        if !force.is_finite() {
            return Err(SimError::InvalidState(id));
        }
        self.body_mut(id)?.force = force;
        self.stability.wake();
        Ok(())
    }

    /// Instant change of momentum: `v += impulse / m`
    pub fn apply_impulse(&mut self, id: ObjectId, impulse: Vector2D) -> Result<(), SimError> {
        if !impulse.is_finite() {
            return Err(SimError::InvalidState(id));
        }
        let body = self.body_mut(id)?;
        body.vel += impulse / body.mass;
        self.stability.wake();
        Ok(())
    }

    fn body_mut(&mut self, id: ObjectId) -> Result<&mut Body, SimError> {
        match self.index.get(&id) {
            Some(&i) => Ok(&mut self.bodies[i]),
            None => Err(SimError::NotFound(id)),
        }
    }
}

/// Acceleration from gravity plus the body's own custom force
fn seed_acceleration(body: &mut Body, g: f64) {
    body.acc = Vector2D::ZERO;
    apply_gravity(body, g);
    let force = body.force;
    if force != Vector2D::ZERO {
        apply_custom_force(body, force);
    }
}
