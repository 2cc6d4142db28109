//! Locked access to one world from several threads
//!
//! `World` itself is a plain single-writer structure. When more than one
//! thread has to touch the same world, wrap it in a `SharedWorld` so every
//! step, collision pass and query runs under the same lock.

use crate::body::ObjectState;
use crate::error::{ObjectId, SimError};
use crate::world::World;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct SharedWorld {
    inner: Arc<Mutex<World>>,
}

impl SharedWorld {
    pub fn new(world: World) -> Self {
        Self {
            inner: Arc::new(Mutex::new(world)),
        }
    }

    /// Run `f` with exclusive access to the world
    pub fn with<R>(&self, f: impl FnOnce(&mut World) -> R) -> Result<R, SimError> {
        let mut world = self.inner.lock().map_err(|_| SimError::LockPoisoned)?;
        Ok(f(&mut world))
    }

    /// Step, resolve collisions and snapshot every body as one atomic frame
    pub fn frame(&self, dt: f64) -> Result<Vec<ObjectState>, SimError> {
        self.with(|world| {
            world.advance(dt)?;
            Ok(world.snapshots())
        })?
    }

    pub fn get_object_state(&self, id: ObjectId) -> Result<Option<ObjectState>, SimError> {
        self.with(|world| world.get_object_state(id))
    }

    /// Take the world back once no other handle is alive and the lock is not poisoned
    pub fn into_inner(self) -> Option<World> {
        Arc::try_unwrap(self.inner)
            .ok()
            .and_then(|mutex| mutex.into_inner().ok())
    }
}
