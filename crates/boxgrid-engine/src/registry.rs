//! Registry mapping container identities to their layout controllers.
//!
//! One entry per active container, created when the container first
//! attaches and removed on explicit teardown. Iteration follows attach
//! order.

use boxgrid_core::{ConfigError, GridConfig};
use indexmap::IndexMap;
use tracing::debug;

use crate::controller::LayoutController;

/// Opaque identity of an attached container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub u64);

/// All attached containers and their controllers.
#[derive(Default)]
pub struct ContainerRegistry {
    containers: IndexMap<ContainerId, LayoutController>,
    next_id: u64,
}

impl ContainerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new container with the given configuration, allocating its
    /// identity. Fails if the configuration is invalid.
    pub fn attach(&mut self, config: GridConfig) -> Result<ContainerId, ConfigError> {
        let controller = LayoutController::new(config)?;
        Ok(self.insert(controller))
    }

    /// Attach a pre-built controller (configured with an adjuster or
    /// hooks), allocating its identity.
    pub fn insert(&mut self, controller: LayoutController) -> ContainerId {
        let id = ContainerId(self.next_id);
        self.next_id += 1;
        self.containers.insert(id, controller);
        debug!(id = id.0, "container attached");
        id
    }

    /// Get a container's controller.
    pub fn get(&self, id: ContainerId) -> Option<&LayoutController> {
        self.containers.get(&id)
    }

    /// Get a container's controller mutably, for running passes.
    pub fn get_mut(&mut self, id: ContainerId) -> Option<&mut LayoutController> {
        self.containers.get_mut(&id)
    }

    /// Tear down a container, dropping its controller and last result.
    /// Returns the controller if the container was attached.
    pub fn detach(&mut self, id: ContainerId) -> Option<LayoutController> {
        let removed = self.containers.shift_remove(&id);
        if removed.is_some() {
            debug!(id = id.0, "container detached");
        }
        removed
    }

    /// Whether the container is attached.
    pub fn contains(&self, id: ContainerId) -> bool {
        self.containers.contains_key(&id)
    }

    /// Number of attached containers.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Whether no containers are attached.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Iterate over attached containers in attach order.
    pub fn iter(&self) -> impl Iterator<Item = (ContainerId, &LayoutController)> {
        self.containers.iter().map(|(id, c)| (*id, c))
    }

    /// Iterate mutably, for driving passes across all containers.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ContainerId, &mut LayoutController)> {
        self.containers.iter_mut().map(|(id, c)| (*id, c))
    }
}
