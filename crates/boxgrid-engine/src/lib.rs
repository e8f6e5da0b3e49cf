//! Orchestration layer for boxgrid.
//!
//! Sits between the host (whatever owns the containers and observes resize
//! events) and the pure layout pass in `boxgrid-layout`:
//!
//! - [`LayoutController`] runs passes for one container, transactionally:
//!   a failed pass leaves the previously committed result untouched.
//! - [`ResizeDebouncer`] coalesces bursts of resize triggers into a single
//!   trailing pass.
//! - [`ContainerRegistry`] maps container identities to their controllers,
//!   one entry per active container, with explicit teardown.
//!
//! The host drives everything; nothing here spawns threads or timers.
//!
//! # Example
//!
//! ```
//! use boxgrid_core::{BoxItem, GridConfig};
//! use boxgrid_engine::ContainerRegistry;
//!
//! let mut registry = ContainerRegistry::new();
//! let id = registry.attach(GridConfig::default().with_columns(2, 2)).unwrap();
//!
//! let boxes = vec![BoxItem::new(1, 1); 5];
//! let controller = registry.get_mut(id).unwrap();
//! let result = controller.perform_pass(200.0, &boxes).unwrap();
//! assert_eq!(result.rows, 3);
//! assert!(controller.is_ready());
//! ```

mod controller;
mod debounce;
mod registry;

pub use controller::{LayoutController, NoHooks, PassHooks};
pub use debounce::ResizeDebouncer;
pub use registry::{ContainerId, ContainerRegistry};
