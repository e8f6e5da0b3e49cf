//! Core types for the boxgrid layout engine.
//!
//! This crate defines the value types shared across the workspace: box
//! descriptors, the derived grid geometry, per-box placements, the
//! configuration surface, and the error types. It contains no algorithmic
//! content; the packing and layout passes live in `boxgrid-layout`.

pub mod config;
pub mod errors;
pub mod types;

pub use config::{EdgeAdjust, GridConfig};
pub use errors::{AdjustError, ConfigError, HookError, LayoutError};
pub use types::{BoxItem, GridParams, LayoutResult, Placement};
