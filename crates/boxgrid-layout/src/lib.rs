//! Grid packing and layout computation for boxgrid.
//!
//! This crate implements the two algorithmic components of the engine:
//!
//! 1. **Occupancy grid**: first-fit placement of spanning boxes in
//!    row-major scan order, without overlap.
//! 2. **Layout pass**: derives grid geometry from the container width,
//!    resolves each box's effective span, places it, and emits pixel
//!    geometry plus the aggregate container height.
//!
//! # Example
//!
//! ```
//! use boxgrid_core::{BoxItem, GridConfig};
//! use boxgrid_layout::{compute_layout, NoAdjust};
//!
//! let config = GridConfig::default().with_columns(3, 3);
//! let boxes = vec![BoxItem::new(1, 1), BoxItem::new(2, 1), BoxItem::new(1, 1)];
//!
//! let result = compute_layout(300.0, &boxes, &config, &NoAdjust).unwrap();
//! assert_eq!(result.placements[0].x, 0);
//! assert_eq!(result.placements[1].x, 1);
//! assert_eq!(result.placements[2].x, 0);
//! # assert_eq!(result.rows, 2);
//! ```

mod adjust;
mod compute;
mod grid;
mod params;

pub use adjust::{NoAdjust, SpanAdjuster};
pub use compute::compute_layout;
pub use grid::OccupancyGrid;
pub use params::derive_params;
