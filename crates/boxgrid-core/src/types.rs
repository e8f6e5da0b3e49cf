//! Value types for boxes, derived geometry, and layout output.

use smallvec::SmallVec;

/// A single layout item requesting space in the grid.
///
/// Spans of `0` mean "unspecified" and are resolved during the layout pass:
/// an unspecified column span becomes 1, an unspecified row span is inferred
/// from the content height hints.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxItem {
    /// Requested column span (`0` = unspecified).
    pub col_span: u32,
    /// Requested row span (`0` = unspecified).
    pub row_span: u32,
    /// Measured height of the box's sizing reference, if one was resolvable.
    /// An unresolvable reference is represented as `None`, never an error.
    pub min_content_height: Option<f64>,
    /// Heights of the box's own content, summed to infer the row span when
    /// neither an explicit span nor a min-content height is available.
    pub child_heights: SmallVec<[f64; 4]>,
}

impl BoxItem {
    /// Create a box with explicit spans.
    pub fn new(col_span: u32, row_span: u32) -> Self {
        Self {
            col_span,
            row_span,
            ..Default::default()
        }
    }

    /// Create a box with no span information at all.
    pub fn unspecified() -> Self {
        Self::default()
    }

    /// Set the measured min-content height.
    pub fn with_min_content_height(mut self, height: f64) -> Self {
        self.min_content_height = Some(height);
        self
    }

    /// Set the content heights used for row-span inference.
    pub fn with_child_heights(mut self, heights: impl IntoIterator<Item = f64>) -> Self {
        self.child_heights = heights.into_iter().collect();
        self
    }
}

/// Derived grid geometry, immutable for the duration of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridParams {
    /// Column count; always a positive multiple of the configured
    /// `min_col_span`.
    pub columns: u32,
    /// Column width in pixels, at least the configured minimum.
    pub col_width: f64,
    /// Row height in pixels; equals `col_width` when configured as auto.
    pub row_height: f64,
    /// Horizontal offset centering the grid within the container. May be
    /// negative when `min_col_width` forces the grid wider than the
    /// container.
    pub horizontal_offset: f64,
}

/// Computed output for a single box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Assigned grid cell column.
    pub x: u32,
    /// Assigned grid cell row.
    pub y: u32,
    /// Effective column span after resolution and clamping.
    pub col_span: u32,
    /// Effective row span after resolution.
    pub row_span: u32,
    /// Pixel offset from the container top.
    pub top: f64,
    /// Pixel offset from the container left.
    pub left: f64,
    /// Pixel width.
    pub width: f64,
    /// Pixel height.
    pub height: f64,
    /// The box sits in the first grid row.
    pub is_row_first: bool,
    /// The box sits in the first grid column.
    pub is_column_first: bool,
    /// The box's span reaches the last grid column.
    pub is_column_last: bool,
}

impl Placement {
    /// The cell rectangle `(x, y, col_span, row_span)` of this placement
    /// intersects another placement's rectangle.
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.x + other.col_span
            && other.x < self.x + self.col_span
            && self.y < other.y + other.row_span
            && other.y < self.y + self.row_span
    }
}

/// Aggregate output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    /// Geometry the pass was computed against.
    pub params: GridParams,
    /// One placement per input box, in input order.
    pub placements: Vec<Placement>,
    /// Number of grid rows touched by any placement.
    pub rows: u32,
    /// Total container height in pixels, never negative.
    pub container_height: f64,
}
