//! One full layout pass: span resolution, placement, and aggregation.

use boxgrid_core::{BoxItem, GridConfig, GridParams, LayoutError, LayoutResult, Placement};

use crate::adjust::SpanAdjuster;
use crate::grid::OccupancyGrid;
use crate::params::derive_params;

/// Resolve a box's effective spans against the derived grid geometry.
///
/// Resolution order: clamp the requested column span to the column count,
/// apply the column adjuster, infer the row span from the min-content
/// height, apply the row adjuster, then fall back to the summed child
/// heights if the row span is still unspecified. Both spans are floored at
/// 1 at the end; a zero-area box would never mark a cell and every
/// subsequent box would land on top of it.
fn resolve_spans(
    item: &BoxItem,
    params: &GridParams,
    adjuster: &dyn SpanAdjuster,
) -> Result<(u32, u32), LayoutError> {
    let mut col_span = item.col_span.min(params.columns);
    col_span = adjuster
        .adjust_col_span(col_span, params.columns)
        .map_err(|source| LayoutError::Adjust { source })?;
    // Re-clamp: the adjuster may have exceeded the column count, which
    // would make the first-fit scan diverge.
    col_span = col_span.min(params.columns).max(1);

    let mut row_span = item.row_span;
    if let Some(height) = item.min_content_height.filter(|h| h.is_finite()) {
        row_span = row_span.max(rows_for_height(height, params.row_height));
    }
    row_span = adjuster
        .adjust_row_span(row_span, params.columns)
        .map_err(|source| LayoutError::Adjust { source })?;
    if row_span == 0 {
        let total: f64 = item.child_heights.iter().filter(|h| h.is_finite()).sum();
        row_span = rows_for_height(total, params.row_height);
    }

    Ok((col_span, row_span.max(1)))
}

/// Rows needed to cover `height` pixels. A degenerate row height (zero-width
/// container with no minimum column width) cannot hold any content height;
/// the hint is treated as absent.
fn rows_for_height(height: f64, row_height: f64) -> u32 {
    if row_height > 0.0 {
        (height / row_height).ceil() as u32
    } else {
        0
    }
}

/// Run one complete layout pass.
///
/// Validates the configuration, derives the grid geometry, resolves and
/// places every box in input order, and aggregates the container height.
/// The occupancy grid is rebuilt from empty each call, so for a fixed
/// width, box list, and configuration the result is exactly reproducible.
pub fn compute_layout(
    width: f64,
    boxes: &[BoxItem],
    config: &GridConfig,
    adjuster: &dyn SpanAdjuster,
) -> Result<LayoutResult, LayoutError> {
    config.validate()?;
    if !width.is_finite() {
        return Err(LayoutError::InvalidWidth { width });
    }

    let params = derive_params(width, config);
    let adjust = config.adjust;

    let mut grid = OccupancyGrid::new();
    let mut placements = Vec::with_capacity(boxes.len());

    for item in boxes {
        let (col_span, row_span) = resolve_spans(item, &params, adjuster)?;
        let (x, y) = grid.place(params.columns, col_span, row_span);

        placements.push(Placement {
            x,
            y,
            col_span,
            row_span,
            top: (y as f64 * params.row_height + adjust.top + config.offset_top).floor(),
            left: params.horizontal_offset
                + (x as f64 * params.col_width + adjust.left + config.offset_left).floor(),
            width: (params.col_width * col_span as f64).floor() + adjust.right - adjust.left,
            height: (params.row_height * row_span as f64).floor() + adjust.bottom - adjust.top,
            is_row_first: y == 0,
            is_column_first: x == 0,
            is_column_last: x + col_span == params.columns,
        });
    }

    let rows = grid.cell_len().div_ceil(params.columns as usize) as u32;
    let container_height =
        (rows as f64 * params.row_height + config.offset_top + config.offset_grid_height).max(0.0);

    Ok(LayoutResult {
        params,
        placements,
        rows,
        container_height,
    })
}
