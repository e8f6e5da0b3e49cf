//! Span adjustment hooks.

use boxgrid_core::AdjustError;

/// Capability for overriding a box's resolved spans.
///
/// Each method receives the span resolved so far and the derived column
/// count, and returns the span to use instead. The default implementations
/// return the input unchanged, so implementors override only the dimension
/// they care about. A returned error aborts the whole pass.
///
/// A column span returned here is still clamped to the column count
/// afterwards; the packer's termination does not depend on adjuster
/// behavior.
pub trait SpanAdjuster {
    /// Override the column span for one box.
    fn adjust_col_span(&self, col_span: u32, columns: u32) -> Result<u32, AdjustError> {
        let _ = columns;
        Ok(col_span)
    }

    /// Override the row span for one box.
    fn adjust_row_span(&self, row_span: u32, columns: u32) -> Result<u32, AdjustError> {
        let _ = columns;
        Ok(row_span)
    }
}

/// The no-op adjuster used when no hook is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdjust;

impl SpanAdjuster for NoAdjust {}
