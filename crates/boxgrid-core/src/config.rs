//! Configuration surface for the layout engine.
//!
//! All options are resolved once at setup into a typed struct; nothing is
//! looked up per box. Validation is eager: a pathological configuration is
//! rejected before any pass runs.

use std::time::Duration;

use crate::errors::ConfigError;

/// Signed pixel nudges applied symmetrically to every box's geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeAdjust {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeAdjust {
    /// Uniform adjustment on all four edges.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Grid configuration.
///
/// The only state that survives between layout passes; everything else is
/// recomputed from scratch on every pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Column count is always derived as a multiple of this span, so no
    /// span-aligned box is forced to straddle a non-multiple boundary.
    pub min_col_span: u32,
    /// Lower bound on the derived column count.
    pub min_columns: u32,
    /// Upper bound on the derived column count (`u32::MAX` = unbounded).
    pub max_columns: u32,
    /// Minimum column width in pixels; `0.0` disables the width-driven
    /// column estimate.
    pub min_col_width: f64,
    /// Fixed row height in pixels; `0.0` means auto (square cells: the row
    /// height falls back to the derived column width).
    pub row_height: f64,
    /// Whether resize triggers should re-run the layout at all.
    pub resize: bool,
    /// Quiet period for coalescing resize triggers.
    pub resize_delay: Duration,
    /// Per-box pixel nudges.
    pub adjust: EdgeAdjust,
    /// Pixel offset added to every box's top and to the container height.
    pub offset_top: f64,
    /// Pixel offset added to every box's left.
    pub offset_left: f64,
    /// Pixel offset added to the container height.
    pub offset_grid_height: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_col_span: 1,
            min_columns: 1,
            max_columns: u32::MAX,
            min_col_width: 0.0,
            row_height: 0.0,
            resize: true,
            resize_delay: Duration::from_millis(250),
            adjust: EdgeAdjust::default(),
            offset_top: 0.0,
            offset_left: 0.0,
            offset_grid_height: 0.0,
        }
    }
}

impl GridConfig {
    /// Set the minimum column span.
    pub fn with_min_col_span(mut self, span: u32) -> Self {
        self.min_col_span = span;
        self
    }

    /// Set the column count bounds.
    pub fn with_columns(mut self, min: u32, max: u32) -> Self {
        self.min_columns = min;
        self.max_columns = max;
        self
    }

    /// Set the minimum column width.
    pub fn with_min_col_width(mut self, width: f64) -> Self {
        self.min_col_width = width;
        self
    }

    /// Set a fixed row height (`0.0` = auto).
    pub fn with_row_height(mut self, height: f64) -> Self {
        self.row_height = height;
        self
    }

    /// Set the resize debounce delay.
    pub fn with_resize_delay(mut self, delay: Duration) -> Self {
        self.resize_delay = delay;
        self
    }

    /// Set the per-box pixel nudges.
    pub fn with_adjust(mut self, adjust: EdgeAdjust) -> Self {
        self.adjust = adjust;
        self
    }

    /// Set the container offsets.
    pub fn with_offsets(mut self, top: f64, left: f64, grid_height: f64) -> Self {
        self.offset_top = top;
        self.offset_left = left;
        self.offset_grid_height = grid_height;
        self
    }

    /// Validate the configuration.
    ///
    /// The span/column checks together guarantee that the derived column
    /// count is at least 1 for every container width, which is the
    /// termination precondition of the first-fit scan.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_col_span == 0 {
            return Err(ConfigError::ZeroMinColSpan);
        }
        if self.min_columns < self.min_col_span {
            return Err(ConfigError::MinColumnsBelowSpan {
                min_columns: self.min_columns,
                min_col_span: self.min_col_span,
            });
        }
        if self.min_col_span > self.max_columns {
            return Err(ConfigError::SpanExceedsMaxColumns {
                min_col_span: self.min_col_span,
                max_columns: self.max_columns,
            });
        }

        for (field, value) in [
            ("min_col_width", self.min_col_width),
            ("row_height", self.row_height),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeLength { field, value });
            }
        }

        for (field, value) in [
            ("adjust.top", self.adjust.top),
            ("adjust.right", self.adjust.right),
            ("adjust.bottom", self.adjust.bottom),
            ("adjust.left", self.adjust.left),
            ("offset_top", self.offset_top),
            ("offset_left", self.offset_left),
            ("offset_grid_height", self.offset_grid_height),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_defaults_match_contract() {
        let config = GridConfig::default();
        assert_eq!(config.min_col_span, 1);
        assert_eq!(config.min_columns, 1);
        assert_eq!(config.max_columns, u32::MAX);
        assert_eq!(config.min_col_width, 0.0);
        assert_eq!(config.row_height, 0.0);
        assert!(config.resize);
        assert_eq!(config.resize_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_rejects_zero_min_col_span() {
        let config = GridConfig::default().with_min_col_span(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroMinColSpan)
        ));
    }

    #[test]
    fn test_rejects_min_columns_below_span() {
        // min_columns = 1 with min_col_span = 2 would derive 0 columns at
        // narrow widths.
        let config = GridConfig::default().with_min_col_span(2);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MinColumnsBelowSpan { .. })
        ));
    }

    #[test]
    fn test_rejects_span_exceeding_max_columns() {
        let config = GridConfig::default()
            .with_min_col_span(4)
            .with_columns(4, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpanExceedsMaxColumns { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_lengths() {
        let config = GridConfig::default().with_min_col_width(-10.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeLength {
                field: "min_col_width",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite_offsets() {
        let mut config = GridConfig::default();
        config.offset_top = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "offset_top",
                ..
            })
        ));
    }

    #[test]
    fn test_adjust_can_be_negative() {
        let config = GridConfig::default().with_adjust(EdgeAdjust::uniform(-2.0));
        assert!(config.validate().is_ok());
    }
}
