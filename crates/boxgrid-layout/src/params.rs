//! Per-pass grid geometry derivation.

use boxgrid_core::{GridConfig, GridParams};

/// Derive the grid geometry for one pass from the container width.
///
/// The column count starts from `min_columns`, is raised by the
/// width-driven estimate when `min_col_width` is set, is floored to a
/// multiple of `min_col_span`, and is finally clamped to `max_columns`.
/// With a validated configuration the result is always at least 1.
///
/// A negative width is treated as zero; the grid cannot be narrower than
/// empty.
pub fn derive_params(width: f64, config: &GridConfig) -> GridParams {
    let width = width.max(0.0);

    let mut columns = config.min_columns;
    if config.min_col_width > 0.0 {
        columns = columns.max((width / config.min_col_width).floor() as u32);
    }
    columns = columns / config.min_col_span * config.min_col_span;
    columns = columns.min(config.max_columns);

    let col_width = (width / columns as f64).floor().max(config.min_col_width);
    let row_height = if config.row_height > 0.0 {
        config.row_height
    } else {
        col_width
    };
    let horizontal_offset = ((width - columns as f64 * col_width) / 2.0).floor();

    GridParams {
        columns,
        col_width,
        row_height,
        horizontal_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_columns_without_width_estimate() {
        let config = GridConfig::default().with_columns(4, u32::MAX);
        let params = derive_params(1000.0, &config);
        assert_eq!(params.columns, 4);
        assert!((params.col_width - 250.0).abs() < 0.001);
    }

    #[test]
    fn test_width_driven_column_estimate() {
        let config = GridConfig::default().with_min_col_width(100.0);
        // floor(950 / 100) = 9 columns.
        let params = derive_params(950.0, &config);
        assert_eq!(params.columns, 9);
        // floor(950 / 9) = 105 >= min_col_width.
        assert!((params.col_width - 105.0).abs() < 0.001);
    }

    #[test]
    fn test_columns_are_multiple_of_min_col_span() {
        let config = GridConfig::default()
            .with_min_col_span(3)
            .with_columns(3, u32::MAX)
            .with_min_col_width(100.0);
        for width in [0.0, 150.0, 400.0, 799.0, 800.0, 1234.0] {
            let params = derive_params(width, &config);
            assert_eq!(params.columns % 3, 0, "width {width}");
            assert!(params.columns >= 3);
        }
    }

    #[test]
    fn test_max_columns_clamp() {
        let config = GridConfig::default()
            .with_min_col_width(50.0)
            .with_columns(1, 6);
        let params = derive_params(1000.0, &config);
        assert_eq!(params.columns, 6);
    }

    #[test]
    fn test_auto_row_height_equals_col_width() {
        let config = GridConfig::default().with_columns(5, 5);
        let params = derive_params(600.0, &config);
        assert!((params.col_width - 120.0).abs() < 0.001);
        assert!((params.row_height - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_fixed_row_height() {
        let config = GridConfig::default().with_row_height(80.0);
        let params = derive_params(500.0, &config);
        assert!((params.row_height - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_centering_offset() {
        // 1000px over 3 columns: col_width = 333, remainder 1px, offset 0.
        let config = GridConfig::default().with_columns(3, 3);
        let params = derive_params(1000.0, &config);
        assert!((params.horizontal_offset - 0.0).abs() < 0.001);

        // 1004px over 3 columns: col_width = 334, 2px spare, offset 1.
        let params = derive_params(1004.0, &config);
        assert!((params.col_width - 334.0).abs() < 0.001);
        assert!((params.horizontal_offset - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_negative_offset_when_min_width_forces_overflow() {
        // 2 columns of at least 200px inside a 300px container: the grid is
        // 400px wide and centers with a negative offset.
        let config = GridConfig::default()
            .with_columns(2, 2)
            .with_min_col_width(200.0);
        let params = derive_params(300.0, &config);
        assert!((params.col_width - 200.0).abs() < 0.001);
        assert!((params.horizontal_offset - -50.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_width_container() {
        let params = derive_params(0.0, &GridConfig::default());
        assert_eq!(params.columns, 1);
        assert!((params.col_width - 0.0).abs() < 0.001);
        assert!((params.row_height - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_negative_width_clamped_to_zero() {
        let params = derive_params(-500.0, &GridConfig::default());
        assert_eq!(params.columns, 1);
        assert!((params.col_width - 0.0).abs() < 0.001);
    }
}
