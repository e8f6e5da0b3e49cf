//! Error types for the boxgrid layout engine.

use thiserror::Error;

/// Error returned by a span adjustment hook.
pub type AdjustError = Box<dyn std::error::Error + Send + Sync>;

/// Error returned by a lifecycle hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Errors from configuration validation.
///
/// Validation runs eagerly, before any pass: a configuration that could ever
/// derive a column count of zero would make the first-fit scan loop forever.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_col_span must be at least 1")]
    ZeroMinColSpan,

    #[error("min_columns ({min_columns}) must be at least min_col_span ({min_col_span})")]
    MinColumnsBelowSpan { min_columns: u32, min_col_span: u32 },

    #[error("min_col_span ({min_col_span}) exceeds max_columns ({max_columns})")]
    SpanExceedsMaxColumns { min_col_span: u32, max_columns: u32 },

    #[error("{field} must not be negative, got {value}")]
    NegativeLength { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Errors from a layout pass.
///
/// A pass that fails leaves no partial state behind; the caller keeps
/// whatever result the previous pass committed.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("container width must be finite, got {width}")]
    InvalidWidth { width: f64 },

    #[error("span adjustment failed: {source}")]
    Adjust {
        #[source]
        source: AdjustError,
    },

    #[error("{hook} hook failed: {source}")]
    Hook {
        hook: &'static str,
        #[source]
        source: HookError,
    },
}
