//! Per-container pass orchestration.

use std::time::Duration;

use boxgrid_core::{BoxItem, ConfigError, GridConfig, HookError, LayoutError, LayoutResult};
use boxgrid_layout::{compute_layout, NoAdjust, SpanAdjuster};
use tracing::debug;

/// Lifecycle hooks invoked immediately before and after each layout pass.
///
/// Both default to no-ops. A hook error aborts the pass and propagates to
/// the caller; the previously committed result stays in place.
pub trait PassHooks {
    /// Called before the pass computes anything.
    fn before_pass(&mut self) -> Result<(), HookError> {
        Ok(())
    }

    /// Called with the freshly computed result, before it is committed.
    fn after_pass(&mut self, result: &LayoutResult) -> Result<(), HookError> {
        let _ = result;
        Ok(())
    }
}

/// The no-op hooks used when none are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl PassHooks for NoHooks {}

/// Runs layout passes for one container.
///
/// Owns the container's configuration (validated once, at construction),
/// its optional span adjuster and lifecycle hooks, and the last committed
/// result. Passes are serialized per container by the `&mut self`
/// receiver; the commit is transactional, so observers only ever see a
/// complete pass.
pub struct LayoutController {
    config: GridConfig,
    adjuster: Box<dyn SpanAdjuster + Send>,
    hooks: Box<dyn PassHooks + Send>,
    last: Option<LayoutResult>,
    ready: bool,
}

impl LayoutController {
    /// Create a controller, validating the configuration eagerly.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            adjuster: Box::new(NoAdjust),
            hooks: Box::new(NoHooks),
            last: None,
            ready: false,
        })
    }

    /// Install a span adjuster.
    pub fn with_adjuster(mut self, adjuster: impl SpanAdjuster + Send + 'static) -> Self {
        self.adjuster = Box::new(adjuster);
        self
    }

    /// Install lifecycle hooks.
    pub fn with_hooks(mut self, hooks: impl PassHooks + Send + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// The container's configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Quiet period to use when debouncing this container's resize
    /// triggers.
    pub fn resize_delay(&self) -> Duration {
        self.config.resize_delay
    }

    /// Whether resize triggers should re-run the layout at all.
    pub fn resize_enabled(&self) -> bool {
        self.config.resize
    }

    /// Run one layout pass and commit its result.
    ///
    /// Hook or adjuster failures abort the pass before commit: the result
    /// of the previous successful pass, if any, remains visible.
    pub fn perform_pass(
        &mut self,
        width: f64,
        boxes: &[BoxItem],
    ) -> Result<&LayoutResult, LayoutError> {
        self.hooks.before_pass().map_err(|source| LayoutError::Hook {
            hook: "before_pass",
            source,
        })?;

        let result = compute_layout(width, boxes, &self.config, self.adjuster.as_ref())?;

        self.hooks
            .after_pass(&result)
            .map_err(|source| LayoutError::Hook {
                hook: "after_pass",
                source,
            })?;

        debug!(
            width,
            boxes = boxes.len(),
            columns = result.params.columns,
            rows = result.rows,
            "layout pass committed"
        );
        self.ready = true;
        Ok(self.last.insert(result))
    }

    /// True once the first pass has completed successfully.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The last committed result, if any pass has succeeded.
    pub fn last_result(&self) -> Option<&LayoutResult> {
        self.last.as_ref()
    }
}
