use alloc::string::String;
use alloc::sync::Arc;

use crate::Throttle;
use crate::grid::VirtualGrid;

/// A callback fired when the rendered slice may have changed (geometry measured or reset, window
/// recomputed, item count changed).
pub type OnChangeCallback = Arc<dyn Fn(&VirtualGrid) + Send + Sync>;

/// Configuration for [`crate::VirtualGrid`].
///
/// Cheap to clone: the callback lives in an `Arc`.
pub struct VirtualGridOptions {
    /// Extra rows rendered above and below the viewport.
    pub tolerance: usize,

    /// Window used to collapse scroll bursts into one recomputation.
    pub throttle_delay_ms: u64,

    /// Styling hook for the item container, passed through to [`crate::Rendered`].
    pub class_name: String,

    pub on_change: Option<OnChangeCallback>,
}

impl Clone for VirtualGridOptions {
    fn clone(&self) -> Self {
        Self {
            tolerance: self.tolerance,
            throttle_delay_ms: self.throttle_delay_ms,
            class_name: self.class_name.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl Default for VirtualGridOptions {
    fn default() -> Self {
        Self {
            tolerance: 0,
            throttle_delay_ms: Throttle::DEFAULT_DELAY_MS,
            class_name: String::new(),
            on_change: None,
        }
    }
}

impl VirtualGridOptions {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: usize) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_throttle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.throttle_delay_ms = delay_ms;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&VirtualGrid) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for VirtualGridOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualGridOptions")
            .field("tolerance", &self.tolerance)
            .field("throttle_delay_ms", &self.throttle_delay_ms)
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}
