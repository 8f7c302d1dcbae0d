//! Scoped timing for hot paths.
//!
//! Pointer moves arrive at display rate and crop commits resample a whole
//! bitmap, so both are instrumented with [`profile_scope!`]. The macro
//! compiles to nothing unless the `profiling` feature is enabled.
//!
//! ```
//! fn handle_move() {
//!     profile_scope!("paint_pointer_move");
//!     // ... work ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{trace, warn};

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer: logs on drop, warning when the scope ran past its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    active: bool,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            active: true,
        }
    }

    /// Timer used by `profile_scope!`; inert while profiling is switched off
    pub fn for_profiling(name: &'static str) -> Self {
        Self {
            active: is_profiling_enabled(),
            ..Self::new(name, TARGET_FRAME_MS)
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(
                op = self.name,
                elapsed_ms = elapsed,
                threshold_ms = self.threshold_ms,
                "Slow operation"
            );
        } else {
            trace!(op = self.name, elapsed_ms = elapsed, "Scope timing");
        }
    }
}
