//! Unit tests for perf module.

use paintcrop::perf::{self, ScopedTimer};

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping should not warn
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_profiling_toggle() {
    let before = perf::is_profiling_enabled();
    perf::set_profiling_enabled(true);
    assert!(perf::is_profiling_enabled());
    perf::set_profiling_enabled(false);
    assert!(!perf::is_profiling_enabled());
    perf::set_profiling_enabled(before);
}

#[test]
fn test_profile_scope_macro_compiles_in_any_build() {
    fn hot_path() -> u32 {
        paintcrop::profile_scope!("test_hot_path");
        paintcrop::profile_scope!("test_hot_path_threshold", 5.0);
        42
    }
    assert_eq!(hot_path(), 42);
}
