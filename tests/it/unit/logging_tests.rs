//! Unit tests for logging setup.
//!
//! Only one test in the binary may install the global subscriber.

use paintcrop::logging;

#[test]
fn test_second_init_is_an_error_not_a_panic() {
    let _ = logging::init("paintcrop=debug");
    assert!(logging::init("paintcrop=debug").is_err());
}
