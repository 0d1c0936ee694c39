//! The failure primitive the harness reports through.
//!
//! Rust tests fail by panicking, so failing a test is a `#[track_caller]` panic carrying a single-line message.
//! The harness's own entry points are `#[track_caller]` as well, so a harness failure points at the line of the
//! test function that called into the harness.

use std::fmt::Display;

use ddtest_core::HarnessError;

/// Fail the current test with `message`.
///
/// # Panics
///
/// Always panics with the provided `message`.
#[cold]
#[track_caller]
pub fn fail(message: impl Display) -> ! {
    panic!("{message}");
}

/// Fail the current test with the canonical message of `err`.
#[cold]
#[track_caller]
pub fn fail_with(err: &HarnessError) -> ! {
    fail(err)
}

/// Best-effort text of a panic payload (`&str` or `String`), for logs and tests.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    #[should_panic(expected = "explicit failure")]
    fn test_fail_panics_with_message() {
        fail("explicit failure");
    }

    #[test]
    fn test_fail_with_uses_canonical_message() {
        let payload = panic::catch_unwind(|| fail_with(&HarnessError::NoTestCases)).expect_err("fail must panic");
        assert_eq!(
            panic_message(payload.as_ref()),
            Some("There are no test cases. Have you forgotten to arrange them?")
        );
    }

    #[test]
    fn test_panic_message_unknown_payload() {
        let payload: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), None);
    }
}
