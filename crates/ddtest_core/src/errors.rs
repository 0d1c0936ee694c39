//! Canonical harness failures.
//!
//! These messages are user-facing and golden-tested: keep them single-line and stable.

use thiserror::Error;

use crate::case::TestCase;
use crate::value::ArgTypeMismatch;

/// Message reported when dispatch runs without any arranged case.
pub const NO_TEST_CASES_MSG: &str = "There are no test cases. Have you forgotten to arrange them?";

/// A harness-level violation, as opposed to a failure raised by the test's own act/assert logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// A case's length disagrees with the arity established by the first case.
    #[error("Test case {rendered} has different number of arguments than the previous test cases.")]
    ArityMismatch {
        /// The rejected case, rendered as `[v1, v2, ...]`.
        rendered: String,
        expected: usize,
        actual: usize,
    },

    #[error("{}", NO_TEST_CASES_MSG)]
    NoTestCases,

    #[error("Value cannot be null. (Parameter '{parameter}')")]
    MissingCallback { parameter: &'static str },

    #[error("Callback expects {callback} argument(s) but the test cases have {arity}.")]
    CallbackArity { callback: usize, arity: usize },

    #[error("Argument {position} of test case {case} is {actual}, which cannot be passed as {expected}.")]
    ArgumentType {
        case: usize,
        position: usize,
        expected: &'static str,
        actual: &'static str,
    },
}

impl HarnessError {
    pub fn arity_mismatch(case: &TestCase, expected: usize) -> Self {
        HarnessError::ArityMismatch {
            rendered: case.to_string(),
            expected,
            actual: case.len(),
        }
    }

    pub fn argument_type(case: usize, position: usize, mismatch: ArgTypeMismatch) -> Self {
        HarnessError::ArgumentType {
            case,
            position,
            expected: mismatch.expected,
            actual: mismatch.actual,
        }
    }
}
