//! The data-driven test harness.
//!
//! A [`DataDrivenTest`] collects test cases under an arity invariant, then runs one act/assert callback per case.
//!
//! ## Arrangement
//!
//! - The first arranged case establishes the arity. Every later case must have the same length; a mismatching case
//!   is rejected and reported with the canonical "different number of arguments" message.
//! - Cases come from tuples, producers, iterables, or the `#[case(...)]` annotations of the running
//!   `#[data_driven]` test (see [`crate::resolver`]).
//!
//! ## Dispatch
//!
//! - Cases run in arrangement order and dispatch never mutates the case list.
//! - A panic raised by the callback is resumed with its original payload after logging which case failed. The
//!   panic hook has already reported the original message and location, so the failure reads exactly like a
//!   failure of that one case written inline in the test. Remaining cases do not run.
//! - Harness-level violations fail through [`crate::testing::fail`] and are attributed to the calling test.

use std::panic::{self, AssertUnwindSafe};

use ddtest_core::{HarnessError, IntoTestCase, TestCase};

use crate::config::HarnessConfig;
use crate::dispatch::ActAndAssert;
use crate::resolver::{self, CaseSource};
use crate::testing;

/// Parameter name reported when the untyped dispatch receives no callback.
const CALLBACK_PARAMETER: &str = "act_and_assert";

/// A data-driven test: arranged cases plus the callback dispatch.
///
/// ```rust
/// use ddtest::DataDrivenTest;
///
/// DataDrivenTest::new()
///     .arrange((1, 1, 2))
///     .arrange((1, 2, 3))
///     .act_and_assert(|a: i32, b: i32, expected: i32| assert_eq!(a + b, expected));
/// ```
#[derive(Debug, Default)]
pub struct DataDrivenTest {
    cases: Vec<TestCase>,
    arity: Option<usize>,
    config: HarnessConfig,
}

impl DataDrivenTest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HarnessConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The arranged cases, in arrangement order.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// The argument count shared by all cases; `None` until the first case is arranged.
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    // ========================================================================
    // Arrangement
    // ========================================================================

    /// Arrange one test case.
    ///
    /// # Panics
    ///
    /// Fails the test if the case's length differs from the arity of the previously arranged cases.
    #[track_caller]
    pub fn arrange(mut self, case: impl IntoTestCase) -> Self {
        if let Err(err) = self.try_arrange(case) {
            testing::fail_with(&err);
        }
        self
    }

    /// Arrange the case built by `producer`, calling it now.
    #[track_caller]
    pub fn arrange_with<C, P>(self, producer: P) -> Self
    where
        C: IntoTestCase,
        P: FnOnce() -> C,
    {
        self.arrange(producer())
    }

    /// Arrange every case of `cases`, in iteration order.
    #[track_caller]
    pub fn arrange_many<I>(mut self, cases: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoTestCase,
    {
        for case in cases {
            if let Err(err) = self.try_arrange(case) {
                testing::fail_with(&err);
            }
        }
        self
    }

    /// Arrange every case of the sequence built by `producer`, calling it now.
    #[track_caller]
    pub fn arrange_many_with<I, P>(self, producer: P) -> Self
    where
        I: IntoIterator,
        I::Item: IntoTestCase,
        P: FnOnce() -> I,
    {
        self.arrange_many(producer())
    }

    /// Arrange the `#[case(...)]` tuples of the running `#[data_driven]` test.
    ///
    /// The frame is picked with [`HarnessConfig::skip_frames`]. When nothing resolves, a warning is logged and no
    /// case is arranged; dispatch then fails with the "no test cases" message.
    #[track_caller]
    pub fn arrange_from_declared_cases(self) -> Self {
        match resolver::resolve(self.config.skip_frames) {
            Some(source) => self.arrange_declared(source),
            None => {
                tracing::warn!(
                    skip_frames = self.config.skip_frames,
                    depth = resolver::depth(),
                    "no #[data_driven] test resolved; no declared cases arranged"
                );
                self
            }
        }
    }

    /// Arrange the declared tuples of `source`, in declaration order.
    #[track_caller]
    pub fn arrange_declared(self, source: &CaseSource) -> Self {
        tracing::debug!(function = %source.qualified_name(), "arranging declared cases");
        self.arrange_many(source.cases())
    }

    /// Arrange one case without failing the test.
    ///
    /// A rejected case is not added and the harness stays usable.
    pub fn try_arrange(&mut self, case: impl IntoTestCase) -> Result<&mut Self, HarnessError> {
        let case = case.into_test_case();
        let arity = *self.arity.get_or_insert(case.len());
        if case.len() != arity {
            return Err(HarnessError::arity_mismatch(&case, arity));
        }

        tracing::debug!(index = self.cases.len(), arity, case = %case, "arranged test case");
        self.cases.push(case);
        Ok(self)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Call `act_and_assert` once per arranged case, in arrangement order.
    ///
    /// # Panics
    ///
    /// - Fails the test if no case is arranged, if the callback's parameter count differs from the arity, or if a
    ///   value cannot be converted to the declared parameter type.
    /// - Resumes any panic raised by the callback, unchanged.
    #[track_caller]
    pub fn act_and_assert<Args, F>(&self, mut act_and_assert: F)
    where
        F: ActAndAssert<Args>,
    {
        self.ensure_cases();
        if let Some(arity) = self.arity {
            if arity != F::ARITY {
                testing::fail_with(&HarnessError::CallbackArity {
                    callback: F::ARITY,
                    arity,
                });
            }
        }

        self.run_cases(|case, index| act_and_assert.invoke(case, index));
    }

    /// Call `act_and_assert` once per arranged case with the case's values as an untyped list.
    ///
    /// # Panics
    ///
    /// - Fails the test immediately if `act_and_assert` is `None`, before looking at the cases.
    /// - Fails the test if no case is arranged.
    /// - Resumes any panic raised by the callback, unchanged.
    #[track_caller]
    pub fn act_and_assert_dyn(&self, act_and_assert: Option<&mut dyn FnMut(&TestCase)>) {
        let Some(callback) = act_and_assert else {
            testing::fail_with(&HarnessError::MissingCallback {
                parameter: CALLBACK_PARAMETER,
            });
        };
        self.ensure_cases();

        self.run_cases(|case, _| {
            callback(case);
            Ok(())
        });
    }

    #[track_caller]
    fn ensure_cases(&self) {
        if self.cases.is_empty() {
            testing::fail_with(&HarnessError::NoTestCases);
        }
    }

    /// The shared dispatch loop.
    #[track_caller]
    fn run_cases<F>(&self, mut invoke: F)
    where
        F: FnMut(&TestCase, usize) -> Result<(), HarnessError>,
    {
        let span = tracing::debug_span!("act_and_assert", case_count = self.cases.len(), arity = ?self.arity);
        let _entered = span.enter();

        for (index, case) in self.cases.iter().enumerate() {
            if self.config.trace_cases {
                tracing::trace!(index, case = %case, "invoking test case");
            }

            match panic::catch_unwind(AssertUnwindSafe(|| invoke(case, index))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => testing::fail_with(&err),
                Err(payload) => {
                    tracing::error!(
                        index,
                        case = %case,
                        message = testing::panic_message(payload.as_ref()).unwrap_or("<non-string panic payload>"),
                        "test case failed"
                    );
                    panic::resume_unwind(payload);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::panic_message;
    use ddtest_core::Arg;
    use std::cell::Cell;

    fn failure_of(f: impl FnOnce()) -> String {
        let payload = panic::catch_unwind(AssertUnwindSafe(f)).expect_err("expected a failure");
        panic_message(payload.as_ref())
            .expect("failure payload should be a string")
            .to_string()
    }

    #[test]
    fn test_new_has_no_arity() {
        let sut = DataDrivenTest::new();
        assert!(sut.is_empty());
        assert_eq!(sut.arity(), None);
        assert_eq!(sut.config(), &HarnessConfig::default());
    }

    #[test]
    fn test_with_config_keeps_skip_frames() {
        let sut = DataDrivenTest::with_config(HarnessConfig::new().with_skip_frames(123));
        assert_eq!(sut.config().skip_frames, 123);
    }

    #[test]
    fn test_arrange_with_no_arguments() {
        let sut = DataDrivenTest::new().arrange(());

        assert_eq!(sut.len(), 1, "There should only be a single test case");
        assert_eq!(sut.arity(), Some(0), "The test case should not have any arguments");
        assert!(sut.cases()[0].is_empty());
    }

    #[test]
    fn test_arrange_sets_test_cases() {
        let sut = DataDrivenTest::new()
            .arrange(("test", "case"))
            .arrange(("test 2", "case 2"))
            .arrange(("test 3", "case 3"));

        assert_eq!(sut.len(), 3, "There should be three test cases");
        assert_eq!(sut.arity(), Some(2), "Each test case should have two arguments");
        assert_eq!(sut.cases()[1][1].rendered(), "case 2");
    }

    #[test]
    fn test_arrange_runtime_built_case() {
        let sut = DataDrivenTest::new().arrange(vec![Arg::new("test"), Arg::new("case")]);

        assert_eq!(sut.arity(), Some(2));
        assert_eq!(sut.cases()[0][0].downcast_ref::<&str>(), Some(&"test"));
    }

    #[test]
    fn test_arrange_with_defers_to_arrangement() {
        let built = Cell::new(false);
        let sut = DataDrivenTest::new().arrange_with(|| {
            built.set(true);
            ("test", "case")
        });

        assert!(built.get());
        assert_eq!(sut.len(), 1);
        assert_eq!(sut.arity(), Some(2));
    }

    #[test]
    fn test_arrange_fails_on_different_argument_count() {
        let message = failure_of(|| {
            let _ = DataDrivenTest::new().arrange("test case").arrange(("test case", "throws"));
        });

        assert_eq!(
            message,
            "Test case [test case, throws] has different number of arguments than the previous test cases."
        );
    }

    #[test]
    fn test_try_arrange_rejects_without_adding() {
        let mut sut = DataDrivenTest::new();
        sut.try_arrange(("a", "b")).expect("first case");

        let err = sut.try_arrange(("a",)).map(|_| ()).expect_err("expected an error");

        assert!(matches!(err, HarnessError::ArityMismatch { expected: 2, actual: 1, .. }));
        assert_eq!(sut.len(), 1);
        assert_eq!(sut.arity(), Some(2));

        sut.try_arrange(("c", "d")).expect("harness stays usable");
        assert_eq!(sut.len(), 2);
    }

    #[test]
    fn test_arrange_many_sets_test_cases() {
        let sut = DataDrivenTest::new().arrange_many(vec![("test", "case"), ("test 2", "case 2"), ("test 3", "case 3")]);

        assert_eq!(sut.len(), 3);
        assert_eq!(sut.arity(), Some(2));
        assert_eq!(sut.cases()[1][1].rendered(), "case 2");
    }

    #[test]
    fn test_arrange_many_with_producer() {
        let sut = DataDrivenTest::new().arrange_many_with(|| (1..=3).map(|n| (n, n * 2)));

        assert_eq!(sut.len(), 3);
        assert_eq!(sut.cases()[2].to_string(), "[3, 6]");
    }

    #[test]
    fn test_arrange_many_fails_on_different_argument_count() {
        let message = failure_of(|| {
            let _ = DataDrivenTest::new().arrange_many(vec![
                ddtest_core::test_case!["test case"],
                ddtest_core::test_case!["test case", "throws"],
            ]);
        });

        assert_eq!(
            message,
            "Test case [test case, throws] has different number of arguments than the previous test cases."
        );
    }

    #[test]
    fn test_act_and_assert_is_called_in_order() {
        let sut = DataDrivenTest::new()
            .arrange(("test 0", "case 0"))
            .arrange(("test 1", "case 1"));

        let mut call_count = 0;
        sut.act_and_assert(|test: String, expected: String| {
            assert_eq!(test, format!("test {call_count}"));
            assert_eq!(expected, format!("case {call_count}"));
            call_count += 1;
        });

        assert_eq!(call_count, 2, "Act should be called twice");
    }

    #[test]
    fn test_act_and_assert_without_cases() {
        let message = failure_of(|| DataDrivenTest::new().act_and_assert(|_: i32| {}));
        assert_eq!(message, "There are no test cases. Have you forgotten to arrange them?");
    }

    #[test]
    fn test_act_and_assert_callback_arity_mismatch() {
        let sut = DataDrivenTest::new().arrange((1, 2));
        let called = Cell::new(false);

        let message = failure_of(|| sut.act_and_assert(|_: i32| called.set(true)));

        assert_eq!(message, "Callback expects 1 argument(s) but the test cases have 2.");
        assert!(!called.get());
    }

    #[test]
    fn test_act_and_assert_argument_type_mismatch() {
        let sut = DataDrivenTest::new().arrange(1).arrange("two");

        let message = failure_of(|| sut.act_and_assert(|_: i32| {}));

        assert_eq!(message, "Argument 0 of test case 1 is &str, which cannot be passed as i32.");
    }

    #[test]
    fn test_act_and_assert_resumes_callback_panic() {
        let sut = DataDrivenTest::new().arrange("testcase");

        fn invalid_operation(_: String) {
            panic!("invalid operation");
        }

        let message = failure_of(|| sut.act_and_assert(invalid_operation));

        assert_eq!(message, "invalid operation");
    }

    #[test]
    fn test_act_and_assert_dyn_receives_cases() {
        let sut = DataDrivenTest::new().arrange((1, "a")).arrange((2, "b"));
        let mut rendered = Vec::new();

        sut.act_and_assert_dyn(Some(&mut |case: &TestCase| rendered.push(case.to_string())));

        assert_eq!(rendered, vec!["[1, a]", "[2, b]"]);
    }

    #[test]
    fn test_act_and_assert_dyn_without_callback() {
        let message = failure_of(|| DataDrivenTest::new().arrange(1).act_and_assert_dyn(None));
        assert_eq!(message, "Value cannot be null. (Parameter 'act_and_assert')");
    }

    #[test]
    fn test_missing_callback_is_checked_before_cases() {
        let message = failure_of(|| DataDrivenTest::new().act_and_assert_dyn(None));
        assert_eq!(message, "Value cannot be null. (Parameter 'act_and_assert')");
    }
}
