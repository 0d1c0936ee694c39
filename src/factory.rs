//! Shorthand constructors for data-driven tests.
//!
//! The factories start a [`DataDrivenTest`] with the default configuration. Declared cases resolve from the
//! innermost `#[data_driven]` frame no matter how many plain functions sit between the test and the factory, so
//! the factories need no different skip count than direct construction.

use ddtest_core::IntoTestCase;

use crate::harness::DataDrivenTest;

/// Entry points that create a data-driven test and arrange its first cases.
///
/// ```rust
/// use ddtest::TestData;
///
/// TestData::arrange((1, 2, 1))
///     .arrange((3, 4, 3))
///     .act_and_assert(|x: i32, y: i32, expected: i32| assert_eq!(x.min(y), expected));
/// ```
pub struct TestData;

impl TestData {
    pub fn create() -> DataDrivenTest {
        DataDrivenTest::new()
    }

    #[track_caller]
    pub fn arrange(case: impl IntoTestCase) -> DataDrivenTest {
        DataDrivenTest::new().arrange(case)
    }

    #[track_caller]
    pub fn arrange_many<I>(cases: I) -> DataDrivenTest
    where
        I: IntoIterator,
        I::Item: IntoTestCase,
    {
        DataDrivenTest::new().arrange_many(cases)
    }

    #[track_caller]
    pub fn arrange_from_declared_cases() -> DataDrivenTest {
        DataDrivenTest::new().arrange_from_declared_cases()
    }
}

/// The older factory surface, kept for existing callers.
pub struct DataDrivenTestFactory;

impl DataDrivenTestFactory {
    /// Same as [`DataDrivenTest::new`].
    pub fn create() -> DataDrivenTest {
        DataDrivenTest::new()
    }

    #[track_caller]
    pub fn arrange(case: impl IntoTestCase) -> DataDrivenTest {
        DataDrivenTest::new().arrange(case)
    }

    #[track_caller]
    pub fn arrange_test_cases<I>(cases: I) -> DataDrivenTest
    where
        I: IntoIterator,
        I::Item: IntoTestCase,
    {
        DataDrivenTest::new().arrange_many(cases)
    }
}

/// Start a data-driven test with one case.
#[track_caller]
pub fn arrange(case: impl IntoTestCase) -> DataDrivenTest {
    TestData::arrange(case)
}
