#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! ddtest: data-driven tests for Rust
//!
//! Arrange a set of parameter tuples, then run one act/assert routine per tuple. A failing case fails the test
//! exactly as if its assertion had been written inline: same panic message, same panic location.
//!
//! ```rust
//! use ddtest::TestData;
//!
//! TestData::arrange((1, 1, 2))
//!     .arrange((1, 2, 3))
//!     .act_and_assert(|a: i32, b: i32, expected: i32| assert_eq!(a + b, expected));
//! ```
//!
//! Cases can also be declared on the test function:
//!
//! ```rust
//! use ddtest::{DataDrivenTest, data_driven};
//!
//! #[data_driven]
//! #[case("a", 1)]
//! #[case("bb", 2)]
//! fn lengths() {
//!     DataDrivenTest::new()
//!         .arrange_from_declared_cases()
//!         .act_and_assert(|text: String, expected: usize| assert_eq!(text.len(), expected));
//! }
//! # lengths();
//! ```
//!
//! ## Failure Policy
//!
//! - **Harness violations** (mismatched arity, nothing arranged, a missing callback, an argument that cannot be
//!   converted) fail the test through [`testing::fail`] with a single-line message.
//! - **Case failures** raised by the callback propagate unchanged, and the remaining cases do not run.
//! - The `try_*` methods return [`HarnessError`] instead of failing.

// `#[data_driven]` expands to `::ddtest::...` paths, which must also resolve inside this crate's own tests.
extern crate self as ddtest;

pub mod config;
pub mod dispatch;
pub mod factory;
pub mod harness;
pub mod logging;
pub mod resolver;
pub mod testing;

pub use ddtest_core::errors::NO_TEST_CASES_MSG;
pub use ddtest_core::{Arg, ArgTypeMismatch, FromArg, HarnessError, IntoArg, IntoTestCase, TestCase};
pub use ddtest_core::{impl_arg, test_case};
pub use ddtest_derive::data_driven;

pub use config::HarnessConfig;
pub use dispatch::ActAndAssert;
pub use factory::{DataDrivenTestFactory, TestData, arrange};
pub use harness::DataDrivenTest;
pub use testing::{fail, fail_with};
