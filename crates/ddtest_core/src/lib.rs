//! Shared vocabulary for the ddtest harness: test-case values, conversions, and canonical failure messages.
//!
//! This crate is intentionally small and dependency-light. It contains the pieces that both:
//! - the harness uses to arrange and dispatch test cases, and
//! - the `#[data_driven]` attribute expands into when it turns `#[case(...)]` annotations into tuples.
//!
//! ## Notes
//!
//! - No global state and no panics: failures are described by [`errors::HarnessError`] and raised by the harness.
//! - A test-case value is an [`Arg`]: a dynamically typed value together with its default string rendering.

#![deny(clippy::unwrap_used)]

pub mod case;
pub mod errors;
pub mod value;

pub use case::{IntoTestCase, TestCase};
pub use errors::HarnessError;
pub use value::{Arg, ArgTypeMismatch, FromArg, IntoArg};
