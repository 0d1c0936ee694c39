//! Attribute macros for declaring ddtest cases on test functions.
//!
//! - `#[data_driven]`: collects the stacked `#[case(...)]` annotations of a function and makes them resolvable by
//!   `DataDrivenTest::arrange_from_declared_cases()` while the function body runs.

use proc_macro::TokenStream;

mod expand;

/// Declares the test cases of a test function.
///
/// Place `#[data_driven]` above the `#[case(...)]` annotations. Each `#[case(...)]` holds one tuple; every value is
/// converted with `ddtest::IntoArg`, and the tuples keep declaration order.
///
/// The attribute emits a `static` `ddtest::resolver::CaseSource` describing the function and enters it as a
/// declared-case frame for the duration of the body. Resolution happens on the test thread, at the point where
/// the harness asks for it.
///
/// # Example
/// ```ignore
/// #[data_driven]
/// #[case(1, 1, 2)]
/// #[case(1, 2, 3)]
/// #[test]
/// fn adds() {
///     DataDrivenTest::new()
///         .arrange_from_declared_cases()
///         .act_and_assert(|a: i32, b: i32, expected: i32| assert_eq!(a + b, expected));
/// }
///
/// // Generates (roughly):
/// #[test]
/// fn adds() {
///     fn __ddtest_declared_cases() -> Vec<ddtest::TestCase> { vec![/* (1, 1, 2), (1, 2, 3) */] }
///     static __DDTEST_CASE_SOURCE: ddtest::resolver::CaseSource = /* module_path!(), "adds", ... */;
///     let __ddtest_frame = ddtest::resolver::enter(&__DDTEST_CASE_SOURCE);
///     { /* original body */ }
/// }
/// ```
#[proc_macro_attribute]
pub fn data_driven(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand::data_driven(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
