//! Golden tests for the harness failure messages.
//!
//! Every message is produced by a real failing harness call, the way a test author would hit it.

use std::panic::{self, AssertUnwindSafe};

use ddtest::testing::panic_message;
use ddtest::{DataDrivenTest, TestData};

fn failure_message(f: impl FnOnce()) -> String {
    let payload = panic::catch_unwind(AssertUnwindSafe(f)).expect_err("expected the harness to fail");
    panic_message(payload.as_ref())
        .expect("harness failures carry a string message")
        .to_string()
}

#[test]
fn arity_mismatch_message() {
    let message = failure_message(|| {
        let _ = TestData::arrange("test case").arrange(("test case", "throws"));
    });
    insta::assert_snapshot!("arity_mismatch", message);
}

#[test]
fn no_test_cases_message() {
    let message = failure_message(|| DataDrivenTest::new().act_and_assert(|_: i32| {}));
    insta::assert_snapshot!("no_test_cases", message);
}

#[test]
fn missing_callback_message() {
    let message = failure_message(|| TestData::arrange(1).act_and_assert_dyn(None));
    insta::assert_snapshot!("missing_callback", message);
}

#[test]
fn callback_arity_message() {
    let message = failure_message(|| TestData::arrange((1, 2, 3)).act_and_assert(|_: i32, _: i32| {}));
    insta::assert_snapshot!("callback_arity", message);
}

#[test]
fn argument_type_message() {
    let message = failure_message(|| {
        TestData::arrange((1, "one"))
            .arrange((2, "two"))
            .act_and_assert(|_: i32, _: bool| {})
    });
    insta::assert_snapshot!("argument_type", message);
}
