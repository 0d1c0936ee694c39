//! Typed act/assert callbacks.
//!
//! [`ActAndAssert`] is implemented for every `FnMut` closure of 0 to 10 parameters whose parameter types implement
//! [`FromArg`]. All arities funnel into the same untyped loop in the harness: a case is converted positionally and
//! the closure is called with the converted values.
//!
//! Closure parameters need type annotations (`|a: i32, b: i32| ...`) so the arity and parameter types can be
//! inferred.

use ddtest_core::{FromArg, HarnessError, TestCase};

/// A callback that can act on and assert one test case.
///
/// The `Args` type parameter is the tuple of the closure's parameter types; it only exists so that one closure
/// type maps to exactly one implementation.
pub trait ActAndAssert<Args> {
    /// Number of parameters the callback takes.
    const ARITY: usize;

    /// Convert the values of `case` (at `index` in arrangement order) and invoke the callback.
    ///
    /// Conversion failures are returned before the callback runs. Failures raised by the callback itself are not
    /// intercepted here.
    fn invoke(&mut self, case: &TestCase, index: usize) -> Result<(), HarnessError>;
}

/// Convert the value at `position` of `case` into `T`.
pub fn extract<T: FromArg>(case: &TestCase, index: usize, position: usize) -> Result<T, HarnessError> {
    let arg = case.get(position).ok_or(HarnessError::CallbackArity {
        callback: position + 1,
        arity: case.len(),
    })?;
    T::from_arg(arg).map_err(|mismatch| HarnessError::argument_type(index, position, mismatch))
}

macro_rules! impl_act_and_assert {
    ($(($arity:expr; $($ty:ident $var:ident $pos:tt),*)),* $(,)?) => {
        $(
            impl<Func, $($ty),*> ActAndAssert<($($ty,)*)> for Func
            where
                Func: FnMut($($ty),*),
                $($ty: FromArg,)*
            {
                const ARITY: usize = $arity;

                #[allow(unused_variables)]
                fn invoke(&mut self, case: &TestCase, index: usize) -> Result<(), HarnessError> {
                    $(let $var = extract::<$ty>(case, index, $pos)?;)*
                    (self)($($var),*);
                    Ok(())
                }
            }
        )*
    };
}

impl_act_and_assert!(
    (0;),
    (1; A a 0),
    (2; A a 0, B b 1),
    (3; A a 0, B b 1, C c 2),
    (4; A a 0, B b 1, C c 2, D d 3),
    (5; A a 0, B b 1, C c 2, D d 3, E e 4),
    (6; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5),
    (7; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6),
    (8; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7),
    (9; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8),
    (10; A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7, I i 8, J j 9),
);
