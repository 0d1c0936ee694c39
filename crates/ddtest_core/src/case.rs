//! Test cases: fixed-length, ordered sequences of [`Arg`] values.

use std::fmt::{self, Display};
use std::ops::Index;

use crate::value::{Arg, IntoArg};

/// One row of a data-driven test.
///
/// A test case is immutable once built. Its identity inside a harness is its position in arrangement order.
#[derive(Debug, Default)]
pub struct TestCase {
    args: Vec<Arg>,
}

impl TestCase {
    pub fn new(args: Vec<Arg>) -> Self {
        Self { args }
    }

    /// Number of positional arguments (the case's arity).
    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn get(&self, position: usize) -> Option<&Arg> {
        self.args.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arg> {
        self.args.iter()
    }

    /// Render the values comma-and-space joined, without brackets.
    ///
    /// ## Examples
    /// ```rust
    /// use ddtest_core::{IntoTestCase, TestCase};
    /// assert_eq!(("test case", "throws").into_test_case().render(), "test case, throws");
    /// assert_eq!(TestCase::default().render(), "");
    /// ```
    pub fn render(&self) -> String {
        self.args.iter().map(Arg::rendered).collect::<Vec<_>>().join(", ")
    }
}

/// Renders as `[v1, v2, ...]`.
impl Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.render())
    }
}

impl Index<usize> for TestCase {
    type Output = Arg;

    fn index(&self, position: usize) -> &Arg {
        &self.args[position]
    }
}

impl<'a> IntoIterator for &'a TestCase {
    type Item = &'a Arg;
    type IntoIter = std::slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl FromIterator<Arg> for TestCase {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Anything that can be arranged as a single test case.
///
/// Implemented for:
/// - tuples `()` through 10-tuples whose elements implement [`IntoArg`],
/// - a single [`IntoArg`] value (a one-argument case; `None::<T>` is one absent argument),
/// - `Vec<Arg>`, `[Arg; N]` and [`TestCase`] for cases assembled at runtime.
pub trait IntoTestCase {
    fn into_test_case(self) -> TestCase;
}

impl IntoTestCase for TestCase {
    fn into_test_case(self) -> TestCase {
        self
    }
}

impl IntoTestCase for Vec<Arg> {
    fn into_test_case(self) -> TestCase {
        TestCase::new(self)
    }
}

impl<const N: usize> IntoTestCase for [Arg; N] {
    fn into_test_case(self) -> TestCase {
        TestCase::new(Vec::from(self))
    }
}

impl<T: IntoArg> IntoTestCase for T {
    fn into_test_case(self) -> TestCase {
        TestCase::new(vec![self.into_arg()])
    }
}

macro_rules! tuple_into_test_case {
    ($(($($name:ident),*)),* $(,)?) => {
        $(
            impl<$($name: IntoArg),*> IntoTestCase for ($($name,)*) {
                #[allow(non_snake_case)]
                fn into_test_case(self) -> TestCase {
                    let ($($name,)*) = self;
                    TestCase::new(vec![$($name.into_arg()),*])
                }
            }
        )*
    };
}

tuple_into_test_case!(
    (),
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
);

/// Build a [`TestCase`] from heterogeneous values.
///
/// ```rust
/// let case = ddtest_core::test_case![1, "two", None::<f64>];
/// assert_eq!(case.to_string(), "[1, two, ]");
/// ```
#[macro_export]
macro_rules! test_case {
    ($($value:expr),* $(,)?) => {
        $crate::TestCase::new(::std::vec![$($crate::IntoArg::into_arg($value)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_arity() {
        assert_eq!(().into_test_case().len(), 0);
        assert_eq!((1,).into_test_case().len(), 1);
        assert_eq!((1, "a", 2.5).into_test_case().len(), 3);
        assert_eq!((1, 2, 3, 4, 5, 6, 7, 8, 9, 10).into_test_case().len(), 10);
    }

    #[test]
    fn test_single_value_is_one_argument() {
        let case = "testcase".into_test_case();
        assert_eq!(case.len(), 1);
        assert_eq!(case[0].rendered(), "testcase");
    }

    #[test]
    fn test_none_is_one_absent_argument() {
        let case = None::<i32>.into_test_case();
        assert_eq!(case.len(), 1);
        assert!(case[0].is_absent());
    }

    #[test]
    fn test_display_brackets() {
        assert_eq!(("test case", "throws").into_test_case().to_string(), "[test case, throws]");
        assert_eq!(().into_test_case().to_string(), "[]");
    }

    #[test]
    fn test_absent_values_render_empty_between_separators() {
        let case = (1, None::<&'static str>, 3).into_test_case();
        assert_eq!(case.render(), "1, , 3");
    }

    #[test]
    fn test_runtime_built_cases() {
        let from_vec = vec![Arg::new(1), Arg::new("x")].into_test_case();
        let from_array = [Arg::new(1), Arg::absent()].into_test_case();
        let collected: TestCase = (0..3).map(Arg::new).collect();

        assert_eq!(from_vec.render(), "1, x");
        assert_eq!(from_array.len(), 2);
        assert_eq!(collected.render(), "0, 1, 2");
    }

    #[test]
    fn test_case_macro_mixes_types() {
        let case = crate::test_case![1_u8, "two", 3.0_f32, Some('4')];
        assert_eq!(case.len(), 4);
        assert!(case[0].is::<u8>());
        assert!(case[3].is::<char>());
        assert_eq!(crate::test_case![].len(), 0);
    }

    #[test]
    fn test_iteration_keeps_order() {
        let case = (3, 1, 2).into_test_case();
        let rendered: Vec<&str> = case.iter().map(Arg::rendered).collect();
        assert_eq!(rendered, vec!["3", "1", "2"]);
        assert_eq!((&case).into_iter().count(), 3);
    }
}
