//! Dynamically typed test-case values.
//!
//! An [`Arg`] stores one positional value of a test case. It keeps the value itself (as `Box<dyn Any>`) so the
//! dispatcher can hand it to a typed callback, and its rendering so failure messages can show the case without
//! knowing the concrete type.

use std::any::{Any, type_name};
use std::fmt::{self, Debug, Display};

/// Type name reported for absent values.
pub const ABSENT_TYPE_NAME: &str = "<absent>";

/// One positional value of a test case.
///
/// An `Arg` is either present (a boxed value plus its rendering) or *absent*, the equivalent of a null argument.
/// Absent values render as the empty string.
pub struct Arg {
    value: Option<Box<dyn Any>>,
    rendered: String,
    type_name: &'static str,
}

impl Arg {
    /// Wrap a value, rendering it with its `Display` implementation.
    pub fn new<T: Any + Display>(value: T) -> Self {
        Self {
            rendered: value.to_string(),
            type_name: type_name::<T>(),
            value: Some(Box::new(value)),
        }
    }

    /// Wrap a value that has no `Display` implementation, rendering it with `Debug`.
    pub fn debug<T: Any + Debug>(value: T) -> Self {
        Self {
            rendered: format!("{value:?}"),
            type_name: type_name::<T>(),
            value: Some(Box::new(value)),
        }
    }

    /// An absent value.
    pub fn absent() -> Self {
        Self {
            value: None,
            rendered: String::new(),
            type_name: ABSENT_TYPE_NAME,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// The default string rendering used in failure messages.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Name of the stored type, or [`ABSENT_TYPE_NAME`].
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Borrow the stored value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.as_deref().and_then(|value| value.downcast_ref::<T>())
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_absent() {
            f.write_str("Arg(<absent>)")
        } else {
            write!(f, "Arg({}: {})", self.rendered, self.type_name)
        }
    }
}

// ============================================================================
// Conversions into test-case values
// ============================================================================

/// Convert a value into an [`Arg`].
///
/// Implemented for the primitive types, `String`, `&'static str`, `Option<T>` (where `None` becomes an absent
/// value) and `Arg` itself. Use [`impl_arg!`](crate::impl_arg) for your own types.
pub trait IntoArg {
    fn into_arg(self) -> Arg;
}

impl IntoArg for Arg {
    fn into_arg(self) -> Arg {
        self
    }
}

impl<T: IntoArg> IntoArg for Option<T> {
    fn into_arg(self) -> Arg {
        match self {
            Some(value) => value.into_arg(),
            None => Arg::absent(),
        }
    }
}

macro_rules! display_into_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoArg for $ty {
                fn into_arg(self) -> Arg {
                    Arg::new(self)
                }
            }
        )*
    };
}

display_into_arg!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    bool,
    char,
    String,
    &'static str,
);

// ============================================================================
// Conversions out of test-case values
// ============================================================================

/// A stored value could not be passed as the parameter type a callback declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgTypeMismatch {
    pub expected: &'static str,
    pub actual: &'static str,
}

impl ArgTypeMismatch {
    pub fn new<T>(arg: &Arg) -> Self {
        Self {
            expected: type_name::<T>(),
            actual: arg.type_name(),
        }
    }
}

/// Extract a callback parameter from an [`Arg`].
///
/// Integer parameters accept any stored integer whose value fits (so `(1, 2)`, which arranges `i32`s, can feed an
/// `i64` callback). `String` accepts stored `&'static str` values. `Option<T>` maps absent values to `None`.
pub trait FromArg: Sized {
    fn from_arg(arg: &Arg) -> Result<Self, ArgTypeMismatch>;
}

/// Clone the stored value out if it has exactly type `T`.
pub fn downcast_cloned<T: Any + Clone>(arg: &Arg) -> Result<T, ArgTypeMismatch> {
    arg.downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| ArgTypeMismatch::new::<T>(arg))
}

impl<T: FromArg> FromArg for Option<T> {
    fn from_arg(arg: &Arg) -> Result<Self, ArgTypeMismatch> {
        if arg.is_absent() {
            return Ok(None);
        }
        T::from_arg(arg)
            .map(Some)
            .map_err(|err| ArgTypeMismatch { expected: type_name::<Self>(), ..err })
    }
}

impl FromArg for String {
    fn from_arg(arg: &Arg) -> Result<Self, ArgTypeMismatch> {
        if let Some(value) = arg.downcast_ref::<&'static str>() {
            return Ok((*value).to_string());
        }
        downcast_cloned::<String>(arg)
    }
}

impl FromArg for f64 {
    fn from_arg(arg: &Arg) -> Result<Self, ArgTypeMismatch> {
        if let Some(value) = arg.downcast_ref::<f32>() {
            return Ok(f64::from(*value));
        }
        downcast_cloned::<f64>(arg)
    }
}

macro_rules! exact_from_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromArg for $ty {
                fn from_arg(arg: &Arg) -> Result<Self, ArgTypeMismatch> {
                    downcast_cloned::<$ty>(arg)
                }
            }
        )*
    };
}

exact_from_arg!(f32, bool, char, &'static str);

fn convert_integer<S, T>(arg: &Arg) -> Option<Option<T>>
where
    S: Any + Copy,
    T: TryFrom<S>,
{
    arg.downcast_ref::<S>().map(|value| T::try_from(*value).ok())
}

/// Convert whichever integer type is stored into `T`, if the value fits.
fn integer_from_arg<T>(arg: &Arg) -> Result<T, ArgTypeMismatch>
where
    T: TryFrom<i8>
        + TryFrom<i16>
        + TryFrom<i32>
        + TryFrom<i64>
        + TryFrom<i128>
        + TryFrom<isize>
        + TryFrom<u8>
        + TryFrom<u16>
        + TryFrom<u32>
        + TryFrom<u64>
        + TryFrom<u128>
        + TryFrom<usize>,
{
    convert_integer::<i8, T>(arg)
        .or_else(|| convert_integer::<i16, T>(arg))
        .or_else(|| convert_integer::<i32, T>(arg))
        .or_else(|| convert_integer::<i64, T>(arg))
        .or_else(|| convert_integer::<i128, T>(arg))
        .or_else(|| convert_integer::<isize, T>(arg))
        .or_else(|| convert_integer::<u8, T>(arg))
        .or_else(|| convert_integer::<u16, T>(arg))
        .or_else(|| convert_integer::<u32, T>(arg))
        .or_else(|| convert_integer::<u64, T>(arg))
        .or_else(|| convert_integer::<u128, T>(arg))
        .or_else(|| convert_integer::<usize, T>(arg))
        .flatten()
        .ok_or_else(|| ArgTypeMismatch::new::<T>(arg))
}

macro_rules! integer_from_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromArg for $ty {
                fn from_arg(arg: &Arg) -> Result<Self, ArgTypeMismatch> {
                    integer_from_arg::<$ty>(arg)
                }
            }
        )*
    };
}

integer_from_arg!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Implement [`IntoArg`] and [`FromArg`] for your own `Clone + 'static` types.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Point { x: i32, y: i32 }
/// ddtest::impl_arg!(debug: Point);    // rendered with `Debug`
/// ddtest::impl_arg!(Celsius);         // rendered with `Display`
/// ```
#[macro_export]
macro_rules! impl_arg {
    (debug: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::IntoArg for $ty {
                fn into_arg(self) -> $crate::Arg {
                    $crate::Arg::debug(self)
                }
            }

            impl $crate::FromArg for $ty {
                fn from_arg(arg: &$crate::Arg) -> ::core::result::Result<Self, $crate::ArgTypeMismatch> {
                    $crate::value::downcast_cloned::<$ty>(arg)
                }
            }
        )+
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::IntoArg for $ty {
                fn into_arg(self) -> $crate::Arg {
                    $crate::Arg::new(self)
                }
            }

            impl $crate::FromArg for $ty {
                fn from_arg(arg: &$crate::Arg) -> ::core::result::Result<Self, $crate::ArgTypeMismatch> {
                    $crate::value::downcast_cloned::<$ty>(arg)
                }
            }
        )+
    };
}
