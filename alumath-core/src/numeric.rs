use num_traits::{Num, NumAssign};
use std::fmt::{Debug, Display};

/// A trait representing the element types a [`Matrix`](crate::Matrix) can hold.
///
/// Bounds the generic kernels of the matrix operations: every implementor
/// supports the arithmetic the kernels need (`Num` gives `zero()`, `one()`
/// and the binary operators, `NumAssign` the compound assignments), can be
/// printed for the grid form, and can cross threads.
///
/// Integer implementors multiply exactly within their range; overflow
/// behaves as the primitive type does.
pub trait Numeric:
    Num
    + NumAssign
    + Copy
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Human-readable name of the type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Whether `high - low` fits in this type. Uniform sampling over
    /// `[low, high)` needs the span; integer spans always fit.
    fn span_fits(low: Self, high: Self) -> bool {
        let _ = (low, high);
        true
    }

    /// Converts a JSON number into this type, returning `None` when the value
    /// is not representable (a fraction for an integer type, an integer out
    /// of range, or a float that would overflow to infinity).
    #[cfg(feature = "json")]
    fn from_json_number(number: &serde_json::Number) -> Option<Self>;

    /// Converts this value into a JSON value. Non-finite floats become `null`.
    #[cfg(feature = "json")]
    fn to_json_value(self) -> serde_json::Value;
}

macro_rules! impl_numeric_integer {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                #[cfg(feature = "json")]
                fn from_json_number(number: &serde_json::Number) -> Option<Self> {
                    if let Some(v) = number.as_i64() {
                        <$t>::try_from(v).ok()
                    } else {
                        number.as_u64().and_then(|v| <$t>::try_from(v).ok())
                    }
                }

                #[cfg(feature = "json")]
                fn to_json_value(self) -> serde_json::Value {
                    serde_json::Value::from(self)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn span_fits(low: Self, high: Self) -> bool {
                    (high - low).is_finite()
                }

                #[cfg(feature = "json")]
                fn from_json_number(number: &serde_json::Number) -> Option<Self> {
                    number.as_f64().map(|v| v as $t).filter(|v| v.is_finite())
                }

                #[cfg(feature = "json")]
                fn to_json_value(self) -> serde_json::Value {
                    serde_json::Number::from_f64(self as f64)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
        )*
    };
}

impl_numeric_integer!(i32, i64);
impl_numeric_float!(f32, f64);
