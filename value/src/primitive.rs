use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, Div, Mul, Rem, Sub};

use num_traits::{AsPrimitive, NumOps};

use crate::Operator;

/// The scalar kind that backs an aggregate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Representation {
    /// A 32-bit signed integer (`i32`).
    Int32,
    /// A 64-bit signed integer (`i64`).
    Int64,
    /// A double-precision float (`f64`).
    Float64,
    /// Any other type, held as-is by a generic holder.
    Boxed,
}

impl Representation {
    /// Whether this is one of the primitive numeric kinds.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Representation::Boxed)
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Representation::Int32 => "int32",
            Representation::Int64 => "int64",
            Representation::Float64 => "float64",
            Representation::Boxed => "boxed",
        };
        f.write_str(string)
    }
}

/// A primitive numeric scalar: `i32`, `i64` or `f64`.
///
/// Every primitive can be converted into every other primitive with the semantics of an `as` cast:
/// * Widening (`i32` to `i64`, `i32` to `f64`) is exact. `i64` to `f64` is exact up to 2<sup>53</sup> and rounds to the nearest
///   representable value beyond that.
/// * `f64` to `i32`/`i64` truncates toward zero (`-1.9` becomes `-1`). Values outside the target range saturate at the target's
///   `MIN`/`MAX` and `NaN` becomes `0`.
/// * `i64` to `i32` keeps the low 32 bits (two's-complement wrap).
///
/// None of these conversions are reported as errors.
pub trait Primitive:
Copy + PartialOrd + Debug + Display + NumOps + Send + Sync +
AsPrimitive<i32> + AsPrimitive<i64> + AsPrimitive<f64>
{
    /// The value zero.
    const ZERO: Self;
    /// The value one.
    const ONE: Self;
    /// The value minus one.
    const MINUS_ONE: Self;
    /// The representation of this scalar.
    const REPRESENTATION: Representation;

    /// Converts to an `i32`.
    #[inline(always)]
    fn as_i32(self) -> i32 {
        AsPrimitive::<i32>::as_(self)
    }

    /// Converts to an `i64`.
    #[inline(always)]
    fn as_i64(self) -> i64 {
        AsPrimitive::<i64>::as_(self)
    }

    /// Converts to an `f64`.
    #[inline(always)]
    fn as_f64(self) -> f64 {
        AsPrimitive::<f64>::as_(self)
    }

    /// Applies `operator` to `self` and `right`.
    ///
    /// Integers wrap around on overflow regardless of the build profile, so `MAX + 1` is `MIN` and `MIN / -1` is `MIN`.
    ///
    /// # Panics
    /// For integers, this function panics on division or remainder by zero.
    fn apply_operator(self, operator: Operator, right: Self) -> Self;
}

macro_rules! impl_primitive {
    ($ty:ty, $repr:ident, $zero:expr, $one:expr, { $($operator:ident => $method:ident),+ $(,)? }) => {
        impl Primitive for $ty {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
            const MINUS_ONE: Self = -$one;
            const REPRESENTATION: Representation = Representation::$repr;

            #[inline(always)]
            fn apply_operator(self, operator: Operator, right: Self) -> Self {
                match operator {
                    $(Operator::$operator => self.$method(right),)+
                }
            }
        }
    }
}

impl_primitive!(i32, Int32, 0, 1, {
    Plus => wrapping_add,
    Minus => wrapping_sub,
    Multiply => wrapping_mul,
    Divide => wrapping_div,
    Modulo => wrapping_rem,
});
impl_primitive!(i64, Int64, 0, 1, {
    Plus => wrapping_add,
    Minus => wrapping_sub,
    Multiply => wrapping_mul,
    Divide => wrapping_div,
    Modulo => wrapping_rem,
});
impl_primitive!(f64, Float64, 0.0, 1.0, {
    Plus => add,
    Minus => sub,
    Multiply => mul,
    Divide => div,
    Modulo => rem,
});
