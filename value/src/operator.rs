use std::fmt::{Display, Formatter};

use crate::Primitive;

/// A binary operation that combines the current value of an axis with a right-hand side value.
///
/// This is implemented by every [`Operator`] for every [`Primitive`] type and by every closure of the form `Fn(T, T) -> T`, so both
/// can be passed wherever a binary operation is expected.
///
/// Note that a closure passed as `impl BinaryOperator<T>` needs explicit parameter types, e.g. `|l: i32, r: i32| l.max(r)`.
pub trait BinaryOperator<T> {
    /// Applies the operation.
    ///
    /// # Parameters
    /// * `left`: The current value.
    /// * `right`: The right-hand side value.
    fn apply(&self, left: T, right: T) -> T;
}

impl<T, F> BinaryOperator<T> for F where
    F: Fn(T, T) -> T,
{
    #[inline(always)]
    fn apply(&self, left: T, right: T) -> T {
        self(left, right)
    }
}

/// The catalog of arithmetic operators that are valid for every primitive representation.
///
/// Each operator uses the native semantics of the scalar type it is applied to:
/// * Integer division truncates toward zero and [`Operator::Modulo`] takes the sign of the left-hand side.
/// * Integer division or modulo by zero panics. The panic is not caught.
/// * Integer overflow wraps around in every build profile: `MAX + 1` is `MIN`, `MIN / -1` is `MIN` and `MIN % -1` is `0`.
/// * Floating-point operations follow IEEE 754: division by zero yields an infinity or `NaN` and never panics.
///
/// ```
/// use water_value::Operator;
///
/// assert_eq!(5, Operator::Plus.apply_i32(2, 3));
/// assert_eq!(6.0, Operator::Plus.apply_f64(2.5, 3.5));
/// assert_eq!(f64::INFINITY, Operator::Divide.apply_f64(1.0, 0.0));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
    /// Addition (`+`).
    Plus,
    /// Subtraction (`-`).
    Minus,
    /// Multiplication (`*`).
    Multiply,
    /// Division (`/`).
    Divide,
    /// Remainder (`%`).
    Modulo,
}

impl Operator {
    /// Every operator in the catalog.
    pub const ALL: [Operator; 5] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulo,
    ];

    /// Applies the operator.
    ///
    /// # Parameters
    /// * `left`: The left-hand side.
    /// * `right`: The right-hand side.
    ///
    /// # Panics
    /// For integer types, this function panics on division or modulo by zero.
    #[inline(always)]
    pub fn apply<T: Primitive>(self, left: T, right: T) -> T {
        left.apply_operator(self, right)
    }

    #[inline(always)]
    pub fn apply_i32(self, left: i32, right: i32) -> i32 {
        self.apply(left, right)
    }

    #[inline(always)]
    pub fn apply_i64(self, left: i64, right: i64) -> i64 {
        self.apply(left, right)
    }

    #[inline(always)]
    pub fn apply_f64(self, left: f64, right: f64) -> f64 {
        self.apply(left, right)
    }

    /// The arithmetic symbol of the operator.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulo => '%',
        }
    }
}

impl<T: Primitive> BinaryOperator<T> for Operator {
    #[inline(always)]
    fn apply(&self, left: T, right: T) -> T {
        Operator::apply(*self, left, right)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = String;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Operator::ALL.into_iter()
            .find(|operator| operator.symbol() == symbol)
            .ok_or_else(|| format!("Invalid Operator symbol: {symbol}."))
    }
}
