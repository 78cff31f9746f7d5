//! Value types for small fixed-size geometric aggregates: points, vectors, sizes and colors with two to four axes.
//!
//! An aggregate type only has to provide a per-axis getter ([`AxisRead::axis`]) and, when mutable, a per-axis setter
//! ([`AxisWrite::set_axis`]). Everything else is derived:
//! * [`Convert`] converts axis values between the primitive representations (`i32`, `i64` and `f64`).
//! * [`Mutate`] provides updates, multi-axis assignment and calculations with unary and binary operations.
//! * [`Operator`] is the catalog of arithmetic operations that work the same for every primitive representation.
//!
//! Concrete aggregate types are generated with [`primitive_aggregate!`] (for `i32`, `i64` and `f64` scalars) and
//! [`object_aggregate!`] (for arbitrary scalar types).
//!
//! # Example
//! ```
//! use water_value::prelude::*;
//! use water_value::primitive_aggregate;
//!
//! primitive_aggregate!(
//!     /// A point in 3D space.
//!     Point3, POINT3, 3 { x: X = 0, y: Y = 1, z: Z = 2 }
//! );
//!
//! let mut point = Point3::new(1, 2, 3);
//! assert_eq!([1.0, 2.0, 3.0], point.to_f64_array());
//!
//! point.update_x(|x| x * 10);
//! point.calculate_with_axes(Operator::Plus, &Point3::new(5, 5, 5));
//! assert_eq!(Point3::new(15, 7, 8), point);
//! ```
//!
//! # Thread safety
//! Aggregates are plain values without any internal synchronization. Shared references can be read from any number of threads;
//! mutation requires exclusive access, which the borrow checker enforces.

#[macro_use]
mod macros;

mod axes;
mod convert;
mod mutate;
mod operator;
mod primitive;
mod shape;

pub use axes::{Aggregate, AxisRead, AxisWrite};
#[doc(hidden)]
pub use axes::axis_out_of_range;
pub use convert::Convert;
pub use mutate::Mutate;
pub use operator::{BinaryOperator, Operator};
pub use primitive::{Primitive, Representation};
pub use shape::{Axis, Shape, ShapeKind};

/// The traits needed to use generated aggregate types.
pub mod prelude {
    pub use crate::{Aggregate, AxisRead, AxisWrite, BinaryOperator, Convert, Mutate, Operator, Primitive};
}

/// Support for the exported macros.
#[doc(hidden)]
pub mod __private {
    pub use num_traits;
    pub use paste;

    use std::fmt::{Display, Formatter};

    /// Writes axis values as `(a, b, ...)`.
    pub fn write_axes(f: &mut Formatter<'_>, values: &[&dyn Display]) -> std::fmt::Result {
        f.write_str("(")?;
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(")")
    }
}


#[cfg(test)]
mod test_generated {
    use std::borrow::Cow;

    use crate::test_util::{TestObject2, TestPoint2, TestPoint3};

    #[test]
    fn test_canonical_constants() {
        assert_eq!(TestPoint3::new(0, 0, 0), TestPoint3::<i32>::ZERO);
        assert_eq!(TestPoint3::new(1i64, 1, 1), TestPoint3::<i64>::ONE);
        assert_eq!(TestPoint3::new(-1.0, -1.0, -1.0), TestPoint3::<f64>::MINUS);
    }

    #[test]
    fn test_named_accessors() {
        let mut point = TestPoint2::new(-7.5, 2.25);
        assert_eq!(-7, point.x_as_i32());
        assert_eq!(2, point.y_as_i64());
        assert_eq!(2.25, point.y_as_f64());
        assert!(matches!(point.x_boxed(), Cow::Owned(x) if x == -7.5));

        point.set_x(1.0);
        point.update_y(|y| y * 4.0);
        assert_eq!(TestPoint2::new(1.0, 9.0), point);

        assert_eq!(Err("too small"), point.try_update_x(|_| Err("too small")));
        assert_eq!(Ok::<(), ()>(()), point.try_update_x(|x| Ok(x - 3.0)));
        point.set(0.5, 0.25);
        assert_eq!(TestPoint2::new(0.5, 0.25), point);
    }

    #[test]
    fn test_from_axes() {
        let source = TestPoint3::new(1.9, -1.9, 3.0);
        assert_eq!(TestPoint3::new(1, -1, 3), TestPoint3::<i32>::from_axes(&source));
        assert_eq!(source, TestPoint3::<f64>::from_axes(&source));
    }

    #[test]
    fn test_conversions() {
        let point: TestPoint3<i32> = [1, 2, 3].into();
        assert_eq!(TestPoint3::new(1, 2, 3), point);
        assert_eq!(point, TestPoint3::from((1, 2, 3)));
        assert_eq!([1, 2, 3], <[i32; 3]>::from(point));
        assert_eq!([1, 2, 3], point.into_array());
    }

    #[test]
    fn test_display() {
        assert_eq!("(1, 2, 3)", TestPoint3::new(1, 2, 3).to_string());
        assert_eq!("(a, b)", TestObject2::new("a", "b").to_string());
    }

    #[test]
    fn test_object_accessors() {
        let mut object = TestObject2::new(vec![1], vec![2, 3]);
        assert_eq!(&vec![2, 3], object.y());
        object.update_x(|x| x.iter().map(|v| v * 10).collect());
        object.set_y(Vec::new());
        assert_eq!(TestObject2::new(vec![10], Vec::new()), object);

        let copy = TestObject2::from_axes(&object);
        assert_eq!(object, copy);
        assert!(matches!(object.x_boxed(), Cow::Borrowed(x) if std::ptr::eq(x, object.x())));
    }
}
