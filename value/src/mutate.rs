//! The mutation protocol, derived from [`AxisWrite::set_axis`].
//!
//! # Evaluation order
//! Multi-axis operations visit axes in the order of [`Shape::axes`](crate::Shape::axes).
//!
//! The `calculate*` and `set_from*` operations read every axis they need before writing any. An operation never observes a value
//! that it has already written, and a failure while computing new values leaves the aggregate unmodified.
//!
//! [`Mutate::set_all`] writes one axis after another and is not atomic: a panic inside [`AxisWrite::set_axis`] leaves the axes
//! before it written. [`Mutate::set_each`] and [`Mutate::try_set_each`] produce and write each value in turn, so a failure while
//! producing a value leaves the axes before it written. Nothing is rolled back.

use num_traits::AsPrimitive;

use crate::axes::{try_collect_array, zip_map};
use crate::{Axis, AxisRead, AxisWrite, BinaryOperator, Convert, Primitive};

/// The derived mutation and calculation operations for every [`AxisWrite`] implementation.
///
/// This trait is implemented for all [`AxisWrite`] types and is not meant to be implemented manually.
pub trait Mutate<const N: usize>: AxisWrite<N> {
    /// Replaces a named axis with a value computed from its current value.
    ///
    /// # Panics
    /// This function panics if `axis` is not part of the shape.
    fn update(&mut self, axis: Axis, f: impl FnOnce(Self::Scalar) -> Self::Scalar) {
        self.update_at(Self::SHAPE.axis_index(axis), f);
    }

    /// Replaces an axis with a value computed from its current value.
    fn update_at(&mut self, index: usize, f: impl FnOnce(Self::Scalar) -> Self::Scalar) {
        let value = f(self.axis(index));
        self.set_axis(index, value);
    }

    /// Like [`Mutate::update`], with a fallible function. On error, the axis is left as it was.
    fn try_update<E>(&mut self, axis: Axis, f: impl FnOnce(Self::Scalar) -> Result<Self::Scalar, E>) -> Result<(), E> {
        let index = Self::SHAPE.axis_index(axis);
        let value = f(self.axis(index))?;
        self.set_axis(index, value);
        Ok(())
    }

    /// Sets every axis, one after another in axis order.
    fn set_all(&mut self, values: [Self::Scalar; N]) {
        for (index, value) in values.into_iter().enumerate() {
            self.set_axis(index, value);
        }
    }

    /// Sets every axis to a value produced for it, producing and writing one axis at a time.
    fn set_each(&mut self, mut f: impl FnMut(Axis) -> Self::Scalar) {
        for (index, axis) in Self::SHAPE.axes().iter().enumerate() {
            let value = f(*axis);
            self.set_axis(index, value);
        }
    }

    /// Like [`Mutate::set_each`], with a fallible function.
    ///
    /// On error, the axes that come before the failing axis have already been written and keep their new values.
    fn try_set_each<E>(&mut self, mut f: impl FnMut(Axis) -> Result<Self::Scalar, E>) -> Result<(), E> {
        for (index, axis) in Self::SHAPE.axes().iter().enumerate() {
            match f(*axis) {
                Ok(value) => self.set_axis(index, value),
                Err(err) => {
                    log::debug!("Assignment of {} stopped at axis {} after writing {} of {} axes.", Self::SHAPE, axis, index, N);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Copies every axis from another aggregate with the same scalar type.
    ///
    /// All axes of `other` are read before any axis is written.
    fn set_from<A>(&mut self, other: &A) where
        A: AxisRead<N, Scalar=Self::Scalar> + ?Sized,
    {
        let values = other.to_array();
        self.set_all(values);
    }

    /// Copies every axis from another primitive aggregate, converting each value to this aggregate's scalar type.
    ///
    /// All axes of `other` are read before any axis is written.
    fn set_cast_from<A>(&mut self, other: &A) where
        A: AxisRead<N> + ?Sized,
        A::Scalar: AsPrimitive<Self::Scalar>,
        Self::Scalar: Primitive,
    {
        let values = other.to_array_as::<Self::Scalar>();
        self.set_all(values);
    }

    /// Replaces every axis with the result of a unary operation on its current value.
    ///
    /// The new values are computed from the current values of all axes before any axis is written.
    fn calculate(&mut self, op: impl FnMut(Self::Scalar) -> Self::Scalar) {
        let values = self.to_array().map(op);
        self.set_all(values);
    }

    /// Like [`Mutate::calculate`], with a fallible operation.
    ///
    /// The new values are computed before any axis is written, so on error the aggregate is left unmodified.
    fn try_calculate<E>(&mut self, op: impl FnMut(Self::Scalar) -> Result<Self::Scalar, E>) -> Result<(), E> {
        let values = try_collect_array(self.to_array().into_iter().map(op))
            .map_err(|err| {
                log::debug!("Calculation on {} failed; no axis was written.", Self::SHAPE);
                err
            })?;
        self.set_all(values);
        Ok(())
    }

    /// Replaces every axis with the result of a binary operation on its current value and the corresponding value of `rhs`.
    ///
    /// The new values are computed from the current values of all axes before any axis is written.
    ///
    /// ```
    /// use water_value::{Operator, Mutate};
    /// # water_value::primitive_aggregate!(Point2, POINT2, 2 { x: X = 0, y: Y = 1 });
    ///
    /// let mut point = Point2::new(2, 3);
    /// point.calculate_with(Operator::Multiply, [10, 100]);
    /// assert_eq!(Point2::new(20, 300), point);
    /// ```
    fn calculate_with(&mut self, op: impl BinaryOperator<Self::Scalar>, rhs: [Self::Scalar; N]) {
        let values = zip_map(self.to_array(), rhs, |left, right| op.apply(left, right));
        self.set_all(values);
    }

    /// Like [`Mutate::calculate_with`], with a fallible operation.
    ///
    /// The new values are computed before any axis is written, so on error the aggregate is left unmodified.
    fn try_calculate_with<E>(
        &mut self,
        op: impl Fn(Self::Scalar, Self::Scalar) -> Result<Self::Scalar, E>,
        rhs: [Self::Scalar; N],
    ) -> Result<(), E> {
        let computed = self.to_array().into_iter()
            .zip(rhs)
            .map(|(left, right)| op(left, right));
        let values = try_collect_array(computed)
            .map_err(|err| {
                log::debug!("Calculation on {} failed; no axis was written.", Self::SHAPE);
                err
            })?;
        self.set_all(values);
        Ok(())
    }

    /// Like [`Mutate::calculate_with`], taking the right-hand side values from another aggregate with the same scalar type.
    fn calculate_with_axes<A>(&mut self, op: impl BinaryOperator<Self::Scalar>, other: &A) where
        A: AxisRead<N, Scalar=Self::Scalar> + ?Sized,
    {
        let rhs = other.to_array();
        self.calculate_with(op, rhs);
    }

    /// Like [`Mutate::calculate_with`], taking the right-hand side values from another primitive aggregate and converting them to
    /// this aggregate's scalar type.
    fn calculate_with_cast<A>(&mut self, op: impl BinaryOperator<Self::Scalar>, other: &A) where
        A: AxisRead<N> + ?Sized,
        A::Scalar: AsPrimitive<Self::Scalar>,
        Self::Scalar: Primitive,
    {
        let rhs = other.to_array_as::<Self::Scalar>();
        self.calculate_with(op, rhs);
    }
}

impl<A, const N: usize> Mutate<N> for A where
    A: AxisWrite<N> + ?Sized,
{}

#[cfg(test)]
mod test_mutate {
    use std::cell::Cell;

    use crate::test_util::{TestObject2, TestPoint2, TestPoint3};
    use crate::{Axis, AxisRead, AxisWrite, Mutate, Operator};

    /// Records the order of axis writes.
    struct Recording<'a> {
        inner: TestPoint3<i32>,
        writes: &'a Cell<Vec<usize>>,
    }

    impl crate::Aggregate for Recording<'_> {
        type Scalar = i32;
        const SHAPE: crate::Shape = crate::Shape::POINT3;
        const REPRESENTATION: crate::Representation = crate::Representation::Int32;
    }

    impl AxisRead<3> for Recording<'_> {
        fn axis(&self, index: usize) -> i32 {
            self.inner.axis(index)
        }
    }

    impl AxisWrite<3> for Recording<'_> {
        fn set_axis(&mut self, index: usize, value: i32) {
            let mut writes = self.writes.take();
            writes.push(index);
            self.writes.set(writes);
            self.inner.set_axis(index, value);
        }
    }

    #[test]
    fn test_update() {
        let mut point = TestPoint3::new(1, 2, 3);
        point.update(Axis::Z, |z| z * 10);
        assert_eq!(TestPoint3::new(1, 2, 30), point);
        point.update_at(0, |x| x - 1);
        assert_eq!(TestPoint3::new(0, 2, 30), point);
    }

    #[test]
    #[should_panic(expected = "Axis depth is not part of Point3.")]
    fn test_update_foreign_axis() {
        TestPoint3::new(1, 2, 3).update(Axis::Depth, |v| v);
    }

    #[test]
    fn test_try_update() {
        let mut point = TestPoint3::new(1i32, 2, 3);
        assert_eq!(Ok(()), point.try_update(Axis::Y, |y| y.checked_mul(4).ok_or("overflow")));
        assert_eq!(TestPoint3::new(1, 8, 3), point);

        assert_eq!(Err("negative"), point.try_update(Axis::X, |_| Err("negative")));
        assert_eq!(TestPoint3::new(1, 8, 3), point);
    }

    #[test]
    fn test_set_all_writes_in_axis_order() {
        let writes = Cell::new(Vec::new());
        let mut recording = Recording { inner: TestPoint3::new(0, 0, 0), writes: &writes };
        recording.set_all([7, 8, 9]);
        assert_eq!(TestPoint3::new(7, 8, 9), recording.inner);
        assert_eq!(vec![0, 1, 2], writes.take());
    }

    #[test]
    fn test_set_each() {
        let mut point = TestPoint3::new(0, 0, 0);
        let mut seen = Vec::new();
        point.set_each(|axis| {
            seen.push(axis);
            seen.len() as i32
        });
        assert_eq!(TestPoint3::new(1, 2, 3), point);
        assert_eq!(vec![Axis::X, Axis::Y, Axis::Z], seen);
    }

    #[test]
    fn test_try_set_each_is_not_atomic() {
        let mut point = TestPoint3::new(1, 2, 3);
        let result = point.try_set_each(|axis| match axis {
            Axis::Z => Err(format!("no value for {axis}")),
            _ => Ok(100),
        });
        assert_eq!(Err("no value for z".to_string()), result);
        assert_eq!(TestPoint3::new(100, 100, 3), point);
    }

    #[test]
    fn test_set_from() {
        let mut point = TestPoint3::new(1, 2, 3);
        point.set_from(&TestPoint3::new(-4, -5, -6));
        assert_eq!(TestPoint3::new(-4, -5, -6), point);
    }

    #[test]
    fn test_set_from_self() {
        let mut point = TestPoint2::new(17, -23);
        let before = point;
        point.set_all(point.to_array());
        assert_eq!(before, point);
        point.set_from(&point.clone());
        assert_eq!(before, point);
    }

    #[test]
    fn test_set_cast_from() {
        let mut point = TestPoint3::new(0i32, 0, 0);
        point.set_cast_from(&TestPoint3::new(-1.9, 2.9, 1e10));
        assert_eq!(TestPoint3::new(-1, 2, i32::MAX), point);

        let mut wide = TestPoint3::new(0.0, 0.0, 0.0);
        wide.set_cast_from(&TestPoint3::new(i64::MAX, -3, 0));
        assert_eq!(TestPoint3::new(9_223_372_036_854_775_808.0, -3.0, 0.0), wide);
    }

    #[test]
    fn test_calculate() {
        let mut point = TestPoint3::new(1, 2, 3);
        point.calculate(|v| v * v);
        assert_eq!(TestPoint3::new(1, 4, 9), point);
    }

    #[test]
    fn test_calculate_reads_before_writing() {
        let writes = Cell::new(Vec::new());
        let mut recording = Recording { inner: TestPoint3::new(1, 2, 3), writes: &writes };
        let mut calls = 0;
        recording.calculate(|v| {
            // No axis may be written while new values are still being computed.
            assert!(writes.take().is_empty());
            calls += 1;
            v + 1
        });
        assert_eq!(3, calls);
        assert_eq!(TestPoint3::new(2, 3, 4), recording.inner);
        assert_eq!(vec![0, 1, 2], writes.take());
    }

    #[test]
    fn test_try_calculate_failure_leaves_aggregate_unmodified() {
        let mut point = TestPoint3::new(6, 0, 3);
        let result = point.try_calculate(|v| 12i32.checked_div(v).ok_or(v));
        assert_eq!(Err(0), result);
        assert_eq!(TestPoint3::new(6, 0, 3), point);

        assert_eq!(Ok::<(), i32>(()), point.try_calculate(|v| Ok(v * 2)));
        assert_eq!(TestPoint3::new(12, 0, 6), point);
    }

    #[test]
    fn test_calculate_with() {
        let mut point = TestPoint2::new(2, 3);
        point.calculate_with(Operator::Plus, [10, 20]);
        assert_eq!(TestPoint2::new(12, 23), point);
        point.calculate_with(|l: i32, r: i32| l.max(r), [15, 5]);
        assert_eq!(TestPoint2::new(15, 23), point);
    }

    #[test]
    fn test_calculate_with_axes() {
        let mut point = TestPoint2::new(2, 3);
        point.calculate_with_axes(Operator::Plus, &TestPoint2::new(10, 20));
        assert_eq!(TestPoint2::new(12, 23), point);

        let mut real = TestPoint2::new(7.0, -7.0);
        real.calculate_with_axes(Operator::Divide, &TestPoint2::new(2.0, 0.0));
        assert_eq!(TestPoint2::new(3.5, f64::NEG_INFINITY), real);
    }

    #[test]
    fn test_calculate_with_axes_wraps_on_overflow() {
        let mut point = TestPoint2::new(i64::MAX, i64::MIN);
        point.calculate_with_axes(Operator::Plus, &TestPoint2::new(1, -1));
        assert_eq!(TestPoint2::new(i64::MIN, i64::MAX), point);

        point.calculate_with_axes(Operator::Divide, &TestPoint2::new(-1, -1));
        assert_eq!(TestPoint2::new(i64::MIN, -i64::MAX), point);

        point.calculate_with_axes(Operator::Modulo, &TestPoint2::new(-1, 7));
        assert_eq!(TestPoint2::new(0, -i64::MAX % 7), point);
    }

    #[test]
    fn test_calculate_with_cast() {
        let mut point = TestPoint3::new(10i64, 20, 30);
        point.calculate_with_cast(Operator::Minus, &TestPoint3::new(0.5, 1.5, -2.5));
        assert_eq!(TestPoint3::new(10, 19, 32), point);
    }

    #[test]
    fn test_try_calculate_with() {
        let checked = |l: i32, r: i32| l.checked_rem(r).ok_or("modulo by zero");

        let mut point = TestPoint2::new(7, 9);
        assert_eq!(Ok(()), point.try_calculate_with(checked, [4, 5]));
        assert_eq!(TestPoint2::new(3, 4), point);
        assert_eq!(Err("modulo by zero"), point.try_calculate_with(checked, [2, 0]));
        assert_eq!(TestPoint2::new(3, 4), point);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_calculate_with_int_division_by_zero() {
        let mut point = TestPoint2::new(7, 9);
        point.calculate_with(Operator::Divide, [1, std::hint::black_box(0)]);
    }

    #[test]
    fn test_object_protocol() {
        let mut object = TestObject2::new("a".to_string(), "b".to_string());
        object.update(Axis::X, |x| x + "c");
        object.calculate_with(|l: String, r: String| l + &r, ["1".to_string(), "2".to_string()]);
        assert_eq!(TestObject2::new("ac1".to_string(), "b2".to_string()), object);

        object.set_from(&TestObject2::new("x".to_string(), "y".to_string()));
        assert_eq!(["x".to_string(), "y".to_string()], object.to_array());
    }
}
