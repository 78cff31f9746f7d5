//! Conversions between primitive representations, derived from the native accessor.

use num_traits::AsPrimitive;

use crate::{Axis, AxisRead, Primitive};

/// Derived conversions for every [`AxisRead`] implementation.
///
/// Every method reads the native value through [`AxisRead::axis`] and casts it; nothing is cached and nothing is written. See
/// [`Primitive`] for the exact cast semantics, in particular truncation toward zero for `f64` to integer.
///
/// This trait is implemented for all [`AxisRead`] types and is not meant to be implemented manually.
pub trait Convert<const N: usize>: AxisRead<N> {
    /// Returns an axis converted to `U`.
    fn axis_as<U>(&self, index: usize) -> U where
        Self::Scalar: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.axis(index).as_()
    }

    /// Returns an axis converted to an `i32`.
    #[inline]
    fn axis_as_i32(&self, index: usize) -> i32 where
        Self::Scalar: Primitive,
    {
        self.axis(index).as_i32()
    }

    /// Returns an axis converted to an `i64`.
    #[inline]
    fn axis_as_i64(&self, index: usize) -> i64 where
        Self::Scalar: Primitive,
    {
        self.axis(index).as_i64()
    }

    /// Returns an axis converted to an `f64`.
    #[inline]
    fn axis_as_f64(&self, index: usize) -> f64 where
        Self::Scalar: Primitive,
    {
        self.axis(index).as_f64()
    }

    /// Returns a named axis converted to an `i32`.
    ///
    /// # Panics
    /// This function panics if `axis` is not part of the shape.
    fn get_as_i32(&self, axis: Axis) -> i32 where
        Self::Scalar: Primitive,
    {
        self.get(axis).as_i32()
    }

    /// Returns a named axis converted to an `i64`.
    ///
    /// # Panics
    /// This function panics if `axis` is not part of the shape.
    fn get_as_i64(&self, axis: Axis) -> i64 where
        Self::Scalar: Primitive,
    {
        self.get(axis).as_i64()
    }

    /// Returns a named axis converted to an `f64`.
    ///
    /// # Panics
    /// This function panics if `axis` is not part of the shape.
    fn get_as_f64(&self, axis: Axis) -> f64 where
        Self::Scalar: Primitive,
    {
        self.get(axis).as_f64()
    }

    /// Reads every axis converted to `U`, in axis order.
    fn to_array_as<U>(&self) -> [U; N] where
        Self::Scalar: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.to_array().map(|value| value.as_())
    }

    /// Reads every axis converted to an `i32`, in axis order.
    fn to_i32_array(&self) -> [i32; N] where
        Self::Scalar: Primitive,
    {
        self.to_array().map(Primitive::as_i32)
    }

    /// Reads every axis converted to an `i64`, in axis order.
    fn to_i64_array(&self) -> [i64; N] where
        Self::Scalar: Primitive,
    {
        self.to_array().map(Primitive::as_i64)
    }

    /// Reads every axis converted to an `f64`, in axis order.
    fn to_f64_array(&self) -> [f64; N] where
        Self::Scalar: Primitive,
    {
        self.to_array().map(Primitive::as_f64)
    }
}

impl<A, const N: usize> Convert<N> for A where
    A: AxisRead<N> + ?Sized,
{}
