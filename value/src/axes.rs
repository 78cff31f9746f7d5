//! The minimal per-axis contracts that storage types implement.

use std::borrow::Cow;

use crate::{Axis, Representation, Shape};

/// A fixed-size aggregate of scalars, e.g. a 3D point of `i32`.
pub trait Aggregate {
    /// The scalar type of every axis.
    type Scalar: Clone;

    /// The shape of the aggregate.
    const SHAPE: Shape;

    /// The representation of [`Aggregate::Scalar`].
    const REPRESENTATION: Representation;
}

/// Read access to the `N` axes of an aggregate.
///
/// Implementors provide [`AxisRead::axis`]; everything else is derived from it. Axis indices follow the order of
/// [`Shape::axes`].
pub trait AxisRead<const N: usize>: Aggregate {
    /// Returns the value of an axis in the native representation.
    ///
    /// # Panics
    /// This function panics if `index` is not less than `N`.
    fn axis(&self, index: usize) -> Self::Scalar;

    /// Returns the value of an axis for use through the generic contract.
    ///
    /// This is an interoperability path; prefer [`AxisRead::axis`] when the representation is known. The default implementation
    /// returns an owned copy. Generic holders override it to return a borrow of the held value, so callers may observe shared
    /// state when [`Aggregate::Scalar`] has interior mutability.
    ///
    /// # Panics
    /// This function panics if `index` is not less than `N`.
    fn boxed_axis(&self, index: usize) -> Cow<'_, Self::Scalar> {
        Cow::Owned(self.axis(index))
    }

    /// Returns the value of a named axis.
    ///
    /// # Panics
    /// This function panics if `axis` is not part of [`Aggregate::SHAPE`].
    fn get(&self, axis: Axis) -> Self::Scalar {
        self.axis(Self::SHAPE.axis_index(axis))
    }

    /// Returns the value of a named axis through [`AxisRead::boxed_axis`].
    ///
    /// # Panics
    /// This function panics if `axis` is not part of [`Aggregate::SHAPE`].
    fn get_boxed(&self, axis: Axis) -> Cow<'_, Self::Scalar> {
        self.boxed_axis(Self::SHAPE.axis_index(axis))
    }

    /// Reads every axis, in axis order.
    fn to_array(&self) -> [Self::Scalar; N] {
        std::array::from_fn(|index| self.axis(index))
    }
}

/// Write access to the `N` axes of an aggregate.
pub trait AxisWrite<const N: usize>: AxisRead<N> {
    /// Sets the value of an axis.
    ///
    /// # Panics
    /// This function panics if `index` is not less than `N`.
    fn set_axis(&mut self, index: usize, value: Self::Scalar);
}

/// Reports an axis index outside of a shape.
#[doc(hidden)]
#[cold]
#[track_caller]
pub fn axis_out_of_range(shape: Shape, index: usize) -> ! {
    panic!("Axis index {} is out of range for {}.", index, shape)
}

/// Collects the first `N` values into an array, stopping at the first error.
///
/// No value is pulled from `values` after an error.
///
/// # Panics
/// This function panics if `values` yields fewer than `N` values.
pub(crate) fn try_collect_array<T, E, const N: usize>(
    values: impl IntoIterator<Item=Result<T, E>>,
) -> Result<[T; N], E> {
    let mut values = values.into_iter();
    let mut error = None;
    let collected: [Option<T>; N] = std::array::from_fn(|_| {
        if error.is_some() {
            return None;
        }
        match values.next()? {
            Ok(value) => Some(value),
            Err(err) => {
                error = Some(err);
                None
            }
        }
    });

    if let Some(err) = error {
        return Err(err);
    }
    Ok(collected.map(|value| value.unwrap_or_else(|| panic!("Expected {} axis values.", N))))
}

/// Combines two arrays element-wise, in order.
pub(crate) fn zip_map<L, R, O, const N: usize>(left: [L; N], right: [R; N], mut f: impl FnMut(L, R) -> O) -> [O; N] {
    let combined = left.into_iter()
        .zip(right)
        .map(|(l, r)| Ok::<O, std::convert::Infallible>(f(l, r)));
    match try_collect_array(combined) {
        Ok(array) => array,
        Err(never) => match never {},
    }
}
