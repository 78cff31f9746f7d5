/// Macro for generating a field-backed aggregate of primitive scalars.
///
/// The generated type `Name<T>` has a public field per axis and implements [`Aggregate`](crate::Aggregate),
/// [`AxisRead`](crate::AxisRead) and [`AxisWrite`](crate::AxisWrite) for every [`Primitive`](crate::Primitive) `T`, which gives
/// it the derived [`Convert`](crate::Convert) and [`Mutate`](crate::Mutate) operations. It also gets:
/// * The canonical constants `ZERO`, `ONE` and `MINUS`.
/// * `from_axes()` for copy-construction from any primitive aggregate of the same dimension.
/// * Named helpers per axis, e.g. for an axis `x`: `x_as_i32()`, `x_as_i64()`, `x_as_f64()`, `x_boxed()`, `set_x()`,
///   `update_x()` and `try_update_x()`.
/// * `set()` taking one value per axis.
/// * Conversions from and into arrays and tuples.
///
/// # Parameters
/// * `name`: Output type name.
/// * `shape`: The name of the [`Shape`](crate::Shape) constant, e.g. `POINT2`.
/// * `dimension`: The number of axes.
/// * A list of `field: Axis = index` entries, in axis order. The order is verified against the shape at compile time.
///
/// # Example
/// ```
/// use water_value::primitive_aggregate;
///
/// primitive_aggregate!(
///     /// A point in 2D space.
///     Point2, POINT2, 2 { x: X = 0, y: Y = 1 }
/// );
///
/// let mut point = Point2::new(3, 4);
/// point.update_x(|x| x * 2);
/// assert_eq!(6.0, point.x_as_f64());
/// assert_eq!(Point2::new(-1, -1), Point2::<i32>::MINUS);
/// ```
#[macro_export]
macro_rules! primitive_aggregate {
    (
        $(#[$meta:meta])*
        $name:ident, $shape:ident, $dim:literal { $($field:ident : $axis:ident = $index:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
        pub struct $name<T> {
            $(
                #[doc = concat!("The ", stringify!($field), " axis.")]
                pub $field: T,
            )+
        }

        $crate::__aggregate_common!($name, $shape, $dim { $($field : $axis = $index),+ });

        impl<T: $crate::Primitive> $name<T> {
            /// The instance with every axis set to zero.
            pub const ZERO: Self = Self { $($field: T::ZERO),+ };

            /// The instance with every axis set to one.
            pub const ONE: Self = Self { $($field: T::ONE),+ };

            /// The instance with every axis set to minus one.
            pub const MINUS: Self = Self { $($field: T::MINUS_ONE),+ };

            /// Creates a new instance from any primitive aggregate of the same dimension.
            ///
            /// Every axis of `other` is converted to `T` with the conversion rules of `Primitive`.
            pub fn from_axes<A>(other: &A) -> Self where
                A: $crate::AxisRead<$dim> + ?Sized,
                A::Scalar: $crate::__private::num_traits::AsPrimitive<T>,
            {
                let [$($field),+] = <A as $crate::Convert<$dim>>::to_array_as::<T>(other);
                Self::new($($field),+)
            }
        }

        $crate::__private::paste::paste! {
            impl<T: $crate::Primitive> $name<T> {
                $(
                    /// Returns this axis converted to an `i32`.
                    #[inline(always)]
                    pub fn [<$field _as_i32>](&self) -> i32 {
                        $crate::Primitive::as_i32(self.$field)
                    }

                    /// Returns this axis converted to an `i64`.
                    #[inline(always)]
                    pub fn [<$field _as_i64>](&self) -> i64 {
                        $crate::Primitive::as_i64(self.$field)
                    }

                    /// Returns this axis converted to an `f64`.
                    #[inline(always)]
                    pub fn [<$field _as_f64>](&self) -> f64 {
                        $crate::Primitive::as_f64(self.$field)
                    }

                    /// Returns a copy of this axis through the generic contract.
                    #[inline(always)]
                    pub fn [<$field _boxed>](&self) -> ::std::borrow::Cow<'_, T> {
                        ::std::borrow::Cow::Owned(self.$field)
                    }

                    /// Sets this axis.
                    #[inline(always)]
                    pub fn [<set_ $field>](&mut self, value: T) {
                        self.$field = value;
                    }

                    /// Replaces this axis with a value computed from its current value.
                    #[inline(always)]
                    pub fn [<update_ $field>](&mut self, f: impl FnOnce(T) -> T) {
                        self.[<set_ $field>](f(self.$field));
                    }

                    /// Replaces this axis with a value computed from its current value. On error, the axis is left as it was.
                    pub fn [<try_update_ $field>]<E>(&mut self, f: impl FnOnce(T) -> Result<T, E>) -> Result<(), E> {
                        let value = f(self.$field)?;
                        self.[<set_ $field>](value);
                        Ok(())
                    }
                )+

                /// Sets every axis, in axis order.
                pub fn set(&mut self, $($field: T),+) {
                    $(self.[<set_ $field>]($field);)+
                }
            }
        }

        impl<T: $crate::Primitive> $crate::Aggregate for $name<T> {
            type Scalar = T;
            const SHAPE: $crate::Shape = $crate::Shape::$shape;
            const REPRESENTATION: $crate::Representation = <T as $crate::Primitive>::REPRESENTATION;
        }

        impl<T: $crate::Primitive> $crate::AxisRead<$dim> for $name<T> {
            #[inline(always)]
            fn axis(&self, index: usize) -> T {
                match index {
                    $($index => self.$field,)+
                    _ => $crate::axis_out_of_range($crate::Shape::$shape, index),
                }
            }
        }

        impl<T: $crate::Primitive> $crate::AxisWrite<$dim> for $name<T> {
            #[inline(always)]
            fn set_axis(&mut self, index: usize, value: T) {
                match index {
                    $($index => self.$field = value,)+
                    _ => $crate::axis_out_of_range($crate::Shape::$shape, index),
                }
            }
        }
    }
}

/// Macro for generating a field-backed aggregate of arbitrary values.
///
/// The generated type `Name<T>` keeps its fields private and implements [`Aggregate`](crate::Aggregate),
/// [`AxisRead`](crate::AxisRead) and [`AxisWrite`](crate::AxisWrite) for every `T: Clone` with the
/// [`Boxed`](crate::Representation::Boxed) representation. Values are never copied on the way in, and the boxed accessors
/// (`x_boxed()`, [`AxisRead::boxed_axis`](crate::AxisRead::boxed_axis)) borrow the held value instead of copying it. When `T`
/// has interior mutability, changes made through such a borrow are visible to every holder of the value.
///
/// Per axis, e.g. for an axis `x`, the type gets `x()`, `x_boxed()`, `set_x()`, `update_x()` and `try_update_x()`, plus
/// `set()` taking one value per axis and `from_axes()` for copy-construction from an aggregate with the same scalar type.
///
/// The parameters are the same as for [`primitive_aggregate!`].
#[macro_export]
macro_rules! object_aggregate {
    (
        $(#[$meta:meta])*
        $name:ident, $shape:ident, $dim:literal { $($field:ident : $axis:ident = $index:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
        pub struct $name<T> {
            $($field: T,)+
        }

        $crate::__aggregate_common!($name, $shape, $dim { $($field : $axis = $index),+ });

        impl<T: Clone> $name<T> {
            /// Creates a new instance from an aggregate of the same dimension and scalar type. The values are cloned.
            pub fn from_axes<A>(other: &A) -> Self where
                A: $crate::AxisRead<$dim, Scalar=T> + ?Sized,
            {
                let [$($field),+] = <A as $crate::AxisRead<$dim>>::to_array(other);
                Self::new($($field),+)
            }
        }

        $crate::__private::paste::paste! {
            impl<T> $name<T> {
                $(
                    /// Returns a reference to the held value of this axis.
                    #[inline(always)]
                    pub fn $field(&self) -> &T {
                        &self.$field
                    }

                    /// Returns this axis through the generic contract. The held value is borrowed, not copied.
                    #[inline(always)]
                    pub fn [<$field _boxed>](&self) -> ::std::borrow::Cow<'_, T> where
                        T: Clone,
                    {
                        ::std::borrow::Cow::Borrowed(&self.$field)
                    }

                    /// Sets this axis.
                    #[inline(always)]
                    pub fn [<set_ $field>](&mut self, value: T) {
                        self.$field = value;
                    }

                    /// Replaces this axis with a value computed from its current value.
                    pub fn [<update_ $field>](&mut self, f: impl FnOnce(&T) -> T) {
                        let value = f(&self.$field);
                        self.[<set_ $field>](value);
                    }

                    /// Replaces this axis with a value computed from its current value. On error, the axis is left as it was.
                    pub fn [<try_update_ $field>]<E>(&mut self, f: impl FnOnce(&T) -> Result<T, E>) -> Result<(), E> {
                        let value = f(&self.$field)?;
                        self.[<set_ $field>](value);
                        Ok(())
                    }
                )+

                /// Sets every axis, in axis order.
                pub fn set(&mut self, $($field: T),+) {
                    $(self.[<set_ $field>]($field);)+
                }
            }
        }

        impl<T: Clone> $crate::Aggregate for $name<T> {
            type Scalar = T;
            const SHAPE: $crate::Shape = $crate::Shape::$shape;
            const REPRESENTATION: $crate::Representation = $crate::Representation::Boxed;
        }

        impl<T: Clone> $crate::AxisRead<$dim> for $name<T> {
            #[inline(always)]
            fn axis(&self, index: usize) -> T {
                match index {
                    $($index => self.$field.clone(),)+
                    _ => $crate::axis_out_of_range($crate::Shape::$shape, index),
                }
            }

            #[inline(always)]
            fn boxed_axis(&self, index: usize) -> ::std::borrow::Cow<'_, T> {
                match index {
                    $($index => ::std::borrow::Cow::Borrowed(&self.$field),)+
                    _ => $crate::axis_out_of_range($crate::Shape::$shape, index),
                }
            }
        }

        impl<T: Clone> $crate::AxisWrite<$dim> for $name<T> {
            #[inline(always)]
            fn set_axis(&mut self, index: usize, value: T) {
                match index {
                    $($index => self.$field = value,)+
                    _ => $crate::axis_out_of_range($crate::Shape::$shape, index),
                }
            }
        }
    }
}

/// The parts shared by [`primitive_aggregate!`] and [`object_aggregate!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __aggregate_common {
    ($name:ident, $shape:ident, $dim:literal { $($field:ident : $axis:ident = $index:literal),+ }) => {
        const _: () = {
            assert!($crate::Shape::$shape.dimension() == $dim, "Axis count does not match the shape.");
            $(
                assert!(
                    matches!($crate::Shape::$shape.axes()[$index], $crate::Axis::$axis),
                    "Axis order does not match the shape."
                );
            )+
        };

        impl<T> $name<T> {
            /// Creates a new instance.
            ///
            /// The parameters are the axis values, in axis order.
            #[inline(always)]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Consumes this instance and returns the axis values, in axis order.
            #[inline(always)]
            pub fn into_array(self) -> [T; $dim] {
                [$(self.$field),+]
            }
        }

        impl<T> From<[T; $dim]> for $name<T> {
            #[inline(always)]
            fn from([$($field),+]: [T; $dim]) -> Self {
                Self::new($($field),+)
            }
        }

        impl<T> From<($($crate::__scalar!($field, T)),+)> for $name<T> {
            #[inline(always)]
            fn from(($($field),+): ($($crate::__scalar!($field, T)),+)) -> Self {
                Self::new($($field),+)
            }
        }

        impl<T> From<$name<T>> for [T; $dim] {
            #[inline(always)]
            fn from(value: $name<T>) -> Self {
                value.into_array()
            }
        }

        impl<T: ::std::fmt::Display> ::std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::__private::write_axes(f, &[$(&self.$field as &dyn ::std::fmt::Display),+])
            }
        }
    }
}

/// Expands to the type `$ty` once per field, for building tuple types.
#[doc(hidden)]
#[macro_export]
macro_rules! __scalar {
    ($field:ident, $ty:ty) => {
        $ty
    }
}
