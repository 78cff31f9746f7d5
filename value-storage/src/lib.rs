//! Concrete value holders for every supported shape.
//!
//! Each shape comes as a primitive holder (e.g. [`Point2<T>`] for `T` in `i32`, `i64` and `f64`) and as a generic holder
//! (e.g. [`ObjectPoint2<T>`]) for scalars of any type. The `Int`, `Long` and `Double` aliases name the primitive holders
//! per representation, e.g. [`IntPoint2`] is a `Point2<i32>`.
//!
//! All operations come from the traits in [`water_value::prelude`].

mod color;
mod point;
mod size;
mod vector;

pub use color::{Color3, Color4, ObjectColor3, ObjectColor4};
pub use point::{ObjectPoint2, ObjectPoint3, ObjectPoint4, Point2, Point3, Point4};
pub use size::{ObjectSize2, ObjectSize3, Size2, Size3};
pub use vector::{ObjectVector2, ObjectVector3, ObjectVector4, Vector2, Vector3, Vector4};

macro_rules! primitive_aliases {
    ($($name:ident),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = "A [`" $name "`] with `i32` axes."]
                pub type [<Int $name>] = $name<i32>;
                #[doc = "A [`" $name "`] with `i64` axes."]
                pub type [<Long $name>] = $name<i64>;
                #[doc = "A [`" $name "`] with `f64` axes."]
                pub type [<Double $name>] = $name<f64>;
            )+
        }
    };
}

primitive_aliases!(Point2, Point3, Point4, Vector2, Vector3, Vector4, Size2, Size3, Color3, Color4);

/// Invokes `$check!(Name, dimension)` for every primitive holder.
#[cfg(test)]
macro_rules! for_each_shape {
    ($check:ident) => {
        $check!(Point2, 2);
        $check!(Point3, 3);
        $check!(Point4, 4);
        $check!(Vector2, 2);
        $check!(Vector3, 3);
        $check!(Vector4, 4);
        $check!(Size2, 2);
        $check!(Size3, 3);
        $check!(Color3, 3);
        $check!(Color4, 4);
    };
}
