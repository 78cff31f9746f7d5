//! Sizes: extents with two or three axes.

use water_value::{object_aggregate, primitive_aggregate};

primitive_aggregate!(
    /// A 2D extent.
    Size2, SIZE2, 2 { width: Width = 0, height: Height = 1 }
);

primitive_aggregate!(
    /// A 3D extent.
    Size3, SIZE3, 3 { width: Width = 0, height: Height = 1, depth: Depth = 2 }
);

object_aggregate!(
    /// A 2D extent with dimensions of any type.
    ObjectSize2, SIZE2, 2 { width: Width = 0, height: Height = 1 }
);

object_aggregate!(
    /// A 3D extent with dimensions of any type.
    ObjectSize3, SIZE3, 3 { width: Width = 0, height: Height = 1, depth: Depth = 2 }
);

#[cfg(test)]
mod test_size {
    use water_value::prelude::*;
    use water_value::Axis;

    use super::{ObjectSize2, Size2, Size3};

    #[test]
    fn test_named_axes() {
        let mut size = Size3::new(640, 480, 1);
        assert_eq!(480, size.get(Axis::Height));
        assert_eq!(1.0, size.depth_as_f64());

        size.update_depth(|depth| depth + 15);
        size.update(Axis::Width, |width| width * 2);
        assert_eq!(Size3::new(1280, 480, 16), size);
    }

    #[test]
    #[should_panic(expected = "Axis x is not part of Size2.")]
    fn test_foreign_axis() {
        Size2::new(1, 2).get(Axis::X);
    }

    #[test]
    fn test_scale() {
        let mut size = Size2::new(640.0, 480.0);
        size.calculate_with(Operator::Divide, [2.0, 3.0]);
        assert_eq!(Size2::new(320.0, 160.0), size);
        assert_eq!([320, 160], size.to_i32_array());
    }

    #[test]
    fn test_try_set_each() {
        let mut size = Size3::new(1i64, 2, 3);
        let result = size.try_set_each(|axis| match axis {
            Axis::Depth => Err(axis),
            _ => Ok(10),
        });
        assert_eq!(Err(Axis::Depth), result);
        assert_eq!(Size3::new(10, 10, 3), size);
    }

    #[test]
    fn test_object_size() {
        let mut size = ObjectSize2::new(Some(4), None);
        size.update_height(|height| height.or(Some(3)));
        size.calculate(|value| value.map(|value| value * 2));
        assert_eq!(ObjectSize2::new(Some(8), Some(6)), size);
        assert_eq!(&Some(8), size.width());
    }
}
