//! Points: positions with two to four axes.

use water_value::{object_aggregate, primitive_aggregate};

primitive_aggregate!(
    /// A point in 2D space.
    Point2, POINT2, 2 { x: X = 0, y: Y = 1 }
);

primitive_aggregate!(
    /// A point in 3D space.
    Point3, POINT3, 3 { x: X = 0, y: Y = 1, z: Z = 2 }
);

primitive_aggregate!(
    /// A point in 3D space with a homogeneous coordinate.
    Point4, POINT4, 4 { x: X = 0, y: Y = 1, z: Z = 2, w: W = 3 }
);

object_aggregate!(
    /// A point in 2D space with coordinates of any type.
    ObjectPoint2, POINT2, 2 { x: X = 0, y: Y = 1 }
);

object_aggregate!(
    /// A point in 3D space with coordinates of any type.
    ObjectPoint3, POINT3, 3 { x: X = 0, y: Y = 1, z: Z = 2 }
);

object_aggregate!(
    /// A point in 3D space with a homogeneous coordinate, with coordinates of any type.
    ObjectPoint4, POINT4, 4 { x: X = 0, y: Y = 1, z: Z = 2, w: W = 3 }
);
