//! Vectors: displacements with two to four axes.

use water_value::{object_aggregate, primitive_aggregate};

primitive_aggregate!(
    /// A vector in 2D space.
    Vector2, VECTOR2, 2 { x: X = 0, y: Y = 1 }
);

primitive_aggregate!(
    /// A vector in 3D space.
    Vector3, VECTOR3, 3 { x: X = 0, y: Y = 1, z: Z = 2 }
);

primitive_aggregate!(
    /// A vector with four axes.
    Vector4, VECTOR4, 4 { x: X = 0, y: Y = 1, z: Z = 2, w: W = 3 }
);

object_aggregate!(
    /// A vector in 2D space with components of any type.
    ObjectVector2, VECTOR2, 2 { x: X = 0, y: Y = 1 }
);

object_aggregate!(
    /// A vector in 3D space with components of any type.
    ObjectVector3, VECTOR3, 3 { x: X = 0, y: Y = 1, z: Z = 2 }
);

object_aggregate!(
    /// A vector with four axes with components of any type.
    ObjectVector4, VECTOR4, 4 { x: X = 0, y: Y = 1, z: Z = 2, w: W = 3 }
);
