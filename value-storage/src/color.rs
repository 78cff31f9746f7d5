//! Colors: red, green and blue channels with an optional alpha channel.

use water_value::{object_aggregate, primitive_aggregate};

primitive_aggregate!(
    /// An opaque color.
    Color3, COLOR3, 3 { red: Red = 0, green: Green = 1, blue: Blue = 2 }
);

primitive_aggregate!(
    /// A color with an alpha channel.
    Color4, COLOR4, 4 { red: Red = 0, green: Green = 1, blue: Blue = 2, alpha: Alpha = 3 }
);

object_aggregate!(
    /// An opaque color with channels of any type.
    ObjectColor3, COLOR3, 3 { red: Red = 0, green: Green = 1, blue: Blue = 2 }
);

object_aggregate!(
    /// A color with an alpha channel, with channels of any type.
    ObjectColor4, COLOR4, 4 { red: Red = 0, green: Green = 1, blue: Blue = 2, alpha: Alpha = 3 }
);
