use std::fmt::{Display, Formatter};

/// The kind of geometric aggregate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    /// A position.
    Point,
    /// A displacement.
    Vector,
    /// An extent.
    Size,
    /// A color with optional alpha.
    Color,
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            ShapeKind::Point => "Point",
            ShapeKind::Vector => "Vector",
            ShapeKind::Size => "Size",
            ShapeKind::Color => "Color",
        };
        f.write_str(string)
    }
}

/// A named scalar slot of a shape.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
    Width,
    Height,
    Depth,
    Red,
    Green,
    Blue,
    Alpha,
}

impl Axis {
    /// The lower-case name of the axis, which is also the name of the backing field.
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::W => "w",
            Axis::Width => "width",
            Axis::Height => "height",
            Axis::Depth => "depth",
            Axis::Red => "red",
            Axis::Green => "green",
            Axis::Blue => "blue",
            Axis::Alpha => "alpha",
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const SPATIAL_AXES: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];
const EXTENT_AXES: [Axis; 3] = [Axis::Width, Axis::Height, Axis::Depth];
const COLOR_AXES: [Axis; 4] = [Axis::Red, Axis::Green, Axis::Blue, Axis::Alpha];

/// The identity of an aggregate type: its kind and its axes.
///
/// The order of [`Shape::axes`] is fixed. Every multi-axis operation reads and writes axes in this order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    axes: &'static [Axis],
}

impl Shape {
    pub const POINT2: Shape = Shape::new(ShapeKind::Point, &SPATIAL_AXES, 2);
    pub const POINT3: Shape = Shape::new(ShapeKind::Point, &SPATIAL_AXES, 3);
    pub const POINT4: Shape = Shape::new(ShapeKind::Point, &SPATIAL_AXES, 4);
    pub const VECTOR2: Shape = Shape::new(ShapeKind::Vector, &SPATIAL_AXES, 2);
    pub const VECTOR3: Shape = Shape::new(ShapeKind::Vector, &SPATIAL_AXES, 3);
    pub const VECTOR4: Shape = Shape::new(ShapeKind::Vector, &SPATIAL_AXES, 4);
    pub const SIZE2: Shape = Shape::new(ShapeKind::Size, &EXTENT_AXES, 2);
    pub const SIZE3: Shape = Shape::new(ShapeKind::Size, &EXTENT_AXES, 3);
    pub const COLOR3: Shape = Shape::new(ShapeKind::Color, &COLOR_AXES, 3);
    pub const COLOR4: Shape = Shape::new(ShapeKind::Color, &COLOR_AXES, 4);

    /// All supported shapes.
    pub const ALL: [Shape; 10] = [
        Shape::POINT2, Shape::POINT3, Shape::POINT4,
        Shape::VECTOR2, Shape::VECTOR3, Shape::VECTOR4,
        Shape::SIZE2, Shape::SIZE3,
        Shape::COLOR3, Shape::COLOR4,
    ];

    const fn new(kind: ShapeKind, axes: &'static [Axis], dimension: usize) -> Self {
        let (axes, _) = axes.split_at(dimension);
        Self { kind, axes }
    }

    /// Looks up a supported shape.
    ///
    /// # Parameters
    /// * `kind`: The kind of aggregate.
    /// * `dimension`: The number of axes.
    ///
    /// # Return
    /// The shape, or [`None`] if the combination is not supported (e.g. a 4-axis size or a 2-axis color).
    pub fn of(kind: ShapeKind, dimension: usize) -> Option<Shape> {
        Self::ALL.into_iter().find(|shape| shape.kind == kind && shape.dimension() == dimension)
    }

    #[inline(always)]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline(always)]
    pub const fn dimension(&self) -> usize {
        self.axes.len()
    }

    /// The axes in evaluation order.
    #[inline(always)]
    pub const fn axes(&self) -> &'static [Axis] {
        self.axes
    }

    /// Returns the position of `axis` in [`Shape::axes`], if the shape has that axis.
    pub fn index_of(&self, axis: Axis) -> Option<usize> {
        self.axes.iter().position(|candidate| *candidate == axis)
    }

    /// Returns the position of `axis` in [`Shape::axes`].
    ///
    /// # Panics
    /// This function panics if the shape does not have `axis`.
    pub fn axis_index(&self, axis: Axis) -> usize {
        self.index_of(axis)
            .unwrap_or_else(|| panic!("Axis {} is not part of {}.", axis, self))
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind, self.dimension())
    }
}
