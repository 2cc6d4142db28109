use crate::error::ShapeError;
use crate::vector::Vector2D;
use std::f64::consts::PI;
use std::fmt;

/// Shape tag as exchanged with front-ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Square,
}

impl ShapeKind {
    /// Parse a single-character tag, case-insensitive
    pub fn from_tag(tag: char) -> Result<Self, ShapeError> {
        match tag.to_ascii_uppercase() {
            'R' => Ok(ShapeKind::Rectangle),
            'C' => Ok(ShapeKind::Circle),
            'S' => Ok(ShapeKind::Square),
            _ => Err(ShapeError::UnknownTag(tag)),
        }
    }

    pub fn tag(self) -> char {
        match self {
            ShapeKind::Rectangle => 'R',
            ShapeKind::Circle => 'C',
            ShapeKind::Square => 'S',
        }
    }

    /// Number of dimension values this kind reads
    pub fn arity(self) -> usize {
        match self {
            ShapeKind::Rectangle => 2,
            ShapeKind::Circle | ShapeKind::Square => 1,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
        };
        f.write_str(name)
    }
}

/// Geometry of a body. Every shape is anchored at the top-left corner of its
/// bounding box, so a circle occupies the square `[pos, pos + 2r]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
    Square { side: f64 },
}

impl Shape {
    pub fn rectangle(width: f64, height: f64) -> Result<Self, ShapeError> {
        let shape = Shape::Rectangle { width, height };
        shape.validate()?;
        Ok(shape)
    }

    pub fn circle(radius: f64) -> Result<Self, ShapeError> {
        let shape = Shape::Circle { radius };
        shape.validate()?;
        Ok(shape)
    }

    pub fn square(side: f64) -> Result<Self, ShapeError> {
        let shape = Shape::Square { side };
        shape.validate()?;
        Ok(shape)
    }

    /// Build a shape from a front-end tag and its dimension list.
    /// Extra dimensions are ignored.
    pub fn from_tag(tag: char, dims: &[f64]) -> Result<Self, ShapeError> {
        let kind = ShapeKind::from_tag(tag)?;
        if dims.len() < kind.arity() {
            return Err(ShapeError::MissingDimensions {
                kind,
                expected: kind.arity(),
                got: dims.len(),
            });
        }
        match kind {
            ShapeKind::Rectangle => Shape::rectangle(dims[0], dims[1]),
            ShapeKind::Circle => Shape::circle(dims[0]),
            ShapeKind::Square => Shape::square(dims[0]),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Square { .. } => ShapeKind::Square,
        }
    }

    /// Named dimensions in the order `from_tag` reads them
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Shape::Rectangle { width, height } => vec![("width", width), ("height", height)],
            Shape::Circle { radius } => vec![("radius", radius)],
            Shape::Square { side } => vec![("side", side)],
        }
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        let kind = self.kind();
        for (name, value) in self.dimensions() {
            if !(value.is_finite() && value > 0.0) {
                return Err(ShapeError::InvalidDimension { kind, name, value });
            }
        }
        Ok(())
    }

    /// Width and height of the bounding box measured from the anchor
    pub fn extents(&self) -> Vector2D {
        match *self {
            Shape::Rectangle { width, height } => Vector2D::new(width, height),
            Shape::Circle { radius } => Vector2D::splat(2.0 * radius),
            Shape::Square { side } => Vector2D::splat(side),
        }
    }

    pub fn area(&self) -> f64 {
        match *self {
            Shape::Rectangle { width, height } => width * height,
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Square { side } => side * side,
        }
    }
}
