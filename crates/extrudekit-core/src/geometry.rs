//! Plain 2D geometry value types.
//!
//! Everything here is a pure value: no identity, no interior mutability.
//! Coordinates are `f64` throughout the pipeline.

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Reflects this point through `center`: `center * 2 - self`.
    ///
    /// Used to synthesize the first control point of smooth curve commands.
    pub fn reflected_through(&self, center: Point2D) -> Point2D {
        Point2D::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Point2D,
    /// Maximum corner.
    pub max: Point2D,
}

impl BoundingBox {
    /// Creates a degenerate box containing only `point`.
    pub fn at(point: Point2D) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Computes the bounds of a point slice by linear scan.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Point2D]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::at(*first);
        for point in rest {
            bounds.include(*point);
        }
        Some(bounds)
    }

    /// Grows the box to contain `point`.
    pub fn include(&mut self, point: Point2D) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Length of the box diagonal.
    pub fn diagonal(&self) -> f64 {
        self.min.distance_to(&self.max)
    }

    /// Center of the box.
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}
