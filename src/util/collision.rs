#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::linalg::{AxisAlignedExtent, Vec2};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ShapeType {
    Point,
    Circle,
    Aabb,
}

/// Pairwise intersection tests over the shape variants, dispatched on both
/// operands. Mirrored methods delegate to one canonical predicate per pair,
/// so `a.intersects(b) == b.intersects(a)` holds for every combination.
///
/// None of the tests mutate or allocate; malformed inputs (e.g. a negative
/// radius) are not validated.
pub trait Shape: AxisAlignedExtent + Debug + Send + Sync + 'static {
    fn shape_type(&self) -> ShapeType;

    fn intersects_point(&self, other: &Point) -> bool;
    fn intersects_circle(&self, other: &Circle) -> bool;
    fn intersects_aabb(&self, other: &Aabb) -> bool;

    fn intersects(&self, other: &GenericShape) -> bool {
        match other {
            GenericShape::Point(point) => self.intersects_point(point),
            GenericShape::Circle(circle) => self.intersects_circle(circle),
            GenericShape::Aabb(aabb) => self.intersects_aabb(aabb),
        }
    }

    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    fn as_generic(&self) -> GenericShape
    where
        Self: Clone,
    {
        self.clone().into_generic()
    }
    fn into_generic(self) -> GenericShape
    where
        Self: Sized;
}

/// A zero-area location.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    position: Vec2,
}

impl Point {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2 { x, y },
        }
    }
}

impl AxisAlignedExtent for Point {
    fn aa_extent(&self) -> Vec2 {
        Vec2::zero()
    }

    fn centre(&self) -> Vec2 {
        self.position
    }
}

impl Shape for Point {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Point
    }

    fn intersects_point(&self, other: &Point) -> bool {
        (other.position - self.position).len_squared() < POINT_MERGE_EPSILON
    }

    fn intersects_circle(&self, other: &Circle) -> bool {
        let dist_squared = (other.centre() - self.position).len_squared();
        dist_squared <= other.radius() * other.radius()
    }

    fn intersects_aabb(&self, other: &Aabb) -> bool {
        if self.position.x < other.min().x || self.position.x > other.max().x {
            return false;
        }
        if self.position.y < other.min().y || self.position.y > other.max().y {
            return false;
        }
        true
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn into_generic(self) -> GenericShape {
        GenericShape::Point(self)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    centre: Vec2,
    radius: f32,
}

impl Circle {
    pub fn new(centre: Vec2, radius: f32) -> Self {
        Self { centre, radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }
}

impl AxisAlignedExtent for Circle {
    fn aa_extent(&self) -> Vec2 {
        Vec2::splat(2. * self.radius)
    }

    fn centre(&self) -> Vec2 {
        self.centre
    }
}

impl Shape for Circle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn intersects_point(&self, other: &Point) -> bool {
        other.intersects_circle(self)
    }

    fn intersects_circle(&self, other: &Circle) -> bool {
        let dist_squared = (other.centre - self.centre).len_squared();
        let radii = self.radius + other.radius;
        dist_squared <= radii * radii
    }

    // Coarse short-circuit: any centre coordinate within the box's range on
    // that axis counts as a hit, regardless of the other axis. The fallback
    // uses strict `<`, unlike the other predicates.
    fn intersects_aabb(&self, other: &Aabb) -> bool {
        let min = other.min();
        let max = other.max();
        if self.centre.x >= min.x && self.centre.x <= max.x {
            return true;
        }
        if self.centre.y >= min.y && self.centre.y <= max.y {
            return true;
        }

        let nearest = Vec2 {
            x: self.centre.x.clamp(min.x, max.x),
            y: self.centre.y.clamp(min.y, max.y),
        };
        (nearest - self.centre).len_squared() < self.radius * self.radius
    }

    fn position(&self) -> Vec2 {
        self.centre
    }

    fn set_position(&mut self, position: Vec2) {
        self.centre = position;
    }

    fn into_generic(self) -> GenericShape {
        GenericShape::Circle(self)
    }
}

/// Axis-aligned bounding box. `min.x <= max.x && min.y <= max.y` holds after
/// every constructor and mutation; inputs are renormalized per axis rather
/// than trusted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: Vec2 {
                x: min.x.min(max.x),
                y: min.y.min(max.y),
            },
            max: Vec2 {
                x: min.x.max(max.x),
                y: min.y.max(max.y),
            },
        }
    }
    #[must_use]
    pub fn from_centre(centre: Vec2, half_widths: Vec2) -> Self {
        Self::new(centre - half_widths.abs(), centre + half_widths.abs())
    }
    #[must_use]
    pub fn from_top_left(top_left: Vec2, extent: Vec2) -> Self {
        Self::new(top_left, top_left + extent)
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }
    pub fn max(&self) -> Vec2 {
        self.max
    }
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Renormalizes against the current maximum, so a value past it swaps
    /// the bounds rather than inverting the box.
    pub fn set_min(&mut self, min: Vec2) {
        let max = self.max;
        self.min = Vec2 {
            x: min.x.min(max.x),
            y: min.y.min(max.y),
        };
        self.max = Vec2 {
            x: min.x.max(max.x),
            y: min.y.max(max.y),
        };
    }

    pub fn set_max(&mut self, max: Vec2) {
        let min = self.min;
        self.max = Vec2 {
            x: max.x.max(min.x),
            y: max.y.max(min.y),
        };
        self.min = Vec2 {
            x: max.x.min(min.x),
            y: max.y.min(min.y),
        };
    }

    /// Resizes about the current centre.
    pub fn set_size(&mut self, size: Vec2) {
        let centre = self.position();
        *self = Self::new(centre - size / 2, centre + size / 2);
    }
}

impl AxisAlignedExtent for Aabb {
    fn aa_extent(&self) -> Vec2 {
        self.size()
    }

    fn centre(&self) -> Vec2 {
        (self.min + self.max) / 2
    }
}

impl Shape for Aabb {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Aabb
    }

    fn intersects_point(&self, other: &Point) -> bool {
        other.intersects_aabb(self)
    }

    fn intersects_circle(&self, other: &Circle) -> bool {
        other.intersects_aabb(self)
    }

    // Touching edges do not count, unlike the inclusive point/circle tests.
    fn intersects_aabb(&self, other: &Aabb) -> bool {
        if self.min.x >= other.max.x || self.max.x <= other.min.x {
            return false;
        }
        if self.min.y >= other.max.y || self.max.y <= other.min.y {
            return false;
        }
        true
    }

    fn position(&self) -> Vec2 {
        self.centre()
    }

    /// Moves the box's centre, preserving its size.
    fn set_position(&mut self, position: Vec2) {
        let half = self.size() / 2;
        self.min = position - half;
        self.max = position + half;
    }

    fn into_generic(self) -> GenericShape {
        GenericShape::Aabb(self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GenericShape {
    Point(Point),
    Circle(Circle),
    Aabb(Aabb),
}

impl AxisAlignedExtent for GenericShape {
    fn aa_extent(&self) -> Vec2 {
        match self {
            GenericShape::Point(s) => s.aa_extent(),
            GenericShape::Circle(s) => s.aa_extent(),
            GenericShape::Aabb(s) => s.aa_extent(),
        }
    }

    fn centre(&self) -> Vec2 {
        match self {
            GenericShape::Point(s) => s.centre(),
            GenericShape::Circle(s) => s.centre(),
            GenericShape::Aabb(s) => s.centre(),
        }
    }
}

impl Shape for GenericShape {
    fn shape_type(&self) -> ShapeType {
        match self {
            GenericShape::Point(s) => s.shape_type(),
            GenericShape::Circle(s) => s.shape_type(),
            GenericShape::Aabb(s) => s.shape_type(),
        }
    }

    fn intersects_point(&self, other: &Point) -> bool {
        match self {
            GenericShape::Point(s) => s.intersects_point(other),
            GenericShape::Circle(s) => s.intersects_point(other),
            GenericShape::Aabb(s) => s.intersects_point(other),
        }
    }

    fn intersects_circle(&self, other: &Circle) -> bool {
        match self {
            GenericShape::Point(s) => s.intersects_circle(other),
            GenericShape::Circle(s) => s.intersects_circle(other),
            GenericShape::Aabb(s) => s.intersects_circle(other),
        }
    }

    fn intersects_aabb(&self, other: &Aabb) -> bool {
        match self {
            GenericShape::Point(s) => s.intersects_aabb(other),
            GenericShape::Circle(s) => s.intersects_aabb(other),
            GenericShape::Aabb(s) => s.intersects_aabb(other),
        }
    }

    fn position(&self) -> Vec2 {
        match self {
            GenericShape::Point(s) => s.position(),
            GenericShape::Circle(s) => s.position(),
            GenericShape::Aabb(s) => s.position(),
        }
    }

    fn set_position(&mut self, position: Vec2) {
        match self {
            GenericShape::Point(s) => s.set_position(position),
            GenericShape::Circle(s) => s.set_position(position),
            GenericShape::Aabb(s) => s.set_position(position),
        }
    }

    fn into_generic(self) -> GenericShape {
        self
    }
}

impl From<Point> for GenericShape {
    fn from(value: Point) -> Self {
        GenericShape::Point(value)
    }
}
impl From<Circle> for GenericShape {
    fn from(value: Circle) -> Self {
        GenericShape::Circle(value)
    }
}
impl From<Aabb> for GenericShape {
    fn from(value: Aabb) -> Self {
        GenericShape::Aabb(value)
    }
}
