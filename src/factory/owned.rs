//! An owned geometry model.

use alloc::vec::Vec;

use super::{Coord, GeometryFactory, Ordinate};

#[derive(Debug, Clone, PartialEq)]
pub struct Point(pub Coord);

/// A line string or polygon ring.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineString(pub Vec<Point>);

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polygon {
    pub exterior: LineString,
    pub interiors: Vec<LineString>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(Vec<Point>),
    MultiLineString(Vec<LineString>),
    MultiPolygon(Vec<Polygon>),
    GeometryCollection(Vec<Geometry>),
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<LineString> for Geometry {
    fn from(line_string: LineString) -> Self {
        Self::LineString(line_string)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

/// Factory for the owned model.
///
/// Supports both Z and M unless restricted with [`OwnedFactory::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnedFactory {
    z: bool,
    m: bool,
}

impl OwnedFactory {
    /// A factory supporting only the given ordinates beyond X and Y.
    pub const fn new(z: bool, m: bool) -> Self {
        Self { z, m }
    }
}

impl Default for OwnedFactory {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl GeometryFactory for OwnedFactory {
    type Point = Point;
    type LineString = LineString;
    type LinearRing = LineString;
    type Polygon = Polygon;
    type Geometry = Geometry;

    fn supports(&self, ordinate: Ordinate) -> bool {
        match ordinate {
            Ordinate::Z => self.z,
            Ordinate::M => self.m,
        }
    }

    fn point(&self, coord: Coord) -> Point {
        Point(coord)
    }

    fn line_string(&self, points: Vec<Point>) -> LineString {
        LineString(points)
    }

    fn linear_ring(&self, points: Vec<Point>) -> LineString {
        LineString(points)
    }

    fn polygon(&self, exterior: LineString, interiors: Vec<LineString>) -> Polygon {
        Polygon {
            exterior,
            interiors,
        }
    }

    fn multi_point(&self, members: Vec<Point>) -> Geometry {
        Geometry::MultiPoint(members)
    }

    fn multi_line_string(&self, members: Vec<LineString>) -> Geometry {
        Geometry::MultiLineString(members)
    }

    fn multi_polygon(&self, members: Vec<Polygon>) -> Geometry {
        Geometry::MultiPolygon(members)
    }

    fn collection(&self, members: Vec<Geometry>) -> Geometry {
        Geometry::GeometryCollection(members)
    }
}
