//! Factory producing [`geo_types`] values.
//!
//! _Requires Cargo feature `geo-types`._

use alloc::vec::Vec;

use geo_types::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

use super::{Coord, GeometryFactory, Ordinate};

/// Factory for planar `geo_types` geometries.
///
/// `geo_types` coordinates are two-dimensional, so records declaring Z or M
/// are rejected. Rings are closed by [`Polygon::new`] if the input left them
/// open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GeoTypesFactory;

impl GeometryFactory for GeoTypesFactory {
    type Point = Point<f64>;
    type LineString = LineString<f64>;
    type LinearRing = LineString<f64>;
    type Polygon = Polygon<f64>;
    type Geometry = Geometry<f64>;

    fn supports(&self, _: Ordinate) -> bool {
        false
    }

    fn point(&self, coord: Coord) -> Point<f64> {
        Point::new(coord.x, coord.y)
    }

    fn line_string(&self, points: Vec<Point<f64>>) -> LineString<f64> {
        points.into_iter().collect()
    }

    fn linear_ring(&self, points: Vec<Point<f64>>) -> LineString<f64> {
        points.into_iter().collect()
    }

    fn polygon(&self, exterior: LineString<f64>, interiors: Vec<LineString<f64>>) -> Polygon<f64> {
        Polygon::new(exterior, interiors)
    }

    fn multi_point(&self, members: Vec<Point<f64>>) -> Geometry<f64> {
        MultiPoint(members).into()
    }

    fn multi_line_string(&self, members: Vec<LineString<f64>>) -> Geometry<f64> {
        MultiLineString(members).into()
    }

    fn multi_polygon(&self, members: Vec<Polygon<f64>>) -> Geometry<f64> {
        MultiPolygon(members).into()
    }

    fn collection(&self, members: Vec<Geometry<f64>>) -> Geometry<f64> {
        Geometry::GeometryCollection(GeometryCollection(members))
    }
}
