//! Geometry construction capabilities consumed by the decoder.
//!
//! The decoder never builds geometry values itself. Every coordinate and
//! composite it reads is handed to a [`GeometryFactory`], so any geometry
//! model (planar, spherical, projected, or one owned by another crate) can be
//! produced directly from WKB.
//!
//! Two implementations are provided:
//!
//! - [`owned::OwnedFactory`], a small owned model supporting Z and M.
//! - [`geo::GeoTypesFactory`], producing [`geo_types`] values (XY only).
//!
//! _The latter requires Cargo feature `geo-types`._

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "geo-types")]
pub mod geo;
pub mod owned;

/// An ordinate beyond X and Y that a factory may be unable to represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordinate {
    Z,
    M,
}

impl fmt::Display for Ordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Z => "Z",
            Self::M => "M",
        })
    }
}

/// A single decoded coordinate.
///
/// `z` and `m` are present exactly when the record declares them.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    pub const fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub const fn with_z(self, z: f64) -> Self {
        Self { z: Some(z), ..self }
    }

    pub const fn with_m(self, m: f64) -> Self {
        Self { m: Some(m), ..self }
    }
}

/// Construct geometry values from decoded coordinates.
///
/// Each method receives members in input order. Methods are infallible: the
/// decoder has already checked everything it can about the input, and
/// factories representing invalid geometries (such as unclosed rings) is a
/// matter for validation, not decoding.
pub trait GeometryFactory {
    type Point;
    type LineString;
    /// A ring of a polygon.
    type LinearRing;
    type Polygon;
    /// Any geometry, including the multi-geometry and collection kinds.
    type Geometry: From<Self::Point> + From<Self::LineString> + From<Self::Polygon>;

    /// Whether values produced by this factory can carry an ordinate.
    ///
    /// Decoding fails before any value is built when a record declares an
    /// ordinate its factory does not support.
    fn supports(&self, ordinate: Ordinate) -> bool;

    fn point(&self, coord: Coord) -> Self::Point;

    fn line_string(&self, points: Vec<Self::Point>) -> Self::LineString;

    /// Build a polygon ring. Also called with no points for the exterior of a
    /// polygon without rings.
    fn linear_ring(&self, points: Vec<Self::Point>) -> Self::LinearRing;

    fn polygon(&self, exterior: Self::LinearRing, interiors: Vec<Self::LinearRing>)
    -> Self::Polygon;

    fn multi_point(&self, members: Vec<Self::Point>) -> Self::Geometry;

    fn multi_line_string(&self, members: Vec<Self::LineString>) -> Self::Geometry;

    fn multi_polygon(&self, members: Vec<Self::Polygon>) -> Self::Geometry;

    fn collection(&self, members: Vec<Self::Geometry>) -> Self::Geometry;
}
