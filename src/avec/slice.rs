//! Slice-based decoder implementation.

use alloc::vec::Vec;

use either::Either::{self, Left, Right};
use hex::FromHexError;
use thiserror::Error;

use crate::{
    factory::{Coord, GeometryFactory, Ordinate},
    sans::{
        header::{HeaderError, RecordBody, RecordHeader},
        type_code::{Dialect, Dimensions, GeometryKind},
    },
};

use super::{
    Decoder,
    cursor::{Cursor, Float64s, Truncated},
};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the input at offset {offset} ({needed} more bytes needed).")]
    TruncatedInput { offset: usize, needed: usize },
    /// Hex text could not be converted to bytes.
    #[error("Invalid hex input: {reason}.")]
    InvalidHexInput { reason: FromHexError },
    /// A type code names no known geometry kind.
    #[error("Unknown type code ({code:#x}) in the record at offset {offset}.")]
    UnknownTypeCode { offset: usize, code: u32 },
    /// A type code names a geometry kind that is recognised but not supported.
    #[error("Unsupported type code ({code}) in the record at offset {offset}.")]
    UnsupportedTypeCode { offset: usize, code: u32 },
    /// A multi-geometry member is not of the member kind.
    #[error("Expected a {expected} member at offset {offset}, found a {found}.")]
    TypeMismatch {
        offset: usize,
        expected: GeometryKind,
        found: GeometryKind,
    },
    /// A nested record's coordinates disagree with those of the outermost record.
    #[error("Expected {expected} coordinates in the record at offset {offset}, found {found}.")]
    DimensionalityMismatch {
        offset: usize,
        expected: Dimensions,
        found: Dimensions,
    },
    /// A nested record's SRID disagrees with that of the outermost record.
    #[error("Expected SRID {expected} in the record at offset {offset}, found {found}.")]
    SridMismatch {
        offset: usize,
        expected: i32,
        found: i32,
    },
    /// The geometry factory cannot represent the input's coordinates.
    #[error("The geometry factory does not support {ordinate} coordinates.")]
    UnsupportedCapability { ordinate: Ordinate },
    /// Bytes remain after the outermost record.
    #[error("Found {remaining} trailing bytes at offset {offset}.")]
    TrailingData { offset: usize, remaining: usize },
    /// Records are nested deeper than the configured limit.
    #[error("The record at offset {offset} is nested more than {limit} levels deep.")]
    NestingTooDeep { offset: usize, limit: usize },
}

impl Error {
    fn header(err: HeaderError, offset: usize) -> Self {
        match err {
            HeaderError::UnknownTypeCode(code) => Self::UnknownTypeCode { offset, code },
            HeaderError::UnsupportedTypeCode(code) => Self::UnsupportedTypeCode { offset, code },
        }
    }
}

impl From<Truncated> for Error {
    fn from(Truncated { offset, needed }: Truncated) -> Self {
        Self::TruncatedInput { offset, needed }
    }
}

impl From<FromHexError> for Error {
    fn from(reason: FromHexError) -> Self {
        Self::InvalidHexInput { reason }
    }
}

/// Decode a single geometry from a slice.
///
/// This method is also available as [`Decoder::decode`].
pub fn decode<F: GeometryFactory>(decoder: &Decoder<F>, r: &[u8]) -> Result<F::Geometry, Error> {
    decode_inner(decoder, r)
        .inspect_err(|err| tracing::debug!(%err, "failed to decode geometry"))
}

/// Decode a single geometry from hex text.
///
/// Upper- and lower-case digits are accepted. This method is also available
/// as [`Decoder::decode_hex`].
pub fn decode_hex<F: GeometryFactory>(
    decoder: &Decoder<F>,
    text: impl AsRef<[u8]>,
) -> Result<F::Geometry, Error> {
    let r = hex::decode(text)
        .map_err(Error::from)
        .inspect_err(|err| tracing::debug!(%err, "failed to decode hex input"))?;

    decode(decoder, &r)
}

fn decode_inner<F: GeometryFactory>(decoder: &Decoder<F>, r: &[u8]) -> Result<F::Geometry, Error> {
    let mut cursor = Cursor::new(r);

    let body = read_header(&mut cursor, decoder.dialect)?;
    let context = ParseContext::resolve(decoder, &body)?;

    let mut parser = Parser {
        cursor,
        context,
        dialect: decoder.dialect,
        max_depth: decoder.max_depth,
        depth: 0,
    };

    let geometry = parser.parse_body(&body)?;

    let Parser { cursor, .. } = parser;
    if !decoder.ignore_trailing_bytes && cursor.remaining() > 0 {
        Err(Error::TrailingData {
            offset: cursor.offset(),
            remaining: cursor.remaining(),
        })?;
    }

    Ok(geometry)
}

/// Read a record prefix, and its SRID if flagged.
fn read_header(cursor: &mut Cursor, dialect: Dialect) -> Result<RecordBody, Error> {
    let offset = cursor.offset();

    let state =
        RecordHeader::advance(cursor.take()?, dialect).map_err(|err| Error::header(err, offset))?;

    let body = match state {
        Left(state) => state.advance(cursor.take()?),
        Right(body) => body,
    };

    tracing::trace!(
        offset,
        kind = %body.kind(),
        dimensions = %body.dimensions(),
        srid = ?body.srid(),
        "read record header"
    );

    Ok(body)
}

/// State fixed by the outermost record of a decode call.
struct ParseContext<'d, F> {
    dimensions: Dimensions,
    srid: i32,
    factory: Either<&'d F, F>,
}

impl<'d, F: GeometryFactory> ParseContext<'d, F> {
    /// Resolve the factory for the outermost record, checking it can represent
    /// the record's coordinates.
    fn resolve(decoder: &'d Decoder<F>, body: &RecordBody) -> Result<Self, Error> {
        let dimensions = body.dimensions();
        let srid = body.srid().unwrap_or(0);

        let factory = match &decoder.resolver {
            Some(resolve) => {
                tracing::debug!(srid, %dimensions, "resolving geometry factory");
                Right(resolve(srid, dimensions.has_z, dimensions.has_m))
            }
            None => Left(&decoder.factory),
        };

        let context = Self {
            dimensions,
            srid,
            factory,
        };

        for (declared, ordinate) in [
            (dimensions.has_z, Ordinate::Z),
            (dimensions.has_m, Ordinate::M),
        ] {
            if declared && !context.factory().supports(ordinate) {
                Err(Error::UnsupportedCapability { ordinate })?;
            }
        }

        Ok(context)
    }

    fn factory(&self) -> &F {
        match &self.factory {
            Left(factory) => *factory,
            Right(factory) => factory,
        }
    }
}

/// Requirement on the kind of a nested record.
#[derive(Debug, Clone, Copy)]
enum Member {
    /// Collection members may be of any kind.
    Any,
    /// Multi-geometry members must be of the member kind.
    Exactly(GeometryKind),
}

struct Parser<'a, 'd, F> {
    cursor: Cursor<'a>,
    context: ParseContext<'d, F>,
    dialect: Dialect,
    max_depth: usize,
    /// Number of records enclosing the next record to be read.
    depth: usize,
}

impl<F: GeometryFactory> Parser<'_, '_, F> {
    fn parse_body(&mut self, body: &RecordBody) -> Result<F::Geometry, Error> {
        Ok(match body.kind() {
            GeometryKind::Point => self.point(body)?.into(),
            GeometryKind::LineString => self.line_string(body)?.into(),
            GeometryKind::Polygon => self.polygon(body)?.into(),
            GeometryKind::MultiPoint => {
                let members = self.typed_members(body, GeometryKind::Point, Self::point)?;
                self.context.factory().multi_point(members)
            }
            GeometryKind::MultiLineString => {
                let members =
                    self.typed_members(body, GeometryKind::LineString, Self::line_string)?;
                self.context.factory().multi_line_string(members)
            }
            GeometryKind::MultiPolygon => {
                let members = self.typed_members(body, GeometryKind::Polygon, Self::polygon)?;
                self.context.factory().multi_polygon(members)
            }
            GeometryKind::GeometryCollection => {
                let members = self.members(body, |parser| {
                    let member = parser.nested(Member::Any)?;
                    parser.parse_body(&member)
                })?;
                self.context.factory().collection(members)
            }
        })
    }

    /// Read the header of a nested record, checking it against the outermost
    /// record.
    fn nested(&mut self, member: Member) -> Result<RecordBody, Error> {
        let offset = self.cursor.offset();

        if self.depth > self.max_depth {
            Err(Error::NestingTooDeep {
                offset,
                limit: self.max_depth,
            })?;
        }

        let body = read_header(&mut self.cursor, self.dialect)?;

        if let Member::Exactly(expected) = member {
            if body.kind() != expected {
                Err(Error::TypeMismatch {
                    offset,
                    expected,
                    found: body.kind(),
                })?;
            }
        }

        if body.dimensions() != self.context.dimensions {
            Err(Error::DimensionalityMismatch {
                offset,
                expected: self.context.dimensions,
                found: body.dimensions(),
            })?;
        }

        // Members omitting an SRID inherit that of the outermost record.
        if let Some(srid) = body.srid() {
            if srid != self.context.srid {
                Err(Error::SridMismatch {
                    offset,
                    expected: self.context.srid,
                    found: srid,
                })?;
            }
        }

        Ok(body)
    }

    /// Read a member count, then that many nested records.
    fn members<T>(
        &mut self,
        body: &RecordBody,
        mut parse: impl FnMut(&mut Self) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        let count = self.count(body)?;

        let remaining = self.cursor.remaining();
        let mut members = Vec::with_capacity(capacity(count, remaining, MIN_RECORD_LEN));

        self.depth += 1;
        for _ in 0..count {
            members.push(parse(self)?);
        }
        self.depth -= 1;

        Ok(members)
    }

    fn typed_members<T>(
        &mut self,
        body: &RecordBody,
        kind: GeometryKind,
        parse: fn(&mut Self, &RecordBody) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        self.members(body, |parser| {
            let member = parser.nested(Member::Exactly(kind))?;
            parse(parser, &member)
        })
    }

    fn count(&mut self, body: &RecordBody) -> Result<usize, Error> {
        Ok(body.count(self.cursor.take()?) as usize)
    }

    fn point(&mut self, body: &RecordBody) -> Result<F::Point, Error> {
        let dimensions = self.context.dimensions;
        let mut values = self
            .cursor
            .read_f64s(body.is_little_endian(), dimensions.count())?;

        Ok(self.context.factory().point(coord(dimensions, &mut values)))
    }

    fn line_string(&mut self, body: &RecordBody) -> Result<F::LineString, Error> {
        let count = self.count(body)?;
        let points = self.points(body, count)?;

        Ok(self.context.factory().line_string(points))
    }

    fn polygon(&mut self, body: &RecordBody) -> Result<F::Polygon, Error> {
        let count = self.count(body)?;

        let remaining = self.cursor.remaining();
        let mut rings = Vec::with_capacity(capacity(count, remaining, MIN_RING_LEN));
        for _ in 0..count {
            let count = self.count(body)?;
            let points = self.points(body, count)?;
            rings.push(self.context.factory().linear_ring(points));
        }

        let factory = self.context.factory();

        let mut rings = rings.into_iter();
        let exterior = rings
            .next()
            .unwrap_or_else(|| factory.linear_ring(Vec::new()));

        Ok(factory.polygon(exterior, rings.collect()))
    }

    /// Read a run of coordinates and build a point from each.
    fn points(&mut self, body: &RecordBody, count: usize) -> Result<Vec<F::Point>, Error> {
        let dimensions = self.context.dimensions;
        let len = count.saturating_mul(dimensions.count());

        let mut values = self.cursor.read_f64s(body.is_little_endian(), len)?;
        let factory = self.context.factory();

        Ok((0..count)
            .map(|_| factory.point(coord(dimensions, &mut values)))
            .collect())
    }
}

/// Smallest encoded record: byte order, type code and an empty count.
const MIN_RECORD_LEN: usize = 1 + 4 + 4;

/// Smallest encoded ring: an empty point count.
const MIN_RING_LEN: usize = 4;

/// Capacity for `count` items of at least `min_len` bytes each, limited to
/// what `remaining` bytes of input could hold.
fn capacity(count: usize, remaining: usize, min_len: usize) -> usize {
    count.min(remaining / min_len)
}

/// Assemble the next coordinate from a run of ordinates.
///
/// The run must hold at least `dimensions.count()` more values; missing
/// ordinates read as NaN.
fn coord(dimensions: Dimensions, values: &mut Float64s) -> Coord {
    let mut next = || values.next().unwrap_or(f64::NAN);

    let mut coord = Coord::xy(next(), next());
    if dimensions.has_z {
        coord.z = Some(next());
    }
    if dimensions.has_m {
        coord.m = Some(next());
    }

    coord
}
