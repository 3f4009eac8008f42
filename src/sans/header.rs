//! States processing record headers.

use either::Either::{self, Left, Right};
use thiserror::Error;
use zerocopy::FromBytes;

use super::type_code::{self, Dialect, Dimensions, GeometryKind, SOLID_CODES};

/// An error advancing over a record header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// The type code names no known geometry kind.
    #[error("Unknown type code ({0:#x}).")]
    UnknownTypeCode(u32),
    /// The type code names an SFS-1.2 solid, which is not supported.
    #[error("Unsupported type code ({0}).")]
    UnsupportedTypeCode(u32),
}

/// State token to decode the fixed prefix of a record.
#[derive(Debug)]
pub struct RecordHeader;

impl RecordHeader {
    /// Transition to another state by decoding a byte-order flag and type code.
    ///
    /// Returns a successor state token: an SRID state when the extended
    /// dialect flags one, otherwise the record body.
    pub fn advance(r: [u8; 5], dialect: Dialect) -> Result<Either<Srid, RecordBody>, HeaderError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct Prefix {
            byte_order: u8,
            type_code: [u8; 4],
        }

        let Prefix {
            byte_order,
            type_code,
        } = zerocopy::transmute!(r);

        let is_little_endian = byte_order == 1;
        let raw = if is_little_endian {
            u32::from_le_bytes(type_code)
        } else {
            u32::from_be_bytes(type_code)
        };

        let decoded = type_code::decode(raw, dialect);

        let kind = match decoded.kind() {
            Some(kind) => kind,
            None if SOLID_CODES.contains(&decoded.code) => {
                Err(HeaderError::UnsupportedTypeCode(decoded.code))?
            }
            None => Err(HeaderError::UnknownTypeCode(decoded.code))?,
        };

        let body = RecordBody {
            kind,
            dimensions: decoded.dimensions,
            srid: None,
            is_little_endian,
        };

        Ok(if decoded.has_srid {
            Left(Srid(body))
        } else {
            Right(body)
        })
    }
}

/// State token to decode an embedded SRID.
#[derive(Debug)]
pub struct Srid(RecordBody);

impl Srid {
    /// Transition to the record body by decoding a 4-byte SRID.
    pub fn advance(self, r: [u8; 4]) -> RecordBody {
        let mut body = self.0;

        body.srid = Some(if body.is_little_endian {
            i32::from_le_bytes(r)
        } else {
            i32::from_be_bytes(r)
        });

        body
    }
}

/// A record whose header has been fully decoded.
///
/// The body itself (coordinates, counts and nested records) is variable-length
/// and is read by the caller in the record's byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordBody {
    kind: GeometryKind,
    dimensions: Dimensions,
    srid: Option<i32>,
    is_little_endian: bool,
}

impl RecordBody {
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The SRID embedded in this record, if the header carried one.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    pub fn is_little_endian(&self) -> bool {
        self.is_little_endian
    }

    /// Decode a 4-byte element or ring count in the record's byte order.
    pub fn count(&self, r: [u8; 4]) -> u32 {
        if self.is_little_endian {
            u32::from_le_bytes(r)
        } else {
            u32::from_be_bytes(r)
        }
    }
}
