//! Interpretation of the type-code field shared by a record header.

use core::fmt;

use tartan_bitfield::bitfield;

/// Type-code dialects recognised in addition to plain WKB.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// EWKB: bits 31, 30 and 29 flag Z, M and an embedded SRID.
    pub extended: bool,
    /// SFS-1.2 / ISO: thousands flag Z (`1000`), M (`2000`) or both (`3000`).
    pub numeric_suffix: bool,
}

/// Presence of ordinates beyond X and Y.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub has_z: bool,
    pub has_m: bool,
}

impl Dimensions {
    pub const XY: Self = Self::new(false, false);
    pub const XYZ: Self = Self::new(true, false);
    pub const XYM: Self = Self::new(false, true);
    pub const XYZM: Self = Self::new(true, true);

    pub const fn new(has_z: bool, has_m: bool) -> Self {
        Self { has_z, has_m }
    }

    /// Number of ordinates stored per coordinate.
    pub const fn count(self) -> usize {
        2 + self.has_z as usize + self.has_m as usize
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match (self.has_z, self.has_m) {
            (false, false) => "XY",
            (true, false) => "XYZ",
            (false, true) => "XYM",
            (true, true) => "XYZM",
        })
    }
}

/// A supported geometry kind.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryKind {
    /// Map a bare kind code, without dialect flags, to a geometry kind.
    pub const fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::Point,
            2 => Self::LineString,
            3 => Self::Polygon,
            4 => Self::MultiPoint,
            5 => Self::MultiLineString,
            6 => Self::MultiPolygon,
            7 => Self::GeometryCollection,
            _ => return None,
        })
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        })
    }
}

/// Kind codes of the SFS-1.2 solids: polyhedral surface, TIN and triangle.
pub const SOLID_CODES: [u32; 3] = [15, 16, 17];

/// A type code with its dialect flags extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCode {
    /// The remaining kind code. Not necessarily a known kind.
    pub code: u32,
    pub dimensions: Dimensions,
    /// Whether a 4-byte SRID follows the type code.
    pub has_srid: bool,
}

impl TypeCode {
    /// The geometry kind named by the remaining code, if supported.
    pub const fn kind(&self) -> Option<GeometryKind> {
        GeometryKind::from_code(self.code)
    }
}

/// Extract dialect flags from a raw type code.
///
/// Extended flags are masked off before the numeric suffix is examined. With
/// both dialects disabled the raw value is passed through untouched, so high
/// bits set by an EWKB writer surface as an unknown code.
pub fn decode(raw: u32, dialect: Dialect) -> TypeCode {
    let mut code = raw;
    let mut has_z = false;
    let mut has_m = false;
    let mut has_srid = false;

    if dialect.extended {
        bitfield! {
            struct ExtendedCode(u32) {
                [0..28] code: u32,
                [29] has_srid,
                [30] has_m,
                [31] has_z,
            }
        }

        let extended = ExtendedCode(code);

        has_z |= extended.has_z();
        has_m |= extended.has_m();
        has_srid = extended.has_srid();
        code = extended.code();
    }

    if dialect.numeric_suffix {
        let thousands = code / 1000;

        has_z |= thousands & 1 != 0;
        has_m |= thousands & 2 != 0;
        code %= 1000;
    }

    TypeCode {
        code,
        dimensions: Dimensions::new(has_z, has_m),
        has_srid,
    }
}
