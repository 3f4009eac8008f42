//! A configurable decoder over complete records.
//!
//! Most users should begin with [`Decoder`], which reads a single geometry
//! from a slice, hex text or (with Cargo feature `std`) a reader, building it
//! with a [`GeometryFactory`].

use alloc::boxed::Box;
use core::fmt;

use crate::{factory::GeometryFactory, sans::type_code::Dialect};

pub mod cursor;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::{Error, decode as decode_slice};

/// Default limit on how deeply records may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Choose a factory from the SRID, Z and M flags of the outermost record.
pub type Resolver<F> = Box<dyn Fn(i32, bool, bool) -> F + Send + Sync>;

/// A geometry decoder and its configuration.
///
/// Configuration is fixed once built, and every decode call keeps its state to
/// itself, so a single decoder can be shared between threads.
///
/// # Example
///
/// ```
/// let decoder = Decoder::new(OwnedFactory::default())
///     .extended_type_codes(true)
///     .ignore_trailing_bytes(true);
///
/// let point = decoder.decode_hex("0101000020E6100000000000000000244000000000000014C0")?;
/// ```
pub struct Decoder<F> {
    pub(crate) factory: F,
    pub(crate) resolver: Option<Resolver<F>>,
    pub(crate) dialect: Dialect,
    pub(crate) ignore_trailing_bytes: bool,
    pub(crate) max_depth: usize,
}

impl<F: GeometryFactory> Decoder<F> {
    /// Create a decoder for plain WKB, building geometries with `factory`.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            resolver: None,
            dialect: Dialect::default(),
            ignore_trailing_bytes: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Choose the factory for each decode call from its outermost record.
    ///
    /// The resolver receives the SRID (0 if absent) and whether Z and M
    /// coordinates are present, and is called once per decode call. It takes
    /// precedence over the factory given to [`Decoder::new`].
    pub fn resolver(
        mut self,
        resolve: impl Fn(i32, bool, bool) -> F + Send + Sync + 'static,
    ) -> Self {
        self.resolver = Some(Box::new(resolve));
        self
    }

    /// Accept EWKB type codes, with Z, M and SRID flags in the high bits.
    pub fn extended_type_codes(mut self, enabled: bool) -> Self {
        self.dialect.extended = enabled;
        self
    }

    /// Accept SFS-1.2 type codes, with Z and M flagged by thousands.
    pub fn numeric_suffix_type_codes(mut self, enabled: bool) -> Self {
        self.dialect.numeric_suffix = enabled;
        self
    }

    /// Set both type-code dialects at once.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Accept input with bytes left over after the geometry.
    pub fn ignore_trailing_bytes(mut self, enabled: bool) -> Self {
        self.ignore_trailing_bytes = enabled;
        self
    }

    /// Limit how many records may enclose any record.
    ///
    /// Only geometry collections nest beyond one level. Defaults to
    /// [`DEFAULT_MAX_DEPTH`].
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// Decode a single geometry from a slice.
    pub fn decode(&self, r: &[u8]) -> Result<F::Geometry, Error> {
        slice::decode(self, r)
    }

    /// Decode a single geometry from hex text.
    pub fn decode_hex(&self, text: &str) -> Result<F::Geometry, Error> {
        slice::decode_hex(self, text)
    }

    /// Decode a single geometry from either binary or hex input.
    ///
    /// Binary records begin with a `0x00` or `0x01` byte-order flag, so input
    /// beginning with an ASCII hex digit is taken to be hex text.
    pub fn decode_detect(&self, r: &[u8]) -> Result<F::Geometry, Error> {
        match r.first() {
            Some(b) if b.is_ascii_hexdigit() => slice::decode_hex(self, r),
            _ => slice::decode(self, r),
        }
    }

    /// Decode a single geometry from the remainder of a reader.
    ///
    /// _Requires Cargo feature `std`._
    #[cfg(feature = "std")]
    pub fn decode_reader(
        &self,
        r: &mut impl std::io::Read,
    ) -> Result<F::Geometry, reader::Error> {
        reader::decode(self, r)
    }
}

impl<F: GeometryFactory + Default> Default for Decoder<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: fmt::Debug> fmt::Debug for Decoder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("factory", &self.factory)
            .field("has_resolver", &self.resolver.is_some())
            .field("dialect", &self.dialect)
            .field("ignore_trailing_bytes", &self.ignore_trailing_bytes)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
