//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, vec::Vec};

use thiserror::Error;

use crate::factory::GeometryFactory;

use super::{Decoder, slice};

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The bytes read could not be decoded.
    #[error(transparent)]
    Decode(#[from] slice::Error),
}

/// Decode a single geometry from the remainder of a reader.
///
/// Records are length-prefixed only implicitly, by their counts, so the reader
/// is read to its end and the bytes decoded as a slice. Trailing bytes are
/// subject to the decoder's configuration as usual.
///
/// This method is also available as [`Decoder::decode_reader`].
///
/// _Requires Cargo feature `std`._
pub fn decode<F: GeometryFactory>(
    decoder: &Decoder<F>,
    r: &mut impl Read,
) -> Result<F::Geometry, Error> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;

    tracing::trace!(len = buf.len(), "read input from reader");

    Ok(slice::decode(decoder, &buf)?)
}
