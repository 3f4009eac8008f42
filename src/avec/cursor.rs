//! Bounds-checked sequential reads over a byte slice.

use core::{iter::FusedIterator, slice};

use zerocopy::FromBytes;

/// A read requested more bytes than remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncated {
    /// Offset of the failed read.
    pub offset: usize,
    /// Number of bytes the read needed beyond the end of the input.
    pub needed: usize,
}

/// A read position within an immutable byte slice.
///
/// Failed reads leave the position unchanged.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    r: &'a [u8],
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(r: &'a [u8]) -> Self {
        Self { r, i: 0 }
    }

    /// Offset of the next byte to be read.
    pub fn offset(&self) -> usize {
        self.i
    }

    pub fn remaining(&self) -> usize {
        self.r.len() - self.i
    }

    /// Take an exact number of bytes, advancing the offset.
    pub fn take<const N: usize>(&mut self) -> Result<[u8; N], Truncated> {
        let bytes = self.slice(N)?;
        <[u8; N]>::read_from_bytes(bytes).map_err(|_| self.truncated(N))
    }

    pub fn read_u8(&mut self) -> Result<u8, Truncated> {
        let [b] = self.take()?;
        Ok(b)
    }

    pub fn read_u32(&mut self, is_little_endian: bool) -> Result<u32, Truncated> {
        let r = self.take()?;
        Ok(if is_little_endian {
            u32::from_le_bytes(r)
        } else {
            u32::from_be_bytes(r)
        })
    }

    pub fn read_i32(&mut self, is_little_endian: bool) -> Result<i32, Truncated> {
        let r = self.take()?;
        Ok(if is_little_endian {
            i32::from_le_bytes(r)
        } else {
            i32::from_be_bytes(r)
        })
    }

    /// Read a run of 8-byte floats.
    ///
    /// The whole run is bounds-checked up front, so the returned iterator
    /// yields exactly `count` values.
    pub fn read_f64s(
        &mut self,
        is_little_endian: bool,
        count: usize,
    ) -> Result<Float64s<'a>, Truncated> {
        let len = count
            .checked_mul(size_of::<f64>())
            .ok_or_else(|| self.truncated(usize::MAX))?;

        let bytes = self.slice(len)?;
        let words = <[[u8; 8]]>::ref_from_bytes(bytes).map_err(|_| self.truncated(len))?;

        Ok(Float64s {
            words: words.iter(),
            is_little_endian,
        })
    }

    /// Take a sub-slice of `len` bytes, advancing the offset.
    fn slice(&mut self, len: usize) -> Result<&'a [u8], Truncated> {
        let r = self.r;
        let s = self.i;

        let bytes = s
            .checked_add(len)
            .and_then(|e| r.get(s..e))
            .ok_or_else(|| self.truncated(len))?;

        self.i += len;

        Ok(bytes)
    }

    fn truncated(&self, len: usize) -> Truncated {
        Truncated {
            offset: self.i,
            needed: len.saturating_sub(self.remaining()),
        }
    }
}

/// Floats read by [`Cursor::read_f64s`].
#[derive(Debug, Clone)]
pub struct Float64s<'a> {
    words: slice::Iter<'a, [u8; 8]>,
    is_little_endian: bool,
}

impl Iterator for Float64s<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let &word = self.words.next()?;

        Some(if self.is_little_endian {
            f64::from_le_bytes(word)
        } else {
            f64::from_be_bytes(word)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.words.size_hint()
    }
}

impl ExactSizeIterator for Float64s<'_> {}

impl FusedIterator for Float64s<'_> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn sequential_reads() {
        let r = [0x01, 0x00, 0x00, 0x00, 0x02, 0x02, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&r);

        assert_eq!(cursor.read_u8(), Ok(1));
        assert_eq!(cursor.read_u32(false), Ok(2));
        assert_eq!(cursor.read_u32(true), Ok(2));
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.offset(), 9);
    }

    #[test]
    fn signed_reads() {
        let r = (-4326i32).to_be_bytes();
        assert_eq!(Cursor::new(&r).read_i32(false), Ok(-4326));

        let r = 4326i32.to_le_bytes();
        assert_eq!(Cursor::new(&r).read_i32(true), Ok(4326));
    }

    #[test]
    fn float_runs() {
        let mut r = Vec::new();
        r.extend_from_slice(&10.0f64.to_be_bytes());
        r.extend_from_slice(&5.0f64.to_be_bytes());
        r.extend_from_slice(&(-1.5f64).to_le_bytes());

        let mut cursor = Cursor::new(&r);

        let values = cursor.read_f64s(false, 2).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.collect::<Vec<_>>(), [10.0, 5.0]);

        let values = cursor.read_f64s(true, 1).unwrap();
        assert_eq!(values.collect::<Vec<_>>(), [-1.5]);

        assert_eq!(cursor.read_f64s(true, 0).unwrap().count(), 0);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn truncated_reads_do_not_advance() {
        let r = [0x01, 0x02, 0x03];
        let mut cursor = Cursor::new(&r);

        assert_eq!(
            cursor.read_u32(true),
            Err(Truncated {
                offset: 0,
                needed: 1
            })
        );
        assert_eq!(cursor.offset(), 0);

        assert_eq!(cursor.read_u8(), Ok(1));
        assert_eq!(
            cursor.read_f64s(true, 1).map(|_| ()),
            Err(Truncated {
                offset: 1,
                needed: 6
            })
        );
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn empty_input() {
        let mut cursor = Cursor::new(&[]);
        assert_eq!(
            cursor.read_u8(),
            Err(Truncated {
                offset: 0,
                needed: 1
            })
        );
    }

    #[test]
    fn oversized_float_count() {
        let mut cursor = Cursor::new(&[0; 16]);
        assert!(cursor.read_f64s(true, usize::MAX).is_err());
        assert!(cursor.read_f64s(true, usize::MAX / 8).is_err());
        assert_eq!(cursor.offset(), 0);
    }
}
