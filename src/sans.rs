//! Byte-level states for decoding record headers.
//!
//! This module is intended for applications that read geometry records from
//! their own buffers or streams. See [`crate::avec`] for a complete decoder
//! over byte slices.
//!
//! # Architecture
//!
//! A WKB record opens with a fixed 5-byte prefix: a byte-order flag followed
//! by a 4-byte type code. Once these bytes are ready, call
//! [`RecordHeader::advance`](header::RecordHeader::advance) with the dialects
//! to accept. This returns either an [`Srid`](header::Srid) state, which needs
//! 4 more bytes, or the decoded [`RecordBody`](header::RecordBody).
//!
//! The body is variable-length and is not represented in the state machine.
//! Applications must read it themselves:
//!
//! - Points hold one coordinate of [`Dimensions::count`](type_code::Dimensions::count)
//! 8-byte floats.
//!
//! - Line strings hold a 4-byte point count, then that many coordinates.
//!
//! - Polygons hold a 4-byte ring count, then that many line string bodies
//! (without record prefixes).
//!
//! - Multi-geometries and collections hold a 4-byte member count, then that
//! many complete records, each with its own prefix and byte order.
//!
//! Consistency between an outer record and its members (dimensions, SRID,
//! member kind) is likewise left to the application.

pub mod header;
pub mod type_code;
