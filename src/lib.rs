#![no_std]

//! A strict decoder for Well-Known Binary geometry.
//!
//! Theodolite reads WKB records, optionally in PostGIS's EWKB dialect or the
//! SFS-1.2 numeric-suffix dialect, into the geometry model of your choosing.
//! Input is treated as untrusted: every read is bounds-checked, nested records
//! must agree with the outermost record's coordinates and SRID, and no input
//! is accepted on a best-effort basis.
//!
//! Most users should begin with the [`avec::Decoder`] and a factory from the
//! [`factory`] module. If these prove insufficient, the record header states
//! are exposed in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `geo-types`: enable a factory producing [`geo_types`] values (default).
//! - `std`: enable reader-based decoding (default).

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod avec;
pub mod factory;
pub mod sans;

pub use avec::{Decoder, Error};
