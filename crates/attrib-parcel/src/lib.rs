#![warn(missing_docs)]

//! Attrib Parcel Transport
//!
//! Binary encoding of attributions for handing them to another process.
//! The layout matches the platform parcel byte for byte:
//! - `i32` values are 4 bytes little-endian
//! - strings are an `i32` UTF-16 length (`-1` when absent), the code units,
//!   a zero terminator, then zero padding to a 4-byte boundary
//! - lists are an `i32` count (`-1` when absent) followed by the elements
//!
//! Decoding rebuilds every record through [`Attribution::from_parts`], so the
//! same presence checks apply as at construction.
//!
//! [`Attribution::from_parts`]: attrib_domain::Attribution::from_parts

pub mod conversions;
pub mod error;
pub mod parcel;

pub use conversions::{
    decode_attribution, decode_combination, encode_attribution, encode_combination,
    read_attribution, write_attribution,
};
pub use error::ParcelError;
pub use parcel::{ParcelReader, ParcelWriter};
