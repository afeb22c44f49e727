//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 GPS sentences with the format
//! `$HHHHH,D1,D2,...,Dn*CC\r\n` into strongly-typed records.
//!
//! Decoding a sentence happens in one pass:
//! - The header (e.g. `$GPGGA`) selects the sentence type, see [`classify`]
//! - The `*CC` checksum is verified once for the whole sentence
//! - The fields after the header are tokenized and decoded by position
//!
//! GGA (fix data) and VTG (course and speed) sentences are decoded. GSA and GSV
//! sentences are recognized but not decoded yet.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{DecodedMessage, parse_message};
//!
//! let sentence = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48";
//!
//! match parse_message(sentence) {
//!     Ok(DecodedMessage::VTG(vtg)) => {
//!         assert_eq!(vtg.course_true, 54.7);
//!         assert_eq!(vtg.speed_kmh, 10.2);
//!     }
//!     Ok(other) => println!("Other sentence: {other:?}"),
//!     Err(e) => println!("Decode error: {e}"),
//! }
//! ```
//!
//! Use [`DecoderBuilder`] to change how checksums, line endings and trailing
//! fields are handled.

pub mod error;
mod nmea0183;
pub mod nmea_content;
mod parse;
pub mod parsing;

pub use error::{DecodeError, IResult, Malformed};
pub use nmea0183::*;
pub use nmea_content::{
    DecodeFields, DecodedMessage, FieldCountMode, Fields, FixType, GGA, GSA, GSV, MessageType,
    Satellite, VTG, classify, tokenize,
};
pub use nmea0183_decoder_derive::DecodeFields;
pub use parse::NmeaParse;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
