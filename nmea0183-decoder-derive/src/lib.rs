//! # A Rust procedural macro for positional NMEA 0183 field decoding
//!
//! `nmea0183-decoder-derive` derives `nmea0183_decoder::nmea_content::DecodeFields`
//! for record structs. Every field names the position it is read from after the
//! sentence header, and optionally a decoder function and a unit letter that must
//! follow it:
//!
//! ```rust,ignore
//! #[derive(DecodeFields)]
//! #[nmea(max_fields(9))]
//! pub struct VTG {
//!     #[nmea(index(0), unit('T'))]
//!     pub course_true: f32,
//!     #[nmea(index(6), unit('K'))]
//!     pub speed_kmh: f32,
//! }
//! ```
//!
//! ## Attributes
//!
//! | Attribute         | Level  | Meaning                                                        |
//! |-------------------|--------|----------------------------------------------------------------|
//! | `min_fields(N)`   | struct | Fewest fields accepted; defaults to the last field read + 1   |
//! | `max_fields(N)`   | struct | Fields defined by the type; defaults to `min_fields`          |
//! | `index(N)`        | field  | Zero-based position of the value                               |
//! | `decoder(path)`   | field  | `fn(&Fields, usize) -> Result<T, DecodeError>` used instead of `NmeaParse` |
//! | `width(N)`        | field  | Number of fields `decoder` reads from `index`; defaults to 1  |
//! | `unit('X')`       | field  | The field right after the value must be exactly `X`           |
//! | `ignore`          | field  | Not read; filled with `Default::default()`                     |

use generate::generate_decode_fields_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;
mod parser;

#[proc_macro_derive(DecodeFields, attributes(nmea))]
pub fn derive_decode_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_decode_fields_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
