//! # NMEA Sentence Content
//!
//! Tokenizing and decoding of the field list that follows a sentence header.
//!
//! The framing layer ([`Decoder`](crate::Decoder)) hands this module the payload of
//! a sentence, everything after `$GPGGA,` up to the `*` checksum delimiter. The
//! payload is split into [`Fields`] and each supported sentence type reads the
//! values it needs by position.

use nom::{Finish, Parser, error::ErrorKind};

use crate::{DecodeError, Malformed, NmeaParse, parsing::consumed};

pub mod parse;
mod sentences;

pub use sentences::*;

/// Controls how a decoder reacts to fields beyond the ones its sentence type defines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FieldCountMode {
    #[default]
    /// Trailing fields past the known ones are ignored.
    ///
    /// Receivers commonly append fields introduced by later NMEA revisions, so this
    /// is the default.
    Lenient,

    /// Trailing fields past the known ones fail with [`DecodeError::TooManyFields`].
    Strict,
}

/// Splits a sentence payload into its comma-delimited fields.
///
/// Empty fields are kept as empty strings, so field positions always match the
/// sentence layout even when optional values are missing.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::nmea_content::tokenize;
///
/// let fields = tokenize("123519,,N");
/// assert_eq!(fields.len(), 3);
/// assert_eq!(fields.get(1), Ok(""));
/// ```
pub fn tokenize(payload: &str) -> Fields<'_> {
    Fields {
        fields: payload.split(',').collect(),
    }
}

/// The ordered fields of a sentence payload, as produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Returns the number of fields, empty ones included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the raw fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields.iter().copied()
    }

    /// Returns the raw text of the field at `index`.
    ///
    /// Fails with [`Malformed::TooFewFields`] if the sentence ends before `index`.
    pub fn get(&self, index: usize) -> Result<&'a str, DecodeError> {
        self.fields.get(index).copied().ok_or(
            Malformed::TooFewFields {
                expected: index + 1,
                found: self.len(),
            }
            .into(),
        )
    }

    /// Parses the whole field at `index` as a `T`.
    ///
    /// An empty field, trailing characters or a value `T` cannot represent all fail
    /// with [`DecodeError::FieldMisformatted`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_decoder::{DecodeError, nmea_content::tokenize};
    ///
    /// let fields = tokenize("08,0.9,,A8");
    /// assert_eq!(fields.parse::<u8>(0), Ok(8));
    /// assert_eq!(fields.parse::<f32>(1), Ok(0.9));
    /// assert!(matches!(fields.parse::<f32>(2), Err(DecodeError::FieldMisformatted { index: 2, .. })));
    /// assert!(matches!(fields.parse::<u8>(3), Err(DecodeError::FieldMisformatted { index: 3, .. })));
    /// ```
    pub fn parse<T>(&self, index: usize) -> Result<T, DecodeError>
    where
        T: NmeaParse<&'a str>,
    {
        let field = self.get(index)?;

        consumed(T::parse, ErrorKind::Eof)
            .parse(field)
            .finish()
            .map(|(_, value)| value)
            .map_err(|_| self.misformatted(index))
    }

    /// Checks that the field at `index` is exactly the unit letter `unit`.
    pub fn expect_unit(&self, index: usize, unit: char) -> Result<(), DecodeError> {
        let field = self.get(index)?;
        let mut chars = field.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) if c == unit => Ok(()),
            _ => Err(self.misformatted(index)),
        }
    }

    /// Builds a [`DecodeError::FieldMisformatted`] for the field at `index`.
    pub fn misformatted(&self, index: usize) -> DecodeError {
        DecodeError::FieldMisformatted {
            index,
            value: self.fields.get(index).copied().unwrap_or_default().to_owned(),
        }
    }
}

/// A record that can be decoded from the positional fields of one sentence type.
///
/// Implementations are usually derived with
/// [`#[derive(DecodeFields)]`](nmea0183_decoder_derive::DecodeFields), which reads
/// each struct field from the index given in its `#[nmea(index(..))]` attribute.
///
/// ```rust
/// use nmea0183_decoder::{DecodeFields, FieldCountMode, tokenize};
///
/// #[derive(Debug, DecodeFields)]
/// #[nmea(max_fields(3))]
/// struct Depth {
///     #[nmea(index(0), unit('M'))]
///     meters: f32,
///     #[nmea(index(2))]
///     offset: f32,
/// }
///
/// let depth = Depth::decode(&tokenize("12.5,M,0.3"), FieldCountMode::Strict).unwrap();
/// assert_eq!(depth.meters, 12.5);
/// assert_eq!(depth.offset, 0.3);
/// ```
pub trait DecodeFields: Sized {
    /// Minimum number of fields a sentence of this type must carry.
    const MIN_FIELDS: usize;

    /// Number of fields defined for this type; more are only tolerated in
    /// [`FieldCountMode::Lenient`].
    const MAX_FIELDS: usize;

    /// Reads the record from `fields`, assuming the field count was already checked.
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, DecodeError>;

    /// Checks the field count against `mode`, then decodes the record.
    fn decode(fields: &Fields<'_>, mode: FieldCountMode) -> Result<Self, DecodeError> {
        let found = fields.len();

        if found < Self::MIN_FIELDS {
            return Err(Malformed::TooFewFields {
                expected: Self::MIN_FIELDS,
                found,
            }
            .into());
        }

        if found > Self::MAX_FIELDS {
            match mode {
                FieldCountMode::Strict => {
                    return Err(DecodeError::TooManyFields {
                        expected: Self::MAX_FIELDS,
                        found,
                    });
                }
                FieldCountMode::Lenient => {
                    log::debug!("ignoring {} trailing fields", found - Self::MAX_FIELDS);
                }
            }
        }

        Self::decode_fields(fields)
    }
}


