//! # NMEA 0183 Sentence Decoder
//!
//! This module frames NMEA 0183 sentences and dispatches them to the decoder for
//! their type. It handles the standard NMEA 0183 format: `$HHHHH,D1,D2,...,Dn*CC\r\n`
//!
//! The decoder is configurable to handle variations in:
//! - Checksum requirements (required or optional)
//! - Checksum mismatches (rejected or only logged)
//! - Line ending requirements (CRLF optional, required or forbidden)
//! - Trailing fields (ignored or rejected)

use nom::{
    AsBytes, AsChar, Compare, Err, Finish, FindSubstring, Input, Parser,
    bytes::complete::{tag, take, take_until},
    character::complete::hex_digit0,
    combinator::opt,
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
};

use crate::{
    DecodeError, Malformed,
    nmea_content::{
        DecodeFields, DecodedMessage, FieldCountMode, Fields, GGA, GSA, GSV, MessageType, VTG,
        classify, tokenize,
    },
    parsing::consumed,
};

type SentenceDecoder = fn(&Fields<'_>, FieldCountMode) -> Result<DecodedMessage, DecodeError>;

/// Defines how the decoder should handle NMEA message checksums.
///
/// NMEA 0183 messages can include an optional checksum in the format `*CC` where
/// CC is a two-digit hexadecimal value representing the XOR of all bytes in the
/// message content (excluding the '$' prefix and '*' delimiter).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    #[default]
    /// Checksum is required and must be present.
    ///
    /// The decoder will fail with [`Malformed::MissingChecksum`] if no `*CC`
    /// checksum is found at the end of the message.
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Use this mode when working with mixed message sources or legacy equipment
    /// that may not always include checksums.
    Optional,
}

/// Defines what happens when a transmitted checksum does not match the content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumPolicy {
    #[default]
    /// The sentence is rejected with [`DecodeError::ChecksumInvalid`].
    Reject,

    /// The mismatch is logged as a warning and the sentence is decoded anyway.
    ///
    /// Useful for diagnosing a noisy link without losing every corrupted sentence.
    Warn,
}

/// Defines how the decoder should handle CRLF line endings.
///
/// NMEA 0183 messages typically end with a carriage return and line feed (`\r\n`),
/// but line-oriented readers usually strip them before a sentence is decoded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    #[default]
    /// A trailing `\r\n` is accepted and stripped, but not required.
    Optional,

    /// CRLF line ending is required and must be present.
    ///
    /// Use this mode when decoding raw lines of standard NMEA log files or serial
    /// port data.
    Required,

    /// CRLF line ending is forbidden and must not be present.
    Forbidden,
}

/// Creates a configurable NMEA 0183 [`Decoder`].
///
/// It uses the builder pattern to allow for flexible configuration of the decoder settings.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{ChecksumMode, DecodeError, DecoderBuilder, LineEndingMode};
///
/// // Strict: checksum and CRLF both required
/// let strict = DecoderBuilder::new()
///     .checksum_mode(ChecksumMode::Required)
///     .line_ending_mode(LineEndingMode::Required)
///     .build();
/// assert!(strict.decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48\r\n").is_ok());
/// assert!(strict.decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48").is_err()); // (missing CRLF)
/// assert!(strict.decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K\r\n").is_err()); // (missing checksum)
///
/// // Lenient: checksum optional, CRLF forbidden
/// let lenient = DecoderBuilder::new()
///     .checksum_mode(ChecksumMode::Optional)
///     .line_ending_mode(LineEndingMode::Forbidden)
///     .build();
/// assert!(lenient.decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48").is_ok()); // (with valid checksum)
/// assert!(lenient.decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K").is_ok()); // (without checksum)
/// assert!(matches!(
///     lenient.decode("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*99"),
///     Err(DecodeError::ChecksumInvalid { expected: 0x48, found: 0x99 })
/// ));
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct DecoderBuilder {
    /// Checksum mode for the decoder.
    checksum_mode: ChecksumMode,
    /// What to do on checksum mismatch.
    checksum_policy: ChecksumPolicy,
    /// Line ending mode for the decoder.
    line_ending_mode: LineEndingMode,
    /// How to treat fields past the ones a sentence type defines.
    field_count_mode: FieldCountMode,
}

impl DecoderBuilder {
    /// Creates a new NMEA 0183 decoder builder with default settings.
    ///
    /// The default settings are:
    /// - Checksum mode: [`ChecksumMode::Required`]
    /// - Checksum policy: [`ChecksumPolicy::Reject`]
    /// - Line ending mode: [`LineEndingMode::Optional`]
    /// - Field count mode: [`FieldCountMode::Lenient`]
    pub fn new() -> Self {
        DecoderBuilder {
            checksum_mode: ChecksumMode::Required,
            checksum_policy: ChecksumPolicy::Reject,
            line_ending_mode: LineEndingMode::Optional,
            field_count_mode: FieldCountMode::Lenient,
        }
    }

    /// Sets the checksum mode for the decoder.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Sets what the decoder does when a checksum does not match.
    pub fn checksum_policy(mut self, policy: ChecksumPolicy) -> Self {
        self.checksum_policy = policy;
        self
    }

    /// Sets the line ending mode for the decoder.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Sets how the decoder treats fields past the ones a sentence type defines.
    pub fn field_count_mode(mut self, mode: FieldCountMode) -> Self {
        self.field_count_mode = mode;
        self
    }

    /// Builds the decoder with the configured settings.
    pub fn build(self) -> Decoder {
        Decoder {
            checksum_mode: self.checksum_mode,
            checksum_policy: self.checksum_policy,
            line_ending_mode: self.line_ending_mode,
            field_count_mode: self.field_count_mode,
        }
    }
}

/// Decodes complete NMEA 0183 sentences into [`DecodedMessage`]s.
///
/// A `Decoder` holds only its configuration, so a single instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    checksum_mode: ChecksumMode,
    checksum_policy: ChecksumPolicy,
    line_ending_mode: LineEndingMode,
    field_count_mode: FieldCountMode,
}

impl Default for Decoder {
    fn default() -> Self {
        DecoderBuilder::new().build()
    }
}

impl Decoder {
    /// Decodes one complete sentence.
    ///
    /// The decoder will:
    /// * Classify the sentence from its header and select the matching decoder
    /// * Validate that the input is ASCII-only
    /// * Expect the message to start with `$` and split off the `*CC` checksum
    /// * Verify the checksum once, for the whole sentence
    /// * Tokenize the fields after the header and decode them
    ///
    /// # Errors
    ///
    /// Returns the first [`DecodeError`] encountered; no partially decoded record is
    /// ever returned.
    pub fn decode(&self, sentence: &str) -> Result<DecodedMessage, DecodeError> {
        let message_type = classify(sentence);
        log::trace!("classified {sentence:?} as {message_type:?}");

        let decode: SentenceDecoder = match message_type {
            MessageType::GGA => |fields, mode| GGA::decode(fields, mode).map(DecodedMessage::GGA),
            MessageType::GSA => |fields, mode| GSA::decode(fields, mode).map(DecodedMessage::GSA),
            MessageType::GSV => |fields, mode| GSV::decode(fields, mode).map(DecodedMessage::GSV),
            MessageType::VTG => |fields, mode| VTG::decode(fields, mode).map(DecodedMessage::VTG),
            MessageType::Unknown => {
                let header = sentence.split([',', '*', '\r']).next().unwrap_or_default();
                return Err(DecodeError::TypeNotUnderstood {
                    header: header.to_owned(),
                });
            }
        };

        if !sentence.is_ascii() {
            return Err(Malformed::NonAscii.into());
        }

        let body = self.verified_body(sentence)?;
        let payload = body
            .get(5..)
            .and_then(|rest| rest.strip_prefix(','))
            .ok_or(Malformed::MissingAddressSeparator)?;

        decode(&tokenize(payload), self.field_count_mode).inspect_err(|e| {
            log::debug!("failed to decode {message_type:?} sentence: {e}");
        })
    }

    /// Strips the framing from `sentence` and checks its checksum, returning the
    /// content between `$` and `*`.
    fn verified_body<'a>(&self, sentence: &'a str) -> Result<&'a str, DecodeError> {
        let (sentence, _) = crlf::<_, nom::error::Error<&str>>(self.line_ending_mode)(sentence)
            .finish()
            .map_err(|_| Malformed::LineEnding)?;

        let body = sentence.strip_prefix('$').ok_or(Malformed::MissingStart)?;

        let (body, cc) = match body.split_once('*') {
            Some((body, cc)) => (body, Some(cc)),
            None if self.checksum_mode == ChecksumMode::Required => {
                return Err(Malformed::MissingChecksum.into());
            }
            None => (body, None),
        };

        if let Some(cc) = cc {
            let found = parse_checksum(cc)?;
            let expected = checksum(body);

            if found != expected {
                let error = DecodeError::ChecksumInvalid { expected, found };
                match self.checksum_policy {
                    ChecksumPolicy::Reject => return Err(error),
                    ChecksumPolicy::Warn => log::warn!("{error}, decoding anyway"),
                }
            }
        }

        Ok(body)
    }
}

/// Decodes one complete sentence with the default [`Decoder`] settings.
///
/// The checksum is required and a mismatch is fatal, a trailing `\r\n` is accepted,
/// and fields past the ones a sentence type defines are ignored.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{DecodeError, DecodedMessage, parse_message};
///
/// let message = parse_message("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47");
/// let Ok(DecodedMessage::GGA(gga)) = message else {
///     panic!("unexpected result: {message:?}");
/// };
/// assert_eq!(gga.utc, 45319);
/// assert_eq!(gga.satellite_count, 8);
///
/// assert!(matches!(
///     parse_message("$GPGLL,4916.45,N,12311.12,W,225444,A*31"),
///     Err(DecodeError::TypeNotUnderstood { .. })
/// ));
/// ```
pub fn parse_message(sentence: &str) -> Result<DecodedMessage, DecodeError> {
    Decoder::default().decode(sentence)
}

/// Checks that `body` matches the transmitted hexadecimal checksum `expected_hex`.
///
/// `body` is everything strictly between the leading `$` and the `*` delimiter.
/// A mismatch is reported as `Ok(false)`; only a checksum that is not exactly two
/// hexadecimal digits is an error.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::verify_checksum;
///
/// assert_eq!(verify_checksum("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K", "48"), Ok(true));
/// assert_eq!(verify_checksum("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K", "49"), Ok(false));
/// assert!(verify_checksum("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K", "4").is_err());
/// ```
pub fn verify_checksum(body: &str, expected_hex: &str) -> Result<bool, DecodeError> {
    Ok(parse_checksum(expected_hex)? == checksum(body))
}

fn parse_checksum(cc: &str) -> Result<u8, DecodeError> {
    checksum_hex::<_, nom::error::Error<&str>>(cc)
        .finish()
        .map(|(_, cc)| cc)
        .map_err(|_| Malformed::InvalidChecksum.into())
}

/// Parses the two hexadecimal digits of a transmitted checksum.
fn checksum_hex<I, E: ParseError<I>>(i: I) -> nom::IResult<I, u8, E>
where
    I: Input + AsBytes,
    <I as Input>::Item: AsChar,
{
    let (_, cc) = consumed(take(2u8), ErrorKind::Count).parse(i)?;
    let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;

    hex_u32.map(|cc| cc as u8).parse(cc)
}

/// Parses CRLF line endings based on configuration.
///
/// This function handles the parsing of carriage return and line feed characters
/// at the end of NMEA messages.
///
/// # Returns
///
/// A parser function that validates CRLF presence according to the configuration and
/// returns the input without its line ending.
fn crlf<'a, I, E: ParseError<I>>(crlf: LineEndingMode) -> impl Fn(I) -> nom::IResult<I, (), E>
where
    I: Input + Compare<&'a str> + FindSubstring<&'a str>,
{
    move |i: I| {
        let (i, data) = opt(take_until("\r\n")).parse(i)?;

        let data = match (crlf, data) {
            (LineEndingMode::Forbidden, Some(_)) | (LineEndingMode::Required, None) => {
                return Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)));
            }
            (_, Some(data)) => {
                let (_, _) = consumed(tag("\r\n"), ErrorKind::CrLf).parse(i)?;
                data
            }
            (_, None) => i,
        };

        Ok((data, ()))
    }
}

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The NMEA 0183 checksum is calculated by performing an XOR (exclusive OR) operation
/// on all bytes in the message content. This includes everything between the '$' prefix
/// and the '*' checksum delimiter, but excludes both the '$' and '*' characters themselves.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::checksum;
///
/// assert_eq!(checksum("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,"), 0x47);
/// ```
pub fn checksum(body: &str) -> u8 {
    body.as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}


