//! Field decoders shared by several sentence types.
//!
//! Each function has the shape `fn(&Fields, usize) -> Result<T, DecodeError>` so it
//! can be named in a `#[nmea(decoder(..))]` attribute.

use nom::{
    AsChar, Finish, Input, Parser, ToUsize,
    bytes::complete::take,
    character::complete::{char, digit0},
    combinator::opt,
    error::{ErrorKind, ParseError},
    sequence::preceded,
};

use crate::{DecodeError, IResult, Malformed, NmeaParse, nmea_content::Fields, parsing::consumed};

/// Takes exactly `count` characters and parses all of them as a `T`.
pub fn with_take<I, E, T, C>(count: C) -> impl Parser<I, Output = T, Error = E>
where
    T: NmeaParse<I, E>,
    I: Input,
    <I as Input>::Item: AsChar,
    E: ParseError<I>,
    C: ToUsize,
{
    take(count).and_then(consumed(T::parse, ErrorKind::Digit))
}

/// Decodes a `hhmmss[.ss]` time field into seconds since midnight.
///
/// Only the first six characters are significant; an optional fractional part is
/// validated and dropped. A field shorter than six characters is reported as
/// [`Malformed::TruncatedField`].
pub fn utc_seconds(fields: &Fields<'_>, index: usize) -> Result<u32, DecodeError> {
    let field = fields.get(index)?;

    if field.len() < 6 {
        return Err(Malformed::TruncatedField { index }.into());
    }

    let parsed: IResult<&str, (u8, u8, u8)> = consumed(
        (with_take(2u8), with_take(2u8), with_take(2u8))
            .and(opt(preceded(char('.'), digit0)))
            .map(|(hms, _)| hms),
        ErrorKind::Eof,
    )
    .parse(field);

    let (hour, minute, second) = parsed
        .finish()
        .map(|(_, hms)| hms)
        .map_err(|_| fields.misformatted(index))?;

    if hour > 23 || minute > 59 || second > 59 {
        return Err(fields.misformatted(index));
    }

    Ok(hour as u32 * 3600 + minute as u32 * 60 + second as u32)
}

/// Decodes a `ddmm.mmmm` latitude at `index` signed by the `N`/`S` field after it.
pub fn latitude(fields: &Fields<'_>, index: usize) -> Result<f64, DecodeError> {
    coordinate(fields, index, ('N', 'S'), 90.0)
}

/// Decodes a `dddmm.mmmm` longitude at `index` signed by the `E`/`W` field after it.
pub fn longitude(fields: &Fields<'_>, index: usize) -> Result<f64, DecodeError> {
    coordinate(fields, index, ('E', 'W'), 180.0)
}

fn coordinate(
    fields: &Fields<'_>,
    index: usize,
    (positive, negative): (char, char),
    limit: f64,
) -> Result<f64, DecodeError> {
    let value: f64 = fields.parse(index)?;
    let direction: char = fields.parse(index + 1)?;

    if value.is_sign_negative() {
        return Err(fields.misformatted(index));
    }

    let degrees = (value / 100.0).floor();
    let minutes = value - degrees * 100.0;
    if minutes >= 60.0 {
        return Err(fields.misformatted(index));
    }

    let magnitude = degrees + minutes / 60.0;
    if magnitude > limit {
        return Err(fields.misformatted(index));
    }

    match direction {
        d if d == positive => Ok(magnitude),
        d if d == negative => Ok(-magnitude),
        _ => Err(fields.misformatted(index + 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::tokenize;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn test_utc_seconds() {
        let cases = [
            ("123519", 12 * 3600 + 35 * 60 + 19),
            ("000000", 0),
            ("235959", 86399),
            ("092725.00", 9 * 3600 + 27 * 60 + 25),
            ("001043.", 10 * 60 + 43),
        ];

        for (input, expected) in cases {
            let fields = tokenize(input);
            assert_eq!(utc_seconds(&fields, 0), Ok(expected), "Failed: {input:?}");
        }
    }

    #[test]
    fn test_utc_seconds_truncated() {
        for input in ["", "1235", "12351"] {
            let fields = tokenize(input);
            assert_eq!(
                utc_seconds(&fields, 0),
                Err(DecodeError::SentenceMalformed(Malformed::TruncatedField {
                    index: 0
                })),
                "Failed: {input:?}"
            );
        }
    }

    #[test]
    fn test_utc_seconds_misformatted() {
        for input in ["12a519", "240000", "126000", "123560", "123519x", "123519.5x", "1235190"] {
            let fields = tokenize(input);
            assert!(
                matches!(
                    utc_seconds(&fields, 0),
                    Err(DecodeError::FieldMisformatted { index: 0, .. })
                ),
                "Failed: {input:?}"
            );
        }
    }

    #[test]
    fn test_coordinates() {
        let fields = tokenize("4807.038,N,01131.000,E");
        assert_close(latitude(&fields, 0).unwrap(), 48.0 + 7.038 / 60.0);
        assert_close(longitude(&fields, 2).unwrap(), 11.0 + 31.0 / 60.0);

        let fields = tokenize("4404.14036,S,12118.85961,W");
        assert_close(latitude(&fields, 0).unwrap(), -(44.0 + 4.14036 / 60.0));
        assert_close(longitude(&fields, 2).unwrap(), -(121.0 + 18.85961 / 60.0));

        let fields = tokenize("9000.000,S,18000.000,W");
        assert_close(latitude(&fields, 0).unwrap(), -90.0);
        assert_close(longitude(&fields, 2).unwrap(), -180.0);
    }

    #[test]
    fn test_coordinates_out_of_range() {
        let cases = [
            ("9000.001,N", 0),
            ("4860.000,N", 0),
            ("-4807.038,N", 0),
            ("4807.038,", 1),
            ("4807.038,E", 1),
            ("4807.038,n", 1),
            (",N", 0),
        ];

        for (input, index) in cases {
            let fields = tokenize(input);
            let result = latitude(&fields, 0);
            assert!(
                matches!(result, Err(DecodeError::FieldMisformatted { index: i, .. }) if i == index),
                "Failed: {input:?}\n\t{result:?}"
            );
        }

        let fields = tokenize("18000.001,E");
        assert!(longitude(&fields, 0).is_err());
    }
}
