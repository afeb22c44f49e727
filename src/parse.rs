use nom::{
    AsBytes, AsChar, Compare, Input, Offset, ParseTo, Parser, character::complete::anychar,
    combinator::verify, error::ParseError,
};

use crate::IResult;

/// Trait for parsing a single value out of an NMEA 0183 sentence field.
///
/// The `NmeaParse` trait provides a generic interface for turning the text of one
/// comma-delimited field into a typed value. Implementations are provided for the
/// integer and floating point primitives and for `char`; you can implement it for
/// your own types and read them with [`Fields::parse`](crate::nmea_content::Fields::parse).
///
/// An implementation does not need to check that the whole field was consumed;
/// [`Fields::parse`](crate::nmea_content::Fields::parse) rejects any leftover input.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{IResult, NmeaParse};
///
/// let input = "42";
/// let result: IResult<_, _> = u8::parse(input);
/// assert_eq!(result, Ok(("", 42)));
///
/// let input = "054.7";
/// let result: IResult<_, _> = f32::parse(input);
/// assert_eq!(result, Ok(("", 54.7)));
/// ```
///
/// # Implementing for Custom Types
///
/// ```rust
/// use nmea0183_decoder::{IResult, NmeaParse};
/// use nom::{AsChar, Input, Parser, character::complete::one_of, error::ParseError};
///
/// enum Status {
///     Valid,
///     Invalid,
/// }
///
/// impl<I, E> NmeaParse<I, E> for Status
/// where
///     I: Input,
///     <I as Input>::Item: AsChar,
///     E: ParseError<I>,
/// {
///     fn parse(i: I) -> IResult<I, Self, E> {
///         one_of("AV")
///             .map(|c| if c == 'A' { Status::Valid } else { Status::Invalid })
///             .parse(i)
///     }
/// }
/// ```
pub trait NmeaParse<I, E = nom::error::Error<I>>
where
    I: Input,
    E: ParseError<I>,
    Self: Sized,
{
    /// Parses the input and returns a result.
    ///
    /// # Returns
    ///
    /// Returns an [`IResult`] containing:
    /// - On success: A tuple of `(remaining_input, parsed_value)`.
    /// - On failure: a nom error describing where parsing stopped.
    fn parse(i: I) -> IResult<I, Self, E>;
}

macro_rules! impl_uints_type {
    ($($t:tt),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input,
            <I as Input>::Item: AsChar,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::character::complete::$t.parse(i)
            }
        }
    )*)
}

macro_rules! impl_ints_type {
    ($($t:tt),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input + for<'a> Compare<&'a [u8]>,
            <I as Input>::Item: AsChar,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::character::complete::$t.parse(i)
            }
        }

    )*)
}

impl_uints_type!(u8, u16, u32, u64, usize);
impl_ints_type!(i8, i16, i32, i64, isize);

// NaN and infinity are accepted by nom's float parsers but never valid NMEA data.
macro_rules! impl_float_type {
    ($($t:ty, $p:ident),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input + Offset + ParseTo<$t> + AsBytes,
            I: Compare<&'static str> + for<'a> Compare<&'a [u8]>,
            <I as Input>::Item: AsChar,
            <I as Input>::Iter: Clone,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                verify(nom::number::complete::$p, |value: &$t| value.is_finite()).parse(i)
            }
        }
    )*)
}

impl_float_type!(f32, float, f64, double);

impl<I, E> NmeaParse<I, E> for char
where
    I: Input,
    <I as Input>::Item: AsChar,
    E: ParseError<I>,
{
    fn parse(i: I) -> IResult<I, Self, E> {
        anychar.parse(i)
    }
}


