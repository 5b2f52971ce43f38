//! # Parsing Utilities
//!
//! Small nom combinators shared by the checksum validator and the field
//! converters. Every NMEA field is a complete token, so each of these is used
//! together with [`consumed`] to reject trailing garbage such as `"12a"`.

use std::str::FromStr;

use nom::{
    AsChar, Err, Input, Mode, OutputMode, PResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1, one_of},
    combinator::{map_res, opt, recognize},
    error::{ErrorKind, ParseError},
};

use crate::IResult;

/// Ensures that the parser consumes all input.
///
/// # Arguments
///
/// * `f` - The parser to run
/// * `e` - Error kind to return if input is not fully consumed
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::consumed;
/// use nom::{IResult, Parser, character::complete::digit1, error::ErrorKind};
///
/// let mut parser = consumed(digit1, ErrorKind::Eof);
/// let result: IResult<_, _> = parser.parse("123");
/// assert!(result.is_ok());
///
/// // This fails because "a" is left over
/// let result: IResult<_, _> = parser.parse("12a");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}

/// Recognizes exactly `count` ASCII decimal digits.
///
/// Used for the fixed-width parts of NMEA fields: `HH`, `MM` and `SS` of a
/// time of day, and the degree prefix of a latitude (2) or longitude (3).
///
/// ```rust
/// use nmea0183_decoder::parsing::fixed_digits;
/// use nom::{IResult, Parser};
///
/// let result: IResult<_, _> = fixed_digits(3).parse("12158.3416");
/// assert_eq!(result, Ok(("58.3416", "121")));
///
/// let result: IResult<&str, &str> = fixed_digits(3).parse("12");
/// assert!(result.is_err());
/// ```
pub fn fixed_digits<I, E>(count: usize) -> impl Parser<I, Output = I, Error = E>
where
    I: Input,
    <I as Input>::Item: AsChar,
    E: ParseError<I>,
{
    take_while_m_n(count, count, |c: <I as Input>::Item| c.is_dec_digit())
}

/// Parses an unsigned decimal number such as `42`, `1.2` or `0.`.
///
/// Unlike nom's `double`, exponents and the `inf`/`nan` spellings are rejected.
///
/// ```rust
/// use nmea0183_decoder::{IResult, parsing::unsigned_decimal};
///
/// let result: IResult<_, f64> = unsigned_decimal("42.6618,N");
/// assert_eq!(result, Ok((",N", 42.6618)));
/// ```
pub fn unsigned_decimal<'a, T>(i: &'a str) -> IResult<&'a str, T>
where
    T: FromStr,
{
    map_res(recognize((digit1, fraction())), |s: &str| s.parse::<T>()).parse(i)
}

/// Parses a decimal number with an optional leading sign, such as `-34.2`.
pub fn decimal<'a, T>(i: &'a str) -> IResult<&'a str, T>
where
    T: FromStr,
{
    map_res(recognize((opt(one_of("+-")), digit1, fraction())), |s: &str| {
        s.parse::<T>()
    })
    .parse(i)
}

/// Recognizes an optional `.` followed by optional digits.
pub(crate) fn fraction<'a, E>()
-> impl Parser<&'a str, Output = Option<(char, Option<&'a str>)>, Error = E>
where
    E: ParseError<&'a str>,
{
    opt((char('.'), opt(digit1)))
}
