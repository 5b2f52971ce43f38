//! Field converters.
//!
//! Each converter takes complete field tokens, as produced by
//! [`Fields`](super::Fields), and fails with [`Error::InvalidField`] carrying
//! the offending token when the token is not entirely consumed.

use std::str::FromStr;

use nom::{
    Finish, Parser,
    branch::alt,
    character::complete::char,
    combinator::{map_res, recognize, value},
    error::ErrorKind,
};

use crate::{
    Error,
    parsing::{consumed, decimal, fixed_digits, fraction, unsigned_decimal},
};

/// Runs `parser` over a whole field token.
pub fn field<'a, O, F>(token: &'a str, parser: F) -> Result<O, Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = Error<&'a str>>,
{
    consumed(parser, ErrorKind::Eof)
        .parse(token)
        .finish()
        .map(|(_, value)| value)
        .map_err(|_| Error::InvalidField(token))
}

/// Converts a numeric field that must be present.
pub fn required<'a, T>(token: &'a str) -> Result<T, Error<&'a str>>
where
    T: FromStr,
{
    field(token, decimal::<T>)
}

/// Converts a numeric field where an empty token means "not provided".
pub fn optional<'a, T>(token: &'a str) -> Result<Option<T>, Error<&'a str>>
where
    T: FromStr,
{
    if token.is_empty() {
        return Ok(None);
    }

    required(token).map(Some)
}

fn two_digits<'a>() -> impl Parser<&'a str, Output = u32, Error = Error<&'a str>> {
    map_res(fixed_digits(2), |digits: &str| digits.parse::<u32>())
}

/// Converts an `hhmmss.sss` token to seconds since midnight.
///
/// The fractional part is optional and may have any number of digits.
///
/// ```rust
/// use nmea0183_decoder::nmea_content::time_of_day;
///
/// assert_eq!(time_of_day("002153.000"), Ok(1313.0));
/// assert_eq!(time_of_day("161229"), Ok(58349.0));
/// assert!(time_of_day("16122").is_err());
/// ```
pub fn time_of_day(token: &str) -> Result<f64, Error<&str>> {
    let seconds = map_res(
        recognize((fixed_digits(2), fraction())),
        |s: &str| s.parse::<f64>(),
    );

    field(
        token,
        (two_digits(), two_digits(), seconds).map(|(hour, minute, second)| {
            f64::from(hour * 3600 + minute * 60) + second
        }),
    )
}

/// Converts seconds since midnight to a clock time.
///
/// Returns `None` when the value falls outside a single day.
pub fn clock_time(seconds: f64) -> Option<time::Time> {
    if !(0.0..86_400.0).contains(&seconds) {
        return None;
    }

    let whole = seconds.trunc() as u32;
    let nanoseconds = ((seconds.fract() * 1e9).round() as u32).min(999_999_999);

    time::Time::from_hms_nano(
        (whole / 3600) as u8,
        (whole / 60 % 60) as u8,
        (whole % 60) as u8,
        nanoseconds,
    )
    .ok()
}

fn coordinate<'a>(
    token: &'a str,
    direction: &'a str,
    degree_digits: usize,
    positive: char,
    negative: char,
) -> Result<f64, Error<&'a str>> {
    let degrees = map_res(fixed_digits(degree_digits), |digits: &str| {
        digits.parse::<u8>()
    });
    let magnitude = field(
        token,
        (degrees, unsigned_decimal::<f64>)
            .map(|(degrees, minutes)| f64::from(degrees) + minutes / 60.0),
    )?;

    let sign = field(
        direction,
        alt((value(1.0, char(positive)), value(-1.0, char(negative)))),
    )?;

    Ok(magnitude * sign)
}

/// Converts a `ddmm.mmmm` latitude and its `N`/`S` direction to signed
/// decimal degrees.
///
/// ```rust
/// use nmea0183_decoder::nmea_content::latitude;
///
/// let lat = latitude("3342.6618", "S").unwrap();
/// assert!((lat + 33.71103).abs() < 1e-6);
/// assert!(latitude("3342.6618", "E").is_err());
/// ```
pub fn latitude<'a>(token: &'a str, direction: &'a str) -> Result<f64, Error<&'a str>> {
    coordinate(token, direction, 2, 'N', 'S')
}

/// Converts a `dddmm.mmmm` longitude and its `E`/`W` direction to signed
/// decimal degrees.
pub fn longitude<'a>(token: &'a str, direction: &'a str) -> Result<f64, Error<&'a str>> {
    coordinate(token, direction, 3, 'E', 'W')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn test_time_of_day() {
        assert_close(time_of_day("161229.487").unwrap(), 58349.487);
        assert_close(time_of_day("235959.9").unwrap(), 86399.9);
        assert_close(time_of_day("000000").unwrap(), 0.0);
        assert_close(time_of_day("120000.").unwrap(), 43200.0);
        assert_close(time_of_day("161229.4").unwrap(), 58349.4);
        assert_close(time_of_day("000000.125").unwrap(), 0.125);

        for token in ["", "1612", "16122", "16a229", "161229.4x", "161229,487", "-61229"] {
            assert_eq!(time_of_day(token), Err(Error::InvalidField(token)));
        }
    }

    #[test]
    fn test_clock_time() {
        assert_eq!(
            clock_time(58349.5),
            Some(time::Time::from_hms_milli(16, 12, 29, 500).unwrap())
        );
        assert_eq!(clock_time(0.0), Some(time::Time::MIDNIGHT));
        assert_eq!(clock_time(86_400.0), None);
        assert_eq!(clock_time(-1.0), None);
    }

    #[test]
    fn test_latitude() {
        assert_close(latitude("3723.2475", "N").unwrap(), 37.387458333);
        assert_close(latitude("3723.2475", "S").unwrap(), -37.387458333);
        assert_close(latitude("0000.0000", "S").unwrap(), 0.0);
        assert_close(latitude("0030.0000", "N").unwrap(), 0.5);
        assert_close(latitude("0000.6000", "N").unwrap(), 0.01);

        assert_eq!(latitude("", "N"), Err(Error::InvalidField("")));
        assert_eq!(latitude("3", "N"), Err(Error::InvalidField("3")));
        assert_eq!(latitude("37x3.2475", "N"), Err(Error::InvalidField("37x3.2475")));
        assert_eq!(latitude("3723.2475", ""), Err(Error::InvalidField("")));
        assert_eq!(latitude("3723.2475", "NS"), Err(Error::InvalidField("NS")));
        assert_eq!(latitude("3723.2475", "W"), Err(Error::InvalidField("W")));
    }

    #[test]
    fn test_longitude() {
        assert_close(longitude("12158.3416", "W").unwrap(), -121.972360);
        assert_close(longitude("11751.3858", "E").unwrap(), 117.856430);

        assert_eq!(longitude("12158.3416", "N"), Err(Error::InvalidField("N")));
        assert_eq!(longitude("12", "E"), Err(Error::InvalidField("12")));
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional::<i32>(""), Ok(None));
        assert_eq!(optional::<u16>("20"), Ok(Some(20)));
        assert_eq!(optional::<u16>("2O"), Err(Error::InvalidField("2O")));
    }

    #[test]
    fn test_required() {
        assert_eq!(required::<f32>("1.2"), Ok(1.2));
        assert_eq!(required::<f32>("-34.2"), Ok(-34.2));
        assert_eq!(required::<u8>("10"), Ok(10));
        assert_eq!(required::<f32>(""), Err(Error::InvalidField("")));
        assert_eq!(required::<f32>("1.2M"), Err(Error::InvalidField("1.2M")));
        assert_eq!(required::<u8>("1.0"), Err(Error::InvalidField("1.0")));
    }
}
