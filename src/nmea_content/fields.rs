use nom::{
    Finish, Parser,
    bytes::complete::take_till,
    character::complete::char,
    combinator::opt,
    sequence::terminated,
};

use crate::{Error, IResult};

/// Sequential reader over the comma-separated fields of a sentence.
///
/// The tokenizer starts right after the identifier's comma and hands out one
/// field per call. Every field but the last ends at `,`; the last field ends
/// at the `*` terminator and is read with [`Fields::last_field`], which also
/// detects field-count mismatches and truncated input.
///
/// An empty field is a valid field (`Ok("")`). Whether an empty value is
/// acceptable is decided by the sentence decoder, not here.
///
/// ```rust
/// use nmea0183_decoder::nmea_content::Fields;
///
/// let mut fields = Fields::new("A,,1.5*33");
/// assert_eq!(fields.next_field(), Ok("A"));
/// assert_eq!(fields.next_field(), Ok(""));
/// assert_eq!(fields.last_field(), Ok("1.5"));
/// ```
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: Option<&'a str>,
}

impl<'a> Fields<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: Some(input) }
    }

    /// Returns the text up to the next `,`.
    ///
    /// When no comma is left, the remaining input is returned as a whole and
    /// the tokenizer is exhausted; any further read fails with
    /// [`Error::Truncated`].
    pub fn next_field(&mut self) -> Result<&'a str, Error<&'a str>> {
        let rest = self.rest.ok_or(Error::Truncated)?;

        let result: IResult<_, _> = (take_till(|c| c == ','), opt(char(','))).parse(rest);
        let (rest, (field, separator)) = result.finish().map_err(|_| Error::Truncated)?;

        self.rest = separator.map(|_| rest);
        Ok(field)
    }

    /// Discards the next field.
    pub fn skip(&mut self) -> Result<(), Error<&'a str>> {
        self.next_field().map(|_| ())
    }

    /// Returns the final field, the text up to the `*` terminator.
    ///
    /// Fails with [`Error::Truncated`] if the input is already exhausted or no
    /// `*` follows, and with [`Error::InvalidField`] if the extracted text
    /// contains a `,` (the sentence carries more fields than expected).
    pub fn last_field(&mut self) -> Result<&'a str, Error<&'a str>> {
        let rest = self.rest.take().ok_or(Error::Truncated)?;

        let result: IResult<_, _> = terminated(take_till(|c| c == '*'), char('*')).parse(rest);
        let (_, field) = result.finish().map_err(|_| Error::Truncated)?;

        if field.contains(',') {
            return Err(Error::InvalidField(field));
        }

        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        let mut fields = Fields::new("3723.2475,N,12158.3416,W,161229.487,A,A*41");
        assert_eq!(fields.next_field(), Ok("3723.2475"));
        assert_eq!(fields.next_field(), Ok("N"));
        assert_eq!(fields.next_field(), Ok("12158.3416"));
        assert_eq!(fields.next_field(), Ok("W"));
        assert_eq!(fields.next_field(), Ok("161229.487"));
        assert_eq!(fields.next_field(), Ok("A"));
        assert_eq!(fields.last_field(), Ok("A"));
        assert_eq!(fields.next_field(), Err(Error::Truncated));
        assert_eq!(fields.last_field(), Err(Error::Truncated));
    }

    #[test]
    fn test_empty_fields() {
        let mut fields = Fields::new(",,*00");
        assert_eq!(fields.next_field(), Ok(""));
        assert_eq!(fields.next_field(), Ok(""));
        assert_eq!(fields.last_field(), Ok(""));
    }

    #[test]
    fn test_last_field_with_stray_comma() {
        let mut fields = Fields::new("A,A,X*41");
        assert_eq!(fields.next_field(), Ok("A"));
        assert_eq!(fields.last_field(), Err(Error::InvalidField("A,X")));
    }

    #[test]
    fn test_last_field_without_terminator() {
        let mut fields = Fields::new("1.8,1.0,1.5");
        fields.skip().unwrap();
        fields.skip().unwrap();
        assert_eq!(fields.last_field(), Err(Error::Truncated));
    }

    #[test]
    fn test_last_field_stops_at_first_terminator() {
        let mut fields = Fields::new("1.5*33*44");
        assert_eq!(fields.last_field(), Ok("1.5"));
        assert_eq!(fields.last_field(), Err(Error::Truncated));
    }

    #[test]
    fn test_single_field_without_separator() {
        let mut fields = Fields::new("A");
        assert_eq!(fields.next_field(), Ok("A"));
        assert_eq!(fields.next_field(), Err(Error::Truncated));

        let mut fields = Fields::new("");
        assert_eq!(fields.next_field(), Ok(""));
        assert_eq!(fields.skip(), Err(Error::Truncated));
    }

    #[test]
    fn test_too_few_fields() {
        // A missing field shifts the terminator into an earlier field, so the
        // final read finds nothing left.
        let mut fields = Fields::new("161229.487,A*41");
        assert_eq!(fields.next_field(), Ok("161229.487"));
        assert_eq!(fields.next_field(), Ok("A*41"));
        assert_eq!(fields.last_field(), Err(Error::Truncated));
    }
}
