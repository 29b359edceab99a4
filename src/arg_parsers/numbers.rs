use std::{ffi::OsStr, str::FromStr};

use crate::arg_parse_err::ArgParseErr;

/// Strips leading and trailing whitespace and parses the rest as `T`.
pub fn strip_and_parse_number<T>(input: &str) -> Result<T, T::Err>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    input.trim().parse::<T>()
}

/// Parses a numeric command-line value, rejecting non-UTF-8 input.
pub fn parse_numeric_arg<T>(input: &OsStr) -> Result<T, ArgParseErr>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    let string = input.to_str().ok_or_else(ArgParseErr::new)?;
    strip_and_parse_number(string).map_err(|_| ArgParseErr::new())
}
