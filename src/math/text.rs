use super::Vector2;
use crate::ParseVector2Error;
use std::{fmt, str::FromStr};

/// Formats as `X:<x> Y:<y>`.
///
/// Floats are written with `.` as decimal separator regardless of the system locale, using the
/// shortest text that parses back to the same value. `Vector2::new(1.5, 2.0)` is written as
/// `X:1.5 Y:2`.
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{} Y:{}", self.x, self.y)
    }
}

/// Parses the text written by the `Display` impl.
impl FromStr for Vector2 {
    type Err = ParseVector2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let result = parse(s);
        if let Err(e) = &result {
            log::debug!("Rejected vector {:?}: {}", s, e);
        }
        result
    }
}

fn parse(s: &str) -> Result<Vector2, ParseVector2Error> {
    let (x, rest) = component(s.trim_matches(is_separator), 'X')?;
    let (y, rest) = component(rest, 'Y')?;
    if !rest.is_empty() {
        return Err(ParseVector2Error::TrailingInput(rest.to_owned()));
    }
    Ok(Vector2::new(x, y))
}

/// Parse `<axis>:<value>` at the start of `s`, returning the value and the text after it with
/// leading whitespace removed.
fn component(s: &str, axis: char) -> Result<(f32, &str), ParseVector2Error> {
    let s = s
        .strip_prefix(axis)
        .and_then(|s| s.strip_prefix(':'))
        .ok_or(ParseVector2Error::MissingComponent { axis })?;
    let end = s.find(is_separator).unwrap_or(s.len());
    let (value, rest) = s.split_at(end);
    let value = value
        .parse::<f32>()
        .map_err(|inner| ParseVector2Error::InvalidComponent { axis, inner })?;
    Ok((value, rest.trim_start_matches(is_separator)))
}

// Only ASCII whitespace separates the fields
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace()
}
