use std::{error::Error, fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::rect::Rect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RectParseErr {
    /// Holds the number of values actually found.
    WrongArity(usize),
    InvalidNumber(String),
    NonFinite,
}

impl Display for RectParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RectParseErr::WrongArity(n) => write!(
                f,
                "expected 4 values (left right top bottom), found {}",
                n
            ),
            RectParseErr::InvalidNumber(tok) => {
                write!(f, "{:?} is not a number", tok)
            }
            RectParseErr::NonFinite => {
                write!(f, "rectangle extents must be finite")
            }
        }
    }
}

impl Error for RectParseErr {}

/// Parses `left right top bottom`, separated by whitespace and/or commas.
///
/// Extents are kept as written; no ordering is imposed.
impl FromStr for Rect {
    type Err = RectParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|_| RectParseErr::InvalidNumber(tok.to_string()))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if values.iter().any(|v| !v.is_finite()) {
            return Err(RectParseErr::NonFinite);
        }

        let n = values.len();
        values
            .into_iter()
            .collect_tuple()
            .map(|(left, right, top, bottom)| Rect::new(left, right, top, bottom))
            .ok_or(RectParseErr::WrongArity(n))
    }
}
