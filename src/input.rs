use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead, Write},
};

use tracing::debug;

use crate::{parse::RectParseErr, rect::Rect};

#[derive(Debug)]
pub enum InputErr {
    Io(io::Error),
    EndOfInput,
    Parse(RectParseErr),
}

impl Display for InputErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputErr::Io(err) => write!(f, "failed to read input: {}", err),
            InputErr::EndOfInput => write!(f, "input ended before a rectangle was read"),
            InputErr::Parse(err) => write!(f, "invalid rectangle: {}", err),
        }
    }
}

impl Error for InputErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputErr::Io(err) => Some(err),
            InputErr::EndOfInput => None,
            InputErr::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for InputErr {
    fn from(err: io::Error) -> Self {
        InputErr::Io(err)
    }
}

impl From<RectParseErr> for InputErr {
    fn from(err: RectParseErr) -> Self {
        InputErr::Parse(err)
    }
}

/// Writes `prompt`, then reads and parses a single line.
pub fn read_rect(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> Result<Rect, InputErr> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputErr::EndOfInput);
    }
    debug!("read line {:?}", line.trim_end());
    Ok(line.parse::<Rect>()?)
}

/// Reads rectangle 1, then rectangle 2.
pub fn read_pair(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> Result<(Rect, Rect), InputErr> {
    let first = read_rect(
        reader,
        writer,
        "Enter left, right, top, bottom of rectangle 1: ",
    )?;
    let second = read_rect(
        reader,
        writer,
        "Enter left, right, top, bottom of rectangle 2: ",
    )?;
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_two_rects_and_prompts() {
        let mut reader = Cursor::new("0 10 0 10\n2,5,2,5\n");
        let mut out = Vec::new();
        let (a, b) = read_pair(&mut reader, &mut out).unwrap();
        assert_eq!(a, Rect::new(0.0, 10.0, 0.0, 10.0));
        assert_eq!(b, Rect::new(2.0, 5.0, 2.0, 5.0));

        let prompts = String::from_utf8(out).unwrap();
        assert_eq!(
            prompts,
            "Enter left, right, top, bottom of rectangle 1: \
             Enter left, right, top, bottom of rectangle 2: "
        );
    }

    #[test]
    fn last_line_without_newline() {
        let mut reader = Cursor::new("1 2 3 4");
        let rect = read_rect(&mut reader, &mut io::sink(), "> ").unwrap();
        assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn end_of_input() {
        let mut reader = Cursor::new("0 10 0 10\n");
        let err = read_pair(&mut reader, &mut io::sink()).unwrap_err();
        assert!(matches!(err, InputErr::EndOfInput));
    }

    #[test]
    fn parse_error_is_chained() {
        let mut reader = Cursor::new("0 10 zero 10\n");
        let err = read_rect(&mut reader, &mut io::sink(), "").unwrap_err();
        assert!(matches!(
            err,
            InputErr::Parse(RectParseErr::InvalidNumber(ref tok)) if tok == "zero"
        ));
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "invalid rectangle: \"zero\" is not a number"
        );
    }
}
