use itertools::Itertools;
use procr_ansi_term::{Color, Style};
use std::fmt;

use crate::{point::Point, rect::Rect, span::Span};

pub const STYLE_TYPE_NAME: Style = Style::new().bold().fg(Color::Purple);
pub const STYLE_LABEL: Style = Style::new().fg(Color::Yellow);

pub const COLOR_GREEN: Color = Color::Fixed(40);
pub const COLOR_BLUE: Color = Color::Fixed(27);
pub const COLOR_ORANGE: Color = Color::Fixed(208);

pub const STYLE_FIRST: Style = Style::new().fg(COLOR_GREEN);
pub const STYLE_SECOND: Style = Style::new().fg(COLOR_BLUE);
pub const STYLE_OUTCOME: Style = Style::new().bold().fg(COLOR_ORANGE);

pub fn debug_with(
    f: impl Fn(&mut fmt::Formatter) -> fmt::Result,
) -> impl fmt::Debug {
    struct DebugWith<F>(F);

    impl<F> fmt::Debug for DebugWith<F>
    where
        F: Fn(&mut fmt::Formatter) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0(f)
        }
    }

    DebugWith(f)
}

#[macro_export]
macro_rules! type_name {
    ($name:expr) => {
        $crate::debug::STYLE_TYPE_NAME.paint($name)
    };
}

#[macro_export]
macro_rules! item_dbg {
    ($label:expr, $item:expr) => {
        format!("{}:{:?}", $crate::debug::STYLE_LABEL.paint($label), $item)
    };
}

#[macro_export]
macro_rules! info_label {
    ($label:literal) => {
        procr_ansi_term::Style::new()
            .bold()
            .fg(procr_ansi_term::Color::Yellow)
            .paint(format!("({})", $label))
    };
}

#[macro_export]
macro_rules! emit_info {
    (sty:$style:expr, msg:$msg:literal) => {
        tracing::info!("{}", $style.paint($msg));
    };
    (sty:$style:expr, fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!("{}", $style.paint(format!($fmt, $($rest)*)));
    };
    (fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!($fmt, $($rest)*);
    };
}

#[macro_export]
macro_rules! emit_debug {
    (sty:$style:expr, msg:$msg:literal) => {
        tracing::debug!("{}", $style.paint($msg));
    };
    (sty:$style:expr, fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::debug!("{}", $style.paint(format!($fmt, $($rest)*)));
    };
    (fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::debug!($fmt, $($rest)*);
    };
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("@({},{})", self.x, self.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.lo, self.hi)
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", type_name!("R"))?;
        write!(
            f,
            "(l:{}, r:{}, t:{}, b:{})",
            self.left(),
            self.right(),
            self.top(),
            self.bottom()
        )
    }
}

#[macro_export]
macro_rules! dbg_rect {
    ($style:expr, $label:literal, $rect:expr) => {
        $crate::debug::debug_with($crate::debug::debug_rect(
            $style, $label, $rect,
        ))
    };
}

/// A rect tagged with a label, followed by the spans it is compared through.
pub fn debug_rect<'a>(
    style: Style,
    label: &'static str,
    rect: &'a Rect,
) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + 'a {
    move |f| {
        write!(f, "{}", style.paint(label))?;
        write!(
            f,
            " {:?} {}",
            rect,
            [
                item_dbg!("x", rect.x_span()),
                item_dbg!("y", rect.y_span())
            ]
            .iter()
            .join(" ")
        )
    }
}
