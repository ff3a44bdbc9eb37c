use std::{error::Error, fmt::Display};

use crate::point::Point;
use crate::span::{Boundary, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectErr {
    NonFinite,
    InvertedHorizontal,
    InvertedVertical,
}

impl Display for RectErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RectErr::NonFinite => write!(f, "rectangle extents must be finite"),
            RectErr::InvertedHorizontal => write!(f, "left must not exceed right"),
            RectErr::InvertedVertical => write!(f, "top must not exceed bottom"),
        }
    }
}

impl Error for RectErr {}

/// An axis-aligned rectangle given by its four extents.
///
/// The crate's convention is `left <= right` and `top <= bottom`
/// numerically, i.e. screen space with y growing downward. [`Rect::new`]
/// does not enforce it; comparisons go through [`Rect::x_span`] and
/// [`Rect::y_span`], which order each pair, so two rects that both use the
/// y-up convention still compare correctly.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Rect {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Rect {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Swaps inverted extent pairs so the result satisfies the convention.
    pub fn normalized(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        let (x, y) = (Span::new(left, right), Span::new(top, bottom));
        Self::new(x.lo, x.hi, y.lo, y.hi)
    }

    pub fn checked(
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    ) -> Result<Self, RectErr> {
        if ![left, right, top, bottom].iter().all(|v| v.is_finite()) {
            Err(RectErr::NonFinite)
        } else if left > right {
            Err(RectErr::InvertedHorizontal)
        } else if top > bottom {
            Err(RectErr::InvertedVertical)
        } else {
            Ok(Self::new(left, right, top, bottom))
        }
    }

    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::normalized(a.x, b.x, a.y, b.y)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    #[inline]
    pub fn x_span(&self) -> Span {
        Span::new(self.left, self.right)
    }

    #[inline]
    pub fn y_span(&self) -> Span {
        Span::new(self.top, self.bottom)
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_span().len()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_span().len()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Zero width or zero height.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.x_span().is_degenerate() || self.y_span().is_degenerate()
    }

    #[inline]
    pub fn is_normalized(&self) -> bool {
        (self.left <= self.right) && (self.top <= self.bottom)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.x_span().contains(p.x, Boundary::Inclusive)
            && self.y_span().contains(p.y, Boundary::Inclusive)
    }

    /// `other` lies entirely within `self`; shared edges count.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x_span().covers(&other.x_span())
            && self.y_span().covers(&other.y_span())
    }

    /// The region both rects share, in the crate's convention.
    pub fn intersection(&self, other: &Rect, boundary: Boundary) -> Option<Rect> {
        let x = self.x_span().intersection(&other.x_span(), boundary)?;
        let y = self.y_span().intersection(&other.y_span(), boundary)?;
        Some(Rect::new(x.lo, x.hi, y.lo, y.hi))
    }
}
