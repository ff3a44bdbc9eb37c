/// Whether two extents that merely touch are considered to meet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Shared edges count: `lo <= x <= hi`.
    #[default]
    Inclusive,
    /// Shared edges do not count: `lo < x < hi`.
    ///
    /// This excludes touching, not zero area: two zero-width lines that
    /// cross through each other's interior still meet.
    Exclusive,
}

/// A closed interval along one axis.
///
/// Always stored with `lo <= hi` (unless an endpoint is NaN), so a rect's
/// horizontal and vertical extents can be compared without caring which
/// numerical direction its author used for "top".
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Span {
    pub lo: f64,
    pub hi: f64,
}

impl Span {
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    #[inline]
    pub fn len(&self) -> f64 {
        self.hi - self.lo
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }

    #[inline]
    pub fn contains(&self, x: f64, boundary: Boundary) -> bool {
        match boundary {
            Boundary::Inclusive => (self.lo <= x) && (x <= self.hi),
            Boundary::Exclusive => (self.lo < x) && (x < self.hi),
        }
    }

    /// `other` lies within `self`, shared endpoints included.
    #[inline]
    pub fn covers(&self, other: &Span) -> bool {
        (self.lo <= other.lo) && (other.hi <= self.hi)
    }

    /// Equivalent to `max(lo) <= min(hi)`, written without `f64::max` so a
    /// NaN endpoint fails the test instead of being skipped.
    #[inline]
    pub fn intersects(&self, other: &Span, boundary: Boundary) -> bool {
        match boundary {
            Boundary::Inclusive => {
                (self.lo <= other.hi) && (other.lo <= self.hi)
            }
            Boundary::Exclusive => (self.lo < other.hi) && (other.lo < self.hi),
        }
    }

    pub fn intersection(&self, other: &Span, boundary: Boundary) -> Option<Span> {
        if self.intersects(other, boundary) {
            Some(Span {
                lo: self.lo.max(other.lo),
                hi: self.hi.min(other.hi),
            })
        } else {
            None
        }
    }
}
