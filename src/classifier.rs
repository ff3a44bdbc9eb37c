use tracing::trace;

use crate::debug::{STYLE_FIRST, STYLE_OUTCOME, STYLE_SECOND};
use crate::rect::Rect;
use crate::relation::Relation;
use crate::span::Boundary;
use crate::{dbg_rect, emit_debug, info_label};

/// Which test decides [`Relation::Overlap`] once containment has been ruled
/// out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlapTest {
    /// Both axis projections intersect:
    /// `max(left1, left2) <= min(right1, right2)` and likewise vertically.
    #[default]
    Interval,
    /// Any one of four edge-straddling checks: an edge of the second rect
    /// falls inside the first rect's extent along that edge's axis. Reports
    /// `Overlap` for rects offset along only one axis, which the interval
    /// test correctly calls disjoint. Only the second rect's edges are
    /// checked against the first rect's extents, so the result can change
    /// when the arguments are swapped: `(0,10,0,10)` against `(-5,15,20,30)`
    /// is `Disjoint`, the reverse is `Overlap`.
    EdgeStraddle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classifier {
    pub overlap: OverlapTest,
    pub boundary: Boundary,
}

/// Classifies `second` against `first` with the default [`Classifier`].
pub fn classify(first: &Rect, second: &Rect) -> Relation {
    Classifier::default().classify(first, second)
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overlap_test(mut self, overlap: OverlapTest) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Rules are tried in order and the first match wins:
    /// second-in-first, first-in-second, overlap, disjoint. Identical rects
    /// therefore come out as [`Relation::SecondInFirst`].
    pub fn classify(&self, first: &Rect, second: &Rect) -> Relation {
        let relation = if first.contains(second) {
            trace!("{} second rect within first", info_label!("rule 1"));
            Relation::SecondInFirst
        } else if second.contains(first) {
            trace!("{} first rect within second", info_label!("rule 2"));
            Relation::FirstInSecond
        } else if self.overlaps(first, second) {
            trace!(
                "{} shared region: {:?}",
                info_label!("rule 3"),
                first.intersection(second, self.boundary)
            );
            Relation::Overlap
        } else {
            trace!("{} no rule matched", info_label!("rule 4"));
            Relation::Disjoint
        };

        emit_debug!(
            fmt:"classify {:?} {:?} with {:?} => {}" |
            dbg_rect!(STYLE_FIRST, "rect1", first),
            dbg_rect!(STYLE_SECOND, "rect2", second),
            self,
            STYLE_OUTCOME.paint(relation.to_string())
        );
        relation
    }

    fn overlaps(&self, first: &Rect, second: &Rect) -> bool {
        let (x1, y1) = (first.x_span(), first.y_span());
        let (x2, y2) = (second.x_span(), second.y_span());
        match self.overlap {
            OverlapTest::Interval => {
                x1.intersects(&x2, self.boundary)
                    && y1.intersects(&y2, self.boundary)
            }
            OverlapTest::EdgeStraddle => {
                x1.contains(x2.lo, self.boundary)
                    || x1.contains(x2.hi, self.boundary)
                    || y1.contains(y2.lo, self.boundary)
                    || y1.contains(y2.hi, self.boundary)
            }
        }
    }
}
