use std::fmt::Display;

/// How the second rectangle passed to a classification relates to the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The second rectangle lies within the first (shared edges allowed).
    SecondInFirst,
    /// The first rectangle lies within the second.
    FirstInSecond,
    /// The rectangles meet but neither contains the other.
    Overlap,
    /// The rectangles do not meet.
    Disjoint,
}

impl Relation {
    #[inline]
    pub fn is_containment(&self) -> bool {
        matches!(self, Relation::SecondInFirst | Relation::FirstInSecond)
    }

    #[inline]
    pub fn meets(&self) -> bool {
        !matches!(self, Relation::Disjoint)
    }

    /// The relation obtained by exchanging the two rectangles.
    pub fn swapped(self) -> Self {
        match self {
            Relation::SecondInFirst => Relation::FirstInSecond,
            Relation::FirstInSecond => Relation::SecondInFirst,
            r => r,
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Relation::SecondInFirst => "Rectangle 2 is inside rectangle 1",
            Relation::FirstInSecond => "Rectangle 1 is inside rectangle 2",
            Relation::Overlap => "Rectangles overlap",
            Relation::Disjoint => "Rectangles do not overlap",
        })
    }
}
