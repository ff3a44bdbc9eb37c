pub mod classifier;
pub mod debug;
pub mod input;
pub mod parse;
pub mod point;
pub mod rect;
pub mod relation;
pub mod span;

pub use classifier::{classify, Classifier, OverlapTest};
pub use point::Point;
pub use rect::{Rect, RectErr};
pub use relation::Relation;
pub use span::{Boundary, Span};
