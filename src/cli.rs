use std::io::{BufRead, Write};

use clap::{Parser, ValueEnum};

use rect_relation::{
    emit_info,
    input::{self, InputErr},
    Boundary, Classifier, OverlapTest, Rect, Relation,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OverlapArg {
    Interval,
    EdgeStraddle,
}

impl From<OverlapArg> for OverlapTest {
    fn from(arg: OverlapArg) -> Self {
        match arg {
            OverlapArg::Interval => OverlapTest::Interval,
            OverlapArg::EdgeStraddle => OverlapTest::EdgeStraddle,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BoundaryArg {
    Inclusive,
    Exclusive,
}

impl From<BoundaryArg> for Boundary {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Inclusive => Boundary::Inclusive,
            BoundaryArg::Exclusive => Boundary::Exclusive,
        }
    }
}

/// Report whether two axis-aligned rectangles contain, overlap or miss each
/// other.
///
/// Rectangles are written as `left right top bottom` (commas allowed). When
/// either is omitted, both are read from stdin.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[arg(allow_hyphen_values = true)]
    pub first: Option<Rect>,
    #[arg(allow_hyphen_values = true)]
    pub second: Option<Rect>,
    #[arg(long, value_enum, default_value_t = OverlapArg::Interval)]
    pub overlap: OverlapArg,
    #[arg(long, value_enum, default_value_t = BoundaryArg::Inclusive)]
    pub boundary: BoundaryArg,
    #[arg(long, default_value_t = tracing::Level::WARN)]
    pub log_level: tracing::Level,
}

impl Cli {
    pub fn classifier(&self) -> Classifier {
        Classifier::new()
            .with_overlap_test(self.overlap.into())
            .with_boundary(self.boundary.into())
    }

    pub fn rects(&self) -> Option<(Rect, Rect)> {
        self.first.zip(self.second)
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

/// Takes the rects from the command line, or prompts for both on `writer`
/// and reads them from `reader` when either is missing, then writes the
/// relation's label.
pub fn run(
    cli: &Cli,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> Result<Relation, InputErr> {
    let classifier = cli.classifier();
    emit_info!(fmt:"using {:?}" | classifier);

    let (first, second) = match cli.rects() {
        Some(rects) => rects,
        None => input::read_pair(reader, writer)?,
    };

    let relation = classifier.classify(&first, &second);
    writeln!(writer, "{}", relation)?;
    Ok(relation)
}
