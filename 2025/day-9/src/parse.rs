use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

use crate::Point;

/// One vertex per line as `x,y`. Numbers may be negative and padded with
/// spaces or tabs; blank lines are skipped.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|digits: &str, span| digits.parse::<i64>().map_err(|e| Rich::custom(span, e)))
        .padded_by(text::inline_whitespace());

    let point = coord
        .then_ignore(just(','))
        .then(coord)
        .map(|(x, y)| Point::new(x, y));

    point
        .or_not()
        .padded_by(text::inline_whitespace())
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|lines| lines.into_iter().flatten().collect())
}

/// Parses the red tile list in traversal order.
pub fn points(input: &str) -> Result<Vec<Point>> {
    parser().parse(input).into_result().map_err(|errors| {
        let report = errors
            .iter()
            .map(|e| {
                let line = input[..e.span().start].matches('\n').count() + 1;
                format!("line {line}: {e}")
            })
            .join("; ");
        miette!("Parse failed: {report}")
    })
}
