use itertools::Itertools;
use miette::*;

use crate::{parse, tile_area};

/// Largest rectangle spanned by any two red tiles, with no regard for what
/// lies between them.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse::points(input)?;

    let max_area = points
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| tile_area(a, b))
        .max()
        .unwrap_or(0);

    Ok(max_area.to_string())
}
