use std::time::Instant;

use miette::*;

use crate::parse;
use crate::polygon::PolygonIndex;
use crate::search::{self, SearchOptions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub search: SearchOptions,
    /// Fail on the first polygon defect instead of warning about it.
    pub strict: bool,
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with(input, &Options::default())
}

#[tracing::instrument(skip(input))]
pub fn process_with(input: &str, options: &Options) -> Result<String> {
    let start = Instant::now();
    let points = parse::points(input)?;

    let index = PolygonIndex::build(&points);
    tracing::info!(
        vertices = points.len(),
        slabs = index.slabs().len(),
        elapsed = ?start.elapsed(),
        "polygon built"
    );

    for defect in index.defects() {
        tracing::warn!(%defect, "malformed polygon, containment answers may be wrong");
    }
    if options.strict {
        if let Some(defect) = index.defects().first() {
            return Err(Report::new(defect.clone()).wrap_err("Polygon failed validation"));
        }
    }

    let search_start = Instant::now();
    let area = search::largest_rectangle(&points, &index, &options.search)?;
    tracing::info!(
        area,
        search = ?search_start.elapsed(),
        total = ?start.elapsed(),
        "search finished"
    );

    Ok(area.to_string())
}
