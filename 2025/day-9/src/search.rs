use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use miette::*;
use rayon::prelude::*;

use crate::polygon::PolygonIndex;
use crate::{tile_area, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Size of the dedicated worker pool.
    pub workers: NonZeroUsize,
    /// Draw a progress bar over first-corner indices on stderr.
    pub progress: bool,
}

impl SearchOptions {
    pub fn with_workers(workers: NonZeroUsize) -> Self {
        Self {
            workers,
            ..Self::default()
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            progress: false,
        }
    }
}

/// Best area any worker has validated so far, clamped to `u64::MAX`. Never
/// decreases.
///
/// Only used to prune candidates. A clamped value is still a lower bound on
/// the true best, so pruning stays sound; exact areas travel through the
/// workers' own `u128` accumulators.
#[derive(Debug, Default)]
struct SharedBest(AtomicU64);

impl SharedBest {
    #[inline]
    fn get(&self) -> u128 {
        u128::from(self.0.load(Ordering::Relaxed))
    }

    /// Raises the best to `area` unless another worker already got at least
    /// as far. Returns whether the stored value grew.
    fn offer(&self, area: u128) -> bool {
        let area = u64::try_from(area).unwrap_or(u64::MAX);
        let mut current = self.0.load(Ordering::Relaxed);
        loop {
            if area <= current {
                return false;
            }
            match self
                .0
                .compare_exchange_weak(current, area, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }
}

/// Pairs vertex `i` with every later vertex and returns the worker's best,
/// starting from `local_best`.
fn scan_row(
    points: &[Point],
    index: &PolygonIndex,
    i: usize,
    mut local_best: u128,
    shared: &SharedBest,
) -> u128 {
    let a = points[i];

    for &b in &points[i + 1..] {
        // Same row or column: a line, not a rectangle.
        if a.x == b.x || a.y == b.y {
            continue;
        }

        let area = tile_area(a, b);

        // The shared best may have moved on since `local_best` was last raised,
        // so it is read fresh for every candidate that survives the local check.
        if area <= local_best || area <= shared.get() {
            continue;
        }

        if index.contains_rect(a, b) {
            local_best = area;
            if shared.offer(area) {
                tracing::debug!(area, %a, %b, "new best rectangle");
            }
        }
    }
    local_best
}

fn progress_bar(len: usize, visible: bool) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }
    let style = ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {wide_bar} {pos}/{len} first corners ({eta})",
    )
    .into_diagnostic()?;
    Ok(ProgressBar::new(len as u64).with_style(style))
}

/// Largest inclusive-tile area of a rectangle whose opposite corners are two
/// distinct red tiles and which lies entirely inside the polygon.
///
/// Each unordered pair is examined once, as `(i, j)` with `i < j`; the first
/// corners `i` are spread over a pool of exactly `options.workers` threads.
/// The result does not depend on the worker count or on scheduling.
#[tracing::instrument(skip_all, fields(points = points.len(), workers = options.workers.get()))]
pub fn largest_rectangle(
    points: &[Point],
    index: &PolygonIndex,
    options: &SearchOptions,
) -> Result<u128> {
    let n = points.len();
    if n < 2 {
        return Ok(0);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers.get())
        .thread_name(|i| format!("day9-search-{i}"))
        .build()
        .into_diagnostic()
        .wrap_err("Failed to start search workers")?;

    let bar = progress_bar(n, options.progress)?;
    let shared = SharedBest::default();

    let best = pool.install(|| {
        (0..n)
            .into_par_iter()
            .progress_with(bar.clone())
            .fold(|| 0, |local_best, i| scan_row(points, index, i, local_best, &shared))
            .reduce(|| 0, u128::max)
    });
    bar.finish_and_clear();

    debug_assert_eq!(best.min(u128::from(u64::MAX)), shared.get());
    Ok(best)
}
