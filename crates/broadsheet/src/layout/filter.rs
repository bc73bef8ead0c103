//! Fast feasibility filter — cheap rejection of combinations the solver
//! would otherwise spend exponential time disproving.
//!
//! The filter greedily places the combination's variants largest-footprint
//! first on a scratch grid. For each variant it computes the valid-mode
//! cross-correlation of the free-cell grid against an all-ones footprint
//! kernel; a position is a legal placement iff the match score equals the
//! footprint's cell count. The first variant with no legal position rejects
//! the combination outright.
//!
//! # Soundness caveat
//!
//! This is a heuristic, not a decision procedure. It commits to a single
//! greedy order (largest first) and a single tie-break (first position in
//! row-major order), whereas the solver explores every placement order from
//! its first-free-cell anchor. A combination the solver could still tile
//! under a different order may be rejected here. That behavior is inherited
//! from the original pipeline and reproduced as is.

use std::cmp::Reverse;

use crate::config::PageConfig;
use crate::layout::grid::Grid;
use crate::layout::variants::LayoutCombination;

/// Greedy largest-first placement simulation. Returns `false` as soon as a
/// variant has no legal position on the scratch grid.
pub fn passes(combination: &LayoutCombination, page: &PageConfig) -> bool {
    let mut scratch = Grid::new(page.rows, page.columns);

    let mut members = combination.variants.clone();
    // Stable sort: equal footprints keep combination order.
    members.sort_by_key(|v| Reverse(v.footprint_area()));

    for variant in &members {
        let height = variant.footprint_rows();
        let width = variant.cols;
        let Some((row, col)) = first_full_match(&scratch, height, width) else {
            tracing::debug!(
                article = %variant.id,
                height,
                width,
                "feasibility filter: no legal position, rejecting combination"
            );
            return false;
        };
        scratch.fill_region(row, col, height, width);
    }
    true
}

/// First position, in row-major order, where the `height × width` window
/// contains only FREE cells — the first peak of the valid correlation.
fn first_full_match(grid: &Grid, height: usize, width: usize) -> Option<(usize, usize)> {
    if height > grid.rows() || width > grid.cols() || height == 0 || width == 0 {
        return None;
    }
    let sums = grid.free_cell_sums();
    let full = height * width;
    for row in 0..=grid.rows() - height {
        for col in 0..=grid.cols() - width {
            if sums.window_sum(row, col, height, width) == full {
                return Some((row, col));
            }
        }
    }
    None
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
