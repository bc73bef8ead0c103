//! Backtracking placement solver — exhaustive depth-first search over one
//! combination.
//!
//! The search is seeded with one root per combination member, each placing
//! that member's article at the top-left corner; every possible "first
//! article" becomes an independent search root. Expansion always anchors at
//! the first free cell of the branch's grid and tries every still-unplaced
//! article there. Each branch owns a deep copy of its grid and placement
//! list — sibling branches never alias state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PageConfig;
use crate::layout::grid::Grid;
use crate::layout::variants::LayoutCombination;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// One placed article — the final output unit.
///
/// The gap rows were reserved on the grid during placement but are not part
/// of the visible record; a renderer only needs the article's top-left cell
/// and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub id: Uuid,
    pub row: usize,
    pub col: usize,
    pub cols: usize,
}

/// A complete tiling: every article of the combination placed exactly once,
/// in placement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub records: Vec<PlacementRecord>,
}

/// Search state exclusively owned by one branch.
#[derive(Debug, Clone)]
struct PlacementState {
    grid: Grid,
    placed_ids: Vec<Uuid>,
    records: Vec<PlacementRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Search
// ────────────────────────────────────────────────────────────────────────────

/// Collects every complete tiling of the page reachable from every root.
///
/// The result may be empty (global infeasibility is a normal outcome, not an
/// error) and is not deduplicated: two roots can in principle converge to an
/// identical final tiling.
pub fn solve(combination: &LayoutCombination, page: &PageConfig) -> Vec<Solution> {
    let mut stack: Vec<PlacementState> = Vec::with_capacity(combination.variants.len());

    // One root per member, placed at the origin with its gap rows.
    for variant in &combination.variants {
        let height = variant.footprint_rows();
        let width = variant.cols;
        let mut grid = Grid::new(page.rows, page.columns);
        if !grid.region_fits(0, 0, height, width) {
            // The footprint overhangs the empty page; this member can never
            // be placed, so the root is stillborn.
            continue;
        }
        grid.fill_region(0, 0, height, width);
        stack.push(PlacementState {
            grid,
            placed_ids: vec![variant.id],
            records: vec![PlacementRecord {
                id: variant.id,
                row: 0,
                col: 0,
                cols: variant.cols,
            }],
        });
    }

    let mut solutions = Vec::new();
    while let Some(state) = stack.pop() {
        if state.placed_ids.len() == combination.variants.len() {
            solutions.push(Solution {
                records: state.records,
            });
            continue;
        }

        // The area invariant guarantees a free cell while articles remain;
        // a full grid here is a dead end, terminated silently.
        let Some((row, col)) = state.grid.first_free_cell() else {
            continue;
        };

        for variant in &combination.variants {
            if state.placed_ids.contains(&variant.id) {
                continue;
            }
            let height = variant.footprint_rows();
            let width = variant.cols;
            if !state.grid.region_fits(row, col, height, width)
                || !state.grid.region_free_unchecked(row, col, height, width)
            {
                continue;
            }

            let mut successor = state.clone();
            successor.grid.fill_region(row, col, height, width);
            successor.placed_ids.push(variant.id);
            successor.records.push(PlacementRecord {
                id: variant.id,
                row,
                col,
                cols: variant.cols,
            });
            stack.push(successor);
        }
        // Zero successors: the branch simply is not requeued.
    }

    tracing::trace!(
        members = combination.variants.len(),
        total_area = combination.total_area,
        solutions = solutions.len(),
        "backtracking search finished"
    );
    solutions
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::variants::ArticleVariant;

    fn make_variant(id: Uuid, cols: usize, rows: usize, gap: usize) -> ArticleVariant {
        ArticleVariant {
            id,
            cols,
            rows,
            gap,
        }
    }

    fn make_combination(variants: Vec<ArticleVariant>) -> LayoutCombination {
        let total_area = variants.iter().map(|v| v.footprint_area()).sum();
        LayoutCombination {
            variants,
            total_area,
        }
    }

    fn record_for(solution: &Solution, id: Uuid) -> &PlacementRecord {
        solution
            .records
            .iter()
            .find(|r| r.id == id)
            .expect("article missing from solution")
    }

    /// Every pair of footprints in a solution must be disjoint.
    fn assert_disjoint(solution: &Solution, combination: &LayoutCombination) {
        let footprints: Vec<(usize, usize, usize, usize)> = solution
            .records
            .iter()
            .map(|r| {
                let v = combination
                    .variants
                    .iter()
                    .find(|v| v.id == r.id)
                    .expect("record for unknown article");
                (r.row, r.col, v.footprint_rows(), v.cols)
            })
            .collect();
        for (i, &(r1, c1, h1, w1)) in footprints.iter().enumerate() {
            for &(r2, c2, h2, w2) in &footprints[i + 1..] {
                let overlap_rows = r1 < r2 + h2 && r2 < r1 + h1;
                let overlap_cols = c1 < c2 + w2 && c2 < c1 + w1;
                assert!(
                    !(overlap_rows && overlap_cols),
                    "footprints overlap: ({r1},{c1},{h1},{w1}) vs ({r2},{c2},{h2},{w2})"
                );
            }
        }
    }

    #[test]
    fn test_single_article_places_at_origin() {
        // Scenario A, one combination per variant: each yields exactly one
        // solution anchored at (0, 0).
        let page = PageConfig::new(4, 2).unwrap();
        let id = Uuid::new_v4();
        for (cols, rows) in [(2, 2), (1, 4)] {
            let combo = make_combination(vec![make_variant(id, cols, rows, 0)]);
            let solutions = solve(&combo, &page);
            assert_eq!(solutions.len(), 1);
            let record = record_for(&solutions[0], id);
            assert_eq!((record.row, record.col, record.cols), (0, 0, cols));
        }
    }

    #[test]
    fn test_two_roots_give_both_orders() {
        // Scenario C: two 1x1 articles on a 1x2 page — exactly two
        // solutions, one per first-placement root.
        let page = PageConfig::new(1, 2).unwrap();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let combo = make_combination(vec![
            make_variant(a, 1, 1, 0),
            make_variant(b, 1, 1, 0),
        ]);
        let solutions = solve(&combo, &page);
        assert_eq!(solutions.len(), 2);

        let mut corners: Vec<(usize, usize)> = solutions
            .iter()
            .map(|s| (record_for(s, a).col, record_for(s, b).col))
            .collect();
        corners.sort_unstable();
        assert_eq!(corners, vec![(0, 1), (1, 0)]);
        for solution in &solutions {
            assert_disjoint(solution, &combo);
        }
    }

    #[test]
    fn test_gap_rows_are_reserved_but_not_reported() {
        // Page 3x1: article A is 1 row + 1 gap row, article B is 1 row.
        // B can never land inside A's gap row.
        let page = PageConfig::new(3, 1).unwrap();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let combo = make_combination(vec![
            make_variant(a, 1, 1, 1),
            make_variant(b, 1, 1, 0),
        ]);
        let solutions = solve(&combo, &page);
        assert_eq!(solutions.len(), 2);
        for solution in &solutions {
            let ra = record_for(solution, a);
            let rb = record_for(solution, b);
            if ra.row == 0 {
                // A occupies rows 0..2 including its gap; B is pushed to row 2.
                assert_eq!(rb.row, 2);
            } else {
                assert_eq!((rb.row, ra.row), (0, 1));
            }
            assert_disjoint(solution, &combo);
        }
    }

    #[test]
    fn test_every_article_placed_exactly_once() {
        let page = PageConfig::new(4, 2).unwrap();
        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let combo = make_combination(
            ids.iter().map(|&id| make_variant(id, 2, 1, 0)).collect(),
        );
        let solutions = solve(&combo, &page);
        assert!(!solutions.is_empty());
        for solution in &solutions {
            assert_eq!(solution.records.len(), 4);
            for &id in &ids {
                assert_eq!(
                    solution.records.iter().filter(|r| r.id == id).count(),
                    1,
                    "article placed exactly once"
                );
            }
            assert_disjoint(solution, &combo);
        }
    }

    #[test]
    fn test_infeasible_combination_yields_empty_set() {
        // Two 2x2 blocks cannot coexist on a 3x3 page, although their
        // summed area fits.
        let page = PageConfig::new(3, 3).unwrap();
        let combo = make_combination(vec![
            make_variant(Uuid::new_v4(), 2, 2, 0),
            make_variant(Uuid::new_v4(), 2, 2, 0),
        ]);
        assert!(solve(&combo, &page).is_empty());
    }

    #[test]
    fn test_overhanging_footprint_never_anchors() {
        let page = PageConfig::new(2, 2).unwrap();
        let combo = make_combination(vec![make_variant(Uuid::new_v4(), 1, 2, 1)]);
        assert!(solve(&combo, &page).is_empty());
    }

    #[test]
    fn test_solver_output_is_deterministic() {
        let page = PageConfig::new(3, 2).unwrap();
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let combo = make_combination(
            ids.iter().map(|&id| make_variant(id, 2, 1, 0)).collect(),
        );
        let first = solve(&combo, &page);
        let second = solve(&combo, &page);
        assert_eq!(first, second);
    }
}
