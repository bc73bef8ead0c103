//! Orchestration — pipes the combination generator through the feasibility
//! filter into the backtracking solver, lazily.
//!
//! Combinations are pulled one at a time; each survivor of the filter is
//! handed to the solver and its full solution set is yielded as one group.
//! Pulling stops as soon as five groups have been emitted, so large variant
//! catalogs never pay for combinations nobody will look at.

use crate::config::PageConfig;
use crate::errors::LayoutError;
use crate::layout::filter;
use crate::layout::solver::{self, Solution};
use crate::layout::variants::{self, ArticleVariant};

/// Upper bound on accepted combinations per page.
pub const MAX_ACCEPTED_COMBINATIONS: usize = 5;

/// Generates candidate layouts for one page.
///
/// `catalog` holds one entry per article: the list of alternative footprints
/// that article may be laid out with. The catalog is validated up front
/// (spec'd dimensions only — no grid work); the returned iterator then
/// lazily yields at most [`MAX_ACCEPTED_COMBINATIONS`] groups, each group
/// being the complete solution set of one accepted combination, in
/// descending total-area order.
///
/// An iterator that yields nothing is a normal outcome: no combination of
/// the given variants tiles the page.
pub fn page_layouts<'a>(
    catalog: &'a [Vec<ArticleVariant>],
    page: &'a PageConfig,
) -> Result<impl Iterator<Item = Vec<Solution>> + 'a, LayoutError> {
    variants::validate_catalog(catalog, page)?;

    let groups = variants::combinations(catalog, page)
        .filter(move |combination| filter::passes(combination, page))
        .map(move |combination| {
            let solutions = solver::solve(&combination, page);
            tracing::debug!(
                total_area = combination.total_area,
                solutions = solutions.len(),
                "combination solved"
            );
            solutions
        })
        .filter(|solutions| !solutions.is_empty())
        .take(MAX_ACCEPTED_COMBINATIONS);

    Ok(groups)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
