//! Article variants and the combination generator.
//!
//! Each article arrives with a list of alternative footprints ("variants":
//! 1..5 columns wide, with or without a photo, and so on). The generator
//! enumerates one variant per article, drops combinations whose summed area
//! exceeds the page, and orders the survivors by descending total area so
//! the fuller pages are attempted first.

use std::cmp::Reverse;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PageConfig;
use crate::errors::LayoutError;

// ────────────────────────────────────────────────────────────────────────────
// Variant and combination types
// ────────────────────────────────────────────────────────────────────────────

/// One alternative footprint an article may be laid out with.
///
/// `id` identifies the *article*, not the variant — all variants of one
/// article carry the same id. `gap` rows are reserved (but visually empty)
/// below the article and count toward its footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleVariant {
    pub id: Uuid,
    /// Width in columns, 1..=page columns.
    pub cols: usize,
    /// Height in rows, positive.
    pub rows: usize,
    /// Reserved rows below the article, possibly zero.
    pub gap: usize,
}

impl ArticleVariant {
    /// Rows the variant occupies on the grid, gap included.
    pub fn footprint_rows(&self) -> usize {
        self.rows + self.gap
    }

    /// Cell count of the full footprint, gap included.
    pub fn footprint_area(&self) -> usize {
        self.footprint_rows() * self.cols
    }
}

/// Exactly one variant per article, plus the summed footprint area.
///
/// Invariant: `total_area <= page area` — enforced by the generator before
/// any grid work happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutCombination {
    pub variants: Vec<ArticleVariant>,
    pub total_area: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog validation
// ────────────────────────────────────────────────────────────────────────────

/// Validates the per-article variant catalog at the boundary, before any
/// grid work.
///
/// Rejects empty catalogs, articles without variants, zero-sized variants,
/// variants wider than the page, inconsistent ids within one article's
/// variant list, and duplicate ids across articles. A variant whose
/// `rows + gap` exceeds the page height is *not* rejected here: it can never
/// anchor anywhere, so combinations containing it simply produce no tilings.
pub fn validate_catalog(
    catalog: &[Vec<ArticleVariant>],
    page: &PageConfig,
) -> Result<(), LayoutError> {
    if catalog.is_empty() {
        return Err(LayoutError::InvalidCatalog(
            "catalog contains no articles".to_string(),
        ));
    }

    let mut seen_ids: Vec<Uuid> = Vec::with_capacity(catalog.len());
    for variants in catalog {
        let Some(first) = variants.first() else {
            return Err(LayoutError::InvalidCatalog(
                "an article has an empty variant list".to_string(),
            ));
        };
        if seen_ids.contains(&first.id) {
            return Err(LayoutError::InvalidCatalog(format!(
                "duplicate article id {} in catalog",
                first.id
            )));
        }
        seen_ids.push(first.id);

        for variant in variants {
            if variant.id != first.id {
                return Err(LayoutError::InvalidCatalog(format!(
                    "article variant list mixes ids {} and {}",
                    first.id, variant.id
                )));
            }
            if variant.rows == 0 {
                return Err(LayoutError::InvalidVariant {
                    id: variant.id,
                    reason: "height must be positive".to_string(),
                });
            }
            if variant.cols == 0 {
                return Err(LayoutError::InvalidVariant {
                    id: variant.id,
                    reason: "width must be positive".to_string(),
                });
            }
            if variant.cols > page.columns {
                return Err(LayoutError::InvalidVariant {
                    id: variant.id,
                    reason: format!(
                        "width {} exceeds page columns {}",
                        variant.cols, page.columns
                    ),
                });
            }
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Combination generator
// ────────────────────────────────────────────────────────────────────────────

/// Enumerates every combination of one variant per article, keeping only
/// those whose total area fits the page, ordered by strictly descending
/// total area.
///
/// Only index tuples are materialized for the area sort; `LayoutCombination`
/// values are built lazily as the consumer pulls, so a downstream cap stops
/// the expensive per-combination work early. Equal-area combinations keep
/// the stable order of the underlying Cartesian product (later articles vary
/// fastest).
pub fn combinations<'a>(
    catalog: &'a [Vec<ArticleVariant>],
    page: &PageConfig,
) -> impl Iterator<Item = LayoutCombination> + 'a {
    let page_area = page.area();

    let mut picks: Vec<(Vec<usize>, usize)> = catalog
        .iter()
        .map(|variants| 0..variants.len())
        .multi_cartesian_product()
        .map(|indices| {
            let area = indices
                .iter()
                .zip(catalog)
                .map(|(&v, variants)| variants[v].footprint_area())
                .sum::<usize>();
            (indices, area)
        })
        .filter(|&(_, area)| area <= page_area)
        .collect();

    // Stable sort: ties keep product order.
    picks.sort_by_key(|&(_, area)| Reverse(area));

    picks.into_iter().map(move |(indices, total_area)| {
        let variants = indices
            .iter()
            .zip(catalog)
            .map(|(&v, article)| article[v])
            .collect();
        LayoutCombination {
            variants,
            total_area,
        }
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
