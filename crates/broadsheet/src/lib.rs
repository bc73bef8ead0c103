//! Candidate page-layout generation for grid-based newspaper pages.
//!
//! Given a fixed-size grid page and, for each article, a list of alternative
//! rectangular footprints (width in columns, height in rows, plus a reserved
//! trailing gap), `broadsheet` produces non-overlapping tilings that place
//! every article exactly once. Combinations are attempted fullest-page
//! first, pre-screened by a cheap correlation-based feasibility filter, and
//! tiled by an exhaustive backtracking solver; at most five accepted
//! combinations are emitted, each with its complete solution set.
//!
//! This is a pure computation library: the variant catalog comes from an
//! external caller (derived from article length, photo presence, and so on)
//! and the resulting coordinate lists go back out to a renderer or
//! paginator. Infeasibility is an empty result, never an error.
//!
//! # Example
//!
//! ```
//! use broadsheet::{page_layouts, ArticleVariant, PageConfig};
//! use uuid::Uuid;
//!
//! let page = PageConfig::new(4, 2)?;
//! let article = Uuid::new_v4();
//! let catalog = vec![vec![
//!     ArticleVariant { id: article, cols: 2, rows: 2, gap: 0 },
//!     ArticleVariant { id: article, cols: 1, rows: 4, gap: 0 },
//! ]];
//!
//! for group in page_layouts(&catalog, &page)? {
//!     for solution in &group {
//!         for record in &solution.records {
//!             println!("{} at ({}, {}), {} cols", record.id, record.row, record.col, record.cols);
//!         }
//!     }
//! }
//! # Ok::<(), broadsheet::LayoutError>(())
//! ```

pub mod config;
pub mod errors;
pub mod layout;

pub use config::PageConfig;
pub use errors::LayoutError;
pub use layout::{
    page_layouts, ArticleVariant, LayoutCombination, PlacementRecord, Solution,
    MAX_ACCEPTED_COMBINATIONS,
};
