//! Layout search: occupancy grid, combination generation, feasibility
//! filtering, and the backtracking placement solver.

pub mod filter;
pub mod grid;
pub mod pipeline;
pub mod solver;
pub mod variants;

// Re-export the public API consumed by callers.
pub use pipeline::{page_layouts, MAX_ACCEPTED_COMBINATIONS};
pub use solver::{PlacementRecord, Solution};
pub use variants::{ArticleVariant, LayoutCombination};
