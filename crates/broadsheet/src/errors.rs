use thiserror::Error;
use uuid::Uuid;

/// Library-level error type.
///
/// Infeasibility is never an error: a page that cannot be tiled produces an
/// empty result. `Err` is reserved for catalog validation failures at the
/// boundary and for out-of-bounds use of the public grid API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The page dimensions themselves are unusable.
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// The variant catalog itself is malformed (empty, or an article has no
    /// variants, or article ids are inconsistent).
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A variant whose dimensions can never be placed on the page.
    #[error("Invalid variant for article {id}: {reason}")]
    InvalidVariant { id: Uuid, reason: String },

    /// A grid region query extended past the grid boundary.
    #[error(
        "Region out of bounds: origin ({row}, {col}), size {height}x{width} on a {rows}x{cols} grid"
    )]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },
}
