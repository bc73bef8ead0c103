//! Page dimensions for a single newspaper page.

use serde::{Deserialize, Serialize};

use crate::errors::LayoutError;

/// Default page height in grid rows (broadsheet column grid).
pub const DEFAULT_PAGE_ROWS: usize = 102;
/// Default page width in text columns.
pub const DEFAULT_PAGE_COLUMNS: usize = 5;

/// Grid dimensions of one page.
///
/// A page is a `rows × columns` cell grid; every article footprint is
/// measured in the same cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            rows: DEFAULT_PAGE_ROWS,
            columns: DEFAULT_PAGE_COLUMNS,
        }
    }
}

impl PageConfig {
    /// Creates a page config, rejecting degenerate (zero-sized) pages.
    pub fn new(rows: usize, columns: usize) -> Result<Self, LayoutError> {
        if rows == 0 || columns == 0 {
            return Err(LayoutError::InvalidPage(format!(
                "page dimensions must be non-zero, got {rows}x{columns}"
            )));
        }
        Ok(PageConfig { rows, columns })
    }

    /// Total cell count of the page.
    pub fn area(&self) -> usize {
        self.rows * self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_102_by_5() {
        let page = PageConfig::default();
        assert_eq!(page.rows, 102);
        assert_eq!(page.columns, 5);
        assert_eq!(page.area(), 510);
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(PageConfig::new(0, 5).is_err());
        assert!(PageConfig::new(102, 0).is_err());
        assert!(PageConfig::new(4, 2).is_ok());
    }
}
