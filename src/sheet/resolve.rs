//! Cell resolution - progress value to crop geometry.
//!
//! Cells are numbered row-major across a page (left to right, then top to
//! bottom) and pages follow each other in `images` order:
//!
//! ```text
//! page 0                 page 1
//! ┌────┬────┬────┬────┐  ┌────┬────┬─ ─
//! │  0 │  1 │  2 │  3 │  │ 16 │ 17 │
//! ├────┼────┼────┼────┤  ├────┼────┼─ ─
//! │  4 │  5 │  6 │  7 │  │    │    │
//! ...
//! ```

use crate::sheet::GridConfig;
use crate::types::{ImageId, Vector2};

/// Crop geometry for one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCell {
    /// The progress value this cell was resolved from.
    pub alpha: f64,
    /// Index across all pages, in `0..cell_count`.
    pub cell_index: u32,
    /// Page holding the cell.
    pub page: u32,
    /// Index within the page grid.
    pub local_index: u32,
    /// Top-left corner of the cell within its page image.
    pub offset: Vector2,
    /// Crop size, always `cell_size x cell_size`.
    pub size: Vector2,
}

impl ResolvedCell {
    /// Negative progress shows the idle image.
    pub fn is_idle(&self) -> bool {
        self.alpha < 0.0
    }

    /// Image to display for this cell.
    ///
    /// `page` keeps the arithmetic position even for negative progress; the
    /// idle override only applies here.
    pub fn image<'a>(&self, config: &'a GridConfig) -> &'a ImageId {
        if self.is_idle() {
            return config.idle_image();
        }
        // Validation guarantees one image per page, and `page < page_count`.
        &config.images()[self.page as usize]
    }
}

/// Resolve the cell shown at progress `alpha`.
///
/// `floor(alpha * cell_count)` clamped into `0..cell_count`, so `alpha = 1.0`
/// lands on the last cell and negative values on the first.
pub fn resolve(config: &GridConfig, alpha: f64) -> ResolvedCell {
    // Float-to-int casts saturate: negatives and NaN become 0.
    let raw = (alpha * f64::from(config.cell_count())).floor() as u32;

    ResolvedCell {
        alpha,
        ..resolve_index(config, raw)
    }
}

/// Resolve an explicit cell index, clamped to the last cell.
///
/// The returned `alpha` is the midpoint of the cell's progress range, so
/// resolving it again lands on the same cell.
pub fn resolve_index(config: &GridConfig, cell_index: u32) -> ResolvedCell {
    let count = config.cell_count();
    let cell_index = cell_index.min(count - 1);

    let cells_per_page = config.cells_per_page();
    let page = cell_index / cells_per_page;
    let local_index = cell_index - cells_per_page * page;

    let columns = config.columns();
    let size = config.cell_size();
    // Validation guarantees (columns - 1) * size and (rows - 1) * size fit.
    let offset = Vector2::new((local_index % columns) * size, (local_index / columns) * size);

    ResolvedCell {
        alpha: (f64::from(cell_index) + 0.5) / f64::from(count),
        cell_index,
        page,
        local_index,
        offset,
        size: Vector2::splat(size),
    }
}

// =============================================================================
// Tests
// =============================================================================
