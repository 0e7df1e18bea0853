//! Grid configuration for a spritesheet.
//!
//! A `GridConfig` can only be obtained through validation, so the resolver
//! never divides by zero, never indexes past the image list, and every cell
//! offset fits in a `u32`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SheetError};
use crate::types::ImageId;

// =============================================================================
// GridConfig
// =============================================================================

/// Layout of a spritesheet: square cells in a `columns x rows` grid per
/// page, spread over one or more page images.
///
/// `images[0]` doubles as the idle image shown for negative progress.
///
/// # Example
///
/// ```ignore
/// use spark_spritesheet::GridConfig;
///
/// let config = GridConfig::builder()
///     .cell_size(32)
///     .cell_count(16)
///     .columns(4)
///     .rows(4)
///     .image("idle")
///     .image("page0")
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGridConfig", into = "RawGridConfig")]
pub struct GridConfig {
    cell_size: u32,
    cell_count: u32,
    columns: u32,
    rows: u32,
    images: Vec<ImageId>,
}

impl GridConfig {
    /// Validate and build a configuration.
    pub fn new(
        cell_size: u32,
        cell_count: u32,
        columns: u32,
        rows: u32,
        images: Vec<ImageId>,
    ) -> Result<Self> {
        if columns == 0 {
            debug!("rejected spritesheet config: zero columns");
            return Err(SheetError::ZeroColumns);
        }
        if rows == 0 {
            debug!("rejected spritesheet config: zero rows");
            return Err(SheetError::ZeroRows);
        }
        if cell_count == 0 {
            debug!("rejected spritesheet config: zero cells");
            return Err(SheetError::ZeroCellCount);
        }

        let max_x = (columns - 1).checked_mul(cell_size);
        let max_y = (rows - 1).checked_mul(cell_size);
        if max_x.is_none() || max_y.is_none() {
            debug!(cell_size, columns, rows, "rejected spritesheet config: offsets overflow");
            return Err(SheetError::GridTooLarge {
                cell_size,
                columns,
                rows,
            });
        }

        let cells_per_page = u64::from(columns) * u64::from(rows);
        let needed = usize::try_from(u64::from(cell_count).div_ceil(cells_per_page))
            .unwrap_or(usize::MAX)
            .max(1);
        if images.len() < needed {
            debug!(
                needed,
                provided = images.len(),
                "rejected spritesheet config: missing pages"
            );
            return Err(SheetError::MissingPages {
                needed,
                provided: images.len(),
            });
        }

        debug!(
            cell_size,
            cell_count,
            columns,
            rows,
            pages = images.len(),
            "spritesheet config accepted"
        );
        Ok(Self {
            cell_size,
            cell_count,
            columns,
            rows,
            images,
        })
    }

    /// Start building a configuration.
    pub fn builder() -> GridConfigBuilder {
        GridConfigBuilder::default()
    }

    /// Parse a JSON sheet descriptor.
    ///
    /// Fields: `size`, `count`, `columns`, `rows`, `images`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pixel width and height of one cell.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Total number of cells across all pages.
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Page images, in page order.
    pub fn images(&self) -> &[ImageId] {
        &self.images
    }

    /// Number of cells one page image holds.
    pub fn cells_per_page(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }

    /// Number of pages `cell_count` spans.
    pub fn page_count(&self) -> u32 {
        self.cell_count.div_ceil(self.cells_per_page())
    }

    /// The image shown for negative progress.
    pub fn idle_image(&self) -> &ImageId {
        // Validation guarantees at least one image.
        &self.images[0]
    }
}

// =============================================================================
// Serde shape
// =============================================================================

/// On-disk descriptor shape, validated into a [`GridConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawGridConfig {
    size: u32,
    count: u32,
    columns: u32,
    rows: u32,
    images: Vec<ImageId>,
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = SheetError;

    fn try_from(raw: RawGridConfig) -> Result<Self> {
        GridConfig::new(raw.size, raw.count, raw.columns, raw.rows, raw.images)
    }
}

impl From<GridConfig> for RawGridConfig {
    fn from(config: GridConfig) -> Self {
        Self {
            size: config.cell_size,
            count: config.cell_count,
            columns: config.columns,
            rows: config.rows,
            images: config.images,
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`GridConfig`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct GridConfigBuilder {
    cell_size: u32,
    cell_count: u32,
    columns: u32,
    rows: u32,
    images: Vec<ImageId>,
}

impl GridConfigBuilder {
    pub fn cell_size(mut self, size: u32) -> Self {
        self.cell_size = size;
        self
    }

    pub fn cell_count(mut self, count: u32) -> Self {
        self.cell_count = count;
        self
    }

    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Append one page image. The first call sets the idle image.
    pub fn image(mut self, image: impl Into<ImageId>) -> Self {
        self.images.push(image.into());
        self
    }

    /// Replace all page images.
    pub fn images<I>(mut self, images: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ImageId>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<GridConfig> {
        GridConfig::new(self.cell_size, self.cell_count, self.columns, self.rows, self.images)
    }
}

// =============================================================================
// Tests
// =============================================================================
