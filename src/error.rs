//! Error types.
//!
//! Only configuration construction can fail. Resolving a cell and
//! propagating reactive values are infallible once a [`GridConfig`] exists.
//!
//! [`GridConfig`]: crate::sheet::GridConfig

use thiserror::Error;

/// Errors raised while building a [`GridConfig`](crate::sheet::GridConfig).
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("spritesheet grid must have at least one column")]
    ZeroColumns,

    #[error("spritesheet grid must have at least one row")]
    ZeroRows,

    #[error("spritesheet must contain at least one cell")]
    ZeroCellCount,

    #[error("{columns}x{rows} grid of {cell_size}px cells does not fit in u32 pixel offsets")]
    GridTooLarge { cell_size: u32, columns: u32, rows: u32 },

    #[error("spritesheet needs {needed} page image(s) but only {provided} were given")]
    MissingPages { needed: usize, provided: usize },

    #[error("invalid spritesheet descriptor: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, SheetError>;
