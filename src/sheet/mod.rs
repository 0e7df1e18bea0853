//! Spritesheet grid configuration and cell resolution.
//!
//! - [`GridConfig`] - validated grid layout and page images
//! - [`resolve`] - progress value to [`ResolvedCell`] (crop size, offset, page)

mod config;
mod resolve;

pub use config::{GridConfig, GridConfigBuilder};
pub use resolve::{resolve, resolve_index, ResolvedCell};
