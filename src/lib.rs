//! # spark-spritesheet
//!
//! Reactive spritesheet cell selection for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained
//! reactivity.
//!
//! ## Overview
//!
//! A spritesheet is a set of page images, each holding a grid of equally
//! sized square cells. Given a progress value in `[0, 1]`, this crate picks
//! the cell to show and derives its crop rectangle. Typical use is a radial
//! or linear progress indicator built from pre-rendered frames.
//!
//! ```text
//! alpha (constant | signal) → resolve → crop size / crop offset / image
//! ```
//!
//! If `alpha` is a constant the outputs are constants; if it is observable
//! the outputs are observables that update whenever it changes.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Vector2, ImageId)
//! - [`reactive`] - Constant-or-observable values and `map`
//! - [`sheet`] - Grid configuration and the cell resolver
//! - [`primitives`] - The spritesheet binding for host image elements
//! - [`error`] - Configuration errors

pub mod error;
pub mod primitives;
pub mod reactive;
pub mod sheet;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::SheetError;

pub use reactive::{map_reactive, Cleanup, Observable, Reactive};

pub use sheet::{resolve, resolve_index, GridConfig, GridConfigBuilder, ResolvedCell};

pub use primitives::{spritesheet, spritesheet_for, SpriteBinding, SpriteFrame, SpritesheetProps};
