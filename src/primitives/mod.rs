//! Spritesheet primitive - Bind a grid of cells to a progress value.
//!
//! - [`spritesheet`] - Props in, crop outputs plus pass-through props out
//!
//! # Reactivity
//!
//! `alpha` can be:
//! - A constant: `alpha: 0.5.into()`
//! - A signal: `alpha: progress_signal.into()` (stays connected!)
//! - Any observable: `alpha: Observable::from_getter(|| ...).into()`
//!
//! Pass the signal itself, not its current value:
//!
//! ```ignore
//! // CORRECT - outputs follow the signal
//! spritesheet(SpritesheetProps::new(config, progress.clone()));
//!
//! // WRONG - snapshots the value, outputs never change
//! spritesheet(SpritesheetProps::new(config, progress.get()));
//! ```

mod spritesheet;
mod types;

pub use spritesheet::{spritesheet, spritesheet_for};
pub use types::*;
