//! Spritesheet Primitive - Crop a grid cell by progress.
//!
//! Wires the progress value through the resolver once, then projects the
//! result into the three outputs an image element needs:
//!
//! ```text
//! alpha ──map(resolve)──► cell ──map──► image_rect_size
//!                               ├─map──► image_rect_offset
//!                               └─map──► image
//! ```
//!
//! Nothing is memoized: each projection re-resolves from `alpha` when read,
//! and each fires once per upstream change.

use std::rc::Rc;

use tracing::trace;

use super::types::{SpriteBinding, SpriteFrame, SpritesheetProps};
use crate::reactive::{Cleanup, Reactive};
use crate::sheet::{resolve, GridConfig, ResolvedCell};

// =============================================================================
// Spritesheet Component
// =============================================================================

/// Bind a spritesheet to a progress value.
///
/// `config` and `alpha` are consumed; `rest` is handed back untouched in
/// [`SpriteBinding::props`].
pub fn spritesheet<P>(props: SpritesheetProps<P>) -> SpriteBinding<P> {
    let SpritesheetProps { config, alpha, rest } = props;
    let config = Rc::new(config);

    trace!(
        observable = alpha.is_observable(),
        cells = config.cell_count(),
        pages = config.images().len(),
        "binding spritesheet"
    );

    let cell = {
        let config = Rc::clone(&config);
        alpha.map(move |a| resolve(&config, a))
    };

    let image_rect_size = cell.map(|c| c.size);
    let image_rect_offset = cell.map(|c| c.offset);
    let image = {
        let config = Rc::clone(&config);
        cell.map(move |c| c.image(&config).clone())
    };
    let frames = cell.map(move |c| SpriteFrame {
        size: c.size,
        offset: c.offset,
        image: c.image(&config).clone(),
    });

    SpriteBinding {
        image_rect_size,
        image_rect_offset,
        image,
        props: rest,
        cell,
        frames,
    }
}

/// Bind a spritesheet with no pass-through properties.
pub fn spritesheet_for(config: GridConfig, alpha: impl Into<Reactive<f64>>) -> SpriteBinding {
    spritesheet(SpritesheetProps::new(config, alpha))
}

impl<P> SpriteBinding<P> {
    /// Whether the outputs follow a live progress value.
    pub fn is_observable(&self) -> bool {
        self.cell.is_observable()
    }

    /// Full geometry at the current progress value.
    pub fn cell(&self) -> ResolvedCell {
        self.cell.get()
    }

    /// Current crop size, offset, and image.
    pub fn frame(&self) -> SpriteFrame {
        self.frames.get()
    }

    /// All three outputs as one reactive value.
    pub fn frames(&self) -> &Reactive<SpriteFrame> {
        &self.frames
    }

    /// Deliver the current frame now and after every progress change.
    pub fn subscribe(&self, callback: impl FnMut(SpriteFrame) + 'static) -> Cleanup {
        self.frames.subscribe(callback)
    }

    /// Drop the outputs and take back the pass-through properties.
    pub fn into_props(self) -> P {
        self.props
    }
}

// =============================================================================
// Tests
// =============================================================================
