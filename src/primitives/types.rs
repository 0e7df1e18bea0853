//! Primitive types - Props and bindings.
//!
//! Props take the progress value as a [`Reactive`], so a signal passed in
//! stays connected all the way to the crop outputs.

use crate::reactive::Reactive;
use crate::sheet::{GridConfig, ResolvedCell};
use crate::types::{ImageId, Vector2};

// =============================================================================
// Spritesheet Props
// =============================================================================

/// Properties for the spritesheet primitive.
///
/// `rest` holds whatever the host image element needs (position, anchor,
/// transparency, ...). It is forwarded untouched.
///
/// # Example
///
/// ```ignore
/// use spark_signals::signal;
/// use spark_spritesheet::{spritesheet, GridConfig, SpritesheetProps};
///
/// let progress = signal(0.0f64);
///
/// let binding = spritesheet(SpritesheetProps {
///     config: GridConfig::from_json(RING_JSON)?,
///     alpha: progress.clone().into(),
///     rest: HostImageProps { anchor: (0.5, 0.5) },
/// });
///
/// // Later: crop outputs follow the signal
/// progress.set(0.75);
/// ```
#[derive(Debug, Clone)]
pub struct SpritesheetProps<P = ()> {
    /// Grid layout and page images.
    pub config: GridConfig,

    /// Progress in `[0, 1]`; negative shows the idle image.
    pub alpha: Reactive<f64>,

    /// Pass-through properties for the host element.
    pub rest: P,
}

impl SpritesheetProps<()> {
    /// Props with no pass-through properties.
    pub fn new(config: GridConfig, alpha: impl Into<Reactive<f64>>) -> Self {
        Self {
            config,
            alpha: alpha.into(),
            rest: (),
        }
    }
}

impl<P> SpritesheetProps<P> {
    /// Replace the pass-through properties.
    pub fn with_rest<Q>(self, rest: Q) -> SpritesheetProps<Q> {
        SpritesheetProps {
            config: self.config,
            alpha: self.alpha,
            rest,
        }
    }
}

// =============================================================================
// Sprite Binding - Outputs for the host element
// =============================================================================

/// The derived values a host image element binds to.
///
/// Every reactive field has the same kind as the `alpha` it was built from:
/// all constants, or all observables.
#[derive(Debug, Clone)]
pub struct SpriteBinding<P = ()> {
    /// Crop size (`cell_size x cell_size`).
    pub image_rect_size: Reactive<Vector2>,

    /// Crop offset inside the selected page image.
    pub image_rect_offset: Reactive<Vector2>,

    /// Selected page image (the idle image for negative progress).
    pub image: Reactive<ImageId>,

    /// Pass-through properties, as given.
    pub props: P,

    pub(super) cell: Reactive<ResolvedCell>,
    pub(super) frames: Reactive<SpriteFrame>,
}

/// A snapshot of the three outputs at one progress value.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteFrame {
    pub size: Vector2,
    pub offset: Vector2,
    pub image: ImageId,
}
