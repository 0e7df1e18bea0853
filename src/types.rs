//! Core types for spark-spritesheet.
//!
//! These are the values that flow out of the resolver and into the host
//! image element: pixel vectors for crop size/offset and image identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Vector2 - Pixel coordinates
// =============================================================================

/// A 2D pixel vector.
///
/// Used both as a crop size (`x` = width, `y` = height) and as a crop
/// offset (top-left corner of a cell inside its page image).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: u32,
    pub y: u32,
}

impl Vector2 {
    /// The origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new vector.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// A square vector with both components set to `side`.
    pub const fn splat(side: u32) -> Self {
        Self { x: side, y: side }
    }
}

impl From<(u32, u32)> for Vector2 {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// ImageId - Opaque page image identifier
// =============================================================================

/// Identifier of one page image of a spritesheet.
///
/// The crate never loads or decodes images; this is whatever the host uses
/// to refer to an asset (a path, an asset URI, a texture key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    /// Create a new image identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ImageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ImageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
