//! Core types for the editor.
//!
//! Geometry primitives, colors, the active tool and the two overlay element
//! kinds (stroke segments and text) that are kept alongside the raster.

use crate::error::{EditorError, EditorResult};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// A point in either device or logical coordinates, depending on context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Pixel dimensions of a bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject sizes with a zero dimension.
    pub fn validate(self) -> EditorResult<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(EditorError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

// ============================================================================
// Color
// ============================================================================

/// Straight (non-premultiplied) RGBA color, serialized as `#rrggbb[aa]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> EditorResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(EditorError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| EditorError::InvalidColor(hex.to_string()))
        };
        let alpha = if digits.len() == 8 { channel(3)? } else { 255 };
        Ok(Self([channel(0)?, channel(1)?, channel(2)?, alpha]))
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.0;
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba(self.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = EditorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ============================================================================
// Tools
// ============================================================================

/// The single active paint tool. Every tool-dependent UI affordance is
/// derived from this value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    None,
    Brush,
    Eraser,
    Text,
}

// ============================================================================
// Overlay Elements
// ============================================================================

/// One recorded piece of a freehand stroke. Append order is paint order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LineSegment {
    /// The first point of a stroke
    Dot { x: f32, y: f32, color: Color, width: f32 },
    /// A connection from the previous point of the same stroke
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        width: f32,
    },
}

impl LineSegment {
    pub fn color(&self) -> Color {
        match self {
            Self::Dot { color, .. } | Self::Line { color, .. } => *color,
        }
    }

    pub fn width(&self) -> f32 {
        match self {
            Self::Dot { width, .. } | Self::Line { width, .. } => *width,
        }
    }
}

/// Stable identity of a placed text element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextId(pub u64);

/// Font selection for a text element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: String,
    /// Size in logical pixels
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }

    /// CSS shorthand, e.g. `italic bold 16px serif`
    pub fn css(&self) -> String {
        let mut out = String::new();
        if self.italic {
            out.push_str("italic ");
        }
        if self.bold {
            out.push_str("bold ");
        }
        out.push_str(&format!("{}px {}", self.size, self.family));
        out
    }
}

/// A piece of text placed on the bitmap. `(x, y)` is the left end of the
/// alphabetic baseline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub id: TextId,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: FontDescriptor,
    pub color: Color,
}

impl TextElement {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
