use std::ops::{Add, Neg, Sub};

pub use kurbo::{Affine, Size, Vec2};

use crate::foundation::math::hash_str;

/// Integer pixel size produced by measurement.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl IntSize {
    /// Zero-area size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a size from `width` and `height`.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Scale each component by a fraction, truncating toward zero.
    pub fn scaled(self, fx: f64, fy: f64) -> Self {
        Self::new(
            (f64::from(self.width) * fx) as i32,
            (f64::from(self.height) * fy) as i32,
        )
    }

    /// Convert to a floating-point `kurbo::Size`.
    pub fn to_kurbo(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Integer pixel offset used for placement.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntOffset {
    /// Horizontal offset in pixels.
    pub x: i32,
    /// Vertical offset in pixels.
    pub y: i32,
}

impl IntOffset {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create an offset from `x` and `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset proportional to `size`, truncating toward zero.
    pub fn fraction_of(size: IntSize, fx: f64, fy: f64) -> Self {
        let s = size.scaled(fx, fy);
        Self::new(s.width, s.height)
    }

    /// Convert to a floating-point `kurbo::Vec2`.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Add for IntOffset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for IntOffset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Neg for IntOffset {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

/// Two-dimensional alignment of content inside a (possibly smaller) space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Top edge, start side.
    #[default]
    TopStart,
    /// Top edge, centered horizontally.
    TopCenter,
    /// Top edge, end side.
    TopEnd,
    /// Vertically centered, start side.
    CenterStart,
    /// Centered on both axes.
    Center,
    /// Vertically centered, end side.
    CenterEnd,
    /// Bottom edge, start side.
    BottomStart,
    /// Bottom edge, centered horizontally.
    BottomCenter,
    /// Bottom edge, end side.
    BottomEnd,
}

impl Alignment {
    /// Position of `content` inside `space`.
    ///
    /// Unlike container layout, the remaining space is not clamped: content larger than the
    /// space (an item mid-expansion) gets a negative offset so its aligned edge stays pinned.
    pub fn align(self, content: IntSize, space: IntSize) -> IntOffset {
        let (h, v) = self.split();
        IntOffset::new(
            align_offset(space.width, content.width, h),
            align_offset(space.height, content.height, v),
        )
    }

    fn split(self) -> (AlignKind, AlignKind) {
        match self {
            Self::TopStart => (AlignKind::Start, AlignKind::Start),
            Self::TopCenter => (AlignKind::Center, AlignKind::Start),
            Self::TopEnd => (AlignKind::End, AlignKind::Start),
            Self::CenterStart => (AlignKind::Start, AlignKind::Center),
            Self::Center => (AlignKind::Center, AlignKind::Center),
            Self::CenterEnd => (AlignKind::End, AlignKind::Center),
            Self::BottomStart => (AlignKind::Start, AlignKind::End),
            Self::BottomCenter => (AlignKind::Center, AlignKind::End),
            Self::BottomEnd => (AlignKind::End, AlignKind::End),
        }
    }
}

#[derive(Clone, Copy)]
enum AlignKind {
    Start,
    Center,
    End,
}

fn align_offset(container: i32, content: i32, align: AlignKind) -> i32 {
    let rem = f64::from(container) - f64::from(content);
    match align {
        AlignKind::Start => 0,
        AlignKind::Center => (rem * 0.5).round() as i32,
        AlignKind::End => rem as i32,
    }
}

/// Pivot for scale and rotation, as fractions of the item's size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformOrigin {
    /// Horizontal pivot; `0` is the start edge, `1` the end edge.
    pub pivot_x: f64,
    /// Vertical pivot; `0` is the top edge, `1` the bottom edge.
    pub pivot_y: f64,
}

impl TransformOrigin {
    /// Center of the item.
    pub const CENTER: Self = Self::new(0.5, 0.5);

    /// Create an origin from fractional pivots.
    pub const fn new(pivot_x: f64, pivot_y: f64) -> Self {
        Self { pivot_x, pivot_y }
    }
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Identity of one participating child, stable across frames.
///
/// Keys identify a declaration site, not the data displayed by it: two different rows
/// rendering equal data still need distinct keys.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemKey(pub u64);

impl ItemKey {
    /// Derive a key from a textual identity (FNV-1a).
    pub fn from_name(name: &str) -> Self {
        Self(hash_str(name))
    }
}

impl From<u64> for ItemKey {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<usize> for ItemKey {
    fn from(v: usize) -> Self {
        Self(v as u64)
    }
}

impl From<&str> for ItemKey {
    fn from(v: &str) -> Self {
        Self::from_name(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
