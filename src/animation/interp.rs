use crate::foundation::core::{IntOffset, IntSize};

/// Blends two values of the same domain at a progress fraction.
///
/// The fraction is not clamped here; the timing driver already confines it.
pub trait Lerp: Copy + PartialEq {
    /// Return `start * (1 - fraction) + stop * fraction`.
    fn lerp(start: Self, stop: Self, fraction: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(start: Self, stop: Self, fraction: f64) -> Self {
        start * (1.0 - fraction) + stop * fraction
    }
}

impl Lerp for IntSize {
    fn lerp(start: Self, stop: Self, fraction: f64) -> Self {
        Self::new(
            lerp_i32(start.width, stop.width, fraction),
            lerp_i32(start.height, stop.height, fraction),
        )
    }
}

impl Lerp for IntOffset {
    fn lerp(start: Self, stop: Self, fraction: f64) -> Self {
        Self::new(
            lerp_i32(start.x, stop.x, fraction),
            lerp_i32(start.y, stop.y, fraction),
        )
    }
}

// Integer components are truncated, not rounded.
fn lerp_i32(start: i32, stop: i32, fraction: f64) -> i32 {
    f64::lerp(f64::from(start), f64::from(stop), fraction) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
