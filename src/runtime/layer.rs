use crate::foundation::core::{Affine, IntSize, TransformOrigin};

/// Non-structural visual transform of one item for one frame.
///
/// Writes never affect layout. Rotations are in degrees; X/Y rotations are projected
/// orthographically (cosine foreshortening) by [`LayerProps::to_affine`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerProps {
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Tilt around the horizontal axis, degrees.
    pub rotation_x: f64,
    /// Tilt around the vertical axis, degrees.
    pub rotation_y: f64,
    /// In-plane rotation, degrees.
    pub rotation_z: f64,
    /// Horizontal offset in pixels.
    pub translation_x: f64,
    /// Vertical offset in pixels.
    pub translation_y: f64,
    /// Pivot for scale and rotation.
    pub transform_origin: TransformOrigin,
}

impl LayerProps {
    /// No visual change.
    pub const IDENTITY: Self = Self {
        alpha: 1.0,
        scale_x: 1.0,
        scale_y: 1.0,
        rotation_x: 0.0,
        rotation_y: 0.0,
        rotation_z: 0.0,
        translation_x: 0.0,
        translation_y: 0.0,
        transform_origin: TransformOrigin::CENTER,
    };

    /// Return `true` when rendering with this layer changes nothing.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Flatten into a 2D affine for an item of `size`.
    ///
    /// Order: `T(translation) * T(pivot) * R(z) * S(sx * cos(ry), sy * cos(rx)) * T(-pivot)`.
    pub fn to_affine(&self, size: IntSize) -> Affine {
        let size = size.to_kurbo();
        let pivot_x = size.width * self.transform_origin.pivot_x;
        let pivot_y = size.height * self.transform_origin.pivot_y;

        let sx = self.scale_x * self.rotation_y.to_radians().cos();
        let sy = self.scale_y * self.rotation_x.to_radians().cos();

        Affine::translate((self.translation_x, self.translation_y))
            * Affine::translate((pivot_x, pivot_y))
            * Affine::rotate(self.rotation_z.to_radians())
            * Affine::scale_non_uniform(sx, sy)
            * Affine::translate((-pivot_x, -pivot_y))
    }
}

impl Default for LayerProps {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/layer.rs"]
mod tests;
