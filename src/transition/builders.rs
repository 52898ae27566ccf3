use crate::animation::ease::Easing;
use crate::animation::interp::Lerp;
use crate::animation::timing::{RepeatMode, Timing};
use crate::foundation::core::{Alignment, IntOffset, IntSize, TransformOrigin};
use crate::runtime::layer::LayerProps;
use crate::transition::descriptor::{
    CustomApply, Endpoints, TransitionDescriptor, TransitionKind, ValueSource,
};

/// Values a transition can interpolate.
pub trait TransitionValue: Lerp + 'static {
    /// Tag a pair of endpoints with their domain.
    fn endpoints(from: ValueSource<Self>, to: ValueSource<Self>) -> Endpoints;
}

impl TransitionValue for f64 {
    fn endpoints(from: ValueSource<Self>, to: ValueSource<Self>) -> Endpoints {
        Endpoints::Float { from, to }
    }
}

impl TransitionValue for IntSize {
    fn endpoints(from: ValueSource<Self>, to: ValueSource<Self>) -> Endpoints {
        Endpoints::Size { from, to }
    }
}

impl TransitionValue for IntOffset {
    fn endpoints(from: ValueSource<Self>, to: ValueSource<Self>) -> Endpoints {
        Endpoints::Offset { from, to }
    }
}

/// Configuration record for one transition, created by the named constructors.
///
/// Converts into an [`AnimationGraph`](crate::AnimationGraph) wherever one is expected.
#[derive(Clone, Debug)]
pub struct TransitionBuilder<T> {
    kind: TransitionKind,
    timing: Timing,
    from: ValueSource<T>,
    to: ValueSource<T>,
    origin: TransformOrigin,
    alignment: Alignment,
    custom: Option<CustomApply>,
}

impl<T: TransitionValue> TransitionBuilder<T> {
    fn new(kind: TransitionKind, from: ValueSource<T>, to: ValueSource<T>) -> Self {
        Self {
            kind,
            timing: Timing::default(),
            from,
            to,
            origin: TransformOrigin::CENTER,
            alignment: Alignment::default(),
            custom: None,
        }
    }

    /// Set the iteration length.
    pub fn duration_millis(mut self, millis: u64) -> Self {
        self.timing.duration_millis = millis;
        self
    }

    /// Set the fixed pre-delay.
    pub fn delay_millis(mut self, millis: u64) -> Self {
        self.timing.delay_millis = millis;
        self
    }

    /// Set the easing curve.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.timing.easing = easing;
        self
    }

    /// Repeat `iterations` times (`0` or `1` plays once).
    pub fn repeat(mut self, iterations: u32, mode: RepeatMode) -> Self {
        self.timing.repeat_iterations = iterations;
        self.timing.repeat_mode = mode;
        self
    }

    /// Replace all timing parameters at once.
    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Set the start value.
    pub fn from(mut self, value: impl Into<ValueSource<T>>) -> Self {
        self.from = value.into();
        self
    }

    /// Set the end value.
    pub fn to(mut self, value: impl Into<ValueSource<T>>) -> Self {
        self.to = value.into();
        self
    }

    /// Derive the start value from the item's full size.
    pub fn from_fn(self, f: impl Fn(IntSize) -> T + Send + Sync + 'static) -> Self {
        self.from(ValueSource::relative(f))
    }

    /// Derive the end value from the item's full size.
    pub fn to_fn(self, f: impl Fn(IntSize) -> T + Send + Sync + 'static) -> Self {
        self.to(ValueSource::relative(f))
    }

    /// Freeze into an immutable descriptor.
    pub fn build(self) -> TransitionDescriptor {
        TransitionDescriptor::new(
            self.kind,
            T::endpoints(self.from, self.to),
            self.timing,
            self.origin,
            self.alignment,
            self.custom,
        )
    }
}

impl TransitionBuilder<f64> {
    /// Set the pivot for scale and rotation.
    pub fn origin(mut self, origin: TransformOrigin) -> Self {
        self.origin = origin;
        self
    }
}

impl TransitionBuilder<IntSize> {
    /// Set where content is pinned while the size animates.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

fn float(kind: TransitionKind, from: f64, to: f64) -> TransitionBuilder<f64> {
    TransitionBuilder::new(kind, from.into(), to.into())
}

/// Alpha from `0` to `1`.
pub fn fade() -> TransitionBuilder<f64> {
    float(TransitionKind::Fade, 0.0, 1.0)
}

/// Uniform scale from `0` to `1` around the center.
pub fn scale() -> TransitionBuilder<f64> {
    float(TransitionKind::ScaleUniform, 0.0, 1.0)
}

/// Horizontal scale from `0` to `1`.
pub fn scale_x() -> TransitionBuilder<f64> {
    float(TransitionKind::ScaleX, 0.0, 1.0)
}

/// Vertical scale from `0` to `1`.
pub fn scale_y() -> TransitionBuilder<f64> {
    float(TransitionKind::ScaleY, 0.0, 1.0)
}

/// Z rotation from `-90` to `0` degrees.
pub fn rotation_z() -> TransitionBuilder<f64> {
    float(TransitionKind::RotationZ, -90.0, 0.0)
}

/// X rotation (top edge tipping away) from `90` to `0` degrees.
pub fn rotation_x() -> TransitionBuilder<f64> {
    float(TransitionKind::RotationX, 90.0, 0.0)
}

/// Y rotation from `90` to `0` degrees.
pub fn rotation_y() -> TransitionBuilder<f64> {
    float(TransitionKind::RotationY, 90.0, 0.0)
}

/// X translation from one item width to the left, to `0`.
pub fn translation_x() -> TransitionBuilder<f64> {
    TransitionBuilder::new(
        TransitionKind::TranslationX,
        ValueSource::relative(|full| -f64::from(full.width)),
        0.0.into(),
    )
}

/// Y translation from one item height above, to `0`.
pub fn translation_y() -> TransitionBuilder<f64> {
    TransitionBuilder::new(
        TransitionKind::TranslationY,
        ValueSource::relative(|full| -f64::from(full.height)),
        0.0.into(),
    )
}

/// Placement offset from half the item height above, to rest.
pub fn slide() -> TransitionBuilder<IntOffset> {
    TransitionBuilder::new(
        TransitionKind::Slide,
        ValueSource::<IntOffset>::fraction(0.0, -0.5),
        IntOffset::ZERO.into(),
    )
}

/// Measured size from zero to the full size, revealed from the bottom-end corner.
pub fn expand() -> TransitionBuilder<IntSize> {
    TransitionBuilder::new(
        TransitionKind::Expand,
        IntSize::ZERO.into(),
        ValueSource::<IntSize>::fraction(1.0, 1.0),
    )
    .alignment(Alignment::BottomEnd)
}

/// Width from zero to full, height untouched; revealed from the end edge.
pub fn expand_horizontally() -> TransitionBuilder<IntSize> {
    TransitionBuilder::new(
        TransitionKind::Expand,
        ValueSource::<IntSize>::fraction(0.0, 1.0),
        ValueSource::<IntSize>::fraction(1.0, 1.0),
    )
    .alignment(Alignment::CenterEnd)
}

/// Height from zero to full, width untouched; revealed from the bottom edge.
pub fn expand_vertically() -> TransitionBuilder<IntSize> {
    TransitionBuilder::new(
        TransitionKind::Expand,
        ValueSource::<IntSize>::fraction(1.0, 0.0),
        ValueSource::<IntSize>::fraction(1.0, 1.0),
    )
    .alignment(Alignment::BottomCenter)
}

/// Drive `apply` with a float animating from `0` to `1`.
pub fn custom(
    apply: impl Fn(&mut LayerProps, f64) + Send + Sync + 'static,
) -> TransitionBuilder<f64> {
    let mut builder = float(TransitionKind::Custom, 0.0, 1.0);
    builder.custom = Some(CustomApply::new(apply));
    builder
}

#[cfg(test)]
#[path = "../../tests/unit/transition/builders.rs"]
mod tests;
