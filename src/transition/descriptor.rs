use std::fmt;
use std::sync::Arc;

use crate::animation::timing::Timing;
use crate::foundation::core::{Alignment, IntOffset, IntSize, TransformOrigin};
use crate::runtime::layer::LayerProps;

/// Atomic transition kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Layer alpha.
    Fade,
    /// Horizontal layer scale.
    ScaleX,
    /// Vertical layer scale.
    ScaleY,
    /// Uniform layer scale.
    ScaleUniform,
    /// Rotation around the Z axis, in degrees.
    RotationZ,
    /// Rotation around the X axis, in degrees.
    RotationX,
    /// Rotation around the Y axis, in degrees.
    RotationY,
    /// Horizontal layer translation, in pixels.
    TranslationX,
    /// Vertical layer translation, in pixels.
    TranslationY,
    /// Placement offset applied during layout.
    Slide,
    /// Measured size applied during layout.
    Expand,
    /// Caller-provided layer mutation driven by a float.
    Custom,
}

impl TransitionKind {
    /// Tag used for property-conflict resolution.
    pub fn property_class(self) -> PropertyClass {
        match self {
            Self::Fade => PropertyClass::Fade,
            Self::ScaleX => PropertyClass::ScaleX,
            Self::ScaleY => PropertyClass::ScaleY,
            Self::ScaleUniform => PropertyClass::ScaleUniform,
            Self::RotationZ => PropertyClass::RotationZ,
            Self::RotationX => PropertyClass::RotationX,
            Self::RotationY => PropertyClass::RotationY,
            Self::TranslationX => PropertyClass::TranslationX,
            Self::TranslationY => PropertyClass::TranslationY,
            Self::Slide => PropertyClass::Slide,
            Self::Expand => PropertyClass::Expand,
            Self::Custom => PropertyClass::Custom,
        }
    }

    /// Kind of value this transition interpolates.
    pub fn value_domain(self) -> ValueDomain {
        match self {
            Self::Slide => ValueDomain::Offset,
            Self::Expand => ValueDomain::Size,
            _ => ValueDomain::Float,
        }
    }

    /// `true` when the transition affects measured size or placement.
    pub fn is_structural(self) -> bool {
        matches!(self, Self::Slide | Self::Expand)
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::ScaleX => "scale_x",
            Self::ScaleY => "scale_y",
            Self::ScaleUniform => "scale",
            Self::RotationZ => "rotation_z",
            Self::RotationX => "rotation_x",
            Self::RotationY => "rotation_y",
            Self::TranslationX => "translation_x",
            Self::TranslationY => "translation_y",
            Self::Slide => "slide",
            Self::Expand => "expand",
            Self::Custom => "custom",
        }
    }
}

/// Identity of "the same animated property" for conflict resolution.
///
/// `Sequence` is a sentinel: descriptors chained with `sequence` carry it, so they never count
/// as the first of their type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyClass {
    /// Sentinel for chained descriptors.
    Sequence,
    /// See [`TransitionKind::Fade`].
    Fade,
    /// See [`TransitionKind::ScaleX`].
    ScaleX,
    /// See [`TransitionKind::ScaleY`].
    ScaleY,
    /// See [`TransitionKind::ScaleUniform`].
    ScaleUniform,
    /// See [`TransitionKind::RotationZ`].
    RotationZ,
    /// See [`TransitionKind::RotationX`].
    RotationX,
    /// See [`TransitionKind::RotationY`].
    RotationY,
    /// See [`TransitionKind::TranslationX`].
    TranslationX,
    /// See [`TransitionKind::TranslationY`].
    TranslationY,
    /// See [`TransitionKind::Slide`].
    Slide,
    /// See [`TransitionKind::Expand`].
    Expand,
    /// See [`TransitionKind::Custom`].
    Custom,
}

/// Value domain of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueDomain {
    /// Scalar: alpha, scale, degrees or pixels.
    Float,
    /// Width by height.
    Size,
    /// X and y.
    Offset,
}

/// A start or end value, optionally derived from the item's full measured size.
#[derive(Clone)]
pub enum ValueSource<T> {
    /// Constant value.
    Fixed(T),
    /// Function of the full (look-ahead or measured) size.
    Relative(Arc<dyn Fn(IntSize) -> T + Send + Sync>),
}

impl<T: Copy> ValueSource<T> {
    /// Wrap a size-dependent function.
    pub fn relative(f: impl Fn(IntSize) -> T + Send + Sync + 'static) -> Self {
        Self::Relative(Arc::new(f))
    }

    /// Resolve against the item's full size.
    pub fn resolve(&self, full_size: IntSize) -> T {
        match self {
            Self::Fixed(v) => *v,
            Self::Relative(f) => f(full_size),
        }
    }
}

impl ValueSource<IntSize> {
    /// Size as a fraction of the full size on each axis.
    pub fn fraction(fx: f64, fy: f64) -> Self {
        Self::relative(move |full| full.scaled(fx, fy))
    }
}

impl ValueSource<IntOffset> {
    /// Offset as a fraction of the full size on each axis.
    pub fn fraction(fx: f64, fy: f64) -> Self {
        Self::relative(move |full| IntOffset::fraction_of(full, fx, fy))
    }
}

impl<T> From<T> for ValueSource<T> {
    fn from(v: T) -> Self {
        Self::Fixed(v)
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Relative(_) => f.write_str("Relative(..)"),
        }
    }
}

impl<T: PartialEq> PartialEq for ValueSource<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (Self::Relative(a), Self::Relative(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Start and end values, tagged by domain.
#[derive(Clone, Debug, PartialEq)]
pub enum Endpoints {
    /// Scalar endpoints.
    Float {
        /// Start value.
        from: ValueSource<f64>,
        /// End value.
        to: ValueSource<f64>,
    },
    /// Size endpoints.
    Size {
        /// Start value.
        from: ValueSource<IntSize>,
        /// End value.
        to: ValueSource<IntSize>,
    },
    /// Offset endpoints.
    Offset {
        /// Start value.
        from: ValueSource<IntOffset>,
        /// End value.
        to: ValueSource<IntOffset>,
    },
}

impl Endpoints {
    /// Domain of these endpoints.
    pub fn domain(&self) -> ValueDomain {
        match self {
            Self::Float { .. } => ValueDomain::Float,
            Self::Size { .. } => ValueDomain::Size,
            Self::Offset { .. } => ValueDomain::Offset,
        }
    }
}

/// Caller-provided mutation of the visual layer for [`TransitionKind::Custom`].
#[derive(Clone)]
pub struct CustomApply(Arc<dyn Fn(&mut LayerProps, f64) + Send + Sync>);

impl CustomApply {
    /// Wrap a layer mutation.
    pub fn new(f: impl Fn(&mut LayerProps, f64) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Apply the mutation with the current animated value.
    pub fn apply(&self, layer: &mut LayerProps, value: f64) {
        (self.0)(layer, value)
    }
}

impl fmt::Debug for CustomApply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomApply(..)")
    }
}

impl PartialEq for CustomApply {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Immutable description of one atomic animation.
///
/// Kind, domain and structural flag are fixed at construction. Only composition (`sequence`)
/// derives shifted copies; nothing mutates a descriptor afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionDescriptor {
    kind: TransitionKind,
    property_class: PropertyClass,
    endpoints: Endpoints,
    timing: Timing,
    origin: TransformOrigin,
    alignment: Alignment,
    custom: Option<CustomApply>,
    sequence_offset_millis: u64,
}

impl TransitionDescriptor {
    pub(crate) fn new(
        kind: TransitionKind,
        endpoints: Endpoints,
        timing: Timing,
        origin: TransformOrigin,
        alignment: Alignment,
        custom: Option<CustomApply>,
    ) -> Self {
        debug_assert_eq!(kind.value_domain(), endpoints.domain());
        Self {
            kind,
            property_class: kind.property_class(),
            endpoints,
            timing,
            origin,
            alignment,
            custom,
            sequence_offset_millis: 0,
        }
    }

    /// Transition kind.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Conflict-resolution tag; [`PropertyClass::Sequence`] once chained.
    pub fn property_class(&self) -> PropertyClass {
        self.property_class
    }

    /// Domain of the interpolated value.
    pub fn value_domain(&self) -> ValueDomain {
        self.kind.value_domain()
    }

    /// `true` for layout-affecting transitions.
    pub fn is_structural(&self) -> bool {
        self.kind.is_structural()
    }

    /// Start and end values.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Timing parameters.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Pivot used by scale and rotation kinds.
    pub fn origin(&self) -> TransformOrigin {
        self.origin
    }

    /// Alignment used by expand kinds while the size animates.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Layer mutation of a custom transition.
    pub fn custom(&self) -> Option<&CustomApply> {
        self.custom.as_ref()
    }

    /// Delay accumulated by being chained after other groups.
    pub fn sequence_offset_millis(&self) -> u64 {
        self.sequence_offset_millis
    }

    /// Intrinsic end: own timing duration plus sequence offset.
    pub fn end_millis(&self) -> u64 {
        self.timing.duration().saturating_add(self.sequence_offset_millis)
    }

    pub(crate) fn chained_after(&self, offset_millis: u64) -> Self {
        Self {
            property_class: PropertyClass::Sequence,
            sequence_offset_millis: self.sequence_offset_millis.saturating_add(offset_millis),
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/descriptor.rs"]
mod tests;
