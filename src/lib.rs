//! Stagger is a staggered entrance animation engine for declarative layouts.
//!
//! A container attaches one [`LayoutAnimationSpec`] to its children. Each participating child
//! gets a stable stagger index and replays the same [`AnimationGraph`] with an incremental
//! delay, while a single shared visibility transition ([`EntranceState`]) drives them all.
//!
//! - Describe transitions with the builders ([`fade`], [`slide`], [`scale`], [`expand`], ...)
//! - Compose them with [`together`] / `+` and [`sequence`] / `.then()`
//! - Drive a frame with [`LayoutAnimationScope`] and apply each [`ItemFrame`]
//!
//! Visual-only output lands in [`LayerProps`]; layout-affecting output (expand, slide) lands in
//! [`StructuralLayout`] for the host's measure and place passes.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod runtime;
pub(crate) mod scope;
pub(crate) mod transition;

pub use crate::foundation::core::{
    Affine, Alignment, IntOffset, IntSize, ItemKey, Size, TransformOrigin, Vec2,
};
pub use crate::foundation::error::{StaggerError, StaggerResult};

pub use crate::animation::ease::Easing;
pub use crate::animation::interp::Lerp;
pub use crate::animation::timing::{DEFAULT_DURATION_MILLIS, ProgressCurve, RepeatMode, Timing};
pub use crate::runtime::applier::{ItemFrame, StructuralLayout};
pub use crate::runtime::controller::{EntrancePhase, EntranceState, FrameClock};
pub use crate::runtime::layer::LayerProps;
pub use crate::runtime::runner::ValueRunner;
pub use crate::scope::{FrameSummary, ItemScope, LayoutAnimationScope};
pub use crate::transition::builders::{
    TransitionBuilder, TransitionValue, custom, expand, expand_horizontally, expand_vertically,
    fade, rotation_x, rotation_y, rotation_z, scale, scale_x, scale_y, slide, translation_x,
    translation_y,
};
pub use crate::transition::descriptor::{
    CustomApply, Endpoints, PropertyClass, TransitionDescriptor, TransitionKind, ValueDomain,
    ValueSource,
};
pub use crate::transition::graph::{
    AnimationGraph, DEFAULT_DELAY_BETWEEN_ITEMS_MILLIS, LayoutAnimationSpec, sequence,
    sequence_all, together, together_all,
};
