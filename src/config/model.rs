use serde::{Deserialize, Serialize};

use crate::animation::ease::Easing;
use crate::animation::timing::RepeatMode;
use crate::foundation::core::Alignment;
use crate::transition::graph::DEFAULT_DELAY_BETWEEN_ITEMS_MILLIS;

fn default_delay_between_items() -> u64 {
    DEFAULT_DELAY_BETWEEN_ITEMS_MILLIS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SpecDef {
    #[serde(default)]
    pub(crate) initial_delay_millis: u64,
    #[serde(default = "default_delay_between_items")]
    pub(crate) delay_millis_between_items: u64,
    pub(crate) animation: GraphDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum GraphDef {
    Together { together: Vec<GraphDef> },
    Sequence { sequence: Vec<GraphDef> },
    Transition(TransitionDef),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum KindDef {
    Fade,
    Scale,
    ScaleX,
    ScaleY,
    RotationX,
    RotationY,
    RotationZ,
    TranslationX,
    TranslationY,
    Slide,
    Expand,
    ExpandHorizontally,
    ExpandVertically,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TransitionDef {
    pub(crate) kind: KindDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) duration_millis: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) delay_millis: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) easing: Option<Easing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) repeat_iterations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) repeat_mode: Option<RepeatMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) from: Option<EndpointDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) to: Option<EndpointDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) origin: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) alignment: Option<Alignment>,
}

/// Number for float kinds, `[a, b]` pair or `{"fraction": [fx, fy]}` for size and offset kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum EndpointDef {
    Number(f64),
    Pair([i32; 2]),
    Fraction { fraction: [f64; 2] },
}
