//! `stagger-std` provides ready-made entrance presets on top of `stagger`.
//!
//! Every preset is a plain function returning a fully configured
//! [`LayoutAnimationSpec`] built only from the public builder vocabulary.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use stagger::{
    Alignment, Easing, IntOffset, LayoutAnimationSpec, TransformOrigin, expand_vertically, fade,
    rotation_x, rotation_y, rotation_z, scale, sequence, slide, translation_x, translation_y,
};

/// Names accepted by [`by_name`], in display order.
pub const PRESET_NAMES: [&str; 10] = [
    "fall_down",
    "bounce",
    "spiral",
    "flip",
    "origami_unfold",
    "perspective_reveal",
    "elastic_snap",
    "cascade_drop",
    "swivel_reveal",
    "elegant_entrance",
];

/// Look up a preset by its snake_case name.
pub fn by_name(name: &str) -> Option<LayoutAnimationSpec> {
    Some(match name {
        "fall_down" => fall_down(),
        "bounce" => bounce(),
        "spiral" => spiral(),
        "flip" => flip(),
        "origami_unfold" => origami_unfold(),
        "perspective_reveal" => perspective_reveal(),
        "elastic_snap" => elastic_snap(),
        "cascade_drop" => cascade_drop(),
        "swivel_reveal" => swivel_reveal(),
        "elegant_entrance" => elegant_entrance(),
        _ => return None,
    })
}

/// Items drop in from one height above while fading in.
pub fn fall_down() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(translation_y().duration_millis(400) + fade().duration_millis(300))
        .with_delay_between_items(60)
}

/// Items slide down into place and bounce on arrival.
pub fn bounce() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(
        slide()
            .duration_millis(600)
            .easing(Easing::BounceOut)
            .from_fn(|full| IntOffset::new(0, -full.height))
            + fade().duration_millis(200),
    )
    .with_delay_between_items(80)
}

/// Items spin and grow out of their center.
pub fn spiral() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(
        rotation_z().duration_millis(500).from(-180.0)
            + scale().duration_millis(500)
            + fade().duration_millis(300),
    )
    .with_delay_between_items(70)
}

/// Items flip around their vertical axis.
pub fn flip() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(rotation_y().duration_millis(450) + fade().duration_millis(150))
        .with_delay_between_items(60)
}

/// Items unfold downward from their top edge.
pub fn origami_unfold() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(
        expand_vertically()
            .duration_millis(450)
            .alignment(Alignment::TopCenter)
            + rotation_x()
                .duration_millis(450)
                .origin(TransformOrigin::new(0.5, 0.0))
            + fade().duration_millis(250),
    )
    .with_delay_between_items(90)
}

/// Items tilt up from below, as if rising toward the viewer.
pub fn perspective_reveal() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(
        rotation_x()
            .duration_millis(500)
            .from(45.0)
            .origin(TransformOrigin::new(0.5, 1.0))
            + translation_y()
                .duration_millis(500)
                .from_fn(|full| f64::from(full.height) / 2.0)
            + fade().duration_millis(400),
    )
    .with_initial_delay(50)
    .with_delay_between_items(60)
}

/// Items pop in with an elastic overshoot.
pub fn elastic_snap() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(
        scale().duration_millis(700).easing(Easing::ElasticOut) + fade().duration_millis(150),
    )
    .with_delay_between_items(50)
}

/// Items drop in, then settle with a small scale pulse.
pub fn cascade_drop() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(sequence(
        translation_y().duration_millis(300) + fade().duration_millis(300),
        scale()
            .duration_millis(150)
            .from(1.05)
            .to(1.0)
            .easing(Easing::EaseOut),
    ))
    .with_delay_between_items(40)
}

/// Items swing open like a door hinged on their start edge.
pub fn swivel_reveal() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(
        rotation_y()
            .duration_millis(500)
            .origin(TransformOrigin::new(0.0, 0.5))
            .easing(Easing::Overshoot { tension: 1.2 })
            + fade().duration_millis(300),
    )
    .with_delay_between_items(75)
}

/// Slow, understated fade with a short drift and a hint of scale.
pub fn elegant_entrance() -> LayoutAnimationSpec {
    LayoutAnimationSpec::new(
        fade().duration_millis(600).easing(Easing::EaseInOut)
            + translation_x()
                .duration_millis(600)
                .from(-24.0)
                .easing(Easing::EaseOut)
            + scale()
                .duration_millis(600)
                .from(0.96)
                .easing(Easing::EaseOut),
    )
    .with_initial_delay(100)
    .with_delay_between_items(90)
}

/// JSON builders for declarative specs.
pub mod json {
    use serde_json::json;
    use std::io::Cursor;

    /// Build a staggered fade spec as a `serde_json::Value`.
    ///
    /// - `easing` must be an easing name accepted by `stagger` (e.g. `"linear"`).
    pub fn staggered_fade_value(
        duration_millis: u64,
        delay_millis_between_items: u64,
        easing: &str,
    ) -> serde_json::Value {
        json!({
            "delay_millis_between_items": delay_millis_between_items,
            "animation": {
                "kind": "fade",
                "duration_millis": duration_millis,
                "easing": easing
            }
        })
    }

    /// Build a slide-and-fade spec as a `serde_json::Value`.
    pub fn slide_in_value(
        duration_millis: u64,
        delay_millis_between_items: u64,
    ) -> serde_json::Value {
        json!({
            "delay_millis_between_items": delay_millis_between_items,
            "animation": {
                "together": [
                    { "kind": "slide", "duration_millis": duration_millis },
                    { "kind": "fade", "duration_millis": duration_millis }
                ]
            }
        })
    }

    /// Parse a JSON value into a validated spec.
    pub fn spec_from_value(
        value: &serde_json::Value,
    ) -> stagger::StaggerResult<stagger::LayoutAnimationSpec> {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| stagger::StaggerError::serde(format!("json serialize failed: {e}")))?;
        stagger::LayoutAnimationSpec::from_reader(Cursor::new(bytes))
    }
}
