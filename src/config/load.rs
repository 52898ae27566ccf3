use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::model::{EndpointDef, GraphDef, KindDef, SpecDef, TransitionDef};
use crate::foundation::core::{IntOffset, IntSize, TransformOrigin};
use crate::foundation::error::{StaggerError, StaggerResult};
use crate::transition::builders::{self, TransitionBuilder, TransitionValue};
use crate::transition::descriptor::{TransitionDescriptor, ValueSource};
use crate::transition::graph::{AnimationGraph, LayoutAnimationSpec, sequence_all, together_all};

impl LayoutAnimationSpec {
    /// Parse and validate a spec from JSON.
    #[tracing::instrument(skip(r))]
    pub fn from_reader<R: std::io::Read>(r: R) -> StaggerResult<Self> {
        let def: SpecDef = serde_json::from_reader(r)
            .map_err(|e| StaggerError::serde(format!("parse layout animation JSON: {e}")))?;
        spec_from_def(&def)
    }

    /// Parse and validate a spec from a JSON string.
    pub fn from_json_str(s: &str) -> StaggerResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a spec from a JSON file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> StaggerResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StaggerError::validation(format!(
                "open layout animation JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

pub(crate) fn spec_from_def(def: &SpecDef) -> StaggerResult<LayoutAnimationSpec> {
    let graph = graph_from_def(&def.animation)?;
    let spec = LayoutAnimationSpec::new(graph)
        .with_initial_delay(def.initial_delay_millis)
        .with_delay_between_items(def.delay_millis_between_items);
    tracing::debug!(
        descriptors = spec.graph().len(),
        duration = spec.duration(),
        "loaded layout animation spec"
    );
    Ok(spec)
}

fn graph_from_def(def: &GraphDef) -> StaggerResult<AnimationGraph> {
    match def {
        GraphDef::Together { together } => {
            if together.is_empty() {
                return Err(StaggerError::animation("'together' needs at least one entry"));
            }
            let parts = together
                .iter()
                .map(graph_from_def)
                .collect::<StaggerResult<Vec<_>>>()?;
            Ok(together_all(parts))
        }
        GraphDef::Sequence { sequence } => {
            if sequence.is_empty() {
                return Err(StaggerError::animation("'sequence' needs at least one entry"));
            }
            let parts = sequence
                .iter()
                .map(graph_from_def)
                .collect::<StaggerResult<Vec<_>>>()?;
            Ok(sequence_all(parts))
        }
        GraphDef::Transition(t) => Ok(transition_from_def(t)?.into()),
    }
}

fn transition_from_def(t: &TransitionDef) -> StaggerResult<TransitionDescriptor> {
    match t.kind {
        KindDef::Fade => float_kind(builders::fade(), t),
        KindDef::Scale => float_kind(builders::scale(), t),
        KindDef::ScaleX => float_kind(builders::scale_x(), t),
        KindDef::ScaleY => float_kind(builders::scale_y(), t),
        KindDef::RotationX => float_kind(builders::rotation_x(), t),
        KindDef::RotationY => float_kind(builders::rotation_y(), t),
        KindDef::RotationZ => float_kind(builders::rotation_z(), t),
        KindDef::TranslationX => float_kind(builders::translation_x(), t),
        KindDef::TranslationY => float_kind(builders::translation_y(), t),
        KindDef::Slide => {
            reject_origin(t)?;
            reject_alignment(t)?;
            let mut b = with_timing(builders::slide(), t)?;
            if let Some(from) = &t.from {
                b = b.from(offset_source(from, "from")?);
            }
            if let Some(to) = &t.to {
                b = b.to(offset_source(to, "to")?);
            }
            Ok(b.build())
        }
        KindDef::Expand => size_kind(builders::expand(), t),
        KindDef::ExpandHorizontally => size_kind(builders::expand_horizontally(), t),
        KindDef::ExpandVertically => size_kind(builders::expand_vertically(), t),
    }
}

fn with_timing<T: TransitionValue>(
    mut b: TransitionBuilder<T>,
    t: &TransitionDef,
) -> StaggerResult<TransitionBuilder<T>> {
    if let Some(ms) = t.duration_millis {
        b = b.duration_millis(ms);
    }
    if let Some(ms) = t.delay_millis {
        b = b.delay_millis(ms);
    }
    if let Some(easing) = t.easing {
        easing.validate()?;
        b = b.easing(easing);
    }
    if t.repeat_iterations.is_some() || t.repeat_mode.is_some() {
        b = b.repeat(
            t.repeat_iterations.unwrap_or(0),
            t.repeat_mode.unwrap_or_default(),
        );
    }
    Ok(b)
}

fn float_kind(
    b: TransitionBuilder<f64>,
    t: &TransitionDef,
) -> StaggerResult<TransitionDescriptor> {
    reject_alignment(t)?;
    let mut b = with_timing(b, t)?;
    if let Some(from) = &t.from {
        b = b.from(float_value(from, "from")?);
    }
    if let Some(to) = &t.to {
        b = b.to(float_value(to, "to")?);
    }
    if let Some([px, py]) = t.origin {
        if !px.is_finite() || !py.is_finite() {
            return Err(StaggerError::validation("origin must be finite"));
        }
        b = b.origin(TransformOrigin::new(px, py));
    }
    Ok(b.build())
}

fn size_kind(
    b: TransitionBuilder<IntSize>,
    t: &TransitionDef,
) -> StaggerResult<TransitionDescriptor> {
    reject_origin(t)?;
    let mut b = with_timing(b, t)?;
    if let Some(from) = &t.from {
        b = b.from(size_source(from, "from")?);
    }
    if let Some(to) = &t.to {
        b = b.to(size_source(to, "to")?);
    }
    if let Some(alignment) = t.alignment {
        b = b.alignment(alignment);
    }
    Ok(b.build())
}

fn reject_origin(t: &TransitionDef) -> StaggerResult<()> {
    if t.origin.is_some() {
        return Err(StaggerError::validation(format!(
            "{:?} transitions do not take an origin",
            t.kind
        )));
    }
    Ok(())
}

fn reject_alignment(t: &TransitionDef) -> StaggerResult<()> {
    if t.alignment.is_some() {
        return Err(StaggerError::validation(format!(
            "{:?} transitions do not take an alignment",
            t.kind
        )));
    }
    Ok(())
}

fn float_value(e: &EndpointDef, field: &str) -> StaggerResult<f64> {
    match *e {
        EndpointDef::Number(v) if v.is_finite() => Ok(v),
        EndpointDef::Number(_) => Err(StaggerError::validation(format!(
            "'{field}' must be finite"
        ))),
        _ => Err(StaggerError::validation(format!(
            "'{field}' must be a number for this transition"
        ))),
    }
}

enum SizedEndpoint {
    Pair(i32, i32),
    Fraction(f64, f64),
}

fn sized_endpoint(e: &EndpointDef, field: &str) -> StaggerResult<SizedEndpoint> {
    match *e {
        EndpointDef::Pair([a, b]) => Ok(SizedEndpoint::Pair(a, b)),
        EndpointDef::Fraction { fraction: [fx, fy] } => {
            if !fx.is_finite() || !fy.is_finite() {
                return Err(StaggerError::validation(format!(
                    "'{field}' fraction must be finite"
                )));
            }
            Ok(SizedEndpoint::Fraction(fx, fy))
        }
        EndpointDef::Number(_) => Err(StaggerError::validation(format!(
            "'{field}' must be [a, b] or {{\"fraction\": [fx, fy]}} for this transition"
        ))),
    }
}

fn size_source(e: &EndpointDef, field: &str) -> StaggerResult<ValueSource<IntSize>> {
    Ok(match sized_endpoint(e, field)? {
        SizedEndpoint::Pair(w, h) => IntSize::new(w, h).into(),
        SizedEndpoint::Fraction(fx, fy) => ValueSource::<IntSize>::fraction(fx, fy),
    })
}

fn offset_source(e: &EndpointDef, field: &str) -> StaggerResult<ValueSource<IntOffset>> {
    Ok(match sized_endpoint(e, field)? {
        SizedEndpoint::Pair(x, y) => IntOffset::new(x, y).into(),
        SizedEndpoint::Fraction(fx, fy) => ValueSource::<IntOffset>::fraction(fx, fy),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/config/load.rs"]
mod tests;
