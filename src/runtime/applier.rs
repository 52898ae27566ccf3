use smallvec::SmallVec;

use crate::foundation::core::{Affine, Alignment, IntOffset, IntSize};
use crate::runtime::controller::FrameClock;
use crate::runtime::layer::LayerProps;
use crate::runtime::runner::ValueRunner;
use crate::transition::descriptor::{
    Endpoints, PropertyClass, TransitionDescriptor, TransitionKind, ValueDomain,
};
use crate::transition::graph::LayoutAnimationSpec;

/// Size, alignment and offset handed to the host's measure/place pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StructuralLayout {
    /// Size the item reports to its parent.
    pub size: IntSize,
    /// Alignment of the natural-size content inside `size`; `None` once expansion is done.
    pub alignment: Option<Alignment>,
    /// Raw offset added after alignment.
    pub offset: IntOffset,
}

impl StructuralLayout {
    /// Item measured at `size`, with no animated placement.
    pub fn at_rest(size: IntSize) -> Self {
        Self {
            size,
            alignment: None,
            offset: IntOffset::ZERO,
        }
    }

    /// Position of content measured at `child` relative to the item's layout box.
    pub fn place(&self, child: IntSize) -> IntOffset {
        let aligned = self
            .alignment
            .map_or(IntOffset::ZERO, |a| a.align(child, self.size));
        aligned + self.offset
    }
}

/// Everything the host needs to draw one item for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemFrame {
    /// Stagger index of the item.
    pub index: usize,
    /// Whether the item was inside its animation window this frame.
    pub gate_open: bool,
    /// Visual-only transform.
    pub layer: LayerProps,
    /// Layout-affecting output.
    pub layout: StructuralLayout,
    /// Play time at which every curve of this item ends; `0` when the gate is closed.
    pub end_millis: u64,
}

impl ItemFrame {
    /// Transform from the coordinates of content measured at `child` to the item's parent.
    ///
    /// The content is first placed inside the layout box, then the layer transform is applied
    /// around the box.
    pub fn content_transform(&self, child: IntSize) -> Affine {
        self.layer.to_affine(self.layout.size)
            * Affine::translate(self.layout.place(child).to_vec2())
    }
}

#[derive(Clone, Debug)]
enum RunnerSlot {
    Float(ValueRunner<f64>),
    Size(ValueRunner<IntSize>),
    Offset(ValueRunner<IntOffset>),
}

impl RunnerSlot {
    fn for_domain(domain: ValueDomain) -> Self {
        match domain {
            ValueDomain::Float => Self::Float(ValueRunner::new()),
            ValueDomain::Size => Self::Size(ValueRunner::new()),
            ValueDomain::Offset => Self::Offset(ValueRunner::new()),
        }
    }

    fn domain(&self) -> ValueDomain {
        match self {
            Self::Float(_) => ValueDomain::Float,
            Self::Size(_) => ValueDomain::Size,
            Self::Offset(_) => ValueDomain::Offset,
        }
    }

    fn sync(&mut self, endpoints: &Endpoints, full: IntSize, clock: &FrameClock) {
        let visible = clock.heading_visible();
        let segment = clock.segment_id();
        match (self, endpoints) {
            (Self::Float(r), Endpoints::Float { from, to }) => {
                r.sync(visible, segment, from.resolve(full), to.resolve(full))
            }
            (Self::Size(r), Endpoints::Size { from, to }) => {
                r.sync(visible, segment, from.resolve(full), to.resolve(full))
            }
            (Self::Offset(r), Endpoints::Offset { from, to }) => {
                r.sync(visible, segment, from.resolve(full), to.resolve(full))
            }
            // Slots are rebuilt whenever their domain stops matching the graph.
            _ => {}
        }
    }

    fn update(&mut self, fraction: f64) {
        match self {
            Self::Float(r) => r.update(fraction),
            Self::Size(r) => r.update(fraction),
            Self::Offset(r) => r.update(fraction),
        }
    }

    fn snap_to_target(&mut self) {
        match self {
            Self::Float(r) => r.snap_to_target(),
            Self::Size(r) => r.snap_to_target(),
            Self::Offset(r) => r.snap_to_target(),
        }
    }

    fn has_started(&self) -> bool {
        match self {
            Self::Float(r) => r.has_started(),
            Self::Size(r) => r.has_started(),
            Self::Offset(r) => r.has_started(),
        }
    }
}

/// Per-item applier: one runner per descriptor, kept across frames.
#[derive(Clone, Debug)]
pub(crate) struct ItemAnimator {
    slots: Vec<RunnerSlot>,
    lookahead: Option<IntSize>,
    gate_was_open: bool,
}

impl ItemAnimator {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            lookahead: None,
            gate_was_open: true,
        }
    }

    /// Record the natural size from a look-ahead pass; it becomes the structural target.
    pub(crate) fn set_lookahead(&mut self, natural: IntSize) {
        self.lookahead = Some(natural);
    }

    fn bind(&mut self, graph: &[TransitionDescriptor]) {
        let matches = self.slots.len() == graph.len()
            && self
                .slots
                .iter()
                .zip(graph)
                .all(|(s, d)| s.domain() == d.value_domain());
        if !matches {
            self.slots = graph
                .iter()
                .map(|d| RunnerSlot::for_domain(d.value_domain()))
                .collect();
        }
    }

    /// Advance every runner and fold the results into one frame.
    pub(crate) fn frame(
        &mut self,
        spec: &LayoutAnimationSpec,
        clock: &FrameClock,
        index: usize,
        skip: bool,
        measured: IntSize,
    ) -> ItemFrame {
        let graph = spec.graph().descriptors();
        self.bind(graph);

        let full = self.lookahead.unwrap_or(measured);
        let gate_open = !skip && clock.gate_open(spec, index);
        if self.gate_was_open && !gate_open {
            tracing::trace!(index, skip, "item animation window closed");
        }
        self.gate_was_open = gate_open;

        let item_delay = spec.item_delay_millis(index);
        let mut end_millis = 0u64;
        for (d, slot) in graph.iter().zip(self.slots.iter_mut()) {
            slot.sync(d.endpoints(), full, clock);
            if !gate_open {
                slot.snap_to_target();
                continue;
            }
            let curve = d
                .timing()
                .curve(item_delay.saturating_add(d.sequence_offset_millis()));
            let fraction = match clock.play_time_millis() {
                Some(play) => curve.fraction_at(play),
                None => curve.final_fraction(),
            };
            slot.update(fraction);
            end_millis = end_millis.max(curve.total_millis());
        }

        let (layer, layout) = self.resolve(graph, measured);
        ItemFrame {
            index,
            gate_open,
            layer,
            layout,
            end_millis,
        }
    }

    /// First descriptor of a property class applies unconditionally; later ones of the same
    /// class (and every chained descriptor) apply only once their own run has started.
    fn resolve(
        &self,
        graph: &[TransitionDescriptor],
        measured: IntSize,
    ) -> (LayerProps, StructuralLayout) {
        let mut seen: SmallVec<[PropertyClass; 8]> = SmallVec::new();
        seen.push(PropertyClass::Sequence);

        let mut layer = LayerProps::IDENTITY;
        let mut layout = StructuralLayout::at_rest(measured);

        for (d, slot) in graph.iter().zip(&self.slots) {
            let class = d.property_class();
            let apply = if seen.contains(&class) {
                slot.has_started()
            } else {
                seen.push(class);
                true
            };
            if !apply {
                continue;
            }

            match slot {
                RunnerSlot::Float(r) => apply_float(d, r.value(), &mut layer),
                RunnerSlot::Size(r) => {
                    if d.kind() == TransitionKind::Expand && !r.has_finished() {
                        layout.size = r.value();
                        layout.alignment = Some(d.alignment());
                    }
                }
                RunnerSlot::Offset(r) => {
                    if d.kind() == TransitionKind::Slide {
                        layout.offset = r.value();
                    }
                }
            }
        }
        (layer, layout)
    }
}

fn apply_float(d: &TransitionDescriptor, v: f64, layer: &mut LayerProps) {
    match d.kind() {
        TransitionKind::Fade => layer.alpha = v,
        TransitionKind::ScaleX => {
            layer.scale_x = v;
            layer.transform_origin = d.origin();
        }
        TransitionKind::ScaleY => {
            layer.scale_y = v;
            layer.transform_origin = d.origin();
        }
        TransitionKind::ScaleUniform => {
            layer.scale_x = v;
            layer.scale_y = v;
            layer.transform_origin = d.origin();
        }
        TransitionKind::RotationZ => {
            layer.rotation_z = v;
            layer.transform_origin = d.origin();
        }
        TransitionKind::RotationX => {
            layer.rotation_x = v;
            layer.transform_origin = d.origin();
        }
        TransitionKind::RotationY => {
            layer.rotation_y = v;
            layer.transform_origin = d.origin();
        }
        TransitionKind::TranslationX => layer.translation_x = v,
        TransitionKind::TranslationY => layer.translation_y = v,
        TransitionKind::Custom => {
            if let Some(custom) = d.custom() {
                custom.apply(layer, v);
            }
        }
        TransitionKind::Slide | TransitionKind::Expand => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/applier.rs"]
mod tests;
