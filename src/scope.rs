use crate::foundation::core::{IntSize, ItemKey};
use crate::runtime::applier::ItemFrame;
use crate::runtime::controller::{EntrancePhase, EntranceState, FrameClock, ItemSlot};
use crate::transition::graph::LayoutAnimationSpec;

/// Result of closing one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSummary {
    /// Items declared during the frame.
    pub items: usize,
    /// Longest end time reported by any item.
    pub longest_millis: u64,
    /// Phase after the frame was closed.
    pub phase: EntrancePhase,
    /// `true` when the transition settled on this frame.
    pub settled: bool,
}

/// Container-level scope for one frame of a staggered layout.
///
/// Declare every participating child with [`LayoutAnimationScope::item`] or
/// [`LayoutAnimationScope::lazy_item`], then call [`LayoutAnimationScope::finish`]. Children not
/// declared before `finish` lose their stagger index.
///
/// ```
/// use stagger::{EntranceState, IntSize, LayoutAnimationScope, LayoutAnimationSpec, fade};
///
/// let spec = LayoutAnimationSpec::new(fade()).with_delay_between_items(50);
/// let mut state = EntranceState::default();
/// state.set_visible(true);
///
/// let mut scope = LayoutAnimationScope::new(&spec, &mut state, 0);
/// let frame = scope.item("row-0").frame(IntSize::new(200, 40));
/// assert_eq!(frame.layer.alpha, 0.0);
/// scope.finish();
/// ```
#[derive(Debug)]
pub struct LayoutAnimationScope<'a> {
    spec: &'a LayoutAnimationSpec,
    state: &'a mut EntranceState,
    clock: FrameClock,
    items: usize,
    longest_millis: u64,
}

impl<'a> LayoutAnimationScope<'a> {
    /// Open a frame at wall-clock `now_millis`.
    pub fn new(
        spec: &'a LayoutAnimationSpec,
        state: &'a mut EntranceState,
        now_millis: u64,
    ) -> Self {
        let clock = state.tick(now_millis);
        Self {
            spec,
            state,
            clock,
            items: 0,
            longest_millis: 0,
        }
    }

    /// Shared clock sample of this frame.
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Spec driving this scope.
    pub fn spec(&self) -> &LayoutAnimationSpec {
        self.spec
    }

    /// Declare a child of a plain container.
    pub fn item(&mut self, key: impl Into<ItemKey>) -> ItemScope<'_> {
        self.enter(key.into(), false)
    }

    /// Declare a child of a virtualized container.
    ///
    /// A lazy child first seen after the batch has settled, or after the batch's base duration,
    /// renders at rest instead of animating.
    pub fn lazy_item(&mut self, key: impl Into<ItemKey>) -> ItemScope<'_> {
        self.enter(key.into(), true)
    }

    fn enter(&mut self, key: ItemKey, lazy: bool) -> ItemScope<'_> {
        self.items += 1;
        let slot = self.state.enter_item(key, lazy, &self.clock, self.spec);
        ItemScope {
            spec: self.spec,
            clock: self.clock,
            slot,
            longest_millis: &mut self.longest_millis,
        }
    }

    /// Close the frame: sweep undeclared items and settle the transition when every item is done.
    pub fn finish(self) -> FrameSummary {
        let settled = self.state.end_frame(&self.clock, self.longest_millis);
        FrameSummary {
            items: self.items,
            longest_millis: self.longest_millis,
            phase: self.state.phase(),
            settled,
        }
    }
}

/// One declared child for one frame.
#[derive(Debug)]
pub struct ItemScope<'s> {
    spec: &'s LayoutAnimationSpec,
    clock: FrameClock,
    slot: &'s mut ItemSlot,
    longest_millis: &'s mut u64,
}

impl ItemScope<'_> {
    /// Stagger index of this child.
    pub fn index(&self) -> usize {
        self.slot.index
    }

    /// Report the natural size measured in a look-ahead pass.
    ///
    /// Size-dependent endpoints resolve against this size from now on.
    pub fn lookahead(self, natural: IntSize) -> Self {
        self.slot.animator.set_lookahead(natural);
        self
    }

    /// Compute the child's transform and layout for this frame.
    pub fn frame(self, measured: IntSize) -> ItemFrame {
        let frame = self.slot.animator.frame(
            self.spec,
            &self.clock,
            self.slot.index,
            self.slot.skip,
            measured,
        );
        *self.longest_millis = (*self.longest_millis).max(frame.end_millis);
        frame
    }
}
