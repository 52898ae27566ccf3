use std::collections::HashMap;

use crate::foundation::core::ItemKey;
use crate::runtime::applier::ItemAnimator;
use crate::transition::graph::LayoutAnimationSpec;

/// Coarse state of the shared visibility transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrancePhase {
    /// The target has never changed.
    Idle,
    /// A transition segment is in flight.
    Animating,
    /// The current state equals the target.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Segment {
    id: u64,
    started_at: Option<u64>,
    resume_at: u64,
}

/// One frame's sample of the shared transition, identical for every item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    now_millis: u64,
    play_time_millis: Option<u64>,
    segment_id: Option<u64>,
    heading_visible: bool,
    seeking: bool,
    batch_start_millis: Option<u64>,
}

impl FrameClock {
    /// Wall-clock time of this frame.
    pub fn now_millis(&self) -> u64 {
        self.now_millis
    }

    /// Time since the running segment started (or the seek position); `None` when settled.
    pub fn play_time_millis(&self) -> Option<u64> {
        self.play_time_millis
    }

    /// Identity of the running segment.
    pub fn segment_id(&self) -> Option<u64> {
        self.segment_id
    }

    /// Visibility the transition is heading to.
    pub fn heading_visible(&self) -> bool {
        self.heading_visible
    }

    /// `true` while scrubbing.
    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    /// Wall-clock time the current batch started, once known.
    pub fn batch_start_millis(&self) -> Option<u64> {
        self.batch_start_millis
    }

    /// Whether item `index` may still show in-flight animation.
    ///
    /// Open while seeking, before the batch start is known, and until
    /// `spec.duration() + delay_between_items * index` has elapsed since the batch started.
    pub fn gate_open(&self, spec: &LayoutAnimationSpec, index: usize) -> bool {
        if self.seeking {
            return true;
        }
        match self.batch_start_millis {
            None => true,
            Some(start) => {
                let window = spec
                    .duration()
                    .saturating_add(spec.stagger_delay_millis(index));
                self.now_millis.saturating_sub(start) <= window
            }
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ItemSlot {
    pub(crate) index: usize,
    pub(crate) skip: bool,
    pub(crate) animator: ItemAnimator,
    touched_frame: u64,
}

/// Shared state of one staggered container, kept by the host across frames.
///
/// Owns the visibility transition, the batch start time and the identity-keyed stagger index
/// of every participating item.
#[derive(Clone, Debug)]
pub struct EntranceState {
    target: bool,
    current: bool,
    triggered: bool,
    segment: Option<Segment>,
    segment_counter: u64,
    seek: Option<u64>,
    batch_start: Option<u64>,
    next_stagger_index: usize,
    frame: u64,
    items: HashMap<ItemKey, ItemSlot>,
}

impl Default for EntranceState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl EntranceState {
    /// Settled state at `visible`.
    pub fn new(visible: bool) -> Self {
        Self {
            target: visible,
            current: visible,
            triggered: false,
            segment: None,
            segment_counter: 0,
            seek: None,
            batch_start: None,
            next_stagger_index: 0,
            frame: 0,
            items: HashMap::new(),
        }
    }

    /// Change the visibility target.
    ///
    /// A change starts a new segment; an in-flight segment is interrupted and every item
    /// re-animates from its current value.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.target {
            return;
        }
        if self.segment.is_some() {
            tracing::debug!(visible, "entrance reversed mid-flight");
        } else {
            tracing::debug!(visible, "entrance segment started");
        }
        self.target = visible;
        self.triggered = true;
        self.begin_segment();
        self.batch_start = None;
        for slot in self.items.values_mut() {
            slot.skip = false;
        }
    }

    fn begin_segment(&mut self) {
        self.segment_counter += 1;
        self.segment = Some(Segment {
            id: self.segment_counter,
            started_at: None,
            resume_at: 0,
        });
    }

    /// Visibility target, updated immediately.
    pub fn is_going_to_visible(&self) -> bool {
        self.target
    }

    /// Settled visibility; flips only once every item has finished.
    pub fn is_currently_visible(&self) -> bool {
        self.current
    }

    /// Coarse phase of the shared transition.
    pub fn phase(&self) -> EntrancePhase {
        if self.segment.is_some() {
            EntrancePhase::Animating
        } else if self.triggered {
            EntrancePhase::Settled
        } else {
            EntrancePhase::Idle
        }
    }

    /// Pin the transition at `play_time_millis` for the following frames.
    ///
    /// Seeking a settled transition replays its last segment. The gate stays open and the
    /// segment never settles while seeking.
    pub fn seek(&mut self, play_time_millis: u64) {
        if self.segment.is_none() {
            tracing::debug!(visible = self.target, "replaying segment for seek");
            self.begin_segment();
            self.batch_start = None;
        }
        tracing::debug!(play_time_millis, "seeking");
        self.seek = Some(play_time_millis);
    }

    /// Leave seeking mode and continue playing from the seek position.
    pub fn resume(&mut self) {
        let Some(at) = self.seek.take() else {
            return;
        };
        tracing::debug!(at, "resumed from seek");
        if let Some(segment) = &mut self.segment {
            segment.started_at = None;
            segment.resume_at = at;
        }
        self.batch_start = None;
    }

    /// `true` while scrubbing.
    pub fn is_seeking(&self) -> bool {
        self.seek.is_some()
    }

    /// Claim the next stagger index.
    pub fn next_child(&mut self) -> usize {
        claim_index(&mut self.next_stagger_index)
    }

    /// Stagger index currently assigned to `key`.
    pub fn index_of(&self, key: impl Into<ItemKey>) -> Option<usize> {
        self.items.get(&key.into()).map(|slot| slot.index)
    }

    /// Forget an item; if it comes back it gets a fresh index.
    pub fn release(&mut self, key: impl Into<ItemKey>) -> bool {
        self.items.remove(&key.into()).is_some()
    }

    /// Number of items currently tracked.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sample the shared transition for a frame at `now_millis`.
    ///
    /// The first non-seeking frame of a segment records its start and, if unset, the batch start.
    pub(crate) fn tick(&mut self, now_millis: u64) -> FrameClock {
        self.frame += 1;

        let play_time_millis = match (self.seek, &mut self.segment) {
            (Some(at), _) => Some(at),
            (None, Some(segment)) => {
                let resume_at = segment.resume_at;
                let started = *segment
                    .started_at
                    .get_or_insert(now_millis.saturating_sub(resume_at));
                if self.batch_start.is_none() {
                    tracing::debug!(batch_start = started, "batch started");
                    self.batch_start = Some(started);
                }
                Some(now_millis.saturating_sub(started))
            }
            (None, None) => None,
        };

        FrameClock {
            now_millis,
            play_time_millis,
            segment_id: self.segment.map(|s| s.id),
            heading_visible: self.target,
            seeking: self.seek.is_some(),
            batch_start_millis: self.batch_start,
        }
    }

    /// Fetch the slot for `key`, assigning a stagger index on first participation.
    pub(crate) fn enter_item(
        &mut self,
        key: ItemKey,
        lazy: bool,
        clock: &FrameClock,
        spec: &LayoutAnimationSpec,
    ) -> &mut ItemSlot {
        let frame = self.frame;
        let skip = lazy && self.batch_is_past(clock, spec);
        let next = &mut self.next_stagger_index;
        let slot = self.items.entry(key).or_insert_with(|| {
            let index = claim_index(next);
            tracing::trace!(key = key.0, index, skip, "stagger index assigned");
            ItemSlot {
                index,
                skip,
                animator: ItemAnimator::new(),
                touched_frame: frame,
            }
        });
        slot.touched_frame = frame;
        slot
    }

    // Lazy items skip once the batch has settled or its base window is over.
    fn batch_is_past(&self, clock: &FrameClock, spec: &LayoutAnimationSpec) -> bool {
        if clock.seeking {
            return false;
        }
        match self.batch_start {
            None => false,
            Some(start) => {
                self.segment.is_none() || clock.now_millis.saturating_sub(start) > spec.duration()
            }
        }
    }

    /// Close a frame: drop undeclared items and settle once `longest_millis` has played.
    ///
    /// Returns `true` when the segment settled on this frame.
    pub(crate) fn end_frame(&mut self, clock: &FrameClock, longest_millis: u64) -> bool {
        let frame = self.frame;
        let before = self.items.len();
        self.items.retain(|_, slot| slot.touched_frame == frame);
        let dropped = before - self.items.len();
        if dropped > 0 {
            tracing::trace!(dropped, "released undeclared items");
        }

        if clock.seeking || self.seek.is_some() {
            return false;
        }
        let (Some(_), Some(play)) = (self.segment, clock.play_time_millis) else {
            return false;
        };
        if play < longest_millis {
            return false;
        }
        self.current = self.target;
        self.segment = None;
        tracing::debug!(visible = self.current, play, "entrance settled");
        true
    }
}

fn claim_index(counter: &mut usize) -> usize {
    let index = *counter;
    *counter += 1;
    index
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/controller.rs"]
mod tests;
