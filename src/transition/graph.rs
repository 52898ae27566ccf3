use std::ops::Add;

use crate::transition::builders::{TransitionBuilder, TransitionValue};
use crate::transition::descriptor::TransitionDescriptor;

/// Stagger step used when a spec does not configure one.
pub const DEFAULT_DELAY_BETWEEN_ITEMS_MILLIS: u64 = 50;

/// Ordered list of descriptors that run for every item.
///
/// Order only matters for property-conflict resolution. Composition always returns a new graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationGraph {
    descriptors: Vec<TransitionDescriptor>,
}

impl AnimationGraph {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptors in insertion order.
    pub fn descriptors(&self) -> &[TransitionDescriptor] {
        &self.descriptors
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// `true` when the graph holds no descriptors.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Longest intrinsic end over all descriptors (own duration plus sequence offset).
    pub fn duration(&self) -> u64 {
        self.descriptors
            .iter()
            .map(TransitionDescriptor::end_millis)
            .max()
            .unwrap_or(0)
    }

    /// Run `other` at the same time as `self`.
    pub fn together(self, other: impl Into<AnimationGraph>) -> Self {
        together(self, other)
    }

    /// Run `other` once `self` has finished.
    pub fn then(self, other: impl Into<AnimationGraph>) -> Self {
        sequence(self, other)
    }
}

/// Parallel union: both lists start together; duration is the max of both.
pub fn together(a: impl Into<AnimationGraph>, b: impl Into<AnimationGraph>) -> AnimationGraph {
    let mut a = a.into();
    a.descriptors.extend(b.into().descriptors);
    a
}

/// Chain `b` after `a`: every descriptor of `b` is delayed by `a`'s duration and tagged
/// [`PropertyClass::Sequence`](crate::PropertyClass::Sequence).
pub fn sequence(a: impl Into<AnimationGraph>, b: impl Into<AnimationGraph>) -> AnimationGraph {
    let mut a = a.into();
    let offset = a.duration();
    a.descriptors
        .extend(b.into().descriptors.iter().map(|d| d.chained_after(offset)));
    a
}

/// Fold [`together`] over any number of graphs.
pub fn together_all<I>(graphs: I) -> AnimationGraph
where
    I: IntoIterator,
    I::Item: Into<AnimationGraph>,
{
    graphs.into_iter().fold(AnimationGraph::new(), together)
}

/// Fold [`sequence`] over any number of graphs, left to right.
pub fn sequence_all<I>(graphs: I) -> AnimationGraph
where
    I: IntoIterator,
    I::Item: Into<AnimationGraph>,
{
    graphs
        .into_iter()
        .map(Into::<AnimationGraph>::into)
        .reduce(sequence)
        .unwrap_or_default()
}

impl From<TransitionDescriptor> for AnimationGraph {
    fn from(d: TransitionDescriptor) -> Self {
        Self {
            descriptors: vec![d],
        }
    }
}

impl<T: TransitionValue> From<TransitionBuilder<T>> for AnimationGraph {
    fn from(b: TransitionBuilder<T>) -> Self {
        b.build().into()
    }
}

impl FromIterator<TransitionDescriptor> for AnimationGraph {
    fn from_iter<I: IntoIterator<Item = TransitionDescriptor>>(iter: I) -> Self {
        Self {
            descriptors: iter.into_iter().collect(),
        }
    }
}

impl<R: Into<AnimationGraph>> Add<R> for AnimationGraph {
    type Output = AnimationGraph;

    fn add(self, rhs: R) -> AnimationGraph {
        together(self, rhs)
    }
}

impl<T: TransitionValue, R: Into<AnimationGraph>> Add<R> for TransitionBuilder<T> {
    type Output = AnimationGraph;

    fn add(self, rhs: R) -> AnimationGraph {
        together(self, rhs)
    }
}

impl<T: TransitionValue> TransitionBuilder<T> {
    /// Run `other` at the same time as this transition.
    pub fn together(self, other: impl Into<AnimationGraph>) -> AnimationGraph {
        together(self, other)
    }

    /// Run `other` once this transition has finished.
    pub fn then(self, other: impl Into<AnimationGraph>) -> AnimationGraph {
        sequence(self, other)
    }
}

/// Complete per-container configuration: stagger policy plus the animation graph.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutAnimationSpec {
    initial_delay_millis: u64,
    delay_millis_between_items: u64,
    graph: AnimationGraph,
}

impl LayoutAnimationSpec {
    /// Spec with no initial delay and the default stagger step.
    pub fn new(graph: impl Into<AnimationGraph>) -> Self {
        Self {
            initial_delay_millis: 0,
            delay_millis_between_items: DEFAULT_DELAY_BETWEEN_ITEMS_MILLIS,
            graph: graph.into(),
        }
    }

    /// Delay before the first item starts.
    pub fn with_initial_delay(mut self, millis: u64) -> Self {
        self.initial_delay_millis = millis;
        self
    }

    /// Extra delay per stagger index.
    pub fn with_delay_between_items(mut self, millis: u64) -> Self {
        self.delay_millis_between_items = millis;
        self
    }

    /// Delay before the first item starts.
    pub fn initial_delay_millis(&self) -> u64 {
        self.initial_delay_millis
    }

    /// Extra delay per stagger index.
    pub fn delay_millis_between_items(&self) -> u64 {
        self.delay_millis_between_items
    }

    /// Descriptors run by every item.
    pub fn graph(&self) -> &AnimationGraph {
        &self.graph
    }

    /// `initial_delay + graph.duration()`. Stagger delays are not included.
    pub fn duration(&self) -> u64 {
        self.initial_delay_millis.saturating_add(self.graph.duration())
    }

    /// Start delay of the item with stagger index `index`.
    pub fn item_delay_millis(&self, index: usize) -> u64 {
        self.initial_delay_millis
            .saturating_add(self.stagger_delay_millis(index))
    }

    /// Stagger component alone: `delay_between_items * index`.
    pub fn stagger_delay_millis(&self, index: usize) -> u64 {
        self.delay_millis_between_items.saturating_mul(index as u64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/graph.rs"]
mod tests;
