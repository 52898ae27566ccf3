use crate::animation::interp::Lerp;

/// Where a runner's initial value comes from when a segment begins.
#[derive(Clone, Copy, Debug, PartialEq)]
enum RunOrigin<T> {
    /// Start from the endpoint opposite the target.
    Opposite,
    /// Already at rest on the target.
    Settled,
    /// Continue from the value captured when the previous segment was interrupted.
    Interrupted(T),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct RunnerValues<T> {
    initial: T,
    target: T,
    current: T,
}

/// Live state of one descriptor for one item.
///
/// Holds the initial, target and current values of a single interpolation. Reading a value
/// before [`ValueRunner::animate`] has been called is a caller bug and panics.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueRunner<T> {
    values: Option<RunnerValues<T>>,
    origin: RunOrigin<T>,
    segment: Option<u64>,
}

impl<T: Lerp> Default for ValueRunner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Lerp> ValueRunner<T> {
    /// Uninitialized runner.
    pub fn new() -> Self {
        Self {
            values: None,
            origin: RunOrigin::Settled,
            segment: None,
        }
    }

    /// Begin interpolating from `initial` to `target`; the current value resets to `initial`.
    pub fn animate(&mut self, initial: T, target: T) {
        self.values = Some(RunnerValues {
            initial,
            target,
            current: initial,
        });
    }

    /// Return `true` once [`ValueRunner::animate`] has been called.
    pub fn is_animated(&self) -> bool {
        self.values.is_some()
    }

    fn values(&self) -> &RunnerValues<T> {
        match &self.values {
            Some(v) => v,
            None => panic!("ValueRunner read before animate(initial, target)"),
        }
    }

    /// Current value.
    ///
    /// # Panics
    ///
    /// Panics if the runner was never animated.
    pub fn value(&self) -> T {
        self.values().current
    }

    /// Value at fraction `0`.
    ///
    /// # Panics
    ///
    /// Panics if the runner was never animated.
    pub fn initial(&self) -> T {
        self.values().initial
    }

    /// Value at fraction `1`.
    ///
    /// # Panics
    ///
    /// Panics if the runner was never animated.
    pub fn target(&self) -> T {
        self.values().target
    }

    /// Move the current value to `fraction` between initial and target.
    pub fn update(&mut self, fraction: f64) {
        if let Some(v) = &mut self.values {
            v.current = T::lerp(v.initial, v.target, fraction);
        }
    }

    /// Jump straight to the target.
    pub fn snap_to_target(&mut self) {
        if let Some(v) = &mut self.values {
            v.current = v.target;
        }
    }

    /// `true` once the current value has left the initial value.
    pub fn has_started(&self) -> bool {
        self.values.as_ref().is_some_and(|v| v.current != v.initial)
    }

    /// `true` while the current value equals the target.
    pub fn has_finished(&self) -> bool {
        self.values.as_ref().is_some_and(|v| v.current == v.target)
    }

    /// Re-derive initial and target for this frame.
    ///
    /// `heading_visible` picks `to` as the target (`from` otherwise). A runner seen for the first
    /// time mid-segment starts at the opposite endpoint; outside a segment it starts settled.
    /// A new segment id restarts the run from the opposite endpoint, or from the current value
    /// when the previous run had not finished.
    pub(crate) fn sync(&mut self, heading_visible: bool, segment: Option<u64>, from: T, to: T) {
        let (opposite, target) = if heading_visible {
            (from, to)
        } else {
            (to, from)
        };

        if !self.is_animated() {
            self.origin = if segment.is_some() {
                RunOrigin::Opposite
            } else {
                RunOrigin::Settled
            };
            self.segment = segment;
            let initial = if segment.is_some() { opposite } else { target };
            self.animate(initial, target);
            return;
        }

        if segment.is_some() && segment != self.segment {
            self.origin = match &self.values {
                Some(v) if v.current != v.target => RunOrigin::Interrupted(v.current),
                _ => RunOrigin::Opposite,
            };
            self.segment = segment;
        }

        let initial = match self.origin {
            RunOrigin::Opposite => opposite,
            RunOrigin::Settled => target,
            RunOrigin::Interrupted(v) => v,
        };
        if let Some(v) = &mut self.values {
            v.initial = initial;
            v.target = target;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/runner.rs"]
mod tests;
