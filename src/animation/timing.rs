use crate::animation::ease::Easing;

/// Animation length used when a transition does not specify one.
pub const DEFAULT_DURATION_MILLIS: u64 = 300;

/// What a repeating transition does at the end of each iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Jump back to the initial value and play forward again.
    #[default]
    Restart,
    /// Play alternate iterations backwards (ping-pong).
    Reverse,
}

/// Timing parameters of one transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    /// Length of one iteration.
    pub duration_millis: u64,
    /// Fixed delay before every iteration.
    pub delay_millis: u64,
    /// Curve applied to each iteration's progress.
    pub easing: Easing,
    /// `0` or `1` means a single run.
    pub repeat_iterations: u32,
    /// Behaviour between iterations.
    pub repeat_mode: RepeatMode,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration_millis: DEFAULT_DURATION_MILLIS,
            delay_millis: 0,
            easing: Easing::default(),
            repeat_iterations: 0,
            repeat_mode: RepeatMode::Restart,
        }
    }
}

impl Timing {
    /// Intrinsic length: `(duration + delay) * max(1, repeat_iterations)`.
    ///
    /// Stagger and sequence delays are applied separately and are not part of this value.
    pub fn duration(&self) -> u64 {
        self.duration_millis
            .saturating_add(self.delay_millis)
            .saturating_mul(u64::from(self.iterations()))
    }

    /// Number of iterations actually played.
    pub fn iterations(&self) -> u32 {
        self.repeat_iterations.max(1)
    }

    /// Build the progress curve for a run that starts `extra_start_delay_millis` late.
    ///
    /// The extra delay only precedes the first iteration; later iterations wait
    /// `delay_millis` each.
    pub fn curve(&self, extra_start_delay_millis: u64) -> ProgressCurve {
        ProgressCurve {
            start_delay_millis: self.delay_millis.saturating_add(extra_start_delay_millis),
            iteration_delay_millis: self.delay_millis,
            duration_millis: self.duration_millis,
            iterations: self.iterations(),
            repeat_mode: self.repeat_mode,
            easing: self.easing,
        }
    }
}

/// A concrete progress-over-time request, sampled by play time since the transition began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressCurve {
    start_delay_millis: u64,
    iteration_delay_millis: u64,
    duration_millis: u64,
    iterations: u32,
    repeat_mode: RepeatMode,
    easing: Easing,
}

impl ProgressCurve {
    /// Delay before the first iteration.
    pub fn start_delay_millis(&self) -> u64 {
        self.start_delay_millis
    }

    /// Number of iterations (at least one).
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Play time at which the curve reaches its final value.
    pub fn total_millis(&self) -> u64 {
        let rest = u64::from(self.iterations - 1)
            .saturating_mul(self.iteration_delay_millis.saturating_add(self.duration_millis));
        self.start_delay_millis
            .saturating_add(self.duration_millis)
            .saturating_add(rest)
    }

    /// Return `true` once the curve has reached its final value.
    pub fn is_finished_at(&self, play_time_millis: u64) -> bool {
        play_time_millis >= self.total_millis()
    }

    /// Eased progress after the last iteration.
    ///
    /// Always the end value: a reversed run with an even count jumps back to it once its last
    /// iteration is over, so the rest state matches a snap to the target.
    pub fn final_fraction(&self) -> f64 {
        1.0
    }

    /// Eased progress at `play_time_millis` (time since the owning transition started).
    pub fn fraction_at(&self, play_time_millis: u64) -> f64 {
        if self.is_finished_at(play_time_millis) {
            return self.final_fraction();
        }
        let Some(t) = play_time_millis.checked_sub(self.start_delay_millis) else {
            return self.easing.apply(0.0);
        };

        let (iteration, local) = if t < self.duration_millis {
            (0u64, t)
        } else {
            let period = self
                .iteration_delay_millis
                .saturating_add(self.duration_millis);
            if period == 0 {
                return self.final_fraction();
            }
            let rem = t - self.duration_millis;
            (
                1 + rem / period,
                (rem % period).saturating_sub(self.iteration_delay_millis),
            )
        };

        let raw = if self.duration_millis == 0 {
            1.0
        } else {
            local as f64 / self.duration_millis as f64
        };
        if self.repeat_mode == RepeatMode::Reverse && iteration % 2 == 1 {
            self.easing.apply(1.0 - raw)
        } else {
            self.easing.apply(raw)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
