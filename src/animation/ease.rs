use serde::{Deserialize, Serialize};

use crate::foundation::error::{StaggerError, StaggerResult};

/// Easing curves used to map normalized animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Standard curve: quick start, gentle settle. Cubic-bezier `(0.4, 0, 0.2, 1)`.
    #[default]
    FastOutSlowIn,
    /// Incoming elements: linear start, gentle settle. Cubic-bezier `(0, 0, 0.2, 1)`.
    LinearOutSlowIn,
    /// Outgoing elements: quick start, linear end. Cubic-bezier `(0.4, 0, 1, 1)`.
    FastOutLinearIn,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Arbitrary CSS-style cubic bezier with fixed `(0,0)` and `(1,1)` endpoints.
    CubicBezier {
        /// First control point x, in `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, in `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
    /// Decaying sine oscillation around the end value.
    ElasticOut,
    /// Piecewise parabolic bounces into the end value.
    BounceOut,
    /// Runs past the end value and settles back.
    Overshoot {
        /// Amount of overshoot; `0` degenerates to a cubic ease-out.
        tension: f64,
    },
}

impl Easing {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::FastOutSlowIn => cubic_bezier_ease(t, 0.4, 0.0, 0.2, 1.0),
            Self::LinearOutSlowIn => cubic_bezier_ease(t, 0.0, 0.0, 0.2, 1.0),
            Self::FastOutLinearIn => cubic_bezier_ease(t, 0.4, 0.0, 1.0, 1.0),
            Self::EaseIn => cubic_bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => cubic_bezier_ease(t, 0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => cubic_bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
            Self::ElasticOut => elastic_out(t),
            Self::BounceOut => bounce_out(t),
            Self::Overshoot { tension } => overshoot(t, tension),
        }
    }

    /// Reject parameters that do not describe a usable curve.
    pub fn validate(self) -> StaggerResult<()> {
        match self {
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                    return Err(StaggerError::validation(
                        "cubic_bezier control points must be finite",
                    ));
                }
                if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                    return Err(StaggerError::validation(
                        "cubic_bezier x control points must be in [0, 1]",
                    ));
                }
                Ok(())
            }
            Self::Overshoot { tension } => {
                if !tension.is_finite() || tension < 0.0 {
                    return Err(StaggerError::validation(
                        "overshoot tension must be finite and >= 0",
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::Linear => "linear",
            Self::FastOutSlowIn => "fast_out_slow_in",
            Self::LinearOutSlowIn => "linear_out_slow_in",
            Self::FastOutLinearIn => "fast_out_linear_in",
            Self::EaseIn => "ease_in",
            Self::EaseOut => "ease_out",
            Self::EaseInOut => "ease_in_out",
            Self::ElasticOut => "elastic_out",
            Self::BounceOut => "bounce_out",
            Self::CubicBezier { .. } | Self::Overshoot { .. } => return None,
        })
    }
}

impl Serialize for Easing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        if let Some(name) = self.name() {
            return serializer.serialize_str(name);
        }
        let mut map = serializer.serialize_map(Some(1))?;
        match *self {
            Self::CubicBezier { x1, y1, x2, y2 } => {
                map.serialize_entry("cubic_bezier", &[x1, y1, x2, y2])?
            }
            Self::Overshoot { tension } => map.serialize_entry("overshoot", &tension)?,
            _ => {}
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            CubicBezier { cubic_bezier: [f64; 4] },
            Overshoot { overshoot: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => match s.as_str() {
                "linear" => Ok(Self::Linear),
                "fast_out_slow_in" => Ok(Self::FastOutSlowIn),
                "linear_out_slow_in" => Ok(Self::LinearOutSlowIn),
                "fast_out_linear_in" => Ok(Self::FastOutLinearIn),
                "ease_in" => Ok(Self::EaseIn),
                "ease_out" => Ok(Self::EaseOut),
                "ease_in_out" => Ok(Self::EaseInOut),
                "elastic_out" => Ok(Self::ElasticOut),
                "bounce_out" => Ok(Self::BounceOut),
                other => Err(serde::de::Error::custom(format!(
                    "unknown easing \"{other}\""
                ))),
            },
            Repr::CubicBezier { cubic_bezier } => Ok(Self::CubicBezier {
                x1: cubic_bezier[0],
                y1: cubic_bezier[1],
                x2: cubic_bezier[2],
                y2: cubic_bezier[3],
            }),
            Repr::Overshoot { overshoot } => Ok(Self::Overshoot { tension: overshoot }),
        }
    }
}

/// One axis of a cubic bezier anchored at 0 and 1.
#[derive(Clone, Copy)]
struct BezierAxis {
    c1: f64,
    c2: f64,
}

impl BezierAxis {
    fn at(self, u: f64) -> f64 {
        let v = 1.0 - u;
        u * (3.0 * v * (v * self.c1 + u * self.c2) + u * u)
    }

    fn slope(self, u: f64) -> f64 {
        let v = 1.0 - u;
        3.0 * (v * v * self.c1 + 2.0 * v * u * (self.c2 - self.c1) + u * u * (1.0 - self.c2))
    }

    /// Parameter `u` with `at(u) == x`, for `x` inside `(0, 1)`.
    fn solve(self, x: f64) -> f64 {
        let mut u = x;
        for _ in 0..8 {
            let slope = self.slope(u);
            if slope.abs() < 1e-7 {
                break;
            }
            u = (u - (self.at(u) - x) / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..8 {
            let err = self.at(u) - x;
            if err.abs() < 1e-9 {
                break;
            }
            if err < 0.0 {
                lo = u;
            } else {
                hi = u;
            }
            u = 0.5 * (lo + hi);
        }
        u
    }
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let u = BezierAxis { c1: x1, c2: x2 }.solve(x);
    BezierAxis { c1: y1, c2: y2 }.at(u)
}

const ELASTIC_PERIOD: f64 = 0.3;

fn elastic_out(t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t.clamp(0.0, 1.0);
    }
    let phase = (t - ELASTIC_PERIOD / 4.0) * std::f64::consts::TAU / ELASTIC_PERIOD;
    1.0 + 2f64.powf(-10.0 * t) * phase.sin()
}

// (segment end, segment center, resting height), in units of 1/2.75.
const BOUNCES: [(f64, f64, f64); 4] = [
    (1.0, 0.0, 0.0),
    (2.0, 1.5, 0.75),
    (2.5, 2.25, 0.9375),
    (f64::INFINITY, 2.625, 0.984375),
];

fn bounce_out(t: f64) -> f64 {
    const K: f64 = 7.5625;
    const W: f64 = 2.75;
    let (_, center, rest) = BOUNCES
        .iter()
        .copied()
        .find(|&(end, _, _)| t < end / W)
        .unwrap_or(BOUNCES[3]);
    let d = t - center / W;
    K * d * d + rest
}

fn overshoot(t: f64, tension: f64) -> f64 {
    let t = t - 1.0;
    t * t * ((tension + 1.0) * t + tension) + 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
