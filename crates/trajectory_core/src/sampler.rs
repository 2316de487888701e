//! Bounded sampling of parametric curves into plottable point sequences.

use crate::traits::ParametricCurve;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STEPS: usize = 200;
/// Half-width of the square rendering window `(-20, 20) x (-20, 20)`.
pub const DEFAULT_WINDOW: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered run of retained points, stored column-wise for plotting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: SamplePoint) {
        self.x.push(point.x);
        self.y.push(point.y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = SamplePoint> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| SamplePoint::new(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Number of equal increments; `steps + 1` parameter values are evaluated.
    pub steps: usize,
    /// Points with `|x| >= window` or `|y| >= window` are dropped.
    pub window: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            window: DEFAULT_WINDOW,
        }
    }
}

impl SamplerConfig {
    pub fn with_steps(steps: usize) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    fn accepts(&self, point: &SamplePoint) -> bool {
        point.x.is_finite()
            && point.y.is_finite()
            && point.x.abs() < self.window
            && point.y.abs() < self.window
    }
}

/// Samples `curve` over `[t_min, t_max]` with the default configuration.
pub fn sample(curve: &impl ParametricCurve, param: f64, t_min: f64, t_max: f64) -> Curve {
    sample_with(&SamplerConfig::default(), curve, param, t_min, t_max)
}

/// Evaluates `curve` at `t = t_min + i * dt` for `i = 0..=steps` and keeps the
/// finite, in-window points in order. Never fails; degenerate ranges give short
/// or empty curves.
pub fn sample_with(
    config: &SamplerConfig,
    curve: &impl ParametricCurve,
    param: f64,
    t_min: f64,
    t_max: f64,
) -> Curve {
    let steps = config.steps.max(1);
    let dt = (t_max - t_min) / steps as f64;
    let mut out = Curve::with_capacity(steps + 1);

    for i in 0..=steps {
        let t = t_min + i as f64 * dt;
        let Some(point) = curve.point(t, param) else {
            continue;
        };
        if config.accepts(&point) {
            out.push(point);
        }
    }

    out
}
