//! Closed-form samplers for each cataloged family and its orthogonal trajectories.
//!
//! Every generator maps a slice of family constants to curves. Most emit one curve
//! per constant; multi-valued relations (hyperbola sheets, `±√` branches) emit two.

use crate::sampler::{sample, Curve, SamplePoint};
use std::f64::consts::TAU;
use tracing::debug;

fn point(x: f64, y: f64) -> Option<SamplePoint> {
    Some(SamplePoint::new(x, y))
}

/// Full ellipse `x = a cos t, y = b sin t` for `x²/a² + y²/b² = 1`.
fn ellipse(a: f64, b: f64, k: f64) -> Curve {
    sample(&|t: f64, _k: f64| point(a * t.cos(), b * t.sin()), k, 0.0, TAU)
}

/// Ellipse `x² + n·y² = k`, or an empty curve when `k <= 0`.
fn ellipse_family(params: &[f64], n: f64, family: &str) -> Vec<Curve> {
    params
        .iter()
        .map(|&k| {
            if k <= 0.0 {
                debug!(family, k, "skipping non-positive ellipse constant");
                return Curve::default();
            }
            ellipse(k.sqrt(), (k / n).sqrt(), k)
        })
        .collect()
}

// --- Circles x² + y² = C ---

pub(crate) fn circles_original(params: &[f64]) -> Vec<Curve> {
    params
        .iter()
        .map(|&c| {
            let r = c.abs().sqrt();
            sample(&|t: f64, _c: f64| point(r * t.cos(), r * t.sin()), c, 0.0, TAU)
        })
        .collect()
}

pub(crate) fn circles_orthogonal(params: &[f64]) -> Vec<Curve> {
    params
        .iter()
        .map(|&k| sample(&|t: f64, k: f64| point(t, k * t), k, -10.0, 10.0))
        .collect()
}

// --- Parabolas y = Cx² ---

pub(crate) fn parabolas_original(params: &[f64]) -> Vec<Curve> {
    params
        .iter()
        .map(|&c| sample(&|t: f64, c: f64| point(t, c * t * t), c, -5.0, 5.0))
        .collect()
}

pub(crate) fn parabolas_orthogonal(params: &[f64]) -> Vec<Curve> {
    ellipse_family(params, 2.0, "parabolas")
}

// --- Rectangular hyperbolas xy = C ---

fn hyperbola_point(t: f64, c: f64) -> Option<SamplePoint> {
    if t == 0.0 {
        return None;
    }
    point(t, c / t)
}

pub(crate) fn hyperbolas_original(params: &[f64]) -> Vec<Curve> {
    let mut curves = Vec::with_capacity(params.len() * 2);
    for &c in params {
        if c == 0.0 {
            debug!(c, "skipping degenerate hyperbola constant");
            continue;
        }
        curves.push(sample(&hyperbola_point, c, 0.1, 10.0));
        curves.push(sample(&hyperbola_point, c, -10.0, -0.1));
    }
    curves
}

pub(crate) fn hyperbolas_orthogonal(params: &[f64]) -> Vec<Curve> {
    let mut curves = Vec::with_capacity(params.len() * 2);
    for &k in params {
        let a = k.abs().sqrt();
        if k > 0.0 {
            // x² - y² = k opens along the x axis.
            curves.push(sample(
                &|t: f64, _k: f64| point(a * t.cosh(), a * t.sinh()),
                k,
                -2.0,
                2.0,
            ));
            curves.push(sample(
                &|t: f64, _k: f64| point(-a * t.cosh(), a * t.sinh()),
                k,
                -2.0,
                2.0,
            ));
        } else if k < 0.0 {
            curves.push(sample(
                &|t: f64, _k: f64| point(a * t.sinh(), a * t.cosh()),
                k,
                -2.0,
                2.0,
            ));
            curves.push(sample(
                &|t: f64, _k: f64| point(a * t.sinh(), -a * t.cosh()),
                k,
                -2.0,
                2.0,
            ));
        } else {
            debug!(k, "skipping degenerate orthogonal hyperbola constant");
        }
    }
    curves
}

// --- Exponential curves y = Ceˣ ---

pub(crate) fn exponentials_original(params: &[f64]) -> Vec<Curve> {
    params
        .iter()
        .map(|&c| sample(&|t: f64, c: f64| point(t, c * t.exp()), c, -3.0, 3.0))
        .collect()
}

/// One branch `y = sign·√(k - 2x)` of `y² + 2x = k`.
fn exponential_trajectory(k: f64, sign: f64) -> Curve {
    sample(
        &|t: f64, k: f64| {
            let val = k - 2.0 * t;
            if val < 0.0 {
                return None;
            }
            point(t, sign * val.sqrt())
        },
        k,
        -10.0,
        k / 2.0,
    )
}

pub(crate) fn exponentials_orthogonal(params: &[f64]) -> Vec<Curve> {
    // Upper branches for every constant first, then the lower ones.
    let upper = params.iter().map(|&k| exponential_trajectory(k, 1.0));
    let lower = params.iter().map(|&k| exponential_trajectory(k, -1.0));
    upper.chain(lower).collect()
}

// --- Horizontal parabolas y² = Cx ---

pub(crate) fn horizontal_parabolas_original(params: &[f64]) -> Vec<Curve> {
    let mut curves = Vec::with_capacity(params.len() * 2);
    for &c in params {
        // The parabola opens toward the sign of C.
        let side = c.signum();
        let magnitude = c.abs();
        for sign in [1.0, -1.0] {
            curves.push(sample(
                &|t: f64, _c: f64| point(side * t, sign * (magnitude * t.abs()).sqrt()),
                c,
                0.01,
                10.0,
            ));
        }
    }
    curves
}

pub(crate) fn horizontal_parabolas_orthogonal(params: &[f64]) -> Vec<Curve> {
    params
        .iter()
        .map(|&k| {
            if k <= 0.0 {
                debug!(k, "skipping non-positive ellipse constant");
                return Curve::default();
            }
            // 2x² + y² = k
            ellipse((k / 2.0).sqrt(), k.sqrt(), k)
        })
        .collect()
}

// --- Logarithmic curves y = C ln x ---

pub(crate) fn logarithms_original(params: &[f64]) -> Vec<Curve> {
    params
        .iter()
        .map(|&c| sample(&|t: f64, c: f64| point(t, c * t.ln()), c, 0.1, 10.0))
        .collect()
}

/// Rendered as the `x² + 2y² = k` ellipse, not the derived relation.
pub(crate) fn logarithms_orthogonal(params: &[f64]) -> Vec<Curve> {
    ellipse_family(params, 2.0, "logarithms")
}

// --- Cubic curves y = Cx³ ---

pub(crate) fn cubics_original(params: &[f64]) -> Vec<Curve> {
    params
        .iter()
        .map(|&c| sample(&|t: f64, c: f64| point(t, c * t.powi(3)), c, -3.0, 3.0))
        .collect()
}

pub(crate) fn cubics_orthogonal(params: &[f64]) -> Vec<Curve> {
    ellipse_family(params, 3.0, "cubics")
}

// --- Sine curves y = C sin x ---

pub(crate) fn sines_original(params: &[f64]) -> Vec<Curve> {
    params
        .iter()
        .map(|&c| sample(&|t: f64, c: f64| point(t, c * t.sin()), c, -TAU, TAU))
        .collect()
}

/// One branch `y = sign·√(2 ln|cos x| + k)`, defined where `cos x > 0`.
fn sine_trajectory(k: f64, sign: f64) -> Curve {
    sample(
        &|t: f64, k: f64| {
            let cos = t.cos();
            if cos <= 0.0 {
                return None;
            }
            let val = 2.0 * cos.ln() + k;
            if val < 0.0 {
                return None;
            }
            point(t, sign * val.sqrt())
        },
        k,
        -1.5,
        1.5,
    )
}

pub(crate) fn sines_orthogonal(params: &[f64]) -> Vec<Curve> {
    let mut curves = Vec::with_capacity(params.len() * 2);
    for &k in params {
        curves.push(sine_trajectory(k, 1.0));
        curves.push(sine_trajectory(k, -1.0));
    }
    curves
}

// --- Straight lines through the origin y = Cx ---

pub(crate) fn lines_original(params: &[f64]) -> Vec<Curve> {
    params
        .iter()
        .map(|&c| sample(&|t: f64, c: f64| point(t, c * t), c, -10.0, 10.0))
        .collect()
}

pub(crate) fn lines_orthogonal(params: &[f64]) -> Vec<Curve> {
    params
        .iter()
        .map(|&k| {
            if k <= 0.0 {
                debug!(k, "skipping non-positive circle constant");
                return Curve::default();
            }
            let r = k.sqrt();
            sample(&|t: f64, _k: f64| point(r * t.cos(), r * t.sin()), k, 0.0, TAU)
        })
        .collect()
}
