use crate::sampler::{Curve, SamplePoint};

/// A function from a curve parameter `t` and a family constant to a point.
///
/// Returning `None` means the curve has no point at this `t` (division by zero,
/// negative square-root argument, ...). That is distinct from a point that exists
/// but falls outside the sampling window.
pub trait ParametricCurve {
    fn point(&self, t: f64, param: f64) -> Option<SamplePoint>;
}

impl<F> ParametricCurve for F
where
    F: Fn(f64, f64) -> Option<SamplePoint>,
{
    fn point(&self, t: f64, param: f64) -> Option<SamplePoint> {
        self(t, param)
    }
}

/// A recognizable curve family together with its orthogonal trajectories.
pub trait CurveFamily {
    /// Diagnostic name of the family.
    fn name(&self) -> &'static str;

    /// Returns true if the (normalized) equation text denotes this family.
    fn matches(&self, equation: &str) -> bool;

    /// Display label of the original family, e.g. `x² + y² = C`.
    fn original_label(&self) -> &'static str;

    /// Display label of the orthogonal family.
    fn orthogonal_label(&self) -> &'static str;

    /// Derivation steps in TeX markup, passed through verbatim.
    fn steps(&self) -> &'static [&'static str];

    /// Samples one or more curves of the original family per constant.
    fn sample_original(&self, params: &[f64]) -> Vec<Curve>;

    /// Samples one or more orthogonal trajectories per constant.
    fn sample_orthogonal(&self, params: &[f64]) -> Vec<Curve>;
}
