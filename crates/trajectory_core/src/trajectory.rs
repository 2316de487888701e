//! Match-and-generate pipeline: equation text in, plottable curve sets out.

use crate::catalog::{FamilyDescriptor, FamilyKind};
use crate::error::TrajectoryError;
use crate::matcher::{find_matching_family, normalize_equation, UNRECOGNIZED_HINT};
use crate::params::DefaultParams;
use crate::sampler::Curve;
use crate::traits::CurveFamily;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the presentation layer needs for one matched equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPlot {
    pub kind: FamilyKind,
    pub name: String,
    pub original: String,
    pub orthogonal: String,
    pub steps: Vec<String>,
    pub original_curves: Vec<Curve>,
    pub orthogonal_curves: Vec<Curve>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveRole {
    Original,
    Orthogonal,
}

/// A single non-empty curve tagged for color and legend assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotTrace {
    pub role: CurveRole,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Set only for the trace built from the first curve of its role. When that
    /// curve is empty the role gets no legend entry.
    pub show_legend: bool,
}

impl TrajectoryPlot {
    pub fn from_family(family: &FamilyDescriptor, params: &DefaultParams) -> Self {
        Self {
            kind: family.kind,
            name: family.name().to_string(),
            original: family.original_label().to_string(),
            orthogonal: family.orthogonal_label().to_string(),
            steps: family.steps().iter().map(|s| s.to_string()).collect(),
            original_curves: family.sample_original(&params.original),
            orthogonal_curves: family.sample_orthogonal(&params.orthogonal),
        }
    }

    /// Flattens both curve sets into traces, original first, dropping empty curves.
    pub fn traces(&self) -> Vec<PlotTrace> {
        let mut traces = Vec::new();
        for (role, curves) in [
            (CurveRole::Original, &self.original_curves),
            (CurveRole::Orthogonal, &self.orthogonal_curves),
        ] {
            for (index, curve) in curves.iter().enumerate() {
                if curve.is_empty() {
                    continue;
                }
                traces.push(PlotTrace {
                    role,
                    x: curve.x.clone(),
                    y: curve.y.clone(),
                    show_legend: index == 0,
                });
            }
        }
        traces
    }

    pub fn point_count(&self) -> usize {
        self.original_curves
            .iter()
            .chain(self.orthogonal_curves.iter())
            .map(Curve::len)
            .sum()
    }
}

/// Matches `equation` against the catalog and samples both families.
pub fn solve(equation: &str, params: &DefaultParams) -> Result<TrajectoryPlot, TrajectoryError> {
    let family = find_matching_family(equation).ok_or_else(|| TrajectoryError::Unrecognized {
        equation: normalize_equation(equation),
        hint: UNRECOGNIZED_HINT,
    })?;
    let plot = TrajectoryPlot::from_family(family, params);
    debug!(
        family = family.name(),
        original_curves = plot.original_curves.len(),
        orthogonal_curves = plot.orthogonal_curves.len(),
        points = plot.point_count(),
        "generated trajectory plot"
    );
    Ok(plot)
}
