//! The `trajectory_core` crate provides the computational engine behind the
//! orthogonal trajectory and carbon footprint calculators.
//!
//! Key components:
//! - **Traits**: `ParametricCurve` (per-point functions) and `CurveFamily` (a cataloged family).
//! - **Sampler**: bounded, windowed sampling of parametric curves.
//! - **Catalog**: the fixed, ordered list of recognized curve families with their generators.
//! - **Matcher**: first-match classification of free-text equations against the catalog.
//! - **Trajectory**: the match-and-generate pipeline consumed by the UI layer.
//! - **Emissions**: linear emission-factor arithmetic and saving tips.

pub mod catalog;
pub mod emissions;
pub mod error;
pub mod matcher;
pub mod params;
pub mod sampler;
pub mod traits;
pub mod trajectory;
