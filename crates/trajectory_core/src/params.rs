use serde::{Deserialize, Serialize};

/// Family constants plotted for the original curves and their trajectories.
///
/// The same values are used whichever family matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultParams {
    pub original: Vec<f64>,
    pub orthogonal: Vec<f64>,
}

impl Default for DefaultParams {
    fn default() -> Self {
        Self {
            original: vec![-4.0, -2.0, -1.0, 1.0, 2.0, 4.0],
            orthogonal: vec![1.0, 4.0, 9.0, 16.0, 25.0],
        }
    }
}
