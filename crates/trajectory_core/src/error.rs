use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    #[error("{hint} (got \"{equation}\")")]
    Unrecognized { equation: String, hint: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmissionsError {
    #[error("Unknown fuel kind: {0}")]
    UnknownFuelKind(String),
    #[error("Unknown emission category: {0}")]
    UnknownCategory(String),
}
