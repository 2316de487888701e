//! The fixed, ordered catalog of recognized curve families.
//!
//! Order is part of the contract: the matcher returns the first descriptor whose
//! pattern matches, so the bare linear form `y = Cx` is listed last where it cannot
//! shadow `y = Cx^2`, `y = Cx^3` and the function forms.

mod derivations;
mod generators;

use crate::sampler::Curve;
use crate::traits::CurveFamily;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One variant per cataloged family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyKind {
    Circles,
    Parabolas,
    Hyperbolas,
    Exponentials,
    HorizontalParabolas,
    Logarithms,
    Cubics,
    Sines,
    Lines,
}

impl FamilyKind {
    /// All kinds in matching priority order.
    pub const ALL: [FamilyKind; 9] = [
        FamilyKind::Circles,
        FamilyKind::Parabolas,
        FamilyKind::Hyperbolas,
        FamilyKind::Exponentials,
        FamilyKind::HorizontalParabolas,
        FamilyKind::Logarithms,
        FamilyKind::Cubics,
        FamilyKind::Sines,
        FamilyKind::Lines,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FamilyKind::Circles => "Circles centered at origin",
            FamilyKind::Parabolas => "Parabolas",
            FamilyKind::Hyperbolas => "Rectangular hyperbolas",
            FamilyKind::Exponentials => "Exponential curves",
            FamilyKind::HorizontalParabolas => "Horizontal parabolas",
            FamilyKind::Logarithms => "Logarithmic curves",
            FamilyKind::Cubics => "Cubic curves",
            FamilyKind::Sines => "Sine curves",
            FamilyKind::Lines => "Straight lines through origin",
        }
    }

    /// Recognition pattern, matched case-insensitively anywhere in the
    /// whitespace-normalized input. `²`/`³` are accepted for `^2`/`^3`.
    fn pattern(self) -> &'static str {
        match self {
            FamilyKind::Circles => {
                r"(?i)x(?:²|\^?2?)\s*\+\s*y(?:²|\^?2?)\s*=\s*c|y(?:²|\^?2?)\s*\+\s*x(?:²|\^?2?)\s*=\s*c"
            }
            FamilyKind::Parabolas => r"(?i)y\s*=\s*c\s*[*·]?\s*x\s*(?:\^?\s*2|²)",
            FamilyKind::Hyperbolas => r"(?i)x\s*[*·]?\s*y\s*=\s*c",
            FamilyKind::Exponentials => {
                r"(?i)y\s*=\s*c\s*[*·]?\s*(?:e\s*\^?\s*\(?\s*x\s*\)?|exp\s*\(\s*x\s*\))"
            }
            FamilyKind::HorizontalParabolas => r"(?i)y\s*(?:\^?\s*2|²)\s*=\s*c\s*[*·]?\s*x",
            FamilyKind::Logarithms => r"(?i)y\s*=\s*c\s*[*·]?\s*(?:ln|log)\s*\(?\s*x\s*\)?",
            FamilyKind::Cubics => r"(?i)y\s*=\s*c\s*[*·]?\s*x\s*(?:\^?\s*3|³)",
            FamilyKind::Sines => r"(?i)y\s*=\s*c\s*[*·]?\s*sin\s*\(?\s*x\s*\)?",
            // `x` must not be followed directly by an exponent, with or without a caret.
            FamilyKind::Lines => r"(?i)y\s*=\s*c\s*[*·]?\s*x(?:[^\^²³0-9]|$)",
        }
    }

    fn original_label(self) -> &'static str {
        match self {
            FamilyKind::Circles => "x² + y² = C",
            FamilyKind::Parabolas => "y = Cx²",
            FamilyKind::Hyperbolas => "xy = C",
            FamilyKind::Exponentials => "y = Ce^x",
            FamilyKind::HorizontalParabolas => "y² = Cx",
            FamilyKind::Logarithms => "y = C·ln(x)",
            FamilyKind::Cubics => "y = Cx³",
            FamilyKind::Sines => "y = C·sin(x)",
            FamilyKind::Lines => "y = Cx",
        }
    }

    fn orthogonal_label(self) -> &'static str {
        match self {
            FamilyKind::Circles => "y = kx (straight lines through origin)",
            FamilyKind::Parabolas => "x² + 2y² = k (ellipses)",
            FamilyKind::Hyperbolas => "x² - y² = k",
            FamilyKind::Exponentials => "y² + 2x = k (parabolas)",
            FamilyKind::HorizontalParabolas => "2x² + y² = k (ellipses)",
            FamilyKind::Logarithms => "y² + x²ln(x) = k",
            FamilyKind::Cubics => "x² + 3y² = k (ellipses)",
            FamilyKind::Sines => "y² = 2ln|cos(x)| + k",
            FamilyKind::Lines => "x² + y² = k (circles)",
        }
    }

    fn steps(self) -> &'static [&'static str] {
        match self {
            FamilyKind::Circles => derivations::CIRCLES,
            FamilyKind::Parabolas => derivations::PARABOLAS,
            FamilyKind::Hyperbolas => derivations::HYPERBOLAS,
            FamilyKind::Exponentials => derivations::EXPONENTIALS,
            FamilyKind::HorizontalParabolas => derivations::HORIZONTAL_PARABOLAS,
            FamilyKind::Logarithms => derivations::LOGARITHMS,
            FamilyKind::Cubics => derivations::CUBICS,
            FamilyKind::Sines => derivations::SINES,
            FamilyKind::Lines => derivations::LINES,
        }
    }

    pub fn generate_original(self, params: &[f64]) -> Vec<Curve> {
        match self {
            FamilyKind::Circles => generators::circles_original(params),
            FamilyKind::Parabolas => generators::parabolas_original(params),
            FamilyKind::Hyperbolas => generators::hyperbolas_original(params),
            FamilyKind::Exponentials => generators::exponentials_original(params),
            FamilyKind::HorizontalParabolas => generators::horizontal_parabolas_original(params),
            FamilyKind::Logarithms => generators::logarithms_original(params),
            FamilyKind::Cubics => generators::cubics_original(params),
            FamilyKind::Sines => generators::sines_original(params),
            FamilyKind::Lines => generators::lines_original(params),
        }
    }

    pub fn generate_orthogonal(self, params: &[f64]) -> Vec<Curve> {
        match self {
            FamilyKind::Circles => generators::circles_orthogonal(params),
            FamilyKind::Parabolas => generators::parabolas_orthogonal(params),
            FamilyKind::Hyperbolas => generators::hyperbolas_orthogonal(params),
            FamilyKind::Exponentials => generators::exponentials_orthogonal(params),
            FamilyKind::HorizontalParabolas => {
                generators::horizontal_parabolas_orthogonal(params)
            }
            FamilyKind::Logarithms => generators::logarithms_orthogonal(params),
            FamilyKind::Cubics => generators::cubics_orthogonal(params),
            FamilyKind::Sines => generators::sines_orthogonal(params),
            FamilyKind::Lines => generators::lines_orthogonal(params),
        }
    }
}

/// Immutable description of a cataloged family.
#[derive(Debug)]
pub struct FamilyDescriptor {
    pub kind: FamilyKind,
    pub name: &'static str,
    pub original: &'static str,
    pub orthogonal: &'static str,
    pub steps: &'static [&'static str],
    pattern: Regex,
}

impl FamilyDescriptor {
    fn new(kind: FamilyKind) -> Self {
        Self {
            kind,
            name: kind.name(),
            original: kind.original_label(),
            orthogonal: kind.orthogonal_label(),
            steps: kind.steps(),
            pattern: Regex::new(kind.pattern()).expect("catalog pattern must compile"),
        }
    }
}

impl CurveFamily for FamilyDescriptor {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, equation: &str) -> bool {
        self.pattern.is_match(equation)
    }

    fn original_label(&self) -> &'static str {
        self.original
    }

    fn orthogonal_label(&self) -> &'static str {
        self.orthogonal
    }

    fn steps(&self) -> &'static [&'static str] {
        self.steps
    }

    fn sample_original(&self, params: &[f64]) -> Vec<Curve> {
        self.kind.generate_original(params)
    }

    fn sample_orthogonal(&self, params: &[f64]) -> Vec<Curve> {
        self.kind.generate_orthogonal(params)
    }
}

static CATALOG: OnceLock<Vec<FamilyDescriptor>> = OnceLock::new();

/// The process-wide catalog, built on first use.
pub fn catalog() -> &'static [FamilyDescriptor] {
    CATALOG.get_or_init(|| FamilyKind::ALL.into_iter().map(FamilyDescriptor::new).collect())
}

/// Looks up the descriptor for a specific kind.
pub fn descriptor(kind: FamilyKind) -> &'static FamilyDescriptor {
    // The catalog is built from `FamilyKind::ALL`, which follows declaration order.
    &catalog()[kind as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_kind_in_priority_order() {
        let kinds: Vec<FamilyKind> = catalog().iter().map(|d| d.kind).collect();
        assert_eq!(kinds, FamilyKind::ALL.to_vec());
        assert_eq!(catalog().last().map(|d| d.kind), Some(FamilyKind::Lines));
    }

    #[test]
    fn descriptor_lookup_returns_matching_kind() {
        for kind in FamilyKind::ALL {
            assert_eq!(descriptor(kind).kind, kind);
        }
    }

    #[test]
    fn every_family_has_boxed_final_step() {
        for family in catalog() {
            assert!(!family.steps().is_empty(), "{} has no steps", family.name());
            let last = family.steps().last().copied().unwrap_or_default();
            assert!(last.contains(r"\boxed{"), "{} final step is not boxed", family.name());
            assert!(family.steps()[0].starts_with(r"\text{Given family: }"));
        }
    }

    #[test]
    fn every_pattern_matches_its_own_label() {
        for family in catalog() {
            assert!(
                family.matches(family.original_label()),
                "{} does not match {}",
                family.name(),
                family.original_label()
            );
        }
    }

    #[test]
    fn linear_pattern_rejects_exponents() {
        let lines = descriptor(FamilyKind::Lines);
        assert!(lines.matches("y = Cx"));
        assert!(lines.matches("y = C*x + 1"));
        assert!(!lines.matches("y = Cx^2"));
        assert!(!lines.matches("y = Cx³"));
        assert!(!lines.matches("y = Cx2"));
        assert!(!lines.matches("y = Cx3"));
    }

    #[test]
    fn exponential_label_names_parabolic_trajectories() {
        assert_eq!(
            descriptor(FamilyKind::Exponentials).orthogonal_label(),
            "y² + 2x = k (parabolas)"
        );
    }

    #[test]
    fn descriptor_generators_delegate_to_kind() {
        let circles = descriptor(FamilyKind::Circles);
        let original = circles.sample_original(&[1.0, 4.0]);
        assert_eq!(original.len(), 2);
        let orthogonal = circles.sample_orthogonal(&[1.0, 4.0, 9.0]);
        assert_eq!(orthogonal.len(), 3);
    }
}
