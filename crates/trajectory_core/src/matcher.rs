//! Classification of free-text equations against the family catalog.

use crate::catalog::{catalog, FamilyDescriptor};
use crate::traits::CurveFamily;
use tracing::debug;

/// Input forms accepted for each cataloged family, in catalog order.
pub const EXAMPLE_EQUATIONS: [&str; 9] = [
    "x^2 + y^2 = C",
    "y = Cx^2",
    "xy = C",
    "y = Ce^x",
    "y^2 = Cx",
    "y = C*ln(x)",
    "y = Cx^3",
    "y = C*sin(x)",
    "y = Cx",
];

/// Guidance shown when an equation is not recognized.
pub const UNRECOGNIZED_HINT: &str =
    "Equation not recognized. Try: x^2 + y^2 = C, y = Cx^2, xy = C, y = Ce^x, or y = Cx";

/// Collapses whitespace runs to a single space and trims both ends.
pub fn normalize_equation(equation: &str) -> String {
    equation.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the first catalog entry whose pattern matches, or `None`.
pub fn find_matching_family(equation: &str) -> Option<&'static FamilyDescriptor> {
    let normalized = normalize_equation(equation);
    let found = catalog().iter().find(|family| family.matches(&normalized));
    match found {
        Some(family) => debug!(equation = %normalized, family = family.name(), "matched curve family"),
        None => debug!(equation = %normalized, "no curve family matched"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FamilyKind;

    fn kind_of(equation: &str) -> Option<FamilyKind> {
        find_matching_family(equation).map(|family| family.kind)
    }

    #[test]
    fn normalization_collapses_and_trims_whitespace() {
        assert_eq!(normalize_equation("  y  =\tC x \n"), "y = C x");
        assert_eq!(normalize_equation(""), "");
        assert_eq!(normalize_equation("   "), "");
    }

    #[test]
    fn examples_match_their_families_in_order() {
        for (example, kind) in EXAMPLE_EQUATIONS.iter().zip(FamilyKind::ALL) {
            assert_eq!(kind_of(example), Some(kind), "example {example}");
        }
    }

    #[test]
    fn display_labels_round_trip_to_same_family() {
        for family in catalog() {
            assert_eq!(
                kind_of(family.original_label()),
                Some(family.kind),
                "label {}",
                family.original_label()
            );
        }
    }

    #[test]
    fn empty_and_garbage_are_not_found() {
        assert!(find_matching_family("").is_none());
        assert!(find_matching_family("garbage").is_none());
        assert!(find_matching_family("y = 3x + 2").is_none());
    }

    #[test]
    fn specific_forms_win_over_bare_linear() {
        assert_eq!(kind_of("y = Cx^2"), Some(FamilyKind::Parabolas));
        assert_eq!(kind_of("y = Cx^3"), Some(FamilyKind::Cubics));
        assert_eq!(kind_of("y = Cx²"), Some(FamilyKind::Parabolas));
        assert_eq!(kind_of("y = Cx"), Some(FamilyKind::Lines));
    }

    #[test]
    fn matching_is_case_and_spacing_insensitive() {
        assert_eq!(kind_of("X^2+Y^2=c"), Some(FamilyKind::Circles));
        assert_eq!(kind_of("y^2 + x^2 = C"), Some(FamilyKind::Circles));
        assert_eq!(kind_of("x2 + y2 = C"), Some(FamilyKind::Circles));
        assert_eq!(kind_of("   y   =   C   x  "), Some(FamilyKind::Lines));
        assert_eq!(kind_of("XY=C"), Some(FamilyKind::Hyperbolas));
        assert_eq!(kind_of("y = Cx2"), Some(FamilyKind::Parabolas));
        assert_eq!(kind_of("y = Cx3"), Some(FamilyKind::Cubics));
        assert_eq!(kind_of("y2 = Cx"), Some(FamilyKind::HorizontalParabolas));
        assert_eq!(kind_of("Y = cX 2"), Some(FamilyKind::Parabolas));
    }

    #[test]
    fn function_forms_accept_common_spellings() {
        assert_eq!(kind_of("y = C ln x"), Some(FamilyKind::Logarithms));
        assert_eq!(kind_of("y = Cln(x)"), Some(FamilyKind::Logarithms));
        assert_eq!(kind_of("y = C sin x"), Some(FamilyKind::Sines));
        assert_eq!(kind_of("y = Ce^(x)"), Some(FamilyKind::Exponentials));
        assert_eq!(kind_of("y = C exp(x)"), Some(FamilyKind::Exponentials));
        assert_eq!(kind_of("y² = Cx"), Some(FamilyKind::HorizontalParabolas));
    }

    #[test]
    fn hint_lists_canonical_forms() {
        for form in ["x^2 + y^2 = C", "y = Cx^2", "xy = C", "y = Ce^x", "y = Cx"] {
            assert!(UNRECOGNIZED_HINT.contains(form));
        }
    }
}
