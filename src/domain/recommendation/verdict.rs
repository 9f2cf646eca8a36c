//! Validation of a raw suggestion against the catalog.

use super::{ModelCatalog, RawSuggestion, ResolvedRecommendation};

/// Outcome of checking a suggestion that did arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionVerdict {
    /// Sanitized model is a catalog member; reason passes through verbatim.
    Accepted(ResolvedRecommendation),
    /// Model is outside the catalog even after sanitizing.
    Mismatch { raw_model: String },
}

/// Sanitizes the suggested model name and checks catalog membership.
pub fn validate_suggestion(suggestion: RawSuggestion, catalog: &ModelCatalog) -> SuggestionVerdict {
    let model = suggestion.sanitized_model();
    if catalog.contains(&model) {
        SuggestionVerdict::Accepted(ResolvedRecommendation::recommended(model, suggestion.reason))
    } else {
        SuggestionVerdict::Mismatch {
            raw_model: suggestion.model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ModelCatalog {
        ModelCatalog::builtin().unwrap()
    }

    #[test]
    fn accepts_sanitized_catalog_member() {
        let verdict = validate_suggestion(
            RawSuggestion::new("C-Class.", "fits city driving"),
            &catalog(),
        );
        assert_eq!(
            verdict,
            SuggestionVerdict::Accepted(ResolvedRecommendation::recommended(
                "C-Class",
                "fits city driving"
            ))
        );
    }

    #[test]
    fn reason_is_passed_through_untouched() {
        let reason = "  <b>Fast.</b> Really fast.  ";
        match validate_suggestion(RawSuggestion::new("AMG GT", reason), &catalog()) {
            SuggestionVerdict::Accepted(r) => assert_eq!(r.reason, reason),
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_model() {
        let verdict = validate_suggestion(RawSuggestion::new("Maybach S-Class", "..."), &catalog());
        assert_eq!(
            verdict,
            SuggestionVerdict::Mismatch {
                raw_model: "Maybach S-Class".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_model() {
        let verdict = validate_suggestion(RawSuggestion::new("", "no idea"), &catalog());
        assert!(matches!(verdict, SuggestionVerdict::Mismatch { .. }));
    }

    #[test]
    fn rejects_case_mismatch() {
        let verdict = validate_suggestion(RawSuggestion::new("c-class", "lowercase"), &catalog());
        assert!(matches!(verdict, SuggestionVerdict::Mismatch { .. }));
    }
}
