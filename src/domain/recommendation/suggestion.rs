//! Raw suggestions from an untrusted recommendation source.

use serde::{Deserialize, Serialize};

/// Unvalidated `(model, reason)` pair.
///
/// Nothing about `model` is trusted: it may carry trailing punctuation,
/// be abbreviated, empty, or name a model that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSuggestion {
    pub model: String,
    pub reason: String,
}

impl RawSuggestion {
    pub fn new(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// The model name with stray periods removed.
    pub fn sanitized_model(&self) -> String {
        sanitize_model_name(&self.model)
    }
}

/// Strips literal period characters from a suggested model name.
///
/// This is a string transform only; membership in the catalog is checked
/// separately. Idempotent.
pub fn sanitize_model_name(name: &str) -> String {
    name.replace('.', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_trailing_period() {
        assert_eq!(sanitize_model_name("C-Class."), "C-Class");
    }

    #[test]
    fn leaves_clean_names_alone() {
        assert_eq!(sanitize_model_name("C-Class"), "C-Class");
        assert_eq!(sanitize_model_name("AMG GT"), "AMG GT");
    }

    #[test]
    fn strips_every_period() {
        assert_eq!(sanitize_model_name("G.L.C.."), "GLC");
        assert_eq!(sanitize_model_name("..."), "");
    }

    #[test]
    fn does_not_touch_case_or_other_punctuation() {
        assert_eq!(sanitize_model_name("c-class!"), "c-class!");
    }

    #[test]
    fn raw_suggestion_sanitizes_model_only() {
        let s = RawSuggestion::new("E-Class.", "Great for commuting.");
        assert_eq!(s.sanitized_model(), "E-Class");
        assert_eq!(s.reason, "Great for commuting.");
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(name in ".*") {
            let once = sanitize_model_name(&name);
            prop_assert_eq!(sanitize_model_name(&once), once.clone());
            prop_assert!(!once.contains('.'));
        }
    }
}
