//! Recommendation domain - catalog, raw suggestions, and the fallback policy
//! that turns them into catalog-valid results.

mod catalog;
mod policy;
mod resolved;
mod suggestion;
mod verdict;

pub use catalog::{CatalogEntry, ModelCatalog};
pub use policy::{
    FallbackPolicy, DEFAULT_FAILURE_ERROR, DEFAULT_FAILURE_REASON, DEFAULT_MISMATCH_REASON,
    DEFAULT_MODEL,
};
pub use resolved::ResolvedRecommendation;
pub use suggestion::{sanitize_model_name, RawSuggestion};
pub use verdict::{validate_suggestion, SuggestionVerdict};
