//! Agentic classification
//!
//! - `vocabulary` - learned keyword tables with built-in fallbacks
//! - `scorer` - compiled matchers, confidence scoring and regex export

mod scorer;
mod vocabulary;

pub use scorer::{compute_confidence, Classifier, AGENTIC_KEYWORDS, FRAMEWORK_THRESHOLD};
pub use vocabulary::{default_frameworks, Vocabulary, DEFAULT_AGENTIC_KEYWORDS};
