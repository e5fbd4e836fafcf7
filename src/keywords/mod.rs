//! Vocabulary building from provider profiles
//!
//! - `global` - framework-agnostic semantic keywords from identifier fragments
//! - `framework` - per-framework keyword sets from tagged providers
//! - `aliases` - canonical framework display names

mod aliases;
mod framework;
mod global;

pub use aliases::{canonical_framework_name, normalize_frameworks};
pub use framework::{build_framework_keywords, FrameworkAggregator};
pub use global::build_global_keywords;
