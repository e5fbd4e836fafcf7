//! Lexical signal extraction
//!
//! Turns raw text blobs into categorized token counts:
//! - `code` - imports, class/function declarations, member access
//! - `readme` - title, description, model and tool mentions
//! - `config_keys` - flattened config keys classified as env vars, models, tools
//! - `tokenizer` - identifier splitting and token normalization
//! - `counter` - first-seen-ordered frequency tables
//! - `analyze` - walks a local checkout and runs all of the above

pub mod analyze;
pub mod code;
pub mod config_keys;
mod counter;
pub mod readme;
pub mod tokenizer;

pub use analyze::{analyze_local_repo, RepoAnalysis};
pub use code::{accumulate_code, extract_code_tokens, CodeTokens};
pub use config_keys::{flatten, ConfigCollector, ConfigFormat};
pub use counter::FrequencyTable;
pub use readme::extract_readme_info;
pub use tokenizer::{normalize_token, title_case, tokenize_identifier};
