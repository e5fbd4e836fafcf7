//! Per-provider feature summary as CSV
//!
//! One row per (provider, category, token) for the top tokens of each code
//! feature category. Fields are quoted only when they contain a comma, a
//! quote or a line break; rows end with CRLF.

use crate::models::ProfileDocument;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::Path;

pub const CSV_HEADER: [&str; 4] = ["Provider", "Feature_Type", "Feature_Name", "Frequency"];

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn push_row(out: &mut String, fields: &[&str]) {
    let row: Vec<Cow<'_, str>> = fields.iter().map(|f| escape(f)).collect();
    out.push_str(&row.join(","));
    out.push_str("\r\n");
}

/// Render the summary, keeping the `top_n` most frequent tokens per category.
pub fn render_summary_csv(doc: &ProfileDocument, top_n: usize) -> String {
    let mut out = String::new();
    push_row(&mut out, &CSV_HEADER);
    for (provider, profile) in doc {
        for (category, table) in profile.agent_profile.code_features.categories() {
            for (name, count) in table.most_common(top_n) {
                push_row(&mut out, &[provider.as_str(), category, &name, &count.to_string()]);
            }
        }
    }
    out
}

pub fn write_summary_csv(path: &Path, doc: &ProfileDocument, top_n: usize) -> Result<()> {
    std::fs::write(path, render_summary_csv(doc, top_n))
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProviderProfile;

    #[test]
    fn test_rows_follow_category_order() {
        let mut profile = ProviderProfile::default();
        let features = &mut profile.agent_profile.code_features;
        features.functions.add_n("run", 2);
        features.imports.add_n("os", 3);
        features.imports.add("crewai");
        features.apis.add("self");
        let mut doc = ProfileDocument::new();
        doc.insert("CrewAI".into(), profile);

        let csv = render_summary_csv(&doc, 50);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Provider,Feature_Type,Feature_Name,Frequency",
                "CrewAI,imports,os,3",
                "CrewAI,imports,crewai,1",
                "CrewAI,functions,run,2",
                "CrewAI,apis,self,1",
            ]
        );
        assert!(csv.ends_with("\r\n"));
    }

    #[test]
    fn test_top_n_per_category() {
        let mut profile = ProviderProfile::default();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            profile.agent_profile.code_features.classes.add_n(*name, 3 - i);
        }
        let mut doc = ProfileDocument::new();
        doc.insert("P".into(), profile);
        let csv = render_summary_csv(&doc, 2);
        assert_eq!(csv.lines().count(), 3);
        assert!(!csv.contains(",c,"));
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
