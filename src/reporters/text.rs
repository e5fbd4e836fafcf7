//! Text (terminal) reporter for classification results

use crate::models::ClassificationResult;
use console::style;
use std::collections::BTreeSet;
use std::fmt::Write;

fn join(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        return style("-").dim().to_string();
    }
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Render a classification result as formatted terminal output
pub fn render(result: &ClassificationResult) -> String {
    let mut out = String::new();

    let verdict = if result.is_agentic {
        style("agentic").green().bold()
    } else {
        style("not agentic").yellow().bold()
    };
    let _ = writeln!(out, "\n{}", style("Agentic Classification").bold());
    let _ = writeln!(out, "{}", style("──────────────────────────────────────").dim());
    let _ = writeln!(
        out,
        "Verdict: {}  Confidence: {}\n",
        verdict,
        style(format!("{:.3}", result.confidence)).bold()
    );

    let _ = writeln!(out, "  Frameworks: {}", join(&result.frameworks));
    let _ = writeln!(out, "  SDKs:       {}", join(&result.sdks));
    let _ = writeln!(out, "  Tools:      {}", join(&result.tools));
    let _ = writeln!(out, "  Languages:  {}", join(&result.languages));

    let matched: Vec<_> = result
        .keywords_matched
        .iter()
        .filter(|(_, hits)| !hits.is_empty())
        .collect();
    if !matched.is_empty() {
        let _ = writeln!(out, "\n{}", style("MATCHES").bold());
        for (label, hits) in matched {
            let distinct: BTreeSet<&str> = hits.iter().map(String::as_str).collect();
            let _ = writeln!(
                out,
                "  {:<20} {} {}",
                label,
                distinct.into_iter().collect::<Vec<_>>().join(", "),
                style(format!("({} hits)", hits.len())).dim()
            );
        }
    }

    out
}
