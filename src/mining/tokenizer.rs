//! Identifier tokenization and raw-token normalization

/// Split a compound identifier into lowercase word fragments.
///
/// Handles camel case, snake case and acronyms: `HTTPClientFactory`
/// yields `http`, `client`, `factory`. A fragment is either an optional
/// capital followed by lowercase letters, or a run of capitals not followed
/// by a lowercase letter. Single-letter fragments are dropped.
pub fn tokenize_identifier(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut parts = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());

        let end = if c.is_ascii_lowercase() || (c.is_ascii_uppercase() && next_lower) {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_ascii_lowercase() {
                j += 1;
            }
            j
        } else if c.is_ascii_uppercase() {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_ascii_uppercase() {
                j += 1;
            }
            // Leave the last capital for the word it starts
            if chars.get(j).is_some_and(|n| n.is_ascii_lowercase()) {
                j - 1
            } else {
                j
            }
        } else {
            i += 1;
            continue;
        };

        if end - i > 1 {
            let fragment: String = chars[i..end].iter().collect();
            parts.push(fragment.to_ascii_lowercase());
        }
        i = end;
    }

    parts
}

/// Strip everything but ASCII alphanumerics and underscores, then lowercase.
pub fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Title-case each alphabetic run: first letter upper, the rest lower.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;
    for c in raw.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
