//! Department mention extraction and link synthesis.

use crate::domain::catalog::{self, Department};

/// Scans response text for department mentions, in catalog order.
///
/// A department matches when its full name or its first
/// whitespace-delimited token occurs case-insensitively as a substring.
/// First-token matching is intentionally loose: "Leadership" alone is
/// enough to match the Leadership Team, and short tokens can over-match
/// incidental substrings of unrelated words.
pub fn mentioned_departments(text: &str, catalog: &'static [Department]) -> Vec<&'static Department> {
    let lowered = text.to_lowercase();

    catalog
        .iter()
        .filter(|department| {
            let name = department.name.to_lowercase();
            let first_token = name.split_whitespace().next().unwrap_or_default().to_owned();

            lowered.contains(&name) || lowered.contains(&first_token)
        })
        .collect()
}

/// Synthesizes one inline link per department name, concatenated with no
/// separator. Duplicates are dropped keeping first-occurrence order; names
/// that do not resolve in the catalog are silently skipped.
pub fn department_links(names: &[&str]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    let mut fragment = String::new();

    for name in names {
        if seen.contains(name) {
            continue;
        }
        seen.push(name);

        if let Some(department) = catalog::find(name) {
            fragment.push_str(&format!(
                "<a href=\"{}\" class=\"tool-link\" target=\"_blank\">{}</a>",
                department.link, department.name
            ));
        }
    }

    fragment
}

/// Appends the link fragment for all departments mentioned in `text`,
/// separated by a blank line. The text itself is never rewritten.
pub fn append_mention_links(text: &str) -> String {
    let mentioned = mentioned_departments(text, &catalog::CATALOG);
    if mentioned.is_empty() {
        return text.to_owned();
    }

    let names: Vec<&str> = mentioned.iter().map(|department| department.name).collect();
    format!("{}\n\n{}", text, department_links(&names))
}
