use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

// Greedy on purpose: the capture spans from the first single quote on the
// line to the last one, reproducing the manifest convention of one quoted
// name per dependency line. Lines with fewer than two quotes never match.
static DEP_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"'(.*)'").unwrap()
});

/// Scans script text line by line for dependency declarations and returns
/// the quoted names, lowercased and deduplicated.
///
/// This is a heuristic text scan, not a Lua parser: it has no awareness of
/// comments, string escaping, or declarations spanning multiple lines, and
/// double-quoted names are not recognized.
pub fn extract_dependencies(text: &str) -> BTreeSet<String> {
    let mut dependencies = BTreeSet::new();

    for line in text.lines() {
        let lower = line.to_lowercase();
        if !lower.contains("dependency") {
            continue;
        }

        if let Some(cap) = DEP_NAME_REGEX.captures(&lower) {
            if let Some(name) = cap.get(1) {
                dependencies.insert(name.as_str().to_string());
            }
        }
    }

    dependencies
}
