//! Link extraction from HTML pages

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HREF_RE: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Prefixes of links that never resolve to a page of the corpus
const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "ftp://", "//"];

/// Extract the anchor targets of an HTML page.
///
/// Targets are resolved against the directory of `source_page` and
/// returned in document order, duplicates included.
pub fn extract_links(content: &str, source_page: &str) -> Vec<String> {
    let mut links = Vec::new();

    for cap in HREF_RE.captures_iter(content) {
        let Some(target) = cap.get(1) else {
            continue;
        };
        let target_str = target.as_str().trim();

        if target_str.is_empty() || target_str.starts_with('#') {
            continue;
        }

        if EXTERNAL_PREFIXES.iter().any(|p| target_str.starts_with(p)) {
            continue;
        }

        let target_str = strip_suffixes(target_str);
        if target_str.is_empty() {
            continue;
        }

        if let Some(resolved) = resolve_link(target_str, source_page) {
            links.push(resolved);
        }
    }

    links
}

/// Drop `#fragment` and `?query` parts
fn strip_suffixes(target: &str) -> &str {
    let end = target.find(['#', '?']).unwrap_or(target.len());
    &target[..end]
}

/// Resolve `target` relative to the directory holding `source_page`.
///
/// Returns `None` when the target climbs above the corpus root.
fn resolve_link(target: &str, source_page: &str) -> Option<String> {
    let mut segments: Vec<&str> = if target.starts_with('/') {
        Vec::new()
    } else {
        let mut dir: Vec<&str> = source_page.split('/').collect();
        dir.pop();
        dir
    };

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            _ => segments.push(segment),
        }
    }

    Some(segments.join("/"))
}
