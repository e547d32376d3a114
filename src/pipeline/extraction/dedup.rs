use std::collections::HashSet;

use url::Url;

use crate::pipeline::classify::ClassifiedLink;

/// Comparison key for "same URL": scheme and host are case-insensitive and
/// ignore a `www.` prefix, trailing slashes on the path are ignored. Path,
/// query and fragment keep their case. The stored URL keeps its original
/// spelling.
pub fn dedup_key(url: &str) -> String {
    let trimmed = url.trim();
    let Ok(parsed) = Url::parse(trimmed) else {
        return trimmed.trim_end_matches('/').to_string();
    };

    let host = parsed.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);

    let mut key = format!("{}://{}", parsed.scheme(), host);
    if let Some(port) = parsed.port() {
        key.push_str(&format!(":{port}"));
    }
    key.push_str(parsed.path().trim_end_matches('/'));
    if let Some(query) = parsed.query() {
        key.push('?');
        key.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        key.push('#');
        key.push_str(fragment);
    }
    key
}

/// Drop links whose normalized URL was already kept. First occurrence wins,
/// so earlier (higher-precision) sources take precedence.
pub fn dedup_links(links: Vec<ClassifiedLink>) -> Vec<ClassifiedLink> {
    let mut seen = HashSet::new();
    let before = links.len();

    let kept: Vec<ClassifiedLink> = links
        .into_iter()
        .filter(|link| seen.insert(dedup_key(&link.url)))
        .collect();

    if kept.len() < before {
        tracing::debug!(dropped = before - kept.len(), "Removed duplicate links");
    }

    kept
}
