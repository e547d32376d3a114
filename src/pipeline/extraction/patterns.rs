//! URL pattern batteries for the text and binary strategies.
//!
//! Order matters: platform-specific patterns run first and the generic
//! catch-alls last, so a URL is collected in its most specific form before a
//! looser pattern can pick up a fragment of it.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::sanitize::clean_candidate;
use super::types::RawCandidate;

/// A compiled URL pattern with a label for logging.
pub struct LinkPattern {
    pub regex: Regex,
    pub label: &'static str,
}

/// Full battery for extracted plain text.
pub static TEXT_PATTERNS: LazyLock<Vec<LinkPattern>> = LazyLock::new(|| {
    vec![
        // Social platforms
        pattern(r"https?://(?:www\.)?github\.com/[\w.-]+(?:/[\w.-]+)?", "github"),
        pattern(r"https?://(?:www\.)?linkedin\.com/in/[\w.-]+", "linkedin"),
        pattern(r"https?://(?:www\.)?(?:twitter\.com|x\.com)/[\w.-]+", "twitter"),
        pattern(r"https?://(?:www\.)?instagram\.com/[\w.-]+", "instagram"),
        pattern(r"https?://(?:www\.)?facebook\.com/[\w.-]+", "facebook"),
        pattern(r"https?://(?:www\.)?youtube\.com/[\w./@-]+", "youtube"),
        pattern(r"https?://(?:www\.)?youtu\.be/[\w.-]+", "youtube"),
        // Deploy hosts
        pattern(
            r"https?://[\w.-]+\.(?:vercel\.app|netlify\.app|github\.io)(?:/[\w.-]*)?",
            "deploy host",
        ),
        pattern(
            r"https?://[\w.-]+\.(?:herokuapp\.com|railway\.app|onrender\.com|render\.com)(?:/[\w.-]*)?",
            "deploy host",
        ),
        pattern(
            r"https?://[\w.-]+\.(?:surge\.sh|firebase\.app|web\.app|fly\.dev)(?:/[\w.-]*)?",
            "deploy host",
        ),
        pattern(
            r"https?://[\w.-]+\.(?:cyclic\.app|deta\.dev|koyeb\.app)(?:/[\w.-]*)?",
            "deploy host",
        ),
        // Developer platforms
        pattern(r"https?://(?:www\.)?codeforces\.com/profile/[\w.-]+", "codeforces"),
        pattern(r"https?://(?:www\.)?beecrowd\.com\.br/[\w./-]+", "beecrowd"),
        pattern(r"https?://(?:judge\.)?beecrowd\.com/[\w./-]+", "beecrowd"),
        pattern(r"https?://(?:www\.)?leetcode\.com/[\w.-]+", "leetcode"),
        pattern(r"https?://(?:www\.)?codepen\.io/[\w.-]+", "codepen"),
        pattern(r"https?://(?:www\.)?stackoverflow\.com/users/[\w./-]+", "stackoverflow"),
        pattern(r"https?://(?:www\.)?dev\.to/[\w.-]+", "dev.to"),
        pattern(r"https?://(?:www\.)?medium\.com/[\w./@-]+", "medium"),
        // Repository hosts
        pattern(r"https?://(?:www\.)?github\.com/[\w.-]+/[\w.-]+", "repository"),
        pattern(r"https?://(?:www\.)?gitlab\.com/[\w.-]+/[\w.-]+", "repository"),
        pattern(r"https?://(?:www\.)?bitbucket\.org/[\w.-]+/[\w.-]+", "repository"),
        // Custom domains
        pattern(
            r"https?://[\w.-]+\.(?:com|org|net|io|dev|tech|app|co|me|xyz|live|site)(?:/[\w./-]*)?",
            "website",
        ),
        // Anything else over http(s)
        pattern(r"https?://[\w.-]+\.[\w.-]+(?:/[\w./-]*)?", "website"),
    ]
});

/// Reduced battery for raw bytes, where loose patterns mostly find noise.
pub static BINARY_PATTERNS: LazyLock<Vec<LinkPattern>> = LazyLock::new(|| {
    vec![
        pattern(r"https?://(?:www\.)?github\.com/[\w.-]+", "github"),
        pattern(r"https?://(?:www\.)?linkedin\.com/in/[\w.-]+", "linkedin"),
        pattern(r"https?://(?:www\.)?(?:twitter\.com|x\.com)/[\w.-]+", "twitter"),
        pattern(r"https?://[\w.-]+\.(?:vercel\.app|netlify\.app|github\.io)", "deploy host"),
        pattern(
            r"https?://[\w.-]+\.(?:herokuapp\.com|railway\.app|onrender\.com|render\.com)",
            "deploy host",
        ),
        pattern(r"https?://[\w.-]+\.(?:surge\.sh|firebase\.app|web\.app)", "deploy host"),
        pattern(r"https?://(?:www\.)?codeforces\.com/profile/[\w.-]+", "codeforces"),
        pattern(r"https?://(?:www\.)?beecrowd\.com\.br/[\w./-]+", "beecrowd"),
        pattern(r"https?://(?:judge\.)?beecrowd\.com/[\w./-]+", "beecrowd"),
        pattern(r"https?://(?:www\.)?leetcode\.com/[\w.-]+", "leetcode"),
        pattern(r"https?://(?:www\.)?codepen\.io/[\w.-]+", "codepen"),
        pattern(r"https?://(?:www\.)?github\.com/[\w.-]+/[\w.-]+", "repository"),
        pattern(r"https?://(?:www\.)?gitlab\.com/[\w.-]+/[\w.-]+", "repository"),
        pattern(r"https?://(?:www\.)?bitbucket\.org/[\w.-]+/[\w.-]+", "repository"),
        pattern(r"https?://[\w.-]+\.(?:com|org|net|io|dev|tech|app|co|me)", "website"),
    ]
});

/// ASCII-only `\w`: the binary scan decodes high bytes as Latin-1 letters,
/// which must not extend a match.
fn pattern(regex_str: &str, label: &'static str) -> LinkPattern {
    LinkPattern {
        regex: RegexBuilder::new(regex_str)
            .case_insensitive(true)
            .unicode(false)
            .build()
            .expect("Invalid URL regex pattern"),
        label,
    }
}

/// Run a pattern battery over `haystack`, in pattern order, keeping the
/// first occurrence of each cleaned match. Matches that stop inside a host
/// name are dropped.
pub fn scan_patterns(patterns: &[LinkPattern], haystack: &str) -> Vec<RawCandidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for p in patterns {
        for m in p.regex.find_iter(haystack) {
            if is_cut_short(haystack, m.end()) {
                tracing::trace!(pattern = p.label, fragment = m.as_str(), "Truncated host match");
                continue;
            }
            let Some(url) = clean_candidate(m.as_str()) else {
                continue;
            };
            if seen.insert(url.clone()) {
                tracing::trace!(pattern = p.label, url = %url, "Pattern match");
                candidates.push(RawCandidate::new(url));
            }
        }
    }

    candidates
}

/// A TLD alternation can stop early (`https://alice.co` out of
/// `alice.co.uk`). The match is a piece of a longer host when the next
/// character could still belong to it.
fn is_cut_short(haystack: &str, end: usize) -> bool {
    haystack.as_bytes().get(end).is_some_and(|&b| {
        b == b'.' || b == b'-' || b == b'_' || b.is_ascii_alphanumeric()
    })
}
