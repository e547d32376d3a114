/// Application-level constants
pub const APP_NAME: &str = "resume-links";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on an uploaded document. Resumes are a few hundred KB at most.
pub const MAX_DOCUMENT_SIZE: u64 = 25 * 1024 * 1024; // 25MB

/// Hard cap on links distributed onto a single summarizer project.
pub const MAX_LINKS_PER_PROJECT: usize = 4;

/// URL values the summarizer emits when it has nothing to say.
pub const PLACEHOLDER_URLS: &[&str] = &["", "undefined", "null"];

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "resume_links=info,warn"
}

/// True when a summarizer-provided URL carries no information.
pub fn is_placeholder_url(url: &str) -> bool {
    let trimmed = url.trim();
    PLACEHOLDER_URLS
        .iter()
        .any(|p| trimmed.eq_ignore_ascii_case(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_resume_links() {
        assert_eq!(APP_NAME, "resume-links");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn placeholder_urls_detected() {
        assert!(is_placeholder_url(""));
        assert!(is_placeholder_url("   "));
        assert!(is_placeholder_url("undefined"));
        assert!(is_placeholder_url("Undefined"));
        assert!(is_placeholder_url("null"));
        assert!(!is_placeholder_url("https://github.com/alice"));
    }

    #[test]
    fn log_filter_targets_crate() {
        assert!(default_log_filter().contains("resume_links"));
    }
}
