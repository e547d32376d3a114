pub mod types;
pub mod rules;

pub use types::*;

use url::Url;

use rules::{first_match, is_bare_platform_domain, UrlParts};

/// Classifier knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Reject every root-only URL, not just denylisted platforms.
    /// Drops bare personal domains like `https://alice.dev`.
    pub strict_bare_domains: bool,
}

/// Maps a raw URL string to a typed, categorized link or rejects it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkClassifier {
    config: ClassifierConfig,
}

impl LinkClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ClassifierConfig {
        self.config
    }

    /// Classify a candidate, logging the reason when it is dropped.
    pub fn classify(&self, url: &str) -> Option<ClassifiedLink> {
        match self.evaluate(url) {
            Ok(link) => Some(link),
            Err(rejection) => {
                tracing::debug!(url = url.trim(), reason = %rejection, "Candidate rejected");
                None
            }
        }
    }

    /// Classify a candidate, exposing why it was rejected.
    pub fn evaluate(&self, url: &str) -> Result<ClassifiedLink, Rejection> {
        let trimmed = url.trim();
        let parsed = Url::parse(trimmed).map_err(|e| Rejection::InvalidUrl(e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(Rejection::UnsupportedScheme(other.to_string())),
        }

        let parts = UrlParts::new(trimmed, &parsed)
            .ok_or_else(|| Rejection::InvalidUrl("missing host".into()))?;

        if is_bare_platform_domain(&parts) {
            return Err(Rejection::BarePlatformDomain(parts.host));
        }
        if self.config.strict_bare_domains && parts.is_root_only() {
            return Err(Rejection::RootOnly);
        }

        let rule = first_match(&parts)
            .ok_or_else(|| Rejection::InvalidUrl("no classification rule applies".into()))?;
        let (link_type, category) = rule.build(&parts);

        tracing::trace!(
            url = parts.raw,
            rule = rule.name,
            %link_type,
            category = category.as_str(),
            "Classified link"
        );

        Ok(ClassifiedLink {
            link_type,
            url: trimmed.to_string(),
            category,
        })
    }
}

/// Classify with the default configuration.
pub fn classify(url: &str) -> Option<ClassifiedLink> {
    LinkClassifier::default().classify(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(url: &str) -> Option<(LinkType, LinkCategory)> {
        classify(url).map(|l| (l.link_type, l.category))
    }

    // ── Code hosting depth rule ──

    #[test]
    fn code_host_owner_and_repo_is_repository() {
        for url in [
            "https://github.com/alice/portfolio-site",
            "https://gitlab.com/alice/tool",
            "https://bitbucket.org/alice/lib",
            "https://www.github.com/alice/repo/tree/main",
        ] {
            assert_eq!(
                kind(url),
                Some((LinkType::Repository, LinkCategory::Project)),
                "{url} should be a repository"
            );
        }
    }

    #[test]
    fn code_host_owner_only_is_profile() {
        assert_eq!(
            kind("https://github.com/alice"),
            Some((LinkType::Github, LinkCategory::Social))
        );
        assert_eq!(
            kind("https://github.com/alice/"),
            Some((LinkType::Github, LinkCategory::Social))
        );
        assert_eq!(
            kind("https://gitlab.com/alice"),
            Some((LinkType::Gitlab, LinkCategory::Social))
        );
        assert_eq!(
            kind("https://bitbucket.org/alice"),
            Some((LinkType::Bitbucket, LinkCategory::Social))
        );
    }

    // ── Bare-domain rejection ──

    #[test]
    fn bare_github_rejected() {
        assert!(classify("https://github.com").is_none());
        assert!(classify("https://github.com/").is_none());
        assert!(classify("http://www.github.com/").is_none());
    }

    #[test]
    fn bare_social_domains_rejected() {
        for url in [
            "https://twitter.com",
            "https://x.com/",
            "https://www.linkedin.com",
            "https://instagram.com/",
            "https://facebook.com",
            "https://leetcode.com",
            "https://codeforces.com/",
            "https://judge.beecrowd.com",
            "https://vercel.app",
        ] {
            assert_eq!(
                LinkClassifier::default().evaluate(url).unwrap_err(),
                Rejection::BarePlatformDomain(
                    Url::parse(url)
                        .unwrap()
                        .host_str()
                        .unwrap()
                        .trim_start_matches("www.")
                        .to_string()
                ),
                "{url} should be rejected as a bare platform domain"
            );
        }
    }

    #[test]
    fn bare_domain_with_query_is_kept() {
        assert!(classify("https://github.com/?tab=repositories").is_some());
    }

    #[test]
    fn bare_personal_domain_kept_by_default() {
        assert_eq!(
            kind("https://alice.dev"),
            Some((LinkType::Portfolio, LinkCategory::Portfolio))
        );
        assert_eq!(
            kind("https://myapp.vercel.app"),
            Some((LinkType::Demo, LinkCategory::Project))
        );
    }

    #[test]
    fn strict_mode_rejects_every_root_only_url() {
        let strict = LinkClassifier::new(ClassifierConfig {
            strict_bare_domains: true,
        });
        assert_eq!(
            strict.evaluate("https://alice.dev/").unwrap_err(),
            Rejection::RootOnly
        );
        assert!(strict.classify("https://myapp.vercel.app").is_none());
        assert!(strict.classify("https://alice.dev/about").is_some());
        assert!(strict.config().strict_bare_domains);
        assert!(!LinkClassifier::default().config().strict_bare_domains);
    }

    // ── Validation ──

    #[test]
    fn invalid_urls_rejected() {
        assert!(matches!(
            LinkClassifier::default().evaluate("not a url"),
            Err(Rejection::InvalidUrl(_))
        ));
        assert!(classify("github.com/alice").is_none());
        assert!(classify("").is_none());
        assert!(classify("https://").is_none());
    }

    #[test]
    fn non_http_schemes_rejected() {
        assert_eq!(
            LinkClassifier::default()
                .evaluate("mailto:alice@example.com")
                .unwrap_err(),
            Rejection::UnsupportedScheme("mailto".into())
        );
        assert!(classify("tel:+15551234567").is_none());
        assert!(classify("ftp://files.example.com/cv.pdf").is_none());
    }

    #[test]
    fn url_is_trimmed_not_rewritten() {
        let link = classify("  https://GitHub.com/Alice  ").unwrap();
        assert_eq!(link.url, "https://GitHub.com/Alice");
    }

    // ── Platform precedence ──

    #[test]
    fn social_networks() {
        assert_eq!(kind("https://linkedin.com/in/alice").unwrap().0, LinkType::Linkedin);
        assert_eq!(kind("https://x.com/alice").unwrap().0, LinkType::Twitter);
        assert_eq!(kind("https://twitter.com/alice").unwrap().0, LinkType::Twitter);
        assert_eq!(kind("https://instagram.com/alice").unwrap().0, LinkType::Instagram);
        assert_eq!(kind("https://facebook.com/alice").unwrap().0, LinkType::Facebook);
        assert_eq!(kind("https://youtu.be/dQw4w9WgXcQ").unwrap().0, LinkType::Youtube);
        assert_eq!(
            kind("https://www.youtube.com/@alice").unwrap(),
            (LinkType::Youtube, LinkCategory::Social)
        );
    }

    #[test]
    fn developer_identity_platforms_are_social() {
        for (url, expected) in [
            ("https://stackoverflow.com/users/123/alice", LinkType::Stackoverflow),
            ("https://medium.com/@alice", LinkType::Medium),
            ("https://alice.medium.com/my-post", LinkType::Medium),
            ("https://dev.to/alice", LinkType::Dev),
            ("https://codeforces.com/profile/alice", LinkType::Codeforces),
            ("https://www.beecrowd.com.br/judge/en/profile/1", LinkType::Beecrowd),
            ("https://judge.beecrowd.com/en/profile/1", LinkType::Beecrowd),
            ("https://leetcode.com/alice", LinkType::Leetcode),
            ("https://codepen.io/alice", LinkType::Codepen),
        ] {
            assert_eq!(
                kind(url),
                Some((expected, LinkCategory::Social)),
                "{url} misclassified"
            );
        }
    }

    #[test]
    fn codepen_is_social_not_portfolio_tld() {
        // .io would otherwise hit the portfolio rule
        assert_eq!(kind("https://codepen.io/alice/pen/xyz").unwrap().1, LinkCategory::Social);
    }

    #[test]
    fn deploy_hosts_are_demos() {
        for url in [
            "https://shop.vercel.app",
            "https://shop.netlify.app/cart",
            "https://alice.github.io/site",
            "https://shop.herokuapp.com",
            "https://shop.up.railway.app",
            "https://shop.onrender.com",
            "https://shop.surge.sh",
            "https://shop.web.app",
            "https://shop.firebase.app",
            "https://shop.fly.dev",
            "https://shop.cyclic.app",
            "https://shop.deta.dev",
            "https://shop.koyeb.app",
        ] {
            assert_eq!(
                kind(url),
                Some((LinkType::Demo, LinkCategory::Project)),
                "{url} should be a demo"
            );
        }
    }

    #[test]
    fn portfolio_tlds() {
        for url in [
            "https://alice.dev/",
            "https://alice.tech/work",
            "https://alice.me",
            "https://alice.io/blog",
        ] {
            assert_eq!(
                kind(url),
                Some((LinkType::Portfolio, LinkCategory::Portfolio)),
                "{url} should be a portfolio"
            );
        }
    }

    #[test]
    fn keyword_fallback() {
        assert_eq!(
            kind("https://example.com/demo"),
            Some((LinkType::Demo, LinkCategory::Project))
        );
        assert_eq!(
            kind("https://myproject.example.org"),
            Some((LinkType::Demo, LinkCategory::Project))
        );
        assert_eq!(
            kind("https://example.com/resume"),
            Some((LinkType::Portfolio, LinkCategory::Portfolio))
        );
        assert_eq!(
            kind("https://example.com/blog"),
            Some((LinkType::Website, LinkCategory::Portfolio))
        );
    }

    #[test]
    fn lookalike_hosts_fall_through() {
        // "x.com" must not capture every host ending in "x.com"
        assert_eq!(
            kind("https://dropbox.com/s/abc").unwrap().0,
            LinkType::Website
        );
    }
}
