//! Ordered classification rule table.
//!
//! Rules are evaluated top to bottom and the first match wins, so precedence
//! is exactly the order of `RULES`. Each rule is a pure predicate plus a
//! constructor; neither sees anything but the parsed URL.

use std::sync::LazyLock;

use url::Url;

use super::types::{LinkCategory, LinkType};

/// Parsed view of a candidate URL shared by every rule.
#[derive(Debug)]
pub struct UrlParts<'a> {
    pub raw: &'a str,
    /// Lowercased full URL, for keyword heuristics.
    pub lowered: String,
    /// Lowercased host without a leading `www.`.
    pub host: String,
    /// Non-empty path segments.
    pub segments: Vec<String>,
    pub has_query: bool,
    pub has_fragment: bool,
}

impl<'a> UrlParts<'a> {
    pub fn new(raw: &'a str, parsed: &Url) -> Option<Self> {
        let host = parsed.host_str()?.to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
        let segments = parsed
            .path_segments()
            .map(|segs| {
                segs.filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            raw,
            lowered: raw.to_lowercase(),
            host,
            segments,
            has_query: parsed.query().is_some_and(|q| !q.is_empty()),
            has_fragment: parsed.fragment().is_some_and(|f| !f.is_empty()),
        })
    }

    /// Exact host or any subdomain of it.
    pub fn host_matches(&self, domains: &[&str]) -> bool {
        domains.iter().any(|d| {
            self.host == *d
                || (self.host.len() > d.len()
                    && self.host.ends_with(d)
                    && self.host.as_bytes()[self.host.len() - d.len() - 1] == b'.')
        })
    }

    /// Nothing after the host: no path, no query, no fragment.
    pub fn is_root_only(&self) -> bool {
        self.segments.is_empty() && !self.has_query && !self.has_fragment
    }
}

type Classification = (LinkType, LinkCategory);

/// A predicate + constructor pair.
pub struct ClassificationRule {
    pub name: &'static str,
    predicate: Box<dyn Fn(&UrlParts<'_>) -> bool + Send + Sync>,
    build: Box<dyn Fn(&UrlParts<'_>) -> Classification + Send + Sync>,
}

impl ClassificationRule {
    pub fn applies(&self, parts: &UrlParts<'_>) -> bool {
        (self.predicate)(parts)
    }

    pub fn build(&self, parts: &UrlParts<'_>) -> Classification {
        (self.build)(parts)
    }
}

// Social networks
const LINKEDIN: &[&str] = &["linkedin.com"];
const TWITTER: &[&str] = &["twitter.com", "x.com"];
const INSTAGRAM: &[&str] = &["instagram.com"];
const FACEBOOK: &[&str] = &["facebook.com"];
const YOUTUBE: &[&str] = &["youtube.com", "youtu.be"];

// Developer identity platforms
const STACKOVERFLOW: &[&str] = &["stackoverflow.com"];
const MEDIUM: &[&str] = &["medium.com"];
const DEV_TO: &[&str] = &["dev.to"];
const CODEFORCES: &[&str] = &["codeforces.com"];
const BEECROWD: &[&str] = &["beecrowd.com.br", "beecrowd.com"];
const LEETCODE: &[&str] = &["leetcode.com"];
const CODEPEN: &[&str] = &["codepen.io"];

// Code hosting
const GITHUB: &[&str] = &["github.com"];
const GITLAB: &[&str] = &["gitlab.com"];
const BITBUCKET: &[&str] = &["bitbucket.org"];

/// Zero-config deploy hosts: a subdomain here is a live project.
pub const DEPLOY_HOSTS: &[&str] = &[
    "vercel.app",
    "netlify.app",
    "github.io",
    "herokuapp.com",
    "railway.app",
    "render.com",
    "onrender.com",
    "surge.sh",
    "firebase.app",
    "web.app",
    "fly.dev",
    "cyclic.app",
    "deta.dev",
    "koyeb.app",
];

/// TLDs developers favour for personal sites.
const PORTFOLIO_TLDS: &[&str] = &[".dev", ".tech", ".me", ".io"];

const DEMO_KEYWORDS: &[&str] = &["demo", "app", "project", "live"];
const PORTFOLIO_KEYWORDS: &[&str] = &["portfolio", "resume", "cv", "about"];

/// Platforms whose bare domain identifies nobody. Matched on the exact host
/// (after `www.`), so `alice.github.io` is unaffected by `github.io`.
pub const BARE_DOMAIN_DENYLIST: &[&str] = &[
    "github.com",
    "gitlab.com",
    "bitbucket.org",
    "linkedin.com",
    "twitter.com",
    "x.com",
    "instagram.com",
    "facebook.com",
    "youtube.com",
    "youtu.be",
    "stackoverflow.com",
    "medium.com",
    "dev.to",
    "codeforces.com",
    "beecrowd.com.br",
    "beecrowd.com",
    "judge.beecrowd.com",
    "leetcode.com",
    "codepen.io",
    "vercel.app",
    "netlify.app",
    "github.io",
    "herokuapp.com",
    "railway.app",
    "render.com",
    "onrender.com",
    "surge.sh",
    "firebase.app",
    "web.app",
    "fly.dev",
    "cyclic.app",
    "deta.dev",
    "koyeb.app",
];

/// True for `platform.com` / `platform.com/` with empty path, query and fragment.
pub fn is_bare_platform_domain(parts: &UrlParts<'_>) -> bool {
    parts.is_root_only() && BARE_DOMAIN_DENYLIST.contains(&parts.host.as_str())
}

pub static RULES: LazyLock<Vec<ClassificationRule>> = LazyLock::new(|| {
    vec![
        // Social networks
        rule("linkedin", on_hosts(LINKEDIN), fixed(LinkType::Linkedin, LinkCategory::Social)),
        rule("twitter", on_hosts(TWITTER), fixed(LinkType::Twitter, LinkCategory::Social)),
        rule("instagram", on_hosts(INSTAGRAM), fixed(LinkType::Instagram, LinkCategory::Social)),
        rule("facebook", on_hosts(FACEBOOK), fixed(LinkType::Facebook, LinkCategory::Social)),
        rule("youtube", on_hosts(YOUTUBE), fixed(LinkType::Youtube, LinkCategory::Social)),
        // Developer identity
        rule(
            "stackoverflow",
            on_hosts(STACKOVERFLOW),
            fixed(LinkType::Stackoverflow, LinkCategory::Social),
        ),
        rule("medium", on_hosts(MEDIUM), fixed(LinkType::Medium, LinkCategory::Social)),
        rule("dev.to", on_hosts(DEV_TO), fixed(LinkType::Dev, LinkCategory::Social)),
        rule(
            "codeforces",
            on_hosts(CODEFORCES),
            fixed(LinkType::Codeforces, LinkCategory::Social),
        ),
        rule("beecrowd", on_hosts(BEECROWD), fixed(LinkType::Beecrowd, LinkCategory::Social)),
        rule("leetcode", on_hosts(LEETCODE), fixed(LinkType::Leetcode, LinkCategory::Social)),
        rule("codepen", on_hosts(CODEPEN), fixed(LinkType::Codepen, LinkCategory::Social)),
        // Code hosting: owner/repo is a project, owner alone is a profile
        rule("github", on_hosts(GITHUB), by_path_depth(LinkType::Github)),
        rule("gitlab", on_hosts(GITLAB), by_path_depth(LinkType::Gitlab)),
        rule("bitbucket", on_hosts(BITBUCKET), by_path_depth(LinkType::Bitbucket)),
        // Deploy hosts
        rule("deploy host", on_hosts(DEPLOY_HOSTS), fixed(LinkType::Demo, LinkCategory::Project)),
        // Personal-site TLDs
        rule(
            "portfolio tld",
            |u: &UrlParts<'_>| {
                !u.host_matches(&["github.io"])
                    && PORTFOLIO_TLDS.iter().any(|tld| u.host.ends_with(tld))
            },
            fixed(LinkType::Portfolio, LinkCategory::Portfolio),
        ),
        // Anything else that parsed as http(s)
        rule("keyword fallback", |_: &UrlParts<'_>| true, by_keywords),
    ]
});

fn rule(
    name: &'static str,
    predicate: impl Fn(&UrlParts<'_>) -> bool + Send + Sync + 'static,
    build: impl Fn(&UrlParts<'_>) -> Classification + Send + Sync + 'static,
) -> ClassificationRule {
    ClassificationRule {
        name,
        predicate: Box::new(predicate),
        build: Box::new(build),
    }
}

fn on_hosts(domains: &'static [&'static str]) -> impl Fn(&UrlParts<'_>) -> bool + Send + Sync {
    move |u: &UrlParts<'_>| u.host_matches(domains)
}

fn fixed(
    link_type: LinkType,
    category: LinkCategory,
) -> impl Fn(&UrlParts<'_>) -> Classification + Send + Sync {
    move |_: &UrlParts<'_>| (link_type, category)
}

fn by_path_depth(profile: LinkType) -> impl Fn(&UrlParts<'_>) -> Classification + Send + Sync {
    move |u: &UrlParts<'_>| {
        if u.segments.len() >= 2 {
            (LinkType::Repository, LinkCategory::Project)
        } else {
            (profile, LinkCategory::Social)
        }
    }
}

fn by_keywords(u: &UrlParts<'_>) -> Classification {
    if DEMO_KEYWORDS.iter().any(|k| u.lowered.contains(k)) {
        (LinkType::Demo, LinkCategory::Project)
    } else if PORTFOLIO_KEYWORDS.iter().any(|k| u.lowered.contains(k)) {
        (LinkType::Portfolio, LinkCategory::Portfolio)
    } else {
        (LinkType::Website, LinkCategory::Portfolio)
    }
}

/// First rule whose predicate holds. The fallback rule guarantees a match.
pub fn first_match(parts: &UrlParts<'_>) -> Option<&'static ClassificationRule> {
    RULES.iter().find(|r| r.applies(parts))
}
