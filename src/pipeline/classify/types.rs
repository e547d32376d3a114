use serde::{Deserialize, Serialize};

/// Top-level bucket a link lands in downstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LinkCategory {
    Social,
    Project,
    Portfolio,
}

impl LinkCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Project => "project",
            Self::Portfolio => "portfolio",
        }
    }
}

/// Taxonomy tag assigned by the classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    // Social networks
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    // Developer identity
    Stackoverflow,
    Medium,
    Dev,
    Codeforces,
    Beecrowd,
    Leetcode,
    Codepen,
    // Code hosting profiles
    Github,
    Gitlab,
    Bitbucket,
    // Projects and personal sites
    Repository,
    Demo,
    Portfolio,
    Website,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Youtube => "youtube",
            Self::Stackoverflow => "stackoverflow",
            Self::Medium => "medium",
            Self::Dev => "dev",
            Self::Codeforces => "codeforces",
            Self::Beecrowd => "beecrowd",
            Self::Leetcode => "leetcode",
            Self::Codepen => "codepen",
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Bitbucket => "bitbucket",
            Self::Repository => "repository",
            Self::Demo => "demo",
            Self::Portfolio => "portfolio",
            Self::Website => "website",
        }
    }
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated URL with its taxonomy tag and category. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLink {
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub url: String,
    pub category: LinkCategory,
}

impl ClassifiedLink {
    /// Drop the category, keeping the `{type, url}` pair collaborators exchange.
    pub fn to_link_ref(&self) -> LinkRef {
        LinkRef {
            link_type: self.link_type.as_str().to_string(),
            url: self.url.clone(),
        }
    }
}

/// The `{type, url}` pair shared with the summarizer and the caller.
///
/// `type` is free-form here: the summarizer invents its own tags
/// ("frontend", "live", ...) and they must survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    #[serde(rename = "type")]
    pub link_type: String,
    pub url: String,
}

impl LinkRef {
    pub fn new(link_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            link_type: link_type.into(),
            url: url.into(),
        }
    }
}

/// Why a candidate was dropped. Not an error: rejected candidates are noise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Not parseable as an absolute URL.
    InvalidUrl(String),
    /// Parseable, but not http(s) (mailto:, tel:, javascript:, ...).
    UnsupportedScheme(String),
    /// A platform that needs a path to identify anyone, given without one.
    BarePlatformDomain(String),
    /// Root-only URL rejected under `strict_bare_domains`.
    RootOnly,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl(reason) => write!(f, "invalid URL: {reason}"),
            Self::UnsupportedScheme(scheme) => write!(f, "unsupported scheme: {scheme}"),
            Self::BarePlatformDomain(host) => write!(f, "bare platform domain: {host}"),
            Self::RootOnly => f.write_str("domain-only URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_link_serializes_type_field() {
        let link = ClassifiedLink {
            link_type: LinkType::Repository,
            url: "https://github.com/alice/site".into(),
            category: LinkCategory::Project,
        };
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["type"], "repository");
        assert_eq!(json["category"], "project");
        assert_eq!(json["url"], "https://github.com/alice/site");
    }

    #[test]
    fn category_names_match_serialized_form() {
        for category in [LinkCategory::Social, LinkCategory::Project, LinkCategory::Portfolio] {
            assert_eq!(serde_json::to_value(category).unwrap(), category.as_str());
        }
    }

    #[test]
    fn link_ref_keeps_free_form_type() {
        let parsed: LinkRef =
            serde_json::from_str(r#"{"type":"frontend","url":"https://a.b/c"}"#).unwrap();
        assert_eq!(parsed, LinkRef::new("frontend", "https://a.b/c"));
    }

    #[test]
    fn to_link_ref_uses_taxonomy_tag() {
        let link = ClassifiedLink {
            link_type: LinkType::Stackoverflow,
            url: "https://stackoverflow.com/users/1/alice".into(),
            category: LinkCategory::Social,
        };
        assert_eq!(link.to_link_ref().link_type, "stackoverflow");
    }
}
