use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::display::display_name;
use crate::pipeline::classify::LinkRef;

/// A link as rendered on a project: `{name, type, url}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub name: String,
    #[serde(rename = "type")]
    pub link_type: String,
    pub url: String,
}

impl ProjectLink {
    /// Render an extracted link through the display-name table.
    pub fn from_ref(link: &LinkRef) -> Self {
        Self {
            name: display_name(&link.link_type),
            link_type: link.link_type.clone(),
            url: link.url.clone(),
        }
    }

    /// Read one summarizer link. Requires a string `url`; `type` and
    /// `name` are optional.
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let url = obj.get("url")?.as_str()?.to_string();
        let link_type = string_field(obj, "type");
        let name = match obj.get("name").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => display_name(&link_type),
        };
        Some(Self {
            name,
            link_type,
            url,
        })
    }
}

/// A project as the summarizer proposed it. Untrusted: every field may be
/// missing, null or the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateProject {
    pub name: String,
    pub description: String,
    pub links: Vec<ProjectLink>,
    /// Any other fields the summarizer attached; carried through the merge.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CandidateProject {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_links(mut self, links: Vec<ProjectLink>) -> Self {
        self.links = links;
        self
    }

    /// `None` for anything that is not a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let links = obj
            .get("links")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(ProjectLink::from_value).collect())
            .unwrap_or_default();

        let extra = obj
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "name" | "description" | "links"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Some(Self {
            name: string_field(obj, "name"),
            description: string_field(obj, "description"),
            links,
            extra,
        })
    }
}

/// The parts of the summarizer's resume object this subsystem consumes,
/// plus everything else it returned, untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummarizerOutput {
    pub projects: Vec<CandidateProject>,
    pub social_links: Vec<LinkRef>,
    pub extra: Map<String, Value>,
}

impl SummarizerOutput {
    /// Lenient read: a non-object is empty, non-array `projects` or
    /// `social_links` are empty, and unreadable items are skipped.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut obj) = value else {
            tracing::warn!("Summarizer output is not an object, treating as empty");
            return Self::default();
        };

        let projects: Vec<CandidateProject> = match obj.remove("projects") {
            Some(Value::Array(items)) => items.iter().filter_map(CandidateProject::from_value).collect(),
            Some(Value::Null) | None => vec![],
            Some(other) => {
                tracing::warn!(kind = json_kind(&other), "Summarizer projects is not an array");
                vec![]
            }
        };

        let social_links: Vec<LinkRef> = match obj.remove("social_links") {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
            Some(Value::Null) | None => vec![],
            Some(other) => {
                tracing::warn!(kind = json_kind(&other), "Summarizer social_links is not an array");
                vec![]
            }
        };

        Self {
            projects,
            social_links,
            extra: obj,
        }
    }
}

/// One project in the final answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedProject {
    pub name: String,
    pub description: String,
    pub links: Vec<ProjectLink>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MergedProject {
    /// A project invented to hold one otherwise unattached link.
    pub fn synthetic(name: String, link: &LinkRef) -> Self {
        Self {
            name,
            description: format!("Project hosted at {}", link.url),
            links: vec![ProjectLink::from_ref(link)],
            extra: Map::new(),
        }
    }
}

/// The final `{social_links, projects}` answer. Fields of the summarizer
/// object that the merge does not touch are flattened back in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedResult {
    pub social_links: Vec<LinkRef>,
    pub projects: Vec<MergedProject>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MergedResult {
    pub fn link_count(&self) -> usize {
        self.projects.iter().map(|p| p.links.len()).sum()
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
