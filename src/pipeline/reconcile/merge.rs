//! Merge extracted links into the summarizer's project list.
//!
//! Distribution is positional: links are dealt off the front of the pool in
//! discovery order, a fixed number per project. Nothing ties a given link to
//! a given project's text.

use std::collections::{HashSet, VecDeque};

use super::types::{CandidateProject, MergedProject, MergedResult, ProjectLink, SummarizerOutput};
use crate::config::{is_placeholder_url, MAX_LINKS_PER_PROJECT};
use crate::pipeline::classify::LinkRef;
use crate::pipeline::extraction::{dedup_key, ExtractionResult};

pub fn merge(extracted: &ExtractionResult, summary: &SummarizerOutput) -> MergedResult {
    let social_links = if !extracted.social_links.is_empty() {
        extracted.social_links.clone()
    } else {
        summary.social_links.clone()
    };

    let pool: VecDeque<&LinkRef> = extracted
        .project_links
        .iter()
        .chain(&extracted.portfolio_links)
        .collect();

    let projects = if summary.projects.is_empty() {
        pool.iter()
            .enumerate()
            .map(|(i, link)| MergedProject::synthetic(format!("Project {}", i + 1), link))
            .collect()
    } else {
        distribute(&summary.projects, pool)
    };

    tracing::info!(
        social_links = social_links.len(),
        summarizer_projects = summary.projects.len(),
        projects = projects.len(),
        "Merge complete"
    );

    MergedResult {
        social_links,
        projects,
        extra: summary.extra.clone(),
    }
}

/// Per-project cap: an even share of the pool plus one, at least one link
/// and never more than `MAX_LINKS_PER_PROJECT`.
pub fn links_per_project_cap(pool_size: usize, project_count: usize) -> usize {
    let even_share = (pool_size / project_count.max(1)).max(1);
    (even_share + 1).min(MAX_LINKS_PER_PROJECT)
}

fn distribute(candidates: &[CandidateProject], mut pool: VecDeque<&LinkRef>) -> Vec<MergedProject> {
    let cap = links_per_project_cap(pool.len(), candidates.len());
    let mut projects = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let mut links = usable_links(&candidate.links);
        let mut attached = 0;

        while attached < cap {
            let Some(link) = pool.pop_front() else {
                break;
            };
            let key = dedup_key(&link.url);
            if links.iter().any(|existing| dedup_key(&existing.url) == key) {
                tracing::debug!(project = %candidate.name, url = %link.url, "Link already on project");
                continue;
            }
            links.push(ProjectLink::from_ref(link));
            attached += 1;
        }

        tracing::debug!(project = %candidate.name, attached, total = links.len(), "Project filled");

        projects.push(MergedProject {
            name: candidate.name.clone(),
            description: candidate.description.clone(),
            links,
            extra: candidate.extra.clone(),
        });
    }

    projects.extend(
        pool.iter()
            .enumerate()
            .map(|(i, link)| MergedProject::synthetic(format!("Additional Project {}", i + 1), link)),
    );

    projects
}

/// Drop placeholder URLs and repeated URLs (same `dedup_key`), keeping
/// the first.
fn usable_links(links: &[ProjectLink]) -> Vec<ProjectLink> {
    let mut seen = HashSet::new();
    links
        .iter()
        .filter(|link| !is_placeholder_url(&link.url) && seen.insert(dedup_key(&link.url)))
        .cloned()
        .collect()
}
