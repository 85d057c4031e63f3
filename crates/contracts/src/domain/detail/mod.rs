//! Static detail content shown in the project and service modals.
//!
//! Two independent namespaces exist, selected by [`DetailKind`]. Entries are
//! built once on first access and never change afterwards.

mod projects;
mod services;

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which lookup table an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailKind {
    Project,
    Service,
}

impl DetailKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailKind::Project => "project",
            DetailKind::Service => "service",
        }
    }

    /// DOM id of the modal element that renders this kind of entry.
    pub fn modal_id(&self) -> &'static str {
        match self {
            DetailKind::Project => "projectModal",
            DetailKind::Service => "serviceModal",
        }
    }
}

impl fmt::Display for DetailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DetailKind::Project => "Project",
            DetailKind::Service => "Service",
        })
    }
}

/// A title plus pre-rendered body markup, keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub body_markup: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    #[error("{kind} details not found")]
    NotFound { kind: DetailKind, id: String },
}

static PROJECTS: Lazy<HashMap<&'static str, DetailEntry>> = Lazy::new(|| index(projects::entries()));
static SERVICES: Lazy<HashMap<&'static str, DetailEntry>> = Lazy::new(|| index(services::entries()));

fn index(entries: Vec<DetailEntry>) -> HashMap<&'static str, DetailEntry> {
    entries.into_iter().map(|e| (e.id, e)).collect()
}

fn table(kind: DetailKind) -> &'static HashMap<&'static str, DetailEntry> {
    match kind {
        DetailKind::Project => &*PROJECTS,
        DetailKind::Service => &*SERVICES,
    }
}

/// Look up a detail entry by kind and id.
pub fn lookup(kind: DetailKind, id: &str) -> Result<&'static DetailEntry, DetailError> {
    table(kind).get(id).ok_or_else(|| DetailError::NotFound {
        kind,
        id: id.to_string(),
    })
}

/// All ids of one namespace, sorted.
pub fn ids(kind: DetailKind) -> Vec<&'static str> {
    let mut ids: Vec<_> = table(kind).keys().copied().collect();
    ids.sort_unstable();
    ids
}

/// Minimal HTML escaping for text interpolated into body markup.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn push_list(out: &mut String, heading: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("<h3>{}</h3><ul>", escape_html(heading)));
    for item in items {
        out.push_str(&format!("<li>{}</li>", escape_html(item)));
    }
    out.push_str("</ul>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_project() {
        let entry = lookup(DetailKind::Project, "pixelprompt").unwrap();
        assert_eq!(entry.title, "PixelPrompt - AI Wireframe Generator");
        assert!(entry.body_markup.contains("project-detail"));
    }

    #[test]
    fn test_unknown_project() {
        let err = lookup(DetailKind::Project, "nonexistent").unwrap_err();
        assert_eq!(
            err,
            DetailError::NotFound {
                kind: DetailKind::Project,
                id: "nonexistent".into()
            }
        );
        assert_eq!(err.to_string(), "Project details not found");
    }

    #[test]
    fn test_namespaces_are_independent() {
        assert!(lookup(DetailKind::Service, "pixelprompt").is_err());
        assert!(lookup(DetailKind::Project, "web").is_err());
        assert_eq!(
            lookup(DetailKind::Service, "web").unwrap().title,
            "Web Development Services"
        );
    }

    #[test]
    fn test_ids() {
        assert_eq!(
            ids(DetailKind::Project),
            vec!["ai-chatbot", "bus-tracker", "ecommerce", "license-plate", "pixelprompt"]
        );
        assert_eq!(ids(DetailKind::Service).len(), 6);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
