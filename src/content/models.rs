/// Data models for portfolio content
///
/// `ProjectRecord` is the only entity the page loads at runtime. Everything
/// else on the page is compiled in.

use crate::error::{PortfolioError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// Any relative href has to resolve against a site root to be usable.
const LINK_RESOLUTION_BASE: &str = "https://localhost/";

/// A labelled link shown under a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
}

impl ProjectLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Check that the label is present and the href is a usable URI
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(PortfolioError::InvalidRecord(format!(
                "link to '{}' has an empty label",
                self.href
            )));
        }

        if !is_valid_href(&self.href) {
            return Err(PortfolioError::InvalidRecord(format!(
                "link '{}' has an invalid href '{}'",
                self.label, self.href
            )));
        }

        Ok(())
    }
}

/// One project's displayable metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub year: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProjectLink>>,
}

impl ProjectRecord {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            description: description.into(),
            tags: Vec::new(),
            links: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_link(mut self, link: ProjectLink) -> Self {
        self.links.get_or_insert_with(Vec::new).push(link);
        self
    }

    /// Links to render, empty when the record has none
    pub fn links(&self) -> &[ProjectLink] {
        self.links.as_deref().unwrap_or(&[])
    }

    /// Substring match against the title or any tag
    ///
    /// `lowered_query` must already be lower-cased. Title and tags are
    /// lower-cased here, so the comparison is case-insensitive both ways.
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.title.to_lowercase().contains(lowered_query)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(lowered_query))
    }

    /// Check the record's own invariants
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PortfolioError::InvalidRecord(
                "project has an empty title".to_string(),
            ));
        }

        if self.tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(PortfolioError::InvalidRecord(format!(
                "project '{}' has an empty tag",
                self.title
            )));
        }

        for link in self.links() {
            link.validate()?;
        }

        Ok(())
    }
}

/// Validate every record and the uniqueness of titles across the list
pub fn validate_projects(projects: &[ProjectRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(projects.len());

    for project in projects {
        project.validate()?;

        if !seen.insert(project.title.as_str()) {
            return Err(PortfolioError::InvalidRecord(format!(
                "duplicate project title '{}'",
                project.title
            )));
        }
    }

    Ok(())
}

/// Parse a project data file body and validate it
pub fn parse_projects(body: &str) -> Result<Vec<ProjectRecord>> {
    let projects: Vec<ProjectRecord> = serde_json::from_str(body)?;
    validate_projects(&projects)?;
    Ok(projects)
}

fn is_valid_href(href: &str) -> bool {
    if href.is_empty() || href.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    match Url::parse(href) {
        Ok(_) => true,
        Err(_) => Url::parse(LINK_RESOLUTION_BASE)
            .and_then(|base| base.join(href))
            .is_ok(),
    }
}
