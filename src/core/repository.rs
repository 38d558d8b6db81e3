//! In-memory project repository.
//!
//! Wraps the ordered project collection and answers the four queries the
//! presentation layer needs: slug lookup, category filtering, the featured
//! prefix and collection-order adjacency. The collection is fixed for the
//! life of the process, so every query is a pure read.

use std::collections::HashSet;

use crate::error::DataError;
use crate::types::{Category, Project};

/// Number of projects shown in the featured section of the homepage.
/// Featured is a positional prefix, not a ranking.
pub const FEATURED_COUNT: usize = 4;

/// Sentinel accepted by [`ProjectRepository::filter_by_category`] to mean
/// "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Neighbors of a project in collection order.
#[derive(Clone, Copy, Debug)]
pub struct AdjacentProjects<'a> {
    pub prev: Option<&'a Project>,
    pub next: Option<&'a Project>,
}

/// Ordered, immutable collection of portfolio projects.
///
/// Collection order is insertion order and is meaningful: it defines which
/// projects are featured and which are adjacent to which.
#[derive(Clone, Debug)]
pub struct ProjectRepository {
    projects: Vec<Project>,
}

impl ProjectRepository {
    pub fn new(projects: Vec<Project>) -> Self {
        ProjectRepository { projects }
    }

    /// Check the dataset invariants: `id` and `slug` are each unique across
    /// the collection. A violation is an authoring defect in the literal
    /// data, caught before deploy rather than at query time.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut ids: HashSet<&str> = HashSet::new();
        let mut slugs: HashSet<&str> = HashSet::new();
        for project in &self.projects {
            if !ids.insert(&project.id) {
                return Err(DataError::DuplicateId(project.id.clone()));
            }
            if !slugs.insert(&project.slug) {
                return Err(DataError::DuplicateSlug(project.slug.clone()));
            }
        }
        Ok(())
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Find a project by its URL slug. Exact, case-sensitive match; an
    /// unknown slug is an expected condition (stale or mistyped URL), not
    /// an error.
    pub fn lookup_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.slug == slug)
    }

    /// Projects in the given category, in original relative order.
    ///
    /// The sentinel `"all"` returns the full collection. Any string outside
    /// the closed category set returns an empty vec.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Project> {
        if category == ALL_CATEGORIES {
            return self.projects.iter().collect();
        }
        match Category::parse(category) {
            Some(wanted) => self
                .projects
                .iter()
                .filter(|project| project.category == wanted)
                .collect(),
            None => Vec::new(),
        }
    }

    /// The first `min(4, len)` projects in collection order.
    pub fn featured(&self) -> &[Project] {
        let count = FEATURED_COUNT.min(self.projects.len());
        &self.projects[..count]
    }

    /// Predecessor and successor of the project with the given slug, in
    /// collection order. An unknown slug yields `None` on both sides.
    pub fn adjacent(&self, slug: &str) -> AdjacentProjects<'_> {
        let position = self
            .projects
            .iter()
            .position(|project| project.slug == slug);
        match position {
            Some(index) => AdjacentProjects {
                prev: index.checked_sub(1).map(|i| &self.projects[i]),
                next: self.projects.get(index + 1),
            },
            None => AdjacentProjects {
                prev: None,
                next: None,
            },
        }
    }
}
