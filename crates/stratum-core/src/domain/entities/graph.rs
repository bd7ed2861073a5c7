//! Project dependency graph.
//!
//! The graph is a plain value: projects in declaration order plus directed
//! "references" edges. It is validated once at construction and never
//! mutated afterwards, so the sequencer and generator can trust it.

use std::collections::HashSet;
use std::fmt;

use crate::domain::{entities::project::ProjectSpec, error::DomainError, value_objects::ProjectName};

/// `from` references `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub from: ProjectName,
    pub to: ProjectName,
}

impl DependencyEdge {
    pub fn new(from: ProjectName, to: ProjectName) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Validated, acyclic project graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGraph {
    projects: Vec<ProjectSpec>,
    edges: Vec<DependencyEdge>,
}

impl ProjectGraph {
    /// Build a graph, rejecting duplicates, dangling edges and cycles.
    pub fn new(projects: Vec<ProjectSpec>, edges: Vec<DependencyEdge>) -> Result<Self, DomainError> {
        let graph = Self { projects, edges };
        graph.validate()?;
        Ok(graph)
    }

    /// Projects in declaration order.
    pub fn projects(&self) -> &[ProjectSpec] {
        &self.projects
    }

    /// Edges in declaration order.
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    pub fn get(&self, name: &str) -> Option<&ProjectSpec> {
        self.projects.iter().find(|p| p.name().as_str() == name)
    }

    /// Direct dependencies of `name`, in edge declaration order.
    pub fn dependencies_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ProjectName> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.from.as_str() == name)
            .map(|e| &e.to)
    }

    /// Projects ordered so that every project comes after all of its
    /// dependencies. Ties keep declaration order.
    pub fn topological_order(&self) -> Vec<&ProjectSpec> {
        let mut remaining = self.in_degrees();
        let mut placed = vec![false; self.projects.len()];
        let mut order = Vec::with_capacity(self.projects.len());

        // Graph is acyclic (validated), so each pass places at least one node.
        while order.len() < self.projects.len() {
            let Some(next) = (0..self.projects.len()).find(|&i| !placed[i] && remaining[i] == 0)
            else {
                break;
            };
            placed[next] = true;
            let name = self.projects[next].name();
            order.push(&self.projects[next]);
            for edge in self.edges.iter().filter(|e| &e.to == name) {
                if let Some(i) = self.index_of(&edge.from) {
                    remaining[i] -= 1;
                }
            }
        }

        order
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.projects.is_empty() {
            return Err(DomainError::EmptyGraph);
        }

        let mut names = HashSet::new();
        for project in &self.projects {
            if !names.insert(project.name()) {
                return Err(DomainError::DuplicateProject {
                    name: project.name().to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !names.contains(endpoint) {
                    return Err(DomainError::UnknownProject {
                        from: edge.from.to_string(),
                        to: edge.to.to_string(),
                        missing: endpoint.to_string(),
                    });
                }
            }
            if edge.from == edge.to {
                return Err(DomainError::SelfReference {
                    name: edge.from.to_string(),
                });
            }
            if !seen.insert(edge) {
                return Err(DomainError::DuplicateEdge {
                    from: edge.from.to_string(),
                    to: edge.to.to_string(),
                });
            }
        }

        self.check_acyclic()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn index_of(&self, name: &ProjectName) -> Option<usize> {
        self.projects.iter().position(|p| p.name() == name)
    }

    /// Number of outstanding dependencies per project, indexed like `projects`.
    fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.projects.len()];
        for edge in &self.edges {
            if let Some(i) = self.index_of(&edge.from) {
                degrees[i] += 1;
            }
        }
        degrees
    }

    /// Kahn's algorithm; whatever cannot be placed sits on a cycle.
    fn check_acyclic(&self) -> Result<(), DomainError> {
        let order = self.topological_order();
        if order.len() == self.projects.len() {
            return Ok(());
        }

        let placed: HashSet<_> = order.iter().map(|p| p.name()).collect();
        let projects = self
            .projects
            .iter()
            .map(ProjectSpec::name)
            .filter(|name| !placed.contains(name))
            .map(ToString::to_string)
            .collect();

        Err(DomainError::DependencyCycle { projects })
    }
}
