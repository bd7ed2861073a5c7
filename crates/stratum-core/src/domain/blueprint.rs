//! The built-in layered solution: five projects, their templates and the
//! references between them.
//!
//! Everything here is constant data. [`layered_solution`] turns it into a
//! validated [`ProjectGraph`] which callers construct once and pass around.

use crate::domain::{
    entities::{
        DependencyEdge, EntryPointPatch, FileTemplate, ProjectGraph, ProjectSpec,
        common::RelativePath,
    },
    error::DomainError,
    value_objects::{ProjectName, ProjectRole, TemplateKind},
};

pub const PRESENTATION: &str = "Presentation";
pub const DOMAIN: &str = "Domain";
pub const APPLICATION: &str = "Application";
pub const INFRA_DATA: &str = "Infra.Data";
pub const INFRA_IOC: &str = "Infra.IoC";

/// Projects in creation order.
pub const PROJECTS: [(&str, TemplateKind, ProjectRole); 5] = [
    (PRESENTATION, TemplateKind::WebApi, ProjectRole::Presentation),
    (DOMAIN, TemplateKind::ClassLib, ProjectRole::Domain),
    (APPLICATION, TemplateKind::ClassLib, ProjectRole::Application),
    (INFRA_DATA, TemplateKind::ClassLib, ProjectRole::InfraData),
    (INFRA_IOC, TemplateKind::ClassLib, ProjectRole::InfraIoc),
];

/// `(from, to)`: `from` references `to`. Wired in this order.
pub const REFERENCES: [(&str, &str); 7] = [
    (APPLICATION, DOMAIN),
    (INFRA_DATA, DOMAIN),
    (INFRA_DATA, APPLICATION),
    (INFRA_IOC, APPLICATION),
    (INFRA_IOC, INFRA_DATA),
    (PRESENTATION, APPLICATION),
    (PRESENTATION, INFRA_IOC),
];

// ── Templates ─────────────────────────────────────────────────────────────────

pub const REPOSITORY_CONTRACT: &str = "namespace Domain;\n\npublic interface IRepository<T>\n{\n    void Add(T entity);\n}";

pub const SERVICE_CONTRACT: &str = "namespace Application;\n\npublic interface IService<T>\n{\n    void Execute(T entity);\n}";

pub const REPOSITORY_IMPLEMENTATION: &str = "using Domain;\n\nnamespace Infra.Data;\n\npublic class Repository<T> : IRepository<T>\n{\n    public void Add(T entity) {}\n}";

pub const DEPENDENCY_REGISTRATION: &str = "using Application;\nusing Domain;\nusing Infra.Data;\nusing Microsoft.Extensions.DependencyInjection;\n\nnamespace Infra.IoC;\n\npublic static class DependencyInjection\n{\n    public static void AddInfrastructure(this IServiceCollection services)\n    {\n        services.AddScoped(typeof(IRepository<>), typeof(Repository<>));\n    }\n}";

/// Template files per role, as `(relative path, content)`.
pub fn role_templates(role: ProjectRole) -> &'static [(&'static str, &'static str)] {
    match role {
        ProjectRole::Presentation => &[],
        ProjectRole::Domain => &[("IRepository.cs", REPOSITORY_CONTRACT)],
        ProjectRole::Application => &[("IService.cs", SERVICE_CONTRACT)],
        ProjectRole::InfraData => &[("Repository.cs", REPOSITORY_IMPLEMENTATION)],
        ProjectRole::InfraIoc => &[("DependencyInjection.cs", DEPENDENCY_REGISTRATION)],
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Project whose generated entry point receives the registration call.
pub const ENTRY_POINT_PROJECT: &str = PRESENTATION;
pub const ENTRY_POINT_FILE: &str = "Program.cs";
pub const ENTRY_POINT_ANCHOR: &str = "var app = builder.Build();";
pub const ENTRY_POINT_MARKER: &str = "AddInfrastructure";
pub const ENTRY_POINT_SNIPPET: &str =
    "Infra.IoC.DependencyInjection.AddInfrastructure(builder.Services);\n\n";

/// Patch registering the IoC module in the Presentation entry point.
pub fn presentation_entry_point() -> Result<EntryPointPatch, DomainError> {
    Ok(EntryPointPatch {
        relative_path: RelativePath::try_new(ENTRY_POINT_FILE)?,
        snippet: ENTRY_POINT_SNIPPET,
        anchor: ENTRY_POINT_ANCHOR,
        marker: ENTRY_POINT_MARKER,
    })
}

/// Build the validated layered-solution graph.
pub fn layered_solution() -> Result<ProjectGraph, DomainError> {
    let mut projects = Vec::with_capacity(PROJECTS.len());
    for (name, kind, role) in PROJECTS {
        let mut spec = ProjectSpec::new(ProjectName::new(name)?, kind, role);
        for &(path, content) in role_templates(role) {
            spec = spec.with_file(FileTemplate::new(path, content)?);
        }
        projects.push(spec);
    }

    let edges = REFERENCES
        .iter()
        .map(|&(from, to)| Ok(DependencyEdge::new(ProjectName::new(from)?, ProjectName::new(to)?)))
        .collect::<Result<Vec<_>, DomainError>>()?;

    ProjectGraph::new(projects, edges)
}
