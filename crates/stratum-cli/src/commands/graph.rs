//! Implementation of the `stratum graph` command.

use serde::Serialize;

use stratum_core::{
    domain::{ProjectGraph, blueprint},
    error::StratumError,
};

use crate::{
    cli::{GraphArgs, GraphFormat},
    error::CliResult,
    output::OutputManager,
};

/// Serialisable view of the blueprint.
#[derive(Debug, Serialize)]
struct GraphView {
    projects: Vec<ProjectView>,
    references: Vec<ReferenceView>,
    build_order: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ProjectView {
    name: String,
    template: &'static str,
    role: &'static str,
    files: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ReferenceView {
    from: String,
    to: String,
}

impl From<&ProjectGraph> for GraphView {
    fn from(graph: &ProjectGraph) -> Self {
        Self {
            projects: graph
                .projects()
                .iter()
                .map(|p| ProjectView {
                    name: p.name().to_string(),
                    template: p.kind().short_name(),
                    role: p.role().as_str(),
                    files: p
                        .files()
                        .iter()
                        .map(|f| f.path.to_string())
                        .collect(),
                })
                .collect(),
            references: graph
                .edges()
                .iter()
                .map(|e| ReferenceView {
                    from: e.from.to_string(),
                    to: e.to.to_string(),
                })
                .collect(),
            build_order: graph
                .topological_order()
                .into_iter()
                .map(|p| p.name().to_string())
                .collect(),
        }
    }
}

pub fn execute(args: GraphArgs, output: &OutputManager) -> CliResult<()> {
    let graph = blueprint::layered_solution().map_err(StratumError::from)?;
    let view = GraphView::from(&graph);

    // The global `--output-format json` also selects JSON.
    let format = if output.is_json() {
        GraphFormat::Json
    } else {
        args.format
    };

    match format {
        GraphFormat::Table => {
            output.header("Projects:")?;
            for project in &view.projects {
                let files = if project.files.is_empty() {
                    "-".to_string()
                } else {
                    project.files.join(", ")
                };
                output.print(&format!(
                    "  {:<14} {:<9} {:<14} {}",
                    project.name, project.template, project.role, files
                ))?;
            }
            output.print("")?;
            output.header("References:")?;
            for reference in &view.references {
                output.print(&format!("  {} -> {}", reference.from, reference.to))?;
            }
            output.print("")?;
            output.header("Build order:")?;
            output.print(&format!("  {}", view.build_order.join(" -> ")))?;
        }
        GraphFormat::List => {
            for name in &view.build_order {
                output.print(name)?;
            }
        }
        GraphFormat::Json => output.json(&view)?,
    }

    Ok(())
}
