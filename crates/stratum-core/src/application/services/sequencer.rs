//! Scaffold Sequencer - drives the external tool over the project graph.
//!
//! Two flat passes: create and register every project, then wire every
//! reference. Because all nodes exist before the first edge is wired, the
//! declaration order of projects never has to be a dependency order.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::CommandRunner,
    domain::{CommandInvocation, ProjectGraph, SolutionName, ToolCommands},
    error::StratumResult,
};

/// Issues tool commands for a graph, in a fixed order.
pub struct ScaffoldSequencer<'a> {
    runner: &'a dyn CommandRunner,
    tool: &'a ToolCommands,
}

impl<'a> ScaffoldSequencer<'a> {
    pub fn new(runner: &'a dyn CommandRunner, tool: &'a ToolCommands) -> Self {
        Self { runner, tool }
    }

    /// The exact command list [`Self::sequence`] would run, without running it.
    ///
    /// 1. init solution
    /// 2. per project, in declaration order: new project, add to solution
    /// 3. per edge, in declaration order: add reference
    ///
    /// Every command runs in `workspace_root`, so project files are passed
    /// relative to it.
    pub fn plan(
        &self,
        workspace_root: &Path,
        solution: &SolutionName,
        graph: &ProjectGraph,
    ) -> Vec<CommandInvocation> {
        let mut plan = Vec::with_capacity(1 + graph.projects().len() * 2 + graph.edges().len());

        plan.push(self.tool.init_solution(workspace_root, solution));

        for project in graph.projects() {
            plan.push(
                self.tool
                    .new_project(workspace_root, project.kind(), project.name().as_str()),
            );
            plan.push(
                self.tool
                    .add_to_solution(workspace_root, &project.project_file()),
            );
        }

        for edge in graph.edges() {
            plan.push(self.tool.add_reference(
                workspace_root,
                &edge.from.project_file(),
                &edge.to.project_file(),
            ));
        }

        plan
    }

    /// Run the plan, stopping at the first failing command.
    ///
    /// Returns the number of commands executed. Projects created before a
    /// failure stay on disk.
    #[instrument(skip_all, fields(root = %workspace_root.display(), solution = %solution))]
    pub fn sequence(
        &self,
        workspace_root: &Path,
        solution: &SolutionName,
        graph: &ProjectGraph,
    ) -> StratumResult<usize> {
        let plan = self.plan(workspace_root, solution, graph);
        info!(commands = plan.len(), "Running tool commands");

        for (step, invocation) in plan.iter().enumerate() {
            debug!(step = step + 1, command = %invocation, "Running");
            self.runner.run(invocation)?;
        }

        Ok(plan.len())
    }
}
