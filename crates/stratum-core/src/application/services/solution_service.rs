//! Solution Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the request (no side effects before this passes)
//! 2. Create the workspace root
//! 3. Sequence tool commands over the project graph
//! 4. Generate template files per project
//! 5. Patch the Presentation entry point
//!
//! Any failure after step 1 is wrapped in a single `StratumError::Scaffold`.
//! Nothing is rolled back.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::{
    application::{
        ports::{CommandRunner, Filesystem},
        services::{EntryPointPatcher, ScaffoldSequencer, TemplateGenerator},
    },
    domain::{
        CommandInvocation, DomainValidator as validator, EntryPointPatch, PatchOutcome,
        ProjectGraph, SolutionName, SolutionRequest, ToolCommands, blueprint,
    },
    error::{StratumError, StratumResult},
};

/// Summary of a successful `create_solution` run.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub run_id: Uuid,
    pub solution_name: SolutionName,
    pub workspace: PathBuf,
    pub commands_run: usize,
    pub files_written: Vec<PathBuf>,
    pub entry_point: PatchOutcome,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ScaffoldReport {
    /// Human-readable confirmation.
    pub fn message(&self) -> String {
        format!("Solution '{}' created successfully!", self.solution_name)
    }
}

/// Main scaffolding service.
///
/// Holds the adapters plus the immutable graph and tool mapping; keeps no
/// per-call state, so one instance can serve many requests (though two
/// requests for the same workspace must not run concurrently).
pub struct SolutionService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    graph: ProjectGraph,
    tool: ToolCommands,
    entry_point: EntryPointPatch,
    entry_point_project: String,
}

impl SolutionService {
    /// Create a service over an explicit graph and entry-point patch.
    pub fn new(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        graph: ProjectGraph,
        tool: ToolCommands,
        entry_point: EntryPointPatch,
        entry_point_project: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            filesystem,
            graph,
            tool,
            entry_point,
            entry_point_project: entry_point_project.into(),
        }
    }

    /// Create a service for the built-in layered solution.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stratum_core::application::SolutionService;
    /// use stratum_core::domain::{SolutionRequest, ToolCommands};
    ///
    /// let service = SolutionService::layered(
    ///     runner,     // impl CommandRunner
    ///     filesystem, // impl Filesystem
    ///     ToolCommands::default(),
    /// )?;
    /// let report = service.create_solution(&SolutionRequest::new("Shop", "/tmp/x"))?;
    /// println!("{}", report.message());
    /// ```
    pub fn layered(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        tool: ToolCommands,
    ) -> StratumResult<Self> {
        Ok(Self::new(
            runner,
            filesystem,
            blueprint::layered_solution()?,
            tool,
            blueprint::presentation_entry_point()?,
            blueprint::ENTRY_POINT_PROJECT,
        ))
    }

    pub fn tool(&self) -> &ToolCommands {
        &self.tool
    }

    /// Scaffold a new solution.
    ///
    /// This is the main use case.
    #[instrument(
        skip_all,
        fields(
            solution = %request.solution_name,
            directory = %request.directory_path.display()
        )
    )]
    pub fn create_solution(&self, request: &SolutionRequest) -> StratumResult<ScaffoldReport> {
        // 1. Validate before touching anything
        let name = validator::validate_request(request)?;
        let workspace = request.workspace_root(&name);

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let clock = Instant::now();
        info!(%run_id, workspace = %workspace.display(), "Scaffolding solution");

        // 2-5. Everything with side effects
        let (commands_run, files_written, entry_point) = self
            .run_steps(&workspace, &name)
            .inspect_err(|e| error!(%run_id, error = %e, "Scaffold failed"))
            .map_err(|e| StratumError::scaffold(name.as_str(), e))?;

        info!(
            %run_id,
            commands = commands_run,
            files = files_written.len(),
            elapsed_ms = clock.elapsed().as_millis() as u64,
            "Scaffold completed successfully"
        );

        Ok(ScaffoldReport {
            run_id,
            solution_name: name,
            workspace,
            commands_run,
            files_written,
            entry_point,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// The tool commands `create_solution` would run, without side effects.
    pub fn plan(&self, request: &SolutionRequest) -> StratumResult<Vec<CommandInvocation>> {
        let name = validator::validate_request(request)?;
        let workspace = request.workspace_root(&name);
        Ok(ScaffoldSequencer::new(self.runner.as_ref(), &self.tool).plan(
            &workspace,
            &name,
            &self.graph,
        ))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run_steps(
        &self,
        workspace: &Path,
        name: &SolutionName,
    ) -> StratumResult<(usize, Vec<PathBuf>, PatchOutcome)> {
        self.filesystem.create_dir_all(workspace)?;

        let commands_run = ScaffoldSequencer::new(self.runner.as_ref(), &self.tool)
            .sequence(workspace, name, &self.graph)?;

        let generator = TemplateGenerator::new(self.filesystem.as_ref());
        let mut files_written = Vec::new();
        for project in self.graph.projects() {
            files_written.extend(generator.generate(workspace, project)?);
        }

        let entry_point = self.patch_entry_point(workspace)?;

        Ok((commands_run, files_written, entry_point))
    }

    fn patch_entry_point(&self, workspace: &Path) -> StratumResult<PatchOutcome> {
        let Some(project) = self.graph.get(&self.entry_point_project) else {
            return Err(StratumError::Internal {
                message: format!(
                    "entry point project '{}' is not part of the graph",
                    self.entry_point_project
                ),
            });
        };

        let path = project
            .directory(workspace)
            .join(self.entry_point.relative_path.as_path());

        EntryPointPatcher::new(self.filesystem.as_ref()).patch(&path, &self.entry_point)
    }
}
