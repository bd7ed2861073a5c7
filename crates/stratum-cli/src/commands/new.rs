//! Implementation of the `stratum new` command.
//!
//! Responsibility: translate CLI arguments into a `SolutionRequest`, call the
//! core solution service, and display results. No business logic lives here.

use std::io::IsTerminal as _;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use stratum_adapters::{LocalFilesystem, ProcessRunner};
use stratum_core::{
    application::{ScaffoldReport, SolutionService},
    domain::{CommandInvocation, PatchOutcome, SolutionRequest, ToolCommands, blueprint},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stratum new` command.
///
/// Dispatch sequence:
/// 1. Resolve directory and tool from flags, then config, then defaults
/// 2. Dry run: print the command plan and stop
/// 3. Confirm with the user unless `--yes`, `--quiet` or non-interactive
/// 4. Run `SolutionService::create_solution`
/// 5. Print the report
#[instrument(skip_all, fields(solution = %args.name))]
pub fn execute(
    args: NewArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    // 1. Resolve inputs
    let directory = resolve_directory(args.dir.as_ref(), config);
    let tool = ToolCommands::new(
        args.tool
            .clone()
            .unwrap_or_else(|| config.tool.executable.clone()),
    );
    let request = SolutionRequest::new(args.name.clone(), directory);

    debug!(
        directory = %request.directory_path.display(),
        tool = tool.executable(),
        "Request resolved"
    );

    let service = SolutionService::layered(
        Box::new(ProcessRunner::new()),
        Box::new(LocalFilesystem::new()),
        tool,
    )?;

    // 2. Dry run: describe but do not run.
    if args.dry_run {
        let plan = service.plan(&request)?;
        return show_plan(&plan, &request, output);
    }

    // 3. Confirm
    let interactive = std::io::stdin().is_terminal();
    if interactive && !global.quiet && !args.yes && !output.is_json() {
        show_configuration(&request, service.tool(), output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Scaffold
    let spinner = output.spinner(&format!("Creating solution '{}'...", request.solution_name));
    info!("Scaffold started");
    let result = service.create_solution(&request);
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let report = result?;
    info!(run_id = %report.run_id, "Scaffold completed");

    // 5. Report
    if output.is_json() {
        return output.json(&report);
    }
    show_report(&report, output)
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// `--dir`, else `defaults.directory`, else the current directory.
fn resolve_directory(flag: Option<&PathBuf>, config: &AppConfig) -> PathBuf {
    flag.cloned()
        .or_else(|| config.defaults.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(
    plan: &[CommandInvocation],
    request: &SolutionRequest,
    out: &OutputManager,
) -> CliResult<()> {
    if out.is_json() {
        return out.json(plan);
    }

    let workspace = plan
        .first()
        .map(|c| c.working_dir.display().to_string())
        .unwrap_or_default();
    out.info(&format!(
        "Dry run: would create '{}' at {} with {} commands",
        request.solution_name.trim(),
        workspace,
        plan.len(),
    ))?;
    for (step, command) in plan.iter().enumerate() {
        out.print(&format!("  {:>2}. {}", step + 1, command))?;
    }
    Ok(())
}

fn show_configuration(
    request: &SolutionRequest,
    tool: &ToolCommands,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Solution:  {}", request.solution_name.trim()))?;
    out.print(&format!("  Location:  {}", request.directory_path.display()))?;
    out.print(&format!("  Tool:      {}", tool.executable()))?;
    out.print("  Projects:  Presentation, Domain, Application, Infra.Data, Infra.IoC")?;
    out.print("")?;
    Ok(())
}

fn show_report(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    out.success(&report.message())?;

    let elapsed = report.finished_at - report.started_at;
    out.print(&format!("  Workspace:  {}", report.workspace.display()))?;
    out.print(&format!("  Commands:   {}", report.commands_run))?;
    out.print(&format!("  Files:      {}", report.files_written.len()))?;
    out.print(&format!(
        "  Took:       {:.1}s",
        elapsed.num_milliseconds() as f64 / 1000.0
    ))?;

    match report.entry_point {
        PatchOutcome::Patched => out.info(&format!(
            "Registered Infra.IoC in {}/{}",
            blueprint::ENTRY_POINT_PROJECT,
            blueprint::ENTRY_POINT_FILE
        ))?,
        PatchOutcome::AlreadyPatched => out.info(&format!(
            "{}/{} already registers Infra.IoC",
            blueprint::ENTRY_POINT_PROJECT,
            blueprint::ENTRY_POINT_FILE
        ))?,
        PatchOutcome::MissingFile => out.warning(&format!(
            "{}/{} was not generated; register Infra.IoC by hand",
            blueprint::ENTRY_POINT_PROJECT,
            blueprint::ENTRY_POINT_FILE
        ))?,
    }

    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", report.workspace.display()))?;
    out.print("  dotnet build")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation input".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
