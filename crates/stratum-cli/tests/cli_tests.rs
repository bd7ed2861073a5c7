//! Integration tests for the `stratum` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stratum() -> Command {
    let mut cmd = Command::cargo_bin("stratum").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    stratum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stratum"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("graph"));
}

#[test]
fn test_version_flag() {
    stratum()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_command_help() {
    stratum()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--tool"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    stratum().arg("frobnicate").assert().code(2);
}

// ── graph ─────────────────────────────────────────────────────────────────────

#[test]
fn test_graph_list_is_build_order() {
    stratum()
        .args(["graph", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Domain\n"))
        .stdout(predicate::str::ends_with("Presentation\n"));
}

#[test]
fn test_graph_json() {
    let output = stratum()
        .args(["graph", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["projects"].as_array().unwrap().len(), 5);
    assert_eq!(json["references"].as_array().unwrap().len(), 7);
    assert_eq!(json["references"][0]["from"], "Application");
    assert_eq!(json["references"][0]["to"], "Domain");
}

// ── new: dry run and validation ───────────────────────────────────────────────

#[test]
fn test_dry_run_prints_plan_without_side_effects() {
    let temp = TempDir::new().unwrap();

    stratum()
        .args(["new", "Shop", "--dry-run", "--dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("dotnet new sln -n Shop"))
        .stdout(predicate::str::contains("dotnet new webapi -n Presentation"))
        .stdout(predicate::str::contains("reference"));

    assert!(!temp.path().join("Shop").exists());
}

#[test]
fn test_dry_run_json_lists_every_command() {
    let temp = TempDir::new().unwrap();

    let output = stratum()
        .args(["--output-format", "json", "new", "Shop", "--dry-run", "--tool", "mydotnet", "--dir"])
        .arg(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let plan = plan.as_array().unwrap();
    assert_eq!(plan.len(), 18);
    assert_eq!(plan[0]["program"], "mydotnet");
    assert_eq!(plan[0]["args"], serde_json::json!(["new", "sln", "-n", "Shop"]));
}

#[test]
fn test_blank_name_is_user_error() {
    let temp = TempDir::new().unwrap();

    stratum()
        .args(["new", "   ", "-y", "--dir"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("solution name"));

    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_tool_reports_and_exits_one() {
    let temp = TempDir::new().unwrap();

    stratum()
        .args(["new", "Shop", "-y", "--tool", "/nonexistent/stratum-dotnet", "--dir"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to create solution 'Shop'"))
        .stderr(predicate::str::contains("/nonexistent/stratum-dotnet"));
}

// ── new: against a fake tool ──────────────────────────────────────────────────

#[cfg(unix)]
mod fake_tool {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    const SUCCEEDS: &str = r#"#!/bin/sh
if [ "$1" = "new" ] && [ "$2" != "sln" ]; then
  mkdir "$4" || exit 1
  echo '<Project />' > "$4/$4.csproj"
  if [ "$2" = "webapi" ]; then
    printf 'var builder = WebApplication.CreateBuilder(args);\n\nvar app = builder.Build();\n\napp.Run();\n' > "$4/Program.cs"
  fi
fi
if [ "$1" = "sln" ] && [ ! -f "$3" ]; then
  echo "Project file '$3' not found (cwd $(pwd))" >&2
  exit 1
fi
if [ "$1" = "add" ]; then
  for project in "$2" "$4"; do
    if [ ! -f "$project" ]; then
      echo "Project file '$project' not found (cwd $(pwd))" >&2
      exit 1
    fi
  done
fi
exit 0
"#;

    const FAILS_ON_CLASSLIB: &str = r#"#!/bin/sh
if [ "$2" = "classlib" ]; then
  echo "disk full" >&2
  exit 1
fi
if [ "$1" = "new" ] && [ "$2" = "webapi" ]; then
  mkdir "$4"
fi
exit 0
"#;

    fn install(dir: &Path, script: &str) -> PathBuf {
        let path = dir.join("fake-dotnet");
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_new_creates_patched_solution() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let tool = install(tools.path(), SUCCEEDS);

        stratum()
            .args(["new", "Shop", "-y", "--tool"])
            .arg(&tool)
            .arg("--dir")
            .arg(work.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Solution 'Shop' created successfully!",
            ));

        let root = work.path().join("Shop");
        assert!(root.join("Domain/IRepository.cs").is_file());
        assert!(root.join("Application/IService.cs").is_file());
        assert!(root.join("Infra.Data/Repository.cs").is_file());
        assert!(root.join("Infra.IoC/DependencyInjection.cs").is_file());

        let program = std::fs::read_to_string(root.join("Presentation/Program.cs")).unwrap();
        let registration = "Infra.IoC.DependencyInjection.AddInfrastructure(builder.Services);";
        assert_eq!(program.matches(registration).count(), 1);
        assert!(program.find(registration) < program.find("var app = builder.Build();"));
    }

    #[test]
    fn test_new_in_current_directory() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let tool = install(tools.path(), SUCCEEDS);
        let config = tools.path().join("empty.toml");
        std::fs::write(&config, "").unwrap();

        stratum()
            .current_dir(work.path())
            .env_remove("STRATUM_DEFAULTS__DIRECTORY")
            .arg("--config")
            .arg(&config)
            .args(["new", "Shop", "-y", "--tool"])
            .arg(&tool)
            .assert()
            .success()
            .stderr(predicate::str::contains("not found").not());

        let root = work.path().join("Shop");
        assert!(root.join("Infra.IoC/Infra.IoC.csproj").is_file());
        let program = std::fs::read_to_string(root.join("Presentation/Program.cs")).unwrap();
        assert!(program.contains("AddInfrastructure(builder.Services);"));
    }

    #[test]
    fn test_new_relative_dir() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let tool = install(tools.path(), SUCCEEDS);

        stratum()
            .current_dir(work.path())
            .args(["new", "Shop", "-y", "--dir", "src", "--tool"])
            .arg(&tool)
            .assert()
            .success();

        assert!(work.path().join("src/Shop/Domain/IRepository.cs").is_file());
    }

    #[test]
    fn test_new_json_report() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let tool = install(tools.path(), SUCCEEDS);

        let output = stratum()
            .args(["--output-format", "json", "new", "Shop", "--tool"])
            .arg(&tool)
            .arg("--dir")
            .arg(work.path())
            .output()
            .unwrap();
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["solution_name"], "Shop");
        assert_eq!(report["commands_run"], 18);
        assert_eq!(report["entry_point"], "patched");
        assert_eq!(report["files_written"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_tool_failure_surfaces_stderr() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let tool = install(tools.path(), FAILS_ON_CLASSLIB);

        stratum()
            .args(["new", "Shop", "-y", "--tool"])
            .arg(&tool)
            .arg("--dir")
            .arg(work.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("disk full"))
            .stderr(predicate::str::contains("new classlib -n Domain"));

        let root = work.path().join("Shop");
        assert!(root.join("Presentation").is_dir());
        assert!(!root.join("Domain").exists());
        assert!(!root.join("Infra.IoC/DependencyInjection.cs").exists());
    }
}

// ── config / init / completions ──────────────────────────────────────────────

#[test]
fn test_missing_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    stratum()
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .arg("graph")
        .assert()
        .code(4);
}

#[test]
fn test_config_get_reads_env() {
    stratum()
        .env("STRATUM_TOOL__EXECUTABLE", "/opt/dotnet/dotnet")
        .args(["config", "get", "tool.executable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/dotnet/dotnet"));
}

#[test]
fn test_config_get_unknown_key() {
    stratum()
        .args(["config", "get", "no.such.key"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_init_writes_config_once() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("stratum.toml");

    stratum()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("executable = \"dotnet\""));

    stratum()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    stratum()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "tool.executable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dotnet"));
}

#[test]
fn test_no_color_env_accepts_any_value() {
    for value in ["1", "true", "yes"] {
        stratum()
            .env("NO_COLOR", value)
            .args(["graph", "--format", "list"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Domain\n"));
    }
}

#[test]
fn test_completions_bash() {
    stratum()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stratum"));
}
