//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stratum",
    bin_name = "stratum",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered .NET solution scaffolding",
    long_about = "Stratum creates a five-project layered solution \
                  (Presentation, Domain, Application, Infra.Data, Infra.IoC) \
                  by driving the dotnet CLI, then writes the starter sources \
                  and registers the IoC module in Program.cs.",
    after_help = "EXAMPLES:\n\
        \x20 stratum new Shop --dir ~/src\n\
        \x20 stratum new Shop --dry-run\n\
        \x20 stratum graph --format list\n\
        \x20 stratum completions bash > /usr/share/bash-completion/completions/stratum",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new layered solution.
    #[command(
        visible_alias = "n",
        about = "Create a new solution",
        after_help = "EXAMPLES:\n\
            \x20 stratum new Shop\n\
            \x20 stratum new Shop --dir /tmp/x --yes\n\
            \x20 stratum new Shop --tool /usr/local/share/dotnet/dotnet\n\
            \x20 stratum new Shop --dry-run --output-format json"
    )]
    New(NewArgs),

    /// Show the projects and references that `new` creates.
    #[command(
        about = "Show the solution blueprint",
        after_help = "EXAMPLES:\n\
            \x20 stratum graph\n\
            \x20 stratum graph --format list\n\
            \x20 stratum graph --format json"
    )]
    Graph(GraphArgs),

    /// Initialise a Stratum configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stratum init           # default location\n\
            \x20 stratum init --force   # overwrite an existing file\n\
            \x20 stratum -c ./stratum.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stratum completions bash > ~/.local/share/bash-completion/completions/stratum\n\
            \x20 stratum completions zsh  > ~/.zfunc/_stratum\n\
            \x20 stratum completions fish > ~/.config/fish/completions/stratum.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stratum configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stratum config get tool.executable\n\
            \x20 stratum config list\n\
            \x20 stratum config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stratum new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Solution name; becomes the workspace directory and the `.sln` name.
    #[arg(value_name = "SOLUTION_NAME", help = "Solution name")]
    pub name: String,

    /// Parent directory of the workspace.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Directory to create the solution in (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Print the tool commands without running anything.
    #[arg(long = "dry-run", help = "Show the commands that would run")]
    pub dry_run: bool,

    /// Path or name of the dotnet executable.
    #[arg(
        long = "tool",
        value_name = "PATH",
        help = "dotnet executable to use (default: from config, else 'dotnet')"
    )]
    pub tool: Option<String>,
}

// ── graph ─────────────────────────────────────────────────────────────────────

/// Arguments for `stratum graph`.
#[derive(Debug, Args)]
pub struct GraphArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: GraphFormat,
}

/// Output format for the `graph` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    /// Human-readable table.
    Table,
    /// One project per line, in build order.
    List,
    /// JSON document.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stratum init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stratum completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stratum config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `tool.executable`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["stratum", "new", "Shop", "--dir", "/tmp/x", "-y"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name, "Shop");
                assert_eq!(args.dir, Some(PathBuf::from("/tmp/x")));
                assert!(args.yes);
                assert!(!args.dry_run);
                assert!(args.tool.is_none());
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn new_alias() {
        let cli = Cli::parse_from(["stratum", "n", "Shop", "--dry-run", "--tool", "/opt/dotnet"]);
        match cli.command {
            Commands::New(args) => {
                assert!(args.dry_run);
                assert_eq!(args.tool.as_deref(), Some("/opt/dotnet"));
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn new_requires_name() {
        assert!(Cli::try_parse_from(["stratum", "new"]).is_err());
    }

    #[test]
    fn graph_format_defaults_to_table() {
        let cli = Cli::parse_from(["stratum", "graph"]);
        match cli.command {
            Commands::Graph(args) => assert_eq!(args.format, GraphFormat::Table),
            other => panic!("expected Graph command, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["stratum", "graph", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stratum", "--quiet", "--verbose", "graph"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_color_flag_takes_no_value() {
        let cli = Cli::parse_from(["stratum", "--no-color", "graph"]);
        assert!(cli.global.no_color);
    }
}
