use std::path::PathBuf;

use anyhow::Result;
use armeer_core::workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// armeer - task runner for the ARM to EER schema project
#[derive(Parser)]
#[command(name = "armeer")]
#[command(about = "Run, view and clean the ARM to EER schema project")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    workspace: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the main application (src/main.py)
    Run,
    /// Open the schema viewer (src/view.py)
    Gui,
    /// Remove transformed output (EER_XML_Schema/*_transformed.txt)
    Clean,
    /// List the tasks known in this workspace
    List,
    /// Show what a task would do without running it
    Plan {
        /// Name of the task
        task: String,
    },
    /// Run any task by name, including ones from .armeer/tasks.yml
    Task {
        /// Name of the task
        name: String,
    },
    /// Print an ARM model described in a YAML file
    Model {
        /// Path to the model file
        path: PathBuf,
        /// Print the model as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the JSON schema of .armeer/tasks.yml
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Execute command (CLI layer only handles presentation)
    let code = match cli.command {
        Commands::Model { path, json } => {
            commands::model::execute(&path, json)?;
            0
        }
        Commands::Schema => {
            commands::schema::execute()?;
            0
        }
        Commands::List => {
            commands::list::execute(&open_workspace(cli.workspace)?)?;
            0
        }
        Commands::Plan { task } => {
            commands::plan::execute(&open_workspace(cli.workspace)?, &task)?;
            0
        }
        Commands::Run => commands::run::execute(&open_workspace(cli.workspace)?, "run").await?,
        Commands::Gui => commands::run::execute(&open_workspace(cli.workspace)?, "gui").await?,
        Commands::Clean => {
            commands::run::execute(&open_workspace(cli.workspace)?, "clean").await?
        }
        Commands::Task { name } => {
            commands::run::execute(&open_workspace(cli.workspace)?, &name).await?
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn open_workspace(workspace_root: PathBuf) -> Result<WorkspaceManager> {
    WorkspaceManager::new(WorkspaceManagerConfig {
        workspace_root,
        quiet: false,
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize workspace: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("armeer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_fixed_targets_parse_without_arguments() {
        assert!(matches!(parse(&["run"]).command, Commands::Run));
        assert!(matches!(parse(&["gui"]).command, Commands::Gui));
        assert!(matches!(parse(&["clean"]).command, Commands::Clean));
    }

    #[test]
    fn test_fixed_targets_take_no_flags() {
        assert!(Cli::try_parse_from(["armeer", "run", "--fast"]).is_err());
        assert!(Cli::try_parse_from(["armeer", "clean", "extra"]).is_err());
    }

    #[test]
    fn test_workspace_flag_is_global() {
        let cli = parse(&["task", "lint", "-w", "/tmp/schema"]);
        assert_eq!(cli.workspace, PathBuf::from("/tmp/schema"));
        assert!(matches!(cli.command, Commands::Task { ref name } if name == "lint"));
    }

    #[test]
    fn test_workspace_defaults_to_current_directory() {
        assert_eq!(parse(&["list"]).workspace, PathBuf::from("."));
    }
}
