use anyhow::Result;
use armeer_core::results::TaskOutcome;
use armeer_core::workspace_manager::WorkspaceManager;
use colored::*;

/// Run a task and return the status the CLI should exit with
pub async fn execute(manager: &WorkspaceManager, task_name: &str) -> Result<i32> {
    let outcome = manager
        .run_task(task_name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run task '{}': {}", task_name, e))?;

    if let TaskOutcome::Removed { files } = &outcome {
        for file in files {
            let shown = file.strip_prefix(&manager.root).unwrap_or(file);
            println!("  {} {}", "removed".dimmed(), shown.display());
        }
    }

    println!();
    if outcome.success() {
        let message = format!("Task '{}' completed", task_name);
        println!("{} {}", "✓".green().bold(), message.green().bold());
    } else {
        let reason = match &outcome {
            TaskOutcome::Exited { code: Some(code) } => format!("exit code {}", code),
            _ => "terminated by signal".to_string(),
        };
        let message = format!("Task '{}' failed ({})", task_name, reason);
        println!("{} {}", "✗".red().bold(), message.red().bold());
    }

    Ok(outcome.exit_code())
}
