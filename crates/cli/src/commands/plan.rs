use anyhow::Result;
use armeer_core::task_execution::preview_removals;
use armeer_core::workspace_manager::WorkspaceManager;
use colored::*;

pub fn execute(manager: &WorkspaceManager, task_name: &str) -> Result<()> {
    println!("{} {}", "Execution plan for".bold(), task_name.cyan());

    let plan = manager
        .get_execution_plan(task_name)
        .map_err(|e| anyhow::anyhow!("Failed to get execution plan: {}", e))?;

    println!("  {} {}", "Source:".bright_black(), plan.source);
    println!("  {} {}", "Directory:".bright_black(), plan.working_dir.display());
    println!("  {} {}", "Step:".bright_black(), plan.step);

    for (pattern, files) in preview_removals(&plan)? {
        println!();
        println!("{} {}", "Matches for".bold(), pattern.cyan());
        if files.is_empty() {
            println!("  {}", "none (clean would fail)".yellow());
        }
        for file in files {
            let shown = file.strip_prefix(&plan.working_dir).unwrap_or(&file);
            println!("  {}", shown.display());
        }
    }

    Ok(())
}
