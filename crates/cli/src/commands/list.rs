use anyhow::Result;
use armeer_core::tasks::{get_task_color, TaskSource};
use armeer_core::workspace_manager::WorkspaceManager;
use colored::*;

pub fn execute(manager: &WorkspaceManager) -> Result<()> {
    let result = manager.list_tasks()?;

    println!("{}", "Tasks".bold().underline());

    for task in &result.tasks {
        let source = match task.source {
            TaskSource::Builtin => task.source.to_string().dimmed(),
            TaskSource::Configured => task.source.to_string().green(),
        };
        println!(
            "{} [{}]",
            task.name.color(get_task_color(&task.name)).bold(),
            source
        );
        if let Some(description) = &task.description {
            println!("  {}", description);
        }
        println!("  {} {}", "->".dimmed(), task.summary);
    }

    Ok(())
}
