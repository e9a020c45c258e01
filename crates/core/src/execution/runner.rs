//! Task runner
//!
//! Executes a resolved [`TaskExecutionPlan`]. Exactly one step runs per task
//! and its result is returned as-is.

use colored::*;

use crate::execution::clean::remove_matching;
use crate::execution::command::CommandExecutor;
use crate::results::TaskOutcome;
use crate::task_execution::{PlannedStep, TaskExecutionPlan};
use crate::tasks::get_task_color;
use crate::types::ArmeerResult;

/// Configuration for the task runner
#[derive(Debug, Default)]
pub struct TaskRunnerConfig {
    /// Suppress the task header printed before each run
    pub quiet: bool,
}

pub struct TaskRunner {
    config: TaskRunnerConfig,
}

impl TaskRunner {
    pub fn new(config: TaskRunnerConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self, plan: &TaskExecutionPlan) -> ArmeerResult<TaskOutcome> {
        if !self.config.quiet {
            self.print_header(plan);
        }

        tracing::info!(task = %plan.task_name, step = %plan.step, "running task");

        let executor = CommandExecutor::new(&plan.working_dir, &plan.task_name);
        match &plan.step {
            PlannedStep::Script {
                interpreter,
                script,
            } => executor.execute_script(interpreter, script).await,
            PlannedStep::Shell { line } => executor.execute_shell_command(line).await,
            PlannedStep::Program { program, args } => {
                executor.execute_command_with_args(program, args).await
            }
            PlannedStep::Remove { patterns } => {
                let files = remove_matching(&plan.working_dir, patterns)?;
                Ok(TaskOutcome::Removed { files })
            }
        }
    }

    fn print_header(&self, plan: &TaskExecutionPlan) {
        let task_color = get_task_color(&plan.task_name);
        println!(
            "┌─ {} {}",
            "Running task".bold(),
            plan.task_name.color(task_color).bold()
        );
        println!("└─ {} {}", "Step:".bright_black(), plan.step);
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::configs::tasks::{Command, TaskConfig};
    use crate::task_execution::resolve_task_execution_plan;
    use crate::tasks::{merge_tasks, ResolvedTask, TaskSource};

    fn quiet_runner() -> TaskRunner {
        TaskRunner::new(TaskRunnerConfig { quiet: true })
    }

    #[tokio::test]
    async fn test_run_executes_only_the_main_script() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("src")).unwrap();
        // Both scripts are valid shell so `sh` can stand in for the interpreter
        std::fs::write(root.join("src/main.py"), "echo main >> invoked.log\n").unwrap();
        std::fs::write(root.join("src/view.py"), "echo view >> invoked.log\n").unwrap();

        let tasks = merge_tasks(&[]);
        let plan = resolve_task_execution_plan(root, "sh", &tasks["run"]).unwrap();
        let outcome = quiet_runner().run(&plan).await.unwrap();

        assert!(outcome.success());
        let log = std::fs::read_to_string(root.join("invoked.log")).unwrap();
        assert_eq!(log, "main\n");
    }

    #[tokio::test]
    async fn test_failed_command_outcome_is_not_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let task = ResolvedTask {
            config: TaskConfig {
                name: "broken".to_string(),
                description: None,
                script: None,
                command: Some(Command::Single("exit 7".to_string())),
                remove: None,
            },
            source: TaskSource::Configured,
        };

        let plan = resolve_task_execution_plan(temp_dir.path(), "python3", &task).unwrap();
        let outcome = quiet_runner().run(&plan).await.unwrap();
        assert_eq!(outcome.exit_code(), 7);
    }

    #[tokio::test]
    async fn test_clean_reports_removed_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("EER_XML_Schema");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("m_transformed.txt"), "x").unwrap();

        let tasks = merge_tasks(&[]);
        let plan = resolve_task_execution_plan(temp_dir.path(), "python3", &tasks["clean"]).unwrap();
        let outcome = quiet_runner().run(&plan).await.unwrap();

        assert_eq!(
            outcome,
            TaskOutcome::Removed {
                files: vec![dir.join("m_transformed.txt")]
            }
        );
    }
}
