use std::fmt;
use std::path::{Path, PathBuf};

use crate::configs::tasks::{Command, TaskAction};
use crate::execution::clean::find_matches;
use crate::tasks::{ResolvedTask, TaskSource};
use crate::types::{ArmeerError, ArmeerResult};

/// What a task will do once started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedStep {
    /// Run a script with the workspace interpreter
    Script {
        interpreter: String,
        script: String,
    },
    /// Hand a line to `sh -c`
    Shell { line: String },
    /// Spawn a program directly
    Program { program: String, args: Vec<String> },
    /// Delete files matching patterns
    Remove { patterns: Vec<String> },
}

impl fmt::Display for PlannedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Script {
                interpreter,
                script,
            } => write!(f, "{} {}", interpreter, script),
            Self::Shell { line } => write!(f, "sh -c '{}'", line),
            Self::Program { program, args } if args.is_empty() => write!(f, "{}", program),
            Self::Program { program, args } => write!(f, "{} {}", program, args.join(" ")),
            Self::Remove { patterns } => write!(f, "remove {}", patterns.join(" ")),
        }
    }
}

/// Result of resolving how a task should execute
#[derive(Debug, Clone)]
pub struct TaskExecutionPlan {
    pub task_name: String,
    pub source: TaskSource,
    pub working_dir: PathBuf,
    pub step: PlannedStep,
}

/// Turn a task definition into a concrete step, without running anything
pub fn resolve_task_execution_plan(
    workspace_root: &Path,
    interpreter: &str,
    task: &ResolvedTask,
) -> ArmeerResult<TaskExecutionPlan> {
    let step = match task.config.action()? {
        TaskAction::Script(script) => PlannedStep::Script {
            interpreter: interpreter.to_string(),
            script,
        },
        TaskAction::Command(Command::Single(line)) => PlannedStep::Shell { line },
        TaskAction::Command(Command::Multiple(argv)) => {
            let Some((program, args)) = argv.split_first() else {
                return Err(ArmeerError::Config(format!(
                    "Task '{}' has an empty command",
                    task.config.name
                )));
            };
            PlannedStep::Program {
                program: program.clone(),
                args: args.to_vec(),
            }
        }
        TaskAction::Remove(patterns) => PlannedStep::Remove { patterns },
    };

    Ok(TaskExecutionPlan {
        task_name: task.config.name.clone(),
        source: task.source,
        working_dir: workspace_root.to_path_buf(),
        step,
    })
}

/// Files a remove step would delete right now, grouped by pattern
pub fn preview_removals(plan: &TaskExecutionPlan) -> ArmeerResult<Vec<(String, Vec<PathBuf>)>> {
    match &plan.step {
        PlannedStep::Remove { patterns } => Ok(find_matches(&plan.working_dir, patterns)?
            .into_iter()
            .map(|m| (m.pattern, m.files))
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::tasks::TaskConfig;
    use crate::tasks::merge_tasks;

    #[test]
    fn test_run_plans_exactly_the_main_script() {
        let tasks = merge_tasks(&[]);
        let plan = resolve_task_execution_plan(Path::new("/ws"), "python3", &tasks["run"]).unwrap();

        assert_eq!(
            plan.step,
            PlannedStep::Script {
                interpreter: "python3".to_string(),
                script: "src/main.py".to_string(),
            }
        );
        assert_eq!(plan.step.to_string(), "python3 src/main.py");
        assert_eq!(plan.working_dir, PathBuf::from("/ws"));
    }

    #[test]
    fn test_gui_plans_exactly_the_viewer_script() {
        let tasks = merge_tasks(&[]);
        let plan = resolve_task_execution_plan(Path::new("/ws"), "python", &tasks["gui"]).unwrap();
        assert_eq!(plan.step.to_string(), "python src/view.py");
    }

    #[test]
    fn test_clean_plans_a_removal() {
        let tasks = merge_tasks(&[]);
        let plan = resolve_task_execution_plan(Path::new("/ws"), "python3", &tasks["clean"]).unwrap();
        assert_eq!(
            plan.step,
            PlannedStep::Remove {
                patterns: vec!["EER_XML_Schema/*_transformed.txt".to_string()]
            }
        );
    }

    #[test]
    fn test_empty_argv_is_rejected() {
        let task = ResolvedTask {
            config: TaskConfig {
                name: "nothing".to_string(),
                description: None,
                script: None,
                command: Some(Command::Multiple(Vec::new())),
                remove: None,
            },
            source: TaskSource::Configured,
        };

        let err = resolve_task_execution_plan(Path::new("/ws"), "python3", &task).unwrap_err();
        assert!(matches!(err, ArmeerError::Config(_)));
    }

    #[test]
    fn test_preview_lists_matches_without_deleting() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("EER_XML_Schema");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("a_transformed.txt"), "x").unwrap();

        let tasks = merge_tasks(&[]);
        let plan = resolve_task_execution_plan(temp_dir.path(), "python3", &tasks["clean"]).unwrap();
        let preview = preview_removals(&plan).unwrap();

        assert_eq!(preview.len(), 1);
        assert_eq!(preview[0].1, vec![dir.join("a_transformed.txt")]);
        assert!(dir.join("a_transformed.txt").exists());
    }
}
