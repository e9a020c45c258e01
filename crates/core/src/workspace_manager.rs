//! High-level workspace management interface
//!
//! This module provides the [`WorkspaceManager`] which serves as the primary interface
//! for all task operations. It loads the optional configuration files under
//! `.armeer/`, merges configured tasks over the built-in `run`, `gui` and `clean`,
//! and resolves and runs tasks by name.
//!
//! ## Example
//!
//! ```rust,no_run
//! use armeer_core::workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> armeer_core::types::ArmeerResult<()> {
//! let manager = WorkspaceManager::new(WorkspaceManagerConfig {
//!     workspace_root: PathBuf::from("."),
//!     ..Default::default()
//! })?;
//!
//! // Show what `clean` would do
//! let plan = manager.get_execution_plan("clean")?;
//!
//! // Run the main application and pass its status through
//! let outcome = manager.run_task("run").await?;
//! std::process::exit(outcome.exit_code());
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::configs::{
    tasks::{parse_tasks_config, TasksFileConfig},
    workspace::{parse_workspace_config, WorkspaceConfig},
};
use crate::execution::{TaskRunner, TaskRunnerConfig};
use crate::results::{TaskInfo, TaskListResult, TaskOutcome};
use crate::task_execution::{resolve_task_execution_plan, TaskExecutionPlan};
use crate::tasks::{merge_tasks, ResolvedTask};
use crate::types::{ArmeerError, ArmeerResult};

const CONFIG_DIR: &str = ".armeer";
const WORKSPACE_FILE: &str = "workspace.yml";
const TASKS_FILE: &str = "tasks.yml";

/// High-level workspace manager that encapsulates all task operations
pub struct WorkspaceManager {
    pub root: PathBuf,
    pub workspace_config: WorkspaceConfig,
    tasks: BTreeMap<String, ResolvedTask>,
    quiet: bool,
}

/// Configuration for initializing a workspace manager
#[derive(Debug, Default)]
pub struct WorkspaceManagerConfig {
    pub workspace_root: PathBuf,
    /// Do not print task headers while running
    pub quiet: bool,
}

impl WorkspaceManager {
    /// Initialize a new workspace manager from the given workspace root
    pub fn new(config: WorkspaceManagerConfig) -> ArmeerResult<Self> {
        let root = config.workspace_root;

        let workspace_config = Self::load_workspace_config(&root)?;
        let task_configs = Self::load_task_configs(&root)?;
        let tasks = merge_tasks(&task_configs.tasks);

        tracing::debug!(
            root = %root.display(),
            interpreter = workspace_config.interpreter(),
            tasks = tasks.len(),
            "workspace loaded"
        );

        Ok(Self {
            root,
            workspace_config,
            tasks,
            quiet: config.quiet,
        })
    }

    /// List all tasks known in the workspace, sorted by name
    pub fn list_tasks(&self) -> ArmeerResult<TaskListResult> {
        let tasks = self
            .tasks
            .values()
            .map(|task| {
                let summary = match self.plan_for(task) {
                    Ok(plan) => plan.step.to_string(),
                    Err(e) => format!("invalid: {}", e),
                };
                TaskInfo {
                    name: task.config.name.clone(),
                    description: task.config.description.clone(),
                    source: task.source,
                    summary,
                }
            })
            .collect();

        Ok(TaskListResult { tasks })
    }

    /// Get execution plan for a task
    pub fn get_execution_plan(&self, task_name: &str) -> ArmeerResult<TaskExecutionPlan> {
        let task = self
            .tasks
            .get(task_name)
            .ok_or_else(|| ArmeerError::Task(format!("Task '{}' not found", task_name)))?;
        self.plan_for(task)
    }

    /// Execute a task and report how it finished
    pub async fn run_task(&self, task_name: &str) -> ArmeerResult<TaskOutcome> {
        let plan = self.get_execution_plan(task_name)?;
        let runner = TaskRunner::new(TaskRunnerConfig { quiet: self.quiet });
        runner.run(&plan).await
    }

    // Private helper methods

    fn plan_for(&self, task: &ResolvedTask) -> ArmeerResult<TaskExecutionPlan> {
        resolve_task_execution_plan(&self.root, self.workspace_config.interpreter(), task)
    }

    fn load_workspace_config(workspace_root: &Path) -> ArmeerResult<WorkspaceConfig> {
        let workspace_config_path = workspace_root.join(CONFIG_DIR).join(WORKSPACE_FILE);
        if !workspace_config_path.exists() {
            return Ok(WorkspaceConfig::default());
        }

        let content = std::fs::read_to_string(&workspace_config_path).map_err(|e| {
            ArmeerError::Config(format!(
                "Failed to read workspace config {}: {}",
                workspace_config_path.display(),
                e
            ))
        })?;

        parse_workspace_config(&content).map_err(|e| {
            ArmeerError::Config(format!(
                "Failed to parse workspace config {}: {}",
                workspace_config_path.display(),
                e
            ))
        })
    }

    fn load_task_configs(workspace_root: &Path) -> ArmeerResult<TasksFileConfig> {
        let tasks_path = workspace_root.join(CONFIG_DIR).join(TASKS_FILE);
        if !tasks_path.exists() {
            return Ok(TasksFileConfig::default());
        }

        let content = std::fs::read_to_string(&tasks_path).map_err(|e| {
            ArmeerError::Config(format!(
                "Failed to read task config {}: {}",
                tasks_path.display(),
                e
            ))
        })?;

        parse_tasks_config(&content).map_err(|e| {
            ArmeerError::Config(format!(
                "Failed to parse task config {}: {}",
                tasks_path.display(),
                e
            ))
        })
    }
}
