use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{ArmeerError, ArmeerResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Command {
    /// A line handed to `sh -c`
    Single(String),
    /// An executable followed by its arguments, spawned without a shell
    Multiple(Vec<String>),
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskConfig {
    pub name: String,
    pub description: Option<String>,
    /// Script path, relative to the workspace root, run with the configured interpreter
    pub script: Option<String>,
    pub command: Option<Command>,
    /// Glob patterns, relative to the workspace root, whose matches are deleted
    pub remove: Option<Vec<String>>,
}

/// The single thing a task does once its configuration has been validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Script(String),
    Command(Command),
    Remove(Vec<String>),
}

impl TaskConfig {
    /// Resolve the action of this task, rejecting tasks with zero or several actions
    pub fn action(&self) -> ArmeerResult<TaskAction> {
        let mut actions = Vec::new();
        if let Some(script) = &self.script {
            actions.push(TaskAction::Script(script.clone()));
        }
        if let Some(command) = &self.command {
            actions.push(TaskAction::Command(command.clone()));
        }
        if let Some(patterns) = &self.remove {
            actions.push(TaskAction::Remove(patterns.clone()));
        }

        match actions.len() {
            0 => Err(ArmeerError::Config(format!(
                "Task '{}' has no script, command or remove patterns",
                self.name
            ))),
            1 => Ok(actions.remove(0)),
            _ => Err(ArmeerError::Config(format!(
                "Task '{}' must define exactly one of script, command or remove",
                self.name
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TasksFileConfig {
    pub description: Option<String>,
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

pub fn parse_tasks_config(yaml_str: &str) -> ArmeerResult<TasksFileConfig> {
    let config: TasksFileConfig = serde_yaml::from_str(yaml_str)?;
    for task in &config.tasks {
        task.action()?;
    }
    Ok(config)
}

/// JSON schema of `.armeer/tasks.yml`
pub fn tasks_file_schema() -> serde_json::Value {
    schemars::schema_for!(TasksFileConfig).to_value()
}
