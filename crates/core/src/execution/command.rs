//! Command execution utilities
//!
//! This module spawns the external process behind a task and hands back its
//! exit status untouched. Nothing is retried and nothing is translated.

use std::path::Path;

use tokio::process::Command;

use crate::results::TaskOutcome;
use crate::types::{ArmeerError, ArmeerResult};

/// Spawns one external process at a time from the workspace root
pub struct CommandExecutor<'a> {
    workspace_root: &'a Path,
    task_name: &'a str,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(workspace_root: &'a Path, task_name: &'a str) -> Self {
        Self {
            workspace_root,
            task_name,
        }
    }

    /// Run a command to completion and report how it exited.
    ///
    /// A non-zero exit is not an error here: the code is returned so the caller
    /// can pass it through. Only a failure to spawn is an error.
    pub async fn execute_command(
        &self,
        command: &mut Command,
        description: &str,
    ) -> ArmeerResult<TaskOutcome> {
        command.current_dir(self.workspace_root);
        command.env("ARMEER_TASK", self.task_name);
        command.env("ARMEER_WORKSPACE", self.workspace_root);

        tracing::debug!(task = self.task_name, command = description, "spawning");

        let status = command.status().await.map_err(|e| {
            ArmeerError::Task(format!("Failed to execute {}: {}", description, e))
        })?;

        tracing::debug!(task = self.task_name, code = ?status.code(), "process exited");

        Ok(TaskOutcome::Exited {
            code: status.code(),
        })
    }

    /// Run a script with the given interpreter, e.g. `python3 src/main.py`.
    ///
    /// A missing script is left to the interpreter to report; its status comes
    /// back like any other exit.
    pub async fn execute_script(
        &self,
        interpreter: &str,
        script_path: &str,
    ) -> ArmeerResult<TaskOutcome> {
        let mut command = Command::new(interpreter);
        command.arg(script_path);
        self.execute_command(&mut command, &format!("{} {}", interpreter, script_path))
            .await
    }

    /// Execute a command with arguments, without a shell
    pub async fn execute_command_with_args(
        &self,
        program: &str,
        args: &[String],
    ) -> ArmeerResult<TaskOutcome> {
        let mut command = Command::new(program);
        command.args(args);
        self.execute_command(&mut command, &format!("'{}'", program))
            .await
    }

    /// Execute a single shell command line
    pub async fn execute_shell_command(&self, cmd: &str) -> ArmeerResult<TaskOutcome> {
        let mut command = Command::new("sh");
        command.arg("-c").arg(cmd);
        self.execute_command(&mut command, &format!("'{}'", cmd))
            .await
    }
}
