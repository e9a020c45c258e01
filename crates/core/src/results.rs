//! Result types for workspace operations
//!
//! This module contains the result types returned by workspace manager operations,
//! providing a centralized location for output structures.

use std::path::PathBuf;

use crate::tasks::TaskSource;

/// How a task finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// An external process ran; `code` is `None` when it was killed by a signal
    Exited { code: Option<i32> },
    /// Files deleted by a remove task
    Removed { files: Vec<PathBuf> },
}

impl TaskOutcome {
    pub fn success(&self) -> bool {
        self.exit_code() == 0
    }

    /// The status to exit with when passing this outcome through
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exited { code } => code.unwrap_or(1),
            Self::Removed { .. } => 0,
        }
    }
}

/// A known task with enough detail to list it
#[derive(Debug, Clone)]
pub struct TaskInfo {
    pub name: String,
    pub description: Option<String>,
    pub source: TaskSource,
    pub summary: String,
}

/// Result of listing tasks in the workspace
#[derive(Debug)]
pub struct TaskListResult {
    pub tasks: Vec<TaskInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_termination_maps_to_failure() {
        let outcome = TaskOutcome::Exited { code: None };
        assert!(!outcome.success());
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_removal_is_success() {
        let outcome = TaskOutcome::Removed {
            files: vec![PathBuf::from("EER_XML_Schema/a_transformed.txt")],
        };
        assert!(outcome.success());
    }
}
