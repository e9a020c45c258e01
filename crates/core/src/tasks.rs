//! Built-in tasks, task merging and color management
//!
//! The workspace always knows `run`, `gui` and `clean`. A tasks file can replace
//! any of them by name or add new ones.

use std::collections::BTreeMap;
use std::fmt;

use colored::*;

use crate::configs::tasks::TaskConfig;

pub const MAIN_SCRIPT: &str = "src/main.py";
pub const VIEWER_SCRIPT: &str = "src/view.py";
pub const TRANSFORMED_OUTPUT_PATTERN: &str = "EER_XML_Schema/*_transformed.txt";

/// Where a task definition came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSource {
    Builtin,
    Configured,
}

impl fmt::Display for TaskSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in"),
            Self::Configured => write!(f, "tasks.yml"),
        }
    }
}

/// A task definition paired with its origin
#[derive(Debug, Clone)]
pub struct ResolvedTask {
    pub config: TaskConfig,
    pub source: TaskSource,
}

pub fn builtin_tasks() -> Vec<TaskConfig> {
    vec![
        TaskConfig {
            name: "run".to_string(),
            description: Some("Run the main application".to_string()),
            script: Some(MAIN_SCRIPT.to_string()),
            command: None,
            remove: None,
        },
        TaskConfig {
            name: "gui".to_string(),
            description: Some("Open the schema viewer".to_string()),
            script: Some(VIEWER_SCRIPT.to_string()),
            command: None,
            remove: None,
        },
        TaskConfig {
            name: "clean".to_string(),
            description: Some("Remove transformed schema output".to_string()),
            script: None,
            command: None,
            remove: Some(vec![TRANSFORMED_OUTPUT_PATTERN.to_string()]),
        },
    ]
}

/// Merge configured tasks over the built-ins; a configured task replaces a built-in of the same name
pub fn merge_tasks(configured: &[TaskConfig]) -> BTreeMap<String, ResolvedTask> {
    let mut tasks = BTreeMap::new();

    for task in builtin_tasks() {
        tasks.insert(
            task.name.clone(),
            ResolvedTask {
                config: task,
                source: TaskSource::Builtin,
            },
        );
    }

    for task in configured {
        tasks.insert(
            task.name.clone(),
            ResolvedTask {
                config: task.clone(),
                source: TaskSource::Configured,
            },
        );
    }

    tasks
}

/// Get a consistent color for a task name
pub fn get_task_color(task_name: &str) -> Color {
    let hash = task_name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    // Label colors that stay clear of the red/yellow/green used for status lines
    let colors = [
        Color::TrueColor {
            r: 147,
            g: 112,
            b: 219,
        },
        Color::TrueColor {
            r: 64,
            g: 224,
            b: 208,
        },
        Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        Color::TrueColor {
            r: 199,
            g: 21,
            b: 133,
        },
        Color::TrueColor {
            r: 138,
            g: 43,
            b: 226,
        },
    ];

    colors[(hash % colors.len() as u64) as usize]
}
