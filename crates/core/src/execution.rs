//! Task execution module
//!
//! This module handles the actual execution of tasks: spawning external
//! commands and removing generated files.

pub mod clean;
pub mod command;
pub mod runner;

pub use command::CommandExecutor;
pub use runner::{TaskRunner, TaskRunnerConfig};
