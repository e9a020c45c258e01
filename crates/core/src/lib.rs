//! armeer Core Library
//!
//! This is the core library for armeer, the task runner of the ARM→EER schema
//! project. It provides the business logic for resolving and running tasks, and
//! the ARM and EER model types.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`workspace_manager`] - High-level interface over configuration and tasks
//! - [`execution`] - Process spawning and in-process file removal
//! - [`task_execution`] - Task execution planning
//! - [`tasks`] - Built-in tasks, merging and color management
//! - [`configs`] - Configuration parsing for the workspace, tasks and ARM models
//! - [`model`] - ARM entities and EER constraints
//! - [`results`] - Result types for workspace operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`WorkspaceManager`]:
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
//! let outcome = manager.run_task("clean").await?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod execution;
pub mod model;
pub mod results;
pub mod task_execution;
pub mod tasks;
pub mod types;
pub mod workspace_manager;

// Re-export the main types for easier usage
pub use types::{ArmeerError, ArmeerResult};
pub use workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};
