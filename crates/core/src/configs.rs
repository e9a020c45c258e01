//! Configuration parsing for the workspace, its tasks and ARM model files

pub mod model;
pub mod tasks;
pub mod workspace;
