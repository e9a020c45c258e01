//! ARM and EER model types
//!
//! These are plain data types with validated construction and a stable
//! textual rendering. Reading them from YAML lives in [`crate::configs::model`].

pub mod arm;
pub mod eer;

pub use arm::{ArmAttribute, ArmEntity, ArmModel, ANY_TYPE};
pub use eer::Constraint;
