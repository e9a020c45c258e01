use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ArmeerResult;

pub const DEFAULT_INTERPRETER: &str = "python3";

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkspaceConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Program used to run `script` tasks. Defaults to `python3`.
    pub interpreter: Option<String>,
}

impl WorkspaceConfig {
    pub fn interpreter(&self) -> &str {
        self.interpreter.as_deref().unwrap_or(DEFAULT_INTERPRETER)
    }
}

pub fn parse_workspace_config(yaml_str: &str) -> ArmeerResult<WorkspaceConfig> {
    let config: WorkspaceConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}
