use std::path::Path;

use anyhow::{Context, Result};
use armeer_core::configs::model::parse_arm_model;

pub fn execute(path: &Path, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model file {}", path.display()))?;
    let model = parse_arm_model(&content)
        .with_context(|| format!("Failed to load model from {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        println!("{}", model);
    }

    Ok(())
}
