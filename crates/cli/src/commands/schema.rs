use anyhow::Result;
use armeer_core::configs::tasks::tasks_file_schema;

pub fn execute() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&tasks_file_schema())?);
    Ok(())
}
