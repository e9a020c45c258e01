use serde::Deserialize;

use crate::model::{ArmAttribute, ArmEntity, ArmModel};
use crate::types::ArmeerResult;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArmModelConfig {
    pub entities: Vec<ArmEntityConfig>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArmEntityConfig {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<ArmAttributeConfig>,
    #[serde(default)]
    pub primary_key: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArmAttributeConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: Option<String>,
}

impl ArmModelConfig {
    /// Build the model through the same checks as the builder methods
    pub fn into_model(self) -> ArmeerResult<ArmModel> {
        let mut model = ArmModel::new();
        for entity_config in self.entities {
            let mut entity = ArmEntity::new(entity_config.name);
            for attribute in entity_config.attributes {
                entity.add_attribute(match attribute.data_type {
                    Some(data_type) => ArmAttribute::with_type(attribute.name, data_type),
                    None => ArmAttribute::new(attribute.name),
                });
            }
            for key in &entity_config.primary_key {
                entity.add_primary_key(key)?;
            }
            model.add_entity(entity);
        }
        Ok(model)
    }
}

pub fn parse_arm_model(yaml_str: &str) -> ArmeerResult<ArmModel> {
    let config: ArmModelConfig = serde_yaml::from_str(yaml_str)?;
    config.into_model()
}
