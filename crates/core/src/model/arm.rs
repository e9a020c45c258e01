//! ARM (abstract relational model) types
//!
//! An [`ArmModel`] is an ordered list of [`ArmEntity`] values, each holding its
//! attributes and the names of the attributes that form its primary key. The
//! `Display` impls produce the textual form used across the project, e.g.
//!
//! ```text
//! ARM Model:
//! ----------
//! Movie(__MovieID__ (anyType), Name string, Director anyType)
//! ```

use std::fmt;

use serde::Serialize;

use crate::types::{ArmeerError, ArmeerResult};

/// Data type given to attributes declared without one
pub const ANY_TYPE: &str = "anyType";

const MODEL_HEADING: &str = "ARM Model:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArmAttribute {
    name: String,
    data_type: String,
}

impl ArmAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_type(name, ANY_TYPE)
    }

    pub fn with_type(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }
}

impl fmt::Display for ArmAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArmEntity {
    name: String,
    attributes: Vec<ArmAttribute>,
    primary_key: Vec<String>,
}

impl ArmEntity {
    /// Create an entity with no attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            primary_key: Vec::new(),
        }
    }

    pub fn add_attribute(&mut self, attribute: ArmAttribute) {
        self.attributes.push(attribute);
    }

    /// Add one of this entity's attributes to its primary key.
    ///
    /// Fails when no attribute with that name has been added yet.
    pub fn add_primary_key(&mut self, attribute_name: &str) -> ArmeerResult<()> {
        if !self.attributes.iter().any(|a| a.name == attribute_name) {
            return Err(ArmeerError::Model(format!(
                "Entity '{}' has no attribute '{}' to use as a primary key",
                self.name, attribute_name
            )));
        }
        self.primary_key.push(attribute_name.to_string());
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[ArmAttribute] {
        &self.attributes
    }

    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    fn is_key(&self, attribute: &ArmAttribute) -> bool {
        self.primary_key.iter().any(|pk| pk == &attribute.name)
    }
}

impl fmt::Display for ArmEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys = self
            .attributes
            .iter()
            .filter(|a| self.is_key(a))
            .map(|a| format!("__{}__ ({})", a.name, a.data_type))
            .collect::<Vec<_>>()
            .join(", ");
        let others = self
            .attributes
            .iter()
            .filter(|a| !self.is_key(a))
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        // The separator is written even when one side is empty
        write!(f, "{}({}, {})", self.name, keys, others)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArmModel {
    entities: Vec<ArmEntity>,
}

impl ArmModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entity(&mut self, entity: ArmEntity) {
        self.entities.push(entity);
    }

    pub fn entities(&self) -> &[ArmEntity] {
        &self.entities
    }

    pub fn entity(&self, name: &str) -> Option<&ArmEntity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Number of entities in the model
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl fmt::Display for ArmModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", MODEL_HEADING)?;
        writeln!(f, "{}", "-".repeat(MODEL_HEADING.len()))?;
        let lines = self
            .entities
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> ArmEntity {
        let mut entity = ArmEntity::new("Actor");
        entity.add_attribute(ArmAttribute::new("ActorID"));
        entity.add_attribute(ArmAttribute::new("Name"));
        entity.add_attribute(ArmAttribute::with_type("Age", "int"));
        entity.add_primary_key("ActorID").unwrap();
        entity
    }

    #[test]
    fn test_attribute_defaults_to_any_type() {
        let attribute = ArmAttribute::new("Name");
        assert_eq!(attribute.data_type(), "anyType");
        assert_eq!(attribute.to_string(), "Name anyType");
        assert_eq!(ArmAttribute::with_type("age", "INT").to_string(), "age INT");
    }

    #[test]
    fn test_entity_display_lists_key_first() {
        assert_eq!(
            actor().to_string(),
            "Actor(__ActorID__ (anyType), Name anyType, Age int)"
        );
    }

    #[test]
    fn test_entity_display_keeps_key_attribute_order() {
        let mut entity = ArmEntity::new("Casting");
        entity.add_attribute(ArmAttribute::with_type("Role", "string"));
        entity.add_attribute(ArmAttribute::new("MovieID"));
        entity.add_attribute(ArmAttribute::new("ActorID"));
        entity.add_primary_key("ActorID").unwrap();
        entity.add_primary_key("MovieID").unwrap();

        assert_eq!(
            entity.to_string(),
            "Casting(__MovieID__ (anyType), __ActorID__ (anyType), Role string)"
        );
        assert_eq!(entity.primary_key(), ["ActorID", "MovieID"]);
    }

    #[test]
    fn test_entity_display_without_key() {
        let mut entity = ArmEntity::new("Note");
        entity.add_attribute(ArmAttribute::new("Text"));
        assert_eq!(entity.to_string(), "Note(, Text anyType)");
    }

    #[test]
    fn test_primary_key_must_name_an_attribute() {
        let mut entity = ArmEntity::new("Movie");
        entity.add_attribute(ArmAttribute::new("MovieID"));

        let err = entity.add_primary_key("Title").unwrap_err();
        assert!(matches!(err, ArmeerError::Model(_)));
        assert!(err.to_string().contains("'Title'"));
        assert!(entity.primary_key().is_empty());
    }

    #[test]
    fn test_model_display_and_len() {
        let mut movie = ArmEntity::new("Movie");
        movie.add_attribute(ArmAttribute::new("MovieID"));
        movie.add_attribute(ArmAttribute::with_type("Name", "string"));
        movie.add_attribute(ArmAttribute::new("Director"));
        movie.add_primary_key("MovieID").unwrap();

        let mut model = ArmModel::new();
        assert!(model.is_empty());
        model.add_entity(movie);
        model.add_entity(actor());

        assert_eq!(model.len(), 2);
        assert!(model.entity("Actor").is_some());
        assert_eq!(
            model.to_string(),
            "ARM Model:\n----------\n\
             Movie(__MovieID__ (anyType), Name string, Director anyType)\n\
             Actor(__ActorID__ (anyType), Name anyType, Age int)"
        );
    }

    #[test]
    fn test_empty_model_display() {
        assert_eq!(ArmModel::new().to_string(), "ARM Model:\n----------\n");
    }
}
