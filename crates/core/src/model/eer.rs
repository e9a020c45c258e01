//! Constraints attached to EER entities

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Constraint {
    /// The attributes that together identify an entity
    Identifier { identifier: Vec<String> },
    /// An `isa` link from a child entity to `parent`
    Inheritance {
        parent: String,
        disjoint: bool,
        covering: bool,
    },
}

impl Constraint {
    pub fn identifier(attributes: Vec<String>) -> Self {
        Self::Identifier {
            identifier: attributes,
        }
    }

    pub fn inheritance(parent: impl Into<String>, disjoint: bool, covering: bool) -> Self {
        Self::Inheritance {
            parent: parent.into(),
            disjoint,
            covering,
        }
    }

    /// Attribute names of an identifier constraint
    pub fn identifier_attributes(&self) -> Option<&[String]> {
        match self {
            Self::Identifier { identifier } => Some(identifier),
            Self::Inheritance { .. } => None,
        }
    }

    /// Parent entity name of an inheritance constraint
    pub fn parent(&self) -> Option<&str> {
        match self {
            Self::Inheritance { parent, .. } => Some(parent),
            Self::Identifier { .. } => None,
        }
    }

    pub fn is_disjoint(&self) -> bool {
        matches!(self, Self::Inheritance { disjoint: true, .. })
    }

    pub fn is_covering(&self) -> bool {
        matches!(self, Self::Inheritance { covering: true, .. })
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { identifier } => {
                let quoted = identifier
                    .iter()
                    .map(|name| format!("'{}'", name))
                    .collect::<Vec<_>>();
                write!(f, "Identifier: [{}]", quoted.join(", "))
            }
            Self::Inheritance {
                parent,
                disjoint,
                covering,
            } => write!(
                f,
                "Inheritance Constraint: [parent = {}] [disjoint = {}] [covering = {}]",
                parent,
                flag(*disjoint),
                flag(*covering)
            ),
        }
    }
}

/// Capitalised flag text used in constraint output
fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_constraint() {
        let constraint = Constraint::identifier(vec!["MovieID".to_string(), "Year".to_string()]);
        assert_eq!(
            constraint.identifier_attributes(),
            Some(&["MovieID".to_string(), "Year".to_string()][..])
        );
        assert_eq!(constraint.parent(), None);
        assert!(!constraint.is_disjoint());
        assert_eq!(constraint.to_string(), "Identifier: ['MovieID', 'Year']");
    }

    #[test]
    fn test_empty_identifier_constraint() {
        assert_eq!(Constraint::identifier(Vec::new()).to_string(), "Identifier: []");
    }

    #[test]
    fn test_inheritance_constraint() {
        let constraint = Constraint::inheritance("Person", true, false);
        assert_eq!(constraint.parent(), Some("Person"));
        assert!(constraint.is_disjoint());
        assert!(!constraint.is_covering());
        assert!(constraint.identifier_attributes().is_none());
        assert_eq!(
            constraint.to_string(),
            "Inheritance Constraint: [parent = Person] [disjoint = True] [covering = False]"
        );
    }
}
