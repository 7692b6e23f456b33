//! People who pay for receipts or own their line items.

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A household member. Role flags decide which pickers list the person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub payer: bool,
    #[serde(default)]
    pub owner: bool,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            payer: false,
            owner: false,
        }
    }

    pub fn as_payer(mut self) -> Self {
        self.payer = true;
        self
    }

    pub fn as_owner(mut self) -> Self {
        self.owner = true;
        self
    }
}

impl Identifiable for Person {
    fn id(&self) -> i64 {
        self.id
    }
}

impl NamedEntity for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_flags_default_to_false() {
        let person: Person = serde_json::from_str(r#"{"id": 4, "name": "Ola"}"#).unwrap();
        assert_eq!(person, Person::new(4, "Ola"));
    }
}
