use std::collections::HashMap;

use crate::domain::{Identifiable, NamedEntity, Person, PersonId};

/// Roster lookups used to turn payer and owner ids into display names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeopleIndex {
    pub by_id: HashMap<PersonId, Person>,
    pub payers: Vec<Person>,
    pub owners: Vec<Person>,
}

impl PeopleIndex {
    /// Indexes `people` by id and role. A repeated id keeps the last entry.
    pub fn build(people: &[Person]) -> Self {
        let mut index = Self::default();
        for person in people {
            index.by_id.insert(person.id(), person.clone());
            if person.payer {
                index.payers.push(person.clone());
            }
            if person.owner {
                index.owners.push(person.clone());
            }
        }
        index
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.by_id.get(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Person name, or the id itself when the roster does not know it.
    pub fn display_name(&self, id: PersonId) -> String {
        self.get(id)
            .map(|person| person.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}

/// Resolves a person label against an optional roster.
pub fn resolve_name(index: Option<&PeopleIndex>, id: PersonId) -> String {
    match index {
        Some(index) => index.display_name(id),
        None => id.to_string(),
    }
}
