use std::collections::HashMap;

use crate::domain::{CellValue, Column};

/// Running totals of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub dimensions: Vec<(Column, CellValue)>,
    pub sum: f64,
    pub count: u64,
}

/// Sum/count accumulator keyed by group key. Groups keep first-seen order.
#[derive(Debug, Default)]
pub struct Aggregator {
    index: HashMap<String, usize>,
    groups: Vec<Group>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one contribution of `value` towards the group under `key`.
    ///
    /// `dimensions` is only stored when the key is new.
    pub fn add(&mut self, key: String, dimensions: Vec<(Column, CellValue)>, value: f64) {
        let slot = match self.index.get(&key) {
            Some(slot) => *slot,
            None => {
                self.groups.push(Group {
                    dimensions,
                    sum: 0.0,
                    count: 0,
                });
                let slot = self.groups.len() - 1;
                self.index.insert(key, slot);
                slot
            }
        };
        let group = &mut self.groups[slot];
        group.count += 1;
        group.sum += value;
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }
}
