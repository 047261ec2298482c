use super::{WordEntry, Xt};
use std::collections::BTreeMap;

/// ## Word dictionary
///
/// Names are matched without regard to case. A later definition replaces
/// an earlier one of the same name.

#[derive(Debug, Default)]
pub struct Dictionary {
    words: BTreeMap<String, WordEntry>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn define(&mut self, name: &str, xt: Xt, immediate: bool) {
        let entry = WordEntry {
            name: name.to_string(),
            xt,
            immediate,
        };
        self.words.insert(name.to_lowercase(), entry);
    }

    pub fn find(&self, name: &str) -> Option<&WordEntry> {
        self.words.get(&name.to_lowercase())
    }

    /// Lower-cased keys in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(|k| k.as_str())
    }
}
