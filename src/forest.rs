/// Identifier-keyed disjoint-set forest
///
/// Identifiers are interned into dense slots in registration order and the
/// parent/size bookkeeping lives in a slot-indexed `UnionFind`. Every
/// registered identifier owns exactly one slot; unregistered identifiers are
/// rejected instead of being treated as new singletons.
use indexmap::IndexSet;
use log::trace;

use crate::error::{MergeError, Result};
use crate::union_find::UnionFind;

#[derive(Debug, Clone, Default)]
pub struct IdentifierForest {
    identifiers: IndexSet<String>,
    sets: UnionFind,
}

impl IdentifierForest {
    pub fn new() -> Self {
        IdentifierForest {
            identifiers: IndexSet::new(),
            sets: UnionFind::new(0),
        }
    }

    /// Register an identifier as a singleton set.
    ///
    /// Returns the slot and whether the identifier was new. Registering an
    /// existing identifier leaves its set untouched.
    pub fn insert(&mut self, identifier: &str) -> (usize, bool) {
        if let Some(slot) = self.identifiers.get_index_of(identifier) {
            return (slot, false);
        }
        let (slot, _) = self.identifiers.insert_full(identifier.to_string());
        let pushed = self.sets.push();
        debug_assert_eq!(slot, pushed);
        (slot, true)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Slot of a registered identifier
    pub fn slot(&self, identifier: &str) -> Result<usize> {
        self.identifiers
            .get_index_of(identifier)
            .ok_or_else(|| MergeError::not_found(identifier))
    }

    /// Identifier stored in a slot
    pub fn identifier(&self, slot: usize) -> Option<&str> {
        self.identifiers.get_index(slot).map(|s| s.as_str())
    }

    /// Representative of the identifier's set
    pub fn find(&mut self, identifier: &str) -> Result<&str> {
        let slot = self.slot(identifier)?;
        let root = self.sets.find(slot);
        Ok(self.identifiers[root].as_str())
    }

    /// Merge the sets of `a` and `b`; on equal sizes `b`'s root absorbs `a`'s tree.
    ///
    /// Returns false when both were already in one set.
    pub fn union(&mut self, a: &str, b: &str) -> Result<bool> {
        let slot_a = self.slot(a)?;
        let slot_b = self.slot(b)?;
        let merged = self.sets.union(slot_a, slot_b);
        if merged {
            trace!("union {a} <-> {b}");
        }
        Ok(merged)
    }

    pub fn connected(&mut self, a: &str, b: &str) -> Result<bool> {
        let slot_a = self.slot(a)?;
        let slot_b = self.slot(b)?;
        Ok(self.sets.connected(slot_a, slot_b))
    }

    pub fn set_size(&mut self, identifier: &str) -> Result<usize> {
        let slot = self.slot(identifier)?;
        Ok(self.sets.set_size(slot))
    }

    /// Slot groups, one per set, ordered by first registered member
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        self.sets.get_sets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest(ids: &[&str]) -> IdentifierForest {
        let mut forest = IdentifierForest::new();
        for id in ids {
            forest.insert(id);
        }
        forest
    }

    #[test]
    fn test_insert_is_stable() {
        let mut forest = forest(&["a", "b"]);
        assert_eq!(forest.insert("a"), (0, false));
        assert_eq!(forest.insert("c"), (2, true));
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.identifier(2), Some("c"));
        assert_eq!(forest.identifier(0), Some("a"));
        assert_eq!(forest.identifier(3), None);
    }

    #[test]
    fn test_find_unknown_identifier() {
        let mut forest = forest(&["a"]);
        let err = forest.find("zzz").unwrap_err();
        assert!(matches!(err, MergeError::NotFound { ref identifier } if identifier == "zzz"));
        // Lookup must not register it
        assert!(forest.slot("zzz").is_err());
        assert_eq!(forest.len(), 1);
        assert!(forest.union("a", "zzz").is_err());
    }

    #[test]
    fn test_union_tie_goes_to_second_root() {
        let mut forest = forest(&["a", "b", "c"]);
        assert!(forest.union("a", "b").unwrap());
        assert_eq!(forest.find("a").unwrap(), "b");
        // {a, b} is larger than {c}, so c joins b's root
        assert!(forest.union("b", "c").unwrap());
        assert_eq!(forest.find("c").unwrap(), "b");
        assert_eq!(forest.set_size("a").unwrap(), 3);
        assert!(!forest.union("c", "a").unwrap());
    }

    #[test]
    fn test_groups() {
        let mut forest = forest(&["a", "b", "c", "d"]);
        forest.union("d", "b").unwrap();
        assert!(forest.connected("b", "d").unwrap());
        assert!(!forest.connected("a", "d").unwrap());
        assert_eq!(forest.groups(), vec![vec![0], vec![1, 3], vec![2]]);
    }
}
