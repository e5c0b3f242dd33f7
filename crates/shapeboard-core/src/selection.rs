//! Selection of circles by id.

use crate::circle::CircleId;
use std::collections::HashSet;

/// Set of selected circle ids.
///
/// Behaves as a value: every mutation builds a new set and bumps the
/// generation, so observers can detect change by comparing generations
/// instead of contents. Equality compares membership only.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<CircleId>,
    generation: u64,
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids
    }
}

impl Eq for SelectionSet {}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    fn successor(&self, ids: HashSet<CircleId>) -> Self {
        Self {
            ids,
            generation: self.generation.wrapping_add(1),
        }
    }

    /// Return a copy with `id` flipped in or out of the set.
    pub fn toggled(&self, id: CircleId) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        self.successor(ids)
    }

    /// Return an empty successor of this set.
    pub fn cleared(&self) -> Self {
        self.successor(HashSet::new())
    }

    /// Return a copy keeping only ids accepted by `keep`.
    pub fn retained(&self, mut keep: impl FnMut(CircleId) -> bool) -> Self {
        let ids = self.ids.iter().copied().filter(|&id| keep(id)).collect();
        self.successor(ids)
    }

    /// Flip `id` in or out of the selection.
    pub fn toggle(&mut self, id: CircleId) {
        *self = self.toggled(id);
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        *self = self.cleared();
    }

    /// Drop ids rejected by `keep`.
    pub fn retain(&mut self, keep: impl FnMut(CircleId) -> bool) {
        *self = self.retained(keep);
    }

    pub fn contains(&self, id: CircleId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Change counter, bumped on every mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn iter(&self) -> impl Iterator<Item = CircleId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<CircleId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = CircleId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
            generation: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_toggle_adds_and_removes() {
        let id = Uuid::new_v4();
        let mut selection = SelectionSet::new();

        selection.toggle(id);
        assert!(selection.contains(id));
        assert_eq!(selection.len(), 1);

        selection.toggle(id);
        assert!(!selection.contains(id));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let original: SelectionSet = [a].into_iter().collect();

        let after = original.toggled(b).toggled(b);
        assert_eq!(after, original);

        let after = original.toggled(a).toggled(a);
        assert_eq!(after, original);
    }

    #[test]
    fn test_mutation_never_aliases() {
        let id = Uuid::new_v4();
        let original = SelectionSet::new();
        let next = original.toggled(id);

        assert!(original.is_empty());
        assert!(next.contains(id));
        assert_ne!(original.generation(), next.generation());
    }

    #[test]
    fn test_generation_bumps_on_every_mutation() {
        let mut selection = SelectionSet::new();
        let g0 = selection.generation();
        selection.clear();
        let g1 = selection.generation();
        selection.toggle(Uuid::new_v4());
        assert!(g1 > g0);
        assert!(selection.generation() > g1);
    }

    #[test]
    fn test_unlimited_multi_select() {
        let mut selection = SelectionSet::new();
        for _ in 0..100 {
            selection.toggle(Uuid::new_v4());
        }
        assert_eq!(selection.len(), 100);
    }

    #[test]
    fn test_retain() {
        let keep = Uuid::new_v4();
        let drop = Uuid::new_v4();
        let mut selection: SelectionSet = [keep, drop].into_iter().collect();

        selection.retain(|id| id == keep);
        assert!(selection.contains(keep));
        assert!(!selection.contains(drop));
    }
}
