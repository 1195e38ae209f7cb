//! A persistent de-duplicated unordered set.
//!
//! [`PersistentSet`] offers a persistent interface over the host hash
//! set: every operation returns a new set and the original is
//! untouched. Membership is by host equality (`Eq` + `Hash`) and
//! iteration order is unspecified.
//!
//! ```rust
//! use currycomb::persistent::PersistentSet;
//!
//! let set = PersistentSet::new().insert(1).insert(2).insert(2);
//! assert_eq!(set.len(), 2); // duplicates collapse
//!
//! let grown = set.insert(3);
//! assert_eq!(set.len(), 2);   // original unchanged
//! assert_eq!(grown.len(), 3);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

/// An immutable set with host-equality membership and no ordering
/// guarantee.
pub struct PersistentSet<T> {
    elements: HashSet<T>,
}

impl<T: Clone> Clone for PersistentSet<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<T> PersistentSet<T> {
    /// The empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }

    /// The number of distinct elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

impl<T: Eq + Hash + Clone> PersistentSet<T> {
    /// A one-element set.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().insert(element)
    }

    /// Adds an element, returning the new set. Inserting an element
    /// already present returns an equal set.
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        let mut elements = self.elements.clone();
        elements.insert(element);
        Self { elements }
    }

    /// Removes an element, returning the new set.
    #[must_use]
    pub fn remove(&self, element: &T) -> Self {
        let mut elements = self.elements.clone();
        elements.remove(element);
        Self { elements }
    }

    /// Whether the element is a member, by host equality.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Every element of either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            elements: self.elements.union(&other.elements).cloned().collect(),
        }
    }

    /// The elements present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            elements: self
                .elements
                .intersection(&other.elements)
                .cloned()
                .collect(),
        }
    }

    /// The elements of this set not present in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            elements: self.elements.difference(&other.elements).cloned().collect(),
        }
    }

    /// Whether every element of this set is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Whether every element of `other` is in this set.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.elements.is_superset(&other.elements)
    }

    /// Keeps the elements satisfying the predicate.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        }
    }

    /// Maps every element, de-duplicating the results.
    #[must_use]
    pub fn map_elements<B, F>(&self, mut function: F) -> PersistentSet<B>
    where
        B: Eq + Hash,
        F: FnMut(&T) -> B,
    {
        PersistentSet {
            elements: self.elements.iter().map(|element| function(element)).collect(),
        }
    }
}

impl<T> Default for PersistentSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for PersistentSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq + Hash> Eq for PersistentSet<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for PersistentSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            elements: iterator.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for PersistentSet<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentSet<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.elements.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de> + Eq + Hash> serde::Deserialize<'de> for PersistentSet<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|elements| elements.into_iter().collect())
    }
}

// =============================================================================
// Protocol impls
// =============================================================================

impl<T> TypeConstructor for PersistentSet<T> {
    type Inner = T;
    type WithType<B> = PersistentSet<B>;
}

impl<T: Eq + Hash> Foldable for PersistentSet<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.elements.into_iter().fold(init, function)
    }

    // Element order is unspecified, so both folds visit arbitrary
    // order; fold_right only flips the accumulator position.
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.elements
            .into_iter()
            .fold(init, |accumulated, element| function(element, accumulated))
    }

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Eq + Hash + Clone> Semigroup for PersistentSet<T> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }
}

impl<T: Eq + Hash + Clone> Monoid for PersistentSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> PersistentSet<i32> {
        [1, 2, 3].into_iter().collect()
    }

    #[rstest]
    fn insert_deduplicates() {
        let set = PersistentSet::new().insert(1).insert(1).insert(2);
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn operations_leave_original_untouched() {
        let set = sample();
        let grown = set.insert(4);
        let shrunk = set.remove(&1);
        assert_eq!(set.len(), 3);
        assert_eq!(grown.len(), 4);
        assert_eq!(shrunk.len(), 2);
        assert!(set.contains(&1));
        assert!(!shrunk.contains(&1));
    }

    #[rstest]
    fn membership_is_by_equality() {
        let set: PersistentSet<String> = ["a".to_string()].into_iter().collect();
        assert!(set.contains(&"a".to_string()));
        assert!(!set.contains(&"b".to_string()));
    }

    #[rstest]
    fn set_algebra() {
        let left = sample();
        let right: PersistentSet<i32> = [2, 3, 4].into_iter().collect();

        assert_eq!(left.union(&right).len(), 4);
        assert_eq!(
            left.intersection(&right),
            [2, 3].into_iter().collect::<PersistentSet<_>>()
        );
        assert_eq!(
            left.difference(&right),
            PersistentSet::singleton(1)
        );
        assert!([1, 2].into_iter().collect::<PersistentSet<_>>().is_subset(&left));
        assert!(left.is_superset(&[1].into_iter().collect()));
    }

    #[rstest]
    fn filter_and_map() {
        let evens = sample().filter(|n| n % 2 == 0);
        assert_eq!(evens, PersistentSet::singleton(2));

        let collapsed = sample().map_elements(|n| n % 2);
        assert_eq!(collapsed.len(), 2); // {0, 1}
    }

    #[rstest]
    fn combine_is_union() {
        let combined = sample().combine([3, 4].into_iter().collect());
        assert_eq!(combined.len(), 4);
    }

    #[rstest]
    fn monoid_identity() {
        let set = sample();
        assert_eq!(PersistentSet::empty().combine(set.clone()), set);
        assert_eq!(set.clone().combine(PersistentSet::empty()), set);
    }

    #[rstest]
    fn fold_sums_all_elements() {
        assert_eq!(sample().fold_left(0, |acc, n| acc + n), 6);
    }

    #[rstest]
    fn equality_ignores_insertion_order() {
        let forward: PersistentSet<i32> = [1, 2, 3].into_iter().collect();
        let backward: PersistentSet<i32> = [3, 2, 1].into_iter().collect();
        assert_eq!(forward, backward);
    }
}
