//! Sorting, deduplication and grouping of instance names
//!
//! Every operation takes a slice of raw strings or parsed records and returns
//! new values; inputs are never mutated. Malformed entries are ordered like
//! any other item rather than dropped.

use crate::compare::{compare_parsed_generations, compare_parsed_types, InstanceComparator};
use crate::instance_id::{AsInstanceId, ParsedInstanceId};
use crate::ranking::OrderingOptions;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Stable sort that parses every item once
fn sort_parsed<T, F>(items: Vec<T>, compare: F) -> Vec<T>
where
    T: AsInstanceId,
    F: Fn(&ParsedInstanceId, &ParsedInstanceId) -> Ordering,
{
    let mut keyed: Vec<(ParsedInstanceId, T)> = items
        .into_iter()
        .map(|item| {
            let id = item.as_instance_id().into_owned();
            (id, item)
        })
        .collect();

    let malformed = keyed.iter().filter(|(id, _)| !id.valid).count();
    if malformed > 0 {
        tracing::debug!("Sorting {} item(s), {} malformed", keyed.len(), malformed);
    }

    keyed.sort_by(|(a, _), (b, _)| compare(a, b));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Sort generation ids (e.g. `["m6i", "m7g", "c5n"]`) into a new vector.
pub fn sort_generations<T>(items: &[T], options: &OrderingOptions) -> Vec<T>
where
    T: AsInstanceId + Clone,
{
    sort_parsed(items.to_vec(), |a, b| {
        compare_parsed_generations(a, b, options)
    })
}

/// Sort full instance types (e.g. `["m6i.large", "m6i.2xlarge"]`) into a new vector.
pub fn sort_types<T>(items: &[T], options: &OrderingOptions) -> Vec<T>
where
    T: AsInstanceId + Clone,
{
    sort_parsed(items.to_vec(), |a, b| compare_parsed_types(a, b, options))
}

/// Drop items whose canonical key was already seen, keeping the first
/// occurrence, then sort the survivors with `comparator`.
///
/// `comparator` is a [`SortKind`](crate::compare::SortKind) (`SortKind::default()`
/// orders by generation) or any function over parsed records.
pub fn unique_sorted<T, C>(items: &[T], comparator: C, options: &OrderingOptions) -> Vec<T>
where
    T: AsInstanceId + Clone,
    C: InstanceComparator,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        let key = item.dedup_key();
        if seen.contains(&key) {
            tracing::trace!("Dropping duplicate instance name: {}", key);
            continue;
        }
        seen.insert(key);
        unique.push(item.clone());
    }

    sort_parsed(unique, |a, b| comparator.compare_ids(a, b, options))
}

/// Group items by family, preserving first-seen order of families and of
/// items within each family.
pub fn group_by_family<T>(items: &[T]) -> FamilyGroups<T>
where
    T: AsInstanceId + Clone,
{
    let mut groups = FamilyGroups::new();
    for item in items {
        let family = item.as_instance_id().family.clone();
        groups.push(family, item.clone());
    }
    groups
}

/// Family code to items, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyGroups<T> {
    groups: Vec<(String, Vec<T>)>,
    index: HashMap<String, usize>,
}

impl<T> Default for FamilyGroups<T> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> FamilyGroups<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, family: String, item: T) {
        match self.index.get(&family) {
            Some(&slot) => self.groups[slot].1.push(item),
            None => {
                self.index.insert(family.clone(), self.groups.len());
                self.groups.push((family, vec![item]));
            }
        }
    }

    pub fn get(&self, family: &str) -> Option<&[T]> {
        self.index
            .get(family)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(family, _)| family.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.groups
            .iter()
            .map(|(family, items)| (family.as_str(), items.as_slice()))
    }

    /// Number of families
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<T> IntoIterator for FamilyGroups<T> {
    type Item = (String, Vec<T>);
    type IntoIter = std::vec::IntoIter<(String, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

// Serialized as a JSON object whose keys keep discovery order.
impl<T: Serialize> Serialize for FamilyGroups<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (family, items) in &self.groups {
            map.serialize_entry(family, items)?;
        }
        map.end()
    }
}
