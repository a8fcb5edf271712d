//! Total orders over generation ids and full instance types

use crate::instance_id::{AsInstanceId, ParsedInstanceId};
use crate::ranking::{family_rank, size_rank, suffix_rank, OrderingOptions};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which comparator a collection operation should use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    /// Family, generation, suffix (e.g. `m6i`)
    #[default]
    Generations,
    /// Generation id then size (e.g. `m6i.2xlarge`)
    Types,
}

impl SortKind {
    pub fn compare(
        self,
        a: &ParsedInstanceId,
        b: &ParsedInstanceId,
        options: &OrderingOptions,
    ) -> Ordering {
        match self {
            SortKind::Generations => compare_parsed_generations(a, b, options),
            SortKind::Types => compare_parsed_types(a, b, options),
        }
    }
}

/// A comparator accepted by [`unique_sorted`](crate::collections::unique_sorted):
/// a [`SortKind`] or any `Fn(&ParsedInstanceId, &ParsedInstanceId, &OrderingOptions) -> Ordering`.
pub trait InstanceComparator {
    fn compare_ids(
        &self,
        a: &ParsedInstanceId,
        b: &ParsedInstanceId,
        options: &OrderingOptions,
    ) -> Ordering;
}

impl InstanceComparator for SortKind {
    fn compare_ids(
        &self,
        a: &ParsedInstanceId,
        b: &ParsedInstanceId,
        options: &OrderingOptions,
    ) -> Ordering {
        self.compare(a, b, options)
    }
}

impl<F> InstanceComparator for F
where
    F: Fn(&ParsedInstanceId, &ParsedInstanceId, &OrderingOptions) -> Ordering,
{
    fn compare_ids(
        &self,
        a: &ParsedInstanceId,
        b: &ParsedInstanceId,
        options: &OrderingOptions,
    ) -> Ordering {
        self(a, b, options)
    }
}

/// Absent generations sort after every number. Saturated generations
/// (`u64::MAX`) compare by digit count, then digit text.
fn compare_generation_numbers(a: &ParsedInstanceId, b: &ParsedInstanceId) -> Ordering {
    match (a.generation, b.generation) {
        (Some(u64::MAX), Some(u64::MAX)) => {
            let da = a.generation_digits().unwrap_or("");
            let db = b.generation_digits().unwrap_or("");
            da.len().cmp(&db.len()).then_with(|| da.cmp(db))
        }
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Family rank, generation, suffix rank. Size and text are not consulted.
fn compare_generation_keys(
    a: &ParsedInstanceId,
    b: &ParsedInstanceId,
    options: &OrderingOptions,
) -> Ordering {
    family_rank(&a.family, options)
        .cmp(&family_rank(&b.family, options))
        .then_with(|| compare_generation_numbers(a, b))
        .then_with(|| suffix_rank(&a.suffix, options).cmp(&suffix_rank(&b.suffix, options)))
}

/// [`compare_generations`] over already-parsed records
pub fn compare_parsed_generations(
    a: &ParsedInstanceId,
    b: &ParsedInstanceId,
    options: &OrderingOptions,
) -> Ordering {
    compare_generation_keys(a, b, options).then_with(|| a.normalized.cmp(&b.normalized))
}

/// [`compare_types`] over already-parsed records
pub fn compare_parsed_types(
    a: &ParsedInstanceId,
    b: &ParsedInstanceId,
    options: &OrderingOptions,
) -> Ordering {
    compare_generation_keys(a, b, options)
        .then_with(|| size_rank(a.size.as_deref()).cmp(&size_rank(b.size.as_deref())))
        .then_with(|| {
            let sa = a.size.as_deref().unwrap_or("");
            let sb = b.size.as_deref().unwrap_or("");
            sa.cmp(sb)
        })
        .then_with(|| a.normalized.cmp(&b.normalized))
}

/// Compare two generation ids such as `"m6i"` and `"c5n"`.
///
/// Order: family rank, generation number (absent last), suffix rank, then the
/// normalized text, so distinct normalized names never compare equal.
pub fn compare_generations<A, B>(a: &A, b: &B, options: &OrderingOptions) -> Ordering
where
    A: AsInstanceId + ?Sized,
    B: AsInstanceId + ?Sized,
{
    compare_parsed_generations(&a.as_instance_id(), &b.as_instance_id(), options)
}

/// Compare two full instance types such as `"m6i.large"` and `"m6i.2xlarge"`.
///
/// Family, generation and suffix as in [`compare_generations`], then size
/// rank, then the literal size (absent as `""`), then the normalized text.
pub fn compare_types<A, B>(a: &A, b: &B, options: &OrderingOptions) -> Ordering
where
    A: AsInstanceId + ?Sized,
    B: AsInstanceId + ?Sized,
{
    compare_parsed_types(&a.as_instance_id(), &b.as_instance_id(), options)
}
