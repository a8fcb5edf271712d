//! Ranks for the components of an instance name
//!
//! Family and suffix ranks depend on the caller's [`OrderingOptions`]; size
//! ranks are fixed.

use serde::{Deserialize, Serialize};

/// Optional explicit orderings applied by the comparators.
///
/// With neither list set, families and suffixes sort alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingOptions {
    /// Families listed here sort first, in list order; the rest follow alphabetically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_order: Option<Vec<String>>,
    /// Suffixes listed here sort first within a family+generation, in list order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix_order: Option<Vec<String>>,
}

impl OrderingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.family_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_suffix_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffix_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Common class buckets first (compute, general purpose, memory, ...),
    /// then plain/Intel/storage/network variants ahead of other attributes.
    pub fn class_buckets() -> Self {
        Self::new()
            .with_family_order([
                "c", "m", "r", "x", "i", "g", "p", "t", "d", "h", "z", "f", "inf", "trn",
            ])
            .with_suffix_order(["", "a", "g", "i", "in", "d", "dn", "n", "e", "p"])
    }

    pub fn is_default(&self) -> bool {
        self.family_order.is_none() && self.suffix_order.is_none()
    }
}

/// Rank of a family or suffix.
///
/// `Listed` entries always precede `Unlisted` ones. The derived `Ord` relies
/// on that variant order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank<'a> {
    Listed(usize),
    Unlisted(&'a str),
}

fn rank_in<'a>(value: &'a str, order: Option<&[String]>) -> Rank<'a> {
    order
        .and_then(|order| order.iter().position(|entry| entry == value))
        .map_or(Rank::Unlisted(value), Rank::Listed)
}

/// Position of `family` in `options.family_order`, else the family name itself
pub fn family_rank<'a>(family: &'a str, options: &OrderingOptions) -> Rank<'a> {
    rank_in(family, options.family_order.as_deref())
}

/// Position of `suffix` in `options.suffix_order`.
///
/// Suffixes missing from a configured order land after every listed one and
/// sort lexicographically among themselves, which is also the ordering used
/// when no order is configured.
pub fn suffix_rank<'a>(suffix: &'a str, options: &OrderingOptions) -> Rank<'a> {
    rank_in(suffix, options.suffix_order.as_deref())
}

/// Rank of a size token.
///
/// `Absent < Known(_) < Unknown < Metal`. Every unrecognized token shares
/// `Unknown`, so callers must tie-break on the token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeRank {
    Absent,
    Known(u64),
    Unknown,
    Metal,
}

const NAMED_SIZES: [(&str, u64); 6] = [
    ("nano", 0),
    ("micro", 1),
    ("small", 2),
    ("medium", 3),
    ("large", 4),
    ("xlarge", 5),
];

pub fn size_rank(size: Option<&str>) -> SizeRank {
    let size = match size {
        None | Some("") => return SizeRank::Absent,
        Some("metal") => return SizeRank::Metal,
        Some(size) => size,
    };

    if let Some((_, rank)) = NAMED_SIZES.iter().find(|(name, _)| *name == size) {
        return SizeRank::Known(*rank);
    }

    // <N>xlarge ranks as 5 + N: 2xlarge=7, 4xlarge=9, ...
    match size.strip_suffix("xlarge") {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            let n = digits.parse::<u64>().unwrap_or(u64::MAX);
            SizeRank::Known(n.saturating_add(5))
        }
        _ => SizeRank::Unknown,
    }
}
