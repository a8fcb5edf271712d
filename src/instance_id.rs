//! EC2 instance identifier parsing
//!
//! Turns strings like `m6i`, `c5n` or `m6i.2xlarge` into a [`ParsedInstanceId`].
//! Parsing never fails: input that does not fit the grammar comes back with
//! `valid == false` and the whole normalized string as its family, so batch
//! callers never need to guard individual items.
//!
//! ## Grammar
//!
//! ```text
//! ^([a-z]+)([0-9]+)?([a-z]+)?(?:\.([a-z0-9]+))?$
//!  family  generation suffix      size
//! ```
//!
//! matched against the trimmed, lower-cased input.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

static INSTANCE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+)([0-9]+)?([a-z]+)?(?:\.([a-z0-9]+))?$")
        .expect("instance id grammar is a valid regex")
});

/// A structured EC2 instance family, generation or type name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedInstanceId {
    /// Trimmed input in its original case
    pub raw: String,
    /// Lower-cased `raw`; final tie-breaker and deduplication key
    pub normalized: String,
    pub family: String,
    pub generation: Option<u64>,
    /// Attribute letters after the generation (`i`, `gn`, `dn`, ...), empty if none
    pub suffix: String,
    /// Token after the `.` (`large`, `2xlarge`, `metal`, ...)
    pub size: Option<String>,
    pub valid: bool,
}

/// Parse any string into a [`ParsedInstanceId`].
///
/// Generation digits that overflow `u64` saturate to `u64::MAX`; the
/// comparators then fall back to the digit text, so ordering stays numeric.
pub fn parse(input: &str) -> ParsedInstanceId {
    let raw = input.trim().to_string();
    let normalized = raw.to_lowercase();

    let Some(caps) = INSTANCE_ID_RE.captures(&normalized) else {
        return ParsedInstanceId {
            raw,
            family: normalized.clone(),
            normalized,
            generation: None,
            suffix: String::new(),
            size: None,
            valid: false,
        };
    };

    let family = caps[1].to_string();
    let generation = caps
        .get(2)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX));
    let suffix = caps
        .get(3)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let size = caps.get(4).map(|m| m.as_str().to_string());

    ParsedInstanceId {
        raw,
        normalized,
        family,
        generation,
        suffix,
        size,
        valid: true,
    }
}

/// Reassemble a record into its canonical string.
///
/// `family` + generation digits + `suffix` + `.size`, each part omitted when
/// absent. No validation is performed.
pub fn stringify(id: &ParsedInstanceId) -> String {
    let mut out = id.family.clone();
    if let Some(generation) = id.generation {
        out.push_str(&generation.to_string());
    }
    out.push_str(&id.suffix);
    if let Some(size) = &id.size {
        out.push('.');
        out.push_str(size);
    }
    out
}

/// Canonical generation id of a name, with any size dropped.
///
/// `"m5.large"` becomes `"m5"`; malformed input comes back normalized.
pub fn generation_of(input: &str) -> String {
    parse(input).generation_id().to_string()
}

impl ParsedInstanceId {
    /// The same identifier with its size removed
    pub fn generation_id(&self) -> ParsedInstanceId {
        if self.size.is_none() || !self.valid {
            return self.clone();
        }
        let mut id = ParsedInstanceId {
            raw: String::new(),
            normalized: String::new(),
            family: self.family.clone(),
            generation: self.generation,
            suffix: self.suffix.clone(),
            size: None,
            valid: true,
        };
        let canonical = stringify(&id);
        id.raw = canonical.clone();
        id.normalized = canonical;
        id
    }

    /// Generation digits as written, leading zeros stripped.
    ///
    /// Orders generations that saturated `u64` in [`parse`].
    pub fn generation_digits(&self) -> Option<&str> {
        self.generation?;
        let rest = self.normalized.get(self.family.len()..)?;
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        Some(rest[..end].trim_start_matches('0'))
    }
}

impl fmt::Display for ParsedInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}

/// Anything the comparators and collection operations accept: raw strings or
/// already-parsed records.
pub trait AsInstanceId {
    /// Borrow or produce the parsed form
    fn as_instance_id(&self) -> Cow<'_, ParsedInstanceId>;

    /// Key used by deduplication: lower-cased trimmed text for strings,
    /// [`stringify`] for records.
    fn dedup_key(&self) -> String;
}

impl AsInstanceId for str {
    fn as_instance_id(&self) -> Cow<'_, ParsedInstanceId> {
        Cow::Owned(parse(self))
    }

    fn dedup_key(&self) -> String {
        self.to_lowercase().trim().to_string()
    }
}

impl AsInstanceId for String {
    fn as_instance_id(&self) -> Cow<'_, ParsedInstanceId> {
        self.as_str().as_instance_id()
    }

    fn dedup_key(&self) -> String {
        self.as_str().dedup_key()
    }
}

impl AsInstanceId for ParsedInstanceId {
    fn as_instance_id(&self) -> Cow<'_, ParsedInstanceId> {
        Cow::Borrowed(self)
    }

    fn dedup_key(&self) -> String {
        stringify(self)
    }
}

impl<T: AsInstanceId + ?Sized> AsInstanceId for &T {
    fn as_instance_id(&self) -> Cow<'_, ParsedInstanceId> {
        (**self).as_instance_id()
    }

    fn dedup_key(&self) -> String {
        (**self).dedup_key()
    }
}
