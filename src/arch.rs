//! Heuristic CPU architecture tags
//!
//! A name is tagged when its family ends with the marker letter (`g` for
//! Graviton, `a` for AMD, `i` for Intel) or its suffix starts with it. These
//! are best-effort labels read off the name, not a catalog lookup, and more
//! than one can match a contrived name.

use crate::instance_id::AsInstanceId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Graviton,
    Amd,
    Intel,
}

impl Architecture {
    pub const ALL: [Architecture; 3] = [Architecture::Graviton, Architecture::Amd, Architecture::Intel];

    fn marker(self) -> char {
        match self {
            Architecture::Graviton => 'g',
            Architecture::Amd => 'a',
            Architecture::Intel => 'i',
        }
    }

    pub fn matches<T: AsInstanceId + ?Sized>(self, item: &T) -> bool {
        let id = item.as_instance_id();
        let marker = self.marker();
        id.family.ends_with(marker) || id.suffix.starts_with(marker)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Architecture::Graviton => "graviton",
            Architecture::Amd => "amd",
            Architecture::Intel => "intel",
        };
        f.write_str(name)
    }
}

/// e.g. `c7g`, `m6gd`, `t4g.micro`
pub fn is_graviton<T: AsInstanceId + ?Sized>(item: &T) -> bool {
    Architecture::Graviton.matches(item)
}

/// e.g. `c7a`, `m6a.large`
pub fn is_amd<T: AsInstanceId + ?Sized>(item: &T) -> bool {
    Architecture::Amd.matches(item)
}

/// e.g. `m6i`, `c6in`, `r7iz`
pub fn is_intel<T: AsInstanceId + ?Sized>(item: &T) -> bool {
    Architecture::Intel.matches(item)
}

/// Every tag that applies, in Graviton, AMD, Intel order
pub fn architectures<T: AsInstanceId + ?Sized>(item: &T) -> Vec<Architecture> {
    let id = item.as_instance_id();
    Architecture::ALL
        .into_iter()
        .filter(|arch| arch.matches(&*id))
        .collect()
}
