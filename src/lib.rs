//! ec2names library
//!
//! Parses EC2 instance family, generation and type names (`m6i`, `c5n`,
//! `m6i.2xlarge`) into structured records and orders them deterministically
//! for sorting, deduplication and grouping. Every operation accepts any
//! string; malformed names degrade to `valid == false` instead of failing.

pub mod arch;
pub mod collections;
pub mod compare;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod instance_id;
pub mod output;
pub mod ranking;
pub mod utils;

// Re-export commonly used types
pub use arch::{architectures, is_amd, is_graviton, is_intel, Architecture};
pub use collections::{group_by_family, sort_generations, sort_types, unique_sorted, FamilyGroups};
pub use compare::{
    compare_generations, compare_parsed_generations, compare_parsed_types, compare_types,
    InstanceComparator, SortKind,
};
pub use instance_id::{generation_of, parse, stringify, AsInstanceId, ParsedInstanceId};
pub use ranking::{family_rank, size_rank, suffix_rank, OrderingOptions, Rank, SizeRank};
