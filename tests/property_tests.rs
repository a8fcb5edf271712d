//! Property-based tests for ec2names
//!
//! These tests use proptest to generate well-formed and malformed instance
//! names and check that parsing is total and both comparators are strict
//! total orders.

use ec2names::{
    compare_generations, compare_types, group_by_family, parse, sort_generations, sort_types,
    stringify, unique_sorted, AsInstanceId, OrderingOptions, SortKind,
};
use proptest::prelude::*;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Names that mostly fit the grammar, plus mixed case, padding and junk
fn instance_name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => r"[a-z]{1,3}[0-9]{0,2}[a-z]{0,3}(\.[a-z0-9]{1,8})?",
        2 => r"[cmrtg][5-8][a-z]{0,2}\.(nano|micro|small|medium|large|xlarge|[0-9]{1,2}xlarge|metal|foo|24xl)",
        1 => r" ?[A-Za-z]{1,3}[0-9]{0,2}[A-Za-z]{0,2} ?",
        1 => r"[a-z]{1,2}[0-9]{18,24}[a-z]{0,2}",
        1 => r"[a-z0-9.\-_ ]{0,8}",
        1 => ".{0,10}",
    ]
}

fn ordering_options() -> impl Strategy<Value = OrderingOptions> {
    prop_oneof![
        Just(OrderingOptions::default()),
        Just(OrderingOptions::class_buckets()),
        Just(OrderingOptions::new().with_suffix_order(["", "i", "in", "d", "dn", "n", "g"])),
        Just(OrderingOptions::new().with_family_order(["t", "m"])),
    ]
}

type Cmp = fn(&str, &str, &OrderingOptions) -> Ordering;

fn generations(a: &str, b: &str, options: &OrderingOptions) -> Ordering {
    compare_generations(a, b, options)
}

fn types(a: &str, b: &str, options: &OrderingOptions) -> Ordering {
    compare_types(a, b, options)
}

fn check_total_order(cmp: Cmp, a: &str, b: &str, c: &str, options: &OrderingOptions) {
    // reflexive
    assert_eq!(cmp(a, a, options), Ordering::Equal);

    // antisymmetric
    assert_eq!(cmp(a, b, options), cmp(b, a, options).reverse(), "{:?} vs {:?}", a, b);

    // equal only when the normalized forms are equal
    let same = parse(a).normalized == parse(b).normalized;
    assert_eq!(cmp(a, b, options) == Ordering::Equal, same, "{:?} vs {:?}", a, b);

    // transitive
    if cmp(a, b, options) != Ordering::Greater && cmp(b, c, options) != Ordering::Greater {
        assert_ne!(
            cmp(a, c, options),
            Ordering::Greater,
            "{:?} <= {:?} <= {:?} but {:?} > {:?}",
            a,
            b,
            c,
            a,
            c
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn test_parse_is_total(input in ".*") {
        let id = parse(&input);
        prop_assert_eq!(&id.raw, input.trim());
        prop_assert_eq!(&id.normalized, &input.trim().to_lowercase());
        if !id.valid {
            prop_assert_eq!(&id.family, &id.normalized);
            prop_assert_eq!(id.generation, None);
            prop_assert_eq!(id.suffix.as_str(), "");
            prop_assert_eq!(id.size, None);
        }
    }

    #[test]
    fn test_valid_iff_grammar_matches(input in instance_name()) {
        let grammar = Regex::new(r"^[a-z]+[0-9]*[a-z]*(\.[a-z0-9]+)?$").unwrap();
        let id = parse(&input);
        prop_assert_eq!(id.valid, grammar.is_match(&id.normalized));
    }

    #[test]
    fn test_stringify_round_trip(input in instance_name()) {
        let first = parse(&input);
        prop_assume!(first.valid);

        let canonical = stringify(&first);
        let second = parse(&canonical);
        prop_assert_eq!(&second.normalized, &canonical);
        prop_assert!(second.valid);

        let third = parse(&stringify(&second));
        prop_assert_eq!(second, third);
    }

    #[test]
    fn test_compare_generations_total_order(
        a in instance_name(),
        b in instance_name(),
        c in instance_name(),
        options in ordering_options()
    ) {
        check_total_order(generations, &a, &b, &c, &options);
    }

    #[test]
    fn test_compare_types_total_order(
        a in instance_name(),
        b in instance_name(),
        c in instance_name(),
        options in ordering_options()
    ) {
        check_total_order(types, &a, &b, &c, &options);
    }

    #[test]
    fn test_long_generations_order_numerically(
        a in "[1-9][0-9]{15,24}",
        b in "[1-9][0-9]{15,24}"
    ) {
        let numeric = a.len().cmp(&b.len()).then_with(|| a.cmp(&b));
        prop_assert_eq!(
            compare_generations(&format!("m{}", a), &format!("m{}", b), &OrderingOptions::default()),
            numeric
        );
    }

    #[test]
    fn test_parsed_and_raw_inputs_agree(
        a in instance_name(),
        b in instance_name(),
        options in ordering_options()
    ) {
        let (pa, pb) = (parse(&a), parse(&b));
        prop_assert_eq!(
            compare_generations(&pa, &pb, &options),
            compare_generations(a.as_str(), b.as_str(), &options)
        );
        prop_assert_eq!(
            compare_types(&pa, &pb, &options),
            compare_types(a.as_str(), b.as_str(), &options)
        );
    }

    #[test]
    fn test_sorts_are_ordered_permutations(
        items in prop::collection::vec(instance_name(), 0..20),
        options in ordering_options()
    ) {
        let by_generation = sort_generations(&items, &options);
        let by_type = sort_types(&items, &options);

        for pair in by_generation.windows(2) {
            prop_assert_ne!(compare_generations(&pair[0], &pair[1], &options), Ordering::Greater);
        }
        for pair in by_type.windows(2) {
            prop_assert_ne!(compare_types(&pair[0], &pair[1], &options), Ordering::Greater);
        }

        let mut expected = items.clone();
        expected.sort();
        let mut got = by_generation.clone();
        got.sort();
        prop_assert_eq!(&got, &expected);
        let mut got = by_type.clone();
        got.sort();
        prop_assert_eq!(&got, &expected);
    }

    #[test]
    fn test_unique_sorted_keeps_one_per_key(
        items in prop::collection::vec(instance_name(), 0..20),
        kind in prop_oneof![Just(SortKind::Generations), Just(SortKind::Types)]
    ) {
        let unique = unique_sorted(&items, kind, &OrderingOptions::default());

        let keys: HashSet<String> = unique.iter().map(|i| i.dedup_key()).collect();
        prop_assert_eq!(keys.len(), unique.len());

        let input_keys: HashSet<String> = items.iter().map(|i| i.dedup_key()).collect();
        prop_assert_eq!(keys, input_keys);

        // first occurrence wins
        for item in &unique {
            let first = items.iter().find(|i| i.dedup_key() == item.dedup_key());
            prop_assert_eq!(first, Some(item));
        }
    }

    #[test]
    fn test_group_by_family_partitions_in_order(
        items in prop::collection::vec(instance_name(), 0..20)
    ) {
        let groups = group_by_family(&items);

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        prop_assert_eq!(total, items.len());

        for (family, members) in groups.iter() {
            let expected: Vec<&String> = items
                .iter()
                .filter(|i| parse(i.as_str()).family == family)
                .collect();
            let got: Vec<&String> = members.iter().collect();
            prop_assert_eq!(got, expected);
        }
    }
}
