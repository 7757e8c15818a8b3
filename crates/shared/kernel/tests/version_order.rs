use glzig_kernel::version::compare_versions;
use proptest::prelude::*;
use std::cmp::Ordering;

fn dotted(parts: &[u32]) -> String {
    parts.iter().map(u32::to_string).collect::<Vec<_>>().join(".")
}

proptest! {
    #[test]
    fn matches_numeric_tuple_order(a in prop::collection::vec(0u32..40, 2), b in prop::collection::vec(0u32..40, 2)) {
        prop_assert_eq!(compare_versions(&dotted(&a), &dotted(&b)), a.cmp(&b));
    }

    #[test]
    fn is_antisymmetric(a in "[0-9]{1,2}(\\.[0-9]{1,2}){0,2}", b in "[0-9]{1,2}(\\.[0-9]{1,2}){0,2}") {
        prop_assert_eq!(compare_versions(&a, &b), compare_versions(&b, &a).reverse());
    }
}

#[test]
fn sorting_registry_numbers() {
    let mut numbers = vec!["4.6", "1.0", "10.0", "3.1", "1.10", "1.2"];
    numbers.sort_by(|a, b| compare_versions(a, b));
    assert_eq!(numbers, ["1.0", "1.2", "1.10", "3.1", "4.6", "10.0"]);
    assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
}
