use super::*;

fn v(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_intersection_keeps_left_order() {
    let a = v(&["d", "c", "b", "a"]);
    let b = v(&["a", "c", "x"]);
    assert_eq!(intersection(&a, &b), v(&["c", "a"]));
}

#[test]
fn test_intersection_with_empty() {
    let a = v(&["a", "b"]);
    assert!(intersection(&a, &[]).is_empty());
    assert!(intersection(&[], &a).is_empty());
}

#[test]
fn test_exclusion_keeps_left_order() {
    let a = v(&["jq.js", "app.js", "page.js"]);
    let b = v(&["page.js", "jq.js"]);
    assert_eq!(exclusion(&a, &b), v(&["app.js"]));
    assert_eq!(exclusion(&a, &[]), a);
}

#[test]
fn test_union_appends_unseen_right_elements() {
    let a = v(&["a", "b"]);
    let b = v(&["c", "b", "d"]);
    assert_eq!(union(&a, &b), v(&["a", "b", "c", "d"]));
}

#[test]
fn test_union_filters_right_against_left_only() {
    let a = v(&["x"]);
    let b = v(&["y", "x", "y"]);
    assert_eq!(union(&a, &b), v(&["x", "y", "y"]));
}

#[test]
fn test_left_duplicates_are_preserved() {
    let a = v(&["a", "a", "b"]);
    let b = v(&["a"]);
    assert_eq!(intersection(&a, &b), v(&["a", "a"]));
    assert_eq!(exclusion(&a, &b), v(&["b"]));
}
