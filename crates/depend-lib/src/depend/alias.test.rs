use super::*;

#[test]
fn test_resolves_from_source_to_target() {
    let mut table = AliasTable::new();
    table.add("a.js", "a-resolved.js").unwrap();
    assert_eq!(table.resolve("a.js").unwrap(), "a-resolved.js");
    assert_eq!(table.target("a.js"), Some("a-resolved.js"));
}

#[test]
fn test_unaliased_name_resolves_to_itself() {
    let table = AliasTable::new();
    assert_eq!(table.resolve("jquery.js").unwrap(), "jquery.js");
}

#[test]
fn test_resolves_regardless_of_extension() {
    let mut table = AliasTable::new();
    table.add("a", "a.js").unwrap();
    table.add("b.js", "b").unwrap();
    assert_eq!(table.resolve("a").unwrap(), "a.js");
    assert_eq!(table.resolve("b.js").unwrap(), "b");
}

#[test]
fn test_only_resolves_forward() {
    let mut table = AliasTable::new();
    table.add("a.js", "a").unwrap();
    assert_eq!(table.resolve("a").unwrap(), "a");
}

#[test]
fn test_resolution_is_transitive() {
    let mut table = AliasTable::new();
    table.add("a", "b").unwrap();
    table.add("b", "c").unwrap();
    assert_eq!(table.resolve("a").unwrap(), "c");
    assert_eq!(table.resolve("c").unwrap(), "c");
}

#[test]
fn test_re_adding_overwrites_target() {
    let mut table = AliasTable::new();
    table.add("jquery", "jquery-1.js").unwrap();
    table.add("jquery", "jquery-3.js").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.resolve("jquery").unwrap(), "jquery-3.js");
}

#[test]
fn test_rejects_blank_names() {
    let mut table = AliasTable::new();
    assert!(matches!(
        table.add("", "b.js"),
        Err(DependError::InvalidArgument { .. })
    ));
    assert!(matches!(
        table.add("a.js", "  "),
        Err(DependError::InvalidArgument { .. })
    ));
    assert!(table.is_empty());
}

#[test]
fn test_alias_cycle_is_reported() {
    let mut table = AliasTable::new();
    table.add("a", "b").unwrap();
    table.add("b", "a").unwrap();

    let err = table.resolve("a").unwrap_err();
    assert_eq!(err.cycle().unwrap(), ["a", "b", "a"]);
}

#[test]
fn test_alias_cycle_reached_through_a_chain() {
    let mut table = AliasTable::new();
    table.add("entry", "b").unwrap();
    table.add("b", "c").unwrap();
    table.add("c", "b").unwrap();

    let err = table.resolve("entry").unwrap_err();
    assert_eq!(err.to_string(), "Dependency cycle found: b -> c -> b");
}

#[test]
fn test_self_alias_is_a_cycle() {
    let mut table = AliasTable::new();
    table.add("a", "a").unwrap();
    assert!(matches!(
        table.resolve("a"),
        Err(DependError::CycleDetected { .. })
    ));
}

#[test]
fn test_equals_compares_canonical_names() {
    let mut table = AliasTable::new();
    table.add("jquery", "jquery.js").unwrap();
    table.add("$", "jquery").unwrap();

    assert!(table.equals("$", "jquery.js").unwrap());
    assert!(table.equals("jquery", "$").unwrap());
    assert!(!table.equals("jquery", "underscore.js").unwrap());
}

#[test]
fn test_remove_alias() {
    let mut table = AliasTable::new();
    table.add("a", "b").unwrap();
    assert_eq!(table.remove("a"), Some("b".to_string()));
    assert_eq!(table.resolve("a").unwrap(), "a");
    assert_eq!(table.iter().count(), 0);
}
