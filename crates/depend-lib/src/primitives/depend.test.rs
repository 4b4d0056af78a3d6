use serde_json::json;

#[test]
fn test_cycle_error_renders_path() {
    let err = DependError::CycleDetected {
        path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
    };
    assert_eq!(err.to_string(), "Dependency cycle found: a -> b -> a");
    assert_eq!(err.cycle().map(|p| p.len()), Some(3));
}

#[test]
fn test_node_not_found_message() {
    let err = DependError::node_not_found("missing.js");
    assert_eq!(err.to_string(), "Node does not exist: missing.js");
    assert!(err.cycle().is_none());
}

#[test]
fn test_plain_name_validation() {
    assert!(ensure_plain_name("a.js", "alias source").is_ok());
    assert!(matches!(
        ensure_plain_name("", "alias source"),
        Err(DependError::InvalidArgument { .. })
    ));
    assert!(matches!(
        ensure_plain_name("   ", "alias target"),
        Err(DependError::InvalidArgument { .. })
    ));
}

#[test]
fn test_dependees_from_single_and_many() {
    let one: Dependees = "b.js".into();
    assert_eq!(one.as_slice(), ["b.js".to_string()]);

    let many: Dependees = ["b.js", "c.js"].into();
    assert_eq!(many.clone().into_vec(), vec!["b.js", "c.js"]);
    assert_eq!(many.to_string(), "[b.js, c.js]");
}

#[test]
fn test_dependees_from_dynamic_values() {
    assert_eq!(
        Dependees::try_from(&json!("b.js")).unwrap(),
        Dependees::One("b.js".to_string())
    );
    assert_eq!(
        Dependees::try_from(&json!(["b.js", "c.js"])).unwrap(),
        Dependees::Many(vec!["b.js".to_string(), "c.js".to_string()])
    );
    assert_eq!(
        Dependees::try_from(&json!([])).unwrap(),
        Dependees::Many(Vec::new())
    );
}

#[test]
fn test_dependees_reject_wrong_shapes() {
    for value in [json!(69), json!(null), json!({"b.js": "c.js"}), json!(true)] {
        let result = Dependees::try_from(&value);
        assert!(
            matches!(result, Err(DependError::InvalidArgument { .. })),
            "{} should be rejected",
            value
        );
    }

    let nested = Dependees::try_from(&json!(["b.js", 3]));
    assert!(matches!(nested, Err(DependError::InvalidArgument { .. })));
}

#[test]
fn test_dependees_deserialize_untagged() {
    let one: Dependees = serde_json::from_str("\"a.js\"").unwrap();
    assert_eq!(one, Dependees::One("a.js".to_string()));

    let many: Dependees = serde_json::from_str("[\"a.js\", \"b.js\"]").unwrap();
    assert_eq!(many.as_slice().len(), 2);

    assert!(serde_json::from_str::<Dependees>("42").is_err());
}
