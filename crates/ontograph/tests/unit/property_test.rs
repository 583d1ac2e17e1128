//! Unit tests for `PropertyMap` builder pattern, type-safe getters and list accumulation.

use ontograph::{GraphError, PropertyMap, PropertyValue};

#[test]
fn test_property_map_builder() {
    let props = PropertyMap::new()
        .with("name", "mitochondrion")
        .with("depth", 4)
        .with("obsolete", false)
        .with("score", 0.75);

    assert_eq!(props.get_string("name"), Some("mitochondrion"));
    assert_eq!(props.get_int("depth"), Some(4));
    assert_eq!(props.get_bool("obsolete"), Some(false));
    assert_eq!(props.get_float("score"), Some(0.75));
}

#[test]
fn test_property_map_type_safe_getters() {
    let props = PropertyMap::new()
        .with("weight", "1")
        .with("depth", 3i64);

    // Delimited values stay strings; no numeric coercion
    assert_eq!(props.get_int("weight"), None);
    assert_eq!(props.get_string("weight"), Some("1"));
    assert_eq!(props.get_string("depth"), None);
}

#[test]
fn test_property_map_insert_and_remove() {
    let mut props = PropertyMap::new();

    assert_eq!(props.insert("namespace", "cellular_component"), None);
    let previous = props.insert("namespace", "molecular_function");
    assert_eq!(
        previous,
        Some(PropertyValue::String("cellular_component".to_string()))
    );
    assert_eq!(props.len(), 1);

    props.remove("namespace");
    assert!(!props.contains_key("namespace"));
    assert!(props.is_empty());
}

#[test]
fn test_push_to_list_accumulates() {
    let mut props = PropertyMap::new();
    props.push_to_list("evidence-codes", "IEA").unwrap();
    props.push_to_list("evidence-codes", "TAS").unwrap();

    assert_eq!(
        props.get_string_list("evidence-codes").map(<[String]>::len),
        Some(2)
    );
}

#[test]
fn test_push_to_list_rejects_scalar() {
    let mut props = PropertyMap::new().with("evidence-codes", "IEA");
    let err = props.push_to_list("evidence-codes", "TAS").unwrap_err();

    assert!(matches!(err, GraphError::PropertyTypeMismatch { .. }));
    assert_eq!(props.get_string("evidence-codes"), Some("IEA"));
}

#[test]
fn test_property_map_display_is_sorted() {
    let props = PropertyMap::new()
        .with("type", "GOTerm")
        .with("aliases", vec!["a", "b"])
        .with("name", "nucleus");

    assert_eq!(
        props.to_string(),
        "{aliases: [a, b], name: nucleus, type: GOTerm}"
    );
}

#[test]
fn test_property_map_json_is_flat() {
    let props = PropertyMap::new()
        .with("weight", "2")
        .with("evidence-codes", vec!["IEA"]);

    let json = serde_json::to_value(&props).unwrap();
    assert_eq!(json["weight"], "2");
    assert_eq!(json["evidence-codes"][0], "IEA");

    let back: PropertyMap = serde_json::from_value(json).unwrap();
    assert_eq!(back, props);
}
