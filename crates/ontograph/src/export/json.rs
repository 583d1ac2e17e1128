//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts, plus a "directed" flag.

use super::unique_edges;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeKey, PropertyMap, PropertyValue};
use serde_json::{json, Value};

/// Export graph to D3.js-compatible JSON format
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if the document cannot be rendered.
pub fn export_json<N: NodeKey>(graph: &Graph<N>) -> Result<String> {
    let nodes_array: Vec<Value> = graph
        .nodes()
        .map(|(id, attrs)| {
            json!({
                "id": id.to_string(),
                "properties": properties_to_json(attrs),
            })
        })
        .collect();

    let links_array: Vec<Value> = unique_edges(graph)
        .map(|(source, target, props)| {
            json!({
                "source": source.to_string(),
                "target": target.to_string(),
                "properties": properties_to_json(&props.borrow()),
            })
        })
        .collect();

    let result = json!({
        "directed": graph.is_directed(),
        "nodes": nodes_array,
        "links": links_array,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to render graph JSON", e))
}

/// Convert PropertyMap to JSON object
fn properties_to_json(props: &PropertyMap) -> Value {
    let mut obj = serde_json::Map::new();

    for (key, value) in props.iter_sorted() {
        let json_value = match value {
            PropertyValue::String(s) => json!(s),
            PropertyValue::Int(i) => json!(i),
            PropertyValue::Float(f) => json!(f),
            PropertyValue::Bool(b) => json!(b),
            PropertyValue::StringList(v) => json!(v),
            PropertyValue::Null => json!(null),
        };
        obj.insert(key.clone(), json_value);
    }

    Value::Object(obj)
}
