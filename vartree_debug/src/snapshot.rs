// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshot of a laid-out tree.
//!
//! [`export`] writes the current geometry of every node, in depth-first
//! order, together with the required surface size. Useful for diffing layouts
//! in bug reports.

use std::io::{self, Write};

use serde_json::{Value, json};

use vartree_core::tree::TreeStore;

/// Writes a JSON object describing `store` to `writer`.
///
/// The object has the shape:
///
/// ```json
/// {
///   "required": { "width": 41.0, "height": 41.0 },
///   "depth_levels": 2,
///   "active": 3,
///   "nodes": [
///     { "position": 1, "parent": null, "x": 11.0, "y": 11.0,
///       "depth": 0, "mainline": true }
///   ]
/// }
/// ```
///
/// Before the first game `active` is `null` and `nodes` is empty.
pub fn export(store: &TreeStore, writer: &mut dyn Write) -> io::Result<()> {
    let nodes: Vec<Value> = store
        .preorder()
        .map(|id| {
            let point = store.point(id);
            json!({
                "position": store.position(id).0,
                "parent": store.parent(id).map(|p| store.position(p).0),
                "x": point.x,
                "y": point.y,
                "depth": store.depth(id),
                "mainline": store.is_mainline(id),
            })
        })
        .collect();
    let required = store.required_size();

    let snapshot = json!({
        "required": { "width": required.width, "height": required.height },
        "depth_levels": store.depth_levels(),
        "active": store.active().map(|id| store.position(id).0),
        "nodes": nodes,
    });
    serde_json::to_writer_pretty(writer, &snapshot)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vartree_core::position::PositionRef;

    fn parse(store: &TreeStore) -> Value {
        let mut out = Vec::new();
        export(store, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn export_two_children() {
        let mut store = TreeStore::new();
        store.new_game(PositionRef(1));
        store.add_child(PositionRef(1), PositionRef(2)).unwrap();
        store.add_child(PositionRef(1), PositionRef(3)).unwrap();
        let _ = store.evaluate();

        let parsed = parse(&store);
        assert_eq!(parsed["required"]["width"], 41.0);
        assert_eq!(parsed["required"]["height"], 41.0);
        assert_eq!(parsed["depth_levels"], 2);
        assert_eq!(parsed["active"], 3);

        let nodes = parsed["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0]["parent"], Value::Null);
        assert_eq!(nodes[1]["position"], 2);
        assert_eq!(nodes[1]["mainline"], true);
        assert_eq!(nodes[2]["x"], 30.0);
        assert_eq!(nodes[2]["y"], 30.0);
        assert_eq!(nodes[2]["parent"], 1);
        assert_eq!(nodes[2]["mainline"], false);
    }

    #[test]
    fn export_before_first_game() {
        let parsed = parse(&TreeStore::new());
        assert_eq!(parsed["active"], Value::Null);
        assert!(parsed["nodes"].as_array().unwrap().is_empty());
    }
}
