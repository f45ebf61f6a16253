//! In-memory host backed by a JSON document dump.

use std::collections::HashMap;
use std::fs::File;
use std::future::Future;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::wire::{grow_stack, WireSnapshot};
use super::DesignHost;
use crate::error::{Error, Result};
use crate::model::{Node, Variable};

/// A captured document: node tree, variable table and pre-rendered SVG.
///
/// # Example
///
/// ```
/// use figstyle::host::{DesignHost, DocumentSnapshot};
///
/// let json = r#"{
///     "document": {"id": "0:1", "name": "Page", "type": "PAGE", "children": [
///         {"id": "1:2", "name": "Card", "type": "FRAME", "width": 320, "height": 200}
///     ]}
/// }"#;
/// let snapshot = DocumentSnapshot::from_json(json)?;
/// assert_eq!(snapshot.node_by_id("1:2").unwrap().name, "Card");
/// # Ok::<(), figstyle::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    root: Node,
    /// Node id -> child-index path from the root
    index: HashMap<String, Vec<usize>>,
    variables: HashMap<String, Variable>,
    svg_exports: HashMap<String, String>,
}

impl DocumentSnapshot {
    /// Create a snapshot around a node tree.
    pub fn new(root: Node) -> Self {
        let mut index = HashMap::new();
        let mut path = Vec::new();
        index_subtree(&root, &mut path, &mut index);

        Self {
            root,
            index,
            variables: HashMap::new(),
            svg_exports: HashMap::new(),
        }
    }

    /// Parse a snapshot from a JSON string.
    ///
    /// Documents of any nesting depth are accepted.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(json);
        let wire = deserialize_unbounded(&mut de)?;
        de.end()?;
        Self::from_wire(wire)
    }

    /// Parse a snapshot from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        let wire = deserialize_unbounded(&mut de)?;
        de.end()?;
        Self::from_wire(wire)
    }

    /// Load a snapshot file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_wire(wire: WireSnapshot) -> Result<Self> {
        if wire.document.is_anonymous() {
            return Err(Error::InvalidSnapshot("document root has no id".to_string()));
        }

        let mut snapshot = Self::new(wire.document.into());
        snapshot.variables = wire.variables;
        snapshot.svg_exports = wire.svg_exports;

        log::debug!(
            "loaded snapshot: {} nodes, {} variables, {} SVG exports",
            snapshot.len(),
            snapshot.variables.len(),
            snapshot.svg_exports.len()
        );
        Ok(snapshot)
    }

    /// Register a variable.
    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.insert(variable.id.clone(), variable);
        self
    }

    /// Record the SVG rendition of a node.
    pub fn with_svg_export(mut self, node_id: impl Into<String>, svg: impl Into<String>) -> Self {
        self.svg_exports.insert(node_id.into(), svg.into());
        self
    }

    /// The document root.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of addressable nodes.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the snapshot has no addressable nodes.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of registered variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of recorded SVG renditions.
    pub fn svg_export_count(&self) -> usize {
        self.svg_exports.len()
    }
}

// No nesting limit; the stack grows on demand while deserializing.
fn deserialize_unbounded<'de, R: serde_json::de::Read<'de>>(
    de: &mut serde_json::Deserializer<R>,
) -> Result<WireSnapshot> {
    de.disable_recursion_limit();
    let wire = WireSnapshot::deserialize(serde_stacker::Deserializer::new(de))?;
    Ok(wire)
}

fn index_subtree(node: &Node, path: &mut Vec<usize>, index: &mut HashMap<String, Vec<usize>>) {
    if index.contains_key(&node.id) {
        log::warn!("duplicate node id {}; keeping first occurrence", node.id);
    } else {
        index.insert(node.id.clone(), path.clone());
    }

    for (i, child) in node.children.iter().enumerate() {
        path.push(i);
        grow_stack(|| index_subtree(child, path, index));
        path.pop();
    }
}

impl DesignHost for DocumentSnapshot {
    fn node_by_id(&self, id: &str) -> Option<&Node> {
        let path = self.index.get(id)?;
        path.iter().try_fold(&self.root, |node, &i| node.children.get(i))
    }

    fn variable_by_id(&self, id: &str) -> Result<Option<Variable>> {
        Ok(self.variables.get(id).cloned())
    }

    fn export_svg(&self, node: &Node) -> impl Future<Output = Result<Vec<u8>>> + Send {
        let result = self
            .svg_exports
            .get(&node.id)
            .map(|svg| svg.clone().into_bytes())
            .ok_or_else(|| Error::Host(format!("no SVG rendition recorded for node {}", node.id)));
        std::future::ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeType;

    fn sample() -> DocumentSnapshot {
        DocumentSnapshot::new(
            Node::new("0:1", "Page", NodeType::Page)
                .with_child(
                    Node::new("1:1", "Header", NodeType::Frame)
                        .with_child(Node::new("1:2", "Logo", NodeType::Vector)),
                )
                .with_child(Node::new("1:3", "Body", NodeType::Frame)),
        )
    }

    #[test]
    fn test_index_resolves_nested_nodes() {
        let snapshot = sample();
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot.node_by_id("0:1").unwrap().name, "Page");
        assert_eq!(snapshot.node_by_id("1:2").unwrap().name, "Logo");
        assert_eq!(snapshot.node_by_id("1:3").unwrap().name, "Body");
        assert!(snapshot.node_by_id("1:4").is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let snapshot = DocumentSnapshot::new(
            Node::new("0:1", "Page", NodeType::Page)
                .with_child(Node::new("1:1", "First", NodeType::Frame))
                .with_child(Node::new("1:1", "Second", NodeType::Frame)),
        );
        assert_eq!(snapshot.node_by_id("1:1").unwrap().name, "First");
    }

    #[test]
    fn test_variables() {
        let snapshot = sample().with_variable(Variable::new("v:1", "color/primary"));
        assert_eq!(
            snapshot.variable_by_id("v:1").unwrap().unwrap().name,
            "color/primary"
        );
        assert!(snapshot.variable_by_id("v:2").unwrap().is_none());
    }

    #[test]
    fn test_from_json_rejects_anonymous_root() {
        let result = DocumentSnapshot::from_json(r#"{"document":{"name":"x","type":"PAGE"}}"#);
        assert!(matches!(result, Err(Error::InvalidSnapshot(_))));
    }

    #[test]
    fn test_from_json_requires_document() {
        let result = DocumentSnapshot::from_json(r#"{"variables":{}}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
