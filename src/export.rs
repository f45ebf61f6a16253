//! SVG export of single nodes.
//!
//! The host renders the node; this module only resolves the target, awaits
//! the render and packages the markup with the node's basic metadata.
//! There is no timeout or retry here: whatever failure the host reports is
//! surfaced as [`Error::ExportFailed`].

use serde::Serialize;

use crate::error::{Error, Result};
use crate::host::{resolve_node, DesignHost};
use crate::model::{Node, NodeType};
use crate::style::round_half_up;

/// A node rendered as inline SVG.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SvgExport {
    /// Display name
    pub name: String,
    /// Node identifier
    pub id: String,
    /// Type tag
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Rounded width
    pub width: i64,
    /// Rounded height
    pub height: i64,
    /// SVG markup
    pub svg: String,
}

/// Resolve a node by id and export it as SVG.
pub async fn export_svg<H: DesignHost>(host: &H, id: &str) -> Result<SvgExport> {
    let node = resolve_node(host, id)?;
    export_node_svg(host, node).await
}

/// Export an already resolved node as SVG.
pub async fn export_node_svg<H: DesignHost>(host: &H, node: &Node) -> Result<SvgExport> {
    let bytes = host.export_svg(node).await.map_err(|e| {
        let message = match e {
            Error::Host(message) => message,
            other => other.to_string(),
        };
        log::warn!("SVG export of {} failed: {}", node.id, message);
        Error::ExportFailed {
            node_id: node.id.clone(),
            message,
        }
    })?;

    Ok(SvgExport {
        name: node.name.clone(),
        id: node.id.clone(),
        node_type: node.node_type.clone(),
        width: round_half_up(node.geometry.width),
        height: round_half_up(node.geometry.height),
        svg: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
