//! Host abstraction layer.
//!
//! The design document lives in a host application. Extraction only needs
//! three queries from it, captured by [`DesignHost`]: node lookup, variable
//! lookup and SVG rendering. [`DocumentSnapshot`] implements the trait over a
//! JSON dump of a document.

mod snapshot;
mod wire;

pub use snapshot::DocumentSnapshot;

use std::future::Future;

use crate::error::{Error, Result};
use crate::model::{Node, Variable};

/// Read-only access to a host document.
pub trait DesignHost {
    /// Look up a node anywhere in the document by identifier.
    fn node_by_id(&self, id: &str) -> Option<&Node>;

    /// Look up a variable by identifier.
    ///
    /// `Ok(None)` means the variable does not exist; `Err` means the host
    /// could not answer (e.g., a library variable that is not loaded).
    fn variable_by_id(&self, id: &str) -> Result<Option<Variable>>;

    /// Render a node as SVG markup.
    fn export_svg(&self, node: &Node) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Resolve a target identifier to a node.
///
/// An empty identifier is reported as [`Error::NoTarget`]; any other id the
/// host does not know, malformed or not, is [`Error::NodeNotFound`].
pub fn resolve_node<'h, H: DesignHost>(host: &'h H, id: &str) -> Result<&'h Node> {
    if id.is_empty() {
        return Err(Error::NoTarget);
    }
    host.node_by_id(id)
        .ok_or_else(|| Error::NodeNotFound(id.to_string()))
}
