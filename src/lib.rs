//! # figstyle
//!
//! Style extraction for design document node trees.
//!
//! This library walks the node tree of a visual design document (frames,
//! shapes, text, vector art) and converts it into sparse, CSS-like style
//! records suitable for code generation or inspection tooling. It can also
//! ask the host to render a node as SVG.
//!
//! ## Quick Start
//!
//! ```no_run
//! use figstyle::{DocumentSnapshot, JsonFormat, StyleExtractor};
//!
//! fn main() -> figstyle::Result<()> {
//!     // Load a captured document
//!     let snapshot = DocumentSnapshot::open("document.json")?;
//!
//!     // Extract the style tree below a node
//!     let extractor = StyleExtractor::new(&snapshot);
//!     let record = extractor.extract("1:234")?;
//!     println!("{}", figstyle::to_json(&record, JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Sparse records**: default-valued attributes are omitted entirely
//! - **Normalized paints and effects**: hex colors, gradients, shadows, blurs
//! - **Design tokens**: bound variables resolved to their names
//! - **Bounded output**: recursion stops at a configurable depth
//! - **SVG export**: host-rendered vector markup with node metadata
//! - **Errors as data**: `{"error": ...}` payloads for process boundaries

pub mod error;
pub mod export;
pub mod host;
pub mod model;
pub mod output;
pub mod style;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{export_node_svg, export_svg, SvgExport};
pub use host::{resolve_node, DesignHost, DocumentSnapshot};
pub use model::{
    Color, Effect, EffectKind, Node, NodeKind, NodeType, Paint, PaintKind, TextProperties,
    Variable, VariableBinding,
};
pub use output::{to_json, ErrorPayload, JsonFormat, Response};
pub use style::{
    extract_batch, EffectDescriptor, ExtractOptions, ExtractionStats, NodeStyle, PaintDescriptor,
    StyleRecord,
};

/// Extract the style tree of a node with default options.
///
/// # Arguments
///
/// * `host` - Document host
/// * `id` - Identifier of the target node
///
/// # Example
///
/// ```
/// use figstyle::{extract_styles, DocumentSnapshot, Node, NodeType};
///
/// let snapshot = DocumentSnapshot::new(
///     Node::new("1:1", "Card", NodeType::Frame).with_size(320.4, 199.6),
/// );
/// let record = extract_styles(&snapshot, "1:1").unwrap();
/// let style = record.as_node().unwrap();
/// assert_eq!((style.width, style.height), (320, 200));
/// ```
pub fn extract_styles<H: DesignHost>(host: &H, id: &str) -> Result<StyleRecord> {
    style::extract_styles(host, id, &ExtractOptions::default())
}

/// Extract the style tree of a node with custom options.
pub fn extract_styles_with_options<H: DesignHost>(
    host: &H,
    id: &str,
    options: &ExtractOptions,
) -> Result<StyleRecord> {
    style::extract_styles(host, id, options)
}

/// Extract the style tree of a node, reporting failure as a payload.
pub fn style_response<H: DesignHost>(
    host: &H,
    id: &str,
    options: &ExtractOptions,
) -> Response<StyleRecord> {
    style::extract_styles(host, id, options).into()
}

/// Export a node as SVG, reporting failure as a payload.
pub async fn export_response<H: DesignHost>(host: &H, id: &str) -> Response<SvgExport> {
    export_svg(host, id).await.into()
}

/// Builder for extracting styles and SVG from one host.
///
/// # Example
///
/// ```
/// use figstyle::{DocumentSnapshot, Node, NodeType, StyleExtractor};
///
/// let snapshot = DocumentSnapshot::new(Node::new("1:1", "Card", NodeType::Frame));
/// let json = StyleExtractor::new(&snapshot)
///     .with_max_depth(4)
///     .compact()
///     .style_json("9:9")?;
/// assert_eq!(json, r#"{"error":"Node not found: 9:9"}"#);
/// # Ok::<(), figstyle::Error>(())
/// ```
pub struct StyleExtractor<'h, H> {
    host: &'h H,
    options: ExtractOptions,
    format: JsonFormat,
}

impl<'h, H: DesignHost> StyleExtractor<'h, H> {
    /// Create a new extractor over a host.
    pub fn new(host: &'h H) -> Self {
        Self {
            host,
            options: ExtractOptions::default(),
            format: JsonFormat::default(),
        }
    }

    /// Replace all extraction options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the depth cap.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.options = self.options.with_max_depth(depth);
        self
    }

    /// Disable parallel batch extraction.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Enable or disable export hints.
    pub fn with_hints(mut self, include: bool) -> Self {
        self.options = self.options.with_hints(include);
        self
    }

    /// Produce compact JSON.
    pub fn compact(mut self) -> Self {
        self.format = JsonFormat::Compact;
        self
    }

    /// Current extraction options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the style tree of a node.
    pub fn extract(&self, id: &str) -> Result<StyleRecord> {
        style::extract_styles(self.host, id, &self.options)
    }

    /// Extract several nodes, in parallel unless disabled.
    pub fn extract_batch<S: AsRef<str> + Sync>(&self, ids: &[S]) -> Vec<Result<StyleRecord>>
    where
        H: Sync,
    {
        style::extract_batch(self.host, ids, &self.options)
    }

    /// Extract a node's style tree as JSON; failures become an error payload.
    pub fn style_json(&self, id: &str) -> Result<String> {
        style_response(self.host, id, &self.options).to_json(self.format)
    }

    /// Export a node as SVG.
    pub async fn export_svg(&self, id: &str) -> Result<SvgExport> {
        export_svg(self.host, id).await
    }

    /// Export a node as SVG JSON; failures become an error payload.
    pub async fn svg_json(&self, id: &str) -> Result<String> {
        export_response(self.host, id).await.to_json(self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> DocumentSnapshot {
        DocumentSnapshot::new(
            Node::new("0:1", "Page", NodeType::Page)
                .with_child(Node::new("1:1", "Card", NodeType::Frame).with_size(100.0, 50.0)),
        )
    }

    #[test]
    fn test_extractor_builder() {
        let snapshot = snapshot();
        let extractor = StyleExtractor::new(&snapshot)
            .with_max_depth(2)
            .sequential()
            .with_hints(false);

        assert_eq!(extractor.options().max_depth, 2);
        assert!(!extractor.options().parallel);
        assert!(!extractor.options().include_hints);
    }

    #[test]
    fn test_extractor_defaults() {
        let snapshot = snapshot();
        let extractor = StyleExtractor::new(&snapshot);
        assert_eq!(extractor.options().max_depth, style::DEFAULT_MAX_DEPTH);
        assert_eq!(extractor.format, JsonFormat::Pretty);
    }

    #[test]
    fn test_extract_styles() {
        let snapshot = snapshot();
        let record = extract_styles(&snapshot, "1:1").unwrap();
        assert_eq!(record.id(), "1:1");
        assert_eq!(record.as_node().unwrap().width, 100);
    }

    #[test]
    fn test_extract_missing_node() {
        let snapshot = snapshot();
        let result = extract_styles(&snapshot, "7:7");
        assert!(matches!(result, Err(Error::NodeNotFound(_))));
    }

    #[test]
    fn test_empty_id_payload() {
        let snapshot = snapshot();
        let response = style_response(&snapshot, "", &ExtractOptions::default());
        assert_eq!(response.error().unwrap().error, "No target node id given");
    }

    #[test]
    fn test_style_json_success() {
        let snapshot = snapshot();
        let json = StyleExtractor::new(&snapshot)
            .compact()
            .style_json("1:1")
            .unwrap();
        assert!(json.starts_with(r#"{"id":"1:1","name":"Card","type":"FRAME","width":100"#));
    }

    #[test]
    fn test_extract_with_options() {
        let snapshot = snapshot();
        let options = ExtractOptions::new().with_max_depth(0);
        let record = extract_styles_with_options(&snapshot, "0:1", &options).unwrap();
        assert!(record.children()[0].is_truncated());
    }
}
