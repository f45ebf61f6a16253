//! Statistics over an extracted style tree.

use serde::{Deserialize, Serialize};

use super::record::StyleRecord;
use crate::model::NodeType;

/// Statistics collected from a style record tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of records, stubs included
    pub node_count: u32,

    /// Number of depth-cap stubs
    pub truncated_count: u32,

    /// Number of text nodes
    pub text_count: u32,

    /// Number of component instances
    pub instance_count: u32,

    /// Number of SVG export candidates
    pub svg_candidate_count: u32,

    /// Number of nodes with a visible image fill
    pub image_fill_count: u32,

    /// Number of hidden nodes
    pub hidden_count: u32,

    /// Deepest level reached (the target node is depth 0)
    pub max_depth: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a record tree.
    pub fn from_record(record: &StyleRecord) -> Self {
        let mut stats = Self::new();
        stats.visit(record, 0);
        stats
    }

    fn visit(&mut self, record: &StyleRecord, depth: u32) {
        self.node_count += 1;
        self.max_depth = self.max_depth.max(depth);

        if *record.node_type() == NodeType::Instance {
            self.instance_count += 1;
        }

        let Some(style) = record.as_node() else {
            self.truncated_count += 1;
            return;
        };

        if style.text.is_some() {
            self.text_count += 1;
        }
        if style.is_svg_candidate == Some(true) {
            self.svg_candidate_count += 1;
        }
        if style.has_image_fill == Some(true) {
            self.image_fill_count += 1;
        }
        if style.visible == Some(false) {
            self.hidden_count += 1;
        }

        for child in record.children() {
            self.visit(child, depth + 1);
        }
    }

    /// Merge statistics from another tree.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.node_count += other.node_count;
        self.truncated_count += other.truncated_count;
        self.text_count += other.text_count;
        self.instance_count += other.instance_count;
        self.svg_candidate_count += other.svg_candidate_count;
        self.image_fill_count += other.image_fill_count;
        self.hidden_count += other.hidden_count;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}
