//! Extraction options and configuration.

/// Depth past which nodes are emitted as truncated stubs.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Options for style extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Deepest level that is fully extracted (the target node is depth 0)
    pub max_depth: usize,

    /// Extract batches in parallel using rayon
    pub parallel: bool,

    /// Attach `exportHint` strings to SVG candidates and image fills
    pub include_hints: bool,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the depth cap.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Disable parallel batch extraction.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable or disable export hints.
    pub fn with_hints(mut self, include: bool) -> Self {
        self.include_hints = include;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            parallel: true,
            include_hints: true,
        }
    }
}
