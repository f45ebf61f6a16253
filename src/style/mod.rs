//! Style extraction: from design nodes to CSS-like attribute records.

mod color;
mod effect;
mod extract;
mod options;
mod paint;
mod record;
mod stats;
mod variables;

pub use color::{color_hex, to_hex};
pub use effect::{normalize_effect, normalize_effects};
pub use extract::{
    extract_batch, extract_node, extract_styles, IMAGE_EXPORT_HINT, SVG_EXPORT_HINT,
};
pub use options::{ExtractOptions, DEFAULT_MAX_DEPTH};
pub use paint::{normalize_paint, normalize_paints};
pub(crate) use record::round_half_up;
pub use record::{
    gradient_type_tag, BorderRadii, EffectDescriptor, FlexDirection, GradientStop, LayoutStyle,
    MetricStyle, NodeStyle, Padding, PaintDescriptor, Scalar, StyleRecord, TextStyle,
    TruncatedNode,
};
pub use stats::ExtractionStats;
pub use variables::extract_bound_variables;
