//! Style attribute records produced by extraction.
//!
//! Records are sparse: every optional field is skipped during serialization
//! when it is `None`, so default-valued attributes never appear in the output.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::model::{GradientType, NodeType};

/// A numeric attribute value.
///
/// Integral values serialize as JSON integers (`8`, not `8.0`), matching what
/// CSS tooling expects to read.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Scalar(pub f64);

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        if self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Round to the nearest integer, halves rounding up.
pub(crate) fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Style record for one visited node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleRecord {
    /// Node below the depth cap; children were not visited
    Truncated(TruncatedNode),
    /// Fully extracted node
    Node(Box<NodeStyle>),
}

impl StyleRecord {
    /// Node identifier.
    pub fn id(&self) -> &str {
        match self {
            StyleRecord::Truncated(t) => &t.id,
            StyleRecord::Node(n) => &n.id,
        }
    }

    /// Node type tag.
    pub fn node_type(&self) -> &NodeType {
        match self {
            StyleRecord::Truncated(t) => &t.node_type,
            StyleRecord::Node(n) => &n.node_type,
        }
    }

    /// Whether this record is a depth-cap stub.
    pub fn is_truncated(&self) -> bool {
        matches!(self, StyleRecord::Truncated(_))
    }

    /// Full style, unless truncated.
    pub fn as_node(&self) -> Option<&NodeStyle> {
        match self {
            StyleRecord::Node(n) => Some(n),
            StyleRecord::Truncated(_) => None,
        }
    }

    /// Child records, empty for leaves and stubs.
    pub fn children(&self) -> &[StyleRecord] {
        self.as_node()
            .and_then(|n| n.children.as_deref())
            .unwrap_or_default()
    }
}

/// Stub emitted in place of a node past the depth cap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TruncatedNode {
    /// Node identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Type tag
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Always true
    pub truncated: bool,
}

/// Extracted style of a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    /// Node identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Type tag
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Rounded width
    pub width: i64,
    /// Rounded height
    pub height: i64,
    /// Rounded x position
    pub x: i64,
    /// Rounded y position
    pub y: i64,

    /// Present (false) only for hidden nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Present only when not fully opaque
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Scalar>,
    /// Present only when rotated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Scalar>,

    /// Visible fill layers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<PaintDescriptor>>,
    /// Visible stroke layers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<PaintDescriptor>>,
    /// Stroke weight, alongside strokes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<Scalar>,
    /// Stroke alignment, alongside strokes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_align: Option<String>,

    /// Uniform corner radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<Scalar>,
    /// Per-corner radii
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radii: Option<BorderRadii>,

    /// Flexbox-like auto-layout block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutStyle>,
    /// Horizontal sizing mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing_h: Option<String>,
    /// Vertical sizing mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing_v: Option<String>,
    /// "hidden" when content is clipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,

    /// Set for vector art
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_svg_candidate: Option<bool>,
    /// How to export this node as an asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_hint: Option<String>,
    /// Originating component name, for instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    /// Originating component id, for instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    /// Set when a visible fill is an image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_image_fill: Option<bool>,

    /// Typography, for text nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
    /// Visible shadows and blurs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<EffectDescriptor>>,
    /// Property name -> bound variable name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_variables: Option<BTreeMap<String, String>>,

    /// Child records in source order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<StyleRecord>>,
}

impl NodeStyle {
    /// Create a record with only the mandatory fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            width: 0,
            height: 0,
            x: 0,
            y: 0,
            visible: None,
            opacity: None,
            rotation: None,
            fills: None,
            strokes: None,
            stroke_weight: None,
            stroke_align: None,
            border_radius: None,
            border_radii: None,
            layout: None,
            sizing_h: None,
            sizing_v: None,
            overflow: None,
            is_svg_candidate: None,
            export_hint: None,
            component_name: None,
            component_id: None,
            has_image_fill: None,
            text: None,
            effects: None,
            bound_variables: None,
            children: None,
        }
    }
}

/// Corner radii in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderRadii {
    /// Top-left
    pub tl: Scalar,
    /// Top-right
    pub tr: Scalar,
    /// Bottom-right
    pub br: Scalar,
    /// Bottom-left
    pub bl: Scalar,
}

/// Flex direction of an auto-layout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Horizontal flow
    Row,
    /// Vertical flow
    Column,
}

/// Four-sided padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Padding {
    /// Top
    pub top: Scalar,
    /// Right
    pub right: Scalar,
    /// Bottom
    pub bottom: Scalar,
    /// Left
    pub left: Scalar,
}

/// Auto-layout expressed as flexbox terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle {
    /// Flow direction
    pub direction: FlexDirection,
    /// Gap between children
    pub gap: Scalar,
    /// Padding
    pub padding: Padding,
    /// Primary axis alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_align: Option<String>,
    /// Counter axis alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_align: Option<String>,
    /// Whether children wrap
    pub wrap: bool,
}

/// A line-height or letter-spacing value with its unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricStyle {
    /// Numeric value
    pub value: Scalar,
    /// Unit tag (PIXELS, PERCENT)
    pub unit: String,
}

/// Typography of a text node.
///
/// `lineHeight`, `letterSpacing`, `textDecoration` and `textCase` serialize as
/// `null` rather than being omitted when they carry no information.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Text content
    pub content: String,
    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Scalar>,
    /// Font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font style name (e.g., "Bold")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Line height, when numeric
    pub line_height: Option<MetricStyle>,
    /// Letter spacing, when numeric
    pub letter_spacing: Option<MetricStyle>,
    /// Horizontal alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// Vertical alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
    /// Decoration other than NONE
    pub text_decoration: Option<String>,
    /// Case transform other than ORIGINAL
    pub text_case: Option<String>,
}

/// One gradient stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// Hex color
    pub color: String,
    /// Stop alpha
    pub opacity: Scalar,
    /// Position in `[0, 1]`
    pub position: Scalar,
}

/// Normalized fill or stroke layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintDescriptor {
    /// Flat color
    Solid {
        /// Hex color
        color: String,
        /// Layer opacity
        opacity: Scalar,
    },
    /// Linear or radial gradient
    Gradient {
        /// Gradient geometry
        gradient: GradientType,
        /// Ordered stops
        stops: Option<Vec<GradientStop>>,
    },
    /// Image fill
    Image {
        /// Fit mode
        scale_mode: Option<String>,
    },
    /// Paint type with no CSS mapping; only the source tag survives
    Unsupported {
        /// Source type tag
        paint_type: String,
    },
}

impl PaintDescriptor {
    /// Output type tag.
    pub fn type_tag(&self) -> String {
        match self {
            PaintDescriptor::Solid { .. } => "solid".to_string(),
            PaintDescriptor::Gradient { gradient, .. } => gradient_type_tag(gradient.as_str()),
            PaintDescriptor::Image { .. } => "image".to_string(),
            PaintDescriptor::Unsupported { paint_type } => paint_type.clone(),
        }
    }
}

/// CSS-style name of a gradient source tag: `GRADIENT_LINEAR` -> `linear-gradient`.
pub fn gradient_type_tag(source_tag: &str) -> String {
    format!(
        "{}-gradient",
        source_tag.to_lowercase().replacen("gradient_", "", 1)
    )
}

impl Serialize for PaintDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.type_tag())?;
        match self {
            PaintDescriptor::Solid { color, opacity } => {
                map.serialize_entry("color", color)?;
                map.serialize_entry("opacity", opacity)?;
            }
            PaintDescriptor::Gradient { stops, .. } => {
                if let Some(stops) = stops {
                    map.serialize_entry("stops", stops)?;
                }
            }
            PaintDescriptor::Image { scale_mode } => {
                if let Some(mode) = scale_mode {
                    map.serialize_entry("scaleMode", mode)?;
                }
            }
            PaintDescriptor::Unsupported { .. } => {}
        }
        map.end()
    }
}

/// Normalized shadow or blur.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectDescriptor {
    /// Box shadow
    Shadow {
        /// Inner shadow
        inset: bool,
        /// Horizontal offset
        x: Scalar,
        /// Vertical offset
        y: Scalar,
        /// Blur radius
        blur: Scalar,
        /// Spread distance
        spread: Scalar,
        /// Hex color
        color: String,
        /// Shadow alpha
        opacity: Scalar,
    },
    /// Filter or backdrop blur
    Blur {
        /// Background blur
        backdrop: bool,
        /// Blur radius
        radius: Option<Scalar>,
    },
    /// Effect type with no CSS mapping; only the source tag survives
    Unsupported {
        /// Source type tag
        effect_type: String,
    },
}

impl EffectDescriptor {
    /// Output type tag.
    pub fn type_tag(&self) -> &str {
        match self {
            EffectDescriptor::Shadow { inset: false, .. } => "box-shadow",
            EffectDescriptor::Shadow { inset: true, .. } => "box-shadow-inset",
            EffectDescriptor::Blur { backdrop: false, .. } => "blur",
            EffectDescriptor::Blur { backdrop: true, .. } => "backdrop-blur",
            EffectDescriptor::Unsupported { effect_type } => effect_type,
        }
    }
}

impl Serialize for EffectDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.type_tag())?;
        match self {
            EffectDescriptor::Shadow {
                inset,
                x,
                y,
                blur,
                spread,
                color,
                opacity,
            } => {
                map.serialize_entry("x", x)?;
                map.serialize_entry("y", y)?;
                map.serialize_entry("blur", blur)?;
                map.serialize_entry("spread", spread)?;
                map.serialize_entry("color", color)?;
                map.serialize_entry("opacity", opacity)?;
                map.serialize_entry("inset", inset)?;
            }
            EffectDescriptor::Blur { radius, .. } => {
                if let Some(radius) = radius {
                    map.serialize_entry("radius", radius)?;
                }
            }
            EffectDescriptor::Unsupported { .. } => {}
        }
        map.end()
    }
}
