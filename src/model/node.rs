//! Design nodes.

use super::{Effect, Paint, TextProperties, VariableBinding};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Node type tag as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Document root
    Document,
    /// Canvas page
    Page,
    /// Frame
    Frame,
    /// Group
    Group,
    /// Section
    Section,
    /// Main component
    Component,
    /// Set of component variants
    ComponentSet,
    /// Instance of a component
    Instance,
    /// Rectangle
    Rectangle,
    /// Ellipse
    Ellipse,
    /// Free-form vector network
    Vector,
    /// Star
    Star,
    /// Regular polygon
    Polygon,
    /// Boolean combination of shapes
    BooleanOperation,
    /// Line
    Line,
    /// Text
    Text,
    /// Export slice
    Slice,
    /// Any tag without a dedicated variant
    Other(String),
}

impl NodeType {
    /// Host type tag.
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Document => "DOCUMENT",
            NodeType::Page => "PAGE",
            NodeType::Frame => "FRAME",
            NodeType::Group => "GROUP",
            NodeType::Section => "SECTION",
            NodeType::Component => "COMPONENT",
            NodeType::ComponentSet => "COMPONENT_SET",
            NodeType::Instance => "INSTANCE",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::Vector => "VECTOR",
            NodeType::Star => "STAR",
            NodeType::Polygon => "POLYGON",
            NodeType::BooleanOperation => "BOOLEAN_OPERATION",
            NodeType::Line => "LINE",
            NodeType::Text => "TEXT",
            NodeType::Slice => "SLICE",
            NodeType::Other(tag) => tag,
        }
    }

    /// Whether nodes of this type are vector art best exported as SVG.
    pub fn is_vector_shape(&self) -> bool {
        matches!(
            self,
            NodeType::Vector
                | NodeType::Star
                | NodeType::Polygon
                | NodeType::BooleanOperation
                | NodeType::Line
        )
    }
}

impl From<&str> for NodeType {
    fn from(tag: &str) -> Self {
        match tag {
            "DOCUMENT" => NodeType::Document,
            "PAGE" => NodeType::Page,
            "FRAME" => NodeType::Frame,
            "GROUP" => NodeType::Group,
            "SECTION" => NodeType::Section,
            "COMPONENT" => NodeType::Component,
            "COMPONENT_SET" => NodeType::ComponentSet,
            "INSTANCE" => NodeType::Instance,
            "RECTANGLE" => NodeType::Rectangle,
            "ELLIPSE" => NodeType::Ellipse,
            "VECTOR" => NodeType::Vector,
            "STAR" => NodeType::Star,
            "POLYGON" => NodeType::Polygon,
            "BOOLEAN_OPERATION" => NodeType::BooleanOperation,
            "LINE" => NodeType::Line,
            "TEXT" => NodeType::Text,
            "SLICE" => NodeType::Slice,
            other => NodeType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Reference to the component an instance was created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef {
    /// Component identifier
    pub id: String,
    /// Component name
    pub name: String,
}

impl ComponentRef {
    /// Create a component reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Data that only some node types carry.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Text node
    Text(TextProperties),
    /// Component instance
    Instance {
        /// Originating component, if the host could resolve it
        main_component: Option<ComponentRef>,
    },
    /// Vector art (vector, star, polygon, boolean operation, line)
    VectorShape,
    /// Every other node type
    Generic,
}

impl NodeKind {
    /// Default kind data for a node type.
    pub fn for_type(node_type: &NodeType) -> Self {
        match node_type {
            NodeType::Text => NodeKind::Text(TextProperties::default()),
            NodeType::Instance => NodeKind::Instance {
                main_component: None,
            },
            t if t.is_vector_shape() => NodeKind::VectorShape,
            _ => NodeKind::Generic,
        }
    }
}

/// Resolved position, size and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    /// X position relative to the parent
    pub x: f64,
    /// Y position relative to the parent
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
    /// Rotation in degrees
    pub rotation: f64,
}

/// Per-corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    /// Top-left radius
    pub top_left: f64,
    /// Top-right radius
    pub top_right: f64,
    /// Bottom-right radius
    pub bottom_right: f64,
    /// Bottom-left radius
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Whether any corner is rounded.
    pub fn any(&self) -> bool {
        self.top_left != 0.0
            || self.top_right != 0.0
            || self.bottom_right != 0.0
            || self.bottom_left != 0.0
    }
}

/// Auto-layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// No auto-layout
    #[default]
    None,
    /// Children flow horizontally
    Horizontal,
    /// Children flow vertically
    Vertical,
}

impl LayoutMode {
    /// Parse a host layout-mode tag. Unknown non-NONE modes count as vertical.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "NONE" | "" => LayoutMode::None,
            "HORIZONTAL" => LayoutMode::Horizontal,
            _ => LayoutMode::Vertical,
        }
    }
}

/// Auto-layout parameters. Only meaningful when the layout mode is not `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AutoLayout {
    /// Flow direction
    pub mode: LayoutMode,
    /// Space between children
    pub item_spacing: Option<f64>,
    /// Top padding
    pub padding_top: Option<f64>,
    /// Right padding
    pub padding_right: Option<f64>,
    /// Bottom padding
    pub padding_bottom: Option<f64>,
    /// Left padding
    pub padding_left: Option<f64>,
    /// Primary axis alignment (MIN, CENTER, MAX, SPACE_BETWEEN)
    pub primary_axis_align: Option<String>,
    /// Counter axis alignment (MIN, CENTER, MAX, BASELINE)
    pub counter_axis_align: Option<String>,
    /// Whether children wrap onto new lines
    pub wrap: bool,
}

impl AutoLayout {
    /// Create an auto-layout with the given direction and no spacing.
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the gap between children.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = Some(spacing);
        self
    }

    /// Set the same padding on all four sides.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_top = Some(padding);
        self.padding_right = Some(padding);
        self.padding_bottom = Some(padding);
        self.padding_left = Some(padding);
        self
    }
}

/// A node of the design document.
///
/// Nodes are owned by the host document; extraction only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node identifier (e.g., "1:234")
    pub id: String,
    /// Display name
    pub name: String,
    /// Type tag
    pub node_type: NodeType,
    /// Type-specific data
    pub kind: NodeKind,
    /// Position, size and rotation
    pub geometry: Geometry,
    /// Visibility flag
    pub visible: bool,
    /// Layer opacity; `None` when the node type has none
    pub opacity: Option<f64>,
    /// Fill layers
    pub fills: Option<Vec<Paint>>,
    /// Stroke layers
    pub strokes: Option<Vec<Paint>>,
    /// Stroke weight; `None` when mixed
    pub stroke_weight: Option<f64>,
    /// Stroke alignment (INSIDE, OUTSIDE, CENTER)
    pub stroke_align: Option<String>,
    /// Uniform corner radius; `None` when mixed or not applicable
    pub corner_radius: Option<f64>,
    /// Per-corner radii
    pub corner_radii: CornerRadii,
    /// Auto-layout parameters
    pub auto_layout: AutoLayout,
    /// Horizontal sizing mode (FIXED, HUG, FILL)
    pub sizing_horizontal: Option<String>,
    /// Vertical sizing mode (FIXED, HUG, FILL)
    pub sizing_vertical: Option<String>,
    /// Whether content outside the node's bounds is clipped
    pub clips_content: bool,
    /// Shadows and blurs
    pub effects: Option<Vec<Effect>>,
    /// Property bindings to variables
    pub bound_variables: Option<BTreeMap<String, VariableBinding>>,
    /// Child nodes in paint order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with the given identity and default attributes.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        let kind = NodeKind::for_type(&node_type);
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            kind,
            geometry: Geometry::default(),
            visible: true,
            opacity: None,
            fills: None,
            strokes: None,
            stroke_weight: None,
            stroke_align: None,
            corner_radius: None,
            corner_radii: CornerRadii::default(),
            auto_layout: AutoLayout::default(),
            sizing_horizontal: None,
            sizing_vertical: None,
            clips_content: false,
            effects: None,
            bound_variables: None,
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(id: impl Into<String>, name: impl Into<String>, text: TextProperties) -> Self {
        let mut node = Self::new(id, name, NodeType::Text);
        node.kind = NodeKind::Text(text);
        node
    }

    /// Create an instance node of the given component.
    pub fn instance(
        id: impl Into<String>,
        name: impl Into<String>,
        component: Option<ComponentRef>,
    ) -> Self {
        let mut node = Self::new(id, name, NodeType::Instance);
        node.kind = NodeKind::Instance {
            main_component: component,
        };
        node
    }

    /// Set the position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.geometry.x = x;
        self.geometry.y = y;
        self
    }

    /// Set the size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.geometry.width = width;
        self.geometry.height = height;
        self
    }

    /// Append a fill layer.
    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.get_or_insert_with(Vec::new).push(paint);
        self
    }

    /// Append a stroke layer with the given weight.
    pub fn with_stroke(mut self, paint: Paint, weight: f64) -> Self {
        self.strokes.get_or_insert_with(Vec::new).push(paint);
        self.stroke_weight = Some(weight);
        self
    }

    /// Append an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.get_or_insert_with(Vec::new).push(effect);
        self
    }

    /// Set the auto-layout parameters.
    pub fn with_auto_layout(mut self, layout: AutoLayout) -> Self {
        self.auto_layout = layout;
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Text properties, for text nodes.
    pub fn text_properties(&self) -> Option<&TextProperties> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Originating component, for instance nodes.
    pub fn main_component(&self) -> Option<&ComponentRef> {
        match &self.kind {
            NodeKind::Instance { main_component } => main_component.as_ref(),
            _ => None,
        }
    }

    /// Whether any visible fill is an image.
    pub fn has_image_fill(&self) -> bool {
        self.fills
            .as_deref()
            .is_some_and(|fills| fills.iter().any(|f| f.is_visible() && f.is_image()))
    }
}
