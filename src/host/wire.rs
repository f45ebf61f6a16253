//! Serde mirror of the host's JSON node format.
//!
//! Field names follow the host plugin API. Everything is optional here;
//! [`From<WireNode> for Node`] settles defaults and builds the typed model.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::model::{
    AutoLayout, Color, ColorStop, ComponentRef, CornerRadii, Effect, EffectKind, FontName,
    Geometry, GradientType, LayoutMode, Node, NodeKind, NodeType, Offset, Paint, PaintKind,
    TextMetric, TextProperties, Variable, VariableBinding,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireSnapshot {
    pub document: WireNode,
    #[serde(default)]
    pub variables: HashMap<String, Variable>,
    #[serde(default)]
    pub svg_exports: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct WireNode {
    id: String,
    name: String,
    #[serde(rename = "type")]
    node_type: String,
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    rotation: Option<f64>,
    visible: Option<bool>,
    opacity: Option<f64>,
    fills: Option<Vec<WirePaint>>,
    strokes: Option<Vec<WirePaint>>,
    stroke_weight: Option<f64>,
    stroke_align: Option<String>,
    corner_radius: Option<f64>,
    top_left_radius: Option<f64>,
    top_right_radius: Option<f64>,
    bottom_right_radius: Option<f64>,
    bottom_left_radius: Option<f64>,
    layout_mode: Option<String>,
    item_spacing: Option<f64>,
    padding_top: Option<f64>,
    padding_right: Option<f64>,
    padding_bottom: Option<f64>,
    padding_left: Option<f64>,
    primary_axis_align_items: Option<String>,
    counter_axis_align_items: Option<String>,
    layout_wrap: Option<String>,
    layout_sizing_horizontal: Option<String>,
    layout_sizing_vertical: Option<String>,
    clips_content: Option<bool>,
    effects: Option<Vec<WireEffect>>,
    bound_variables: Option<BTreeMap<String, serde_json::Value>>,
    characters: Option<String>,
    font_size: Option<f64>,
    font_name: Option<WireFontName>,
    line_height: Option<WireMetric>,
    letter_spacing: Option<WireMetric>,
    text_align_horizontal: Option<String>,
    text_align_vertical: Option<String>,
    text_decoration: Option<String>,
    text_case: Option<String>,
    main_component: Option<WireComponent>,
    children: Vec<WireNode>,
}

impl WireNode {
    pub fn is_anonymous(&self) -> bool {
        self.id.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
struct WireColor {
    r: f64,
    g: f64,
    b: f64,
    a: Option<f64>,
}

impl From<WireColor> for Color {
    fn from(c: WireColor) -> Self {
        Color {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireStop {
    color: WireColor,
    position: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePaint {
    #[serde(rename = "type")]
    paint_type: String,
    visible: Option<bool>,
    opacity: Option<f64>,
    color: Option<WireColor>,
    gradient_stops: Option<Vec<WireStop>>,
    scale_mode: Option<String>,
}

impl From<WirePaint> for Paint {
    fn from(p: WirePaint) -> Self {
        let kind = if p.paint_type == "SOLID" {
            PaintKind::Solid {
                color: p.color.unwrap_or_default().into(),
            }
        } else if let Some(gradient) = GradientType::from_tag(&p.paint_type) {
            PaintKind::Gradient {
                gradient,
                stops: p.gradient_stops.map(|stops| {
                    stops
                        .into_iter()
                        .map(|s| ColorStop::new(s.color.into(), s.position))
                        .collect()
                }),
            }
        } else if p.paint_type == "IMAGE" {
            PaintKind::Image {
                scale_mode: p.scale_mode,
            }
        } else {
            PaintKind::Other(p.paint_type)
        };

        Paint {
            visible: p.visible,
            opacity: p.opacity,
            kind,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireOffset {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct WireEffect {
    #[serde(rename = "type")]
    effect_type: String,
    visible: Option<bool>,
    offset: Option<WireOffset>,
    radius: Option<f64>,
    spread: Option<f64>,
    color: Option<WireColor>,
}

impl From<WireEffect> for Effect {
    fn from(e: WireEffect) -> Self {
        let kind = match e.effect_type.as_str() {
            "DROP_SHADOW" | "INNER_SHADOW" => EffectKind::Shadow {
                inner: e.effect_type == "INNER_SHADOW",
                offset: e.offset.map(|o| Offset { x: o.x, y: o.y }),
                radius: e.radius,
                spread: e.spread,
                color: e.color.unwrap_or_default().into(),
            },
            "LAYER_BLUR" | "BACKGROUND_BLUR" => EffectKind::Blur {
                background: e.effect_type == "BACKGROUND_BLUR",
                radius: e.radius,
            },
            _ => EffectKind::Other(e.effect_type),
        };

        Effect {
            visible: e.visible,
            kind,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireFontName {
    family: String,
    style: String,
}

#[derive(Debug, Deserialize)]
struct WireMetric {
    value: Option<f64>,
    unit: String,
}

impl From<WireMetric> for TextMetric {
    fn from(m: WireMetric) -> Self {
        match (m.unit.as_str(), m.value) {
            (_, None) | ("AUTO", _) => TextMetric::Auto,
            ("PERCENT", Some(v)) => TextMetric::Percent(v),
            (_, Some(v)) => TextMetric::Pixels(v),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireComponent {
    id: String,
    name: String,
}

fn convert_bindings(
    node_id: &str,
    raw: BTreeMap<String, serde_json::Value>,
) -> BTreeMap<String, VariableBinding> {
    raw.into_iter()
        .filter_map(
            |(property, value)| match serde_json::from_value::<VariableBinding>(value) {
                Ok(binding) => Some((property, binding)),
                Err(e) => {
                    log::debug!("node {}: ignoring binding for {}: {}", node_id, property, e);
                    None
                }
            },
        )
        .collect()
}

/// Run `f`, switching to a fresh stack segment when little stack remains.
pub(crate) fn grow_stack<R>(f: impl FnOnce() -> R) -> R {
    const RED_ZONE: usize = 64 * 1024;
    const STACK_SIZE: usize = 2 * 1024 * 1024;
    stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
}

impl From<WireNode> for Node {
    fn from(w: WireNode) -> Self {
        let node_type = NodeType::from(w.node_type.as_str());

        let kind = match &node_type {
            NodeType::Text => NodeKind::Text(TextProperties {
                characters: w.characters.unwrap_or_default(),
                font_size: w.font_size,
                font_name: w.font_name.map(|f| FontName::new(f.family, f.style)),
                line_height: w.line_height.map(TextMetric::from),
                letter_spacing: w.letter_spacing.map(TextMetric::from),
                text_align_horizontal: w.text_align_horizontal,
                text_align_vertical: w.text_align_vertical,
                text_decoration: w.text_decoration,
                text_case: w.text_case,
            }),
            NodeType::Instance => NodeKind::Instance {
                main_component: w.main_component.map(|c| ComponentRef::new(c.id, c.name)),
            },
            other => NodeKind::for_type(other),
        };

        let bound_variables = w.bound_variables.map(|raw| convert_bindings(&w.id, raw));

        Node {
            kind,
            geometry: Geometry {
                x: w.x.unwrap_or_default(),
                y: w.y.unwrap_or_default(),
                width: w.width.unwrap_or_default(),
                height: w.height.unwrap_or_default(),
                rotation: w.rotation.unwrap_or_default(),
            },
            visible: w.visible.unwrap_or(true),
            opacity: w.opacity,
            fills: w.fills.map(|v| v.into_iter().map(Paint::from).collect()),
            strokes: w.strokes.map(|v| v.into_iter().map(Paint::from).collect()),
            stroke_weight: w.stroke_weight,
            stroke_align: w.stroke_align,
            corner_radius: w.corner_radius,
            corner_radii: CornerRadii {
                top_left: w.top_left_radius.unwrap_or_default(),
                top_right: w.top_right_radius.unwrap_or_default(),
                bottom_right: w.bottom_right_radius.unwrap_or_default(),
                bottom_left: w.bottom_left_radius.unwrap_or_default(),
            },
            auto_layout: AutoLayout {
                mode: w
                    .layout_mode
                    .as_deref()
                    .map(LayoutMode::from_tag)
                    .unwrap_or_default(),
                item_spacing: w.item_spacing,
                padding_top: w.padding_top,
                padding_right: w.padding_right,
                padding_bottom: w.padding_bottom,
                padding_left: w.padding_left,
                primary_axis_align: w.primary_axis_align_items,
                counter_axis_align: w.counter_axis_align_items,
                wrap: w.layout_wrap.as_deref() == Some("WRAP"),
            },
            sizing_horizontal: w.layout_sizing_horizontal,
            sizing_vertical: w.layout_sizing_vertical,
            clips_content: w.clips_content.unwrap_or(false),
            effects: w.effects.map(|v| v.into_iter().map(Effect::from).collect()),
            bound_variables,
            children: w
                .children
                .into_iter()
                .map(|child| grow_stack(|| Node::from(child)))
                .collect(),
            id: w.id,
            name: w.name,
            node_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(json: &str) -> Node {
        serde_json::from_str::<WireNode>(json).unwrap().into()
    }

    #[test]
    fn test_minimal_node_defaults() {
        let n = node(r#"{"id":"1:1","name":"Box","type":"RECTANGLE"}"#);
        assert_eq!(n.node_type, NodeType::Rectangle);
        assert!(n.visible);
        assert!(n.opacity.is_none());
        assert_eq!(n.auto_layout.mode, LayoutMode::None);
        assert!(n.children.is_empty());
    }

    #[test]
    fn test_paint_conversion() {
        let n = node(
            r#"{"id":"1","name":"n","type":"FRAME","fills":[
                {"type":"SOLID","color":{"r":1,"g":0,"b":0},"opacity":0.5},
                {"type":"GRADIENT_LINEAR","gradientStops":[
                    {"color":{"r":0,"g":0,"b":1,"a":1},"position":0}
                ]},
                {"type":"IMAGE","scaleMode":"FILL","visible":false},
                {"type":"VIDEO"}
            ]}"#,
        );
        let fills = n.fills.unwrap();
        assert_eq!(fills.len(), 4);
        assert_eq!(fills[0].opacity, Some(0.5));
        assert!(matches!(
            fills[1].kind,
            PaintKind::Gradient { gradient: GradientType::Linear, stops: Some(ref stops) }
                if stops.len() == 1
        ));
        assert!(!fills[2].is_visible());
        assert_eq!(fills[3].kind, PaintKind::Other("VIDEO".to_string()));
    }

    #[test]
    fn test_text_conversion() {
        let n = node(
            r#"{"id":"2","name":"Label","type":"TEXT","characters":"Hi","fontSize":14,
                "fontName":{"family":"Inter","style":"Medium"},
                "lineHeight":{"unit":"AUTO"},
                "letterSpacing":{"value":2,"unit":"PERCENT"}}"#,
        );
        let text = n.text_properties().unwrap();
        assert_eq!(text.characters, "Hi");
        assert_eq!(text.font_size, Some(14.0));
        assert_eq!(text.line_height, Some(TextMetric::Auto));
        assert_eq!(text.letter_spacing, Some(TextMetric::Percent(2.0)));
    }

    #[test]
    fn test_malformed_binding_is_dropped() {
        let n = node(
            r#"{"id":"3","name":"n","type":"FRAME","boundVariables":{
                "itemSpacing":{"type":"VARIABLE_ALIAS","id":"v:1"},
                "componentProperties":{"nested":{"weird":true}}
            }}"#,
        );
        let bindings = n.bound_variables.unwrap();
        assert_eq!(bindings.len(), 1);
        assert!(bindings.contains_key("itemSpacing"));
    }

    #[test]
    fn test_instance_conversion() {
        let n = node(
            r#"{"id":"4","name":"Button","type":"INSTANCE",
                "mainComponent":{"id":"5:1","name":"Button/Primary"}}"#,
        );
        assert_eq!(n.main_component().unwrap().name, "Button/Primary");
    }
}
