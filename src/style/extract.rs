//! Recursive style extraction.

use rayon::prelude::*;

use super::effect::normalize_effects;
use super::options::ExtractOptions;
use super::paint::normalize_paints;
use super::record::{
    round_half_up, BorderRadii, FlexDirection, LayoutStyle, MetricStyle, NodeStyle, Padding,
    Scalar, StyleRecord, TextStyle, TruncatedNode,
};
use super::variables::extract_bound_variables;
use crate::error::Result;
use crate::host::{resolve_node, DesignHost};
use crate::model::{LayoutMode, Node, NodeKind, TextMetric, TextProperties};

/// Hint attached to vector art.
pub const SVG_EXPORT_HINT: &str = "Use SVG export to get inline SVG code for this node";

/// Hint attached to nodes with image fills.
pub const IMAGE_EXPORT_HINT: &str = "Use raw export to get this as PNG/SVG asset";

/// Resolve a node by id and extract its style tree.
pub fn extract_styles<H: DesignHost>(
    host: &H,
    id: &str,
    options: &ExtractOptions,
) -> Result<StyleRecord> {
    let node = resolve_node(host, id)?;
    Ok(extract_node(host, node, 0, options))
}

/// Extract several targets. Results keep the order of `ids`.
///
/// Extraction only reads the document, so with `options.parallel` the
/// targets are processed concurrently.
pub fn extract_batch<H, S>(
    host: &H,
    ids: &[S],
    options: &ExtractOptions,
) -> Vec<Result<StyleRecord>>
where
    H: DesignHost + Sync,
    S: AsRef<str> + Sync,
{
    if options.parallel {
        ids.par_iter()
            .map(|id| extract_styles(host, id.as_ref(), options))
            .collect()
    } else {
        ids.iter()
            .map(|id| extract_styles(host, id.as_ref(), options))
            .collect()
    }
}

/// Extract the style record of `node`, which sits at `depth` below the target.
pub fn extract_node<H: DesignHost>(
    host: &H,
    node: &Node,
    depth: usize,
    options: &ExtractOptions,
) -> StyleRecord {
    if depth > options.max_depth {
        log::debug!("node {} truncated at depth {}", node.id, depth);
        return StyleRecord::Truncated(TruncatedNode {
            id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.node_type.clone(),
            truncated: true,
        });
    }

    let mut style = NodeStyle::new(node.id.clone(), node.name.clone(), node.node_type.clone());
    style.width = round_half_up(node.geometry.width);
    style.height = round_half_up(node.geometry.height);
    style.x = round_half_up(node.geometry.x);
    style.y = round_half_up(node.geometry.y);

    apply_appearance(&mut style, node);
    apply_layout(&mut style, node);
    apply_kind(&mut style, node, options);

    style.effects = normalize_effects(node.effects.as_deref());
    style.bound_variables = extract_bound_variables(host, node.bound_variables.as_ref());

    if !node.children.is_empty() {
        style.children = Some(
            node.children
                .iter()
                .map(|child| extract_node(host, child, depth + 1, options))
                .collect(),
        );
    }

    StyleRecord::Node(Box::new(style))
}

fn apply_appearance(style: &mut NodeStyle, node: &Node) {
    if !node.visible {
        style.visible = Some(false);
    }
    style.opacity = node.opacity.filter(|&o| o != 1.0).map(Scalar);

    let rotation = node.geometry.rotation;
    if rotation != 0.0 && !rotation.is_nan() {
        style.rotation = Some(Scalar(rotation));
    }

    style.fills = normalize_paints(node.fills.as_deref());

    if node.strokes.as_ref().is_some_and(|s| !s.is_empty()) {
        style.strokes = normalize_paints(node.strokes.as_deref());
        style.stroke_weight = node.stroke_weight.map(Scalar);
        style.stroke_align = node.stroke_align.clone();
    }

    style.border_radius = node.corner_radius.filter(|&r| r > 0.0).map(Scalar);

    let radii = &node.corner_radii;
    if radii.any() {
        style.border_radii = Some(BorderRadii {
            tl: Scalar(radii.top_left),
            tr: Scalar(radii.top_right),
            br: Scalar(radii.bottom_right),
            bl: Scalar(radii.bottom_left),
        });
    }
}

fn apply_layout(style: &mut NodeStyle, node: &Node) {
    let layout = &node.auto_layout;
    let direction = match layout.mode {
        LayoutMode::None => None,
        LayoutMode::Horizontal => Some(FlexDirection::Row),
        LayoutMode::Vertical => Some(FlexDirection::Column),
    };

    if let Some(direction) = direction {
        let side = |v: Option<f64>| Scalar(v.unwrap_or(0.0));
        style.layout = Some(LayoutStyle {
            direction,
            gap: side(layout.item_spacing),
            padding: Padding {
                top: side(layout.padding_top),
                right: side(layout.padding_right),
                bottom: side(layout.padding_bottom),
                left: side(layout.padding_left),
            },
            primary_align: layout.primary_axis_align.clone(),
            counter_align: layout.counter_axis_align.clone(),
            wrap: layout.wrap,
        });
    }

    style.sizing_h = node.sizing_horizontal.clone();
    style.sizing_v = node.sizing_vertical.clone();

    if node.clips_content {
        style.overflow = Some("hidden".to_string());
    }
}

// The image hint is applied after the SVG hint and replaces it when a
// vector shape also has an image fill.
fn apply_kind(style: &mut NodeStyle, node: &Node, options: &ExtractOptions) {
    match &node.kind {
        NodeKind::VectorShape => {
            style.is_svg_candidate = Some(true);
            if options.include_hints {
                style.export_hint = Some(SVG_EXPORT_HINT.to_string());
            }
        }
        NodeKind::Instance {
            main_component: Some(component),
        } => {
            style.component_name = Some(component.name.clone());
            style.component_id = Some(component.id.clone());
        }
        _ => {}
    }

    if node.has_image_fill() {
        style.has_image_fill = Some(true);
        if options.include_hints {
            style.export_hint = Some(IMAGE_EXPORT_HINT.to_string());
        }
    }

    if let NodeKind::Text(text) = &node.kind {
        style.text = Some(text_style(text));
    }
}

fn metric_style(metric: Option<TextMetric>) -> Option<MetricStyle> {
    let metric = metric?;
    metric.value().map(|value| MetricStyle {
        value: Scalar(value),
        unit: metric.unit().to_string(),
    })
}

fn text_style(text: &TextProperties) -> TextStyle {
    TextStyle {
        content: text.characters.clone(),
        font_size: text.font_size.map(Scalar),
        font_family: text.font_name.as_ref().map(|f| f.family.clone()),
        font_weight: text.font_name.as_ref().map(|f| f.style.clone()),
        line_height: metric_style(text.line_height),
        letter_spacing: metric_style(text.letter_spacing),
        text_align: text.text_align_horizontal.clone(),
        vertical_align: text.text_align_vertical.clone(),
        text_decoration: text.text_decoration.clone().filter(|d| d != "NONE"),
        text_case: text.text_case.clone().filter(|c| c != "ORIGINAL"),
    }
}
