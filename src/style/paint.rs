//! Fill and stroke normalization.

use super::color::color_hex;
use super::record::{GradientStop, PaintDescriptor, Scalar};
use crate::model::{GradientType, Paint, PaintKind};

/// Normalize a paint list.
///
/// Returns `None` for an absent or empty list. Otherwise hidden layers are
/// dropped and the rest keep their order, so a non-empty list whose layers
/// are all hidden yields `Some(vec![])`.
pub fn normalize_paints(paints: Option<&[Paint]>) -> Option<Vec<PaintDescriptor>> {
    let paints = paints.filter(|p| !p.is_empty())?;
    Some(
        paints
            .iter()
            .filter(|p| p.is_visible())
            .map(normalize_paint)
            .collect(),
    )
}

/// Normalize a single paint layer, regardless of its visibility.
pub fn normalize_paint(paint: &Paint) -> PaintDescriptor {
    match &paint.kind {
        PaintKind::Solid { color } => PaintDescriptor::Solid {
            color: color_hex(color),
            opacity: Scalar(paint.opacity.unwrap_or(1.0)),
        },
        PaintKind::Gradient {
            gradient: gradient @ (GradientType::Linear | GradientType::Radial),
            stops,
        } => PaintDescriptor::Gradient {
            gradient: *gradient,
            stops: stops.as_ref().map(|stops| {
                stops
                    .iter()
                    .map(|s| GradientStop {
                        color: color_hex(&s.color),
                        opacity: Scalar(s.color.a.unwrap_or(1.0)),
                        position: Scalar(s.position),
                    })
                    .collect()
            }),
        },
        PaintKind::Image { scale_mode } => PaintDescriptor::Image {
            scale_mode: scale_mode.clone(),
        },
        other => {
            log::debug!("no CSS mapping for paint type {}", other.type_tag());
            PaintDescriptor::Unsupported {
                paint_type: other.type_tag().to_string(),
            }
        }
    }
}
