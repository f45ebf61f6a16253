//! Shadow and blur normalization.

use super::color::color_hex;
use super::record::{EffectDescriptor, Scalar};
use crate::model::{Effect, EffectKind};

/// Normalize an effect list.
///
/// Same policy as paints: `None` for absent or empty input, hidden effects
/// dropped, order kept.
pub fn normalize_effects(effects: Option<&[Effect]>) -> Option<Vec<EffectDescriptor>> {
    let effects = effects.filter(|e| !e.is_empty())?;
    Some(
        effects
            .iter()
            .filter(|e| e.is_visible())
            .map(normalize_effect)
            .collect(),
    )
}

/// Normalize a single effect, regardless of its visibility.
pub fn normalize_effect(effect: &Effect) -> EffectDescriptor {
    match &effect.kind {
        EffectKind::Shadow {
            inner,
            offset,
            radius,
            spread,
            color,
        } => {
            let offset = offset.unwrap_or_default();
            EffectDescriptor::Shadow {
                inset: *inner,
                x: Scalar(offset.x),
                y: Scalar(offset.y),
                blur: Scalar(radius.unwrap_or(0.0)),
                spread: Scalar(spread.unwrap_or(0.0)),
                color: color_hex(color),
                opacity: Scalar(color.a.unwrap_or(1.0)),
            }
        }
        EffectKind::Blur { background, radius } => EffectDescriptor::Blur {
            backdrop: *background,
            radius: radius.map(Scalar),
        },
        EffectKind::Other(tag) => {
            log::debug!("no CSS mapping for effect type {}", tag);
            EffectDescriptor::Unsupported {
                effect_type: tag.clone(),
            }
        }
    }
}
