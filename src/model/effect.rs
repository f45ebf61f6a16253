//! Visual effects: shadows and blurs.

use super::Color;

/// A 2D offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
}

/// Type-specific content of an effect.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectKind {
    /// Drop or inner shadow
    Shadow {
        /// True for an inner shadow
        inner: bool,
        /// Shadow offset
        offset: Option<Offset>,
        /// Blur radius
        radius: Option<f64>,
        /// Spread distance
        spread: Option<f64>,
        /// Shadow color, alpha included
        color: Color,
    },
    /// Layer or background blur
    Blur {
        /// True for a background (backdrop) blur
        background: bool,
        /// Blur radius
        radius: Option<f64>,
    },
    /// Any effect type without a dedicated variant
    Other(String),
}

impl EffectKind {
    /// Host type tag for this effect.
    pub fn type_tag(&self) -> &str {
        match self {
            EffectKind::Shadow { inner: false, .. } => "DROP_SHADOW",
            EffectKind::Shadow { inner: true, .. } => "INNER_SHADOW",
            EffectKind::Blur {
                background: false, ..
            } => "LAYER_BLUR",
            EffectKind::Blur {
                background: true, ..
            } => "BACKGROUND_BLUR",
            EffectKind::Other(tag) => tag,
        }
    }
}

/// A single effect applied to a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    /// Visibility flag; `None` means visible
    pub visible: Option<bool>,
    /// Type-specific content
    pub kind: EffectKind,
}

impl Effect {
    /// Create an effect with default visibility.
    pub fn new(kind: EffectKind) -> Self {
        Self {
            visible: None,
            kind,
        }
    }

    /// Create a drop shadow.
    pub fn drop_shadow(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self::new(EffectKind::Shadow {
            inner: false,
            offset: Some(Offset { x, y }),
            radius: Some(radius),
            spread: None,
            color,
        })
    }

    /// Create an inner shadow.
    pub fn inner_shadow(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self::new(EffectKind::Shadow {
            inner: true,
            offset: Some(Offset { x, y }),
            radius: Some(radius),
            spread: None,
            color,
        })
    }

    /// Create a layer blur.
    pub fn layer_blur(radius: f64) -> Self {
        Self::new(EffectKind::Blur {
            background: false,
            radius: Some(radius),
        })
    }

    /// Create a background blur.
    pub fn background_blur(radius: f64) -> Self {
        Self::new(EffectKind::Blur {
            background: true,
            radius: Some(radius),
        })
    }

    /// Mark the effect as hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = Some(false);
        self
    }

    /// Whether the effect is visible. A missing flag counts as visible.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}
